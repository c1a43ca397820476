// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection-change listeners.
//!
//! A control notifies two independent listeners on every committed change:
//!
//! - a [`SelectionDelegate`], held as a non-owning [`Weak`] reference so the
//!   delegate's owner controls its lifetime; a dropped delegate is skipped;
//! - a closure handler, owned by the control.
//!
//! Both receive the control mutably and may insert, remove, or select
//! segments. Geometry is fully updated before either is called. While the
//! handler runs it is detached from the control, so changes it makes do not
//! re-enter it; once it returns it is called again for the latest of those
//! changes, until a call commits nothing new.

use alloc::boxed::Box;
use alloc::rc::Weak;

use crate::SegmentedControl;

/// Receives selection-change notifications from a [`SegmentedControl`].
pub trait SelectionDelegate {
    /// Called after the selected segment changed.
    ///
    /// Read the new selection from
    /// [`SegmentedControl::selected_segment_index`].
    fn did_select_segment(&self, control: &mut SegmentedControl);
}

/// Closure invoked after the selected segment changed.
pub type SelectionHandler = Box<dyn FnMut(&mut SegmentedControl)>;

/// The control's two listener slots.
#[derive(Default)]
pub(crate) struct Listeners {
    delegate: Option<Weak<dyn SelectionDelegate>>,
    handler: Option<SelectionHandler>,
    /// Bumped whenever the handler slot is written, so a handler that replaces
    /// or clears itself is not restored afterwards.
    handler_generation: u64,
    handler_running: bool,
    handler_pending: bool,
}

impl Listeners {
    pub(crate) fn set_delegate(&mut self, delegate: Option<Weak<dyn SelectionDelegate>>) {
        self.delegate = delegate;
    }

    pub(crate) fn set_handler(&mut self, handler: Option<SelectionHandler>) {
        self.handler = handler;
        self.handler_generation = self.handler_generation.wrapping_add(1);
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("delegate", &self.delegate.is_some())
            .field("handler", &self.handler.is_some())
            .field("handler_generation", &self.handler_generation)
            .field("handler_running", &self.handler_running)
            .field("handler_pending", &self.handler_pending)
            .finish()
    }
}

impl SegmentedControl {
    /// Notifies the delegate and handler of a committed change.
    pub(crate) fn notify_selection_changed(&mut self) {
        if let Some(delegate) = self.listeners.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.did_select_segment(self);
        }

        if self.listeners.handler_running {
            self.listeners.handler_pending = true;
            return;
        }
        while let Some(mut handler) = self.listeners.handler.take() {
            let generation = self.listeners.handler_generation;
            self.listeners.handler_running = true;
            self.listeners.handler_pending = false;
            handler(self);
            self.listeners.handler_running = false;
            if self.listeners.handler_generation == generation {
                self.listeners.handler = Some(handler);
            }
            if !core::mem::take(&mut self.listeners.handler_pending) {
                break;
            }
        }
    }
}
