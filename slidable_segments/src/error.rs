// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when selecting a segment that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectError {
    /// The index is not below the number of segments.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of segments at the time of the request.
        count: usize,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count: 0 } => {
                write!(f, "cannot select segment {index}: the control has no segments")
            }
            Self::OutOfRange { index, count } => write!(
                f,
                "cannot select segment {index}: only {count} segments exist"
            ),
        }
    }
}

impl core::error::Error for SelectError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_mentions_index_and_count() {
        let err = SelectError::OutOfRange { index: 5, count: 3 };
        assert_eq!(
            err.to_string(),
            "cannot select segment 5: only 3 segments exist"
        );
        let empty = SelectError::OutOfRange { index: 0, count: 0 };
        assert_eq!(
            empty.to_string(),
            "cannot select segment 0: the control has no segments"
        );
    }
}
