// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported by annotation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The provided range had `start > end`.
    InvalidRange {
        /// The start byte index provided by the caller.
        start: usize,
        /// The end byte index provided by the caller.
        end: usize,
    },

    /// Range indices were out of bounds relative to the text length.
    InvalidBounds {
        /// The start byte index provided by the caller.
        start: usize,
        /// The end byte index provided by the caller.
        end: usize,
        /// The length in bytes of the text at the time of failure.
        len: usize,
    },

    /// A range endpoint was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary {
        /// The offending byte index.
        index: usize,
    },

    /// `pop` was called with no annotation open.
    NoOpenAnnotation,

    /// A handle passed to `pop_to` did not identify an open annotation.
    InvalidHandle {
        /// The handle provided by the caller.
        handle: usize,
        /// The number of annotations open at the time of failure.
        open: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            Self::InvalidBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for len {len}")
            }
            Self::NotOnCharBoundary { index } => {
                write!(f, "index {index} not on a UTF-8 character boundary")
            }
            Self::NoOpenAnnotation => write!(f, "pop with no open annotation"),
            Self::InvalidHandle { handle, open } => {
                write!(f, "handle {handle} does not identify an open annotation ({open} open)")
            }
        }
    }
}

impl core::error::Error for Error {}
