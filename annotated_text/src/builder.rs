// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::annotated_string::{AnnotatedString, Annotation};
use crate::error::Error;

/// An annotation opened by `push_annotation` and not yet closed.
#[derive(Clone, Debug)]
struct OpenAnnotation {
    scope: String,
    tag: String,
    start: usize,
}

/// A mutable accumulator of text and annotations.
///
/// The builder is a thread-confined scratchpad: it is mutated by its owner and
/// frozen into an immutable [`AnnotatedString`] with [`build`]. Freezing takes a
/// snapshot; the builder remains usable and later mutation does not affect
/// values already returned.
///
/// [`build`]: Self::build
#[derive(Debug, Default)]
pub struct AnnotatedStringBuilder {
    text: String,
    annotations: Vec<Annotation>,
    open: SmallVec<[OpenAnnotation; 4]>,
}

impl AnnotatedStringBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with capacity for `capacity` bytes of text.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            annotations: Vec::new(),
            open: SmallVec::new(),
        }
    }

    /// Returns the current length of the accumulated text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if no text has been accumulated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends plain text. Has no effect on annotations.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends an [`AnnotatedString`], carrying its annotations along.
    ///
    /// Every incoming annotation range is re-based by the builder's current
    /// length, so the annotations cover the same characters they covered in
    /// `other`.
    pub fn append_annotated(&mut self, other: &AnnotatedString) {
        let base = self.text.len();
        self.text.push_str(other.as_str());
        for annotation in other.annotations_iter() {
            self.annotations.push(Annotation {
                scope: annotation.scope.clone(),
                tag: annotation.tag.clone(),
                range: annotation.range.start + base..annotation.range.end + base,
            });
        }
    }

    /// Attaches `tag` in `scope` over an explicit byte `range`.
    ///
    /// The range must satisfy `start <= end`, lie within the accumulated text,
    /// and fall on UTF-8 character boundaries.
    pub fn add_annotation(
        &mut self,
        scope: impl Into<String>,
        tag: impl Into<String>,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.check_range(&range)?;
        self.annotations.push(Annotation {
            scope: scope.into(),
            tag: tag.into(),
            range,
        });
        Ok(())
    }

    /// Opens an annotation at the current end of the text.
    ///
    /// The returned handle identifies the annotation for [`pop_to`]. Open
    /// annotations form a stack; [`pop`] closes the most recently opened one.
    ///
    /// [`pop`]: Self::pop
    /// [`pop_to`]: Self::pop_to
    pub fn push_annotation(&mut self, scope: impl Into<String>, tag: impl Into<String>) -> usize {
        let handle = self.open.len();
        self.open.push(OpenAnnotation {
            scope: scope.into(),
            tag: tag.into(),
            start: self.text.len(),
        });
        handle
    }

    /// Closes the most recently opened annotation at the current text length.
    pub fn pop(&mut self) -> Result<(), Error> {
        let open = self.open.pop().ok_or(Error::NoOpenAnnotation)?;
        self.close(open);
        Ok(())
    }

    /// Closes the annotation identified by `handle`, along with every
    /// annotation opened after it.
    pub fn pop_to(&mut self, handle: usize) -> Result<(), Error> {
        if handle >= self.open.len() {
            return Err(Error::InvalidHandle {
                handle,
                open: self.open.len(),
            });
        }
        while self.open.len() > handle {
            // The stack is non-empty by the check above.
            let open = self.open.pop().ok_or(Error::NoOpenAnnotation)?;
            self.close(open);
        }
        Ok(())
    }

    /// Returns the number of annotations currently open.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Freezes the accumulated text and annotations into an [`AnnotatedString`].
    ///
    /// Annotations still open at this point are emitted as ranges extending to
    /// the current end of the text; they remain open in the builder. The
    /// snapshot is independent of the builder, which stays usable.
    pub fn build(&self) -> AnnotatedString {
        let mut annotations = self.annotations.clone();
        for open in &self.open {
            annotations.push(Annotation {
                scope: open.scope.clone(),
                tag: open.tag.clone(),
                range: open.start..self.text.len(),
            });
        }
        AnnotatedString::from_parts(self.text.clone(), annotations)
    }

    fn close(&mut self, open: OpenAnnotation) {
        self.annotations.push(Annotation {
            scope: open.scope,
            tag: open.tag,
            range: open.start..self.text.len(),
        });
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(Error::InvalidBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for index in [range.start, range.end] {
            if !self.text.is_char_boundary(index) {
                return Err(Error::NotOnCharBoundary { index });
            }
        }
        Ok(())
    }
}
