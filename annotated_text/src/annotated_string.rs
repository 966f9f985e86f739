// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

/// A string-valued property attached to a byte range of the text.
///
/// The `scope` namespaces the annotation so that unrelated producers can
/// annotate the same text without their tags colliding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// The namespace this annotation belongs to.
    pub scope: String,
    /// The string value attached to the range.
    pub tag: String,
    /// The byte range the annotation covers. May be empty.
    pub range: Range<usize>,
}

/// A frozen block of text with string annotations attached to ranges within it.
///
/// Values are produced by [`AnnotatedStringBuilder::build`] and are immutable
/// afterwards; they can be shared and queried freely.
///
/// [`AnnotatedStringBuilder::build`]: crate::AnnotatedStringBuilder::build
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotatedString {
    text: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedString {
    /// Creates an `AnnotatedString` with no annotations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    pub(crate) fn from_parts(text: String, annotations: Vec<Annotation>) -> Self {
        Self { text, annotations }
    }

    /// Borrows the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over all annotations, in the order they were attached.
    pub fn annotations_iter(&self) -> impl ExactSizeIterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Returns the number of annotations attached to the text.
    #[inline]
    pub fn annotations_len(&self) -> usize {
        self.annotations.len()
    }

    /// Iterates over the annotations in `scope` that intersect `range`.
    ///
    /// An empty annotation (one whose range has zero length) is reported when
    /// its position lies within `range`, so a range opened and immediately
    /// closed at the same offset remains observable.
    ///
    /// Annotations are yielded in the order they were attached.
    pub fn annotations<'a>(
        &'a self,
        scope: &'a str,
        range: Range<usize>,
    ) -> impl Iterator<Item = &'a Annotation> {
        self.annotations.iter().filter(move |annotation| {
            annotation.scope == scope && intersects(&annotation.range, &range)
        })
    }
}

fn intersects(annotation: &Range<usize>, query: &Range<usize>) -> bool {
    if annotation.is_empty() {
        query.start <= annotation.start && annotation.start <= query.end
    } else {
        annotation.start < query.end && annotation.end > query.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn annotation(scope: &str, tag: &str, range: Range<usize>) -> Annotation {
        Annotation {
            scope: scope.into(),
            tag: tag.into(),
            range,
        }
    }

    #[test]
    fn scoped_query_filters_foreign_scopes() {
        let text = AnnotatedString::from_parts(
            "Hello world".into(),
            vec![
                annotation("a", "one", 0..5),
                annotation("b", "two", 0..5),
                annotation("a", "three", 6..11),
            ],
        );
        let tags: Vec<_> = text.annotations("a", 0..text.len()).map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, ["one", "three"]);
    }

    #[test]
    fn query_respects_range_intersection() {
        let text = AnnotatedString::from_parts(
            "Hello world".into(),
            vec![
                annotation("a", "head", 0..5),
                annotation("a", "tail", 6..11),
            ],
        );
        let tags: Vec<_> = text.annotations("a", 0..5).map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, ["head"]);
        // Touching at an endpoint is not an intersection for non-empty ranges.
        let tags: Vec<_> = text.annotations("a", 5..6).map(|a| a.tag.as_str()).collect();
        assert!(tags.is_empty());
    }

    #[test]
    fn empty_annotation_is_reported_within_query_range() {
        let text = AnnotatedString::from_parts(
            "Hello".into(),
            vec![annotation("a", "marker", 3..3)],
        );
        assert_eq!(text.annotations("a", 0..5).count(), 1);
        assert_eq!(text.annotations("a", 3..3).count(), 1);
        assert_eq!(text.annotations("a", 4..5).count(), 0);
    }
}
