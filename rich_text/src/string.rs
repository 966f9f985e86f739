// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable rich text value and its builder.

use core::ops::{Add, Range};

use annotated_text::{AnnotatedString, AnnotatedStringBuilder, Error};
use uuid::Uuid;

use crate::format::{
    Format, FormatObject, FormatObjects, FORMAT_ANNOTATION_SCOPE, INLINE_CONTENT_SCOPE,
    REPLACEMENT_CHAR,
};
use crate::inline_content::InlineContent;

/// An immutable run of rich text: plain text plus format annotations and a
/// table of stateful format instances.
///
/// Values are produced by [`Builder::to_rich_text_string`] (or the
/// [`build`](Self::build) convenience) and are deeply immutable afterwards:
/// they can be cloned, shared across threads, and resolved concurrently.
///
/// Two values can be concatenated with `+`, which re-bases the right operand's
/// annotation ranges past the left operand's text; neither operand is
/// modified.
///
/// ## Example
///
/// ```
/// use rich_text::{Format, RichTextString};
///
/// let text = RichTextString::build(|b| {
///     b.append("Hello ");
///     b.with_format(Format::Bold, |b| b.append("world")).unwrap();
///     b.append("!");
/// });
/// assert_eq!(text.text(), "Hello world!");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RichTextString {
    pub(crate) tagged: AnnotatedString,
    pub(crate) format_objects: FormatObjects,
}

impl RichTextString {
    /// Builds a value by applying `f` to a fresh [`Builder`].
    pub fn build(f: impl FnOnce(&mut Builder)) -> Self {
        let mut builder = Builder::new();
        f(&mut builder);
        builder.to_rich_text_string()
    }

    /// Borrows the plain text, placeholder characters included.
    #[inline]
    pub fn text(&self) -> &str {
        self.tagged.as_str()
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.tagged.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty()
    }

    /// Borrows the underlying annotated text.
    #[inline]
    pub fn annotated(&self) -> &AnnotatedString {
        &self.tagged
    }

    /// Borrows the format object table.
    #[inline]
    pub fn format_objects(&self) -> &FormatObjects {
        &self.format_objects
    }
}

impl Add for &RichTextString {
    type Output = RichTextString;

    fn add(self, other: &RichTextString) -> RichTextString {
        let mut builder = Builder::with_capacity(self.len() + other.len());
        builder.append_rich(self);
        builder.append_rich(other);
        builder.to_rich_text_string()
    }
}

impl Add for RichTextString {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

/// A handle to a format range opened by [`Builder::push_format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatHandle(usize);

/// A mutable accumulator producing [`RichTextString`] values.
///
/// A builder is a thread-confined scratchpad; freeze it with
/// [`to_rich_text_string`], which snapshots the current state. The builder
/// stays usable afterwards, and later mutation never affects values already
/// returned.
///
/// [`to_rich_text_string`]: Self::to_rich_text_string
#[derive(Debug, Default)]
pub struct Builder {
    annotated: AnnotatedStringBuilder,
    format_objects: FormatObjects,
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with capacity for `capacity` bytes of text.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            annotated: AnnotatedStringBuilder::with_capacity(capacity),
            format_objects: FormatObjects::new(),
        }
    }

    /// Returns the current length of the accumulated text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.annotated.len()
    }

    /// Returns `true` if no text has been accumulated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.annotated.is_empty()
    }

    /// Appends plain text.
    pub fn append(&mut self, text: &str) {
        self.annotated.append(text);
    }

    /// Appends another rich text value.
    ///
    /// The other value's annotation ranges are re-based past the text already
    /// accumulated here, and its format object table is merged into this one.
    /// Ids are globally unique, so key collisions do not arise in practice;
    /// if one is ever forced, the incoming entry wins.
    pub fn append_rich(&mut self, other: &RichTextString) {
        self.annotated.append_annotated(&other.tagged);
        for (key, object) in &other.format_objects {
            self.format_objects.insert(key.clone(), object.clone());
        }
    }

    /// Applies `format` over an explicit byte `range` of the accumulated text.
    pub fn add_format(&mut self, format: Format, range: Range<usize>) -> Result<(), Error> {
        let tag = format.register_tag(&mut self.format_objects);
        self.annotated
            .add_annotation(FORMAT_ANNOTATION_SCOPE, tag, range)
    }

    /// Opens a format range at the current end of the text.
    ///
    /// The range stays open until closed by [`pop`] or [`pop_to`]; several
    /// ranges may be open at once, forming a stack.
    ///
    /// [`pop`]: Self::pop
    /// [`pop_to`]: Self::pop_to
    pub fn push_format(&mut self, format: Format) -> FormatHandle {
        let tag = format.register_tag(&mut self.format_objects);
        FormatHandle(self.annotated.push_annotation(FORMAT_ANNOTATION_SCOPE, tag))
    }

    /// Closes the most recently opened format range at the current length.
    pub fn pop(&mut self) -> Result<(), Error> {
        self.annotated.pop()
    }

    /// Closes the format range identified by `handle`, along with every range
    /// opened after it.
    pub fn pop_to(&mut self, handle: FormatHandle) -> Result<(), Error> {
        self.annotated.pop_to(handle.0)
    }

    /// Applies `format` to everything `f` appends.
    ///
    /// Equivalent to [`push_format`], running `f`, then closing the range.
    ///
    /// [`push_format`]: Self::push_format
    pub fn with_format(
        &mut self,
        format: Format,
        f: impl FnOnce(&mut Self),
    ) -> Result<(), Error> {
        let handle = self.push_format(format);
        f(self);
        self.pop_to(handle)
    }

    /// Appends inline `content`, occupying one replacement character.
    pub fn append_inline_content(&mut self, content: InlineContent) {
        self.append_inline_content_with_text(REPLACEMENT_CHAR, content);
    }

    /// Appends inline `content` with caller-supplied alternate text.
    ///
    /// The alternate text stands in for the content in the plain text
    /// projection (and for accessibility); the content itself is stored in the
    /// format object table under a fresh `"inline:"`-prefixed key.
    pub fn append_inline_content_with_text(&mut self, alternate_text: &str, content: InlineContent) {
        let id = Uuid::new_v4().to_string();
        self.format_objects
            .insert(format!("inline:{id}"), FormatObject::InlineContent(content));
        let start = self.annotated.len();
        self.annotated.append(alternate_text);
        let result = self
            .annotated
            .add_annotation(INLINE_CONTENT_SCOPE, id, start..self.annotated.len());
        debug_assert!(result.is_ok(), "placeholder range is valid by construction");
    }

    /// Provides access to the underlying annotated text builder, which can be
    /// used to attach arbitrary annotations, mixed with formats from this
    /// builder.
    pub fn annotated(&mut self) -> &mut AnnotatedStringBuilder {
        &mut self.annotated
    }

    /// Freezes the current state into a [`RichTextString`].
    ///
    /// Format ranges still open are emitted as extending to the current end of
    /// the text. The returned value holds defensive copies; the builder stays
    /// usable and later mutation does not affect it.
    pub fn to_rich_text_string(&self) -> RichTextString {
        RichTextString {
            tagged: self.annotated.build(),
            format_objects: self.format_objects.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotated_text::Error;

    #[test]
    fn text_is_appended_in_order() {
        let text = RichTextString::build(|b| {
            b.append("one");
            b.append(" two");
            b.append(" three");
        });
        assert_eq!(text.text(), "one two three");
        assert_eq!(text.len(), 13);
    }

    #[test]
    fn push_format_then_pop_covers_the_text_between() {
        let text = RichTextString::build(|b| {
            b.append("Hello ");
            b.push_format(Format::Bold);
            b.append("world");
            b.pop().unwrap();
            b.append("!");
        });

        let ranges: Vec<_> = text
            .annotated()
            .annotations(FORMAT_ANNOTATION_SCOPE, 0..text.len())
            .map(|a| (a.tag.as_str(), a.range.clone()))
            .collect();
        assert_eq!(ranges, [("foo", 6..11)]);
    }

    #[test]
    fn push_then_immediate_pop_yields_empty_range_at_push_point() {
        let text = RichTextString::build(|b| {
            b.append("ab");
            b.push_format(Format::Italic);
            b.pop().unwrap();
        });
        let ranges: Vec<_> = text
            .annotated()
            .annotations(FORMAT_ANNOTATION_SCOPE, 0..text.len())
            .map(|a| a.range.clone())
            .collect();
        assert_eq!(ranges, [2..2]);
    }

    #[test]
    fn with_format_matches_explicit_push_pop() {
        let explicit = RichTextString::build(|b| {
            b.append("a ");
            let handle = b.push_format(Format::Code);
            b.append("snippet");
            b.pop_to(handle).unwrap();
        });
        let scoped = RichTextString::build(|b| {
            b.append("a ");
            b.with_format(Format::Code, |b| b.append("snippet")).unwrap();
        });
        assert_eq!(explicit, scoped);
    }

    #[test]
    fn add_format_validates_the_range() {
        let mut builder = Builder::new();
        builder.append("short");
        assert_eq!(
            builder.add_format(Format::Bold, 0..9),
            Err(Error::InvalidBounds {
                start: 0,
                end: 9,
                len: 5
            })
        );
        assert!(builder.add_format(Format::Bold, 0..5).is_ok());
    }

    #[test]
    fn link_formats_land_in_the_object_table() {
        let text = RichTextString::build(|b| {
            b.with_format(Format::link(|| {}), |b| b.append("click")).unwrap();
        });
        assert_eq!(text.format_objects().len(), 1);

        let annotation = text
            .annotated()
            .annotations(FORMAT_ANNOTATION_SCOPE, 0..text.len())
            .next()
            .unwrap();
        let decoded = Format::find_tag(&annotation.tag, text.format_objects()).unwrap();
        assert!(matches!(decoded, Format::Link(_)));
    }

    #[test]
    fn concatenation_shifts_the_right_operands_ranges() {
        let left = RichTextString::build(|b| {
            b.with_format(Format::Bold, |b| b.append("Hello")).unwrap();
            b.append(" ");
        });
        let right = RichTextString::build(|b| {
            b.with_format(Format::Italic, |b| b.append("world")).unwrap();
        });

        let combined = &left + &right;
        assert_eq!(combined.text(), "Hello world");
        assert_eq!(combined.len(), left.len() + right.len());

        let spans: Vec<_> = combined
            .annotated()
            .annotations(FORMAT_ANNOTATION_SCOPE, 0..combined.len())
            .map(|a| (a.tag.as_str(), a.range.clone()))
            .collect();
        assert_eq!(spans, [("foo", 0..5), ("italic", 6..11)]);

        // The operands are untouched.
        assert_eq!(left.text(), "Hello ");
        assert_eq!(right.text(), "world");
    }

    #[test]
    fn concatenation_merges_object_tables() {
        let left = RichTextString::build(|b| {
            b.with_format(Format::link(|| {}), |b| b.append("a")).unwrap();
        });
        let right = RichTextString::build(|b| {
            b.with_format(Format::link(|| {}), |b| b.append("b")).unwrap();
        });
        let combined = left + right;
        assert_eq!(combined.format_objects().len(), 2);
    }

    #[test]
    fn freezing_is_defensive() {
        let mut builder = Builder::new();
        builder.append("stable");
        let frozen = builder.to_rich_text_string();

        builder.append(" and growing");
        builder
            .add_format(Format::Underline, 0..6)
            .unwrap();

        assert_eq!(frozen.text(), "stable");
        assert_eq!(frozen.annotated().annotations_len(), 0);
    }

    #[test]
    fn inline_content_occupies_one_replacement_character() {
        let text = RichTextString::build(|b| {
            b.append("before");
            b.append_inline_content(InlineContent::new(|_| {}));
            b.append("after");
        });
        assert_eq!(text.text(), format!("before{REPLACEMENT_CHAR}after"));
        assert_eq!(text.text().matches(REPLACEMENT_CHAR).count(), 1);
    }

    #[test]
    fn inline_content_alternate_text_is_respected() {
        let text = RichTextString::build(|b| {
            b.append_inline_content_with_text("[img]", InlineContent::new(|_| {}));
        });
        assert_eq!(text.text(), "[img]");

        let annotation = text
            .annotated()
            .annotations(INLINE_CONTENT_SCOPE, 0..text.len())
            .next()
            .unwrap();
        assert_eq!(annotation.range, 0..5);
        assert!(text
            .format_objects()
            .contains_key(&format!("inline:{}", annotation.tag)));
    }

    #[test]
    fn annotated_escape_hatch_mixes_with_formats() {
        let text = RichTextString::build(|b| {
            b.append("plain");
            b.annotated()
                .add_annotation("custom.scope", "note", 0..5)
                .unwrap();
        });
        assert_eq!(
            text.annotated().annotations("custom.scope", 0..5).count(),
            1
        );
    }
}
