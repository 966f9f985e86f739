// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of rich text values into renderer-ready styled output.

use core::ops::Range;

use annotated_text::{AnnotatedString, Annotation};
use hashbrown::HashMap;
use peniko::Color;

use crate::format::{Format, FormatObject, FORMAT_ANNOTATION_SCOPE};
use crate::inline_content::InlineContent;
use crate::string::RichTextString;
use crate::style::SpanStyle;
use crate::theme::RichTextStringStyle;

/// A resolved style covering a byte range of the output text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledSpan {
    /// The style to apply.
    pub style: SpanStyle,
    /// The byte range the style covers.
    pub range: Range<usize>,
}

/// Renderer-ready output: the text plus a flat list of resolved styles.
///
/// Spans are listed in the order their annotations were recorded (ranges
/// opened with `push_format` are recorded when closed); overlapping spans are
/// layered in that order by the consumer. The underlying annotations are
/// preserved, so a renderer can still locate inline content placeholders (see
/// [`INLINE_CONTENT_SCOPE`]) or any foreign-scope annotations it understands.
///
/// [`INLINE_CONTENT_SCOPE`]: crate::INLINE_CONTENT_SCOPE
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    text: AnnotatedString,
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Borrows the plain text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The resolved style spans, in application order.
    #[inline]
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Iterates over the annotations in `scope` intersecting `range`.
    pub fn annotations<'a>(
        &'a self,
        scope: &'a str,
        range: Range<usize>,
    ) -> impl Iterator<Item = &'a Annotation> {
        self.text.annotations(scope, range)
    }
}

impl RichTextString {
    /// Resolves this value against a theme and the ambient content color.
    ///
    /// Every format annotation is decoded against the value's format object
    /// table and asked for its style; ranges whose tags fail to decode are
    /// skipped silently (they are best-effort decorations, possibly left over
    /// from a foreign producer), as are formats the theme disables.
    /// Annotations outside the format scope are ignored but preserved in the
    /// output.
    ///
    /// Pass a theme that has been through
    /// [`RichTextStringStyle::resolve_defaults`] (or otherwise defines a link
    /// style) whenever link formats are in use.
    pub fn resolve(&self, style: &RichTextStringStyle, content_color: Color) -> StyledText {
        let mut spans = Vec::new();
        for annotation in self
            .tagged
            .annotations(FORMAT_ANNOTATION_SCOPE, 0..self.tagged.len())
        {
            let Some(format) = Format::find_tag(&annotation.tag, &self.format_objects) else {
                continue;
            };
            if let Some(span_style) = format.style_for(style, content_color) {
                spans.push(StyledSpan {
                    style: span_style,
                    range: annotation.range.clone(),
                });
            }
        }
        StyledText {
            text: self.tagged.clone(),
            spans,
        }
    }

    /// Returns the inline content table, keyed the way placeholders are
    /// annotated.
    ///
    /// Keys are the ids used in [`INLINE_CONTENT_SCOPE`] annotations (the
    /// stored `"inline:"` prefix is stripped); the layout renderer consults
    /// this table when it encounters a placeholder character.
    ///
    /// [`INLINE_CONTENT_SCOPE`]: crate::INLINE_CONTENT_SCOPE
    pub fn inline_contents(&self) -> HashMap<String, InlineContent> {
        self.format_objects
            .iter()
            .filter_map(|(key, object)| {
                let id = key.strip_prefix("inline:")?;
                match object {
                    FormatObject::InlineContent(content) => {
                        Some((id.to_owned(), content.clone()))
                    }
                    FormatObject::Format(_) => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INLINE_CONTENT_SCOPE;
    use crate::style::FontWeight;

    #[test]
    fn undecodable_tags_are_skipped_silently() {
        let text = RichTextString::build(|b| {
            b.append("hello");
            // A foreign producer left a tag in our scope that we cannot decode.
            b.annotated()
                .add_annotation(FORMAT_ANNOTATION_SCOPE, "format:dangling", 0..5)
                .unwrap();
            b.add_format(Format::Bold, 0..5).unwrap();
        });

        let styled = text.resolve(
            &RichTextStringStyle::default().resolve_defaults(),
            Color::BLACK,
        );
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.spans()[0].range, 0..5);
    }

    #[test]
    fn foreign_scope_annotations_are_ignored_but_preserved() {
        let text = RichTextString::build(|b| {
            b.append("hello");
            b.annotated()
                .add_annotation("other.scope", "italic", 0..5)
                .unwrap();
        });

        let styled = text.resolve(
            &RichTextStringStyle::default().resolve_defaults(),
            Color::BLACK,
        );
        assert!(styled.spans().is_empty());
        assert_eq!(styled.annotations("other.scope", 0..5).count(), 1);
    }

    #[test]
    fn disabled_formats_produce_no_span() {
        // A theme slot explicitly left empty disables that format.
        let mut theme = RichTextStringStyle::default().resolve_defaults();
        theme.bold_style = None;

        let text = RichTextString::build(|b| {
            b.with_format(Format::Bold, |b| b.append("quiet")).unwrap();
        });
        let styled = text.resolve(&theme, Color::BLACK);
        assert!(styled.spans().is_empty());
    }

    #[test]
    fn link_spans_get_a_blended_color() {
        let theme = RichTextStringStyle::default().resolve_defaults();
        let text = RichTextString::build(|b| {
            b.with_format(Format::link(|| {}), |b| b.append("click")).unwrap();
        });

        let styled = text.resolve(&theme, Color::WHITE);
        assert_eq!(styled.spans().len(), 1);
        let color = styled.spans()[0].style.color.unwrap();
        let link_color = theme.link_style.as_ref().unwrap().color.unwrap();
        let [r, g, _, a] = color.components;
        // Blended strictly between pure link blue and white.
        assert!(r > link_color.components[0] && r < 1.0, "red: {r}");
        assert!(g > link_color.components[1] && g < 1.0, "green: {g}");
        assert!((a - link_color.components[3]).abs() < 1e-6, "alpha kept: {a}");
    }

    #[test]
    fn inline_contents_strips_the_prefix_and_skips_formats() {
        let text = RichTextString::build(|b| {
            b.append_inline_content(InlineContent::new(|_| {}));
            b.with_format(Format::link(|| {}), |b| b.append("x")).unwrap();
        });

        let contents = text.inline_contents();
        assert_eq!(contents.len(), 1);
        let key = contents.keys().next().unwrap();
        assert!(!key.starts_with("inline:"), "prefix must be stripped: {key}");

        // The key matches the placeholder annotation's tag.
        let annotation = text
            .annotated()
            .annotations(INLINE_CONTENT_SCOPE, 0..text.len())
            .next()
            .unwrap();
        assert_eq!(&annotation.tag, key);
    }

    #[test]
    fn resolution_does_not_consume_the_value() {
        let text = RichTextString::build(|b| {
            b.with_format(Format::Bold, |b| b.append("twice")).unwrap();
        });
        let theme = RichTextStringStyle::default().resolve_defaults();
        let first = text.resolve(&theme, Color::BLACK);
        let second = text.resolve(&theme, Color::BLACK);
        assert_eq!(first, second);
        assert_eq!(
            first.spans()[0].style.font_weight,
            Some(FontWeight::BOLD)
        );
    }
}
