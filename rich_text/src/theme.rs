// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-format style theme and its merge/defaulting resolution.

use peniko::color::palette;

use crate::style::{BaselineShift, FontFamily, FontStyle, FontWeight, SpanStyle, TextDecoration};

/// The set of span styles a theme assigns to each format kind.
///
/// Every slot is optional. A `None` slot means "unspecified"; callers layer
/// themes with [`merge`] and finally fill the remaining holes with each
/// format's built-in default via [`resolve_defaults`]. Resolution expects a
/// fully resolved theme (in particular, [`Format::Link`] requires a link style
/// with a color).
///
/// [`merge`]: Self::merge
/// [`resolve_defaults`]: Self::resolve_defaults
/// [`Format::Link`]: crate::Format::Link
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichTextStringStyle {
    /// Style for [`Format::Bold`](crate::Format::Bold).
    pub bold_style: Option<SpanStyle>,
    /// Style for [`Format::Italic`](crate::Format::Italic).
    pub italic_style: Option<SpanStyle>,
    /// Style for [`Format::Underline`](crate::Format::Underline).
    pub underline_style: Option<SpanStyle>,
    /// Style for [`Format::Strikethrough`](crate::Format::Strikethrough).
    pub strikethrough_style: Option<SpanStyle>,
    /// Style for [`Format::Subscript`](crate::Format::Subscript).
    pub subscript_style: Option<SpanStyle>,
    /// Style for [`Format::Superscript`](crate::Format::Superscript).
    pub superscript_style: Option<SpanStyle>,
    /// Style for [`Format::Code`](crate::Format::Code).
    pub code_style: Option<SpanStyle>,
    /// Style for [`Format::Link`](crate::Format::Link).
    pub link_style: Option<SpanStyle>,
}

impl RichTextStringStyle {
    /// Creates a theme with every slot unspecified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers this theme onto `other`.
    ///
    /// `None` returns this theme unchanged. Otherwise each slot is merged
    /// recursively at the attribute level: a slot present on both sides keeps
    /// this theme's set attributes and fills its unset attributes from
    /// `other`; a slot absent here adopts `other`'s wholesale.
    pub fn merge(&self, other: Option<&Self>) -> Self {
        let Some(other) = other else {
            return self.clone();
        };
        Self {
            bold_style: merge_slot(&self.bold_style, &other.bold_style),
            italic_style: merge_slot(&self.italic_style, &other.italic_style),
            underline_style: merge_slot(&self.underline_style, &other.underline_style),
            strikethrough_style: merge_slot(&self.strikethrough_style, &other.strikethrough_style),
            subscript_style: merge_slot(&self.subscript_style, &other.subscript_style),
            superscript_style: merge_slot(&self.superscript_style, &other.superscript_style),
            code_style: merge_slot(&self.code_style, &other.code_style),
            link_style: merge_slot(&self.link_style, &other.link_style),
        }
    }

    /// Replaces every unspecified slot with that format's built-in default.
    ///
    /// Already-specified slots are kept as-is, so applying this twice is a
    /// no-op.
    pub fn resolve_defaults(&self) -> Self {
        Self {
            bold_style: self.bold_style.clone().or_else(|| Some(defaults::bold())),
            italic_style: self.italic_style.clone().or_else(|| Some(defaults::italic())),
            underline_style: self
                .underline_style
                .clone()
                .or_else(|| Some(defaults::underline())),
            strikethrough_style: self
                .strikethrough_style
                .clone()
                .or_else(|| Some(defaults::strikethrough())),
            subscript_style: self
                .subscript_style
                .clone()
                .or_else(|| Some(defaults::subscript())),
            superscript_style: self
                .superscript_style
                .clone()
                .or_else(|| Some(defaults::superscript())),
            code_style: self.code_style.clone().or_else(|| Some(defaults::code())),
            link_style: self.link_style.clone().or_else(|| Some(defaults::link())),
        }
    }
}

fn merge_slot(this: &Option<SpanStyle>, other: &Option<SpanStyle>) -> Option<SpanStyle> {
    match this {
        Some(style) => Some(style.merge(other.as_ref())),
        None => other.clone(),
    }
}

/// Built-in default styles, one per format kind.
mod defaults {
    use super::*;

    pub(super) fn bold() -> SpanStyle {
        SpanStyle::new().with_font_weight(FontWeight::BOLD)
    }

    pub(super) fn italic() -> SpanStyle {
        SpanStyle::new().with_font_style(FontStyle::Italic)
    }

    pub(super) fn underline() -> SpanStyle {
        SpanStyle::new().with_text_decoration(TextDecoration::Underline)
    }

    pub(super) fn strikethrough() -> SpanStyle {
        SpanStyle::new().with_text_decoration(TextDecoration::LineThrough)
    }

    pub(super) fn subscript() -> SpanStyle {
        SpanStyle::new()
            .with_baseline_shift(BaselineShift::SUBSCRIPT)
            // TODO: this should be relative to the surrounding font size.
            .with_font_size(10.0)
    }

    pub(super) fn superscript() -> SpanStyle {
        SpanStyle::new()
            .with_baseline_shift(BaselineShift::SUPERSCRIPT)
            .with_font_size(10.0)
    }

    pub(super) fn code() -> SpanStyle {
        SpanStyle::new()
            .with_font_family(FontFamily::Monospace)
            .with_font_weight(FontWeight::MEDIUM)
            .with_background(palette::css::LIGHT_GRAY.with_alpha(0.5))
    }

    pub(super) fn link() -> SpanStyle {
        SpanStyle::new()
            .with_text_decoration(TextDecoration::Underline)
            .with_color(palette::css::BLUE)
    }
}
