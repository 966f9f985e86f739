// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span style attributes and their value types.

use std::sync::Arc;

use peniko::Color;

/// A specified font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Normal (regular) weight, 400.
    pub const NORMAL: Self = Self(400);
    /// Medium weight, 500.
    pub const MEDIUM: Self = Self(500);
    /// Bold weight, 700.
    pub const BOLD: Self = Self(700);

    /// Creates a weight from a raw CSS-style value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A specified font style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// The upright style.
    #[default]
    Normal,
    /// The italic style.
    Italic,
}

/// A specified font family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The default serif family.
    Serif,
    /// The default sans-serif family.
    SansSerif,
    /// The default monospace family.
    Monospace,
    /// A named family.
    Named(Arc<str>),
}

/// A text decoration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    /// A line under the text.
    Underline,
    /// A line through the middle of the text.
    LineThrough,
}

/// A baseline shift, as a fraction of the line height.
///
/// Positive values shift the text up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaselineShift(pub f32);

impl BaselineShift {
    /// No shift.
    pub const NONE: Self = Self(0.0);
    /// The conventional superscript shift.
    pub const SUPERSCRIPT: Self = Self(0.5);
    /// The conventional subscript shift.
    pub const SUBSCRIPT: Self = Self(-0.2);
}

/// A set of optional style attributes applied to a span of text.
///
/// Every attribute is optional; an unset attribute inherits whatever the
/// surrounding text uses. [`merge`] overlays two styles at the attribute level.
///
/// [`merge`]: Self::merge
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanStyle {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Font size in logical pixels.
    pub font_size: Option<f32>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Font family.
    pub font_family: Option<FontFamily>,
    /// Baseline shift.
    pub baseline_shift: Option<BaselineShift>,
    /// Text decoration line.
    pub text_decoration: Option<TextDecoration>,
}

impl SpanStyle {
    /// Creates a style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Sets the font size, in logical pixels.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = Some(font_weight);
        self
    }

    /// Sets the font style.
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = Some(font_style);
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = Some(font_family);
        self
    }

    /// Sets the baseline shift.
    pub fn with_baseline_shift(mut self, baseline_shift: BaselineShift) -> Self {
        self.baseline_shift = Some(baseline_shift);
        self
    }

    /// Sets the text decoration line.
    pub fn with_text_decoration(mut self, text_decoration: TextDecoration) -> Self {
        self.text_decoration = Some(text_decoration);
        self
    }

    /// Overlays this style onto `other`, attribute by attribute.
    ///
    /// Attributes set on `self` win; attributes unset on `self` are filled
    /// from `other` when present. `None` leaves `self` unchanged.
    pub fn merge(&self, other: Option<&Self>) -> Self {
        let Some(other) = other else {
            return self.clone();
        };
        Self {
            color: self.color.or(other.color),
            background: self.background.or(other.background),
            font_size: self.font_size.or(other.font_size),
            font_weight: self.font_weight.or(other.font_weight),
            font_style: self.font_style.or(other.font_style),
            font_family: self.font_family.clone().or_else(|| other.font_family.clone()),
            baseline_shift: self.baseline_shift.or(other.baseline_shift),
            text_decoration: self.text_decoration.or(other.text_decoration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_set_attributes() {
        let left = SpanStyle::new()
            .with_font_weight(FontWeight::BOLD)
            .with_font_size(14.0);
        let right = SpanStyle::new()
            .with_font_size(18.0)
            .with_font_style(FontStyle::Italic);

        let merged = left.merge(Some(&right));
        assert_eq!(merged.font_weight, Some(FontWeight::BOLD));
        assert_eq!(merged.font_size, Some(14.0));
        assert_eq!(merged.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn merge_with_none_is_identity() {
        let style = SpanStyle::new().with_font_weight(FontWeight::MEDIUM);
        assert_eq!(style.merge(None), style);
    }

    #[test]
    fn named_family_compares_by_name() {
        let a = FontFamily::Named("Iosevka".into());
        let b = FontFamily::Named("Iosevka".into());
        assert_eq!(a, b);
    }
}
