// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formats and the tag codec that encodes them into string annotations.

use std::fmt::Debug;
use std::sync::Arc;

use hashbrown::HashMap;
use peniko::Color;
use uuid::Uuid;

use crate::inline_content::InlineContent;
use crate::style::SpanStyle;
use crate::theme::RichTextStringStyle;

/// The annotation scope holding format tags.
///
/// Annotations in other scopes may coexist on the same text; the resolver
/// ignores them.
pub const FORMAT_ANNOTATION_SCOPE: &str = "rich_text.format";

/// The annotation scope marking inline content placeholders.
///
/// The annotation's tag is the key the renderer uses to look up the content in
/// the table returned by [`RichTextString::inline_contents`].
///
/// [`RichTextString::inline_contents`]: crate::RichTextString::inline_contents
pub const INLINE_CONTENT_SCOPE: &str = "rich_text.inline_content";

/// The placeholder character inline content occupies in the text.
pub const REPLACEMENT_CHAR: &str = "\u{FFFD}";

/// A formatting directive applied to a range of rich text.
///
/// The simple variants are stateless: all instances of, say, `Italic` share one
/// fixed tag and are indistinguishable. [`Link`] carries per-instance state (its
/// activation callback) and is tracked through the format object table instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Format {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strikethrough,
    /// Subscript text.
    Subscript,
    /// Superscript text.
    Superscript,
    /// Inline code.
    Code,
    /// An activatable link.
    Link(Link),
}

impl Format {
    /// Creates a link format from an activation callback.
    pub fn link(on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Link(Link::new(on_click))
    }

    /// The fixed tag shared by all instances of a stateless format.
    ///
    /// Returns `None` for formats carrying instance data.
    pub fn simple_tag(&self) -> Option<&'static str> {
        match self {
            // Historical literal; existing annotations use it, so it stays.
            Self::Bold => Some("foo"),
            Self::Italic => Some("italic"),
            Self::Underline => Some("underline"),
            Self::Strikethrough => Some("strikethrough"),
            Self::Subscript => Some("subscript"),
            Self::Superscript => Some("superscript"),
            Self::Code => Some("code"),
            Self::Link(_) => None,
        }
    }

    fn from_simple_tag(tag: &str) -> Option<Self> {
        match tag {
            "foo" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "underline" => Some(Self::Underline),
            "strikethrough" => Some(Self::Strikethrough),
            "subscript" => Some(Self::Subscript),
            "superscript" => Some(Self::Superscript),
            "code" => Some(Self::Code),
            _ => None,
        }
    }

    /// Encodes this format as an annotation tag, registering it in `objects`
    /// when it carries instance data.
    ///
    /// Stateless formats return their fixed literal and never touch the table.
    /// Stateful formats are stored under a fresh unique id and encoded as
    /// `"format:" + id`.
    pub fn register_tag(&self, objects: &mut FormatObjects) -> String {
        if let Some(tag) = self.simple_tag() {
            return tag.to_owned();
        }
        let id = Uuid::new_v4().to_string();
        objects.insert(id.clone(), FormatObject::Format(self.clone()));
        format!("format:{id}")
    }

    /// Decodes an annotation tag back into a format.
    ///
    /// A `"format:"`-prefixed tag is looked up in `objects`; anything else is
    /// matched against the fixed simple literals. Unknown literals, missing
    /// ids, and ids mapping to non-format objects all yield `None`: dangling or
    /// foreign tags are tolerated, and the caller skips the range.
    pub fn find_tag(tag: &str, objects: &FormatObjects) -> Option<Self> {
        match tag.strip_prefix("format:") {
            Some(id) => match objects.get(id) {
                Some(FormatObject::Format(format)) => Some(format.clone()),
                _ => None,
            },
            None => Self::from_simple_tag(tag),
        }
    }

    /// Returns the span style this format applies, or `None` if the theme
    /// disables it.
    ///
    /// `content_color` is the ambient foreground color of the surrounding text;
    /// only [`Format::Link`] uses it, to blend a contrasting link color.
    ///
    /// # Panics
    ///
    /// Panics for [`Format::Link`] when the theme has no link style or the link
    /// style has no color. Link rendering always needs a color, so an
    /// incomplete theme is a contract violation rather than a recoverable
    /// condition.
    pub fn style_for(
        &self,
        theme: &RichTextStringStyle,
        content_color: Color,
    ) -> Option<SpanStyle> {
        match self {
            Self::Bold => theme.bold_style.clone(),
            Self::Italic => theme.italic_style.clone(),
            Self::Underline => theme.underline_style.clone(),
            Self::Strikethrough => theme.strikethrough_style.clone(),
            Self::Subscript => theme.subscript_style.clone(),
            Self::Superscript => theme.superscript_style.clone(),
            Self::Code => theme.code_style.clone(),
            Self::Link(_) => {
                let style = theme
                    .link_style
                    .as_ref()
                    .expect("theme has no link style but a link format is in use");
                let link_color = style
                    .color
                    .expect("theme link style has no color but a link format is in use");
                Some(
                    style
                        .clone()
                        .with_color(blend_link_color(content_color, link_color)),
                )
            }
        }
    }
}

/// Blends the ambient content color with the theme's link color, per channel,
/// weighted so the link color dominates. Keeps the link text legible against
/// arbitrary ambient foreground colors.
///
/// The result's alpha is the link color's, untouched by the blend.
fn blend_link_color(content: Color, link: Color) -> Color {
    let [cr, cg, cb, _] = content.components;
    let [lr, lg, lb, la] = link.components;
    let channel = |c: f32, l: f32| ((c + l) * 0.5 + l * 0.5).min(1.0);
    Color::new([channel(cr, lr), channel(cg, lg), channel(cb, lb), la])
}

/// An activatable link carrying its activation callback.
///
/// Two links compare equal only when they share the same callback.
#[derive(Clone)]
pub struct Link {
    on_click: Arc<dyn Fn() + Send + Sync>,
}

impl Link {
    /// Creates a link from an activation callback.
    pub fn new(on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_click: Arc::new(on_click),
        }
    }

    /// Invokes the link's activation callback.
    pub fn activate(&self) {
        (self.on_click)();
    }
}

impl Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Link").finish_non_exhaustive()
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        // Compare the callbacks' data pointers; the vtable is irrelevant.
        core::ptr::eq(
            Arc::as_ptr(&self.on_click).cast::<()>(),
            Arc::as_ptr(&other.on_click).cast::<()>(),
        )
    }
}

/// An entry in a rich text value's format object table.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatObject {
    /// A format carrying instance data, keyed by its bare unique id.
    Format(Format),
    /// Inline content, keyed by `"inline:" + id`.
    InlineContent(InlineContent),
}

/// The side table mapping unique ids to stateful formats and inline content.
pub type FormatObjects = HashMap<String, FormatObject>;
