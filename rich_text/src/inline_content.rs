// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline embedded content occupying a single placeholder character.

use std::fmt::Debug;
use std::sync::Arc;

/// A width and height in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// How inline content is aligned vertically relative to the surrounding line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InlineContentVerticalAlign {
    /// The bottom of the content sits on the text baseline.
    #[default]
    AboveBaseline,
    /// The top of the content aligns with the top of the line.
    Top,
    /// The content is centered within the line.
    Center,
    /// The bottom of the content aligns with the bottom of the line.
    Bottom,
}

type Renderer = Arc<dyn Fn(Size) + Send + Sync>;

/// A non-text item rendered in place of a single placeholder character.
///
/// The renderer callback is invoked by the layout engine with the maximum size
/// available to the item. [`initial_size`] is a measurement hint used before
/// the first render; when absent, the engine falls back to its own default.
///
/// Equality compares the size hint and alignment, and the renderer by identity.
///
/// [`initial_size`]: Self::initial_size
#[derive(Clone)]
pub struct InlineContent {
    initial_size: Option<Size>,
    vertical_align: InlineContentVerticalAlign,
    renderer: Renderer,
}

impl InlineContent {
    /// Creates inline content with the given renderer and default placement.
    pub fn new(renderer: impl Fn(Size) + Send + Sync + 'static) -> Self {
        Self {
            initial_size: None,
            vertical_align: InlineContentVerticalAlign::default(),
            renderer: Arc::new(renderer),
        }
    }

    /// Sets the size used to measure the content before its first render.
    pub fn with_initial_size(mut self, size: Size) -> Self {
        self.initial_size = Some(size);
        self
    }

    /// Sets the vertical alignment of the content within its line.
    pub fn with_vertical_align(mut self, align: InlineContentVerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    /// Returns the measurement hint, if any.
    #[inline]
    pub fn initial_size(&self) -> Option<Size> {
        self.initial_size
    }

    /// Returns the vertical alignment of the content within its line.
    #[inline]
    pub fn vertical_align(&self) -> InlineContentVerticalAlign {
        self.vertical_align
    }

    /// Invokes the renderer with the maximum size available to the item.
    pub fn render(&self, max_size: Size) {
        (self.renderer)(max_size);
    }
}

impl Debug for InlineContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineContent")
            .field("initial_size", &self.initial_size)
            .field("vertical_align", &self.vertical_align)
            .finish_non_exhaustive()
    }
}

impl PartialEq for InlineContent {
    fn eq(&self, other: &Self) -> bool {
        self.initial_size == other.initial_size
            && self.vertical_align == other.vertical_align
            && renderer_ptr(&self.renderer) == renderer_ptr(&other.renderer)
    }
}

/// The data pointer of the renderer, ignoring the vtable.
fn renderer_ptr(renderer: &Renderer) -> *const () {
    Arc::as_ptr(renderer).cast()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_renderer_identity() {
        let a = InlineContent::new(|_| {});
        let b = a.clone();
        let c = InlineContent::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn render_receives_constraints() {
        use std::sync::atomic::{AtomicU32, Ordering};
        let seen = Arc::new(AtomicU32::new(0));
        let observer = seen.clone();
        let content = InlineContent::new(move |size| {
            observer.store(size.width as u32, Ordering::SeqCst);
        });
        content.render(Size::new(24.0, 16.0));
        assert_eq!(seen.load(Ordering::SeqCst), 24);
    }
}
