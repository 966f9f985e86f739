// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable rich text values with themed style resolution.
//!
//! - [`RichTextString`] is the immutable core value: plain text plus
//!   non-overlapping-or-nested format annotations and a side table of stateful
//!   format instances (link callbacks, inline content).
//! - [`Builder`] accumulates text and formats, either stack-based
//!   ([`push_format`]/[`pop`]) or with explicit ranges ([`add_format`]), and
//!   freezes into a value with [`to_rich_text_string`].
//! - [`RichTextStringStyle`] is the mergeable per-format style theme;
//!   [`resolve_defaults`] fills unspecified slots with built-in defaults.
//! - [`RichTextString::resolve`] flattens a value against a theme and the
//!   ambient content color into renderer-ready [`StyledText`];
//!   [`RichTextString::inline_contents`] yields the placeholder lookup table.
//!
//! Text layout, shaping, and drawing are out of scope: resolution produces the
//! input a text layout engine consumes, nothing more.
//!
//! ## Example
//!
//! ```
//! use rich_text::{Color, Format, RichTextString, RichTextStringStyle};
//!
//! let greeting = RichTextString::build(|b| {
//!     b.append("Hello ");
//!     b.with_format(Format::Bold, |b| b.append("world")).unwrap();
//!     b.append("!");
//! });
//!
//! let theme = RichTextStringStyle::default().resolve_defaults();
//! let styled = greeting.resolve(&theme, Color::BLACK);
//! assert_eq!(styled.as_str(), "Hello world!");
//! assert_eq!(styled.spans().len(), 1);
//! assert_eq!(styled.spans()[0].range, 6..11);
//! ```
//!
//! Values are deeply immutable once frozen and may be shared and resolved
//! concurrently; builders are thread-confined scratchpads.
//!
//! [`push_format`]: Builder::push_format
//! [`pop`]: Builder::pop
//! [`add_format`]: Builder::add_format
//! [`to_rich_text_string`]: Builder::to_rich_text_string
//! [`resolve_defaults`]: RichTextStringStyle::resolve_defaults
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod format;
mod inline_content;
mod resolve;
mod string;
mod style;
mod theme;


pub use annotated_text::{AnnotatedString, Annotation, Error};
pub use peniko::Color;

pub use crate::format::{
    Format, FormatObject, FormatObjects, Link, FORMAT_ANNOTATION_SCOPE, INLINE_CONTENT_SCOPE,
    REPLACEMENT_CHAR,
};
pub use crate::inline_content::{InlineContent, InlineContentVerticalAlign, Size};
pub use crate::resolve::{StyledSpan, StyledText};
pub use crate::string::{Builder, FormatHandle, RichTextString};
pub use crate::style::{
    BaselineShift, FontFamily, FontStyle, FontWeight, SpanStyle, TextDecoration,
};
pub use crate::theme::RichTextStringStyle;
