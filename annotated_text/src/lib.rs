// Copyright 2026 the RichText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String annotations over ranges of plain text.
//!
//! An [`AnnotatedString`] is a plain text buffer plus an ordered list of
//! [`Annotation`] records, each marking that a string-valued property (a `tag`)
//! applies to a byte range of the text. Annotations are grouped into `scope`s so
//! that unrelated producers can annotate the same text without colliding; queries
//! are always scoped.
//!
//! [`AnnotatedStringBuilder`] accumulates text and annotations. Ranges can be
//! attached explicitly with [`add_annotation`], or opened at the current end of
//! the text with [`push_annotation`] and closed later with [`pop`], which
//! supports well-nested stacking of several open ranges at once.
//!
//! ## Indices
//!
//! All ranges are expressed as **byte indices** into UTF-8 text, and must lie on
//! UTF-8 character boundaries.
//!
//! ## Example
//!
//! ```
//! use annotated_text::AnnotatedStringBuilder;
//!
//! let mut builder = AnnotatedStringBuilder::new();
//! builder.append("Hello ");
//! let handle = builder.push_annotation("example.emphasis", "strong");
//! builder.append("world");
//! builder.pop().unwrap();
//! builder.append("!");
//!
//! let text = builder.build();
//! let strong: Vec<_> = text.annotations("example.emphasis", 0..text.len()).collect();
//! assert_eq!(strong.len(), 1);
//! assert_eq!(strong[0].range, 6..11);
//! assert_eq!(handle, 0);
//! ```
//!
//! [`add_annotation`]: AnnotatedStringBuilder::add_annotation
//! [`push_annotation`]: AnnotatedStringBuilder::push_annotation
//! [`pop`]: AnnotatedStringBuilder::pop
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod annotated_string;
mod builder;
mod error;

pub use crate::annotated_string::{AnnotatedString, Annotation};
pub use crate::builder::AnnotatedStringBuilder;
pub use crate::error::Error;
