#![warn(missing_docs)]
//! Magic String - original-text-addressed string editing with sourcemaps
//!
//! # Overview
//!
//! `magic-string` records edits against the offsets of an immutable original text and
//! renders the edited output on demand, together with a version 3 sourcemap that
//! relates the output back to the original. It is the engine code transforms use when
//! they want to patch source text without re-parsing or re-printing it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  MagicString (insert/overwrite/move/trim)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Mappings + Locator (sourcemap segments)    │  ← Sourcemap generation
//! ├─────────────────────────────────────────────┤
//! │  Chunk list over the original text          │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use magic_string::{MagicString, OverwriteOptions, SourceMapOptions};
//!
//! let mut s = MagicString::new("problems = 99");
//! s.overwrite(0, 8, "answer", OverwriteOptions::default()).unwrap();
//! s.overwrite(11, 13, "42", OverwriteOptions::default()).unwrap();
//! assert_eq!(s.to_string(), "answer = 42");
//!
//! let map = s.generate_map(&SourceMapOptions::default().with_source("input.js"));
//! assert_eq!(map.sources, vec!["input.js".to_string()]);
//! ```
//!
//! # Offsets
//!
//! - Every offset is a byte offset into the original text and must be a UTF-8
//!   character boundary.
//! - Sourcemap lines end at `\n`; columns count UTF-16 code units.

mod chunk;
mod error;
mod indent;
mod locator;
mod magic_string;
mod mappings;
pub mod options;
pub mod sourcemap;

pub use error::{MagicStringError, Result};
pub use magic_string::MagicString;
pub use options::{IndentOptions, MagicStringOptions, OverwriteOptions, SourceMapOptions};
pub use sourcemap::{DecodedSourceMap, Segment, SourceMap};
