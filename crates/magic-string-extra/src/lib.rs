#![warn(missing_docs)]
//! Magic String Extra - find/replace and bundler helpers for `magic-string`
//!
//! [`MagicStringExtra`] wraps a [`MagicString`] and adds:
//!
//! - [`MagicStringExtra::replace`]: match a fixed string or regex against the
//!   **original** text and overwrite every match, with `$$`, `$&` and `$N` templates or a
//!   callback ([`Replacement`]).
//! - [`MagicStringExtra::has_changed`] and [`MagicStringExtra::to_rollup_result`]: the
//!   `{ code, map }` object a bundler transform hook returns, or `None` when the text is
//!   unchanged.
//! - Sourcemap defaults set at construction ([`ExtraOptions`]), carried through `clone`
//!   and merged field by field with per-call overrides.
//!
//! Every other engine operation is forwarded unchanged.
//!
//! # Example
//!
//! ```rust
//! use magic_string_extra::{MagicStringExtra, Pattern, Replacement};
//! use regex::Regex;
//!
//! let mut s = MagicStringExtra::new("hello my name is anthony");
//! s.replace(
//!     Pattern::global(Regex::new(r"(\w)(\w+)").unwrap()),
//!     Replacement::callback(|m| {
//!         let head = m.group(1).unwrap_or_default().to_uppercase();
//!         format!("{head}{}", m.group(2).unwrap_or_default())
//!     }),
//! )
//! .unwrap();
//!
//! let result = s.to_rollup_result(true, None).unwrap();
//! assert_eq!(result.code, "Hello My Name Is Anthony");
//! assert!(result.map.is_some());
//! ```

mod error;
mod extra;
mod options;
mod pattern;
mod replacement;
mod result;

pub use error::ConfigError;
pub use extra::MagicStringExtra;
pub use options::ExtraOptions;
pub use pattern::{Match, Pattern};
pub use replacement::Replacement;
pub use result::RollupResult;

pub use magic_string::{
    DecodedSourceMap, IndentOptions, MagicString, MagicStringError, MagicStringOptions,
    OverwriteOptions, Result, Segment, SourceMap, SourceMapOptions,
};
