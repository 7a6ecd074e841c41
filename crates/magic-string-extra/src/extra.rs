//! [`MagicStringExtra`], the decorating buffer.

use std::fmt;
use std::ops::Range;

use magic_string::{
    DecodedSourceMap, IndentOptions, MagicString, OverwriteOptions, Result, SourceMap,
    SourceMapOptions,
};

use crate::options::{ExtraOptions, merge_sourcemap_options};
use crate::pattern::Pattern;
use crate::replacement::Replacement;
use crate::result::RollupResult;

/// Forward an infallible engine operation and return `self` for chaining.
macro_rules! forward_chain {
    ($($(#[$meta:meta])* fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*);)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self $(, $arg: $ty)*) -> &mut Self {
                self.s.$name($($arg),*);
                self
            }
        )*
    };
}

/// Forward a fallible engine operation and return `self` for chaining.
macro_rules! forward_try {
    ($($(#[$meta:meta])* fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*);)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self $(, $arg: $ty)*) -> Result<&mut Self> {
                self.s.$name($($arg),*)?;
                Ok(self)
            }
        )*
    };
}

/// Forward a read-only engine query.
macro_rules! forward_get {
    ($($(#[$meta:meta])* fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self $(, $arg: $ty)*) -> $ret {
                self.s.$name($($arg),*)
            }
        )*
    };
}

/// A [`MagicString`] with find/replace, change detection and sourcemap defaults.
///
/// ```
/// use magic_string_extra::{MagicStringExtra, Pattern};
/// use regex::Regex;
///
/// let mut s = MagicStringExtra::new("const a = 1, b = 2");
/// s.replace(Pattern::global(Regex::new(r"\d").unwrap()), "[$&]").unwrap();
/// assert_eq!(s.to_string(), "const a = [1], b = [2]");
/// assert!(s.has_changed());
/// ```
#[derive(Debug, Clone)]
pub struct MagicStringExtra {
    s: MagicString,
    sourcemap_options: SourceMapOptions,
}

impl MagicStringExtra {
    /// Wrap a new engine over `original`.
    pub fn new(original: impl Into<String>) -> Self {
        Self::with_options(original, ExtraOptions::default())
    }

    /// Wrap a new engine over `original`, keeping `options.sourcemap` as the defaults
    /// for every generated map.
    pub fn with_options(original: impl Into<String>, options: ExtraOptions) -> Self {
        Self {
            s: MagicString::with_options(original, options.string),
            sourcemap_options: options.sourcemap,
        }
    }

    /// The wrapped engine.
    pub fn as_inner(&self) -> &MagicString {
        &self.s
    }

    /// Unwrap the engine, dropping the sourcemap defaults.
    pub fn into_inner(self) -> MagicString {
        self.s
    }

    /// Sourcemap defaults of this buffer.
    pub fn sourcemap_options(&self) -> &SourceMapOptions {
        &self.sourcemap_options
    }

    /// Mutable sourcemap defaults. Clones keep their own copy.
    pub fn sourcemap_options_mut(&mut self) -> &mut SourceMapOptions {
        &mut self.sourcemap_options
    }

    /// Replace matches of `pattern` in the original text.
    ///
    /// Matching always runs against the original text, never the current output, and
    /// each match becomes one overwrite of its original range. A pattern that matches
    /// nothing leaves the buffer untouched. Engine errors (a match overlapping an
    /// earlier edit, an empty match) are returned as is; overwrites issued before the
    /// failing one stay applied.
    pub fn replace<'r>(
        &mut self,
        pattern: impl Into<Pattern>,
        replacement: impl Into<Replacement<'r>>,
    ) -> Result<&mut Self> {
        let pattern = pattern.into();
        let replacement = replacement.into();

        let edits: Vec<(usize, usize, String)> = pattern
            .find_matches(self.s.original())
            .iter()
            .map(|m| (m.start(), m.end(), replacement.resolve(m)))
            .collect();
        tracing::debug!(global = pattern.is_global(), matches = edits.len(), "replace");

        for (start, end, content) in edits {
            self.s
                .overwrite(start, end, &content, OverwriteOptions::default())?;
        }
        Ok(self)
    }

    /// Returns `true` if the rendered text differs from the original.
    pub fn has_changed(&self) -> bool {
        self.s.to_string() != self.s.original()
    }

    /// The transform-hook result: `None` when nothing changed, otherwise the rendered
    /// code plus, if `sourcemap` is set, a map generated with `overrides` merged over
    /// the buffer defaults.
    pub fn to_rollup_result(
        &self,
        sourcemap: bool,
        overrides: Option<&SourceMapOptions>,
    ) -> Option<RollupResult> {
        let code = self.s.to_string();
        if code == self.s.original() {
            tracing::debug!("unchanged, no transform result");
            return None;
        }
        let map = sourcemap.then(|| self.generate_map(overrides));
        tracing::debug!(len = code.len(), with_map = map.is_some(), "transform result");
        Some(RollupResult { code, map })
    }

    /// Generate a sourcemap, `overrides` taking precedence over the buffer defaults.
    pub fn generate_map(&self, overrides: Option<&SourceMapOptions>) -> SourceMap {
        self.s
            .generate_map(&merge_sourcemap_options(&self.sourcemap_options, overrides))
    }

    /// Like [`MagicStringExtra::generate_map`], with segment arrays.
    pub fn generate_decoded_map(&self, overrides: Option<&SourceMapOptions>) -> DecodedSourceMap {
        self.s
            .generate_decoded_map(&merge_sourcemap_options(&self.sourcemap_options, overrides))
    }

    /// A copy keeping only the original range `[start, end)`, with the same defaults.
    pub fn snip(&self, start: usize, end: usize) -> Result<MagicStringExtra> {
        Ok(Self {
            s: self.s.snip(start, end)?,
            sourcemap_options: self.sourcemap_options.clone(),
        })
    }

    forward_chain! {
        /// See [`MagicString::append`].
        fn append(&mut self, content: &str);
        /// See [`MagicString::prepend`].
        fn prepend(&mut self, content: &str);
        /// See [`MagicString::indent`].
        fn indent(&mut self, indent_str: Option<&str>, options: &IndentOptions);
        /// See [`MagicString::add_sourcemap_location`].
        fn add_sourcemap_location(&mut self, index: usize);
    }

    forward_try! {
        /// See [`MagicString::append_left`].
        fn append_left(&mut self, index: usize, content: &str);
        /// See [`MagicString::append_right`].
        fn append_right(&mut self, index: usize, content: &str);
        /// See [`MagicString::prepend_left`].
        fn prepend_left(&mut self, index: usize, content: &str);
        /// See [`MagicString::prepend_right`].
        fn prepend_right(&mut self, index: usize, content: &str);
        /// See [`MagicString::overwrite`].
        fn overwrite(&mut self, start: usize, end: usize, content: &str, options: OverwriteOptions);
        /// See [`MagicString::update`].
        fn update(&mut self, start: usize, end: usize, content: &str, options: OverwriteOptions);
        /// See [`MagicString::remove`].
        fn remove(&mut self, start: usize, end: usize);
        /// See [`MagicString::move_range`].
        fn move_range(&mut self, start: usize, end: usize, index: usize);
        /// See [`MagicString::trim`].
        fn trim(&mut self, char_type: Option<&str>);
        /// See [`MagicString::trim_start`].
        fn trim_start(&mut self, char_type: Option<&str>);
        /// See [`MagicString::trim_end`].
        fn trim_end(&mut self, char_type: Option<&str>);
        /// See [`MagicString::trim_lines`].
        fn trim_lines(&mut self);
    }

    forward_get! {
        /// See [`MagicString::original`].
        fn original(&self) -> &str;
        /// See [`MagicString::filename`].
        fn filename(&self) -> Option<&str>;
        /// See [`MagicString::indent_exclusion_ranges`].
        fn indent_exclusion_ranges(&self) -> &[Range<usize>];
        /// See [`MagicString::get_indent_string`].
        fn get_indent_string(&self) -> String;
        /// See [`MagicString::slice`].
        fn slice(&self, start: usize, end: usize) -> Result<String>;
        /// See [`MagicString::len`].
        fn len(&self) -> usize;
        /// See [`MagicString::is_empty`].
        fn is_empty(&self) -> bool;
        /// See [`MagicString::last_char`].
        fn last_char(&self) -> Option<char>;
        /// See [`MagicString::last_line`].
        fn last_line(&self) -> String;
    }
}

impl From<MagicString> for MagicStringExtra {
    fn from(s: MagicString) -> Self {
        Self {
            s,
            sourcemap_options: SourceMapOptions::default(),
        }
    }
}

impl fmt::Display for MagicStringExtra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.s, f)
    }
}
