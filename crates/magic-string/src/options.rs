//! Option records accepted by [`crate::MagicString`].
//!
//! Every record derives `Default` and `serde` so it can be loaded from a bundler plugin's
//! JSON configuration (camelCase field names).

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MagicStringOptions {
    /// Name of the file the original text came from.
    pub filename: Option<String>,
    /// Original byte ranges that [`crate::MagicString::indent`] skips unless the call
    /// provides its own exclusions.
    pub indent_exclusion_ranges: Vec<Range<usize>>,
}

/// Options for [`crate::MagicString::overwrite`] and [`crate::MagicString::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverwriteOptions {
    /// Record the replaced original text in the sourcemap `names` list.
    pub store_name: bool,
    /// Keep text appended/prepended at the range edges instead of discarding it.
    pub content_only: bool,
}

/// Options for [`crate::MagicString::indent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndentOptions {
    /// Original byte ranges to leave untouched. `None` falls back to the
    /// construction-time exclusion ranges.
    pub exclude: Option<Vec<Range<usize>>>,
    /// Indent the very first line too.
    pub indent_start: bool,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            exclude: None,
            indent_start: true,
        }
    }
}

/// Sourcemap generation options. Unset fields take the engine defaults:
/// low resolution, no `file`, `sources: [""]`, no `sourcesContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceMapOptions {
    /// Emit a segment for every character instead of one per chunk line.
    pub hires: Option<bool>,
    /// The file the sourcemap will be written next to; its basename becomes `file`.
    pub file: Option<String>,
    /// The original source file, stored in `sources` relative to `file`.
    pub source: Option<String>,
    /// Embed the original text in `sourcesContent`.
    pub include_content: Option<bool>,
}

impl SourceMapOptions {
    /// Set [`SourceMapOptions::hires`].
    pub fn with_hires(mut self, hires: bool) -> Self {
        self.hires = Some(hires);
        self
    }

    /// Set [`SourceMapOptions::file`].
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set [`SourceMapOptions::source`].
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set [`SourceMapOptions::include_content`].
    pub fn with_include_content(mut self, include_content: bool) -> Self {
        self.include_content = Some(include_content);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sourcemap_options_from_camel_case_json() {
        let options: SourceMapOptions =
            serde_json::from_str(r#"{"hires": true, "includeContent": false, "file": "out.js"}"#)
                .unwrap();
        assert_eq!(options.hires, Some(true));
        assert_eq!(options.include_content, Some(false));
        assert_eq!(options.file.as_deref(), Some("out.js"));
        assert_eq!(options.source, None);
    }

    #[test]
    fn test_indent_options_default_indents_start() {
        let options: IndentOptions = serde_json::from_str("{}").unwrap();
        assert!(options.indent_start);
        assert!(options.exclude.is_none());
    }

    #[test]
    fn test_magic_string_options_ranges() {
        let options: MagicStringOptions = serde_json::from_str(
            r#"{"filename": "a.js", "indentExclusionRanges": [{"start": 1, "end": 4}]}"#,
        )
        .unwrap();
        assert_eq!(options.filename.as_deref(), Some("a.js"));
        assert_eq!(options.indent_exclusion_ranges, vec![1..4]);
    }
}
