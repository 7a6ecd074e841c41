//! Version 3 sourcemaps in decoded and encoded form.

use std::fmt;

use serde::{Deserialize, Serialize};
use ::sourcemap::{SourceMapBuilder, vlq};

/// One decoded mapping segment. All values are absolute (not delta encoded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Column in the generated line (UTF-16 code units).
    pub generated_column: u32,
    /// Index into `sources`.
    pub source_index: u32,
    /// Zero-based line in the original source.
    pub original_line: u32,
    /// Zero-based column in the original source (UTF-16 code units).
    pub original_column: u32,
    /// Index into `names`, for overwrites made with `store_name`.
    pub name_index: Option<u32>,
}

/// A sourcemap whose mappings are still segment arrays, one `Vec` per generated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSourceMap {
    /// Basename of the output file.
    pub file: Option<String>,
    /// Original source paths.
    pub sources: Vec<String>,
    /// Original source texts, when requested.
    pub sources_content: Option<Vec<String>>,
    /// Names referenced by segments.
    pub names: Vec<String>,
    /// Segments per generated line.
    pub mappings: Vec<Vec<Segment>>,
}

impl DecodedSourceMap {
    /// VLQ-encode the mappings.
    pub fn encode(&self) -> SourceMap {
        SourceMap {
            version: 3,
            file: self.file.clone(),
            sources: self.sources.clone(),
            sources_content: self.sources_content.clone(),
            names: self.names.clone(),
            mappings: encode_mappings(&self.mappings),
        }
    }

    /// Build a [`::sourcemap::SourceMap`] for consumers that want token lookup or
    /// the crate's own writer.
    pub fn to_sourcemap(&self) -> ::sourcemap::SourceMap {
        let mut builder = SourceMapBuilder::new(self.file.as_deref());
        for (index, source) in self.sources.iter().enumerate() {
            let id = builder.add_source(source);
            let content = self
                .sources_content
                .as_ref()
                .and_then(|contents| contents.get(index));
            if let Some(content) = content {
                builder.set_source_contents(id, Some(content.as_str()));
            }
        }
        for name in &self.names {
            builder.add_name(name);
        }
        for (line, segments) in self.mappings.iter().enumerate() {
            for segment in segments {
                builder.add_raw(
                    line as u32,
                    segment.generated_column,
                    segment.original_line,
                    segment.original_column,
                    Some(segment.source_index),
                    segment.name_index,
                    false,
                );
            }
        }
        builder.into_sourcemap()
    }
}

/// A version 3 sourcemap, serialized with the standard camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    /// Always `3`.
    pub version: u32,
    /// Basename of the output file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Original source paths.
    pub sources: Vec<String>,
    /// Original source texts, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<String>>,
    /// Names referenced by segments.
    pub names: Vec<String>,
    /// Base64 VLQ mappings.
    pub mappings: String,
}

impl SourceMap {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Encode segment lines. The generated column resets on every line; source, line,
/// column and name deltas carry across lines.
pub(crate) fn encode_mappings(lines: &[Vec<Segment>]) -> String {
    let mut out = String::new();
    let mut source_index = 0i64;
    let mut original_line = 0i64;
    let mut original_column = 0i64;
    let mut name_index = 0i64;
    let mut values = Vec::with_capacity(5);

    for (line_no, line) in lines.iter().enumerate() {
        if line_no > 0 {
            out.push(';');
        }
        let mut generated_column = 0i64;
        for (segment_no, segment) in line.iter().enumerate() {
            if segment_no > 0 {
                out.push(',');
            }
            values.clear();
            values.push(i64::from(segment.generated_column) - generated_column);
            values.push(i64::from(segment.source_index) - source_index);
            values.push(i64::from(segment.original_line) - original_line);
            values.push(i64::from(segment.original_column) - original_column);
            generated_column = i64::from(segment.generated_column);
            source_index = i64::from(segment.source_index);
            original_line = i64::from(segment.original_line);
            original_column = i64::from(segment.original_column);
            if let Some(name) = segment.name_index {
                values.push(i64::from(name) - name_index);
                name_index = i64::from(name);
            }
            // Encoding integers never fails.
            out.push_str(&vlq::generate_vlq_segment(&values).unwrap_or_default());
        }
    }
    out
}

/// Last path component, splitting on `/` and `\`.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Path of `to` relative to the directory containing `from`.
pub(crate) fn relative_path(from: &str, to: &str) -> String {
    let mut from_parts: Vec<&str> = from.split(['/', '\\']).collect();
    let to_parts: Vec<&str> = to.split(['/', '\\']).collect();
    from_parts.pop();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; from_parts.len() - common];
    parts.extend(&to_parts[common..]);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(generated_column: u32, original_line: u32, original_column: u32) -> Segment {
        Segment {
            generated_column,
            source_index: 0,
            original_line,
            original_column,
            name_index: None,
        }
    }

    #[test]
    fn test_encode_mappings_single_line() {
        let lines = vec![vec![seg(0, 0, 0), seg(2, 0, 2), seg(3, 0, 3)]];
        assert_eq!(encode_mappings(&lines), "AAAA,EAAE,CAAC");
    }

    #[test]
    fn test_encode_mappings_resets_column_per_line() {
        let lines = vec![vec![seg(0, 0, 0)], vec![], vec![seg(0, 1, 0), seg(4, 1, 4)]];
        assert_eq!(encode_mappings(&lines), "AAAA;;AACA,IAAI");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("dist/out.js"), "out.js");
        assert_eq!(basename("dist\\out.js"), "out.js");
        assert_eq!(basename("out.js"), "out.js");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path("dist/out.js", "src/in.js"), "../src/in.js");
        assert_eq!(relative_path("src/out.js", "src/in.js"), "in.js");
        assert_eq!(relative_path("", "src/in.js"), "src/in.js");
        assert_eq!(relative_path("a/b/out.js", "a/c/in.js"), "../c/in.js");
    }

    #[test]
    fn test_sourcemap_json_shape() {
        let map = SourceMap {
            version: 3,
            file: None,
            sources: vec![String::new()],
            sources_content: None,
            names: Vec::new(),
            mappings: "AAAA".to_string(),
        };
        assert_eq!(
            map.to_string(),
            r#"{"version":3,"sources":[""],"names":[],"mappings":"AAAA"}"#
        );
    }
}
