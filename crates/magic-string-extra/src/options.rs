//! Construction options and sourcemap-options merging.

use magic_string::{MagicStringOptions, SourceMapOptions};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options for [`crate::MagicStringExtra::with_options`].
///
/// The engine options sit at the top level and the sourcemap defaults under
/// `sourcemap`, so a bundler plugin config reads like:
///
/// ```
/// use magic_string_extra::ExtraOptions;
///
/// let options = ExtraOptions::from_json(
///     r#"{ "filename": "src/main.js", "sourcemap": { "hires": true, "includeContent": true } }"#,
/// )
/// .unwrap();
/// assert_eq!(options.string.filename.as_deref(), Some("src/main.js"));
/// assert_eq!(options.sourcemap.hires, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraOptions {
    /// Options passed through to the engine.
    #[serde(flatten)]
    pub string: MagicStringOptions,
    /// Defaults for every sourcemap generated from this buffer.
    pub sourcemap: SourceMapOptions,
}

impl ExtraOptions {
    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Field-by-field merge: a set override wins, then the default, then whatever the
/// engine does for an unset field.
pub(crate) fn merge_sourcemap_options(
    defaults: &SourceMapOptions,
    overrides: Option<&SourceMapOptions>,
) -> SourceMapOptions {
    let Some(overrides) = overrides else {
        return defaults.clone();
    };
    SourceMapOptions {
        hires: overrides.hires.or(defaults.hires),
        file: overrides.file.clone().or_else(|| defaults.file.clone()),
        source: overrides.source.clone().or_else(|| defaults.source.clone()),
        include_content: overrides.include_content.or(defaults.include_content),
    }
}
