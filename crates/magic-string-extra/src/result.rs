//! The `{ code, map }` object bundler transform hooks return.

use magic_string::SourceMap;
use serde::{Deserialize, Serialize};

/// Generated code with an optional sourcemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupResult {
    /// The rendered text.
    pub code: String,
    /// The sourcemap, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<SourceMap>,
}

impl RollupResult {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
