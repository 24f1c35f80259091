//! JSON rendering for assembled lines.

use crate::error::{Error, Result};
use crate::model::Run;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a run sequence (typically one run per line) to JSON.
pub fn to_json(runs: &[Run], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(runs),
        JsonFormat::Compact => serde_json::to_string(runs),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
