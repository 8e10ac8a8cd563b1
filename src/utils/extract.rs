// src/utils/extract.rs

use serde_json::Value;

/// Pulls a JSON array out of free-form model output.
///
/// Takes the span from the first `[` to the last `]` (inclusive) and parses
/// it. Returns `None` when there is no such span or it does not parse as an
/// array; surrounding prose and markdown fences are ignored.
pub fn extract_json_array(raw: &str) -> Option<Vec<Value>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&raw[start..=end]).ok()
}
