use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Loads an optional JSON input document. An absent path yields `null`.
pub fn load_json(path: Option<&Path>) -> anyhow::Result<Value> {
    let Some(path) = path else {
        return Ok(Value::Null);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("input file {} is not valid JSON", path.display()))
}
