use std::io::Read;

use serde::Deserialize;

use crate::error::PayloadError;

/// The action the host is about to perform (or just performed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookPayload {
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolInput {
    pub command: Option<String>,
    pub file_path: Option<String>,
}

/// Decode a payload. Blank input yields `Ok(None)`.
pub fn parse_payload(raw: &str) -> Result<Option<HookPayload>, PayloadError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}

pub fn read_payload(mut reader: impl Read) -> Result<Option<HookPayload>, PayloadError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_payload(&raw)
}
