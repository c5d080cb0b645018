//! Encoding of counter state to and from store values.
//!
//! Decoders return `Ok(None)` when the key is absent and `Err` when the value
//! is present but unreadable; callers pick the default in both cases.

use crate::models::{RakatState, Theme};

use super::error::DecodeError;

pub const THEME_KEY: &str = "theme";
pub const TASBIH_KEY: &str = "tasbihCount";
pub const RAKAT_KEY: &str = "rakatState";

/// An empty string counts as absent. Anything but `"dark"` is light.
pub fn decode_theme(raw: Option<&str>) -> Option<Theme> {
    match raw {
        None | Some("") => None,
        Some(value) => Some(Theme::from_dark(value == Theme::Dark.as_str())),
    }
}

pub fn decode_tasbih(raw: Option<&str>) -> Result<Option<u64>, DecodeError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|source| DecodeError::Integer {
            key: TASBIH_KEY,
            value: value.to_string(),
            source,
        })
}

pub fn decode_rakat(raw: Option<&str>) -> Result<Option<RakatState>, DecodeError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    serde_json::from_str(value)
        .map(Some)
        .map_err(|source| DecodeError::Record {
            key: RAKAT_KEY,
            value: value.to_string(),
            source,
        })
}

pub fn encode_tasbih(count: u64) -> String {
    count.to_string()
}

pub fn encode_rakat(state: &RakatState) -> String {
    // string keys and plain JSON values always serialize
    serde_json::to_string(state).unwrap_or_else(|_| format!(r#"{{"count":{}}}"#, state.count))
}
