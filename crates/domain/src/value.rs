//! Cell value rendering.
//!
//! Every table cell is a string. [`render_value`] turns a payload value into
//! that string; [`try_pretty_print`] turns a cell string back into indented
//! JSON for detail views, keeping the original text when it is not JSON.

use serde_json::Value;

/// Render an optional JSON value as cell text.
///
/// - absent or `null` → empty string
/// - object / array → compact JSON
/// - string → the string itself, unquoted
/// - number / bool → default textual form
#[must_use]
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(composite @ (Value::Array(_) | Value::Object(_))) => composite.to_string(),
    }
}

/// The cell text was not valid JSON. Carries the text back unchanged.
#[derive(Debug, thiserror::Error)]
#[error("cell value is not valid JSON")]
pub struct NotJson {
    raw: String,
    #[source]
    source: serde_json::Error,
}

impl NotJson {
    /// The original cell text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Consume the error, returning the original cell text.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }
}

/// Parse `raw` as JSON and re-serialize it with two-space indentation.
///
/// # Errors
///
/// Returns [`NotJson`] holding `raw` when it does not parse.
pub fn try_pretty_print(raw: &str) -> Result<String, NotJson> {
    let wrap = |source| NotJson {
        raw: raw.to_string(),
        source,
    };
    let parsed: Value = serde_json::from_str(raw).map_err(wrap)?;
    serde_json::to_string_pretty(&parsed).map_err(wrap)
}

/// Pretty-printed JSON when `raw` parses, otherwise `raw` verbatim.
#[must_use]
pub fn pretty_or_raw(raw: &str) -> String {
    try_pretty_print(raw).unwrap_or_else(NotJson::into_raw)
}
