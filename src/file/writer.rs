//! Rendering of plucked values.

use anyhow::{Context, Result};
use serde_yaml::Value;

use crate::config::OutputFormat;

/// Renders `value` as text in the requested format, without a trailing
/// newline.
///
/// # Examples
///
/// ```
/// use objpluck::config::OutputFormat;
/// use objpluck::file::writer::render_value;
///
/// let value = serde_yaml::Value::from("hello");
/// assert_eq!(render_value(&value, OutputFormat::Raw, true).unwrap(), "hello");
/// assert_eq!(render_value(&value, OutputFormat::Json, true).unwrap(), "\"hello\"");
/// ```
pub fn render_value(value: &Value, format: OutputFormat, pretty_json: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML")?,
        OutputFormat::Json => render_json(value, pretty_json)?,
        OutputFormat::Raw => match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            _ => render_json(value, pretty_json)?,
        },
    };

    Ok(text.trim_end_matches('\n').to_string())
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to render JSON")
}
