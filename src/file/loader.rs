//! Document loading functionality.
//!
//! This module loads JSON, JSON Lines and YAML documents from files or stdin
//! into a `serde_yaml::Value` that can be plucked. Gzipped input is
//! decompressed transparently.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Input formats recognised by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    JsonLines,
    Yaml,
}

impl InputFormat {
    /// Determines the format from a file name, ignoring a `.gz` suffix.
    ///
    /// Examples:
    /// - `data.json` → `Json`
    /// - `data.jsonl.gz` → `JsonLines`
    /// - `data.yml` → `Yaml` (also the fallback for unknown extensions)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            InputFormat::JsonLines
        } else if base.ends_with(".json") {
            InputFormat::Json
        } else {
            InputFormat::Yaml
        }
    }
}

/// Loads and parses a document from the filesystem.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read or decompressed
/// - The file contents are not valid for the detected format
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = InputFormat::from_path(path_ref);
    debug!(path = %path_ref.display(), ?format, gzipped = is_gzipped, "loading document");
    parse_content(&content, format)
}

/// Parses document text in the given format.
pub fn parse_content(content: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        InputFormat::JsonLines => parse_jsonl_content(content),
        InputFormat::Yaml => parse_yaml_content(content),
    }
}

/// Parses YAML text. A stream of several documents becomes a sequence with
/// one element per document. Merge keys (`<<: *anchor`) are applied.
pub fn parse_yaml_content(content: &str) -> Result<Value> {
    let mut documents = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let mut value = Value::deserialize(document)
            .with_context(|| format!("Failed to parse YAML document {}", index + 1))?;
        value
            .apply_merge()
            .with_context(|| format!("Invalid merge key in YAML document {}", index + 1))?;
        documents.push(value);
    }

    Ok(match documents.len() {
        0 => Value::Null,
        1 => documents.swap_remove(0),
        _ => Value::Sequence(documents),
    })
}

/// Parses JSONL content (newline-delimited JSON) into a sequence.
///
/// Each line must be a valid JSON value. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(value);
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Sequence(lines))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes. The text is tried as strict
/// JSON first, then as JSON Lines, then as YAML.
pub fn load_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    parse_bytes(buffer)
}

/// Decodes raw input bytes, decompressing gzip when present.
pub fn parse_bytes(buffer: Vec<u8>) -> Result<Value> {
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    // YAML folds a stream of JSON scalars into one plain scalar, so it goes last.
    if let Ok(value) = serde_json::from_str::<Value>(&content) {
        return Ok(value);
    }
    if let Ok(value) = parse_jsonl_content(&content) {
        return Ok(value);
    }

    parse_yaml_content(&content)
        .context("Failed to parse input: it is neither valid JSON, JSONL nor YAML")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
