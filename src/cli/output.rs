//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::extract::Extraction;
use crate::analysis::frequency::FrequencyEntry;
use crate::analysis::stats::TextStats;
use crate::cli::args::{OutputFormat, TextLensArgs};
use crate::error::Result;

/// Statistics for one input source.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceStats {
    pub source: String,
    #[serde(flatten)]
    pub stats: TextStats,
}

/// Ranked word or phrase frequencies.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrequencyResult {
    pub ngram_size: usize,
    pub unique_terms: usize,
    pub entries: Vec<FrequencyEntry>,
}

/// Density of a single keyword.
#[derive(Debug, Serialize, Deserialize)]
pub struct DensityResult {
    pub keyword: String,
    pub occurrences: usize,
    pub total_words: usize,
    pub density: f64,
}

/// Extracted patterns; fields not requested are omitted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_count: Option<usize>,
}

impl From<Extraction> for ExtractResult {
    fn from(extraction: Extraction) -> Self {
        Self {
            urls: Some(extraction.urls),
            hashtags: Some(extraction.hashtags),
            mentions: Some(extraction.mentions),
            emails: Some(extraction.emails),
            emoji_count: Some(extraction.emoji_count),
        }
    }
}

/// Transformed text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
}

/// Render a result in the specified format.
pub fn render_result<T: Serialize>(message: &str, result: &T, args: &TextLensArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => render_human(message, result, args),
        OutputFormat::Json => render_json(result, args),
    }
}

/// Render transformed text: raw in human mode, wrapped in an object in JSON mode.
pub fn render_text(text: String, args: &TextLensArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(text),
        OutputFormat::Json => render_json(&TextResult { text }, args),
    }
}

fn render_json<T: Serialize>(result: &T, args: &TextLensArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn render_human<T: Serialize>(message: &str, result: &T, args: &TextLensArgs) -> Result<String> {
    let mut out = String::new();
    if args.verbosity() > 1 {
        out.push_str(message);
        out.push_str("\n\n");
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;
    write_value(&value, 0, &mut out);

    Ok(out.trim_end().to_string())
}

fn write_value(value: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                match field {
                    Value::Object(_) => {
                        out.push_str(&format!("{pad}{}:\n", label(key)));
                        write_value(field, indent + 1, out);
                    }
                    Value::Array(items) if items.is_empty() => {
                        out.push_str(&format!("{pad}{}: (none)\n", label(key)));
                    }
                    Value::Array(_) => {
                        out.push_str(&format!("{pad}{}:\n", label(key)));
                        write_value(field, indent + 1, out);
                    }
                    scalar => {
                        out.push_str(&format!("{pad}{}: {}\n", label(key), scalar_text(scalar)));
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(map) if indent > 0 && is_flat(map) => {
                        let row: Vec<String> = map.values().map(scalar_text).collect();
                        out.push_str(&format!("{pad}{}\n", row.join("  ")));
                    }
                    Value::Object(_) | Value::Array(_) => {
                        write_value(item, indent, out);
                        out.push('\n');
                    }
                    scalar => out.push_str(&format!("{pad}{}\n", scalar_text(scalar))),
                }
            }
        }
        scalar => out.push_str(&format!("{pad}{}\n", scalar_text(scalar))),
    }
}

fn is_flat(map: &serde_json::Map<String, Value>) -> bool {
    map.values().all(|v| !v.is_object() && !v.is_array())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.2}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn label(key: &str) -> String {
    key.replace('_', " ")
}
