//! Tabular export: rows to CSV, and the download that carries it.

use serde_json::{Map, Value};

/// Default MIME type for CSV downloads.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// One exported row: column name to scalar. Key order is preserved.
pub type Row = Map<String, Value>;

/// Serialize rows as comma-separated text.
///
/// Columns come from `headers` when given, otherwise from the first row's key
/// order. Rows are joined by `\n` with no trailing newline. An empty row set
/// yields an empty string even when headers are supplied.
///
/// Fields are quoted only when they contain a comma, quote or line break, with
/// one exception: with a single column, an empty field is written as `""` so
/// the record is not read back as a blank line.
pub fn serialize(rows: &[Row], headers: Option<&[String]>) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let columns: Vec<&str> = match headers {
        Some(headers) => headers.iter().map(String::as_str).collect(),
        None => first.keys().map(String::as_str).collect(),
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(record(columns.iter().map(|c| c.to_string())));
    for row in rows {
        lines.push(record(columns.iter().map(|c| field_text(row.get(*c)))));
    }

    lines.join("\n")
}

fn record(fields: impl ExactSizeIterator<Item = String>) -> String {
    let single = fields.len() == 1;
    let line = fields
        .map(|f| escape_field(&f))
        .collect::<Vec<_>>()
        .join(",");
    if single && line.is_empty() {
        "\"\"".to_string()
    } else {
        line
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        // Nested values are written as compact JSON.
        Some(other) => other.to_string(),
    }
}

/// Quote iff the field contains a comma, quote or line break; inner quotes doubled.
fn escape_field(field: &str) -> String {
    let needs_quoting =
        field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r');

    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A file handed to the client for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: String,
    pub contents: Vec<u8>,
}

impl Download {
    pub fn new(
        filename: impl AsRef<str>,
        contents: impl Into<Vec<u8>>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            filename: sanitize_filename(filename.as_ref()),
            mime_type: mime_type.into(),
            contents: contents.into(),
        }
    }

    pub fn csv(filename: impl AsRef<str>, contents: String) -> Self {
        Self::new(filename, contents, CSV_MIME)
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Strip characters that would break the `Content-Disposition` header or
/// escape the target directory. Header values must be visible ASCII.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '"' | '/' | '\\' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "export.csv".to_string()
    } else {
        cleaned
    }
}
