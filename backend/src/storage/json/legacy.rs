//! Reader for expense files written by the first version of the tracker.
//!
//! Those files look like a JSON array of flat objects but were produced by
//! string formatting without any escaping, so a description containing a
//! quote or backslash makes the file invalid JSON. This scanner reads them the
//! way they were written: split the array on `},{` and pull each field out by
//! its literal `"key":` marker. A quoted value ends at the next `"`; a bare
//! value is the run of digits, `.` and `-` that follows the marker.

use tracing::warn;

use crate::domain::models::expense::Expense;

/// Parse a whole legacy document. Records that cannot be read are skipped
/// with a warning.
pub fn parse_document(content: &str) -> Vec<Expense> {
    let content = content.trim();
    if content.is_empty() || content == "[]" {
        return Vec::new();
    }

    let inner = content.strip_prefix('[').unwrap_or(content);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();
    if inner.is_empty() {
        return Vec::new();
    }

    split_records(inner)
        .into_iter()
        .filter_map(|chunk| {
            let record = normalize_record(chunk);
            match parse_record(&record) {
                Ok(expense) => Some(expense),
                Err(reason) => {
                    warn!("Skipping unreadable expense record ({}): {}", reason, record);
                    None
                }
            }
        })
        .collect()
}

/// Split on `}` `,` optional-whitespace `{`, dropping those delimiters
fn split_records(inner: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut search_from = 0;

    while let Some(offset) = inner[search_from..].find("},") {
        let close = search_from + offset;
        let after_comma = close + 2;
        let rest = &inner[after_comma..];
        let skipped = rest.len() - rest.trim_start().len();
        let open = after_comma + skipped;

        if inner[open..].starts_with('{') {
            records.push(&inner[start..close]);
            start = open + 1;
            search_from = start;
        } else {
            search_from = after_comma;
        }
    }
    records.push(&inner[start..]);
    records
}

fn normalize_record(chunk: &str) -> String {
    let chunk = chunk.trim();
    let mut record = String::with_capacity(chunk.len() + 2);
    if !chunk.starts_with('{') {
        record.push('{');
    }
    record.push_str(chunk);
    if !chunk.ends_with('}') {
        record.push('}');
    }
    record
}

fn parse_record(record: &str) -> Result<Expense, String> {
    let id = extract_value(record, "id")
        .ok_or("missing id")?
        .parse::<u64>()
        .map_err(|e| format!("bad id: {}", e))?;
    let category = extract_value(record, "category").ok_or("missing category")?;
    let amount = extract_value(record, "amount")
        .ok_or("missing amount")?
        .parse::<f64>()
        .map_err(|e| format!("bad amount: {}", e))?;
    let date = extract_value(record, "date").ok_or("missing date")?;
    let description = extract_value(record, "description").filter(|d| !d.is_empty());

    Ok(Expense {
        id,
        category: category.to_string(),
        amount,
        date: date.to_string(),
        description: description.map(str::to_string),
    })
}

fn extract_value<'a>(record: &'a str, key: &str) -> Option<&'a str> {
    let marker = format!("\"{}\":", key);
    let start = record.find(&marker)? + marker.len();
    let value = record[start..].trim_start();

    if let Some(quoted) = value.strip_prefix('"') {
        let end = quoted.find('"')?;
        Some(&quoted[..end])
    } else {
        let end = value
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .unwrap_or(value.len());
        Some(&value[..end])
    }
}
