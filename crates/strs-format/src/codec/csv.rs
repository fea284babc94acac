//! Comma-separated batches
//!
//! Records are not tied to lines. All entries of the input are read in
//! order and every `csv_field_count` of them form one record.

use crate::csv;
use crate::diagnostics::Diagnostics;
use crate::error::{Result, StrsError};
use crate::latin1;
use crate::record::Record;
use crate::schema::RecordSchema;

/// Line terminator written after every record
pub const LINE_ENDING: &str = "\r\n";

pub(super) fn decode(
    schema: &RecordSchema,
    bytes: &[u8],
    diag: &mut dyn Diagnostics,
) -> Result<Vec<Record>> {
    let text = latin1::decode(bytes);

    let mut entries = Vec::new();
    for (i, line) in lines(&text).enumerate() {
        for entry in csv::split(line) {
            entries.push(entry.map_err(|e| e.at_line(i + 1))?);
        }
    }

    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let per_record = schema.csv_field_count();
    if per_record == 0 || !entries.len().is_multiple_of(per_record) {
        return Err(StrsError::IncompleteRecord {
            expected: per_record,
            available: entries.len(),
        });
    }

    let count = entries.len() / per_record;
    let mut entries = entries.into_iter();
    (0..count)
        .map(|index| decode_record(schema, &mut entries, diag).map_err(|e| e.in_record(index)))
        .collect()
}

fn decode_record(
    schema: &RecordSchema,
    entries: &mut impl Iterator<Item = String>,
    diag: &mut dyn Diagnostics,
) -> Result<Record> {
    let mut values = Vec::with_capacity(schema.field_count());
    for field in schema.fields() {
        let entry = if field.logical_type().in_csv() {
            entries.next().unwrap_or_default()
        } else {
            String::new()
        };
        values.push(field.parse_logical(&entry, diag)?);
    }
    Ok(Record::from_values(values))
}

pub(super) fn encode(schema: &RecordSchema, records: &[Record]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let line = encode_record(schema, record).map_err(|e| e.in_record(index))?;
        out.extend(line);
    }
    Ok(out)
}

fn encode_record(schema: &RecordSchema, record: &Record) -> Result<Vec<u8>> {
    let mut entries = Vec::with_capacity(schema.csv_field_count());
    for (index, field) in schema.fields().iter().enumerate() {
        if !field.logical_type().in_csv() {
            continue;
        }
        let value = record
            .value(index)
            .ok_or_else(|| StrsError::FieldNotFound(field.name().to_string()))?;
        entries.push(field.to_logical(value));
    }

    let mut line = csv::join(&entries);
    line.push_str(LINE_ENDING);
    latin1::encode(&line)
}

/// Lines of a document, split on CRLF, LF or a lone CR
///
/// A terminator at the very end does not start another line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}
