//! Fixed-width DAT batches

use crate::diagnostics::Diagnostics;
use crate::error::{Result, StrsError};
use crate::latin1;
use crate::record::Record;
use crate::schema::RecordSchema;

pub(super) fn decode(
    schema: &RecordSchema,
    bytes: &[u8],
    diag: &mut dyn Diagnostics,
) -> Result<Vec<Record>> {
    let width = schema.record_width();
    if !bytes.len().is_multiple_of(width) {
        return Err(StrsError::DatLength {
            length: bytes.len(),
            record_width: width,
        });
    }

    bytes
        .chunks_exact(width)
        .enumerate()
        .map(|(index, chunk)| decode_record(schema, chunk, diag).map_err(|e| e.in_record(index)))
        .collect()
}

fn decode_record(
    schema: &RecordSchema,
    chunk: &[u8],
    diag: &mut dyn Diagnostics,
) -> Result<Record> {
    let values = schema
        .fields()
        .iter()
        .map(|field| field.normalize(&latin1::decode(&chunk[field.range()]), diag))
        .collect::<Result<Vec<_>>>()?;

    Ok(Record::from_values(values))
}

pub(super) fn encode(schema: &RecordSchema, records: &[Record]) -> Result<Vec<u8>> {
    let width = schema.record_width();
    let mut out = vec![0u8; records.len() * width];

    for (index, (record, buf)) in records.iter().zip(out.chunks_exact_mut(width)).enumerate() {
        encode_record(schema, record, buf).map_err(|e| e.in_record(index))?;
    }

    Ok(out)
}

fn encode_record(schema: &RecordSchema, record: &Record, buf: &mut [u8]) -> Result<()> {
    for (index, field) in schema.fields().iter().enumerate() {
        let value = record
            .value(index)
            .ok_or_else(|| StrsError::FieldNotFound(field.name().to_string()))?;
        latin1::encode_into(value, &mut buf[field.range()]).map_err(|e| e.in_field(field.name()))?;
    }
    Ok(())
}
