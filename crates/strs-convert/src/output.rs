//! Layout rendering for the `layout` subcommand

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table, presets};
use serde::Serialize;
use strs_format::{FieldDescriptor, RecordSchema};

#[derive(Serialize)]
struct LayoutExport<'a> {
    record_width: usize,
    fields: &'a [FieldDescriptor],
}

/// Render the schema as a JSON document
///
/// # Errors
///
/// Returns the serializer error if the layout cannot be encoded.
pub fn layout_json(schema: &RecordSchema) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LayoutExport {
        record_width: schema.record_width(),
        fields: schema.fields(),
    })
}

/// Render the schema as a table, one row per field
#[must_use]
pub fn layout_table(schema: &RecordSchema) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        ["#", "Name", "Start", "Length", "Type", "Trim", "Pad", "Pad char"]
            .into_iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
    );

    for (i, field) in schema.fields().iter().enumerate() {
        table.add_row(vec![
            numeric_cell(i + 1),
            Cell::new(field.name()),
            numeric_cell(field.start()),
            numeric_cell(field.length()),
            Cell::new(field.logical_type()),
            Cell::new(format!("{:?}", field.trim_policy())),
            Cell::new(format!("{:?}", field.pad_policy())),
            Cell::new(format!("{:?}", field.pad_char())),
        ]);
    }

    table
}

fn numeric_cell(value: usize) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
