use crate::descriptor::FieldDescriptor;
use crate::error::{Result, StrsError};
use crate::layout;
use std::collections::HashMap;

/// Validated, ordered set of field descriptors making up one record
///
/// Construction sorts the descriptors by start position and checks that they
/// tile the record exactly: the first starts at 1, each one starts where the
/// previous ended, and together they cover the declared width.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Descriptors in start position order
    fields: Vec<FieldDescriptor>,
    /// Field name to position mapping
    field_map: HashMap<String, usize>,
    /// Total record width in bytes
    record_width: usize,
}

impl RecordSchema {
    /// Build and validate a schema
    ///
    /// # Examples
    ///
    /// ```
    /// use strs_format::{FieldDescriptor, LogicalType, RecordSchema};
    ///
    /// let schema = RecordSchema::new(
    ///     vec![
    ///         FieldDescriptor::new("Amount", 3, 6, LogicalType::FixedPointDecimal),
    ///         FieldDescriptor::new("Code", 1, 2, LogicalType::Alphanumeric),
    ///     ],
    ///     8,
    /// )?;
    /// assert_eq!(schema.field_names(), ["Code", "Amount"]);
    ///
    /// assert!(RecordSchema::new(
    ///     vec![FieldDescriptor::new("Code", 2, 2, LogicalType::Alphanumeric)],
    ///     3,
    /// )
    /// .is_err());
    /// # Ok::<(), strs_format::StrsError>(())
    /// ```
    pub fn new(mut fields: Vec<FieldDescriptor>, record_width: usize) -> Result<Self> {
        if fields.is_empty() {
            return Err(StrsError::InvalidSchema("no fields".to_string()));
        }
        fields.sort_by_key(FieldDescriptor::start);

        let mut field_map = HashMap::with_capacity(fields.len());
        let mut running = 1;
        for (index, field) in fields.iter().enumerate() {
            if field.length() == 0 {
                return Err(StrsError::InvalidSchema(format!(
                    "field {} has zero length",
                    field.name()
                )));
            }
            if field.start() != running {
                return Err(StrsError::InvalidSchema(format!(
                    "field {} starts at {} but the previous field ends at {}",
                    field.name(),
                    field.start(),
                    running - 1
                )));
            }
            if field_map.insert(field.name().to_string(), index).is_some() {
                return Err(StrsError::DuplicateField(field.name().to_string()));
            }
            running += field.length();
        }

        let total = running - 1;
        if total != record_width {
            return Err(StrsError::InvalidSchema(format!(
                "fields cover {total} bytes but the record is {record_width} bytes wide"
            )));
        }

        Ok(Self {
            fields,
            field_map,
            record_width,
        })
    }

    /// Schema for STRS annual reporting records
    pub fn strs() -> Result<Self> {
        Self::new(layout::strs_fields(), layout::STRS_RECORD_WIDTH)
    }

    /// Total record width in bytes
    #[must_use]
    pub fn record_width(&self) -> usize {
        self.record_width
    }

    /// Number of fields, including reserved ones
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of fields that appear in CSV rows
    #[must_use]
    pub fn csv_field_count(&self) -> usize {
        self.csv_fields().count()
    }

    /// All fields in record order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields that appear in CSV rows, in record order
    pub fn csv_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.logical_type().in_csv())
    }

    /// Get field by position
    #[must_use]
    pub fn get_field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Get field by name
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_map
            .get(name)
            .and_then(|&index| self.fields.get(index))
    }

    /// Position of a field by name
    pub fn position(&self, name: &str) -> Result<usize> {
        self.field_map
            .get(name)
            .copied()
            .ok_or_else(|| StrsError::FieldNotFound(name.to_string()))
    }

    /// Field names in record order
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDescriptor::name).collect()
    }
}
