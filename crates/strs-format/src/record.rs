use crate::descriptor::FieldDescriptor;
use crate::diagnostics::Diagnostics;
use crate::error::{Result, StrsError};
use crate::schema::RecordSchema;

/// One record held as fixed-width internal values, indexed by schema position
///
/// Every value is exactly as wide as its field. Records only make sense
/// together with the [`RecordSchema`] they were built from; name lookups
/// go through it.
///
/// # Examples
///
/// ```
/// use strs_format::{CollectingDiagnostics, Record, RecordSchema};
///
/// let schema = RecordSchema::strs()?;
/// let mut diag = CollectingDiagnostics::new();
///
/// let mut record = Record::blank(&schema);
/// record.set(&schema, "ZipCode", "4321", &mut diag)?;
/// record.set_logical(&schema, "ServiceCredit", "1.5", &mut diag)?;
///
/// assert_eq!(record.get(&schema, "ZipCode")?, "04321");
/// assert_eq!(record.get(&schema, "ServiceCredit")?, "150");
/// assert_eq!(record.logical(&schema, "ServiceCredit")?, "1.50");
/// # Ok::<(), strs_format::StrsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    /// Record with every field filled with its padding character
    #[must_use]
    pub fn blank(schema: &RecordSchema) -> Self {
        Self {
            values: schema.fields().iter().map(FieldDescriptor::blank).collect(),
        }
    }

    pub(crate) fn from_values(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Internal value at a schema position
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// All internal values in schema order
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Internal value of a named field
    pub fn get(&self, schema: &RecordSchema, name: &str) -> Result<&str> {
        let index = schema.position(name)?;
        self.value(index)
            .ok_or_else(|| StrsError::FieldNotFound(name.to_string()))
    }

    /// Logical (CSV) form of a named field
    pub fn logical(&self, schema: &RecordSchema, name: &str) -> Result<String> {
        let index = schema.position(name)?;
        let field = &schema.fields()[index];
        self.value(index)
            .map(|value| field.to_logical(value))
            .ok_or_else(|| StrsError::FieldNotFound(name.to_string()))
    }

    /// Assign an internal value, trimming and padding it to the field width
    pub fn set(
        &mut self,
        schema: &RecordSchema,
        name: &str,
        value: &str,
        diag: &mut dyn Diagnostics,
    ) -> Result<()> {
        let index = schema.position(name)?;
        let normalized = schema.fields()[index].normalize(value, diag)?;
        self.store(index, name, normalized)
    }

    /// Assign a logical value as it would appear in a CSV row
    ///
    /// Fixed-point fields take a decimal such as `123.45`.
    pub fn set_logical(
        &mut self,
        schema: &RecordSchema,
        name: &str,
        value: &str,
        diag: &mut dyn Diagnostics,
    ) -> Result<()> {
        let index = schema.position(name)?;
        let internal = schema.fields()[index].parse_logical(value, diag)?;
        self.store(index, name, internal)
    }

    fn store(&mut self, index: usize, name: &str, value: String) -> Result<()> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| StrsError::FieldNotFound(name.to_string()))?;
        *slot = value;
        Ok(())
    }
}
