//! CSV and fixed-width DAT record conversion for STRS annual reporting files
//!
//! An STRS record is 350 bytes of fixed-width fields in the DAT form and 20
//! comma-separated logical values in the CSV form. This crate converts whole
//! batches between the two.
//!
//! # Building blocks
//!
//! - **CSV tokenizer**: a state machine over one line with quoting rules
//!   ([`csv::split`], [`csv::join`])
//! - **Field rules**: trim, pad and unpad policies plus fixed-point
//!   rescaling ([`padding`], [`fixed_point`])
//! - **Schema**: validated field descriptors tiling a record
//!   ([`RecordSchema`], [`FieldDescriptor`])
//! - **Codec**: batch decode and encode in either format ([`RecordCodec`])
//!
//! Non-fatal conditions such as truncated text or rounded amounts go to the
//! [`Diagnostics`] sink passed into each decode.
//!
//! # Example
//!
//! ```
//! use strs_format::{Format, Record, RecordCodec, TracingDiagnostics};
//!
//! let codec = RecordCodec::new()?;
//! let dat = codec.write_dat(&[Record::blank(codec.schema())])?;
//! assert_eq!(dat.len(), 350);
//!
//! let csv = codec.convert(Format::Dat, &dat, &mut TracingDiagnostics)?;
//! assert!(csv.starts_with(b",0.00,0000,0.00, ,000000000,"));
//! assert!(csv.ends_with(b"\r\n"));
//! # Ok::<(), strs_format::StrsError>(())
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod csv;
pub mod descriptor;
pub mod diagnostics;
/// Error types
pub mod error;
pub mod fixed_point;
pub mod latin1;
pub mod layout;
pub mod padding;
/// Records held as fixed-width values
pub mod record;
/// Validated record layouts
pub mod schema;

pub use codec::{Format, RecordCodec};
pub use descriptor::{FieldDescriptor, LogicalType};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics, Warning};
pub use error::{Result, StrsError};
pub use padding::{PadPolicy, Side, TrimPolicy};
pub use record::Record;
pub use schema::RecordSchema;
