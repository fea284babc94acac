//! Warning sink passed into decode operations
//!
//! Conversions never keep global logging state. Anything worth telling the
//! user that does not abort the conversion is reported as a [`Warning`] to
//! the [`Diagnostics`] implementation the caller hands in.

use crate::error::StrsError;
use crate::padding::Side;
use std::fmt;

/// Non-fatal condition raised while normalizing a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Value was longer than its field and characters were dropped
    Truncated {
        /// Descriptor name
        field: String,
        /// Side the characters were removed from
        side: Side,
        /// Value before trimming
        before: String,
        /// Value after trimming
        after: String,
    },
    /// Fixed-point value had more than two significant fraction digits
    Rounded {
        /// Descriptor name
        field: String,
        /// Value as it appeared in the input
        original: String,
        /// Value after rounding to two fraction digits
        rounded: String,
    },
}

impl Warning {
    /// Name of the field the warning refers to
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Truncated { field, .. } | Self::Rounded { field, .. } => field,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                field,
                side,
                before,
                after,
            } => write!(
                f,
                "{field}: value trimmed on the {side} from |{before}| to |{after}|."
            ),
            Self::Rounded {
                field,
                original,
                rounded,
            } => write!(f, "{field}: value |{original}| was rounded to |{rounded}|."),
        }
    }
}

/// Receiver for warnings and errors raised during a conversion
pub trait Diagnostics {
    /// Report a non-fatal condition
    fn warn(&mut self, warning: Warning);

    /// Report the error that is about to abort the conversion
    fn error(&mut self, _error: &StrsError) {}
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(field = warning.field(), "{warning}");
    }

    fn error(&mut self, error: &StrsError) {
        tracing::error!("{error}");
    }
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    warnings: Vec<Warning>,
    errors: Vec<String>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings in the order they were raised
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Rendered error messages in the order they were raised
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether nothing was reported
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    /// Take the collected warnings, leaving the collector empty of them
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    fn error(&mut self, error: &StrsError) {
        self.errors.push(error.to_string());
    }
}
