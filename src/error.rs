//! Error types for inflammation tables and the record model

use thiserror::Error;

use crate::data::PatientId;

/// Errors raised while building, loading or reducing an inflammation table
#[derive(Error, Debug)]
pub enum InflammationError {
    /// A row does not have the same number of days as the first row
    #[error("Row {row} has {found} days, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row (or day) index outside of the table
    #[error("Index {index} is out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised by the record model
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// The doctor does not currently treat this patient
    #[error("Patient {patient} is not a patient of {doctor}")]
    NotFound { patient: PatientId, doctor: String },
}

pub type Result<T> = std::result::Result<T, InflammationError>;
