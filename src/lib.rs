//! Daily summary statistics over inflammation tables, and a small record model of
//! patients, doctors and their observations.
//!
//! An inflammation table holds one row per patient and one column per day. The
//! reductions in [routines::statistics] collapse the patient axis and return one value
//! per day. The record model in [data] is independent of the tables.

/// Patients, doctors and observations
pub mod data;
/// Entrypoint for a full analysis run
pub mod entrypoints;
/// Error types
pub mod error;
/// Routines for loading, reducing and writing tables, and for settings and logging
pub mod routines;
/// The inflammation table
pub mod structs;

#[cfg(test)]
mod tests;

pub use crate::entrypoints::analyse;

/// A collection of commonly used items
pub mod prelude {
    pub use crate::data::{Doctor, Named, Observation, Patient, PatientId, Person};
    pub use crate::entrypoints::{analyse, Analysis};
    pub use crate::error::{InflammationError, RecordError};
    pub use crate::routines::datafile::{load_csv, read_table};
    pub use crate::routines::logger;
    pub use crate::routines::settings::{read_settings, Settings};
    pub use crate::routines::statistics::*;
    pub use crate::structs::table::{InflammationTable, TableSource};
}
