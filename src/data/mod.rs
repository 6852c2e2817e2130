//! Record model of people and their observations
//!
//! [Patient]s own their [Observation]s, while a [Doctor] only refers to the patients
//! it treats by [PatientId]. Both share a name through the [Named] trait.

use std::fmt;

pub mod doctor;
pub mod patient;

pub use doctor::Doctor;
pub use patient::{Observation, Patient, PatientId};

/// Something with a human readable name
pub trait Named {
    fn name(&self) -> &str;
}

/// A named person without a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
