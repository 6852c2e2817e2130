use std::collections::HashSet;

use super::{Named, Patient, PatientId};
use crate::error::RecordError;

/// A person who treats a set of [Patient]s
///
/// The doctor does not own its patients, it only keeps their [PatientId]s.
/// A patient can be treated by several doctors at once.
#[derive(Debug, Clone)]
pub struct Doctor {
    name: String,
    patients: HashSet<PatientId>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Doctor {
            name: name.into(),
            patients: HashSet::new(),
        }
    }

    /// Start treating `patient`. Adding the same patient again has no effect.
    pub fn add_patient(&mut self, patient: &Patient) {
        if !self.patients.insert(patient.id()) {
            tracing::trace!("{} already treats patient {}", self.name, patient.id());
        }
    }

    /// Stop treating `patient`
    pub fn remove_patient(&mut self, patient: &Patient) -> Result<(), RecordError> {
        if self.patients.remove(&patient.id()) {
            Ok(())
        } else {
            Err(RecordError::NotFound {
                patient: patient.id(),
                doctor: self.name.clone(),
            })
        }
    }

    pub fn treats(&self, patient: &Patient) -> bool {
        self.patients.contains(&patient.id())
    }

    pub fn npatients(&self) -> usize {
        self.patients.len()
    }

    pub fn patients(&self) -> impl Iterator<Item = &PatientId> {
        self.patients.iter()
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}
