use ndarray::Array1;
use serde_derive::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Named;

static NEXT_PATIENT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [Patient]
///
/// Two patients with the same name are still different patients, so identity
/// is carried by this id rather than by any of the patient's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PatientId(u64);

impl PatientId {
    fn next() -> Self {
        PatientId(NEXT_PATIENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single reading of a patient on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    value: f64,
    day: usize,
}

impl Observation {
    pub fn new(value: f64, day: usize) -> Self {
        Observation { value, day }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn day(&self) -> usize {
        self.day
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Observation on day {}: {}", self.day, self.value)
    }
}

/// A person with a growing record of [Observation]s
///
/// Observations are kept in the order they were added, which is not necessarily
/// the order of their days. Equality and hashing use the [PatientId] only.
#[derive(Debug, Serialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Patient {
            id: PatientId::next(),
            name: name.into(),
            observations: Vec::new(),
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Record a new reading and return it
    ///
    /// Without an explicit `day`, the reading is placed one day after the most recently
    /// *added* observation (not the latest day seen), or on day 0 for the first one.
    /// A previous day of `usize::MAX` is kept as is rather than wrapping to 0.
    pub fn add_observation(&mut self, value: f64, day: Option<usize>) -> Observation {
        let day = day.unwrap_or_else(|| match self.observations.last() {
            Some(last) => last.day.checked_add(1).unwrap_or_else(|| {
                tracing::warn!(
                    "Patient {} ({}) has no day after {}, reusing it",
                    self.name,
                    self.id,
                    last.day
                );
                last.day
            }),
            None => 0,
        });

        let observation = Observation::new(value, day);
        self.observations.push(observation);
        tracing::trace!("Patient {} ({}): {}", self.name, self.id, observation);
        observation
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn last_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }

    pub fn nobs(&self) -> usize {
        self.observations.len()
    }

    /// Observation values in insertion order
    pub fn values(&self) -> Array1<f64> {
        self.observations.iter().map(Observation::value).collect()
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
