use inflammation::prelude::*;

#[test]
fn test_observation_days() {
    let mut patient = Patient::new("Alice");
    assert_eq!(patient.add_observation(5.0, None).day(), 0);
    assert_eq!(patient.add_observation(7.0, None).day(), 1);
    assert_eq!(patient.add_observation(9.0, Some(10)).day(), 10);
    assert_eq!(patient.add_observation(1.0, None).day(), 11);

    let days: Vec<usize> = patient.observations().iter().map(|obs| obs.day()).collect();
    assert_eq!(days, vec![0, 1, 10, 11]);
    assert_eq!(patient.last_observation().map(|obs| obs.value()), Some(1.0));
}

#[test]
fn test_names() {
    let person = Person::new("Carol");
    let patient = Patient::new("Alice");
    let doctor = Doctor::new("Dr. Bob");
    let names: Vec<&str> = vec![person.name(), patient.name(), doctor.name()];
    assert_eq!(names, vec!["Carol", "Alice", "Dr. Bob"]);
}

#[test]
fn test_doctor_patients() {
    let mut doctor = Doctor::new("Dr. Bob");
    let alice = Patient::new("Alice");
    let other_alice = Patient::new("Alice");

    doctor.add_patient(&alice);
    doctor.add_patient(&alice);
    assert_eq!(doctor.npatients(), 1);

    doctor.add_patient(&other_alice);
    assert_eq!(doctor.npatients(), 2);

    doctor.remove_patient(&alice).unwrap();
    assert!(!doctor.treats(&alice));
    assert!(doctor.treats(&other_alice));
    assert_eq!(doctor.patients().collect::<Vec<_>>(), vec![&other_alice.id()]);
}

#[test]
fn test_remove_unknown_patient() {
    let mut doctor = Doctor::new("Dr. Bob");
    let patient = Patient::new("Alice");
    let err = doctor.remove_patient(&patient).unwrap_err();
    assert!(matches!(err, RecordError::NotFound { .. }));
    assert!(err.to_string().contains("Dr. Bob"));
}

/// A patient can be shared between doctors and keeps growing while treated
#[test]
fn test_shared_patient() {
    let mut first = Doctor::new("Dr. Bob");
    let mut second = Doctor::new("Dr. Eve");
    let mut patient = Patient::new("Alice");

    first.add_patient(&patient);
    second.add_patient(&patient);
    patient.add_observation(3.0, None);

    first.remove_patient(&patient).unwrap();
    assert!(second.treats(&patient));
    assert_eq!(patient.nobs(), 1);
}
