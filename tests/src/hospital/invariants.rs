#![cfg(test)]
//! Random command sequences against a fresh hospital. After every step the
//! cross-registry invariants must hold, and a rejected command must leave the
//! hospital exactly as it was.

use std::collections::BTreeSet;

use hospital_core::Hospital;
use proptest::prelude::*;

const STAFF: [&str; 3] = ["drA", "drB", "nurseC"];
const PATIENTS: [&str; 4] = ["p1", "p2", "p3", "p4"];
const MEDICINES: [&str; 3] = ["aspirin", "insulin", "zinc"];

#[derive(Debug, Clone)]
enum Op {
    Recruit(usize),
    Admit(usize),
    Discharge(usize),
    Assign(usize, usize),
    AddMedicine(usize, String, String, usize),
    RemoveMedicine(usize, usize),
    Advance(String),
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "-[0-9]{1,2}", "[a-z]{1,2}"]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..STAFF.len()).prop_map(Op::Recruit),
        (0..PATIENTS.len()).prop_map(Op::Admit),
        (0..PATIENTS.len()).prop_map(Op::Discharge),
        (0..STAFF.len(), 0..PATIENTS.len()).prop_map(|(s, p)| Op::Assign(s, p)),
        (0..MEDICINES.len(), literal(), literal(), 0..PATIENTS.len())
            .prop_map(|(m, s, d, p)| Op::AddMedicine(m, s, d, p)),
        (0..MEDICINES.len(), 0..PATIENTS.len()).prop_map(|(m, p)| Op::RemoveMedicine(m, p)),
        "[0-9]{1,2}".prop_map(Op::Advance),
    ]
}

/// Returns whether the hospital accepted the command.
fn apply(hospital: &mut Hospital, op: &Op) -> bool {
    match op {
        Op::Recruit(s) => hospital.recruit(STAFF[*s]).is_ok(),
        Op::Admit(p) => hospital.admit(PATIENTS[*p]).is_ok(),
        Op::Discharge(p) => hospital.discharge(PATIENTS[*p]).is_ok(),
        Op::Assign(s, p) => hospital.assign(STAFF[*s], PATIENTS[*p]).is_ok(),
        Op::AddMedicine(m, strength, dosage, p) => hospital
            .add_medicine(MEDICINES[*m], strength, dosage, PATIENTS[*p])
            .is_ok(),
        Op::RemoveMedicine(m, p) => hospital.remove_medicine(MEDICINES[*m], PATIENTS[*p]).is_ok(),
        Op::Advance(days) => hospital.advance_date(days).is_ok(),
    }
}

fn check_invariants(hospital: &Hospital) -> Result<(), TestCaseError> {
    let all: BTreeSet<&str> = hospital.all_patient_ids().collect();

    for id in hospital.current_patient_ids() {
        prop_assert!(all.contains(id));
    }

    for id in &all {
        let latest = hospital.latest_care_period(id);
        prop_assert!(latest.is_some(), "{} has no care period", id);
        prop_assert_eq!(hospital.is_admitted(id), latest.is_some_and(|p| p.is_open()));

        let patient = hospital.patient(id).unwrap();
        for medicine in patient.medicines().keys() {
            prop_assert!(hospital.medicine_index().contains(medicine, id));
        }
    }

    for (medicine, patients) in hospital.medicine_index().iter() {
        prop_assert!(!patients.is_empty(), "{} has an empty entry", medicine);
        for id in patients {
            prop_assert!(hospital.patient(id).is_some_and(|p| p.takes(medicine)));
        }
    }

    let mut open: BTreeSet<&str> = BTreeSet::new();
    for period in hospital.care_periods() {
        prop_assert!(all.contains(period.patient_id()));
        if period.is_open() {
            prop_assert!(open.insert(period.patient_id()), "two open periods");
        }
        for staff_id in period.staff() {
            prop_assert!(hospital.staff_member(staff_id).is_some());
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(ops in prop::collection::vec(op(), 0..64)) {
        let mut hospital = Hospital::default();
        for op in &ops {
            let before = hospital.clone();
            if !apply(&mut hospital, op) {
                prop_assert_eq!(&hospital, &before, "rejected {:?} mutated state", op);
            }
            check_invariants(&hospital)?;
        }
    }

    #[test]
    fn assignment_is_idempotent(s in 0..STAFF.len(), p in 0..PATIENTS.len(), repeats in 1..5usize) {
        let mut hospital = Hospital::default();
        hospital.recruit(STAFF[s]).unwrap();
        hospital.admit(PATIENTS[p]).unwrap();
        hospital.assign(STAFF[s], PATIENTS[p]).unwrap();
        let once = hospital.clone();

        for _ in 0..repeats {
            prop_assert!(hospital.assign(STAFF[s], PATIENTS[p]).is_ok());
        }
        prop_assert_eq!(hospital, once);
    }
}
