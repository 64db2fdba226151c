#![cfg(test)]
use hospital_common::time::{Clock, Date};
use hospital_core::hospital::{Admission, Assignment};
use hospital_core::models::Prescription;
use hospital_core::{ErrorKind, Hospital, HospitalError};

fn start() -> Date {
    Date::new(1, 6, 2021).unwrap()
}

fn hospital() -> Hospital {
    Hospital::new(Clock::new(start()))
}

/// Walks one patient through two stays and checks that the second stay
/// starts with the medicines left over from the first.
#[test]
fn readmission_preserves_identity_and_medicines() -> anyhow::Result<()> {
    let mut hospital = hospital();

    assert_eq!(hospital.admit("p1")?, Admission::First);
    hospital.add_medicine("aspirin", "100", "2", "p1")?;
    hospital.add_medicine("insulin", "10", "3", "p1")?;
    hospital.discharge("p1")?;

    let d1 = hospital.advance_date("10")?;
    assert_eq!(hospital.admit("p1")?, Admission::Returning);

    let report = hospital.patient_report("p1")?;
    assert_eq!(report.care_periods.len(), 2);
    assert_eq!(report.care_periods[0].start(), start());
    assert_eq!(report.care_periods[0].end(), Some(start()));
    assert_eq!(report.care_periods[1].start(), d1);
    assert!(report.care_periods[1].is_open());
    assert_eq!(report.medicines()["aspirin"], Prescription::new(100, 2));
    assert_eq!(report.medicines()["insulin"], Prescription::new(10, 3));

    assert_eq!(hospital.all_patient_ids().collect::<Vec<_>>(), vec!["p1"]);
    assert!(hospital.medicine_index().contains("aspirin", "p1"));
    Ok(())
}

#[test]
fn duplicate_recruitment_is_rejected() {
    let mut hospital = hospital();
    assert!(hospital.recruit("drA").is_ok());
    let err = hospital.recruit("drA").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[test]
fn assigning_unknown_staff_changes_nothing() {
    let mut hospital = hospital();
    hospital.admit("p2").unwrap();
    let before = hospital.care_periods().to_vec();

    assert_eq!(
        hospital.assign("nurseB", "p2"),
        Err(HospitalError::NotFound("nurseB".into()))
    );
    assert_eq!(hospital.care_periods(), before.as_slice());
}

#[test]
fn repeat_assignment_is_confirmed_without_change() {
    let mut hospital = hospital();
    hospital.recruit("drA").unwrap();
    hospital.admit("p1").unwrap();

    assert_eq!(hospital.assign("drA", "p1"), Ok(Assignment::Added));
    let once = hospital.care_periods().to_vec();
    assert_eq!(hospital.assign("drA", "p1"), Ok(Assignment::AlreadyAssigned));
    assert_eq!(hospital.care_periods(), once.as_slice());
}

#[test]
fn staff_keep_history_across_patients() {
    let mut hospital = hospital();
    hospital.recruit("drA").unwrap();
    hospital.admit("p1").unwrap();
    hospital.admit("p2").unwrap();
    hospital.assign("drA", "p1").unwrap();
    hospital.assign("drA", "p2").unwrap();
    hospital.discharge("p1").unwrap();

    let report = hospital.staff_report("drA").unwrap();
    let patients: Vec<&str> = report.care_periods.iter().map(|p| p.patient_id()).collect();
    assert_eq!(patients, vec!["p1", "p2"]);
}

#[test]
fn negative_strength_leaves_medicines_untouched() {
    let mut hospital = hospital();
    hospital.admit("p1").unwrap();
    hospital.add_medicine("aspirin", "100", "2", "p1").unwrap();

    let err = hospital.add_medicine("aspirin", "-5", "10", "p1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        hospital.patient("p1").unwrap().medicines()["aspirin"],
        Prescription::new(100, 2)
    );
    assert_eq!(hospital.medicine_index().len(), 1);
}

#[test]
fn last_patient_removal_drops_medicine_and_readd_is_clean() {
    let mut hospital = hospital();
    hospital.admit("p1").unwrap();
    hospital.admit("p2").unwrap();
    hospital.add_medicine("aspirin", "100", "2", "p1").unwrap();
    hospital.remove_medicine("aspirin", "p1").unwrap();
    assert!(hospital.medicine_index().prescribed_to("aspirin").is_none());

    hospital.add_medicine("aspirin", "50", "1", "p2").unwrap();
    let patients: Vec<&str> = hospital
        .medicine_index()
        .prescribed_to("aspirin")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(patients, vec!["p2"]);
}

#[test]
fn reports_accept_history_but_mutations_need_open_episode() {
    let mut hospital = hospital();
    hospital.admit("p1").unwrap();
    hospital.discharge("p1").unwrap();

    assert!(hospital.patient_report("p1").is_ok());
    assert_eq!(
        hospital.remove_medicine("aspirin", "p1").map_err(|e| e.kind()),
        Err(ErrorKind::NotFound)
    );
    assert_eq!(
        hospital.add_medicine("aspirin", "1", "1", "p1").map_err(|e| e.kind()),
        Err(ErrorKind::NotFound)
    );
}

#[test]
fn clock_commands_timestamp_episodes() {
    let mut hospital = hospital();
    hospital.set_date("28", "2", "2021").unwrap();
    hospital.admit("p1").unwrap();
    hospital.advance_date("1").unwrap();
    hospital.discharge("p1").unwrap();

    let period = hospital.latest_care_period("p1").unwrap();
    assert_eq!(period.start(), Date::new(28, 2, 2021).unwrap());
    assert_eq!(period.end(), Date::new(1, 3, 2021));
}
