//! # The Hospital Aggregate
//!
//! Owns every registry and exposes one method per command.
//!
//! ## State
//! * `staff`: recruited staff, keyed by id.
//! * `patients`: every patient ever admitted, keyed by id. This table is the only
//!   owner of patient records; a record survives discharge and is reused when the
//!   patient comes back.
//! * `admitted`: ids of the patients currently in the hospital.
//! * `care_periods`: every episode ever opened, in creation order. Never shrinks.
//! * `medicines`: the [`MedicineIndex`] mirror of all patients' medicine lists.
//! * `clock`: the injected simulated "today".
//!
//! ## Failure model
//! Every command validates first and mutates second, so an `Err` always means
//! nothing changed.

mod report;

use std::collections::{BTreeMap, BTreeSet};

use hospital_common::time::{Clock, Date};
use hospital_common::utils::numeric::parse_number;
use tracing::debug;

use crate::error::HospitalError;
use crate::medicine_index::MedicineIndex;
use crate::models::{CarePeriod, Person, Prescription};

pub use report::{PatientReport, StaffReport};

/// Whether an admission minted a new patient record or reused an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    First,
    Returning,
}

/// Result of a successful staff assignment.
///
/// Both variants are successes: assigning the same staff member twice is
/// confirmed but changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Added,
    AlreadyAssigned,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hospital {
    clock: Clock,
    staff: BTreeMap<String, Person>,
    patients: BTreeMap<String, Person>,
    admitted: BTreeSet<String>,
    care_periods: Vec<CarePeriod>,
    medicines: MedicineIndex,
}

impl Hospital {
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    // ── Staff ────────────────────────────────────────────────────────────

    pub fn recruit(&mut self, staff_id: &str) -> Result<(), HospitalError> {
        if self.staff.contains_key(staff_id) {
            return Err(HospitalError::AlreadyExists(staff_id.to_string()));
        }

        self.staff.insert(staff_id.to_string(), Person::new(staff_id));
        debug!(staff_id, "staff recruited");
        Ok(())
    }

    /// Assigns a recruited staff member to a patient's open care period.
    pub fn assign(&mut self, staff_id: &str, patient_id: &str) -> Result<Assignment, HospitalError> {
        if !self.staff.contains_key(staff_id) {
            return Err(HospitalError::NotFound(staff_id.to_string()));
        }
        if !self.admitted.contains(patient_id) {
            return Err(HospitalError::NotFound(patient_id.to_string()));
        }

        let period = self
            .latest_care_period_mut(patient_id)
            .ok_or_else(|| HospitalError::NotFound(patient_id.to_string()))?;

        if !period.assign(staff_id) {
            debug!(staff_id, patient_id, "staff already assigned");
            return Ok(Assignment::AlreadyAssigned);
        }

        debug!(staff_id, patient_id, "staff assigned");
        Ok(Assignment::Added)
    }

    // ── Episodes ─────────────────────────────────────────────────────────

    /// Admits a patient and opens a new care period starting today.
    ///
    /// A patient seen before keeps their record, medicines included. Only the
    /// episode is new.
    pub fn admit(&mut self, patient_id: &str) -> Result<Admission, HospitalError> {
        if self.admitted.contains(patient_id) {
            return Err(HospitalError::AlreadyExists(patient_id.to_string()));
        }

        let admission = if self.latest_care_period(patient_id).is_some() {
            Admission::Returning
        } else {
            self.patients
                .insert(patient_id.to_string(), Person::new(patient_id));
            Admission::First
        };

        let today = self.clock.today();
        self.admitted.insert(patient_id.to_string());
        self.care_periods.push(CarePeriod::open(patient_id, today));

        debug!(patient_id, %today, ?admission, "patient admitted");
        Ok(admission)
    }

    /// Closes the patient's open care period with today's date.
    pub fn discharge(&mut self, patient_id: &str) -> Result<(), HospitalError> {
        if !self.admitted.contains(patient_id) {
            return Err(HospitalError::NotFound(patient_id.to_string()));
        }

        let today = self.clock.today();
        let period = self
            .latest_care_period_mut(patient_id)
            .ok_or_else(|| HospitalError::NotFound(patient_id.to_string()))?;
        period.close(today);
        self.admitted.remove(patient_id);

        debug!(patient_id, %today, "patient discharged");
        Ok(())
    }

    // ── Medicines ────────────────────────────────────────────────────────

    /// Prescribes a medicine to an admitted patient, replacing any earlier
    /// strength and dosage for the same medicine.
    pub fn add_medicine(
        &mut self,
        medicine: &str,
        strength: &str,
        dosage: &str,
        patient_id: &str,
    ) -> Result<Prescription, HospitalError> {
        let strength = parse_number(strength, true)
            .ok_or_else(|| HospitalError::not_numeric("strength", strength))?;
        let dosage = parse_number(dosage, true)
            .ok_or_else(|| HospitalError::not_numeric("dosage", dosage))?;

        let patient = self.admitted_patient_mut(patient_id)?;
        let prescription = Prescription::new(strength, dosage);
        patient.prescribe(medicine, prescription);

        self.medicines.remove(medicine, patient_id);
        self.medicines.insert(medicine, patient_id);

        debug!(medicine, strength, dosage, patient_id, "medicine added");
        Ok(prescription)
    }

    /// Stops a medicine for an admitted patient. Returns whether the patient was taking it.
    pub fn remove_medicine(&mut self, medicine: &str, patient_id: &str) -> Result<bool, HospitalError> {
        let patient = self.admitted_patient_mut(patient_id)?;
        let removed = patient.discontinue(medicine).is_some();
        self.medicines.remove(medicine, patient_id);

        debug!(medicine, patient_id, removed, "medicine removed");
        Ok(removed)
    }

    // ── Clock ────────────────────────────────────────────────────────────

    /// Sets today's date. Every component must be a positive integer literal.
    pub fn set_date(&mut self, day: &str, month: &str, year: &str) -> Result<Date, HospitalError> {
        let day_num = parse_number(day, false).ok_or_else(|| HospitalError::not_numeric("day", day))?;
        let month_num =
            parse_number(month, false).ok_or_else(|| HospitalError::not_numeric("month", month))?;
        let year_num = parse_number(year, false).ok_or_else(|| HospitalError::not_numeric("year", year))?;

        let date = Date::new(day_num, month_num, year_num).ok_or(HospitalError::InvalidDate {
            day: day_num,
            month: month_num,
            year: year_num,
        })?;

        self.clock.set(date);
        Ok(date)
    }

    /// Moves today forward by a non-negative number of days.
    pub fn advance_date(&mut self, days: &str) -> Result<Date, HospitalError> {
        let days = parse_number(days, true).ok_or_else(|| HospitalError::not_numeric("amount", days))?;
        let from = self.clock.today();
        self.clock
            .advance(days)
            .ok_or(HospitalError::DateOverflow { from, days })
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn today(&self) -> Date {
        self.clock.today()
    }

    pub fn is_admitted(&self, patient_id: &str) -> bool {
        self.admitted.contains(patient_id)
    }

    /// The record of any patient ever admitted, current or not.
    pub fn patient(&self, patient_id: &str) -> Option<&Person> {
        self.patients.get(patient_id)
    }

    pub fn staff_member(&self, staff_id: &str) -> Option<&Person> {
        self.staff.get(staff_id)
    }

    /// All care periods in creation order.
    pub fn care_periods(&self) -> &[CarePeriod] {
        &self.care_periods
    }

    /// The most recently opened care period of a patient, if they have any history.
    pub fn latest_care_period(&self, patient_id: &str) -> Option<&CarePeriod> {
        self.care_periods
            .iter()
            .rev()
            .find(|period| period.patient_id() == patient_id)
    }

    pub fn medicine_index(&self) -> &MedicineIndex {
        &self.medicines
    }

    /// Staff ids in ascending order.
    pub fn staff_ids(&self) -> impl Iterator<Item = &str> {
        self.staff.keys().map(String::as_str)
    }

    /// Ids of every patient ever admitted, in ascending order.
    pub fn all_patient_ids(&self) -> impl Iterator<Item = &str> {
        self.patients.keys().map(String::as_str)
    }

    /// Ids of the patients currently admitted, in ascending order.
    pub fn current_patient_ids(&self) -> impl Iterator<Item = &str> {
        self.admitted.iter().map(String::as_str)
    }

    fn latest_care_period_mut(&mut self, patient_id: &str) -> Option<&mut CarePeriod> {
        self.care_periods
            .iter_mut()
            .rev()
            .find(|period| period.patient_id() == patient_id)
    }

    fn admitted_patient_mut(&mut self, patient_id: &str) -> Result<&mut Person, HospitalError> {
        if !self.admitted.contains(patient_id) {
            return Err(HospitalError::NotFound(patient_id.to_string()));
        }
        self.patients
            .get_mut(patient_id)
            .ok_or_else(|| HospitalError::NotFound(patient_id.to_string()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
