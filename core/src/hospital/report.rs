//! Read-only views over the hospital, one per print command.
//!
//! The views borrow from the [`Hospital`]; nothing here mutates. An empty view is
//! a valid answer (the presentation layer renders it as "None").

use std::collections::BTreeMap;

use crate::error::HospitalError;
use crate::hospital::Hospital;
use crate::medicine_index::MedicineIndex;
use crate::models::{CarePeriod, Person, Prescription};

/// Everything known about one patient: every episode, oldest first, and the
/// medicines they take now.
#[derive(Debug, Clone)]
pub struct PatientReport<'a> {
    pub patient: &'a Person,
    pub care_periods: Vec<&'a CarePeriod>,
}

impl<'a> PatientReport<'a> {
    pub fn id(&self) -> &'a str {
        self.patient.id()
    }

    pub fn medicines(&self) -> &'a BTreeMap<String, Prescription> {
        self.patient.medicines()
    }
}

/// The episodes a staff member has been assigned to, oldest first.
#[derive(Debug, Clone)]
pub struct StaffReport<'a> {
    pub staff_id: &'a str,
    pub care_periods: Vec<&'a CarePeriod>,
}

impl StaffReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.care_periods.is_empty()
    }
}

impl Hospital {
    /// Report for any patient with history, admitted or not.
    pub fn patient_report(&self, patient_id: &str) -> Result<PatientReport<'_>, HospitalError> {
        if self.latest_care_period(patient_id).is_none() {
            return Err(HospitalError::NotFound(patient_id.to_string()));
        }
        let patient = self
            .patients
            .get(patient_id)
            .ok_or_else(|| HospitalError::NotFound(patient_id.to_string()))?;

        let care_periods = self
            .care_periods
            .iter()
            .filter(|period| period.patient_id() == patient_id)
            .collect();

        Ok(PatientReport {
            patient,
            care_periods,
        })
    }

    pub fn staff_report(&self, staff_id: &str) -> Result<StaffReport<'_>, HospitalError> {
        let (staff_id, _) = self
            .staff
            .get_key_value(staff_id)
            .ok_or_else(|| HospitalError::NotFound(staff_id.to_string()))?;

        let care_periods = self
            .care_periods
            .iter()
            .filter(|period| period.has_staff(staff_id))
            .collect();

        Ok(StaffReport {
            staff_id: staff_id.as_str(),
            care_periods,
        })
    }

    /// Every staff member, by id.
    pub fn list_staff(&self) -> Vec<&Person> {
        self.staff.values().collect()
    }

    /// A full report for each patient currently admitted, by id.
    pub fn list_current_patients(&self) -> Vec<PatientReport<'_>> {
        self.collect_reports(self.current_patient_ids())
    }

    /// A full report for each patient ever admitted, by id.
    pub fn list_all_patients(&self) -> Vec<PatientReport<'_>> {
        self.collect_reports(self.all_patient_ids())
    }

    pub fn list_medicines(&self) -> &MedicineIndex {
        &self.medicines
    }

    fn collect_reports<'a>(&'a self, ids: impl Iterator<Item = &'a str>) -> Vec<PatientReport<'a>> {
        ids.filter_map(|id| self.patient_report(id).ok()).collect()
    }
}
