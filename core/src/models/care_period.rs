use std::collections::BTreeSet;

use hospital_common::time::Date;

/// One admission episode: from the day a patient enters until the day they leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarePeriod {
    patient_id: String,
    start: Date,
    end: Option<Date>,
    staff: BTreeSet<String>,
}

impl CarePeriod {
    /// Opens a new episode starting on `start`.
    pub fn open(patient_id: impl Into<String>, start: Date) -> Self {
        Self {
            patient_id: patient_id.into(),
            start,
            end: None,
            staff: BTreeSet::new(),
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Option<Date> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn close(&mut self, end: Date) {
        self.end = Some(end);
    }

    pub fn has_staff(&self, staff_id: &str) -> bool {
        self.staff.contains(staff_id)
    }

    /// Adds a staff member. Returns `false` if they were already assigned.
    pub fn assign(&mut self, staff_id: &str) -> bool {
        if self.has_staff(staff_id) {
            return false;
        }
        self.staff.insert(staff_id.to_string())
    }

    /// Assigned staff ids in ascending order.
    pub fn staff(&self) -> impl ExactSizeIterator<Item = &str> {
        self.staff.iter().map(String::as_str)
    }
}
