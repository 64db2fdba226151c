//! Reverse lookup from a medicine name to the patients currently taking it.
//!
//! The index mirrors every patient's own medicine list. It never stores an
//! empty patient set: removing the last patient removes the medicine too.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl MedicineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `patient_id` takes `medicine`. Returns `false` if it was already recorded.
    pub fn insert(&mut self, medicine: &str, patient_id: &str) -> bool {
        self.entries
            .entry(medicine.to_string())
            .or_default()
            .insert(patient_id.to_string())
    }

    /// Forgets that `patient_id` takes `medicine`. Returns `false` if nothing was recorded.
    pub fn remove(&mut self, medicine: &str, patient_id: &str) -> bool {
        let Some(patients) = self.entries.get_mut(medicine) else {
            return false;
        };

        let removed = patients.remove(patient_id);
        if patients.is_empty() {
            self.entries.remove(medicine);
        }
        removed
    }

    pub fn contains(&self, medicine: &str, patient_id: &str) -> bool {
        self.entries
            .get(medicine)
            .is_some_and(|patients| patients.contains(patient_id))
    }

    pub fn prescribed_to(&self, medicine: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(medicine)
    }

    /// Medicines in name order, each with the ids of its patients in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(medicine, patients)| (medicine.as_str(), patients))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
