use std::collections::BTreeMap;

/// Strength and dosage of one prescribed medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub strength: u32,
    pub dosage: u32,
}

impl Prescription {
    pub fn new(strength: u32, dosage: u32) -> Self {
        Self { strength, dosage }
    }
}

/// A staff member or a patient.
///
/// Staff never get medicines; the map simply stays empty for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    medicines: BTreeMap<String, Prescription>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            medicines: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current medicines, ordered by name.
    pub fn medicines(&self) -> &BTreeMap<String, Prescription> {
        &self.medicines
    }

    pub fn takes(&self, medicine: &str) -> bool {
        self.medicines.contains_key(medicine)
    }

    /// Adds a medicine, or replaces the strength and dosage of one already taken.
    /// Returns the replaced prescription, if any.
    pub fn prescribe(&mut self, medicine: &str, prescription: Prescription) -> Option<Prescription> {
        self.medicines.insert(medicine.to_string(), prescription)
    }

    /// Stops a medicine. Stopping one the person never took is not an error.
    pub fn discontinue(&mut self, medicine: &str) -> Option<Prescription> {
        self.medicines.remove(medicine)
    }
}
