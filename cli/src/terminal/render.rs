//! Turns hospital views into plain text lines. Colour is applied by [`crate::terminal::print`].

use hospital_core::hospital::{PatientReport, StaffReport};
use hospital_core::medicine_index::MedicineIndex;
use hospital_core::models::{CarePeriod, Person};

pub const NONE: &str = "None";
const INDENT: &str = "  ";

/// `start - end`, or `start -` while the period is open.
pub fn period_range(period: &CarePeriod) -> String {
    match period.end() {
        Some(end) => format!("{} - {}", period.start(), end),
        None => format!("{} -", period.start()),
    }
}

pub fn patient_report(report: &PatientReport<'_>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for period in &report.care_periods {
        out.push(format!("* Care period: {}", period_range(period)));
        let staff: Vec<&str> = period.staff().collect();
        let staff: String = if staff.is_empty() {
            NONE.to_string()
        } else {
            staff.join(" ")
        };
        out.push(format!("{INDENT}- Staff: {staff}"));
    }

    let medicines = report.medicines();
    if medicines.is_empty() {
        out.push(format!("* Medicines: {NONE}"));
    } else {
        out.push("* Medicines:".to_string());
        for (name, prescription) in medicines {
            out.push(format!(
                "{INDENT}- {name} {} mg x {}",
                prescription.strength, prescription.dosage
            ));
        }
    }

    out
}

pub fn staff_report(report: &StaffReport<'_>) -> Vec<String> {
    if report.is_empty() {
        return vec![NONE.to_string()];
    }

    report
        .care_periods
        .iter()
        .flat_map(|period| {
            [
                period_range(period),
                format!("* Patient: {}", period.patient_id()),
            ]
        })
        .collect()
}

pub fn staff_list(staff: &[&Person]) -> Vec<String> {
    if staff.is_empty() {
        return vec![NONE.to_string()];
    }
    staff.iter().map(|person| person.id().to_string()).collect()
}

pub fn medicines(index: &MedicineIndex) -> Vec<String> {
    if index.is_empty() {
        return vec![NONE.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    for (medicine, patients) in index.iter() {
        out.push(format!("{medicine} prescribed for"));
        out.extend(patients.iter().map(|patient| format!("* {patient}")));
    }
    out
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
