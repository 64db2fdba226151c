//! # Command Language
//!
//! One input line is one command: a verb followed by a fixed number of
//! whitespace separated arguments. Verbs are case-insensitive and most have a
//! short alias. Every argument is taken verbatim, leading dashes included, so
//! `help` is the only way to ask for usage. Numeric arguments stay strings
//! here; the hospital decides whether they are valid.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Hospital", no_binary_name = true, disable_version_flag = true)]
#[command(help_template = "{subcommands}")]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Recruit a new staff member
    #[command(name = "recruit", alias = "rec", disable_help_flag = true)]
    Recruit {
        #[arg(allow_hyphen_values = true)]
        staff_id: String,
    },
    /// Admit a patient and open a care period
    #[command(name = "enter", alias = "admit", disable_help_flag = true)]
    Enter {
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Discharge a patient and close their care period
    #[command(name = "leave", alias = "discharge", disable_help_flag = true)]
    Leave {
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Assign a staff member to an admitted patient
    #[command(name = "assign_staff", alias = "assign", disable_help_flag = true)]
    AssignStaff {
        #[arg(allow_hyphen_values = true)]
        staff_id: String,
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Prescribe a medicine to an admitted patient
    #[command(name = "add_medicine", alias = "add_med", disable_help_flag = true)]
    AddMedicine {
        #[arg(allow_hyphen_values = true)]
        medicine: String,
        #[arg(allow_hyphen_values = true)]
        strength: String,
        #[arg(allow_hyphen_values = true)]
        dosage: String,
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Stop a medicine for an admitted patient
    #[command(name = "remove_medicine", alias = "rm_med", disable_help_flag = true)]
    RemoveMedicine {
        #[arg(allow_hyphen_values = true)]
        medicine: String,
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Print every care period and the medicines of a patient
    #[command(name = "print_patient_info", alias = "ppi", disable_help_flag = true)]
    PrintPatientInfo {
        #[arg(allow_hyphen_values = true)]
        patient_id: String,
    },
    /// Print the care periods a staff member is assigned to
    #[command(name = "print_care_periods_per_staff", alias = "pcps", disable_help_flag = true)]
    PrintCarePeriodsPerStaff {
        #[arg(allow_hyphen_values = true)]
        staff_id: String,
    },
    /// Print every medicine and who it is prescribed for
    #[command(name = "print_all_medicines", alias = "pam", disable_help_flag = true)]
    PrintAllMedicines,
    /// Print every staff member
    #[command(name = "print_all_staff", alias = "pas", disable_help_flag = true)]
    PrintAllStaff,
    /// Print every patient ever admitted
    #[command(name = "print_all_patients", alias = "pap", disable_help_flag = true)]
    PrintAllPatients,
    /// Print the patients currently admitted
    #[command(name = "print_current_patients", alias = "pcp", disable_help_flag = true)]
    PrintCurrentPatients,
    /// Set today's date
    #[command(name = "set_date", alias = "sd", disable_help_flag = true)]
    SetDate {
        #[arg(allow_hyphen_values = true)]
        day: String,
        #[arg(allow_hyphen_values = true)]
        month: String,
        #[arg(allow_hyphen_values = true)]
        year: String,
    },
    /// Move today forward by a number of days
    #[command(name = "advance_date", alias = "ad", disable_help_flag = true)]
    AdvanceDate {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Execute the commands in a file
    #[command(name = "read_from", alias = "rf", disable_help_flag = true)]
    ReadFrom {
        #[arg(allow_hyphen_values = true)]
        file: PathBuf,
    },
    /// Stop reading commands
    #[command(name = "quit", alias = "q", disable_help_flag = true)]
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Unknown verbs, wrong arity and `help` all come back as a [`clap::Error`];
/// render it to show the user what went wrong (or the help text).
pub fn parse_line(line: &str) -> Result<Option<Action>, clap::Error> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(verb) = tokens.first_mut() else {
        return Ok(None);
    };
    verb.make_ascii_lowercase();

    Line::try_parse_from(tokens).map(|line| Some(line.action))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
    }

    #[test]
    fn verb_is_case_insensitive_but_ids_are_not() {
        assert_eq!(
            parse_line("RECRUIT DrA").unwrap(),
            Some(Action::Recruit { staff_id: "DrA".into() })
        );
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(
            parse_line("assign drA p1").unwrap(),
            Some(Action::AssignStaff {
                staff_id: "drA".into(),
                patient_id: "p1".into()
            })
        );
        assert_eq!(parse_line("q").unwrap(), Some(Action::Quit));
    }

    #[test]
    fn negative_numbers_reach_the_hospital() {
        assert_eq!(
            parse_line("add_medicine aspirin -5 10 p1").unwrap(),
            Some(Action::AddMedicine {
                medicine: "aspirin".into(),
                strength: "-5".into(),
                dosage: "10".into(),
                patient_id: "p1".into(),
            })
        );
        assert_eq!(
            parse_line("advance_date -3").unwrap(),
            Some(Action::AdvanceDate { amount: "-3".into() })
        );
    }

    #[test]
    fn ids_may_start_with_dashes() {
        assert_eq!(
            parse_line("enter -p1").unwrap(),
            Some(Action::Enter { patient_id: "-p1".into() })
        );
        assert_eq!(
            parse_line("recruit --help").unwrap(),
            Some(Action::Recruit { staff_id: "--help".into() })
        );
        assert_eq!(
            parse_line("rm_med -x p1").unwrap(),
            Some(Action::RemoveMedicine {
                medicine: "-x".into(),
                patient_id: "p1".into()
            })
        );
        assert_eq!(
            parse_line("assign -h -p2").unwrap(),
            Some(Action::AssignStaff {
                staff_id: "-h".into(),
                patient_id: "-p2".into()
            })
        );
    }

    #[test]
    fn help_verb_still_shows_usage() {
        let err = parse_line("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = parse_line("recruit").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse_line("recruit a b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn unknown_verb_is_rejected() {
        let err = parse_line("operate p1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn set_date_takes_three_parts() {
        assert_eq!(
            parse_line("sd 1 3 2022").unwrap(),
            Some(Action::SetDate {
                day: "1".into(),
                month: "3".into(),
                year: "2022".into()
            })
        );
    }
}
