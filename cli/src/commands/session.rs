//! Drives a [`Hospital`] with commands typed at the prompt or read from scripts.
//!
//! Each line is parsed, dispatched to exactly one hospital method and its outcome
//! printed. A failing command never ends the session.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use hospital_common::config::Config;
use hospital_core::hospital::Assignment;
use hospital_core::{ErrorKind, Hospital, HospitalError};
use tracing::debug;

use crate::commands::grammar::{self, Action};
use crate::terminal::{print, render};

/// Guards against scripts that read themselves.
const MAX_SCRIPT_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a> {
    hospital: Hospital,
    cfg: &'a Config,
    depth: usize,
}

impl<'a> Session<'a> {
    pub fn new(hospital: Hospital, cfg: &'a Config) -> Self {
        Self {
            hospital,
            cfg,
            depth: 0,
        }
    }

    #[cfg(test)]
    pub fn hospital(&self) -> &Hospital {
        &self.hospital
    }

    /// Reads commands until `quit` or end of input.
    pub fn interactive<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        prompt()?;
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            if self.execute_line(&line) == Flow::Quit {
                return Ok(());
            }
            prompt()?;
        }
        Ok(())
    }

    /// Executes every command in `path`. A `quit` in the file stops the file only.
    pub fn run_script(&mut self, path: &Path) -> anyhow::Result<()> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            anyhow::bail!("scripts nested deeper than {MAX_SCRIPT_DEPTH} levels");
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        debug!(script = %path.display(), depth = self.depth, "running script");

        self.depth += 1;
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if self.cfg.echo {
                print::echo(line);
            }
            if self.execute_line(line) == Flow::Quit {
                break;
            }
        }
        self.depth -= 1;

        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> Flow {
        match grammar::parse_line(line) {
            Ok(Some(action)) => self.execute(action),
            Ok(None) => Flow::Continue,
            Err(err) => {
                print::print(err.render().to_string().trim_end());
                Flow::Continue
            }
        }
    }

    pub fn execute(&mut self, action: Action) -> Flow {
        let hospital = &mut self.hospital;

        match action {
            Action::Recruit { staff_id } => {
                confirm(hospital.recruit(&staff_id), |_| "Staff recruited.".to_string());
            }
            Action::Enter { patient_id } => {
                confirm(hospital.admit(&patient_id), |_| {
                    "A new patient has entered.".to_string()
                });
            }
            Action::Leave { patient_id } => {
                confirm(hospital.discharge(&patient_id), |_| {
                    "Patient left hospital, care period closed.".to_string()
                });
            }
            Action::AssignStaff { staff_id, patient_id } => {
                confirm(hospital.assign(&staff_id, &patient_id), |assignment| {
                    if assignment == Assignment::AlreadyAssigned {
                        debug!(%staff_id, %patient_id, "repeat assignment confirmed");
                    }
                    format!("Staff assigned for: {patient_id}")
                });
            }
            Action::AddMedicine {
                medicine,
                strength,
                dosage,
                patient_id,
            } => {
                confirm(
                    hospital.add_medicine(&medicine, &strength, &dosage, &patient_id),
                    |_| format!("Medicine added for: {patient_id}"),
                );
            }
            Action::RemoveMedicine { medicine, patient_id } => {
                confirm(hospital.remove_medicine(&medicine, &patient_id), |_| {
                    format!("Medicine removed from: {patient_id}")
                });
            }
            Action::PrintPatientInfo { patient_id } => match hospital.patient_report(&patient_id) {
                Ok(report) => print::lines(&render::patient_report(&report)),
                Err(err) => report_error(&err),
            },
            Action::PrintCarePeriodsPerStaff { staff_id } => match hospital.staff_report(&staff_id) {
                Ok(report) => print::lines(&render::staff_report(&report)),
                Err(err) => report_error(&err),
            },
            Action::PrintAllMedicines => {
                print::lines(&render::medicines(hospital.list_medicines()));
            }
            Action::PrintAllStaff => {
                print::lines(&render::staff_list(&hospital.list_staff()));
            }
            Action::PrintAllPatients => print_patients(hospital.list_all_patients()),
            Action::PrintCurrentPatients => print_patients(hospital.list_current_patients()),
            Action::SetDate { day, month, year } => {
                confirm(hospital.set_date(&day, &month, &year), |date| {
                    format!("Date has been set to {date}")
                });
            }
            Action::AdvanceDate { amount } => {
                confirm(hospital.advance_date(&amount), |date| format!("New date is {date}"));
            }
            Action::ReadFrom { file } => {
                if let Err(err) = self.run_script(&file) {
                    print::failure(&format!("Error: {err:#}"));
                }
            }
            Action::Quit => return Flow::Quit,
        }

        Flow::Continue
    }
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", print::PROMPT)?;
    stdout.flush()
}

fn confirm<T>(result: Result<T, HospitalError>, message: impl FnOnce(T) -> String) {
    match result {
        Ok(value) => print::success(&message(value)),
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &HospitalError) {
    let msg = match err.kind() {
        ErrorKind::InvalidArgument => format!("Error: {err}"),
        ErrorKind::AlreadyExists | ErrorKind::NotFound => err.to_string(),
    };
    print::failure(&msg);
}

fn print_patients(reports: Vec<hospital_core::hospital::PatientReport<'_>>) {
    if reports.is_empty() {
        print::print(render::NONE);
        return;
    }
    for report in &reports {
        print::title(report.id());
        print::lines(&render::patient_report(report));
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
