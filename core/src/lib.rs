//! # Hospital Core
//!
//! In-memory record keeping for a hospital: staff, patients, care periods,
//! prescriptions and a simulated clock.
//!
//! ## Layout
//! * **[`models`]**: the entities. [`models::Person`] and [`models::CarePeriod`].
//! * **[`medicine_index`]**: reverse lookup from a medicine to the patients taking it.
//! * **[`hospital`]**: the [`Hospital`] aggregate. One method per command, each one
//!   validating against the registries before it mutates anything.
//! * **[`error`]**: [`HospitalError`], the outcome of every rejected command.
//!
//! ## Invariants
//! The aggregate keeps these true after every call, successful or not:
//! * a patient is admitted iff their most recent care period is open;
//! * a patient is listed under a medicine in the index iff their own
//!   medicine list contains it, and the index never holds an empty entry;
//! * every staff id assigned to a care period belongs to a recruited staff member.
//!
//! A rejected command leaves the hospital exactly as it found it.

pub mod error;
pub mod hospital;
pub mod medicine_index;
pub mod models;

pub use error::{ErrorKind, HospitalError};
pub use hospital::Hospital;
