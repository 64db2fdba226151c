//! # Entities
//!
//! * [`person::Person`]: a staff member or a patient. Patients also carry the
//!   medicines they are currently prescribed.
//! * [`care_period::CarePeriod`]: one admission episode of one patient.
//!
//! A care period refers to its patient by id only. The patient record itself lives
//! in the [`crate::Hospital`] patient table and outlives every episode.

pub mod care_period;
pub mod person;

pub use care_period::CarePeriod;
pub use person::{Person, Prescription};
