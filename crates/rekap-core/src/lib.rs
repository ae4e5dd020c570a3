//! rekap-core — Class roster model, scoring policy, and CSV persistence.
//!
//! This crate owns the student records of a class, derives the final score
//! and predikat of every student, and moves the roster in and out of the
//! attendance/grades CSV pair.

pub mod config;
pub mod csv_io;
pub mod error;
pub mod model;
pub mod scoring;
pub mod store;
pub mod summary;

pub use error::RosterError;
pub use model::{GradeUpdate, Predikat, RecapEntry, StudentRecord};
pub use store::RosterStore;
