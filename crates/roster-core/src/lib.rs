//! roster-core: Domain types for the Roster student records service
//!
//! This crate provides:
//! - `StudentId`, the 24-hex-character record identifier
//! - `Student`, `NewStudent` and `StudentChanges`
//! - Field validation shared by the store and the HTTP layer
//!
//! Nothing in here performs I/O.

pub mod id;
pub mod types;

pub use id::{ParseStudentIdError, StudentId};
pub use types::{NewStudent, Student, StudentChanges, ValidationError, require_text};
