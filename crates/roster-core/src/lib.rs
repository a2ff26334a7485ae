//! Roster Core Library
//!
//! Core domain logic for the roster student management tool: grade records,
//! students, the roster service, its file format and report rendering.

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod grade;
pub mod logging;
pub mod roster;
pub mod student;
pub mod text;

pub use error::{Result, RosterError};
pub use grade::GradeRecord;
pub use roster::Roster;
pub use student::{Student, StudentKind};
