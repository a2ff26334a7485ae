//! CLI commands for roster

pub mod dispatch;
pub mod edit;
pub mod report;
pub mod shell;
