//! Core domain types for the mock-interview application portal.
//!
//! This crate contains shared types used across all packages:
//! - Application and its closed status/exam enumerations
//! - QueryState, pagination math and fetch ordering for the admin dashboard
//! - Stats mirror of the backend's aggregate counts

mod application;
mod export;
mod query;
mod stats;

pub use application::{
    Application, ApplicationId, ApplicationStatus, ExamType, ParseExamTypeError, ParseStatusError,
};
pub use export::{ExportFormat, ParseExportFormatError};
pub use query::{FetchSequence, PAGE_SIZE, PageWindow, QueryState};
pub use stats::Stats;
