//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: analyzes a set of files and summarizes them
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::CodebaseSummary;
pub use orchestrator::SummarizeCodebase;
