//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`content`]: reading file text (whole files or a bounded prefix of lines)
//! - [`analysis`]: turning file metadata into analysis results
//!
//! These ports keep the use-case layer independent of the filesystem and of
//! the concrete analyzer.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod content;

pub use analysis::FileAnalysisPort;
pub use content::ContentSource;
