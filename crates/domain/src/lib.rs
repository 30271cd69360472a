//! # Domain
//!
//! Pure analysis vocabulary: the closed [`Language`] set, the extension
//! registry, per-file results and their aggregation into language shares.
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod language;
pub mod model;
pub mod registry;

pub use analytics::{Aggregator, LanguageShares, LanguageTotals, ShareEntry, language_shares};
pub use config::AnalyzerConfig;
pub use language::Language;
pub use model::FileAnalysisResult;
pub use registry::LanguageRegistry;
