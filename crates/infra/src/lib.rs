// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod detection;
pub mod measurement;
pub mod persistence;

pub use config::load_config;
pub use detection::AmbiguousResolver;
pub use measurement::{BlankLineCounter, CommentPatternTable, CommentStyle, FileAnalyzer};
pub use persistence::FileReader;
