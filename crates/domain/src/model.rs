// crates/domain/src/model.rs
pub mod analysis;

pub use analysis::FileAnalysisResult;
