// crates/infra/src/measurement.rs
pub mod analyzer;
pub mod blank_lines;
pub mod comment_style;
pub mod extractor;

pub use analyzer::FileAnalyzer;
pub use blank_lines::BlankLineCounter;
pub use comment_style::CommentStyle;
pub use extractor::CommentPatternTable;
