// crates/ports/src/analysis.rs
use statfy_domain::FileAnalysisResult;
use statfy_shared_kernel::{FileMeta, Result};

/// Port for analyzing files.
pub trait FileAnalysisPort: Send + Sync {
    /// Analyzes one file. Unsupported files yield an `Unknown` result, not an error.
    fn analyze_file(&self, meta: &FileMeta) -> Result<FileAnalysisResult>;

    /// Analyzes every supported file; the first hard error aborts the batch.
    fn analyze_files(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>>;
}
