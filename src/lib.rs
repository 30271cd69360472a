//! # statfy
//!
//! Source code statistics: per-file comment, blank-line and code sizes, and
//! each language's share of a codebase.
//!
//! ```no_run
//! use statfy::{AnalyzerConfig, summarize_paths};
//!
//! let summary = summarize_paths(["src/main.go", "lib/util.py"], AnalyzerConfig::default(), false)?;
//! for share in summary.ranked_shares() {
//!     println!("{:<12} {:>6.2}%  {}", share.name, share.percentage, share.color);
//! }
//! # Ok::<(), statfy::StatfyError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

pub use statfy_domain::{
    Aggregator, AnalyzerConfig, FileAnalysisResult, Language, LanguageRegistry, LanguageShares, LanguageTotals,
    ShareEntry, language_shares,
};
pub use statfy_infra::{
    AmbiguousResolver, BlankLineCounter, CommentPatternTable, CommentStyle, FileAnalyzer, FileReader, load_config,
};
pub use statfy_ports::{ContentSource, FileAnalysisPort};
pub use statfy_shared_kernel::{
    ApplicationError, CharCount, DomainError, ErrorContext, FileExtension, FileMeta, FilePath, InfrastructureError,
    LineCount, Result, StatfyError,
};
pub use statfy_usecase::{CodebaseSummary, SummarizeCodebase};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stats, analyzes and summarizes the given files from the local filesystem.
///
/// # Errors
///
/// Fails on an invalid `config`, on a file that cannot be stat'ed, or on the
/// first file that cannot be analyzed.
pub fn summarize_paths<I, P>(paths: I, config: AnalyzerConfig, include_comments: bool) -> Result<CodebaseSummary>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let analyzer = FileAnalyzer::with_filesystem(config)?;
    let files = paths
        .into_iter()
        .map(|p| {
            let path = p.into();
            FileReader::metadata(&path).with_context(|| format!("collecting metadata for {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    SummarizeCodebase::new(&analyzer).run(&files, include_comments)
}
