use serde::Serialize;
use statfy_domain::{FileAnalysisResult, LanguageShares, LanguageTotals, ShareEntry};

/// Everything known about an analyzed codebase.
#[derive(Debug, Clone, Serialize)]
pub struct CodebaseSummary {
    /// Per-file results for supported files, in input order.
    pub results: Vec<FileAnalysisResult>,
    pub shares: LanguageShares,
    /// Largest language first.
    pub by_language: Vec<LanguageTotals>,
    pub totals: LanguageTotals,
}

impl CodebaseSummary {
    pub fn ranked_shares(&self) -> Vec<ShareEntry> {
        self.shares.ranked()
    }

    pub fn file_count(&self) -> usize {
        self.results.len()
    }
}
