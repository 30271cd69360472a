// crates/domain/src/model/analysis.rs
use serde::{Deserialize, Serialize};
use statfy_shared_kernel::{CharCount, DomainError, DomainResult, FileMeta, LineCount};

use crate::language::Language;

/// Size breakdown of one analyzed file.
///
/// Values are produced once by the analyzer and never change afterwards;
/// fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    metadata: FileMeta,
    language: Language,
    total_size: CharCount,
    comment_size: CharCount,
    blank_lines: LineCount,
    /// Signed on purpose: overlapping comment and blank accounting shows up
    /// as a negative value instead of being hidden by a clamp.
    code_size: i64,
}

impl FileAnalysisResult {
    /// Result for a file whose language is not supported. Every size is zero.
    pub fn unknown(metadata: FileMeta) -> Self {
        Self {
            metadata,
            language: Language::Unknown,
            total_size: CharCount::zero(),
            comment_size: CharCount::zero(),
            blank_lines: LineCount::zero(),
            code_size: 0,
        }
    }

    /// Derives `code_size = total - (comments + blank lines)`.
    pub fn from_measurements(
        metadata: FileMeta,
        language: Language,
        total_size: CharCount,
        comment_size: CharCount,
        blank_lines: LineCount,
    ) -> Self {
        if language.is_unknown() {
            return Self::unknown(metadata);
        }
        let code_size = to_i64(total_size.value()) - (to_i64(comment_size.value()) + to_i64(blank_lines.value()));
        Self { metadata, language, total_size, comment_size, blank_lines, code_size }
    }

    #[inline]
    pub fn metadata(&self) -> &FileMeta {
        &self.metadata
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn total_size(&self) -> CharCount {
        self.total_size
    }

    #[inline]
    pub fn comment_size(&self) -> CharCount {
        self.comment_size
    }

    #[inline]
    pub fn blank_lines(&self) -> LineCount {
        self.blank_lines
    }

    #[inline]
    pub fn code_size(&self) -> i64 {
        self.code_size
    }

    /// Size counted towards a language share.
    pub fn counted_size(&self, include_comments: bool) -> i64 {
        if include_comments { to_i64(self.total_size.value()) } else { self.code_size }
    }

    /// Fails when comment spans and blank lines claimed more than the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeCodeSize`] carrying the offending sizes.
    pub fn ensure_non_negative(&self) -> DomainResult<()> {
        if self.code_size >= 0 {
            return Ok(());
        }
        Err(DomainError::NegativeCodeSize {
            path: self.metadata.path.to_path_buf(),
            total_size: self.total_size.value(),
            comment_size: self.comment_size.value(),
            blank_lines: self.blank_lines.value(),
        })
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
