use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statfy_shared_kernel::{CharCount, LineCount};

use crate::{language::Language, model::FileAnalysisResult};

/// Summed sizes for every file of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTotals {
    pub language: Language,
    pub files: usize,
    pub total_size: CharCount,
    pub comment_size: CharCount,
    pub blank_lines: LineCount,
    pub code_size: i64,
}

impl LanguageTotals {
    fn empty(language: Language) -> Self {
        Self {
            language,
            files: 0,
            total_size: CharCount::zero(),
            comment_size: CharCount::zero(),
            blank_lines: LineCount::zero(),
            code_size: 0,
        }
    }

    fn absorb(&mut self, result: &FileAnalysisResult) {
        self.files += 1;
        self.total_size += result.total_size();
        self.comment_size += result.comment_size();
        self.blank_lines += result.blank_lines();
        self.code_size += result.code_size();
    }
}

/// Groups analysis results by language.
pub struct Aggregator;

impl Aggregator {
    /// Per-language totals; `Unknown` results are ignored.
    pub fn by_language(results: &[FileAnalysisResult]) -> Vec<LanguageTotals> {
        let mut map: HashMap<Language, LanguageTotals> = HashMap::new();
        for result in results.iter().filter(|r| !r.language().is_unknown()) {
            map.entry(result.language())
                .or_insert_with(|| LanguageTotals::empty(result.language()))
                .absorb(result);
        }
        Self::into_sorted(map)
    }

    /// Totals over every non-Unknown result, reported under `Unknown`.
    pub fn grand_total(results: &[FileAnalysisResult]) -> LanguageTotals {
        let mut total = LanguageTotals::empty(Language::Unknown);
        for result in results.iter().filter(|r| !r.language().is_unknown()) {
            total.absorb(result);
        }
        total
    }

    fn into_sorted(map: HashMap<Language, LanguageTotals>) -> Vec<LanguageTotals> {
        let mut groups: Vec<LanguageTotals> = map.into_values().collect();
        // Largest first; ties fall back to declaration order so output is stable.
        groups.sort_by(|a, b| b.total_size.cmp(&a.total_size).then_with(|| a.language.cmp(&b.language)));
        groups
    }
}
