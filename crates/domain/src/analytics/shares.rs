use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{language::Language, model::FileAnalysisResult};

/// Percentage of the analyzed size attributable to each language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageShares(BTreeMap<Language, f64>);

/// One slice of a language pie, carrying what a chart renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub language: Language,
    pub name: &'static str,
    pub color: &'static str,
    pub percentage: f64,
}

impl LanguageShares {
    pub fn get(&self, language: Language) -> Option<f64> {
        self.0.get(&language).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, f64)> + '_ {
        self.0.iter().map(|(lang, pct)| (*lang, *pct))
    }

    /// Sum of all percentages; 100 up to rounding unless empty.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Entries sorted by percentage, largest first.
    pub fn ranked(&self) -> Vec<ShareEntry> {
        let mut entries: Vec<ShareEntry> = self
            .iter()
            .map(|(language, percentage)| ShareEntry {
                language,
                name: language.display_name(),
                color: language.color(),
                percentage,
            })
            .collect();
        entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage).then_with(|| a.language.cmp(&b.language)));
        entries
    }

    pub fn into_inner(self) -> BTreeMap<Language, f64> {
        self.0
    }
}

/// Computes each language's share of the total.
///
/// With `include_comments` the whole file size counts, otherwise only the
/// code size. A zero (or negative) grand total yields an empty mapping.
pub fn language_shares(results: &[FileAnalysisResult], include_comments: bool) -> LanguageShares {
    let mut sizes: HashMap<Language, i64> = HashMap::new();
    let mut grand_total: i64 = 0;

    for result in results.iter().filter(|r| !r.language().is_unknown()) {
        let size = result.counted_size(include_comments);
        *sizes.entry(result.language()).or_insert(0) += size;
        grand_total += size;
    }

    if grand_total <= 0 {
        return LanguageShares::default();
    }

    let grand_total = grand_total as f64;
    LanguageShares(
        sizes
            .into_iter()
            .map(|(lang, size)| (lang, size as f64 / grand_total * 100.0))
            .collect(),
    )
}
