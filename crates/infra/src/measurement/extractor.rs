// crates/infra/src/measurement/extractor.rs
use std::collections::HashMap;

use regex::Regex;
use statfy_domain::Language;
use statfy_shared_kernel::{CharCount, DomainError, Result};

use super::comment_style::{COMMENT_GROUP, CommentStyle, LANGUAGE_STYLES};

/// Compiled comment patterns, one per [`CommentStyle`], plus the language table.
///
/// Built once and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct CommentPatternTable {
    compiled: HashMap<CommentStyle, Regex>,
    by_language: HashMap<Language, CommentStyle>,
}

impl CommentPatternTable {
    /// Compiles every built-in pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let compiled = CommentStyle::ALL
            .iter()
            .map(|&style| compile(style.pattern()).map(|re| (style, re)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { compiled, by_language: LANGUAGE_STYLES.iter().copied().collect() })
    }

    pub fn style_of(&self, language: Language) -> Option<CommentStyle> {
        self.by_language.get(&language).copied()
    }

    /// Every comment span in `source`, in source order, after cleanup.
    ///
    /// `Unknown` and languages without a style yield no spans.
    pub fn extract(&self, language: Language, source: &str) -> Vec<String> {
        match self.style_of(language) {
            Some(style) => self.extract_with_style(style, source),
            None => Vec::new(),
        }
    }

    pub fn extract_with_style(&self, style: CommentStyle, source: &str) -> Vec<String> {
        let Some(regex) = self.compiled.get(&style) else {
            return Vec::new();
        };

        if style.is_guarded() {
            regex
                .captures_iter(source)
                .filter_map(|caps| caps.name(COMMENT_GROUP).or_else(|| caps.get(0)))
                .map(|m| clean_span(m.as_str()))
                .collect()
        } else {
            regex.find_iter(source).map(|m| clean_span(m.as_str())).collect()
        }
    }

    /// Sum of character counts over [`extract`](Self::extract).
    pub fn comment_size(&self, language: Language, source: &str) -> CharCount {
        self.extract(language, source).iter().map(|span| CharCount::of(span)).sum()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| {
        DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        }
        .into()
    })
}

/// Trims leading blanks/newlines and drops whitespace-only lines; line
/// breaks between the remaining lines are kept.
fn clean_span(raw: &str) -> String {
    raw.trim_start_matches(['\n', '\t', ' '])
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
