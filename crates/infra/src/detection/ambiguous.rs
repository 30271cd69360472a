// crates/infra/src/detection/ambiguous.rs
//! Content-based resolution for extensions shared by several languages.
//!
//! Only the first few lines of a file are inspected. Each line is tested
//! against the candidate languages in order and the first hit decides.
//! Without a hit, or when the file cannot be read, the rule's fallback wins.

use std::{collections::HashMap, path::Path};

use log::debug;
use regex::RegexSet;
use statfy_domain::Language;
use statfy_ports::ContentSource;
use statfy_shared_kernel::{DomainError, Result};

const OBJECTIVE_C_SIGNATURES: &[&str] = &[
    r"@interface",
    r"@implementation",
    r"@property",
    r"#import",
    // Foundation class prefix (NSString, NSObject, ...)
    r"NS[A-Z][a-zA-Z]+",
];

const MATLAB_SIGNATURES: &[&str] = &[r"function", r"%", r"linspace", r"zeros\(", r"ones\("];

/// Static description of one ambiguous extension.
struct RuleSpec {
    extension: &'static str,
    candidates: &'static [(Language, &'static [&'static str])],
    fallback: Language,
}

const RULES: &[RuleSpec] = &[RuleSpec {
    extension: ".m",
    candidates: &[(Language::ObjectiveC, OBJECTIVE_C_SIGNATURES), (Language::Matlab, MATLAB_SIGNATURES)],
    fallback: Language::Matlab,
}];

#[derive(Debug, Clone)]
struct Candidate {
    language: Language,
    signatures: RegexSet,
}

#[derive(Debug, Clone)]
struct AmbiguityRule {
    candidates: Vec<Candidate>,
    fallback: Language,
}

impl AmbiguityRule {
    fn classify<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Language {
        for line in lines {
            if let Some(candidate) = self.candidates.iter().find(|c| c.signatures.is_match(line)) {
                return candidate.language;
            }
        }
        self.fallback
    }
}

/// Resolves ambiguous extensions by sniffing file content.
#[derive(Debug, Clone)]
pub struct AmbiguousResolver {
    rules: HashMap<&'static str, AmbiguityRule>,
    line_limit: usize,
}

impl AmbiguousResolver {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] if a signature fails to compile.
    pub fn new(line_limit: usize) -> Result<Self> {
        let mut rules = HashMap::with_capacity(RULES.len());
        for spec in RULES {
            let candidates = spec
                .candidates
                .iter()
                .map(|(language, patterns)| {
                    RegexSet::new(*patterns)
                        .map(|signatures| Candidate { language: *language, signatures })
                        .map_err(|err| DomainError::InvalidPattern {
                            pattern: patterns.join("|"),
                            details: err.to_string(),
                            source: Some(Box::new(err)),
                        })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rules.insert(spec.extension, AmbiguityRule { candidates, fallback: spec.fallback });
        }
        Ok(Self { rules, line_limit })
    }

    pub fn line_limit(&self) -> usize {
        self.line_limit
    }

    pub fn handles(&self, extension: &str) -> bool {
        self.rules.contains_key(extension)
    }

    /// Resolves `extension` by reading the head of `path`.
    ///
    /// Returns `None` when no rule exists for the extension. Read failures are
    /// not errors: the rule's fallback language is returned instead.
    pub fn resolve(&self, extension: &str, path: &Path, source: &dyn ContentSource) -> Option<Language> {
        let rule = self.rules.get(extension)?;
        match source.read_lines(path, self.line_limit) {
            Ok(lines) => Some(rule.classify(lines.iter().map(String::as_str))),
            Err(err) => {
                debug!("content sniffing failed for {}: {err}; using {}", path.display(), rule.fallback);
                Some(rule.fallback)
            }
        }
    }

    /// Resolves `extension` from already available lines; only the first
    /// `line_limit` are considered.
    pub fn resolve_lines<'a>(&self, extension: &str, lines: impl IntoIterator<Item = &'a str>) -> Option<Language> {
        let rule = self.rules.get(extension)?;
        Some(rule.classify(lines.into_iter().take(self.line_limit)))
    }
}
