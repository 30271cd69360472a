// crates/infra/src/measurement/blank_lines.rs
use regex::Regex;
use statfy_shared_kernel::{DomainError, LineCount, Result};

// Horizontal whitespace only, so a match never spans a line break and every
// blank line is its own match.
const BLANK_LINE_PATTERN: &str = r"(?m)^[ \t\x0B\x0C\r]*$";

/// Counts whitespace-only lines.
#[derive(Debug, Clone)]
pub struct BlankLineCounter {
    pattern: Regex,
}

impl BlankLineCounter {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(BLANK_LINE_PATTERN).map_err(|err| DomainError::InvalidPattern {
            pattern: BLANK_LINE_PATTERN.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { pattern })
    }

    /// Number of whitespace-only lines in `source`.
    ///
    /// When `source` is empty or ends with a newline the pattern also matches
    /// the empty "line" after the final newline. That match is not a line of
    /// the file and is not counted.
    pub fn count(&self, source: &str) -> LineCount {
        let matches = self.pattern.find_iter(source).count();
        let trailing = usize::from(source.is_empty() || source.ends_with('\n'));
        LineCount::new(matches.saturating_sub(trailing))
    }
}
