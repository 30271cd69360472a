use log::debug;
use statfy_domain::{Aggregator, language_shares};
use statfy_ports::FileAnalysisPort;
use statfy_shared_kernel::{ApplicationError, FileMeta, Result};

use crate::dto::CodebaseSummary;

pub struct SummarizeCodebase<'a> {
    analyzer: &'a dyn FileAnalysisPort,
}

impl<'a> SummarizeCodebase<'a> {
    pub fn new(analyzer: &'a dyn FileAnalysisPort) -> Self {
        Self { analyzer }
    }

    /// Analyzes `files` and aggregates the results.
    ///
    /// `include_comments` selects whether shares are weighted by total size
    /// or by code size only.
    ///
    /// # Errors
    ///
    /// The first analysis failure aborts the run and is wrapped in
    /// [`ApplicationError::AnalysisFailed`].
    pub fn run(&self, files: &[FileMeta], include_comments: bool) -> Result<CodebaseSummary> {
        let results = self.analyzer.analyze_files(files).map_err(|source| ApplicationError::AnalysisFailed {
            reason: format!("{} file(s) requested", files.len()),
            source: Some(Box::new(source)),
        })?;
        debug!("analyzed {} of {} file(s)", results.len(), files.len());

        let shares = language_shares(&results, include_comments);
        let by_language = Aggregator::by_language(&results);
        let totals = Aggregator::grand_total(&results);
        Ok(CodebaseSummary { results, shares, by_language, totals })
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf, sync::Mutex};

    use statfy_domain::{FileAnalysisResult, Language};
    use statfy_shared_kernel::{CharCount, InfrastructureError, LineCount, StatfyError};

    use super::*;

    /// Returns canned sizes keyed by extension and remembers what it saw.
    #[derive(Default)]
    struct StubAnalyzer {
        fail_on: Option<&'static str>,
        seen: Mutex<Vec<PathBuf>>,
    }

    impl StubAnalyzer {
        fn canned(meta: &FileMeta) -> FileAnalysisResult {
            let (language, total, comments, blanks) = match meta.ext.as_str() {
                ".go" => (Language::Go, 100, 20, 5),
                ".py" => (Language::Python, 50, 10, 0),
                _ => return FileAnalysisResult::unknown(meta.clone()),
            };
            FileAnalysisResult::from_measurements(
                meta.clone(),
                language,
                CharCount::new(total),
                CharCount::new(comments),
                LineCount::new(blanks),
            )
        }
    }

    impl FileAnalysisPort for StubAnalyzer {
        fn analyze_file(&self, meta: &FileMeta) -> Result<FileAnalysisResult> {
            self.seen.lock().unwrap().push(meta.path.to_path_buf());
            if self.fail_on == Some(meta.name.as_str()) {
                return Err(InfrastructureError::FileRead {
                    path: meta.path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                }
                .into());
            }
            Ok(Self::canned(meta))
        }

        fn analyze_files(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
            let mut out = Vec::new();
            for meta in files {
                let result = self.analyze_file(meta)?;
                if !result.language().is_unknown() {
                    out.push(result);
                }
            }
            Ok(out)
        }
    }

    fn metas(paths: &[&str]) -> Vec<FileMeta> {
        paths.iter().map(|p| FileMeta::from_path(*p)).collect()
    }

    #[test]
    fn summary_weights_by_code_size() {
        let stub = StubAnalyzer::default();
        let summary = SummarizeCodebase::new(&stub).run(&metas(&["a.go", "b.py", "c.txt"]), false).unwrap();

        assert_eq!(summary.file_count(), 2);
        // Go code = 75, Python code = 40.
        let go = summary.shares.get(Language::Go).unwrap();
        assert!((go - 75.0 / 115.0 * 100.0).abs() < 1e-9);
        assert!((summary.shares.total() - 100.0).abs() < 1e-9);
        assert_eq!(summary.by_language[0].language, Language::Go);
        assert_eq!(summary.totals.files, 2);
        assert_eq!(summary.totals.code_size, 115);
    }

    #[test]
    fn summary_weights_by_total_size_with_comments() {
        let stub = StubAnalyzer::default();
        let summary = SummarizeCodebase::new(&stub).run(&metas(&["a.go", "b.py"]), true).unwrap();
        let python = summary.shares.get(Language::Python).unwrap();
        assert!((python - 50.0 / 150.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.ranked_shares()[0].language, Language::Go);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let stub = StubAnalyzer::default();
        let summary = SummarizeCodebase::new(&stub).run(&[], false).unwrap();
        assert!(summary.results.is_empty());
        assert!(summary.shares.is_empty());
        assert!(summary.by_language.is_empty());
    }

    #[test]
    fn failure_is_wrapped_with_its_cause() {
        let stub = StubAnalyzer { fail_on: Some("b.py"), ..StubAnalyzer::default() };
        let err = SummarizeCodebase::new(&stub).run(&metas(&["a.go", "b.py", "c.go"]), false).unwrap_err();

        let StatfyError::Application(ApplicationError::AnalysisFailed { source: Some(cause), .. }) = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(matches!(**cause, StatfyError::Infrastructure(InfrastructureError::FileRead { .. })));
        assert_eq!(stub.seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn summary_serializes_to_json() {
        let stub = StubAnalyzer::default();
        let summary = SummarizeCodebase::new(&stub).run(&metas(&["a.go"]), false).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["shares"]["Go"].as_f64().is_some());
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
    }
}
