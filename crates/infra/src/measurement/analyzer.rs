// crates/infra/src/measurement/analyzer.rs
//! Single-file and batch analysis.

use std::sync::Arc;

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use statfy_domain::{AnalyzerConfig, FileAnalysisResult, Language, LanguageRegistry};
use statfy_ports::{ContentSource, FileAnalysisPort};
#[cfg(feature = "parallel")]
use statfy_shared_kernel::InfrastructureError;
use statfy_shared_kernel::{CharCount, FileMeta, Result};

use super::{blank_lines::BlankLineCounter, extractor::CommentPatternTable};
use crate::{detection::AmbiguousResolver, persistence::FileReader};

/// Batches smaller than this are analyzed on the calling thread.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 10;

/// Computes comment, blank and code sizes for files.
///
/// All lookup tables are built up front and never mutated, so one analyzer
/// can be shared by any number of threads.
pub struct FileAnalyzer {
    registry: LanguageRegistry,
    resolver: AmbiguousResolver,
    comments: CommentPatternTable,
    blank_lines: BlankLineCounter,
    config: AnalyzerConfig,
    source: Arc<dyn ContentSource>,
}

impl FileAnalyzer {
    /// # Errors
    ///
    /// Fails when `config` is invalid or a built-in pattern does not compile.
    pub fn new(config: AnalyzerConfig, source: Arc<dyn ContentSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: LanguageRegistry::new(),
            resolver: AmbiguousResolver::new(config.detection_line_limit)?,
            comments: CommentPatternTable::new()?,
            blank_lines: BlankLineCounter::new()?,
            config,
            source,
        })
    }

    /// Analyzer reading straight from the local filesystem.
    ///
    /// # Errors
    ///
    /// See [`FileAnalyzer::new`].
    pub fn with_filesystem(config: AnalyzerConfig) -> Result<Self> {
        Self::new(config, Arc::new(FileReader))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn comments(&self) -> &CommentPatternTable {
        &self.comments
    }

    /// Extension lookup, then content sniffing for ambiguous extensions.
    pub fn resolve_language(&self, meta: &FileMeta) -> Language {
        let ext = meta.ext.as_str();
        let language = self.registry.resolve_extension(ext);
        if language.is_unknown() || !self.registry.is_ambiguous(ext) {
            return language;
        }
        self.resolver
            .resolve(ext, meta.path.as_path(), self.source.as_ref())
            .unwrap_or(language)
    }

    /// Analyzes one file.
    ///
    /// Unsupported files come back as an all-zero `Unknown` result and are
    /// never opened.
    ///
    /// # Errors
    ///
    /// Propagates read failures, and a negative code size when `strict` is set.
    pub fn analyze(&self, meta: &FileMeta) -> Result<FileAnalysisResult> {
        let language = self.resolve_language(meta);
        if language.is_unknown() {
            debug!("skipping {}: unsupported extension {}", meta.path, meta.ext);
            return Ok(FileAnalysisResult::unknown(meta.clone()));
        }

        let content = self.source.read_to_string(meta.path.as_path())?;
        self.measure(meta.clone(), language, &content)
    }

    /// Measures `content` as `language` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a negative-code-size error when `strict` is set.
    pub fn measure(&self, meta: FileMeta, language: Language, content: &str) -> Result<FileAnalysisResult> {
        let comment_size = self.comments.comment_size(language, content);
        let total_size = CharCount::of(content);
        let blank_lines = self.blank_lines.count(content);

        let result = FileAnalysisResult::from_measurements(meta, language, total_size, comment_size, blank_lines);
        debug!(
            "{} [{}]: total={} comments={} blank={} code={}",
            result.metadata().path,
            language,
            total_size,
            comment_size,
            blank_lines,
            result.code_size()
        );

        if let Err(err) = result.ensure_non_negative() {
            if self.config.strict {
                return Err(err.into());
            }
            warn!("{err}");
        }
        Ok(result)
    }

    /// Analyzes every file, dropping `Unknown` results.
    ///
    /// Output order follows input order. The first failing file (in input
    /// order) aborts the batch and its error is returned.
    ///
    /// # Errors
    ///
    /// See [`FileAnalyzer::analyze`].
    pub fn analyze_all(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        self.analyze_batch(files)
    }

    #[cfg(feature = "parallel")]
    fn analyze_batch(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        if files.len() < PARALLEL_THRESHOLD || self.config.jobs == 1 {
            return self.analyze_sequential(files);
        }
        self.analyze_parallel(files)
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_batch(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        self.analyze_sequential(files)
    }

    fn analyze_sequential(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        let mut results = Vec::with_capacity(files.len());
        for meta in files {
            let result = self.analyze(meta)?;
            if !result.language().is_unknown() {
                results.push(result);
            }
        }
        Ok(results)
    }

    #[cfg(feature = "parallel")]
    fn analyze_parallel(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        let outcomes: Vec<Result<FileAnalysisResult>> =
            pool.install(|| files.par_iter().map(|meta| self.analyze(meta)).collect());

        collect_parallel_results(outcomes)
    }
}

/// Keeps input order and returns the earliest error.
#[cfg(feature = "parallel")]
fn collect_parallel_results(outcomes: Vec<Result<FileAnalysisResult>>) -> Result<Vec<FileAnalysisResult>> {
    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let result = outcome?;
        if !result.language().is_unknown() {
            results.push(result);
        }
    }
    Ok(results)
}

impl FileAnalysisPort for FileAnalyzer {
    fn analyze_file(&self, meta: &FileMeta) -> Result<FileAnalysisResult> {
        self.analyze(meta)
    }

    fn analyze_files(&self, files: &[FileMeta]) -> Result<Vec<FileAnalysisResult>> {
        self.analyze_all(files)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io,
        path::{Path, PathBuf},
        sync::Mutex,
    };

    use statfy_shared_kernel::{DomainError, InfrastructureError, LineCount, StatfyError};

    use super::*;

    /// In-memory content keyed by path; records every full read.
    #[derive(Default)]
    struct MemorySource {
        files: HashMap<PathBuf, String>,
        reads: Mutex<Vec<PathBuf>>,
    }

    impl MemorySource {
        fn with(files: &[(&str, &str)]) -> Self {
            Self {
                files: files.iter().map(|(p, c)| (PathBuf::from(p), c.to_string())).collect(),
                reads: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContentSource for MemorySource {
        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.reads.lock().unwrap().push(path.to_path_buf());
            self.files.get(path).cloned().ok_or_else(|| {
                InfrastructureError::FileRead {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
                }
                .into()
            })
        }

        fn read_lines(&self, path: &Path, limit: usize) -> Result<Vec<String>> {
            let text = self.files.get(path).cloned().unwrap_or_default();
            Ok(text.lines().take(limit).map(str::to_string).collect())
        }
    }

    fn analyzer(source: MemorySource) -> (FileAnalyzer, Arc<MemorySource>) {
        let source = Arc::new(source);
        let config = AnalyzerConfig { jobs: 1, ..AnalyzerConfig::default() };
        let analyzer = FileAnalyzer::new(config, source.clone()).expect("analyzer builds");
        (analyzer, source)
    }

    fn assert_sizes_add_up(result: &FileAnalysisResult) {
        assert_eq!(
            result.code_size() + result.comment_size().value() as i64 + result.blank_lines().value() as i64,
            result.total_size().value() as i64
        );
    }

    #[test]
    fn go_file_sizes() {
        let src = "package main\n// hi\nfunc f(){}\n";
        let (analyzer, _) = analyzer(MemorySource::with(&[("main.go", src)]));
        let result = analyzer.analyze(&FileMeta::from_path("main.go")).unwrap();

        assert_eq!(result.language(), Language::Go);
        assert_eq!(result.total_size().value(), src.chars().count());
        assert_eq!(result.comment_size().value(), 5);
        assert_eq!(result.blank_lines().value(), 0);
        assert_sizes_add_up(&result);
    }

    #[test]
    fn unknown_extension_is_never_read() {
        let (analyzer, source) = analyzer(MemorySource::default());
        let result = analyzer.analyze(&FileMeta::from_path("photo.png")).unwrap();

        assert_eq!(result.language(), Language::Unknown);
        assert!(result.total_size().is_zero());
        assert!(result.comment_size().is_zero());
        assert!(result.blank_lines().is_zero());
        assert_eq!(result.code_size(), 0);
        assert!(source.reads.lock().unwrap().is_empty());
    }

    #[test]
    fn read_failure_is_propagated() {
        let (analyzer, _) = analyzer(MemorySource::default());
        let err = analyzer.analyze(&FileMeta::from_path("gone.rs")).unwrap_err();
        assert!(matches!(err, StatfyError::Infrastructure(InfrastructureError::FileRead { .. })));
    }

    #[test]
    fn dot_m_resolution_uses_content() {
        let (analyzer, _) = analyzer(MemorySource::with(&[
            ("Foo.m", "#import <Foundation/Foundation.h>\n@interface Foo\n@end\n"),
            ("plot.m", "x = linspace(0, 1);\n"),
        ]));
        assert_eq!(analyzer.resolve_language(&FileMeta::from_path("Foo.m")), Language::ObjectiveC);
        assert_eq!(analyzer.resolve_language(&FileMeta::from_path("plot.m")), Language::Matlab);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let src = "x = 1 # ñandú\n";
        let (analyzer, _) = analyzer(MemorySource::with(&[("a.py", src)]));
        let result = analyzer.analyze(&FileMeta::from_path("a.py")).unwrap();
        assert_eq!(result.total_size().value(), 14);
        assert_eq!(result.comment_size().value(), 7);
        assert_sizes_add_up(&result);
    }

    #[test]
    fn analysis_is_idempotent() {
        let src = "/* a */\n\nint main() { return 0; } // b\n";
        let (analyzer, _) = analyzer(MemorySource::with(&[("m.c", src)]));
        let meta = FileMeta::from_path("m.c");
        assert_eq!(analyzer.analyze(&meta).unwrap(), analyzer.analyze(&meta).unwrap());
    }

    #[test]
    fn batch_skips_unknown_and_keeps_order() {
        let (analyzer, _) = analyzer(MemorySource::with(&[("b.rs", "fn b() {}\n"), ("a.go", "package a\n")]));
        let files = [FileMeta::from_path("b.rs"), FileMeta::from_path("notes.txt"), FileMeta::from_path("a.go")];
        let results = analyzer.analyze_all(&files).unwrap();
        let langs: Vec<_> = results.iter().map(FileAnalysisResult::language).collect();
        assert_eq!(langs, vec![Language::Rust, Language::Go]);
    }

    #[test]
    fn batch_aborts_on_first_error() {
        let (analyzer, _) = analyzer(MemorySource::with(&[("ok.rs", "fn ok() {}\n")]));
        let files = [FileMeta::from_path("ok.rs"), FileMeta::from_path("missing.rs")];
        let err = analyzer.analyze_all(&files).unwrap_err();
        assert!(err.to_string().contains("missing.rs"));
    }

    #[test]
    fn strict_mode_accepts_consistent_sizes() {
        let source = Arc::new(MemorySource::default());
        let config = AnalyzerConfig { strict: true, jobs: 1, ..AnalyzerConfig::default() };
        let analyzer = FileAnalyzer::new(config, source).unwrap();
        let result = analyzer.measure(FileMeta::from_path("s.sh"), Language::Bash, "# c\n\nls\n").unwrap();
        assert_eq!(result.comment_size().value(), 3);
        assert_eq!(result.blank_lines().value(), 1);
        assert_eq!(result.code_size(), 5);
    }

    #[test]
    fn blank_line_runs_reduce_code_size() {
        let (analyzer, _) = analyzer(MemorySource::default());
        let src = "package a\n\n\n\nfunc f() {}";
        let result = analyzer.measure(FileMeta::from_path("a.go"), Language::Go, src).unwrap();
        assert_eq!(result.total_size().value(), 24);
        assert_eq!(result.blank_lines().value(), 3);
        assert_eq!(result.code_size(), 21);
    }

    #[test]
    fn negative_code_size_is_detected() {
        let forged = FileAnalysisResult::from_measurements(
            FileMeta::from_path("x.c"),
            Language::C,
            CharCount::new(1),
            CharCount::new(2),
            LineCount::new(0),
        );
        assert!(matches!(forged.ensure_non_negative(), Err(DomainError::NegativeCodeSize { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnalyzerConfig { detection_line_limit: 0, ..AnalyzerConfig::default() };
        assert!(FileAnalyzer::new(config, Arc::new(MemorySource::default())).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_matches_sequential() {
        let files: Vec<(String, String)> =
            (0..25).map(|i| (format!("f{i}.py"), format!("# {i}\nx = {i}\n\n"))).collect();
        let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
        let source = Arc::new(MemorySource::with(&borrowed));
        let metas: Vec<_> = files.iter().map(|(p, _)| FileMeta::from_path(p.as_str())).collect();

        let sequential = FileAnalyzer::new(AnalyzerConfig { jobs: 1, ..AnalyzerConfig::default() }, source.clone())
            .unwrap()
            .analyze_all(&metas)
            .unwrap();
        let parallel = FileAnalyzer::new(AnalyzerConfig { jobs: 4, ..AnalyzerConfig::default() }, source)
            .unwrap()
            .analyze_all(&metas)
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 25);
    }
}
