// crates/domain/src/registry.rs
use std::collections::{HashMap, HashSet};

use crate::language::Language;

/// Extension table. Keys carry the leading dot and are matched case-sensitively.
const EXTENSIONS: &[(&str, Language)] = &[
    (".go", Language::Go),
    (".c", Language::C),
    (".h", Language::C),
    (".cpp", Language::CPlusPlus),
    (".cc", Language::CPlusPlus),
    (".cxx", Language::CPlusPlus),
    (".hpp", Language::CPlusPlus),
    (".cs", Language::CSharp),
    (".rs", Language::Rust),
    (".js", Language::JavaScript),
    (".ts", Language::TypeScript),
    (".py", Language::Python),
    (".java", Language::Java),
    (".kt", Language::Kotlin),
    (".swift", Language::Swift),
    (".html", Language::Html),
    (".css", Language::Css),
    (".sql", Language::Sql),
    (".php", Language::Php),
    (".rb", Language::Ruby),
    (".dart", Language::Dart),
    (".lua", Language::Lua),
    (".pl", Language::Perl),
    (".scala", Language::Scala),
    (".hs", Language::Haskell),
    (".asm", Language::Assembly),
    (".sh", Language::Bash),
    (".r", Language::R),
    // Also Objective-C; see AMBIGUOUS_EXTENSIONS.
    (".m", Language::Matlab),
    (".vb", Language::VisualBasic),
    (".mm", Language::ObjectiveC),
    (".bat", Language::Shell),
    (".ps1", Language::PowerShell),
    (".p", Language::Pascal),
    (".ex", Language::Elixir),
    (".clj", Language::Clojure),
    (".fs", Language::FSharp),
    (".jl", Language::Julia),
    (".zig", Language::Zig),
];

/// Extensions whose language can only be decided by looking at file content.
const AMBIGUOUS_EXTENSIONS: &[&str] = &[".m"];

/// Immutable extension → language lookup.
///
/// The generic lookup and the ambiguous-extension set are kept apart: callers
/// first call [`resolve_extension`](Self::resolve_extension), then ask
/// [`is_ambiguous`](Self::is_ambiguous) whether content inspection is needed.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    by_extension: HashMap<&'static str, Language>,
    ambiguous: HashSet<&'static str>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self {
            by_extension: EXTENSIONS.iter().copied().collect(),
            ambiguous: AMBIGUOUS_EXTENSIONS.iter().copied().collect(),
        }
    }

    /// Exact lookup of a dotted extension; `Unknown` when not registered.
    pub fn resolve_extension(&self, extension: &str) -> Language {
        self.by_extension.get(extension).copied().unwrap_or(Language::Unknown)
    }

    pub fn is_ambiguous(&self, extension: &str) -> bool {
        self.ambiguous.contains(extension)
    }

    pub fn display_name(&self, language: Language) -> &'static str {
        language.display_name()
    }

    pub fn color(&self, language: Language) -> &'static str {
        language.color()
    }

    /// Registered extensions for `language`, sorted.
    pub fn extensions_of(&self, language: Language) -> Vec<&'static str> {
        let mut exts: Vec<_> = self
            .by_extension
            .iter()
            .filter(|&(_, lang)| *lang == language)
            .map(|(ext, _)| *ext)
            .collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
