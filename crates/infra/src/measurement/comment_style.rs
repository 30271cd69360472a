// crates/infra/src/measurement/comment_style.rs
//! Comment syntax families and the language → family table.
//!
//! Several languages share one family. Adding a language means adding one
//! row to [`LANGUAGE_STYLES`].
//!
//! Patterns are applied without a tokenizer: a delimiter inside a string
//! literal (`"http://example.com"`, `'#'`) can still start a comment span.
//! Guarded families reject the most common cases by refusing a delimiter
//! that directly follows a quote.

use statfy_domain::Language;

/// Comment syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// C family: `//` and `/* */`
    CStyle,
    /// CSS: `/* */` only
    Css,
    /// HTML/XML: `<!-- -->`
    Html,
    /// Python/R: `#` plus `'''...'''` / `"""..."""` blocks
    Python,
    /// Ruby/Perl: `#` plus `=begin` ～ `=end`
    Ruby,
    /// Pascal/F#: `{ }`, `(* *)` and `//`
    Pascal,
    /// Elixir: `#` plus `@moduledoc """` / `@doc """` blocks
    Elixir,
    /// SQL: `--` and `/* */`
    Sql,
    /// Lua: `--` and `--[[ ]]`
    Lua,
    /// Haskell: `--` and `{- -}`
    Haskell,
    /// NASM/MASM: `;`
    Assembly,
    /// Bash: `#` and the `: '...'` no-op block
    Bash,
    /// Windows batch: `REM` at the start of a statement, and `::`
    Batch,
    /// PowerShell: `#` and `<# #>`
    PowerShell,
    /// MATLAB: `%` and `%{ %}`
    Matlab,
    /// Visual Basic: `'`, `/* */` and `REM` at the start of a statement
    VisualBasic,
    /// Clojure: `;`
    Clojure,
    /// Julia: `#` and `#= =#`
    Julia,
    /// Fortran: `!` and `/* */`
    Fortran,
}

/// Language → comment family. Languages without a row have no comments.
pub const LANGUAGE_STYLES: &[(Language, CommentStyle)] = &[
    (Language::Go, CommentStyle::CStyle),
    (Language::C, CommentStyle::CStyle),
    (Language::CPlusPlus, CommentStyle::CStyle),
    (Language::CSharp, CommentStyle::CStyle),
    (Language::Rust, CommentStyle::CStyle),
    (Language::JavaScript, CommentStyle::CStyle),
    (Language::TypeScript, CommentStyle::CStyle),
    (Language::Java, CommentStyle::CStyle),
    (Language::Kotlin, CommentStyle::CStyle),
    (Language::Swift, CommentStyle::CStyle),
    (Language::Php, CommentStyle::CStyle),
    (Language::Dart, CommentStyle::CStyle),
    (Language::Scala, CommentStyle::CStyle),
    (Language::ObjectiveC, CommentStyle::CStyle),
    (Language::Zig, CommentStyle::CStyle),
    (Language::Css, CommentStyle::Css),
    (Language::Html, CommentStyle::Html),
    (Language::Python, CommentStyle::Python),
    (Language::R, CommentStyle::Python),
    (Language::Ruby, CommentStyle::Ruby),
    (Language::Perl, CommentStyle::Ruby),
    (Language::Pascal, CommentStyle::Pascal),
    (Language::FSharp, CommentStyle::Pascal),
    (Language::Elixir, CommentStyle::Elixir),
    (Language::Sql, CommentStyle::Sql),
    (Language::Lua, CommentStyle::Lua),
    (Language::Haskell, CommentStyle::Haskell),
    (Language::Assembly, CommentStyle::Assembly),
    (Language::Bash, CommentStyle::Bash),
    (Language::Shell, CommentStyle::Batch),
    (Language::PowerShell, CommentStyle::PowerShell),
    (Language::Matlab, CommentStyle::Matlab),
    (Language::VisualBasic, CommentStyle::VisualBasic),
    (Language::Clojure, CommentStyle::Clojure),
    (Language::Julia, CommentStyle::Julia),
    (Language::Fortran, CommentStyle::Fortran),
];

/// Name of the capture group holding the comment when a pattern also
/// consumes a guard character in front of it.
pub(crate) const COMMENT_GROUP: &str = "comment";

impl CommentStyle {
    pub const ALL: [CommentStyle; 19] = [
        Self::CStyle,
        Self::Css,
        Self::Html,
        Self::Python,
        Self::Ruby,
        Self::Pascal,
        Self::Elixir,
        Self::Sql,
        Self::Lua,
        Self::Haskell,
        Self::Assembly,
        Self::Bash,
        Self::Batch,
        Self::PowerShell,
        Self::Matlab,
        Self::VisualBasic,
        Self::Clojure,
        Self::Julia,
        Self::Fortran,
    ];

    /// Looks the language up in [`LANGUAGE_STYLES`].
    pub fn from_language(language: Language) -> Option<Self> {
        LANGUAGE_STYLES.iter().find(|(lang, _)| *lang == language).map(|(_, style)| *style)
    }

    /// Regex source for this family.
    ///
    /// Block bodies use `[\s\S]*?` so the nearest closing delimiter ends the span.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::CStyle => r#"(?:^|[^"'/])(?P<comment>//.*|/\*[\s\S]*?\*/)"#,
            Self::Css => r#"(?:^|[^"'/])(?P<comment>/\*[\s\S]*?\*/)"#,
            Self::Html => r"(?:^|[^\\])(?P<comment><!--[\s\S]*?-->)",
            Self::Python => r#"#.*|'{3}[\s\S]*?'{3}|"{3}[\s\S]*?"{3}"#,
            Self::Ruby => r"#.*|=begin[\s\S]*?=end",
            Self::Pascal => r"\{[\s\S]*?\}|\(\*[\s\S]*?\*\)|//.*",
            Self::Elixir => r##"#.*|@moduledoc\s*"""[\s\S]*?"""|@doc\s*"""[\s\S]*?""""##,
            Self::Sql => r"--.*|/\*[\s\S]*?\*/",
            Self::Lua => r"--\[\[[\s\S]*?\]\]|--.*",
            Self::Haskell => r"--.*|\{-[\s\S]*?-\}",
            Self::Assembly => r#"(?:^|[^"';])(?P<comment>;.*)"#,
            Self::Bash => r"#.*|:[ \t]*'[\s\S]*?'",
            Self::Batch => r"(?m:^[ \t]*(?i:REM)\b.*)|::.*",
            Self::PowerShell => r"<#[\s\S]*?#>|#.*",
            Self::Matlab => r#"(?:^|[^"'/])(?P<comment>%\{[\s\S]*?%\}|%.*)"#,
            Self::VisualBasic => r"'.*|/\*[\s\S]*?\*/|(?m:^[ \t]*(?i:REM)\b.*)",
            Self::Clojure => r";.*",
            Self::Julia => r"#=[\s\S]*?=#|#.*",
            Self::Fortran => r"!.*|/\*[\s\S]*?\*/",
        }
    }

    /// Whether the pattern consumes a guard character before the comment.
    pub const fn is_guarded(self) -> bool {
        matches!(self, Self::CStyle | Self::Css | Self::Html | Self::Assembly | Self::Matlab)
    }
}
