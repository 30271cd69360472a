// crates/domain/src/language.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the analyzer knows about.
///
/// Identity is the variant itself: two values are equal only if they are the
/// same variant, regardless of display name (`Bash` and `Shell` share a color
/// but are distinct).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Language {
    Go,
    C,
    CPlusPlus,
    CSharp,
    Rust,
    JavaScript,
    TypeScript,
    Python,
    Java,
    Kotlin,
    Swift,
    Html,
    Css,
    Sql,
    Php,
    Ruby,
    Dart,
    Lua,
    Perl,
    Scala,
    Haskell,
    Assembly,
    Bash,
    R,
    Matlab,
    VisualBasic,
    ObjectiveC,
    /// Windows batch scripts (`.bat`).
    Shell,
    Pascal,
    Elixir,
    Clojure,
    FSharp,
    Julia,
    PowerShell,
    Fortran,
    Zig,
    #[default]
    Unknown,
}

const UNKNOWN_COLOR: &str = "#CCCCCC";

impl Language {
    /// Every known language, `Unknown` excluded.
    pub const ALL: [Language; 36] = [
        Self::Go,
        Self::C,
        Self::CPlusPlus,
        Self::CSharp,
        Self::Rust,
        Self::JavaScript,
        Self::TypeScript,
        Self::Python,
        Self::Java,
        Self::Kotlin,
        Self::Swift,
        Self::Html,
        Self::Css,
        Self::Sql,
        Self::Php,
        Self::Ruby,
        Self::Dart,
        Self::Lua,
        Self::Perl,
        Self::Scala,
        Self::Haskell,
        Self::Assembly,
        Self::Bash,
        Self::R,
        Self::Matlab,
        Self::VisualBasic,
        Self::ObjectiveC,
        Self::Shell,
        Self::Pascal,
        Self::Elixir,
        Self::Clojure,
        Self::FSharp,
        Self::Julia,
        Self::PowerShell,
        Self::Fortran,
        Self::Zig,
    ];

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::C => "C",
            Self::CPlusPlus => "C++",
            Self::CSharp => "C#",
            Self::Rust => "Rust",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Swift => "Swift",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Sql => "SQL",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Dart => "Dart",
            Self::Lua => "Lua",
            Self::Perl => "Perl",
            Self::Scala => "Scala",
            Self::Haskell => "Haskell",
            Self::Assembly => "Assembly",
            Self::Bash => "Bash",
            Self::R => "R",
            Self::Matlab => "MATLAB",
            Self::VisualBasic => "Visual Basic",
            Self::ObjectiveC => "Objective-C",
            Self::Shell => "Shell",
            Self::Pascal => "Pascal",
            Self::Elixir => "Elixir",
            Self::Clojure => "Clojure",
            Self::FSharp => "F#",
            Self::Julia => "Julia",
            Self::PowerShell => "PowerShell",
            Self::Fortran => "Fortran",
            Self::Zig => "Zig",
            Self::Unknown => "Unknown",
        }
    }

    /// Hex color used by chart renderers (GitHub linguist palette).
    pub const fn color(self) -> &'static str {
        match self {
            Self::Go => "#00ADD8",
            Self::C => "#555555",
            Self::CPlusPlus => "#F34B7D",
            Self::CSharp => "#178600",
            Self::Rust => "#DEA584",
            Self::JavaScript => "#F1E05A",
            Self::TypeScript => "#3178C6",
            Self::Python => "#3572A5",
            Self::Java => "#B07219",
            Self::Kotlin => "#F18E33",
            Self::Swift => "#FFAC45",
            Self::Html => "#E34C26",
            Self::Css => "#563D7C",
            Self::Sql => "#438EFF",
            Self::Php => "#777BB4",
            Self::Ruby => "#701516",
            Self::Dart => "#00B4AB",
            Self::Lua => "#000080",
            Self::Perl => "#0298C3",
            Self::Scala => "#C22D40",
            Self::Haskell => "#5E5086",
            Self::Assembly => "#6E4C13",
            Self::Bash => "#89E051",
            Self::R => "#198CE7",
            Self::Matlab => "#0076A8",
            Self::VisualBasic => "#945DB7",
            Self::ObjectiveC => "#438EFF",
            Self::Shell => "#89E051",
            Self::Pascal => "#E31C3D",
            Self::Elixir => "#6E4A7E",
            Self::Clojure => "#DB5855",
            Self::FSharp => "#B845FC",
            Self::Julia => "#A93939",
            Self::PowerShell => "#012456",
            Self::Fortran => "#4D41B1",
            Self::Zig => "#EC915C",
            Self::Unknown => UNKNOWN_COLOR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
