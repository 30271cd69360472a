// tests/common/mod.rs
//! Shared helpers for the integration suites.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A throwaway source tree.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

pub const GO_SOURCE: &str = "package main\n\n// entry point\nfunc main() {\n\tprintln(\"hi\")\n}\n";
pub const PYTHON_SOURCE: &str = "# helper\ndef f():\n    return 1\n";
pub const OBJC_SOURCE: &str = "#import <Foundation/Foundation.h>\n@interface Foo : NSObject\n@end\n";
pub const MATLAB_SOURCE: &str = "% plot\nx = linspace(0, 1, 10);\n";
