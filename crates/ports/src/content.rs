// crates/ports/src/content.rs
use std::path::Path;

use statfy_shared_kernel::Result;

/// Port for reading file content.
pub trait ContentSource: Send + Sync {
    /// Whole file as text.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// At most `limit` lines from the start of the file, without line terminators.
    fn read_lines(&self, path: &Path, limit: usize) -> Result<Vec<String>>;
}
