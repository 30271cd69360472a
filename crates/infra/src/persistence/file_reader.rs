use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

use chrono::{DateTime, Local};
use statfy_ports::ContentSource;
use statfy_shared_kernel::{FileMeta, FileSize, InfrastructureError, Result};

/// Filesystem-backed [`ContentSource`] with consistent error handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|source| read_error(path, source))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| read_error(path, source))?;
        String::from_utf8(bytes)
            .map_err(|source| InfrastructureError::InvalidEncoding { path: path.to_path_buf(), source }.into())
    }

    /// Read up to `limit` lines from the start of the file.
    ///
    /// Meant for content sniffing: invalid UTF-8 is replaced rather than
    /// rejected, so one bad byte does not hide the lines around it. Line
    /// terminators (`\n` or `\r\n`) are stripped.
    pub fn read_first_lines(path: &Path, limit: usize) -> Result<Vec<String>> {
        Self::open_buffered(path)?
            .split(b'\n')
            .take(limit)
            .map(|line| {
                line.map(|mut bytes| {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    String::from_utf8_lossy(&bytes).into_owned()
                })
            })
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|source| read_error(path, source))
    }

    /// Stat `path` and build its [`FileMeta`].
    pub fn metadata(path: &Path) -> Result<FileMeta> {
        let stat = fs::metadata(path).map_err(|source| read_error(path, source))?;
        let mut meta = FileMeta::from_path(path);
        meta.size = FileSize::new(stat.len());
        meta.mtime = stat.modified().ok().map(DateTime::<Local>::from);
        Ok(meta)
    }
}

impl ContentSource for FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Self::read_text(path)
    }

    fn read_lines(&self, path: &Path, limit: usize) -> Result<Vec<String>> {
        Self::read_first_lines(path, limit)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> statfy_shared_kernel::StatfyError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
}
