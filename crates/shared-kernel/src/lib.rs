// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, Result, StatfyError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, FileExtension, FileMeta, FileName, FilePath, FileSize, LineCount};
