// crates/infra/src/detection.rs
pub mod ambiguous;

pub use ambiguous::AmbiguousResolver;
