// crates/domain/src/analytics.rs
pub mod aggregate;
pub mod shares;

pub use aggregate::{Aggregator, LanguageTotals};
pub use shares::{LanguageShares, ShareEntry, language_shares};
