//! Data models for E-utilities responses and search results.
//!
//! Wire models use `#[serde(default)]` on every field so that absent upstream
//! data degrades to `None` instead of a parse failure.

mod enums;
mod eutils;
mod inputs;
mod record;

pub use enums::ResponseFormat;
pub use eutils::{
    ArticleId, ArticleSummary, AuthorEntry, ESearchResponse, ESearchResult, ESummaryResponse,
};
pub use inputs::{ResultLimit, SearchInput};
pub use record::Record;
