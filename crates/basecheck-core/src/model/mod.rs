//! Core data model for the baseline engine.

pub mod document;
pub mod feature;
pub mod finding;
pub mod target;
pub mod verdict;
pub mod version;

pub use document::SourceDocument;
pub use feature::{BaselineStatus, Feature, SupportTable};
pub use finding::{Finding, Position, TextRange};
pub use target::{Target, VersionFloors};
pub use verdict::Verdict;
pub use version::BrowserVersion;
