//! Seam traits between the engine and its host environment.

pub mod cancellation;
pub mod document_provider;

pub use cancellation::CancellationToken;
pub use document_provider::DocumentProvider;
