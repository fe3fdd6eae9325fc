//! File discovery, document access, and token matching.

pub mod document_scanner;
pub mod family;
pub mod ignores;
pub mod provider;
pub mod walker;

pub use document_scanner::{DocumentScanner, TokenMatch};
pub use family::Family;
pub use ignores::IgnorePatterns;
pub use provider::{FsDocumentProvider, MemoryDocumentProvider};
pub use walker::FileWalker;
