//! Token registry errors. Raised at startup, before any scan runs.

/// Errors raised while building the token matching machinery.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to compile token automaton: {0}")]
    BuildFailed(String),

    #[error("Token registry contains no tokens")]
    Empty,
}
