//! Token registry: the lexical tokens the scanner searches for.

pub mod boundary;
pub mod registry;

pub use boundary::Boundary;
pub use registry::{ScannerToken, TokenRegistry};
