//! Document access seam.

use std::path::Path;

use crate::errors::ScanError;
use crate::model::SourceDocument;

/// Opens documents on behalf of the workspace scanner.
///
/// The scanner treats any `Err` as "skip this file": a single unreadable file
/// must not abort a scan. Implementations exist for the real filesystem and
/// for in-memory fixtures.
pub trait DocumentProvider {
    fn open(&self, path: &Path) -> Result<SourceDocument, ScanError>;
}
