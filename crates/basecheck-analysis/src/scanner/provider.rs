//! Document providers: filesystem-backed and in-memory.

use std::fs;
use std::path::{Path, PathBuf};

use basecheck_core::errors::ScanError;
use basecheck_core::model::SourceDocument;
use basecheck_core::traits::DocumentProvider;
use rustc_hash::FxHashMap;

/// Reads documents from the filesystem.
///
/// Oversize and non-UTF-8 (binary) content produce per-file errors, which the
/// workspace scanner treats as "skip this file."
pub struct FsDocumentProvider {
    max_file_size: u64,
}

impl FsDocumentProvider {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl DocumentProvider for FsDocumentProvider {
    fn open(&self, path: &Path) -> Result<SourceDocument, ScanError> {
        let display = path.display().to_string();

        let metadata = fs::metadata(path).map_err(|e| ScanError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;
        if metadata.len() > self.max_file_size {
            return Err(ScanError::TooLarge {
                path: display,
                size: metadata.len(),
            });
        }

        let bytes = fs::read(path).map_err(|e| ScanError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ScanError::Binary { path: display })?;
        Ok(SourceDocument::new(text))
    }
}

/// An in-memory provider for fixtures and embedders without a filesystem.
///
/// Paths not present in the map produce an `Io` error, which lets tests
/// exercise the skip-on-failure path deterministically.
#[derive(Default)]
pub struct MemoryDocumentProvider {
    documents: FxHashMap<PathBuf, String>,
}

impl MemoryDocumentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.documents.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl DocumentProvider for MemoryDocumentProvider {
    fn open(&self, path: &Path) -> Result<SourceDocument, ScanError> {
        self.documents
            .get(path)
            .map(|text| SourceDocument::new(text.clone()))
            .ok_or_else(|| ScanError::Io {
                path: path.display().to_string(),
                message: "no such document".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "const x = 1;\n").unwrap();

        let provider = FsDocumentProvider::new(1024);
        let doc = provider.open(&path).unwrap();
        assert_eq!(doc.text(), "const x = 1;\n");
    }

    #[test]
    fn oversize_files_are_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("big.js");
        fs::write(&path, "x".repeat(64)).unwrap();

        let provider = FsDocumentProvider::new(16);
        assert!(matches!(
            provider.open(&path),
            Err(ScanError::TooLarge { .. })
        ));
    }

    #[test]
    fn binary_content_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("blob.css");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x42]).unwrap();

        let provider = FsDocumentProvider::new(1024);
        assert!(matches!(provider.open(&path), Err(ScanError::Binary { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let provider = FsDocumentProvider::new(1024);
        assert!(matches!(
            provider.open(Path::new("/no/such/file.js")),
            Err(ScanError::Io { .. })
        ));
    }

    #[test]
    fn memory_provider_round_trips() {
        let mut provider = MemoryDocumentProvider::new();
        provider.insert("/mem/a.js", "Promise.any([])");
        assert!(provider.open(Path::new("/mem/a.js")).is_ok());
        assert!(provider.open(Path::new("/mem/missing.js")).is_err());
    }
}
