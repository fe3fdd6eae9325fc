//! The Basecheck engine: configuration, catalog, and scanner wired together.

use std::path::PathBuf;

use basecheck_core::config::BasecheckConfig;
use basecheck_core::errors::PipelineError;
use basecheck_core::model::Target;
use tracing::info;

use super::options::ScanOptions;
use super::report::ScanReport;
use super::workspace_scanner::WorkspaceScanner;
use crate::catalog::FeatureCatalog;
use crate::scanner::{Family, FileWalker, FsDocumentProvider};
use crate::tokens::TokenRegistry;

/// Entry point for embedders: one instance per project root.
///
/// Construction loads the bundled catalog and compiles the token automatons;
/// any failure there is fatal and surfaced before the first scan. Scans
/// themselves only fail for environment-level problems (the root cannot be
/// walked); per-file problems shrink the result instead.
pub struct Basecheck {
    root: PathBuf,
    config: BasecheckConfig,
    target: Target,
    scanner: WorkspaceScanner,
    provider: FsDocumentProvider,
}

impl Basecheck {
    pub fn new(root: impl Into<PathBuf>, config: BasecheckConfig) -> Result<Self, PipelineError> {
        let target = config.baseline.effective_target()?;
        let catalog = FeatureCatalog::bundled()?;
        let scanner = WorkspaceScanner::new(catalog, TokenRegistry::builtin())?;
        let provider = FsDocumentProvider::new(config.scan.effective_max_file_size());
        Ok(Self {
            root: root.into(),
            config,
            target,
            scanner,
            provider,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Run one scan pass and return the ordered findings.
    pub fn scan(&self, options: &ScanOptions<'_>) -> Result<ScanReport, PipelineError> {
        let mut families = Vec::new();
        if self.config.scan.effective_include_js() {
            families.push(Family::Js);
        }
        if self.config.scan.effective_include_css() {
            families.push(Family::Css);
        }

        let walker = FileWalker::new(
            self.root.clone(),
            &families,
            &self.config.scan.extra_ignore,
        )?;
        let files = walker.discover()?;
        info!(
            files = files.len(),
            target = %self.target.name,
            root = %self.root.display(),
            "starting baseline scan"
        );

        Ok(self
            .scanner
            .scan(&files, &self.provider, &self.target, options))
    }
}
