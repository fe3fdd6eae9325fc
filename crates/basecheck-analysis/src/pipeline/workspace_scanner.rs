//! The workspace scanner: drives the scan and guarantees deterministic,
//! deduplicated output.

use std::path::PathBuf;
use std::time::Instant;

use basecheck_core::errors::RegistryError;
use basecheck_core::model::{Finding, Position, Target, TextRange, Verdict};
use basecheck_core::traits::DocumentProvider;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};
use xxhash_rust::xxh3::xxh3_64;

use super::options::{ScanOptions, ScanProgress};
use super::report::{ScanReport, ScanStats};
use crate::catalog::FeatureCatalog;
use crate::scanner::{DocumentScanner, Family};
use crate::tokens::TokenRegistry;
use crate::verdict::score;

/// Orchestrates a full scan pass over a set of candidate files.
///
/// Per-file problems (unreadable content, tokens whose feature is missing
/// from the catalog) are recovered locally and never abort the scan; only
/// construction can fail, and that happens before any scan begins.
pub struct WorkspaceScanner {
    catalog: FeatureCatalog,
    js: DocumentScanner,
    css: DocumentScanner,
}

impl WorkspaceScanner {
    pub fn new(catalog: FeatureCatalog, registry: TokenRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            js: DocumentScanner::new(registry.js)?,
            css: DocumentScanner::new(registry.css)?,
            catalog,
        })
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// Scan the given files and return findings in their total order:
    /// file path, verdict severity descending, line, column, feature name.
    ///
    /// The seen-fingerprint set and verdict cache are scan-scoped: fresh per
    /// call, never shared between scans.
    pub fn scan(
        &self,
        files: &[PathBuf],
        provider: &dyn DocumentProvider,
        target: &Target,
        options: &ScanOptions<'_>,
    ) -> ScanReport {
        let start = Instant::now();
        let mut stats = ScanStats {
            total_files: files.len(),
            ..Default::default()
        };

        let mut findings = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        // Verdicts depend only on (feature, target), and target is fixed for
        // the whole scan.
        let mut verdicts: FxHashMap<&str, Verdict> = FxHashMap::default();

        for (index, path) in files.iter().enumerate() {
            if options.is_cancelled() {
                debug!(remaining = files.len() - index, "scan cancelled");
                stats.cancelled = true;
                break;
            }

            let Some(family) = Family::from_path(path) else {
                stats.files_skipped += 1;
                continue;
            };

            let uri = path.display().to_string();
            let doc = match provider.open(path) {
                Ok(doc) => doc,
                Err(e) => {
                    debug!(path = %uri, error = %e, "skipping unreadable file");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            let scanner = match family {
                Family::Js => &self.js,
                Family::Css => &self.css,
            };

            for m in scanner.scan(doc.text()) {
                let token = scanner.token(m.token_index);
                // Dataset and registry evolve independently; an unknown
                // feature id is expected, not an error.
                let Some(feature) = self.catalog.get(&token.feature_id) else {
                    continue;
                };

                let verdict = *verdicts
                    .entry(feature.id.as_str())
                    .or_insert_with(|| score(&feature.support, target));

                let start_pos = doc.position_at(m.offset);
                let end_pos = doc.position_at(m.offset + token.text.len());

                let fingerprint = format!(
                    "{uri}::{}::{}::{}",
                    feature.id, start_pos.line, start_pos.column
                );
                if !seen.insert(fingerprint) {
                    continue;
                }

                let line_text = doc
                    .line_text(start_pos.line)
                    .unwrap_or("")
                    .trim()
                    .to_string();

                findings.push(Finding {
                    id: stable_id(&uri, start_pos, &token.text),
                    uri: uri.clone(),
                    range: TextRange {
                        start: start_pos,
                        end: end_pos,
                    },
                    feature_id: feature.id.clone(),
                    feature_name: feature.name.clone(),
                    verdict,
                    token_text: token.text.clone(),
                    line_text,
                });
            }

            stats.files_scanned += 1;
            if let Some(progress) = options.progress {
                progress(&ScanProgress {
                    files_scanned: stats.files_scanned,
                    total_files: files.len(),
                    path: uri,
                });
            }
        }

        findings.sort_by(Finding::total_cmp);
        stats.duration = start.elapsed();
        info!(
            findings = findings.len(),
            files = stats.files_scanned,
            skipped = stats.files_skipped,
            "scan complete"
        );

        ScanReport { findings, stats }
    }
}

/// Stable finding id: a deterministic hash of (uri, start position, token),
/// so re-scanning an unchanged tree reproduces identical ids.
fn stable_id(uri: &str, start: Position, token: &str) -> String {
    let key = format!("{uri}::{}::{}::{token}", start.line, start.column);
    format!("{:016x}", xxh3_64(key.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_id_is_deterministic_and_position_sensitive() {
        let a = stable_id("src/app.js", Position::new(3, 7), "Promise.any");
        let b = stable_id("src/app.js", Position::new(3, 7), "Promise.any");
        let c = stable_id("src/app.js", Position::new(3, 8), "Promise.any");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }
}
