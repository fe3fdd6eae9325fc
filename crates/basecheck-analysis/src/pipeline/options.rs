//! Per-scan options: cancellation and progress reporting.

use basecheck_core::traits::CancellationToken;

/// Progress notification emitted after each file completes.
///
/// Purely observational: reflects processing order, never affects the
/// content or order of the final finding list.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// Files processed so far, including this one.
    pub files_scanned: usize,
    /// Total candidate files in this scan.
    pub total_files: usize,
    /// The file that just completed.
    pub path: String,
}

/// Optional hooks for a single scan pass.
#[derive(Default)]
pub struct ScanOptions<'a> {
    /// Polled once per file boundary; a cancelled scan returns the findings
    /// accumulated so far.
    pub cancellation: Option<&'a CancellationToken>,
    /// Invoked after each file completes.
    pub progress: Option<&'a dyn Fn(&ScanProgress)>,
}

impl<'a> ScanOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn with_progress(mut self, progress: &'a dyn Fn(&ScanProgress)) -> Self {
        self.progress = Some(progress);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(|t| t.is_cancelled())
    }
}
