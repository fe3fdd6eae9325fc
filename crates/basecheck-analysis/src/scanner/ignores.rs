//! Exclusion patterns for file discovery.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories never worth scanning: dependency trees, build output, and
/// editor state.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "out",
    ".git",
    ".vscode",
];

/// Gitignore-style exclusion matching over the fixed set, any configured
/// extras, and the project's own `.gitignore`.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        let gitignore_path = root.join(".gitignore");
        if gitignore_path.exists() {
            let _ = builder.add(&gitignore_path);
        }

        Self {
            gitignore: builder
                .build()
                .unwrap_or_else(|_| Gitignore::empty()),
        }
    }

    /// Check if a root-relative path should be excluded.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
