//! Sequential file discovery over a project root.

use std::fs;
use std::path::{Path, PathBuf};

use basecheck_core::errors::ScanError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use super::family::Family;
use super::ignores::IgnorePatterns;

/// Walks a root directory and returns the candidate files for a scan.
///
/// Files are matched by family include globs and filtered through the
/// exclusion patterns. The walk is sequential and the result is sorted, so
/// discovery order is deterministic across runs.
pub struct FileWalker {
    root: PathBuf,
    ignores: IgnorePatterns,
    include: GlobSet,
}

impl FileWalker {
    pub fn new(
        root: PathBuf,
        families: &[Family],
        extra_ignores: &[String],
    ) -> Result<Self, ScanError> {
        let ignores = IgnorePatterns::new(&root, extra_ignores);

        let mut builder = GlobSetBuilder::new();
        for family in families {
            for ext in family.extensions() {
                let glob = Glob::new(&format!("**/*.{ext}"))
                    .map_err(|e| ScanError::Discovery(e.to_string()))?;
                builder.add(glob);
            }
        }
        let include = builder
            .build()
            .map_err(|e| ScanError::Discovery(e.to_string()))?;

        Ok(Self {
            root,
            ignores,
            include,
        })
    }

    /// Discover all candidate files under the root.
    ///
    /// A missing or unreadable root is an environment-level failure and
    /// aborts the scan; unreadable subdirectories are skipped.
    pub fn discover(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::Discovery(format!(
                "not a directory: {}",
                self.root.display()
            )));
        }

        let mut files = Vec::new();
        self.walk_dir(&self.root, &mut files);
        files.sort();
        Ok(files)
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);

            if path.is_dir() {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file()
                && !self.ignores.is_ignored(relative, false)
                && self.include.is_match(relative)
            {
                files.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn discovers_family_files_and_skips_excluded_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("src/app.ts"));
        touch(&root.join("styles/main.css"));
        touch(&root.join("node_modules/lib/index.js"));
        touch(&root.join("dist/bundle.js"));
        touch(&root.join("README.md"));

        let walker =
            FileWalker::new(root.to_path_buf(), &[Family::Js, Family::Css], &[]).unwrap();
        let files = walker.discover().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names.len(), 2, "got {names:?}");
        assert!(names.iter().any(|n| n.ends_with("app.ts")));
        assert!(names.iter().any(|n| n.ends_with("main.css")));
    }

    #[test]
    fn discovery_is_sorted_and_repeatable() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("b.js"));
        touch(&root.join("a.js"));
        touch(&root.join("c/d.js"));

        let walker = FileWalker::new(root.to_path_buf(), &[Family::Js], &[]).unwrap();
        let first = walker.discover().unwrap();
        let second = walker.discover().unwrap();
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[test]
    fn missing_root_is_a_discovery_error() {
        let walker = FileWalker::new(
            PathBuf::from("/no/such/dir"),
            &[Family::Js],
            &[],
        )
        .unwrap();
        assert!(matches!(
            walker.discover(),
            Err(ScanError::Discovery(_))
        ));
    }
}
