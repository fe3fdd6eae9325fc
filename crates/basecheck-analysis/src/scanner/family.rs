//! Language family detection from file extension.

use std::path::Path;

/// The two scanned language families, each with its own token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Js,
    Css,
}

impl Family {
    /// Detect the family from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<Family> {
        match ext? {
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => Some(Family::Js),
            "css" | "scss" | "sass" => Some(Family::Css),
            _ => None,
        }
    }

    /// Detect the family from a path.
    pub fn from_path(path: &Path) -> Option<Family> {
        Self::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    /// Returns all file extensions associated with this family.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Family::Js => &["js", "jsx", "ts", "tsx", "mjs", "cjs"],
            Family::Css => &["css", "scss", "sass"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_js_family() {
        for ext in ["js", "jsx", "ts", "tsx", "mjs", "cjs"] {
            assert_eq!(Family::from_extension(Some(ext)), Some(Family::Js));
        }
    }

    #[test]
    fn detects_css_family() {
        for ext in ["css", "scss", "sass"] {
            assert_eq!(Family::from_extension(Some(ext)), Some(Family::Css));
        }
    }

    #[test]
    fn other_extensions_are_skipped() {
        assert_eq!(Family::from_extension(Some("html")), None);
        assert_eq!(Family::from_extension(None), None);
        assert_eq!(Family::from_path(Path::new("README.md")), None);
    }
}
