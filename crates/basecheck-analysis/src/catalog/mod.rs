//! Feature catalog: read-only feature metadata, loaded once at startup.

use basecheck_core::errors::CatalogError;
use basecheck_core::model::Feature;
use rustc_hash::FxHashMap;

/// The bundled feature dataset.
const BUNDLED_DATASET: &str = include_str!("../../data/features.json");

/// An immutable map from feature id to feature metadata.
///
/// Absence of an id is a valid, non-error outcome: the scanner skips tokens
/// whose feature is unknown, which lets the dataset evolve independently of
/// the token registry. The catalog is passed explicitly into the scanner so
/// tests can inject a fabricated one.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    features: FxHashMap<String, Feature>,
}

impl FeatureCatalog {
    /// Load the dataset bundled into the binary.
    /// A malformed bundle is a fatal startup error, not a per-scan error.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a catalog from a JSON array of features.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let list: Vec<Feature> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_features(list)
    }

    /// Build a catalog from already-decoded features (test fixtures).
    pub fn from_features(list: Vec<Feature>) -> Result<Self, CatalogError> {
        if list.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut features = FxHashMap::default();
        for feature in list {
            if features.contains_key(&feature.id) {
                return Err(CatalogError::DuplicateFeature(feature.id));
            }
            features.insert(feature.id.clone(), feature);
        }
        Ok(Self { features })
    }

    /// Look up a feature by id.
    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.get(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads() {
        let catalog = FeatureCatalog::bundled().unwrap();
        assert!(catalog.len() >= 20);
    }

    #[test]
    fn bundled_dataset_has_the_expected_ids() {
        let catalog = FeatureCatalog::bundled().unwrap();
        for id in ["async-clipboard", "promise-any", "has", "text-wrap"] {
            assert!(catalog.get(id).is_some(), "missing feature {id}");
        }
    }

    #[test]
    fn unknown_id_is_none_not_an_error() {
        let catalog = FeatureCatalog::bundled().unwrap();
        assert!(catalog.get("no-such-feature").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "x", "name": "X", "baseline": "widely",
             "support": {}, "group": "css", "docs_url": ""},
            {"id": "x", "name": "X again", "baseline": "widely",
             "support": {}, "group": "css", "docs_url": ""}
        ]"#;
        assert!(matches!(
            FeatureCatalog::from_json(json),
            Err(CatalogError::DuplicateFeature(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            FeatureCatalog::from_json("{not json"),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            FeatureCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }
}
