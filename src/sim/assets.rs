//! Hangman image store.
//!
//! ## Document format (`assets/images.json`):
//!   ```json
//!   { "images": { "0": ["row", "row", ...], "1": [...], ..., "10": [...] } }
//!   ```
//!
//! Keys are incorrect-guess counts written as strings. Each value is the
//! image's rows, top to bottom. The store is loaded once and never mutated.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AssetLoadError, GameError};

#[derive(Deserialize, Debug)]
struct AssetDocument {
    images: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct AssetStore {
    images: BTreeMap<usize, Vec<String>>,
}

impl AssetStore {
    /// Read and parse the asset document at `path`.
    pub fn load(path: &Path) -> Result<Self, AssetLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| AssetLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: AssetDocument = serde_json::from_str(&text).map_err(|source| AssetLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_document(doc)
    }

    #[cfg(test)]
    pub fn from_json(text: &str) -> Result<Self, AssetLoadError> {
        let doc: AssetDocument = serde_json::from_str(text).map_err(|source| AssetLoadError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        Self::from_document(doc)
    }

    fn from_document(doc: AssetDocument) -> Result<Self, AssetLoadError> {
        let mut images = BTreeMap::new();
        for (key, rows) in doc.images {
            let idx = key.trim().parse::<usize>().map_err(|_| AssetLoadError::BadKey(key.clone()))?;
            images.insert(idx, rows);
        }
        if images.is_empty() {
            return Err(AssetLoadError::Empty);
        }
        Ok(AssetStore { images })
    }

    /// Image rows for an incorrect-guess count.
    pub fn image(&self, incorrect: usize) -> Result<&[String], GameError> {
        self.images
            .get(&incorrect)
            .map(Vec::as_slice)
            .ok_or(GameError::AssetNotFound(incorrect))
    }

    /// Highest key present. Reaching it ends the game.
    pub fn max_key(&self) -> usize {
        self.images.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const THREE: &str = r#"{ "images": { "0": ["  "], "1": ["|"], "2": ["|", "O"] } }"#;

    #[test]
    fn parses_string_keys() {
        let store = AssetStore::from_json(THREE).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.max_key(), 2);
        assert_eq!(store.image(2).unwrap(), &["|".to_string(), "O".to_string()]);
    }

    #[test]
    fn keys_order_numerically_not_lexically() {
        let store = AssetStore::from_json(
            r#"{ "images": { "0": [], "2": [], "10": [], "9": [] } }"#,
        ).unwrap();
        assert_eq!(store.max_key(), 10);
    }

    #[test]
    fn missing_key_is_asset_not_found() {
        let store = AssetStore::from_json(THREE).unwrap();
        assert!(matches!(store.image(3), Err(GameError::AssetNotFound(3))));
    }

    #[test]
    fn non_numeric_key_is_rejected() {
        let err = AssetStore::from_json(r#"{ "images": { "zero": [] } }"#).unwrap_err();
        assert!(matches!(err, AssetLoadError::BadKey(k) if k == "zero"));
    }

    #[test]
    fn empty_images_is_rejected() {
        let err = AssetStore::from_json(r#"{ "images": {} }"#).unwrap_err();
        assert!(matches!(err, AssetLoadError::Empty));
    }

    #[test]
    fn missing_images_field_is_a_parse_error() {
        let err = AssetStore::from_json(r#"{ "pictures": {} }"#).unwrap_err();
        assert!(matches!(err, AssetLoadError::Parse { .. }));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(THREE.as_bytes()).unwrap();
        let store = AssetStore::load(file.path()).unwrap();
        assert_eq!(store.max_key(), 2);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssetStore::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AssetLoadError::Read { .. }));
    }

    #[test]
    fn shipped_assets_cover_every_count_up_to_the_last() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/images.json");
        let store = AssetStore::load(&path).unwrap();
        for k in 0..=store.max_key() {
            assert!(store.image(k).is_ok(), "missing image {k}");
        }
        assert_eq!(store.len(), store.max_key() + 1);
    }
}
