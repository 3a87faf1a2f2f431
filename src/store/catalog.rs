use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::scheme::MediaKind;

pub const CATALOG_VERSION: &str = "v1";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unsupported catalog version: {0}")]
    UnsupportedVersion(String),
    #[error("duplicate asset identifier: {0}")]
    DuplicateId(Uuid),
    #[error("asset {0} has an empty object key")]
    EmptyKey(Uuid),
    #[error("catalog is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Display orientation recorded for an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// One indexed media item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetRecord {
    pub id: Uuid,
    /// Object key of the media bytes in the backing store.
    pub key: String,
    pub kind: MediaKind,
    /// Lowercase format tag, e.g. `jpeg` or `mov`.
    pub format: String,
    #[serde(default)]
    pub orientation: Orientation,
    /// Pre-extracted still frame used to thumbnail videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
}

/// The index document of a media library.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
    pub version: String,
    pub assets: Vec<AssetRecord>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn parse(bytes: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion(self.version.clone()));
        }

        let mut seen = HashSet::new();
        for record in &self.assets {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.key.is_empty() {
                return Err(CatalogError::EmptyKey(record.id));
            }
        }

        Ok(())
    }

    pub(crate) fn into_index(self) -> BTreeMap<Uuid, AssetRecord> {
        self.assets
            .into_iter()
            .map(|record| (record.id, record))
            .collect()
    }
}
