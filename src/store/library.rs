use async_trait::async_trait;
use bytes::Bytes;
use image::RgbaImage;
use object_store::{ObjectStore, path::Path as StorePath};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::catalog::{AssetRecord, Catalog};
use super::{AssetHandle, AssetStore, CropMode, OriginalMedia, StoreError, ThumbnailSpec};
use crate::imaging;
use crate::scheme::{AssetId, MediaKind};

/// Catalog-indexed media store over an `object_store` backend.
pub struct MediaLibrary {
    store: Arc<dyn ObjectStore>,
    index: BTreeMap<Uuid, AssetRecord>,
}

impl MediaLibrary {
    pub fn new(store: Arc<dyn ObjectStore>, catalog: Catalog) -> Self {
        Self {
            store,
            index: catalog.into_index(),
        }
    }

    /// Opens a library rooted at a local directory, reading the named
    /// catalog file from inside the root.
    pub async fn open(root: &Path, catalog_name: &str) -> Result<Self, StoreError> {
        let store: Arc<dyn ObjectStore> = Arc::new(
            object_store::local::LocalFileSystem::new_with_prefix(root)?,
        );
        let raw = read(store.as_ref(), catalog_name).await?;
        let catalog = Catalog::parse(&raw)?;
        debug!(
            root = %root.display(),
            assets = catalog.assets.len(),
            "Opened media library"
        );
        Ok(Self::new(store, catalog))
    }

    /// In-memory library for tests and development.
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new(Arc::new(object_store::memory::InMemory::new()), catalog)
    }

    /// Direct access to the backing store, mainly for seeding test data.
    pub fn backing_store(&self) -> Arc<dyn ObjectStore> {
        self.store.clone()
    }

    fn record(&self, id: &AssetId) -> Result<&AssetRecord, StoreError> {
        self.index
            .get(&id.uuid())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

async fn read(store: &dyn ObjectStore, key: &str) -> Result<Bytes, StoreError> {
    let result = store.get(&StorePath::from(key)).await?;
    Ok(result.bytes().await?)
}

#[async_trait]
impl AssetStore for MediaLibrary {
    async fn resolve(&self, id: &AssetId) -> Result<AssetHandle, StoreError> {
        let record = self.record(id)?;
        Ok(AssetHandle {
            id: id.clone(),
            kind: record.kind,
        })
    }

    async fn thumbnail(
        &self,
        asset: &AssetHandle,
        spec: ThumbnailSpec,
    ) -> Result<RgbaImage, StoreError> {
        let record = self.record(&asset.id)?;

        // Videos are thumbnailed from their poster frame; the library does
        // not transcode video streams.
        let source = match record.kind {
            MediaKind::Video => record.poster.as_deref().ok_or_else(|| {
                StoreError::ThumbnailUnavailable(format!(
                    "video {} has no poster frame",
                    record.id
                ))
            })?,
            _ => record.key.as_str(),
        };

        let raw = read(self.store.as_ref(), source).await?;
        let decoded = image::load_from_memory(&raw)?;
        debug!(id = %record.id, source, edge = spec.edge, "Rendering thumbnail");

        let pixels = match spec.crop {
            CropMode::AspectFill => imaging::aspect_fill(&decoded, spec.edge),
            CropMode::AspectFit => imaging::aspect_fit(&decoded, spec.edge),
        };
        Ok(pixels)
    }

    async fn original(&self, asset: &AssetHandle) -> Result<OriginalMedia, StoreError> {
        let record = self.record(&asset.id)?;
        let data = read(self.store.as_ref(), &record.key).await?;
        debug!(id = %record.id, size = data.len(), "Read original media");
        Ok(OriginalMedia {
            data,
            format: record.format.clone(),
            orientation: record.orientation,
        })
    }
}
