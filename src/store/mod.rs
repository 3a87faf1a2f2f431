//! Asset store abstraction and the catalog-backed local implementation.
//!
//! The scheme handler consumes stores through the [`AssetStore`] trait so
//! tests can substitute doubles. [`MediaLibrary`] is the shipped
//! implementation: an `object_store` backend indexed by a JSON catalog.

mod catalog;
mod library;

pub use catalog::{AssetRecord, Catalog, CatalogError, Orientation};
pub use library::MediaLibrary;

use async_trait::async_trait;
use bytes::Bytes;
use image::RgbaImage;
use thiserror::Error;

use crate::scheme::{AssetId, MediaKind};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no asset matches identifier {0}")]
    NotFound(AssetId),

    #[error("no thumbnail source: {0}")]
    ThumbnailUnavailable(String),

    #[error("backend read failed: {0}")]
    Backend(#[from] object_store::Error),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("catalog rejected: {0}")]
    Catalog(#[from] CatalogError),
}

/// How a thumbnail should meet its square target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Cover the full target, cropping whatever overflows.
    AspectFill,
    /// Fit inside the target, preserving the whole frame.
    AspectFit,
}

/// Target geometry for a thumbnail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSpec {
    /// Square edge in pixels.
    pub edge: u32,
    pub crop: CropMode,
}

/// Resolved reference to a stored asset.
#[derive(Debug, Clone)]
pub struct AssetHandle {
    pub id: AssetId,
    pub kind: MediaKind,
}

/// Original media bytes plus the metadata the store reports with them.
#[derive(Debug, Clone)]
pub struct OriginalMedia {
    pub data: Bytes,
    /// Opaque lowercase format tag, e.g. `jpeg` or `mov`.
    pub format: String,
    /// Reported alongside the bytes; the adapter forwards it untouched.
    pub orientation: Orientation,
}

/// Media store consumed by the scheme handler.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Resolves a local identifier to a stored asset.
    async fn resolve(&self, id: &AssetId) -> Result<AssetHandle, StoreError>;

    /// Produces preview pixels for the asset at the requested geometry.
    async fn thumbnail(
        &self,
        asset: &AssetHandle,
        spec: ThumbnailSpec,
    ) -> Result<RgbaImage, StoreError>;

    /// Returns the stored bytes together with their format tag.
    async fn original(&self, asset: &AssetHandle) -> Result<OriginalMedia, StoreError>;
}
