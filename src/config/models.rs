use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::{CropMode, ThumbnailSpec};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
}

/// Media library location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory holding the media objects and the catalog file
    #[serde(default = "default_library_root")]
    pub root: PathBuf,
    /// Catalog file name inside the library root
    #[serde(default = "default_catalog_name")]
    pub catalog: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: default_library_root(),
            catalog: default_catalog_name(),
        }
    }
}

fn default_library_root() -> PathBuf {
    PathBuf::from("media")
}

fn default_catalog_name() -> String {
    "library.json".to_string()
}

/// Thumbnail geometry
///
/// The square pixel edge is `points` multiplied by the display `scale`,
/// mirroring point-based sizing on high-density screens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThumbnailConfig {
    #[serde(default = "default_thumbnail_points")]
    pub points: u32,
    #[serde(default = "default_thumbnail_scale")]
    pub scale: f32,
}

impl ThumbnailConfig {
    /// Square edge in pixels.
    pub fn edge(&self) -> u32 {
        (self.points as f32 * self.scale).round() as u32
    }

    /// The fetch geometry handed to the asset store.
    pub fn spec(&self) -> ThumbnailSpec {
        ThumbnailSpec {
            edge: self.edge(),
            crop: CropMode::AspectFill,
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            points: default_thumbnail_points(),
            scale: default_thumbnail_scale(),
        }
    }
}

fn default_thumbnail_points() -> u32 {
    75
}

fn default_thumbnail_scale() -> f32 {
    2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.library.root, PathBuf::from("media"));
        assert_eq!(config.library.catalog, "library.json");
        assert_eq!(config.thumbnail.points, 75);
        assert_eq!(config.thumbnail.edge(), 150);
        assert_eq!(config.thumbnail.spec().crop, CropMode::AspectFill);
    }

    #[test]
    fn test_edge_rounds() {
        let thumbnail = ThumbnailConfig {
            points: 75,
            scale: 1.5,
        };
        assert_eq!(thumbnail.edge(), 113);
    }

    #[test]
    fn test_toml_deserialization() {
        let config: Config = toml::from_str(
            r#"
[library]
root = "/srv/media"

[thumbnail]
points = 50
scale = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.library.root, PathBuf::from("/srv/media"));
        assert_eq!(config.thumbnail.edge(), 150);
    }
}
