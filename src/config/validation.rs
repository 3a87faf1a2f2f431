use super::models::Config;
use thiserror::Error;

/// Upper bound on the thumbnail pixel edge; targets beyond this are
/// certainly misconfiguration, not previews.
const MAX_THUMBNAIL_EDGE: u32 = 4096;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Thumbnail scale must be positive and finite: {scale}")]
    InvalidThumbnailScale { scale: f32 },

    #[error("Thumbnail points must be positive")]
    InvalidThumbnailPoints,

    #[error("Thumbnail edge ({edge}) exceeds limit of {limit} pixels")]
    ThumbnailEdgeExceedsLimit { edge: u32, limit: u32 },

    #[error("Library catalog file name must not be empty")]
    EmptyCatalogName,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_thumbnail(config)?;
    validate_library(config)?;
    Ok(())
}

fn validate_thumbnail(config: &Config) -> Result<(), ValidationError> {
    let thumbnail = &config.thumbnail;

    if !thumbnail.scale.is_finite() || thumbnail.scale <= 0.0 {
        return Err(ValidationError::InvalidThumbnailScale {
            scale: thumbnail.scale,
        });
    }

    if thumbnail.points == 0 {
        return Err(ValidationError::InvalidThumbnailPoints);
    }

    if thumbnail.edge() > MAX_THUMBNAIL_EDGE {
        return Err(ValidationError::ThumbnailEdgeExceedsLimit {
            edge: thumbnail.edge(),
            limit: MAX_THUMBNAIL_EDGE,
        });
    }

    Ok(())
}

fn validate_library(config: &Config) -> Result<(), ValidationError> {
    if config.library.catalog.is_empty() {
        return Err(ValidationError::EmptyCatalogName);
    }

    Ok(())
}
