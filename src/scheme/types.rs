use bytes::Bytes;
use mime::Mime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Leading portion of a local identifier that must parse as a UUID.
const UUID_PREFIX_LEN: usize = 36;

/// Recognized query parameters of the asset scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Id,
    Ext,
}

impl Param {
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Id => "id",
            Param::Ext => "ext",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("missing query parameter `{0}`")]
    MissingParameter(Param),
    #[error("identifier does not start with a uuid: {0}")]
    InvalidIdentifier(String),
    #[error("unsupported media kind: {0}")]
    UnsupportedKind(MediaKind),
    #[error("malformed url: {0}")]
    Parse(#[from] url::ParseError),
}

/// Opaque local identifier of a media item.
///
/// The first 36 characters must form a UUID; stores may append a
/// backend-specific suffix (e.g. `.../L0/001`) which is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId {
    raw: String,
    uuid: Uuid,
}

impl AssetId {
    pub fn new(identifier: impl Into<String>) -> Result<Self, UrlError> {
        let raw = identifier.into();
        let prefix = raw
            .get(..UUID_PREFIX_LEN)
            .ok_or_else(|| UrlError::InvalidIdentifier(raw.clone()))?;
        let uuid = Uuid::parse_str(prefix)
            .map_err(|_| UrlError::InvalidIdentifier(raw.clone()))?;
        Ok(Self { raw, uuid })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Canonical uppercase-hyphenated form of the UUID prefix.
    pub fn canonical(&self) -> String {
        let mut buf = Uuid::encode_buffer();
        self.uuid.hyphenated().encode_upper(&mut buf).to_string()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Media kind tag carried next to an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Unknown,
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Path extension used when synthesizing URLs for this kind.
    ///
    /// Only images and videos are addressable through the scheme; other
    /// kinds are refused rather than aborting.
    pub fn extension(self) -> Result<&'static str, UrlError> {
        match self {
            MediaKind::Image => Ok("JPG"),
            MediaKind::Video => Ok("MOV"),
            other => Err(UrlError::UnsupportedKind(other)),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Unknown => "unknown",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        };
        f.write_str(name)
    }
}

/// Whether a request addresses the original bytes or a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Original,
    Thumbnail,
}

/// Hint to the caller about persisting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// May be written to a disk cache.
    Allowed,
    /// Hold in memory only; do not persist.
    InMemoryOnly,
}

/// Completed load result handed to the response delegate.
#[derive(Debug, Clone)]
pub struct Payload {
    pub data: Bytes,
    pub mime: Mime,
    pub cache: CachePolicy,
}
