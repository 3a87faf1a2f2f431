use url::Url;

use super::types::{AssetId, LoadMode, Param, UrlError};
use super::{SCHEME, THUMBNAIL_FRAGMENT};

impl Param {
    /// First query item with this name, percent-decoded.
    fn find(self, url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(name, _)| name == self.as_str())
            .map(|(_, value)| value.into_owned())
    }
}

/// Returns true iff the request's scheme component equals [`SCHEME`].
///
/// The comparison is byte-exact, so case variants count as foreign schemes.
pub fn can_handle(request: &str) -> bool {
    match request.split_once(':') {
        Some((scheme, _)) => scheme == SCHEME,
        None => false,
    }
}

/// A request against the asset scheme, parsed and validated.
#[derive(Debug, Clone)]
pub struct AssetRequest {
    id: AssetId,
    ext: Option<String>,
    mode: LoadMode,
}

impl AssetRequest {
    /// Parses a raw URL string into an asset request.
    ///
    /// Requests with a foreign scheme, a missing `id` parameter, or an
    /// identifier that does not start with a UUID are rejected with a
    /// descriptive error.
    pub fn parse(request: &str) -> Result<Self, UrlError> {
        if !can_handle(request) {
            let scheme = request.split(':').next().unwrap_or(request);
            return Err(UrlError::UnsupportedScheme(scheme.to_string()));
        }

        let url = Url::parse(request)?;

        let id = Param::Id
            .find(&url)
            .ok_or(UrlError::MissingParameter(Param::Id))?;
        let id = AssetId::new(id)?;

        let mode = if url.fragment() == Some(THUMBNAIL_FRAGMENT) {
            LoadMode::Thumbnail
        } else {
            LoadMode::Original
        };

        Ok(Self {
            id,
            ext: Param::Ext.find(&url),
            mode,
        })
    }

    pub fn id(&self) -> &AssetId {
        &self.id
    }

    /// Extension hint from the `ext` parameter. Debug readability only;
    /// the catalog decides the actual format.
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }
}
