use url::Url;

use super::types::{AssetId, MediaKind, Param, UrlError};
use super::{HOST, SCHEME};

/// Synthesizes a scheme URL addressing the given local identifier.
///
/// The identifier's leading 36 characters must form a UUID, which is
/// emitted in canonical uppercase form. Deterministic and free of I/O.
pub fn asset_url(identifier: &str, kind: MediaKind) -> Result<Url, UrlError> {
    let id = AssetId::new(identifier)?;
    let ext = kind.extension()?;

    let mut url = Url::parse(&format!("{SCHEME}://{HOST}/asset.{ext}"))?;
    url.query_pairs_mut()
        .append_pair(Param::Id.as_str(), &id.canonical())
        .append_pair(Param::Ext.as_str(), ext);

    Ok(url)
}
