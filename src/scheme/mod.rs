//! The `assets-library` URL scheme adapter
//!
//! This module recognizes, parses, and synthesizes scheme URLs and drives
//! asynchronous loads against an injected asset store.
//!
//! ## Key Components
//!
//! - [`can_handle`] - Scheme recognition (exact match, pure)
//! - [`AssetRequest`] - Parsed and validated request
//! - [`asset_url`] - URL synthesis from identifier + media kind
//! - [`SchemeHandler`] - One-load-at-a-time driver with cancellation
//! - [`ResponseDelegate`] / [`ChannelDelegate`] - Completion delivery
//!
//! ## Example
//!
//! ```rust,ignore
//! use assetbridge::scheme::{ChannelDelegate, SchemeHandler};
//!
//! let mut handler = SchemeHandler::new(store, thumbnail, metrics);
//! let (delegate, result) = ChannelDelegate::new();
//! handler.start_load(url, delegate)?;
//! let event = result.await?;
//! ```

mod builder;
mod handler;
mod request;
mod types;

/// Fixed scheme literal recognized by the handler.
pub const SCHEME: &str = "assets-library";
/// Fixed host used in synthesized URLs.
pub const HOST: &str = "asset";
/// Fragment selecting thumbnail mode instead of full-asset mode.
pub const THUMBNAIL_FRAGMENT: &str = "thumbnail";

pub use builder::asset_url;
pub use handler::{
    ChannelDelegate, LoadEvent, ResponseDelegate, SchemeError, SchemeHandler,
};
pub use request::{AssetRequest, can_handle};
pub use types::{AssetId, CachePolicy, LoadMode, MediaKind, Param, Payload, UrlError};
