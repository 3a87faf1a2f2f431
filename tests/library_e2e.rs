//! End-to-end tests for the full flow: catalog, URL synthesis, handler,
//! payload — against an in-memory media library.

use std::sync::Arc;

use bytes::Bytes;
use image::RgbaImage;
use object_store::path::Path as StorePath;

use assetbridge::config::Config;
use assetbridge::imaging;
use assetbridge::observability::Metrics;
use assetbridge::scheme::{
    self, CachePolicy, ChannelDelegate, LoadEvent, MediaKind, SchemeHandler,
    THUMBNAIL_FRAGMENT,
};
use assetbridge::store::{AssetRecord, Catalog, MediaLibrary, Orientation};

const IMAGE_ID: &str = "9a1e3f90-2d47-4c9b-8f0a-111213141516";
const VIDEO_ID: &str = "7b2f4e81-1c36-4b8a-9e1b-212223242526";

fn catalog() -> Catalog {
    Catalog {
        version: "v1".to_string(),
        assets: vec![
            AssetRecord {
                id: IMAGE_ID.parse().unwrap(),
                key: "photos/sunset.png".to_string(),
                kind: MediaKind::Image,
                format: "png".to_string(),
                orientation: Orientation::default(),
                poster: None,
                created_at: None,
            },
            AssetRecord {
                id: VIDEO_ID.parse().unwrap(),
                key: "videos/clip.mov".to_string(),
                kind: MediaKind::Video,
                format: "mov".to_string(),
                orientation: Orientation::default(),
                poster: Some("videos/clip.poster.png".to_string()),
                created_at: None,
            },
        ],
    }
}

fn png_fixture(width: u32, height: u32) -> Bytes {
    let pixels = RgbaImage::from_pixel(width, height, image::Rgba([12, 90, 160, 255]));
    imaging::encode_png(&pixels).unwrap()
}

async fn seeded_library() -> MediaLibrary {
    let library = MediaLibrary::in_memory(catalog());
    let store = library.backing_store();
    store
        .put(
            &StorePath::from("photos/sunset.png"),
            png_fixture(120, 80).into(),
        )
        .await
        .unwrap();
    store
        .put(
            &StorePath::from("videos/clip.mov"),
            Bytes::from_static(b"mov payload").into(),
        )
        .await
        .unwrap();
    store
        .put(
            &StorePath::from("videos/clip.poster.png"),
            png_fixture(64, 64).into(),
        )
        .await
        .unwrap();
    library
}

async fn load(url: &str) -> LoadEvent {
    let library = seeded_library().await;
    let mut handler = SchemeHandler::new(
        Arc::new(library),
        Config::default().thumbnail.spec(),
        Arc::new(Metrics::new()),
    );

    let (delegate, result) = ChannelDelegate::new();
    handler.start_load(url, delegate).unwrap();
    result.await.unwrap()
}

#[tokio::test]
async fn image_thumbnail_end_to_end() {
    let mut url = scheme::asset_url(IMAGE_ID, MediaKind::Image).unwrap();
    url.set_fragment(Some(THUMBNAIL_FRAGMENT));
    assert!(scheme::can_handle(url.as_str()));

    let payload = match load(url.as_str()).await {
        LoadEvent::Data(payload) => payload,
        LoadEvent::Error(error) => panic!("unexpected error: {error}"),
    };

    assert_eq!(payload.mime, mime::IMAGE_PNG);
    assert_eq!(payload.cache, CachePolicy::InMemoryOnly);

    // Default geometry is 75pt at 2x: a 150px square regardless of the
    // source aspect ratio.
    let decoded = image::load_from_memory(&payload.data).unwrap();
    assert_eq!(decoded.to_rgba8().dimensions(), (150, 150));
}

#[tokio::test]
async fn image_original_end_to_end() {
    let url = scheme::asset_url(IMAGE_ID, MediaKind::Image).unwrap();

    let payload = match load(url.as_str()).await {
        LoadEvent::Data(payload) => payload,
        LoadEvent::Error(error) => panic!("unexpected error: {error}"),
    };

    assert_eq!(payload.mime, mime::IMAGE_PNG);
    assert_eq!(payload.cache, CachePolicy::Allowed);
    assert_eq!(payload.data, png_fixture(120, 80));
}

#[tokio::test]
async fn video_original_end_to_end() {
    let url = scheme::asset_url(VIDEO_ID, MediaKind::Video).unwrap();

    let payload = match load(url.as_str()).await {
        LoadEvent::Data(payload) => payload,
        LoadEvent::Error(error) => panic!("unexpected error: {error}"),
    };

    assert_eq!(payload.mime.to_string(), "video/quicktime");
    assert_eq!(payload.cache, CachePolicy::Allowed);
    assert_eq!(&payload.data[..], b"mov payload");
}

#[tokio::test]
async fn video_thumbnail_uses_poster_frame() {
    let mut url = scheme::asset_url(VIDEO_ID, MediaKind::Video).unwrap();
    url.set_fragment(Some(THUMBNAIL_FRAGMENT));

    let payload = match load(url.as_str()).await {
        LoadEvent::Data(payload) => payload,
        LoadEvent::Error(error) => panic!("unexpected error: {error}"),
    };

    assert_eq!(payload.mime, mime::IMAGE_PNG);
    let decoded = image::load_from_memory(&payload.data).unwrap();
    assert_eq!(decoded.to_rgba8().dimensions(), (150, 150));
}

#[tokio::test]
async fn unknown_identifier_end_to_end() {
    let url = scheme::asset_url("00000000-0000-4000-8000-000000000000", MediaKind::Image)
        .unwrap();

    match load(url.as_str()).await {
        LoadEvent::Error(error) => {
            assert!(matches!(error, assetbridge::scheme::SchemeError::AssetNotFound(_)));
        }
        LoadEvent::Data(_) => panic!("expected an error"),
    }
}
