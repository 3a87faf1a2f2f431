use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::request::AssetRequest;
use super::types::{AssetId, CachePolicy, LoadMode, Payload, UrlError};
use crate::imaging;
use crate::mimetype;
use crate::observability::Metrics;
use crate::store::{AssetStore, StoreError, ThumbnailSpec};

/// Load failures delivered to the caller.
///
/// Cancellation is deliberately absent: a stopped load delivers nothing.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] UrlError),

    #[error("a load is already in progress")]
    LoadInProgress,

    #[error("no asset matches identifier {0}")]
    AssetNotFound(AssetId),

    #[error("no mime type for format tag: {0}")]
    UnknownFormat(String),

    #[error("fetch failed: {0}")]
    FetchFailed(StoreError),

    #[error("thumbnail encoding failed: {0}")]
    ThumbnailEncode(image::ImageError),
}

/// Receives the single outcome of a load.
///
/// Callbacks run on the handler's worker task. Implementations that need a
/// particular execution context forward the event themselves; see
/// [`ChannelDelegate`] for the awaitable variant.
pub trait ResponseDelegate: Send + Sync {
    fn on_data(&self, payload: Payload);
    fn on_error(&self, error: SchemeError);
}

/// Outcome event produced by [`ChannelDelegate`].
#[derive(Debug)]
pub enum LoadEvent {
    Data(Payload),
    Error(SchemeError),
}

/// Adapter turning delegate callbacks into a single-shot channel.
pub struct ChannelDelegate {
    slot: Mutex<Option<oneshot::Sender<LoadEvent>>>,
}

impl ChannelDelegate {
    pub fn new() -> (Arc<Self>, oneshot::Receiver<LoadEvent>) {
        let (tx, rx) = oneshot::channel();
        let delegate = Arc::new(Self {
            slot: Mutex::new(Some(tx)),
        });
        (delegate, rx)
    }

    fn deliver(&self, event: LoadEvent) {
        let sender = self.slot.lock().ok().and_then(|mut slot| slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(event);
        }
    }
}

impl ResponseDelegate for ChannelDelegate {
    fn on_data(&self, payload: Payload) {
        self.deliver(LoadEvent::Data(payload));
    }

    fn on_error(&self, error: SchemeError) {
        self.deliver(LoadEvent::Error(error));
    }
}

/// Drives one asset load at a time against an injected store.
///
/// `start_load` spawns a worker task that resolves the identifier,
/// branches on load mode, and delivers exactly one callback; `stop_load`
/// cancels cooperatively. Shared state between the two is a single
/// liveness flag plus the task handle, so no locks are needed.
pub struct SchemeHandler {
    store: Arc<dyn AssetStore>,
    thumbnail: ThumbnailSpec,
    metrics: Arc<Metrics>,
    alive: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl SchemeHandler {
    pub fn new(
        store: Arc<dyn AssetStore>,
        thumbnail: ThumbnailSpec,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            store,
            thumbnail,
            metrics,
            alive: Arc::new(AtomicBool::new(true)),
            task: None,
        }
    }

    /// Starts loading `request` in the background.
    ///
    /// Malformed requests fail synchronously with an explicit error. While
    /// a load is outstanding further calls are refused, keeping at most
    /// one fetch in flight per handler.
    pub fn start_load(
        &mut self,
        request: &str,
        delegate: Arc<dyn ResponseDelegate>,
    ) -> Result<(), SchemeError> {
        if self.task.as_ref().is_some_and(|task| !task.is_finished()) {
            return Err(SchemeError::LoadInProgress);
        }

        let request = AssetRequest::parse(request)?;

        self.alive.store(true, Ordering::Release);
        self.metrics.load_started();
        debug!(id = %request.id(), mode = ?request.mode(), "Starting load");

        let store = self.store.clone();
        let spec = self.thumbnail;
        let alive = self.alive.clone();
        let metrics = self.metrics.clone();

        self.task = Some(tokio::spawn(async move {
            let outcome = fetch(store.as_ref(), spec, &request).await;

            // Cancellation wins over any late-arriving result.
            if !alive.load(Ordering::Acquire) {
                metrics.load_cancelled();
                debug!(id = %request.id(), "Load cancelled, result dropped");
                return;
            }

            match outcome {
                Ok(payload) => {
                    metrics.payload_delivered();
                    delegate.on_data(payload);
                }
                Err(error) => {
                    metrics.load_failed();
                    warn!(id = %request.id(), %error, "Load failed");
                    delegate.on_error(error);
                }
            }
        }));

        Ok(())
    }

    /// Requests cancellation of the outstanding load, if any.
    ///
    /// Clears the liveness flag and aborts the worker task without waiting
    /// for confirmation. Idempotent; after this call no delegate callback
    /// fires for the stopped load.
    pub fn stop_load(&mut self) {
        self.alive.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn fetch(
    store: &dyn AssetStore,
    spec: ThumbnailSpec,
    request: &AssetRequest,
) -> Result<Payload, SchemeError> {
    let asset = store
        .resolve(request.id())
        .await
        .map_err(|error| match error {
            StoreError::NotFound(id) => SchemeError::AssetNotFound(id),
            other => SchemeError::FetchFailed(other),
        })?;

    match request.mode() {
        LoadMode::Thumbnail => {
            let pixels = store
                .thumbnail(&asset, spec)
                .await
                .map_err(SchemeError::FetchFailed)?;
            let data = imaging::encode_png(&pixels).map_err(SchemeError::ThumbnailEncode)?;
            Ok(Payload {
                data,
                mime: mime::IMAGE_PNG,
                cache: CachePolicy::InMemoryOnly,
            })
        }
        LoadMode::Original => {
            let media = store
                .original(&asset)
                .await
                .map_err(SchemeError::FetchFailed)?;
            let mime = mimetype::mime_for_tag(&media.format)
                .ok_or_else(|| SchemeError::UnknownFormat(media.format.clone()))?;
            debug!(
                id = %request.id(),
                orientation = ?media.orientation,
                size = media.data.len(),
                "Serving original media"
            );
            Ok(Payload {
                data: media.data,
                mime,
                cache: CachePolicy::Allowed,
            })
        }
    }
}
