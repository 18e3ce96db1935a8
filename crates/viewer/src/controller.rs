//! Carousel fetch/cancel controller.
//!
//! Owns the carousel display state for one gallery (travel or build).
//! Selection changes cancel any in-flight fetch before issuing a new one,
//! so at most one request is outstanding at any time. A cancelled fetch
//! never touches the display state.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use meridian_core::gallery::{CarouselState, Gallery};

use crate::fetcher::{FetchError, GalleryFetcher};

/// Which endpoint a carousel is bound to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GallerySource {
    Travel,
    Build,
}

/// State machine driver for one carousel.
///
/// Subscribers observe [`CarouselState`] transitions through a watch
/// channel; a second channel pulses whenever a new selection should scroll
/// the viewport back to the gallery top. Cloning the controller clones a
/// handle to the same carousel.
#[derive(Clone)]
pub struct CarouselController {
    inner: Arc<Inner>,
}

struct Inner {
    fetcher: Arc<dyn GalleryFetcher>,
    source: GallerySource,
    state_tx: watch::Sender<CarouselState>,
    scroll_tx: watch::Sender<u64>,
    inflight: Mutex<Option<CancellationToken>>,
}

impl CarouselController {
    pub fn new(fetcher: Arc<dyn GalleryFetcher>, source: GallerySource) -> Self {
        let (state_tx, _) = watch::channel(CarouselState::Idle);
        let (scroll_tx, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                fetcher,
                source,
                state_tx,
                scroll_tx,
                inflight: Mutex::new(None),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.inner.state_tx.subscribe()
    }

    /// Pulse counter incremented on every new non-empty selection; consumers
    /// scroll the viewport to the gallery top when it changes.
    pub fn subscribe_scroll(&self) -> watch::Receiver<u64> {
        self.inner.scroll_tx.subscribe()
    }

    pub fn state(&self) -> CarouselState {
        self.inner.state_tx.borrow().clone()
    }

    /// Apply a selection change.
    ///
    /// `None` or an empty name returns the carousel to `Idle` without a
    /// request. Any other value cancels the in-flight fetch (if one exists),
    /// resets the active index via the upcoming `Ready` state, pulses the
    /// scroll channel, and starts a new fetch -- including when the same
    /// value is selected twice in a row.
    pub fn select(&self, selection: Option<&str>) {
        let mut inflight = self.inner.inflight.lock().expect("inflight lock poisoned");

        if let Some(token) = inflight.take() {
            token.cancel();
        }

        let Some(name) = selection.filter(|s| !s.is_empty()) else {
            self.inner.state_tx.send_replace(CarouselState::Idle);
            return;
        };

        self.inner.state_tx.send_replace(CarouselState::Loading);
        self.inner.scroll_tx.send_modify(|n| *n += 1);

        let token = CancellationToken::new();
        *inflight = Some(token.clone());
        drop(inflight);

        let inner = Arc::clone(&self.inner);
        let name = name.to_string();
        tokio::spawn(async move {
            inner.run_fetch(name, token).await;
        });
    }

    /// Follow one name channel of the selection hub (the location channel
    /// for a travel carousel, the build channel for a build carousel).
    ///
    /// Every change notification -- including reselecting the same value --
    /// is applied via [`select`](Self::select). The task ends when the
    /// sending hub is dropped.
    pub fn drive(&self, mut name_rx: watch::Receiver<String>) -> tokio::task::JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            while name_rx.changed().await.is_ok() {
                let name = name_rx.borrow_and_update().clone();
                controller.select(if name.is_empty() { None } else { Some(&name) });
            }
        })
    }

    /// Move the active slide, clamped to the gallery bounds. No-op unless
    /// the carousel is `Ready`.
    pub fn set_active_index(&self, index: usize) {
        self.inner.state_tx.send_if_modified(|state| {
            if let CarouselState::Ready {
                gallery,
                active_index,
            } = state
            {
                let clamped = index.min(gallery.len().saturating_sub(1));
                if *active_index != clamped {
                    *active_index = clamped;
                    return true;
                }
            }
            false
        });
    }
}

impl Inner {
    async fn run_fetch(&self, name: String, token: CancellationToken) {
        let result = tokio::select! {
            () = token.cancelled() => {
                // Cancellation is a silent no-op, never an error display.
                tracing::debug!(name = %name, "gallery fetch cancelled");
                return;
            }
            result = self.fetch(&name) => result,
        };

        // Publish under the inflight lock so a concurrent `select` cannot
        // interleave between the staleness check and the state write.
        let mut inflight = self.inflight.lock().expect("inflight lock poisoned");
        if token.is_cancelled() {
            return;
        }
        *inflight = None;

        match result {
            Ok(gallery) => {
                self.state_tx.send_replace(CarouselState::Ready {
                    gallery,
                    active_index: 0,
                });
            }
            Err(err) => {
                tracing::warn!(name = %name, error = %err, "gallery fetch failed");
                self.state_tx.send_replace(CarouselState::Error);
            }
        }
    }

    async fn fetch(&self, name: &str) -> Result<Gallery, FetchError> {
        match self.source {
            GallerySource::Travel => self
                .fetcher
                .fetch_travel(name)
                .await
                .map(|images| Gallery::from_images(images, None)),
            GallerySource::Build => self.fetcher.fetch_build(name).await.map(|build| {
                Gallery::from_images(build.images_data, Some(build.main_description))
            }),
        }
    }
}
