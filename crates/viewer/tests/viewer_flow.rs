//! End-to-end viewer flow: a click on a globe marker updates the shared
//! selection, which drives the carousel through loading to ready.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use meridian_core::gallery::{BuildGallery, CarouselState, GalleryImage};
use meridian_core::markers::{Marker, MarkerKind};
use meridian_core::vec::Vec3;
use meridian_viewer::controller::{CarouselController, GallerySource};
use meridian_viewer::fetcher::{FetchError, GalleryFetcher};
use meridian_viewer::globe::GlobeRig;
use meridian_viewer::selection::{GlobeSettings, SelectionHub};

const FRAME: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn markers() -> Vec<Marker> {
    vec![
        Marker {
            name: "Italy".to_string(),
            parent: None,
            lat: 41.9,
            lng: 12.5,
            kind: MarkerKind::Group,
        },
        Marker {
            name: "Venice".to_string(),
            parent: Some("Italy".to_string()),
            lat: 45.44,
            lng: 12.33,
            kind: MarkerKind::City,
        },
    ]
}

struct RecordingFetcher {
    calls: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GalleryFetcher for RecordingFetcher {
    async fn fetch_travel(&self, location: &str) -> Result<Vec<GalleryImage>, FetchError> {
        self.calls.lock().unwrap().push(location.to_string());
        Ok(vec![GalleryImage {
            order_index: 1,
            description: format!("{location} canal"),
            large_image: format!("https://img.test/{location}/large/1"),
            thumbnail_image: format!("https://img.test/{location}/thumb/1"),
        }])
    }

    async fn fetch_build(&self, build: &str) -> Result<BuildGallery, FetchError> {
        self.calls.lock().unwrap().push(build.to_string());
        Ok(BuildGallery {
            main_description: format!("About {build}"),
            images_data: Vec::new(),
        })
    }
}

async fn wait_for_ready(rx: &mut tokio::sync::watch::Receiver<CarouselState>) {
    loop {
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        match state {
            CarouselState::Ready { .. } => return,
            CarouselState::Error => panic!("unexpected error state"),
            _ => continue,
        }
    }
}

// ---------------------------------------------------------------------------
// Test: marker click -> selection hub -> carousel fetch
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn city_click_flows_through_hub_into_carousel() {
    let hub = SelectionHub::new(&markers(), Vec::new());
    let fetcher = RecordingFetcher::new();
    let controller = CarouselController::new(fetcher.clone(), GallerySource::Travel);
    let mut state_rx = controller.subscribe();
    let _driver = controller.drive(hub.subscribe_location());

    // Zoomed in far enough that city markers are interactive.
    let mut rig = GlobeRig::new(markers(), Vec3::new(0.0, 0.0, 2.0));
    let settings = GlobeSettings::default();

    // One click on Venice, then frames past the double-click window.
    assert_eq!(rig.on_click(1), None);
    let mut updates = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed < Duration::from_millis(350) {
        updates.extend(rig.frame(FRAME, &settings));
        elapsed += FRAME;
    }

    assert_eq!(updates.len(), 1);
    updates[0].apply(&hub);
    assert_eq!(hub.selection().location, "Venice");
    assert_eq!(hub.selection().country, "Italy");

    wait_for_ready(&mut state_rx).await;
    assert_eq!(fetcher.calls(), vec!["Venice"]);

    match controller.state() {
        CarouselState::Ready {
            gallery,
            active_index,
        } => {
            assert_eq!(active_index, 0);
            assert_eq!(gallery.descriptions, vec!["Venice canal"]);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: clearing the selection idles the carousel without a fetch
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn clearing_selection_through_hub_idles_carousel() {
    let hub = SelectionHub::new(&markers(), Vec::new());
    let fetcher = RecordingFetcher::new();
    let controller = CarouselController::new(fetcher.clone(), GallerySource::Travel);
    let mut state_rx = controller.subscribe();
    let _driver = controller.drive(hub.subscribe_location());

    hub.update_location("Venice");
    wait_for_ready(&mut state_rx).await;

    // An unknown name clears the selection; the carousel must go idle and
    // no second fetch may be issued.
    hub.update_location("Atlantis");
    loop {
        state_rx.changed().await.unwrap();
        let state = state_rx.borrow_and_update().clone();
        if state == CarouselState::Idle {
            break;
        }
    }

    assert_eq!(fetcher.calls(), vec!["Venice"]);
}
