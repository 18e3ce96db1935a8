//! Click / double-click arbitration for globe markers.
//!
//! A click on a marker cannot be acted on immediately: a second click within
//! the double-click window must suppress the single-click action. Each
//! marker owns a small two-state machine (`Idle` -> armed) driven by an
//! explicit monotonic timeline, so the arbitration is deterministic and
//! testable without real timers.

use std::time::Duration;

use crate::markers::{Marker, MarkerKind};

/// Window within which a second click counts as a double click.
pub const DOUBLE_CLICK_DELAY: Duration = Duration::from_millis(300);

/// How a click sequence on one marker resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickResolution {
    /// The window expired with no second click.
    Single,
    /// A second click arrived inside the window.
    Double,
}

/// What a resolved click does.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerAction {
    /// Recenter the camera on the marker.
    Recenter,
    /// Update the shared travel selection.
    Select {
        location: String,
        country: Option<String>,
    },
}

/// Per-marker click arbitration state machine.
///
/// `now` is any monotonic timeline (time since scene start). Callers feed
/// clicks through [`on_click`](Self::on_click) and poll once per frame with
/// [`poll`](Self::poll) to let armed single clicks expire.
#[derive(Debug, Clone)]
pub struct ClickArbiter {
    delay: Duration,
    armed_at: Option<Duration>,
}

impl Default for ClickArbiter {
    fn default() -> Self {
        Self::with_delay(DOUBLE_CLICK_DELAY)
    }
}

impl ClickArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    /// Feed a click at `now`.
    ///
    /// A click while armed and inside the window resolves as a double click.
    /// A click while armed but past the window resolves the stale single
    /// click (the frame loop has not polled yet) and arms the new one.
    pub fn on_click(&mut self, now: Duration) -> Option<ClickResolution> {
        match self.armed_at.take() {
            Some(armed) if now.saturating_sub(armed) < self.delay => {
                Some(ClickResolution::Double)
            }
            Some(_) => {
                self.armed_at = Some(now);
                Some(ClickResolution::Single)
            }
            None => {
                self.armed_at = Some(now);
                None
            }
        }
    }

    /// Resolve an armed single click whose window has expired.
    pub fn poll(&mut self, now: Duration) -> Option<ClickResolution> {
        match self.armed_at {
            Some(armed) if now.saturating_sub(armed) >= self.delay => {
                self.armed_at = None;
                Some(ClickResolution::Single)
            }
            _ => None,
        }
    }
}

/// Map a resolved click on `marker` to its action.
///
/// Double clicks recenter regardless of kind. A confirmed single click
/// updates the selection for city markers and does nothing for group
/// markers (their only action is the double-click zoom).
pub fn resolve_action(marker: &Marker, resolution: ClickResolution) -> Option<MarkerAction> {
    match (resolution, marker.kind) {
        (ClickResolution::Double, _) => Some(MarkerAction::Recenter),
        (ClickResolution::Single, MarkerKind::City) => Some(MarkerAction::Select {
            location: marker.name.clone(),
            country: marker.parent.clone(),
        }),
        (ClickResolution::Single, MarkerKind::Group) => None,
    }
}
