//! Globe frame-loop glue.
//!
//! [`GlobeRig`] owns the per-scene interaction state: marker positions on
//! the sphere, the visibility band, per-marker click arbitration, the
//! camera, and an optional recentering animation. The host render loop
//! feeds it control-change events, clicks, and frames; it hands back
//! selection updates to apply to the [`SelectionHub`].

use std::time::Duration;

use meridian_core::camera::RecenterAnimation;
use meridian_core::geo::lat_lng_to_point;
use meridian_core::interaction::{resolve_action, ClickArbiter, ClickResolution, MarkerAction};
use meridian_core::markers::{
    band_for_distance, horizon_opacity, FadeRamp, Marker, VisibilityBand, VisibilityThresholds,
};
use meridian_core::vec::Vec3;

use crate::selection::{GlobeSettings, SelectionHub};

/// Sphere radius the markers sit on.
pub const EARTH_RADIUS: f64 = 1.5;

/// Y-rotation applied per frame while auto-rotation is enabled.
pub const ROTATION_STEP: f64 = 0.002;

/// Orbit rotate speed for the camera's current distance: crawl when very
/// close, full speed when far, mapped linearly in between so zooming in
/// does not send the globe spinning past its target.
pub fn rotate_speed_for_distance(distance: f64) -> f64 {
    const CLOSE_DISTANCE: f64 = 1.6;
    const FAR_DISTANCE: f64 = 5.0;
    const CLOSE_SPEED: f64 = 0.08;
    const FAR_SPEED: f64 = 0.8;

    if distance < 1.7 {
        0.03
    } else if distance > FAR_DISTANCE {
        FAR_SPEED
    } else {
        let t = (distance - CLOSE_DISTANCE) / (FAR_DISTANCE - CLOSE_DISTANCE);
        (CLOSE_SPEED + t * (FAR_SPEED - CLOSE_SPEED)).clamp(CLOSE_SPEED, FAR_SPEED)
    }
}

/// A confirmed single click on a city marker: update the shared selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionUpdate {
    pub location: String,
    pub country: Option<String>,
}

impl SelectionUpdate {
    /// Apply to the hub: location first, then the parent country when the
    /// marker data named one.
    pub fn apply(&self, hub: &SelectionHub) {
        hub.update_location(&self.location);
        if let Some(country) = &self.country {
            hub.update_country(country);
        }
    }
}

/// Interaction state for one globe scene.
pub struct GlobeRig {
    markers: Vec<Marker>,
    local_positions: Vec<Vec3>,
    arbiters: Vec<ClickArbiter>,
    thresholds: VisibilityThresholds,
    fade: FadeRamp,
    target: Vec3,
    camera_pos: Vec3,
    rotation: f64,
    band: VisibilityBand,
    recenter: Option<RecenterAnimation>,
    clock: Duration,
}

impl GlobeRig {
    /// Create a rig with the camera at `camera_pos` orbiting the origin.
    /// The visibility band is initialized from the starting distance.
    pub fn new(markers: Vec<Marker>, camera_pos: Vec3) -> Self {
        let thresholds = VisibilityThresholds::default();
        let local_positions = markers
            .iter()
            .map(|m| lat_lng_to_point(m.lat, m.lng, EARTH_RADIUS))
            .collect();
        let arbiters = vec![ClickArbiter::new(); markers.len()];
        let band = band_for_distance(camera_pos.length(), thresholds);

        Self {
            markers,
            local_positions,
            arbiters,
            thresholds,
            fade: FadeRamp::default(),
            target: Vec3::ZERO,
            camera_pos,
            rotation: 0.0,
            band,
            recenter: None,
            clock: Duration::ZERO,
        }
    }

    /// Override the visibility thresholds (the 3/10 defaults are tuned for
    /// the stock camera limits).
    pub fn with_thresholds(mut self, thresholds: VisibilityThresholds) -> Self {
        self.thresholds = thresholds;
        self.band = band_for_distance(self.camera_distance(), thresholds);
        self
    }

    /// Override the horizon fade ramp.
    pub fn with_fade(mut self, fade: FadeRamp) -> Self {
        self.fade = fade;
        self
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_pos
    }

    pub fn camera_distance(&self) -> f64 {
        self.camera_pos.distance_to(self.target)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn band(&self) -> VisibilityBand {
        self.band
    }

    pub fn is_recentering(&self) -> bool {
        self.recenter.is_some()
    }

    /// Orbit-controls change event (user drag/zoom): adopt the new camera
    /// position and recompute the visibility band. Bands are deliberately
    /// not recomputed per frame; this event is the only user-driven trigger.
    pub fn on_controls_changed(&mut self, camera_pos: Vec3) {
        self.camera_pos = camera_pos;
        self.recompute_band();
    }

    fn recompute_band(&mut self) {
        self.band = band_for_distance(self.camera_distance(), self.thresholds);
    }

    /// Markers visible in the current band, with their indices. Empty when
    /// the hide-markers toggle is set.
    pub fn visible_markers(&self, settings: &GlobeSettings) -> Vec<(usize, &Marker)> {
        if settings.hide_markers {
            return Vec::new();
        }
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, m)| self.band.shows(m.kind))
            .collect()
    }

    /// World-space position of a marker under the globe's current rotation.
    pub fn marker_world_position(&self, index: usize) -> Vec3 {
        self.local_positions[index].rotate_y(self.rotation)
    }

    /// Per-frame horizon fade opacity for a marker.
    pub fn marker_opacity(&self, index: usize) -> f64 {
        horizon_opacity(self.marker_world_position(index), self.camera_pos, self.fade)
    }

    /// A click on marker `index` at the rig's current clock.
    ///
    /// Returns a selection update only when the click resolves immediately
    /// (a stale single click flushed by a late second click); double clicks
    /// start the recenter animation internally.
    pub fn on_click(&mut self, index: usize) -> Option<SelectionUpdate> {
        let resolution = self.arbiters[index].on_click(self.clock)?;
        self.dispatch(index, resolution)
    }

    /// Advance one frame: the clock, auto-rotation, the recenter animation,
    /// and pending click windows. Returns selection updates from single
    /// clicks whose double-click window expired this frame.
    pub fn frame(&mut self, dt: Duration, settings: &GlobeSettings) -> Vec<SelectionUpdate> {
        self.clock += dt;

        if settings.rotate {
            self.rotation += ROTATION_STEP;
        }

        if let Some(mut anim) = self.recenter.take() {
            self.camera_pos = anim.advance(self.camera_pos);
            // Moving the camera counts as a controls update, so the band
            // follows the recenter zoom the same way it follows user zoom.
            self.recompute_band();
            if !anim.is_finished() {
                self.recenter = Some(anim);
            }
        }

        let mut updates = Vec::new();
        for index in 0..self.arbiters.len() {
            if let Some(resolution) = self.arbiters[index].poll(self.clock) {
                if let Some(update) = self.dispatch(index, resolution) {
                    updates.push(update);
                }
            }
        }
        updates
    }

    fn dispatch(&mut self, index: usize, resolution: ClickResolution) -> Option<SelectionUpdate> {
        match resolve_action(&self.markers[index], resolution)? {
            MarkerAction::Recenter => {
                self.recenter = Some(RecenterAnimation::new(
                    self.marker_world_position(index),
                    self.target,
                    self.camera_pos,
                ));
                None
            }
            MarkerAction::Select { location, country } => {
                Some(SelectionUpdate { location, country })
            }
        }
    }
}
