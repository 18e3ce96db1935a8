//! Marker visibility bands and horizon fade.
//!
//! Which markers are shown depends only on the camera's distance from the
//! globe center, in three discrete bands. Band membership is recomputed on
//! camera-control change events, not per frame. The horizon fade is a
//! separate per-frame opacity computed from the marker/camera dot product.

use serde::{Deserialize, Serialize};

use crate::vec::Vec3;

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Marker granularity: a country-level cluster or a single city.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Group,
    City,
}

/// A pin on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    /// Country the city belongs to. `None` for group markers.
    pub parent: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub kind: MarkerKind,
}

// ---------------------------------------------------------------------------
// Visibility bands
// ---------------------------------------------------------------------------

/// Camera-distance thresholds separating the three visibility bands.
#[derive(Debug, Copy, Clone)]
pub struct VisibilityThresholds {
    /// Beyond this distance nothing is shown.
    pub far: f64,
    /// Between `mid` and `far` only group markers are shown.
    pub mid: f64,
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            far: 10.0,
            mid: 3.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VisibilityBand {
    Hidden,
    Groups,
    Cities,
}

impl VisibilityBand {
    pub fn shows(self, kind: MarkerKind) -> bool {
        match self {
            VisibilityBand::Hidden => false,
            VisibilityBand::Groups => kind == MarkerKind::Group,
            VisibilityBand::Cities => kind == MarkerKind::City,
        }
    }
}

/// Band for a camera at `distance` from the globe center.
///
/// Comparisons are strict on the upper side: exactly `far` falls in the
/// groups band and exactly `mid` in the cities band. There is no hysteresis,
/// so a camera parked on a boundary can flicker between bands.
pub fn band_for_distance(distance: f64, thresholds: VisibilityThresholds) -> VisibilityBand {
    if distance > thresholds.far {
        VisibilityBand::Hidden
    } else if distance > thresholds.mid {
        VisibilityBand::Groups
    } else {
        VisibilityBand::Cities
    }
}

/// The subset of `markers` visible at the given camera distance.
pub fn visible_markers(
    markers: &[Marker],
    distance: f64,
    thresholds: VisibilityThresholds,
) -> Vec<&Marker> {
    let band = band_for_distance(distance, thresholds);
    markers.iter().filter(|m| band.shows(m.kind)).collect()
}

// ---------------------------------------------------------------------------
// Horizon fade
// ---------------------------------------------------------------------------

/// Dot-product window mapped onto opacity 0..1.
#[derive(Debug, Copy, Clone)]
pub struct FadeRamp {
    /// Dot product at or below which opacity is 0.
    pub min_dot: f64,
    /// Dot product at or above which opacity is 1.
    pub max_dot: f64,
}

impl Default for FadeRamp {
    fn default() -> Self {
        Self {
            min_dot: 0.5,
            max_dot: 0.6,
        }
    }
}

/// Per-frame marker opacity from the camera's view of the marker.
///
/// `marker_world` is the marker position after the globe's current rotation.
/// The dot product of the normalized marker and camera positions is mapped
/// linearly through the ramp and clamped to [0, 1], fading markers out as
/// they approach the horizon.
pub fn horizon_opacity(marker_world: Vec3, camera_pos: Vec3, ramp: FadeRamp) -> f64 {
    let dot = marker_world.normalize().dot(camera_pos.normalize());
    ((dot - ramp.min_dot) / (ramp.max_dot - ramp.min_dot)).clamp(0.0, 1.0)
}
