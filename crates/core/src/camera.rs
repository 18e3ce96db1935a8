//! Camera recentering animation.
//!
//! Double-clicking a marker recenters the camera on it: the camera moves to
//! a point on the line from the orbit target through the marker, at the
//! current orbit radius scaled by a zoom factor, interpolating there over a
//! fixed number of frames.

use crate::vec::Vec3;

/// Fraction of the current orbit radius kept after recentering.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.8;

/// Interpolation parameter increment per frame.
pub const DEFAULT_STEP: f64 = 0.04;

/// A per-frame interpolation of the camera toward a recenter target.
///
/// Each [`advance`](Self::advance) grows the interpolation parameter by the
/// step and lerps the camera toward the desired position with it, so the
/// path eases in: early frames move a little, later frames close most of the
/// remaining distance. The animation terminates on its own progress counter,
/// never on an external signal.
#[derive(Debug, Clone)]
pub struct RecenterAnimation {
    desired: Vec3,
    step: f64,
    t: f64,
}

impl RecenterAnimation {
    /// Start a recenter of the camera at `camera_pos` onto the marker at
    /// `marker_world`, orbiting `target` (the globe center).
    pub fn new(marker_world: Vec3, target: Vec3, camera_pos: Vec3) -> Self {
        Self::with_params(
            marker_world,
            target,
            camera_pos,
            DEFAULT_ZOOM_FACTOR,
            DEFAULT_STEP,
        )
    }

    pub fn with_params(
        marker_world: Vec3,
        target: Vec3,
        camera_pos: Vec3,
        zoom_factor: f64,
        step: f64,
    ) -> Self {
        let dir_to_marker = (marker_world - target).normalize();
        let radius = camera_pos.distance_to(target);
        let desired = dir_to_marker.scale(radius * zoom_factor) + target;

        Self {
            desired,
            step,
            t: 0.0,
        }
    }

    /// The camera position the animation converges to.
    pub fn desired_position(&self) -> Vec3 {
        self.desired
    }

    /// Advance one frame, returning the new camera position.
    pub fn advance(&mut self, camera_pos: Vec3) -> Vec3 {
        self.t = (self.t + self.step).min(1.0);
        camera_pos.lerp(self.desired, self.t)
    }

    /// True once the interpolation parameter has reached 1.
    pub fn is_finished(&self) -> bool {
        self.t >= 1.0
    }
}
