//! Geodesic to Cartesian projection for the globe.

use crate::vec::Vec3;

/// Convert a latitude/longitude pair (degrees) to a point on the surface of
/// a sphere with the given radius.
///
/// Polar angle is `90 - lat`, azimuth is `lng + 180`, so (0, 0) lands on the
/// negative x axis and the north pole on positive y. At the poles the
/// azimuth is irrelevant but the point is still well-defined.
pub fn lat_lng_to_point(lat_deg: f64, lng_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        -(radius * phi.sin() * theta.sin()),
    )
}
