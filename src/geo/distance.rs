//! Great-circle distance.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky and Telescope 68(2)

use crate::models::Coordinates;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points on a sphere of `radius_km`.
pub fn haversine_km(a: &Coordinates, b: &Coordinates, radius_km: f64) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_phi = (b.lat() - a.lat()).to_radians();
    let d_lambda = (b.lng() - a.lng()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    radius_km * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance between two optional points (km).
///
/// An unknown location contributes no cost: if either side is `None`
/// the distance is `0.0`.
///
/// # Example
/// ```
/// use u_dispatch::geo::distance_km;
/// use u_dispatch::models::Coordinates;
///
/// let tokyo = Coordinates::new(35.6812, 139.7671).unwrap();
/// assert_eq!(distance_km(Some(&tokyo), None), 0.0);
/// assert_eq!(distance_km(Some(&tokyo), Some(&tokyo)), 0.0);
/// ```
pub fn distance_km(a: Option<&Coordinates>, b: Option<&Coordinates>) -> f64 {
    distance_with_radius(a, b, EARTH_RADIUS_KM)
}

/// [`distance_km`] on a sphere of the given radius.
pub fn distance_with_radius(
    a: Option<&Coordinates>,
    b: Option<&Coordinates>,
    radius_km: f64,
) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => haversine_km(a, b, radius_km),
        _ => 0.0,
    }
}
