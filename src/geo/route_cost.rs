//! Route length estimation.
//!
//! Approximates travel as a straight path through the stops in the given
//! order. Not a shortest path, and no depot leg at either end.

use super::distance::{distance_with_radius, EARTH_RADIUS_KM};
use crate::models::Order;

/// Sum of consecutive stop-to-stop distances (km).
///
/// Zero for zero or one stop.
pub fn route_cost_km(stops: &[Order]) -> f64 {
    route_cost_with_radius(stops, EARTH_RADIUS_KM)
}

/// [`route_cost_km`] on a sphere of the given radius.
pub fn route_cost_with_radius(stops: &[Order], radius_km: f64) -> f64 {
    stops
        .windows(2)
        .map(|pair| {
            distance_with_radius(
                pair[0].location.as_ref(),
                pair[1].location.as_ref(),
                radius_km,
            )
        })
        .sum()
}
