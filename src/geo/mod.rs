//! Distance costing.
//!
//! Great-circle distances between stops and the straight-path length of
//! a route. Missing coordinates count as zero distance everywhere.

mod distance;
mod route_cost;

pub use distance::{distance_km, distance_with_radius, haversine_km, EARTH_RADIUS_KM};
pub use route_cost::{route_cost_km, route_cost_with_radius};
