//! Candidate driver selection.
//!
//! Ranks the drivers that can take an order without a window conflict.
//! The ranking is lexicographic: fewest stops first, then shortest hop
//! from the driver's last stop, then roster position.

use std::cmp::Ordering;

use crate::geo::distance_with_radius;
use crate::models::{Order, Route};

/// How a candidate driver scores for one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Stops already on the driver's route.
    pub load: usize,
    /// Distance from the driver's last stop to the order (km).
    pub marginal_km: f64,
}

impl CandidateScore {
    /// Lexicographic comparison on `(load, marginal_km)`.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.load
            .cmp(&other.load)
            .then_with(|| self.marginal_km.total_cmp(&other.marginal_km))
    }
}

/// The winning candidate for an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Index of the winning route (= roster position).
    pub route_index: usize,
    /// Score that won.
    pub score: CandidateScore,
}

/// Scores a route for an order, or `None` if the route has a conflicting stop.
pub fn score_route(route: &Route, order: &Order, radius_km: f64) -> Option<CandidateScore> {
    if route.conflicts_with(order) {
        return None;
    }
    let last = route.last_stop().and_then(|o| o.location.as_ref());
    Some(CandidateScore {
        load: route.len(),
        marginal_km: distance_with_radius(last, order.location.as_ref(), radius_km),
    })
}

/// Picks the best conflict-free route for an order.
///
/// Returns `None` when every route conflicts. Exact ties keep the
/// earliest route, so roster order decides.
pub fn select_route(routes: &[Route], order: &Order, radius_km: f64) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for (route_index, route) in routes.iter().enumerate() {
        let Some(score) = score_route(route, order, radius_km) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(current) => score.compare(&current.score) == Ordering::Less,
        };
        if better {
            best = Some(Selection { route_index, score });
        }
    }

    best
}
