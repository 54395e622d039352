//! Dispatch quality metrics.
//!
//! Computes the per-driver figures shown on route sheets and a few fleet
//! aggregates from a finished plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total jobs | Stops on a driver's route |
//! | Route distance | Straight-path length through stops in window order |
//! | Assignment rate | Assigned / all orders |
//! | Job spread | Max − min jobs over drivers |
//!
//! Distances are rounded to `DispatchConfig::distance_decimals`.

use serde::{Deserialize, Serialize};

use crate::config::DispatchConfig;
use crate::geo::route_cost_with_radius;
use crate::models::{DispatchPlan, Driver, DriverId};

/// Figures for one driver's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Driver id.
    pub driver_id: DriverId,
    /// Driver display name (empty if the driver is not on the roster).
    pub driver_name: String,
    /// Number of stops.
    pub total_jobs: usize,
    /// Estimated route length (km, rounded).
    pub total_distance_km: f64,
}

/// Fleet-level figures for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Per-driver figures, in roster order.
    pub routes: Vec<RouteSummary>,
    /// Orders placed on a route.
    pub assigned: usize,
    /// Orders left unassigned.
    pub unassigned: usize,
    /// Sum of route lengths (km, rounded).
    pub total_distance_km: f64,
    /// Max minus min jobs across drivers (0 with no drivers).
    pub job_spread: usize,
    /// Fraction of orders assigned (1.0 when there are no orders).
    pub assignment_rate: f64,
}

impl DispatchSummary {
    /// Computes figures from a plan.
    ///
    /// # Arguments
    /// * `plan` - The finished plan.
    /// * `drivers` - Roster, for display names.
    /// * `config` - Radius and rounding.
    pub fn calculate(plan: &DispatchPlan, drivers: &[Driver], config: &DispatchConfig) -> Self {
        let mut routes = Vec::with_capacity(plan.routes.len());
        let mut raw_total = 0.0;

        for route in &plan.routes {
            let mut stops = route.orders.clone();
            stops.sort_by_key(|o| o.window.start());
            let km = route_cost_with_radius(&stops, config.earth_radius_km);
            raw_total += km;

            let driver_name = drivers
                .iter()
                .find(|d| d.id == route.driver_id)
                .map(|d| d.name.clone())
                .unwrap_or_default();

            routes.push(RouteSummary {
                driver_id: route.driver_id,
                driver_name,
                total_jobs: route.len(),
                total_distance_km: config.round_distance(km),
            });
        }

        let max_jobs = routes.iter().map(|r| r.total_jobs).max().unwrap_or(0);
        let min_jobs = routes.iter().map(|r| r.total_jobs).min().unwrap_or(0);

        let total = plan.order_count();
        let assignment_rate = if total == 0 {
            1.0
        } else {
            plan.assigned_count() as f64 / total as f64
        };

        Self {
            routes,
            assigned: plan.assigned_count(),
            unassigned: plan.unassigned_count(),
            total_distance_km: config.round_distance(raw_total),
            job_spread: max_jobs - min_jobs,
            assignment_rate,
        }
    }

    /// Figures for one driver.
    pub fn route(&self, driver_id: DriverId) -> Option<&RouteSummary> {
        self.routes.iter().find(|r| r.driver_id == driver_id)
    }
}
