//! Greedy assignment engine.
//!
//! # Algorithm
//!
//! 1. No drivers: every order is unassigned.
//! 2. Start an empty route per driver, in roster order.
//! 3. Stable-sort orders by window start.
//! 4. For each order, drop drivers with an overlapping stop, then pick the
//!    remaining driver with the fewest stops, breaking ties by the hop from
//!    its last stop, then by roster order. No candidate: unassigned.
//!
//! Decisions are never revisited. An order left unassigned stays
//! unassigned even if a different earlier placement would have fit it.
//!
//! # Complexity
//! O(n * d * r) where n=orders, d=drivers, r=average route length.

use tracing::{debug, info};

use super::selection::select_route;
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::models::{DispatchPlan, Driver, Order};

/// Single-pass greedy dispatcher.
///
/// Holds only configuration; each [`assign`](Dispatcher::assign) call
/// builds its plan from scratch, so one dispatcher can serve many dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_dispatch::dispatching::Dispatcher;
/// use u_dispatch::models::{Driver, Order, TimeWindow};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let orders = vec![
///     Order::new(1, date, TimeWindow::parse("09:00", "10:00").unwrap()),
///     Order::new(2, date, TimeWindow::parse("09:30", "10:30").unwrap()),
///     Order::new(3, date, TimeWindow::parse("11:00", "12:00").unwrap()),
/// ];
/// let drivers = vec![Driver::new(1, "Sato")];
///
/// let plan = Dispatcher::new().assign(&orders, &drivers);
/// assert_eq!(plan.route_for(1).unwrap().order_ids(), vec![1, 3]);
/// assert_eq!(plan.outcome().unassigned, vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    ///
    /// Fails with [`DispatchError::Config`] unless the radius is a positive
    /// finite number.
    pub fn with_config(mut self, config: DispatchConfig) -> Result<Self, DispatchError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Current configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Assigns orders to drivers.
    ///
    /// Every order ends up on exactly one route or in `unassigned`, and no
    /// route holds two overlapping windows. Inputs are only read.
    pub fn assign(&self, orders: &[Order], drivers: &[Driver]) -> DispatchPlan {
        let mut plan = DispatchPlan::empty_for(drivers);

        if drivers.is_empty() {
            plan.unassigned = orders.to_vec();
            info!(orders = orders.len(), "no drivers on roster, all orders unassigned");
            return plan;
        }

        for idx in sort_by_start(orders) {
            let order = &orders[idx];
            match select_route(&plan.routes, order, self.config.earth_radius_km) {
                Some(pick) => {
                    let route = &mut plan.routes[pick.route_index];
                    debug!(
                        order_id = order.id,
                        driver_id = route.driver_id,
                        load = pick.score.load,
                        marginal_km = pick.score.marginal_km,
                        "order assigned"
                    );
                    route.push(order.clone());
                }
                None => {
                    debug!(order_id = order.id, window = %order.window, "no conflict-free driver");
                    plan.unassigned.push(order.clone());
                }
            }
        }

        info!(
            orders = orders.len(),
            drivers = drivers.len(),
            assigned = plan.assigned_count(),
            unassigned = plan.unassigned_count(),
            "dispatch complete"
        );

        plan
    }
}

/// Assigns orders to drivers with the default configuration.
pub fn assign(orders: &[Order], drivers: &[Driver]) -> DispatchPlan {
    Dispatcher::new().assign(orders, drivers)
}

/// Order indices sorted by window start; equal starts keep input order.
fn sort_by_start(orders: &[Order]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..orders.len()).collect();
    indices.sort_by_key(|&i| orders[i].window.start());
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::route_cost_km;
    use crate::models::{Coordinates, OrderId, TimeWindow};
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn order(id: OrderId, start: &str, end: &str) -> Order {
        Order::new(id, date(), TimeWindow::parse(start, end).unwrap())
    }

    fn located(id: OrderId, start: &str, end: &str, lat: f64, lng: f64) -> Order {
        order(id, start, end).with_location(Coordinates::new(lat, lng).unwrap())
    }

    fn abc() -> Vec<Order> {
        vec![
            order(1, "09:00", "10:00"), // A
            order(2, "09:30", "10:30"), // B
            order(3, "11:00", "12:00"), // C
        ]
    }

    fn ids(plan: &DispatchPlan, driver_id: u64) -> Vec<OrderId> {
        plan.route_for(driver_id).unwrap().order_ids()
    }

    #[test]
    fn test_conflict_single_driver() {
        let plan = assign(&abc(), &[Driver::new(1, "D1")]);
        assert_eq!(ids(&plan, 1), vec![1, 3]);
        assert_eq!(plan.outcome().unassigned, vec![2]);
    }

    #[test]
    fn test_balancing_two_drivers() {
        let drivers = vec![Driver::new(1, "D1"), Driver::new(2, "D2")];
        let plan = assign(&abc(), &drivers);

        // A → D1 (tie, roster order), B → D2 (only candidate),
        // C → D1 (equal load, zero hop, roster order)
        assert_eq!(ids(&plan, 1), vec![1, 3]);
        assert_eq!(ids(&plan, 2), vec![2]);
        assert!(plan.is_complete());
    }

    #[test]
    fn test_roster_order_not_id_order_breaks_ties() {
        let drivers = vec![Driver::new(9, "late id"), Driver::new(1, "early id")];
        let plan = assign(&[order(1, "09:00", "10:00")], &drivers);
        assert_eq!(ids(&plan, 9), vec![1]);
        assert!(plan.route_for(1).unwrap().is_empty());
    }

    #[test]
    fn test_distance_tie_break() {
        let drivers = vec![Driver::new(1, "far"), Driver::new(2, "near")];
        let orders = vec![
            located(1, "08:00", "09:00", 35.70, 139.70), // → far (tie)
            located(2, "08:00", "09:00", 35.66, 139.75), // → near (conflict)
            located(3, "10:00", "11:00", 35.65, 139.75), // equal load; near is closer
        ];
        let plan = assign(&orders, &drivers);
        assert_eq!(ids(&plan, 1), vec![1]);
        assert_eq!(ids(&plan, 2), vec![2, 3]);
    }

    #[test]
    fn test_load_beats_distance() {
        let drivers = vec![Driver::new(1, "busy"), Driver::new(2, "idle")];
        let orders = vec![
            located(1, "08:00", "09:00", 35.0, 139.0),
            located(2, "08:00", "09:00", 10.0, 10.0),
            located(3, "09:00", "10:00", 35.0, 139.0),
            located(4, "10:00", "11:00", 35.0, 139.0),
        ];
        let plan = assign(&orders, &drivers);
        // Order 3 sits on top of driver 1's last stop and driver 2 is far,
        // but loads are equal so distance decides: driver 1.
        // Order 4 then goes to driver 2 despite the distance (lower load).
        assert_eq!(ids(&plan, 1), vec![1, 3]);
        assert_eq!(ids(&plan, 2), vec![2, 4]);
    }

    #[test]
    fn test_missing_coordinates_never_error() {
        let drivers = vec![Driver::new(1, "A"), Driver::new(2, "B")];
        let orders = vec![
            order(1, "08:00", "09:00"),
            located(2, "08:00", "09:00", 35.0, 139.0),
            order(3, "09:00", "10:00"),
        ];
        let plan = assign(&orders, &drivers);
        assert!(plan.is_complete());
        // Both hops are zero (A's last stop and order 3 lack coordinates).
        assert_eq!(ids(&plan, 1), vec![1, 3]);
    }

    #[test]
    fn test_no_drivers() {
        let plan = assign(&abc(), &[]);
        assert!(plan.routes.is_empty());
        assert_eq!(plan.outcome().unassigned, vec![1, 2, 3]);
    }

    #[test]
    fn test_no_orders() {
        let drivers = vec![Driver::new(1, "A"), Driver::new(2, "B")];
        let plan = assign(&[], &drivers);
        assert_eq!(plan.routes.len(), 2);
        assert!(plan.routes.iter().all(|r| r.is_empty()));
        assert!(plan.unassigned.is_empty());
    }

    #[test]
    fn test_sorts_by_start_stably() {
        let orders = vec![
            order(5, "13:00", "14:00"),
            order(4, "09:00", "09:30"),
            order(3, "09:00", "11:00"),
        ];
        assert_eq!(sort_by_start(&orders), vec![1, 2, 0]);

        // One driver: 4 is accepted first, 3 then conflicts with it.
        let plan = assign(&orders, &[Driver::new(1, "A")]);
        assert_eq!(ids(&plan, 1), vec![4, 5]);
        assert_eq!(plan.outcome().unassigned, vec![3]);
    }

    #[test]
    fn test_back_to_back_windows_share_driver() {
        let orders = vec![
            order(1, "09:00", "10:00"),
            order(2, "10:00", "11:00"),
            order(3, "11:00", "12:00"),
        ];
        let plan = assign(&orders, &[Driver::new(1, "A")]);
        assert_eq!(ids(&plan, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_inputs_untouched() {
        let orders = abc();
        let drivers = vec![Driver::new(1, "D1")];
        let before = (orders.clone(), drivers.clone());
        let _ = assign(&orders, &drivers);
        assert_eq!((orders, drivers), before);
    }

    #[test]
    fn test_custom_radius_only_scales_costs() {
        let drivers = vec![Driver::new(1, "A"), Driver::new(2, "B")];
        let orders = vec![
            located(1, "08:00", "09:00", 35.0, 139.0),
            located(2, "08:00", "09:00", 36.0, 139.0),
            located(3, "10:00", "11:00", 35.9, 139.0),
        ];
        let config = DispatchConfig::new().with_earth_radius(1.0);
        let plan = Dispatcher::new()
            .with_config(config)
            .unwrap()
            .assign(&orders, &drivers);
        assert_eq!(plan.outcome(), assign(&orders, &drivers).outcome());
    }

    #[test]
    fn test_with_config_rejects_bad_radius() {
        for radius in [-6371.0, 0.0, f64::NAN, f64::INFINITY] {
            let config = DispatchConfig::new().with_earth_radius(radius);
            assert!(
                matches!(Dispatcher::new().with_config(config), Err(DispatchError::Config(_))),
                "radius {radius} accepted"
            );
        }
    }

    #[test]
    fn test_with_config_keeps_nearest_driver() {
        let drivers = vec![Driver::new(1, "far"), Driver::new(2, "near")];
        let orders = vec![
            located(1, "08:00", "09:00", 35.70, 139.70),
            located(2, "08:00", "09:00", 35.66, 139.75),
            located(3, "10:00", "11:00", 35.65, 139.75),
        ];
        let config = DispatchConfig::new().with_earth_radius(6378.137);
        let plan = Dispatcher::new()
            .with_config(config)
            .unwrap()
            .assign(&orders, &drivers);
        assert_eq!(plan.driver_for(3), Some(2));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispatcher>();
        assert_send_sync::<DispatchConfig>();
        assert_send_sync::<DispatchPlan>();
        assert_send_sync::<Order>();
        assert_send_sync::<Driver>();
    }

    fn random_instance(seed: u64) -> (Vec<Order>, Vec<Driver>) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let n_orders = rng.random_range(0..60);
        let n_drivers = rng.random_range(0..6);

        let orders = (0..n_orders)
            .map(|i| {
                let start = rng.random_range(6 * 60..20 * 60);
                let len = rng.random_range(15..180);
                let window = TimeWindow::new(start, (start + len).min(1439)).unwrap();
                let o = Order::new(i as u64, date(), window);
                if rng.random_bool(0.8) {
                    let lat = rng.random_range(35.5..35.9);
                    let lng = rng.random_range(139.5..139.9);
                    o.with_location(Coordinates::new(lat, lng).unwrap())
                } else {
                    o
                }
            })
            .collect();
        let drivers = (0..n_drivers)
            .map(|i| Driver::new(100 + i as u64, format!("driver-{i}")))
            .collect();
        (orders, drivers)
    }

    #[test]
    fn test_random_partition_and_no_overlap() {
        for seed in 0..50 {
            let (orders, drivers) = random_instance(seed);
            let plan = assign(&orders, &drivers);

            assert_eq!(plan.order_count(), orders.len(), "seed {seed}");
            let mut seen = HashSet::new();
            for route in &plan.routes {
                for o in &route.orders {
                    assert!(seen.insert(o.id), "seed {seed}: order {} twice", o.id);
                }
                let starts: Vec<_> = route.orders.iter().map(|o| o.window.start()).collect();
                assert!(starts.windows(2).all(|w| w[0] <= w[1]), "seed {seed}");
            }
            for o in &plan.unassigned {
                assert!(seen.insert(o.id), "seed {seed}: order {} twice", o.id);
            }
            assert_eq!(seen.len(), orders.len());
            assert!(plan.conflicts().is_empty(), "seed {seed}");
            if drivers.is_empty() {
                assert_eq!(plan.unassigned_count(), orders.len());
            }
        }
    }

    #[test]
    fn test_random_determinism() {
        for seed in 0..20 {
            let (orders, drivers) = random_instance(seed);
            let first = serde_json::to_string(&assign(&orders, &drivers)).unwrap();
            let second = serde_json::to_string(&assign(&orders, &drivers)).unwrap();
            assert_eq!(first, second, "seed {seed}");
        }
    }

    #[test]
    fn test_random_loads_stay_balanced_without_conflicts() {
        // Disjoint hourly windows: nothing conflicts, so load balancing
        // alone decides and loads differ by at most one.
        let mut rng = SmallRng::seed_from_u64(7);
        let orders: Vec<Order> = (0..23u16)
            .map(|h| {
                let window = TimeWindow::new(h * 60, h * 60 + 60).unwrap();
                let o = Order::new(h as u64, date(), window);
                o.with_location(
                    Coordinates::new(rng.random_range(35.0..36.0), rng.random_range(139.0..140.0))
                        .unwrap(),
                )
            })
            .collect();
        let drivers: Vec<Driver> = (0..4).map(|i| Driver::new(i, "d")).collect();
        let plan = assign(&orders, &drivers);

        let loads: Vec<usize> = plan.routes.iter().map(|r| r.len()).collect();
        let max = loads.iter().max().unwrap();
        let min = loads.iter().min().unwrap();
        assert!(max - min <= 1, "{loads:?}");
        assert!(plan.routes.iter().all(|r| route_cost_km(&r.orders) >= 0.0));
    }
}
