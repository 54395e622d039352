//! Dispatch plan (solution) model.
//!
//! A plan maps every driver on the roster to a route and collects the
//! orders no driver could take. Plans come out of the assignment engine
//! or a manual override; they are plain values with no link back to the
//! run that produced them.

use serde::{Deserialize, Serialize};

use super::{Driver, DriverId, Order, OrderId};

/// One driver's ordered stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Driver who runs this route.
    pub driver_id: DriverId,
    /// Stops in acceptance order.
    pub orders: Vec<Order>,
}

impl Route {
    /// Creates an empty route for a driver.
    pub fn new(driver_id: DriverId) -> Self {
        Self {
            driver_id,
            orders: Vec::new(),
        }
    }

    /// Number of stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the route has no stops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Last stop accepted so far.
    pub fn last_stop(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Whether `order` overlaps any stop already on this route.
    pub fn conflicts_with(&self, order: &Order) -> bool {
        self.orders.iter().any(|o| o.conflicts_with(order))
    }

    /// Appends a stop.
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Order ids in route order.
    pub fn order_ids(&self) -> Vec<OrderId> {
        self.orders.iter().map(|o| o.id).collect()
    }

    /// Pairs of stops on this route whose windows overlap.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut found = Vec::new();
        for (i, a) in self.orders.iter().enumerate() {
            for b in &self.orders[i + 1..] {
                if a.conflicts_with(b) {
                    found.push(Conflict {
                        driver_id: self.driver_id,
                        first: a.id,
                        second: b.id,
                    });
                }
            }
        }
        found
    }
}

/// Two overlapping stops on the same route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Driver whose route holds both stops.
    pub driver_id: DriverId,
    /// Earlier stop in route order.
    pub first: OrderId,
    /// Later stop in route order.
    pub second: OrderId,
}

/// Result of a dispatch run: per-driver routes plus unassigned orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// One route per driver, in roster order.
    pub routes: Vec<Route>,
    /// Orders that no driver could take, in processing order.
    pub unassigned: Vec<Order>,
}

impl DispatchPlan {
    /// Creates a plan with an empty route for every driver.
    pub fn empty_for(drivers: &[Driver]) -> Self {
        Self {
            routes: drivers.iter().map(|d| Route::new(d.id)).collect(),
            unassigned: Vec::new(),
        }
    }

    /// Route belonging to a driver.
    pub fn route_for(&self, driver_id: DriverId) -> Option<&Route> {
        self.routes.iter().find(|r| r.driver_id == driver_id)
    }

    /// Driver an order was assigned to, if any.
    pub fn driver_for(&self, order_id: OrderId) -> Option<DriverId> {
        self.routes
            .iter()
            .find(|r| r.orders.iter().any(|o| o.id == order_id))
            .map(|r| r.driver_id)
    }

    /// Whether an order ended up unassigned.
    pub fn is_unassigned(&self, order_id: OrderId) -> bool {
        self.unassigned.iter().any(|o| o.id == order_id)
    }

    /// Number of orders placed on some route.
    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Number of unassigned orders.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Total orders covered by this plan.
    pub fn order_count(&self) -> usize {
        self.assigned_count() + self.unassigned_count()
    }

    /// Whether every order was assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// All overlapping stop pairs across every route.
    ///
    /// Always empty for engine output; manual overrides may produce some.
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.routes.iter().flat_map(Route::conflicts).collect()
    }

    /// Id-only view of the plan.
    pub fn outcome(&self) -> DispatchOutcome {
        DispatchOutcome {
            routes: self
                .routes
                .iter()
                .map(|r| RouteIds {
                    driver_id: r.driver_id,
                    order_ids: r.order_ids(),
                })
                .collect(),
            unassigned: self.unassigned.iter().map(|o| o.id).collect(),
        }
    }
}

/// Id-only dispatch result handed to persistence and response layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Driver → ordered order ids, in roster order.
    pub routes: Vec<RouteIds>,
    /// Unassigned order ids.
    pub unassigned: Vec<OrderId>,
}

/// A driver's route as order ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteIds {
    /// Driver id.
    pub driver_id: DriverId,
    /// Order ids in route order.
    pub order_ids: Vec<OrderId>,
}
