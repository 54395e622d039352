//! Manual dispatch overrides.
//!
//! A dispatcher can replace the automatic plan for a date with explicit
//! order → driver pairs. The override is taken as given: overlapping
//! windows are allowed and show up in [`DispatchPlan::conflicts`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{DispatchPlan, Driver, DriverId, Order, OrderId};
use crate::validation::{ValidationError, ValidationErrorKind};

/// One explicit order → driver pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAssignment {
    /// Order to place.
    pub order_id: OrderId,
    /// Driver who takes it.
    pub driver_id: DriverId,
}

impl ManualAssignment {
    /// Creates a pairing.
    pub fn new(order_id: OrderId, driver_id: DriverId) -> Self {
        Self {
            order_id,
            driver_id,
        }
    }
}

/// Builds a plan from explicit pairings.
///
/// Each route is sorted by window start (stable, so equal starts keep
/// pairing order). Orders no pairing mentions are unassigned, in input
/// order. Unknown ids and orders paired twice are all reported together.
pub fn apply_manual(
    orders: &[Order],
    drivers: &[Driver],
    assignments: &[ManualAssignment],
) -> Result<DispatchPlan, Vec<ValidationError>> {
    let order_index: HashMap<OrderId, usize> =
        orders.iter().enumerate().map(|(i, o)| (o.id, i)).collect();
    let route_index: HashMap<DriverId, usize> =
        drivers.iter().enumerate().map(|(i, d)| (d.id, i)).collect();

    let mut errors = Vec::new();
    let mut placed = HashSet::new();
    let mut plan = DispatchPlan::empty_for(drivers);

    for a in assignments {
        let order = order_index.get(&a.order_id);
        let route = route_index.get(&a.driver_id);

        if order.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownOrder,
                format!("Assignment references unknown order {}", a.order_id),
            ));
        }
        if route.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDriver,
                format!("Assignment references unknown driver {}", a.driver_id),
            ));
        }
        if !placed.insert(a.order_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!("Order {} is assigned more than once", a.order_id),
            ));
            continue;
        }

        if let (Some(&oi), Some(&ri)) = (order, route) {
            plan.routes[ri].push(orders[oi].clone());
        }
    }

    if !errors.is_empty() {
        warn!(errors = errors.len(), "manual assignment rejected");
        return Err(errors);
    }

    for route in &mut plan.routes {
        route.orders.sort_by_key(|o| o.window.start());
    }
    plan.unassigned = orders
        .iter()
        .filter(|o| !placed.contains(&o.id))
        .cloned()
        .collect();

    let conflicts = plan.conflicts().len();
    if conflicts > 0 {
        warn!(conflicts, "manual plan has overlapping windows");
    }
    info!(
        assigned = plan.assigned_count(),
        unassigned = plan.unassigned_count(),
        "manual plan applied"
    );

    Ok(plan)
}
