//! Dispatch domain models.
//!
//! Provides the data types the assignment engine consumes and produces.
//!
//! # Domain Mappings
//!
//! | u-dispatch | Scheduling term | Original record |
//! |------------|-----------------|-----------------|
//! | Order | Job with a release/due window | Delivery row |
//! | Driver | Resource | Driver row |
//! | Route | Resource sequence | Assignments of one driver |
//! | DispatchPlan | Schedule | Assignments of one date |

mod driver;
mod order;
mod plan;
mod window;

pub use driver::{Driver, DriverId};
pub use order::{Coordinates, Order, OrderId, OrderRecord};
pub use plan::{Conflict, DispatchOutcome, DispatchPlan, Route, RouteIds};
pub use window::{format_clock, parse_clock, TimeWindow, MINUTES_PER_DAY};
