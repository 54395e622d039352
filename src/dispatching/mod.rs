//! Order-to-driver assignment.
//!
//! Provides the greedy [`Dispatcher`], the candidate ranking it uses, and
//! manual overrides that replace an automatic plan.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_dispatch::dispatching::assign;
//! use u_dispatch::models::{Driver, Order, TimeWindow};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let orders = vec![
//!     Order::new(1, date, TimeWindow::parse("09:00", "10:00").unwrap()),
//!     Order::new(2, date, TimeWindow::parse("09:30", "10:30").unwrap()),
//! ];
//! let drivers = vec![Driver::new(1, "Sato"), Driver::new(2, "Suzuki")];
//!
//! let plan = assign(&orders, &drivers);
//! assert_eq!(plan.driver_for(1), Some(1));
//! assert_eq!(plan.driver_for(2), Some(2));
//! ```
//!
//! # Limitations
//!
//! The engine is a single greedy pass. It never moves an order once
//! placed, so it can leave orders unassigned that a different arrangement
//! would have fit. An order or stop without coordinates reads as zero
//! distance, which favours drivers whose last stop is ungeocoded.

mod engine;
mod manual;
mod selection;

pub use engine::{assign, Dispatcher};
pub use manual::{apply_manual, ManualAssignment};
pub use selection::{score_route, select_route, CandidateScore, Selection};
