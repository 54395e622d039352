//! Delivery dispatching for the U-Engine ecosystem.
//!
//! Assigns time-windowed delivery orders for one date to a driver roster
//! with a single greedy pass: no driver takes two overlapping windows,
//! loads are kept even, and among equally loaded drivers the one whose
//! last stop is nearest wins.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Order`, `Driver`, `TimeWindow`,
//!   `Route`, `DispatchPlan`
//! - **`geo`**: Haversine distance and straight-path route cost
//! - **`dispatching`**: The greedy `Dispatcher` and manual overrides
//! - **`summary`**: Per-driver job counts and route distances
//! - **`validation`**: Input integrity checks (duplicate IDs, mixed dates)
//! - **`config`**: Radius and reporting precision
//!
//! # Architecture
//!
//! The crate is pure computation. Geocoding, persistence, and rendering
//! are the caller's business: orders arrive already geocoded (or not),
//! plans leave as values for the caller to store or print. Logging goes
//! through `tracing`; installing a subscriber is up to the application.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Toth & Vigo (2014), "Vehicle Routing: Problems, Methods, and Applications"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod geo;
pub mod models;
pub mod summary;
pub mod validation;

pub use config::DispatchConfig;
pub use dispatching::{assign, Dispatcher};
pub use error::DispatchError;
