//! Driver model.

use serde::{Deserialize, Serialize};

/// Driver identifier.
pub type DriverId = u64;

/// A driver on the roster.
///
/// Drivers carry no state between dispatch runs; the roster order passed
/// to the engine is the tie-break order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: DriverId,
    /// Display name.
    pub name: String,
}

impl Driver {
    /// Creates a driver.
    pub fn new(id: DriverId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
