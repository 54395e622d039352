//! Dispatch configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::geo::EARTH_RADIUS_KM;

/// Tunables shared by the engine and the summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Sphere radius for haversine distances (km).
    pub earth_radius_km: f64,
    /// Decimal places kept in reported route distances.
    pub distance_decimals: u32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            distance_decimals: 2,
        }
    }
}

impl DispatchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sphere radius.
    pub fn with_earth_radius(mut self, radius_km: f64) -> Self {
        self.earth_radius_km = radius_km;
        self
    }

    /// Sets the reported distance precision.
    pub fn with_distance_decimals(mut self, decimals: u32) -> Self {
        self.distance_decimals = decimals;
        self
    }

    /// Loads a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Example
    /// ```
    /// use u_dispatch::config::DispatchConfig;
    ///
    /// let config = DispatchConfig::from_json(r#"{"distance_decimals": 1}"#).unwrap();
    /// assert_eq!(config.distance_decimals, 1);
    /// assert_eq!(config.earth_radius_km, 6371.0);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, DispatchError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the radius is a positive finite number.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(DispatchError::Config(format!(
                "earth_radius_km must be positive, got {}",
                self.earth_radius_km
            )));
        }
        Ok(())
    }

    /// Rounds a distance to the configured precision.
    pub fn round_distance(&self, km: f64) -> f64 {
        let scale = 10f64.powi(self.distance_decimals.min(15) as i32);
        (km * scale).round() / scale
    }
}
