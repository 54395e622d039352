//! Delivery order model.
//!
//! An order is one stop to deliver on a given date within a time window.
//! Display fields (recipient, address, notes) ride along untouched; the
//! assignment engine reads only the id, window and coordinates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeWindow;
use crate::error::DispatchError;

/// Caller-assigned order identifier.
pub type OrderId = u64;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DispatchError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(DispatchError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DispatchError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

/// A delivery order with a parsed time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Date the order is delivered on.
    pub delivery_date: NaiveDate,
    /// Acceptable delivery window.
    pub window: TimeWindow,
    /// Geocoded location. `None` when geocoding failed or was skipped.
    pub location: Option<Coordinates>,
    /// Recipient name (display only).
    pub recipient_name: Option<String>,
    /// Street address (display only).
    pub address: String,
    /// Free-text delivery notes (display only).
    pub notes: Option<String>,
}

impl Order {
    /// Creates an order with no location and empty display fields.
    pub fn new(id: OrderId, delivery_date: NaiveDate, window: TimeWindow) -> Self {
        Self {
            id,
            delivery_date,
            window,
            location: None,
            recipient_name: None,
            address: String::new(),
            notes: None,
        }
    }

    /// Sets the geocoded location.
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the recipient name.
    pub fn with_recipient(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = Some(name.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets delivery notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether this order's window overlaps another's.
    #[inline]
    pub fn conflicts_with(&self, other: &Order) -> bool {
        self.window.overlaps(&other.window)
    }
}

/// Raw order as supplied by callers (CSV rows, API payloads).
///
/// Times are still "HH:MM" text; convert with `Order::try_from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier.
    pub id: OrderId,
    /// Delivery date.
    pub delivery_date: NaiveDate,
    /// Window start, "HH:MM".
    #[serde(alias = "time_start")]
    pub window_start: String,
    /// Window end, "HH:MM".
    #[serde(alias = "time_end")]
    pub window_end: String,
    /// Latitude, if geocoded.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, if geocoded.
    #[serde(default)]
    pub lng: Option<f64>,
    /// Recipient name.
    #[serde(default)]
    pub recipient_name: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Delivery notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = DispatchError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let window = TimeWindow::parse(&record.window_start, &record.window_end)?;
        let location = match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
            (None, None) => None,
            _ => return Err(DispatchError::PartialCoordinates(record.id)),
        };

        Ok(Self {
            id: record.id,
            delivery_date: record.delivery_date,
            window,
            location,
            recipient_name: record.recipient_name,
            address: record.address,
            notes: record.notes,
        })
    }
}
