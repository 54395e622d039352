//! Input validation for dispatch runs.
//!
//! The engine trusts its input; these checks are for callers that want
//! to reject a batch before dispatching it. Detects:
//! - Duplicate order IDs
//! - Duplicate driver IDs
//! - Orders spread over more than one delivery date
//!
//! Manual overrides reuse the same error type for unknown references
//! and double assignments.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Driver, Order};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Orders belong to different delivery dates.
    MixedDeliveryDates,
    /// A manual assignment names an order that isn't in the batch.
    UnknownOrder,
    /// A manual assignment names a driver that isn't on the roster.
    UnknownDriver,
    /// A manual override assigns the same order more than once.
    DuplicateAssignment,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a dispatch batch.
///
/// Checks:
/// 1. No duplicate order IDs
/// 2. No duplicate driver IDs
/// 3. All orders share one delivery date
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(orders: &[Order], drivers: &[Driver]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut driver_ids = HashSet::new();
    for d in drivers {
        if !driver_ids.insert(d.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate driver ID: {}", d.id),
            ));
        }
    }

    let mut order_ids = HashSet::new();
    for o in orders {
        if !order_ids.insert(o.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate order ID: {}", o.id),
            ));
        }
    }

    if let Some(first) = orders.first() {
        for o in orders.iter().filter(|o| o.delivery_date != first.delivery_date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MixedDeliveryDates,
                format!(
                    "Order {} is for {}, batch is for {}",
                    o.id, o.delivery_date, first.delivery_date
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
