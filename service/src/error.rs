//! Unified error types for the ticket service
//!
//! This module defines error types for each layer:
//! - `InvalidPurchase`: A purchase order rejected by validation (no side effects)
//! - `PaymentError` / `ReservationError`: Failures reported by the external gateways
//! - `PurchaseError`: Everything `purchase_tickets` can return
//! - `ConfigError`: Bad configuration values

use thiserror::Error;

/// Why a purchase order was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidPurchaseReason {
    InvalidAccountId,
    NoTicketsRequested,
    MaxTicketsExceeded,
    ChildOrInfantWithoutAdult,
    InfantsExceedAdults,
    InvalidTicketCount,
}

impl std::fmt::Display for InvalidPurchaseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidPurchaseReason::InvalidAccountId => write!(f, "invalid account id"),
            InvalidPurchaseReason::NoTicketsRequested => write!(f, "no tickets requested"),
            InvalidPurchaseReason::MaxTicketsExceeded => {
                write!(f, "maximum tickets per purchase exceeded")
            }
            InvalidPurchaseReason::ChildOrInfantWithoutAdult => {
                write!(f, "child/infant tickets require adult tickets")
            }
            InvalidPurchaseReason::InfantsExceedAdults => {
                write!(f, "cannot have more infants than adults")
            }
            InvalidPurchaseReason::InvalidTicketCount => write!(f, "invalid ticket count"),
        }
    }
}

/// Validation failure for a purchase order
///
/// Raised before either gateway is called, so it always means nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid purchase: {reason}")]
pub struct InvalidPurchase {
    reason: InvalidPurchaseReason,
}

impl InvalidPurchase {
    pub fn new(reason: InvalidPurchaseReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> InvalidPurchaseReason {
        self.reason
    }
}

impl From<InvalidPurchaseReason> for InvalidPurchase {
    fn from(reason: InvalidPurchaseReason) -> Self {
        Self::new(reason)
    }
}

/// Payment gateway errors
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Payment service unavailable: {0}")]
    Unavailable(String),

    #[error("Payment internal error: {0}")]
    Internal(String),
}

/// Seat reservation gateway errors
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Seat reservation service unavailable: {0}")]
    Unavailable(String),

    #[error("Not enough seats to reserve {requested}")]
    InsufficientCapacity { requested: u32 },

    #[error("Seat reservation internal error: {0}")]
    Internal(String),
}

/// Errors returned by `TicketService::purchase_tickets`
///
/// Gateway failures are passed through untouched. A `Reservation` error means the
/// payment has already been taken; nothing is rolled back.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    InvalidPurchase(#[from] InvalidPurchase),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

impl PurchaseError {
    /// True when neither gateway was called
    pub fn is_side_effect_free(&self) -> bool {
        matches!(self, PurchaseError::InvalidPurchase(_))
    }

    /// The rejection reason, if this was a validation failure
    pub fn invalid_reason(&self) -> Option<InvalidPurchaseReason> {
        match self {
            PurchaseError::InvalidPurchase(e) => Some(e.reason()),
            _ => None,
        }
    }
}

impl From<InvalidPurchaseReason> for PurchaseError {
    fn from(reason: InvalidPurchaseReason) -> Self {
        PurchaseError::InvalidPurchase(InvalidPurchase::new(reason))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
