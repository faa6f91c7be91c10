//! Seat reservation port trait
//!
//! Defines the interface for reserving seats for a purchase order.

use crate::domain::entities::AccountId;
use crate::error::ReservationError;

/// Port trait for the external seat reservation system
#[cfg_attr(test, mockall::automock)]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for the account
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32)
        -> Result<(), ReservationError>;
}
