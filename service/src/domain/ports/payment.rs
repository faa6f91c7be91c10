//! Payment gateway port trait
//!
//! Defines the interface for taking payment for a purchase order.

use crate::domain::entities::AccountId;
use crate::error::PaymentError;

/// Port trait for the external payment gateway
#[cfg_attr(test, mockall::automock)]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to the account
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}
