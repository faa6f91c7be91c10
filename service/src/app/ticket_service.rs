//! Ticket service
//!
//! Validates and prices ticket purchase orders, then takes payment and
//! reserves seats through the gateway ports.

use std::sync::Arc;

use chrono::Utc;

use crate::app::purchase_rules;
use crate::config::PurchaseConfig;
use crate::domain::entities::{
    AccountId, CategoryTally, PurchaseId, PurchaseOutcome, PurchaseReceipt, TicketTypeRequest,
};
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::error::{InvalidPurchase, InvalidPurchaseReason, PurchaseError};

/// Service for purchasing tickets
pub struct TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    payments: Arc<P>,
    reservations: Arc<R>,
    config: PurchaseConfig,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new(payments: Arc<P>, reservations: Arc<R>) -> Self {
        Self::with_config(payments, reservations, PurchaseConfig::default())
    }

    pub fn with_config(payments: Arc<P>, reservations: Arc<R>, config: PurchaseConfig) -> Self {
        Self {
            payments,
            reservations,
            config,
        }
    }

    pub fn config(&self) -> &PurchaseConfig {
        &self.config
    }

    /// Purchase tickets for an account
    ///
    /// Steps:
    /// 1. Validate the account id and that at least one request line was given
    /// 2. Tally the request lines by category and check the purchase rules
    /// 3. Take payment for the total amount
    /// 4. Reserve the seats
    ///
    /// Nothing is sent to either gateway unless the whole order is admissible.
    /// Gateway errors are returned as-is; a failed reservation does not refund
    /// the payment.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let (account_id, outcome) = self.validate(account_id, requests)?;

        self.payments
            .make_payment(account_id, outcome.amount)
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    account_id = %account_id,
                    amount = outcome.amount,
                    "Payment failed"
                );
                e
            })?;

        self.reservations
            .reserve_seat(account_id, outcome.seats)
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    account_id = %account_id,
                    seats = outcome.seats,
                    "Seat reservation failed after payment was taken"
                );
                e
            })?;

        let receipt = PurchaseReceipt {
            id: PurchaseId::new(),
            account_id,
            outcome,
            placed_at: Utc::now(),
        };

        tracing::info!(
            purchase_id = %receipt.id,
            account_id = %account_id,
            amount = outcome.amount,
            seats = outcome.seats,
            "Tickets purchased"
        );

        Ok(receipt)
    }

    /// Work out what an order would cost without calling either gateway
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, InvalidPurchase> {
        self.validate(account_id, requests).map(|(_, outcome)| outcome)
    }

    fn validate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, PurchaseOutcome), InvalidPurchase> {
        let result = self.check_order(account_id, requests);
        if let Err(e) = &result {
            tracing::warn!(account_id, reason = %e.reason(), "Purchase rejected");
        }
        result
    }

    fn check_order(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, PurchaseOutcome), InvalidPurchase> {
        let account_id = AccountId::try_from(account_id)?;

        if requests.is_empty() {
            return Err(InvalidPurchaseReason::NoTicketsRequested.into());
        }

        let tally = CategoryTally::from_requests(requests);
        tracing::debug!(
            account_id = %account_id,
            adults = tally.adults(),
            children = tally.children(),
            infants = tally.infants(),
            "Tallied purchase order"
        );

        purchase_rules::validate(&tally, self.config.max_tickets_per_purchase)?;
        let outcome = purchase_rules::price(&tally, &self.config)?;

        Ok((account_id, outcome))
    }
}
