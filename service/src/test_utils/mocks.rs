//! Recording implementations of port traits
//!
//! These fakes store every gateway call in a shared log and can be configured
//! to fail, so tests can verify what reached the gateways and in what order.

use std::sync::{Arc, RwLock};

use crate::domain::entities::AccountId;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::error::{PaymentError, ReservationError};

/// A call that reached one of the gateways
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seats: u32 },
}

/// Call log shared between the recording gateways
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: GatewayCall) {
        self.calls.write().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.read().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.calls.write().unwrap().clear();
    }
}

// ============================================================================
// Recording Payment Service
// ============================================================================

pub struct RecordingPaymentService {
    log: CallLog,
    fail: bool,
}

impl RecordingPaymentService {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    /// Record the call, then report the gateway as unavailable
    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        self.log.record(GatewayCall::Payment { account_id, amount });
        if self.fail {
            return Err(PaymentError::Unavailable(
                "payment gateway offline".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Recording Seat Reservation Service
// ============================================================================

pub struct RecordingSeatReservationService {
    log: CallLog,
    fail: bool,
}

impl RecordingSeatReservationService {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    /// Record the call, then report the gateway as unavailable
    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError> {
        self.log.record(GatewayCall::Reservation {
            account_id,
            seats: seat_count,
        });
        if self.fail {
            return Err(ReservationError::Unavailable(
                "seat booking offline".to_string(),
            ));
        }
        Ok(())
    }
}
