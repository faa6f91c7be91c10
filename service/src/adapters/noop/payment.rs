use crate::domain::entities::AccountId;
use crate::domain::ports::TicketPaymentService;
use crate::error::PaymentError;

/// Payment adapter that records the charge in the log and always succeeds
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPaymentService;

impl TicketPaymentService for NoopPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        tracing::info!(account_id = %account_id, amount, "Payment taken (noop gateway)");
        Ok(())
    }
}
