use crate::domain::entities::AccountId;
use crate::domain::ports::SeatReservationService;
use crate::error::ReservationError;

/// Reservation adapter that records the booking in the log and always succeeds
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSeatReservationService;

impl SeatReservationService for NoopSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError> {
        tracing::info!(account_id = %account_id, seat_count, "Seats reserved (noop gateway)");
        Ok(())
    }
}
