//! Room inventory trait.

use crate::error::InventoryError;
use crate::types::{ReservationId, Room, RoomId, StayDates};

/// Room inventory.
///
/// The inventory is the authority for conflict detection: `reserve` must
/// reject overlapping reservations atomically (compare-and-reserve), so
/// concurrent callers racing for the same room and dates cannot both win.
pub trait RoomInventory: Send + Sync {
    /// Reserve a room for a stay.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownRoom`] for an unknown room,
    /// [`InventoryError::Unavailable`] when the room cannot host the party,
    /// and [`InventoryError::Conflict`] when an overlapping reservation
    /// already holds the room.
    fn reserve(
        &self,
        room_id: &RoomId,
        dates: StayDates,
        guests: u32,
    ) -> impl std::future::Future<Output = Result<ReservationId, InventoryError>> + Send;

    /// Release a previously made reservation.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownReservation`] if no reservation is
    /// held under the handle.
    fn release(
        &self,
        reservation_id: &ReservationId,
    ) -> impl std::future::Future<Output = Result<(), InventoryError>> + Send;

    /// List rooms that currently hold no reservation.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Backend`] if the inventory cannot be read.
    fn available_rooms(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Room>, InventoryError>> + Send;
}
