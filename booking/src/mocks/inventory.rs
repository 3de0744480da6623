//! Mock room inventory for testing.

use crate::error::InventoryError;
use crate::providers::RoomInventory;
use crate::types::{ReservationId, Room, RoomId, StayDates};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// A recorded `reserve` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReserveCall {
    /// Room that was requested.
    pub room_id: RoomId,
    /// Requested stay.
    pub dates: StayDates,
    /// Party size.
    pub guests: u32,
}

#[derive(Clone, Debug)]
struct Reservation {
    room_id: RoomId,
    dates: StayDates,
}

#[derive(Debug, Default)]
struct Inner {
    rooms: HashMap<RoomId, u32>,
    reservations: HashMap<ReservationId, Reservation>,
    reserve_calls: Vec<ReserveCall>,
    next_reservation: u64,
}

/// In-memory room inventory.
///
/// Holds a room table and active reservations. `reserve` is
/// compare-and-reserve under a single lock: the availability check and the
/// insertion happen atomically, so overlapping requests for the same room
/// cannot both win.
#[derive(Clone, Debug, Default)]
pub struct MockRoomInventory {
    inner: Arc<Mutex<Inner>>,
}

impl MockRoomInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room with the given guest capacity.
    #[must_use]
    pub fn with_room(self, room_id: &str, capacity: u32) -> Self {
        super::lock(&self.inner)
            .rooms
            .insert(RoomId::new(room_id), capacity);
        self
    }

    /// Number of `reserve` invocations seen, successful or not.
    #[must_use]
    pub fn reserve_invocations(&self) -> usize {
        super::lock(&self.inner).reserve_calls.len()
    }

    /// All recorded `reserve` invocations, in call order.
    #[must_use]
    pub fn reserve_calls(&self) -> Vec<ReserveCall> {
        super::lock(&self.inner).reserve_calls.clone()
    }

    /// Number of reservations currently held.
    #[must_use]
    pub fn active_reservations(&self) -> usize {
        super::lock(&self.inner).reservations.len()
    }
}

impl RoomInventory for MockRoomInventory {
    fn reserve(
        &self,
        room_id: &RoomId,
        dates: StayDates,
        guests: u32,
    ) -> impl Future<Output = Result<ReservationId, InventoryError>> + Send {
        let room_id = room_id.clone();
        let inner = Arc::clone(&self.inner);

        async move {
            // One lock for check and insert: compare-and-reserve.
            let mut guard = super::lock(&inner);
            guard.reserve_calls.push(ReserveCall {
                room_id: room_id.clone(),
                dates,
                guests,
            });

            let Some(&capacity) = guard.rooms.get(&room_id) else {
                return Err(InventoryError::UnknownRoom { room_id });
            };
            if guests > capacity {
                return Err(InventoryError::Unavailable { room_id });
            }
            let overlapping = guard
                .reservations
                .values()
                .any(|held| held.room_id == room_id && held.dates.overlaps(&dates));
            if overlapping {
                return Err(InventoryError::Conflict { room_id });
            }

            guard.next_reservation += 1;
            let reservation_id = ReservationId::new(format!("res-{}", guard.next_reservation));
            guard.reservations.insert(
                reservation_id.clone(),
                Reservation {
                    room_id: room_id.clone(),
                    dates,
                },
            );
            tracing::debug!(
                reservation_id = %reservation_id,
                room_id = %room_id,
                dates = %dates,
                "Mock room reserved"
            );
            Ok(reservation_id)
        }
    }

    fn release(
        &self,
        reservation_id: &ReservationId,
    ) -> impl Future<Output = Result<(), InventoryError>> + Send {
        let reservation_id = reservation_id.clone();
        let inner = Arc::clone(&self.inner);

        async move {
            let mut guard = super::lock(&inner);
            if guard.reservations.remove(&reservation_id).is_none() {
                return Err(InventoryError::UnknownReservation { reservation_id });
            }
            tracing::debug!(reservation_id = %reservation_id, "Mock reservation released");
            Ok(())
        }
    }

    fn available_rooms(&self) -> impl Future<Output = Result<Vec<Room>, InventoryError>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = super::lock(&inner);
            let mut rooms: Vec<Room> = guard
                .rooms
                .iter()
                .filter(|(room_id, _)| {
                    !guard
                        .reservations
                        .values()
                        .any(|held| held.room_id == **room_id)
                })
                .map(|(room_id, &capacity)| Room {
                    id: room_id.clone(),
                    capacity,
                })
                .collect();
            rooms.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
            Ok(rooms)
        }
    }
}
