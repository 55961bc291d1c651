// ============================================================================
// Frontdesk Library
// ============================================================================
//
// State container for a small property-management dashboard: three entity
// collections (rooms, guests, reservations) owned by a single store, with
// write-through JSON persistence and a one-shot remote seed on first run.

pub mod core;
pub mod facade;
pub mod remote;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{
    Guest, GuestPatch, NewGuest, NewReservation, Reservation, ReservationPatch,
    ReservationStatus, Result, Room, RoomStatus, Snapshot, StoreError,
};
pub use crate::facade::{HotelStore, StoreConfig};
pub use crate::remote::{HttpRemoteSource, RemoteSource, StaticRemoteSource};
pub use crate::storage::{FileCache, MemoryCache, SnapshotCache};
