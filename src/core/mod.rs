pub mod error;
pub mod types;

pub use error::{Result, StoreError};
pub use types::{
    Guest, GuestPatch, NewGuest, NewReservation, Reservation, ReservationPatch,
    ReservationStatus, Room, RoomStatus, Snapshot,
};
