//! Domain entities and the snapshot they roll up into.
//!
//! Field names follow the dashboard's JSON wire format (camelCase keys,
//! lowercase status strings), so a persisted snapshot and the remote
//! `db.json` document deserialize with no adapter layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy state of a room.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

/// Lifecycle state of a reservation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    /// Display label, e.g. "101" or "2B". Not the allocation key.
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    pub status: RoomStatus,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A booking of one room by one guest.
///
/// `room_id` and `guest_id` are plain references; the store never checks
/// that the referenced room or guest exists, and `check_in < check_out`
/// is expected from callers but not validated here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u32,
    pub room_id: u32,
    pub guest_id: u32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: ReservationStatus,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The full persisted state: the unit of load and persist.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub rooms: Vec<Room>,
    pub guests: Vec<Guest>,
    pub reservations: Vec<Reservation>,
}

// ============================================================================
// Input Types (entity minus id)
// ============================================================================

/// Guest data as supplied by a caller; the store assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl NewGuest {
    pub fn with_id(self, id: u32) -> Guest {
        Guest {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            document: self.document,
            country: self.country,
        }
    }
}

/// Reservation data as supplied by a caller; the store assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub room_id: u32,
    pub guest_id: u32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: ReservationStatus,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewReservation {
    pub fn with_id(self, id: u32) -> Reservation {
        Reservation {
            id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            total: self.total,
            notes: self.notes,
        }
    }
}

// ============================================================================
// Partial Updates
// ============================================================================

/// Field-by-field changes to a guest. `None` fields are left untouched;
/// the id can never change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub country: Option<String>,
}

impl GuestPatch {
    /// Merge the patch into `current`, returning the updated record.
    pub fn apply(&self, current: &Guest) -> Guest {
        let mut next = current.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(email) = &self.email {
            next.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            next.phone = phone.clone();
        }
        if let Some(document) = &self.document {
            next.document = Some(document.clone());
        }
        if let Some(country) = &self.country {
            next.country = Some(country.clone());
        }
        next
    }
}

/// Field-by-field changes to a reservation. Same merge rules as
/// [`GuestPatch`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPatch {
    pub room_id: Option<u32>,
    pub guest_id: Option<u32>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: Option<ReservationStatus>,
    pub total: Option<f64>,
    pub notes: Option<String>,
}

impl ReservationPatch {
    /// Merge the patch into `current`, returning the updated record.
    pub fn apply(&self, current: &Reservation) -> Reservation {
        let mut next = current.clone();
        if let Some(room_id) = self.room_id {
            next.room_id = room_id;
        }
        if let Some(guest_id) = self.guest_id {
            next.guest_id = guest_id;
        }
        if let Some(check_in) = self.check_in {
            next.check_in = check_in;
        }
        if let Some(check_out) = self.check_out {
            next.check_out = check_out;
        }
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(total) = self.total {
            next.total = total;
        }
        if let Some(notes) = &self.notes {
            next.notes = Some(notes.clone());
        }
        next
    }
}
