//! The entity store: sole owner of the three collections.
//!
//! Lifecycle is two states. The store starts `Unloaded`; a successful
//! load (cached snapshot or remote fetch) moves it to `Loaded` and it
//! stays there. Every mutation requires `Loaded` and writes the full
//! snapshot back through the persistence backend before returning.

use log::{debug, info};

use crate::core::{
    Guest, GuestPatch, NewGuest, NewReservation, Reservation, ReservationPatch, Result, Room,
    Snapshot, StoreError,
};
use crate::facade::StoreConfig;
use crate::remote::{HttpRemoteSource, RemoteSource};
use crate::storage::{FileCache, SnapshotCache};

/// In-memory state for the front-desk dashboard, persisted write-through.
///
/// Mutating operations take `&mut self`: the store is driven by one
/// caller at a time and carries no internal lock. Wrap it in your own
/// `Mutex` or actor if you need shared access.
///
/// # Examples
///
/// ```
/// use frontdesk::{HotelStore, MemoryCache, NewGuest, Snapshot, StaticRemoteSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = HotelStore::with_parts(
///     Box::new(MemoryCache::new()),
///     Box::new(StaticRemoteSource::new(Snapshot::default())),
/// );
/// store.initialize().await?;
///
/// let id = store.add_guest(NewGuest {
///     name: "Ana Ruiz".to_string(),
///     email: "ana@example.com".to_string(),
///     phone: "+34 600 000 001".to_string(),
///     document: None,
///     country: None,
/// })?;
/// assert_eq!(id, 1);
/// # Ok(())
/// # }
/// ```
pub struct HotelStore {
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    reservations: Vec<Reservation>,
    loaded: bool,
    cache: Box<dyn SnapshotCache>,
    remote: Box<dyn RemoteSource>,
}

impl HotelStore {
    /// Build a store from configuration: file-backed cache plus HTTP
    /// remote source.
    pub fn open(config: StoreConfig) -> Self {
        Self::with_parts(
            Box::new(FileCache::new(&config.cache_path)),
            Box::new(HttpRemoteSource::new(config.remote_url.as_str())),
        )
    }

    /// Build a store from explicitly injected backends.
    pub fn with_parts(cache: Box<dyn SnapshotCache>, remote: Box<dyn RemoteSource>) -> Self {
        Self {
            rooms: Vec::new(),
            guests: Vec::new(),
            reservations: Vec::new(),
            loaded: false,
            cache,
            remote,
        }
    }

    // ========================================================================
    // Loading & Persistence
    // ========================================================================

    /// Attempt to restore state from the persistence backend.
    ///
    /// Returns `Ok(false)` when nothing has been persisted yet. Cached
    /// data that exists but does not parse propagates as
    /// [`StoreError::CorruptCache`]; it is never silently discarded.
    pub fn restore_from_cache(&mut self) -> Result<bool> {
        let Some(snapshot) = self.cache.read()? else {
            debug!("No persisted snapshot found");
            return Ok(false);
        };
        info!(
            "Restored snapshot from cache: {} rooms, {} guests, {} reservations",
            snapshot.rooms.len(),
            snapshot.guests.len(),
            snapshot.reservations.len()
        );
        self.adopt(snapshot);
        Ok(true)
    }

    /// Load initial state, preferring the cache over the remote source.
    ///
    /// The remote source is contacted only when the cache has never been
    /// written; its snapshot is then adopted and immediately persisted.
    /// A corrupt cache fails initialization rather than falling back to
    /// the remote: falling back would re-persist fresh data over the
    /// user's local edits. Callers may clear the cache and retry.
    ///
    /// On [`StoreError::SourceUnavailable`] no state changes; the store
    /// stays `Unloaded`.
    pub async fn initialize(&mut self) -> Result<()> {
        if self.restore_from_cache()? {
            return Ok(());
        }

        let snapshot = self.remote.fetch_initial_data().await?;
        info!(
            "Fetched initial snapshot from remote: {} rooms, {} guests, {} reservations",
            snapshot.rooms.len(),
            snapshot.guests.len(),
            snapshot.reservations.len()
        );
        self.adopt(snapshot);
        self.persist()
    }

    /// Write the full current snapshot through to the persistence
    /// backend, replacing any prior value. Partial writes do not exist;
    /// every mutation re-persists the whole snapshot.
    pub fn persist(&self) -> Result<()> {
        self.cache.write(&self.snapshot())?;
        debug!(
            "Persisted snapshot: {} rooms, {} guests, {} reservations",
            self.rooms.len(),
            self.guests.len(),
            self.reservations.len()
        );
        Ok(())
    }

    fn adopt(&mut self, snapshot: Snapshot) {
        self.rooms = snapshot.rooms;
        self.guests = snapshot.guests;
        self.reservations = snapshot.reservations;
        self.loaded = true;
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(StoreError::NotLoaded)
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a reservation and return its assigned id.
    ///
    /// `room_id`/`guest_id` existence and date overlaps between
    /// reservations for the same room are deliberately not checked.
    pub fn add_reservation(&mut self, input: NewReservation) -> Result<u32> {
        self.ensure_loaded()?;
        let id = next_id(self.reservations.iter().map(|r| r.id));
        self.reservations.push(input.with_id(id));
        self.persist()?;
        Ok(id)
    }

    /// Create a guest and return its assigned id, so a caller can
    /// reference the new guest immediately (e.g. in a reservation created
    /// in the same flow).
    pub fn add_guest(&mut self, input: NewGuest) -> Result<u32> {
        self.ensure_loaded()?;
        let id = next_id(self.guests.iter().map(|g| g.id));
        self.guests.push(input.with_id(id));
        self.persist()?;
        Ok(id)
    }

    /// Merge `patch` into the reservation with `id`. Unknown ids are a
    /// no-op; nothing is re-persisted in that case.
    pub fn update_reservation(&mut self, id: u32, patch: ReservationPatch) -> Result<()> {
        self.ensure_loaded()?;
        let Some(idx) = self.reservations.iter().position(|r| r.id == id) else {
            return Ok(());
        };
        self.reservations[idx] = patch.apply(&self.reservations[idx]);
        self.persist()
    }

    /// Merge `patch` into the guest with `id`. Same no-op semantics as
    /// [`HotelStore::update_reservation`].
    pub fn update_guest(&mut self, id: u32, patch: GuestPatch) -> Result<()> {
        self.ensure_loaded()?;
        let Some(idx) = self.guests.iter().position(|g| g.id == id) else {
            return Ok(());
        };
        self.guests[idx] = patch.apply(&self.guests[idx]);
        self.persist()
    }

    /// Remove the reservation with `id` (no-op if absent) and persist.
    ///
    /// Rooms and guests have no remove operation; reservations that
    /// reference entities edited out of the data elsewhere are kept
    /// as-is, never cascaded or invalidated.
    pub fn remove_reservation(&mut self, id: u32) -> Result<()> {
        self.ensure_loaded()?;
        self.reservations.retain(|r| r.id != id);
        self.persist()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// True once any load (cached or remote) has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Owned copy of the current state, in the persistence shape.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rooms: self.rooms.clone(),
            guests: self.guests.clone(),
            reservations: self.reservations.clone(),
        }
    }
}

/// Highest existing id plus one; 1 for an empty collection.
///
/// Recomputed on every insert instead of tracking a counter, so
/// externally edited or partially deleted data never produces a
/// duplicate id.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}
