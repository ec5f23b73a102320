//! Store — async, identity-keyed, in-memory collections of [`Record`]s.
//!
//! [`MemoryStore`] is the mock backend the admin screens run against: it is
//! seeded from a fixed dataset, simulates network latency before every
//! operation commits, and hands out owned copies so no caller ever holds a
//! reference into the backing collection. The [`Repository`] trait is the
//! seam a real storage backend would implement instead; only the mock is
//! allowed to sleep.
//!
//! Ids are minted from a monotonic counter guarded by the collection lock,
//! so concurrent `create` calls can never assign the same id and a deleted
//! id is never handed out again.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::types::{Enquiry, EnquiryStatus, Student};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// Latency
// ---------------------------------------------------------------------------

/// Simulated I/O latency applied before each [`MemoryStore`] operation.
///
/// The default mirrors the ~300 ms the original mock API slept for.
/// [`Latency::none`] keeps tests instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const DEFAULT_MILLIS: u64 = 300;

    pub fn from_millis(millis: u64) -> Self {
        Latency(Duration::from_millis(millis))
    }

    /// No artificial delay at all.
    pub fn none() -> Self {
        Latency(Duration::ZERO)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::from_millis(Self::DEFAULT_MILLIS)
    }
}

// ---------------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------------

/// The asynchronous CRUD + query contract the admin screens consume.
///
/// Every operation either fully succeeds or fully fails; there is no partial
/// mutation, no retry, and no cancellation of an operation that has already
/// been issued.
#[allow(async_fn_in_trait)]
pub trait Repository<T: Record> {
    /// All current records, in insertion order.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// The record with the given id, or [`Error::NotFound`].
    async fn get(&self, id: u32) -> Result<T>;

    /// Append a new record built from `draft` with a freshly assigned id
    /// and store-side defaults filled in. Returns the stored record.
    async fn create(&self, draft: T::Draft) -> Result<T>;

    /// Overwrite exactly the fields `patch` carries on the record with the
    /// given id. Returns the record after the merge.
    async fn update(&self, id: u32, patch: T::Patch) -> Result<T>;

    /// Remove and return the record with the given id. Permanent; the id is
    /// never reused.
    async fn delete(&self, id: u32) -> Result<T>;

    /// Records whose searchable fields case-insensitively contain `query`.
    /// An empty query matches every record.
    async fn search(&self, query: &str) -> Result<Vec<T>>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

struct Inner<T> {
    records: Vec<T>,
    next_id: u32,
}

/// Seeded in-memory implementation of [`Repository`] with simulated latency.
///
/// Cloning the store clones a handle to the same collection, so every part
/// of the application that holds one sees the same data. All state is
/// volatile; a restart starts over from the seed.
pub struct MemoryStore<T: Record> {
    inner: Arc<Mutex<Inner<T>>>,
    latency: Latency,
}

impl<T: Record> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        MemoryStore {
            inner: Arc::clone(&self.inner),
            latency: self.latency,
        }
    }
}

impl<T: Record> MemoryStore<T> {
    /// Build a store owning a copy of `seed`. The id counter starts one past
    /// the highest seeded id.
    pub fn new(seed: Vec<T>, latency: Latency) -> Self {
        let next_id = seed.iter().map(Record::id).max().unwrap_or(0) + 1;
        MemoryStore {
            inner: Arc::new(Mutex::new(Inner {
                records: seed,
                next_id,
            })),
            latency,
        }
    }

    /// An unseeded store, mostly useful in tests.
    pub fn empty(latency: Latency) -> Self {
        MemoryStore::new(Vec::new(), latency)
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    async fn simulate_io(&self) {
        let delay = self.latency.as_duration();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Filter helper shared by `search` and the typed filters: latency, then
    /// a linear scan cloning the matches out.
    async fn filtered(&self, keep: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        self.simulate_io().await;
        let inner = self.inner.lock().await;
        Ok(inner.records.iter().filter(|r| keep(r)).cloned().collect())
    }

    fn not_found(id: u32) -> Error {
        Error::NotFound { kind: T::KIND, id }
    }
}

impl<T: Record> Repository<T> for MemoryStore<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        self.simulate_io().await;
        let inner = self.inner.lock().await;
        Ok(inner.records.clone())
    }

    async fn get(&self, id: u32) -> Result<T> {
        self.simulate_io().await;
        let inner = self.inner.lock().await;
        inner
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: T::Draft) -> Result<T> {
        self.simulate_io().await;
        let today = Utc::now().date_naive();
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = T::materialize(id, draft, today);
        inner.records.push(record.clone());
        tracing::debug!(kind = T::KIND, id, "record created");
        Ok(record)
    }

    async fn update(&self, id: u32, patch: T::Patch) -> Result<T> {
        self.simulate_io().await;
        let mut inner = self.inner.lock().await;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.merge(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: u32) -> Result<T> {
        self.simulate_io().await;
        let mut inner = self.inner.lock().await;
        let index = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        let removed = inner.records.remove(index);
        tracing::debug!(kind = T::KIND, id, "record deleted");
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<T>> {
        let needle = query.to_lowercase();
        self.filtered(move |r| r.matches(&needle)).await
    }
}

// ---------------------------------------------------------------------------
// Typed filters
// ---------------------------------------------------------------------------

impl MemoryStore<Student> {
    /// Students whose course name case-insensitively contains `course`.
    pub async fn by_course(&self, course: &str) -> Result<Vec<Student>> {
        let needle = course.to_lowercase();
        self.filtered(move |s| s.course.to_lowercase().contains(&needle))
            .await
    }
}

impl MemoryStore<Enquiry> {
    /// Enquiries currently in the given pipeline status.
    pub async fn by_status(&self, status: EnquiryStatus) -> Result<Vec<Enquiry>> {
        self.filtered(move |e| e.status == status).await
    }

    /// Enquiries whose interested course case-insensitively contains `course`.
    pub async fn by_course(&self, course: &str) -> Result<Vec<Enquiry>> {
        let needle = course.to_lowercase();
        self.filtered(move |e| e.interested_course.to_lowercase().contains(&needle))
            .await
    }

    /// Enquiries due for a follow-up today or earlier. Converted enquiries
    /// are excluded; Closed ones still show up, matching the original
    /// follow-up list.
    pub async fn pending_follow_ups(&self) -> Result<Vec<Enquiry>> {
        self.pending_follow_ups_as_of(Utc::now().date_naive()).await
    }

    /// Same as [`pending_follow_ups`](Self::pending_follow_ups) against an
    /// explicit "today", for deterministic tests.
    pub async fn pending_follow_ups_as_of(&self, today: NaiveDate) -> Result<Vec<Enquiry>> {
        self.filtered(move |e| e.follow_up_pending(today)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
