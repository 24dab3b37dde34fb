//! Record store
//!
//! [`Roster`] owns the ordered collection, the in-progress draft and the id
//! counter. Every mutating method composes its state change with an order
//! maintenance pass before returning, so the ordering invariant holds after
//! add, edit, delete and reset alike.
//!
//! The store knows nothing about the access gate; write permission is
//! enforced one level up, at the session boundary. That keeps the store pure
//! and testable on its own.

use crate::error::RosterError;
use crate::normalize::normalize;
use crate::order;
use crate::types::{Draft, Field, RecordId, TripRecord};

/// The ordered record collection, its draft and the id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    records: Vec<TripRecord>,
    draft: Draft,
}

impl Roster {
    /// Create an empty roster
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: Draft::blank(RecordId::FIRST),
        }
    }

    /// Rebuild a roster from previously exported records and counter
    ///
    /// The counter is clamped above every imported id so later commits can
    /// never collide with an imported record. The collection is re-sorted on
    /// entry; the draft starts blank.
    #[must_use]
    pub fn from_parts(records: Vec<TripRecord>, next_id: RecordId) -> Self {
        let min_next = records
            .iter()
            .map(|record| record.id.next())
            .max()
            .unwrap_or(RecordId::FIRST);
        let mut roster = Self {
            records,
            draft: Draft::blank(next_id.max(min_next)),
        };
        order::restore(&mut roster.records);
        roster
    }

    /// Replace one draft field verbatim
    #[inline]
    pub fn update_draft(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Commit the draft as a new record
    ///
    /// The draft's day-count text is normalized on the way in; the other
    /// fields are taken as-is. Afterwards the draft is blank again and the
    /// counter has advanced, so ids stay strictly increasing regardless of
    /// how many records were deleted in between.
    pub fn commit_draft(&mut self) -> RecordId {
        let id = self.draft.id;
        let draft = std::mem::replace(&mut self.draft, Draft::blank(id.next()));
        self.records.push(TripRecord {
            id,
            name: draft.name,
            destination: draft.destination,
            date: draft.date,
            total_days: normalize(&draft.total_days),
        });
        order::restore(&mut self.records);
        tracing::info!(%id, "record committed");
        id
    }

    /// Replace one field of the record with the given id, verbatim
    ///
    /// No normalization: edited day-count text is stored exactly as given and
    /// only re-keyed, never rewritten, by the order pass.
    pub fn edit_field(
        &mut self,
        id: RecordId,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RosterError::RecordNotFound { id })?;
        record.set_field(field, value);
        order::restore(&mut self.records);
        tracing::info!(%id, %field, "record edited");
        Ok(())
    }

    /// Delete the record with the given id
    pub fn remove(&mut self, id: RecordId) -> Result<(), RosterError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RosterError::RecordNotFound { id })?;
        self.records.remove(index);
        order::restore(&mut self.records);
        tracing::info!(%id, "record deleted");
        Ok(())
    }

    /// Clear the whole collection
    ///
    /// The id counter is untouched: records committed after a reset continue
    /// the same sequence.
    pub fn clear(&mut self) {
        self.records.clear();
        order::restore(&mut self.records);
        tracing::info!("roster cleared");
    }

    /// The records, in maintained order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Look up a record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&TripRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The in-progress draft
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The id the next committed record will receive
    #[inline]
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        self.draft.id
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
