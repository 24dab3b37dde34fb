//! Session controller
//!
//! [`RosterSession`] is the single owner of the session's mutable state: the
//! access gate and the record store. Every mutation enters through a method
//! here and is refused with [`RosterError::Locked`] until the gate has been
//! unlocked; reads are always permitted. The store itself never sees the
//! gate.

use crate::error::RosterError;
use crate::gate::{AccessGate, Authenticator, SharedSecret};
use crate::store::Roster;
use crate::types::{Draft, Field, RecordId, SessionConfig, TripRecord};

/// One session's state: gate plus roster, with gated mutation entry points
#[derive(Debug)]
pub struct RosterSession<A = SharedSecret> {
    gate: AccessGate<A>,
    store: Roster,
}

impl RosterSession<SharedSecret> {
    /// Create a locked session from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_authenticator(SharedSecret::new(config.pass_value.clone()))
    }
}

impl Default for RosterSession<SharedSecret> {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl<A: Authenticator> RosterSession<A> {
    /// Create a locked session over a custom authenticator
    #[inline]
    #[must_use]
    pub fn with_authenticator(authenticator: A) -> Self {
        Self {
            gate: AccessGate::new(authenticator),
            store: Roster::new(),
        }
    }

    /// Submit a secret; returns the unlocked state afterwards
    pub fn unlock(&mut self, secret: &str) -> bool {
        self.gate.submit(secret)
    }

    /// Whether mutations are currently permitted
    #[inline]
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    fn require_unlocked(&self) -> Result<(), RosterError> {
        if self.gate.is_unlocked() {
            Ok(())
        } else {
            tracing::debug!("mutation refused while locked");
            Err(RosterError::Locked)
        }
    }

    /// Replace one draft field verbatim
    pub fn update_draft(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.require_unlocked()?;
        self.store.update_draft(field, value);
        Ok(())
    }

    /// Commit the draft as a new record
    pub fn add(&mut self) -> Result<RecordId, RosterError> {
        self.require_unlocked()?;
        Ok(self.store.commit_draft())
    }

    /// Replace one field of an existing record verbatim
    pub fn edit_field(
        &mut self,
        id: RecordId,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.require_unlocked()?;
        self.store.edit_field(id, field, value)
    }

    /// Delete a record by id
    pub fn remove(&mut self, id: RecordId) -> Result<(), RosterError> {
        self.require_unlocked()?;
        self.store.remove(id)
    }

    /// Clear the whole collection
    pub fn clear(&mut self) -> Result<(), RosterError> {
        self.require_unlocked()?;
        self.store.clear();
        Ok(())
    }

    /// Replace the collection and id counter with imported state
    ///
    /// Entry point for an external persistence collaborator; the imported
    /// records are re-sorted and the counter clamped above every imported id.
    pub fn import(
        &mut self,
        records: Vec<TripRecord>,
        next_id: RecordId,
    ) -> Result<(), RosterError> {
        self.require_unlocked()?;
        self.store = Roster::from_parts(records, next_id);
        tracing::info!(count = self.store.len(), "roster imported");
        Ok(())
    }

    /// The records, in maintained order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        self.store.records()
    }

    /// Look up a record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&TripRecord> {
        self.store.get(id)
    }

    /// The in-progress draft
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    /// The id the next committed record will receive
    #[inline]
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        self.store.next_id()
    }
}
