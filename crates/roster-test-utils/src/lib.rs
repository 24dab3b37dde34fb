//! Testing utilities for the trip roster workspace
//!
//! Shared fixtures and builders for integration tests.

#![allow(missing_docs)]

use roster_core::{Authenticator, Field, RecordId, RosterSession, SessionConfig, TripRecord};

/// Default pass-value used by fixture sessions.
pub const TEST_PASS_VALUE: &str = "2015";

/// Authenticator that grants on any submission.
pub struct GrantAll;

impl Authenticator for GrantAll {
    fn check(&self, _secret: &str) -> bool {
        true
    }
}

pub fn record(id: u64, name: &str, total_days: &str) -> TripRecord {
    let mut record = TripRecord::new(RecordId(id));
    record.name = name.to_string();
    record.total_days = total_days.to_string();
    record
}

pub fn records_with_days(days: &[&str]) -> Vec<TripRecord> {
    days.iter()
        .enumerate()
        .map(|(i, total_days)| record(i as u64, &format!("driver-{i}"), total_days))
        .collect()
}

pub fn locked_session() -> RosterSession {
    RosterSession::new(&SessionConfig::new().with_pass_value(TEST_PASS_VALUE))
}

pub fn unlocked_session() -> RosterSession {
    let mut session = locked_session();
    assert!(session.unlock(TEST_PASS_VALUE));
    session
}

/// Unlocked session pre-populated with (name, total-days) entries.
pub fn populated_session(entries: &[(&str, &str)]) -> RosterSession {
    let mut session = unlocked_session();
    for (name, total_days) in entries {
        session.update_draft(Field::Name, *name).unwrap();
        session.update_draft(Field::TotalDays, *total_days).unwrap();
        session.add().unwrap();
    }
    session
}
