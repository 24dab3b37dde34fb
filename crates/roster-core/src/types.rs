//! Core types for the trip roster
//!
//! Defines the fundamental types for the session:
//! - Record identity
//! - Trip records and the in-progress draft
//! - Editable field names
//! - Session configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique record identifier
///
/// Assigned at creation from a monotonic counter; strictly increasing and
/// never reused, even after deletions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct RecordId(pub u64);

impl RecordId {
    /// First id handed out by a fresh roster
    pub const FIRST: Self = Self(0);

    /// The id that follows this one
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One committed entry in the roster
///
/// `date` is opaque text; `total_days` holds a whitespace-separated list of
/// day counts. A commit normalizes `total_days`; later per-field edits store
/// whatever text they are given, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Stable identity, unique within the session
    pub id: RecordId,
    /// Driver name
    pub name: String,
    /// Trip destination
    pub destination: String,
    /// Trip date, free text
    pub date: String,
    /// Day counts, free text
    pub total_days: String,
}

impl TripRecord {
    /// Create a blank record with the given id
    #[inline]
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
            destination: String::new(),
            date: String::new(),
            total_days: String::new(),
        }
    }

    /// Read a field by name
    #[inline]
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Destination => &self.destination,
            Field::Date => &self.date,
            Field::TotalDays => &self.total_days,
        }
    }

    /// Replace a field's value verbatim
    ///
    /// The id is not addressable here; identity never changes after creation.
    #[inline]
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Destination => &mut self.destination,
            Field::Date => &mut self.date,
            Field::TotalDays => &mut self.total_days,
        };
        *slot = value.into();
    }
}

/// The in-progress record template used by the add operation
///
/// Record-shaped scratch value; carries the id the next committed record will
/// receive. Cleared back to blanks (id advanced) after each successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Draft {
    /// Id reserved for the next committed record
    pub id: RecordId,
    /// Driver name
    pub name: String,
    /// Trip destination
    pub destination: String,
    /// Trip date, free text
    pub date: String,
    /// Day counts, free text
    pub total_days: String,
}

impl Draft {
    /// Blank draft reserving the given id
    #[inline]
    #[must_use]
    pub fn blank(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Replace a draft field's value verbatim
    #[inline]
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Destination => &mut self.destination,
            Field::Date => &mut self.date,
            Field::TotalDays => &mut self.total_days,
        };
        *slot = value.into();
    }
}

/// Editable record fields
///
/// The record id is deliberately not a variant: a by-name field replace can
/// never touch identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Driver name
    Name,
    /// Trip destination
    Destination,
    /// Trip date
    Date,
    /// Day counts
    TotalDays,
}

impl Field {
    /// All editable fields, in display order
    pub const ALL: [Self; 4] = [Self::Name, Self::Destination, Self::Date, Self::TotalDays];

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Destination => "destination",
            Self::Date => "date",
            Self::TotalDays => "total-days",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = crate::error::RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "destination" => Ok(Self::Destination),
            "date" => Ok(Self::Date),
            "total-days" | "total_days" | "totaldays" => Ok(Self::TotalDays),
            other => Err(crate::error::RosterError::UnknownField(other.to_string())),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pass-value the gate compares submitted secrets against
    pub pass_value: String,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different pass-value
    #[inline]
    #[must_use]
    pub fn with_pass_value(mut self, pass_value: impl Into<String>) -> Self {
        self.pass_value = pass_value.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pass_value: "2015".to_string(),
        }
    }
}
