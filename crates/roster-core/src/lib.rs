//! Trip Roster Core
//!
//! The in-memory, session-scoped state behind the driver trip roster:
//! - Grants write access after a shared-secret check
//! - Keeps an ordered collection of trip records plus an in-progress draft
//! - Normalizes free-text day counts on commit
//! - Re-sorts the collection by minimum day count after every mutation
//!
//! # Example
//!
//! ```rust
//! use roster_core::{Field, RosterSession, SessionConfig};
//!
//! let mut session = RosterSession::new(&SessionConfig::default());
//! session.unlock("2015");
//!
//! session.update_draft(Field::Name, "Mare").unwrap();
//! session.update_draft(Field::TotalDays, "10 2").unwrap();
//! let id = session.add().unwrap();
//!
//! assert_eq!(session.get(id).unwrap().total_days, "2 10");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod gate;
pub mod normalize;
pub mod order;
pub mod session;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use error::RosterError;
pub use gate::{AccessGate, Authenticator, SharedSecret};
pub use normalize::{day_key, normalize, DayKey};
pub use session::RosterSession;
pub use store::Roster;
pub use types::{Draft, Field, RecordId, SessionConfig, TripRecord};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the trip roster
    pub use crate::{
        Field, RecordId, Roster, RosterError, RosterSession, SessionConfig, TripRecord,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
