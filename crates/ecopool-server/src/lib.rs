//! # Ecopool Server
//!
//! Server side of the Ecopool part.
//!
//! Each player is driven by a [`PlayerSession`]: a sequential actor owning
//! that player's authoritative state (resource stock, periods, extractions,
//! payoffs) and the paired remote view handle. The [`Coordinator`] fans the
//! lifecycle out to all sessions and joins on each step:
//!
//! ```text
//! configure → period 0 → initial extractions → ┬ continuous round
//!                                              └ discrete period loop
//!                                          → summary → payoffs
//! ```
//!
//! Records flow into a [`RecordStore`] as they are created, preserving the
//! Extraction → Period → PlayerPart ownership chain.

pub mod coordinator;
pub mod session;
pub mod storage;

pub use coordinator::{Coordinator, PartOutcome};
pub use session::PlayerSession;
pub use storage::{JsonlStore, MemoryStore, RecordStore, StoredEvent};
