//! # Ecopool Core
//!
//! Shared foundation for the Ecopool experiment part: a common-pool
//! resource-extraction game plugged into a multi-party experiment server.
//!
//! This crate holds everything both sides of the wire agree on:
//!
//! - **Errors**: unified [`EcopoolError`] and [`Result`] alias
//! - **Configuration**: [`PartConfig`], fixed at part start and mirrored to
//!   every remote view
//! - **Model**: the pure resource/payoff functions ([`model`])
//! - **Records**: the persisted data model ([`records`]): part, periods,
//!   extractions, summary curves
//! - **Protocol**: snapshot payloads and the `RemoteView`/`ExtractionSink`
//!   contracts between a player's server-side session and its remote view
//!   ([`proto`])
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   RemoteView calls    ┌─────────────────────┐
//! │  PlayerSession       │ ────────────────────► │ RemoteViewController │
//! │  (server actor)      │                       │ (client)            │
//! │                      │ ◄──────────────────── │                     │
//! └──────────────────────┘   ExtractionSink push └─────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod proto;
pub mod records;

pub use config::{DecisionGrid, DynamicType, EconParams, PartConfig, ResourceSettings};
pub use error::{EcopoolError, Result};
pub use proto::{ExtractionSink, ExtractionSnapshot, PeriodSnapshot, RemoteView, SummaryCurves};
pub use records::{CurvePoint, Extraction, Period, PlayerPart, SeriesKind};

/// Ecopool part version
pub const ECOPOOL_VERSION: &str = "0.1.0";

/// Short name of the part, used in log lines and stored records
pub const PART_NAME: &str = "ecopool";
