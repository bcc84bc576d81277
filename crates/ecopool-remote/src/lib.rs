//! # Ecopool Remote
//!
//! Client side of the Ecopool part: the per-player remote view controller.
//!
//! The controller answers the server's lifecycle calls (`configure`,
//! `new_period`, decision and summary requests), keeps the rolling plot
//! series the presentation layer draws from, and derives a
//! continuously-updated text summary. Decisions come either from a
//! simulated policy (uniform sampling over the configured decision grid) or
//! from interactive input fed through a channel by the excluded GUI layer.

pub mod policy;
pub mod series;
pub mod view;

pub use series::PlotSeries;
pub use view::{InteractiveHandle, RemoteViewController};
