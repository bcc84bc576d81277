//! Protocol surface between a player's server-side session and its remote
//! view.
//!
//! The transport itself (a reliable asynchronous request/response channel)
//! belongs to the host framework; here it is a trait-object boundary. The
//! server holds a [`RemoteView`] for each player, the remote holds an
//! [`ExtractionSink`] capability for the one client-originated push path
//! (continuous-mode extraction submission).

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::PartConfig;
use crate::records::{Extraction, Period};
use crate::Result;

/// Wire snapshot of one extraction record, pushed on every update tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSnapshot {
    pub amount: f64,
    pub elapsed_secs: u64,
    pub resource: Option<f64>,
    pub benefit: Option<f64>,
    pub cost: Option<f64>,
    pub payoff: Option<f64>,
}

impl From<&Extraction> for ExtractionSnapshot {
    fn from(e: &Extraction) -> Self {
        Self {
            amount: e.amount,
            elapsed_secs: e.elapsed_secs,
            resource: e.resource,
            benefit: e.benefit,
            cost: e.cost,
            payoff: e.payoff,
        }
    }
}

/// Wire snapshot of one period record, sent with the summary request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    pub index: u32,
    pub decision_time_secs: f64,
    pub period_payoff: f64,
    pub cumulative_payoff: f64,
    pub extraction_count: usize,
}

impl From<&Period> for PeriodSnapshot {
    fn from(p: &Period) -> Self {
        Self {
            index: p.index,
            decision_time_secs: p.decision_time_secs,
            period_payoff: p.period_payoff,
            cumulative_payoff: p.cumulative_payoff,
            extraction_count: p.extractions.len(),
        }
    }
}

/// The four named point series returned by the remote at summary time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryCurves {
    pub extractions: Vec<(f64, f64)>,
    /// Part payoff series; its last y is the part payoff in ecus
    pub payoffs: Vec<(f64, f64)>,
    pub resource: Vec<(f64, f64)>,
    pub cost: Vec<(f64, f64)>,
}

/// Capability the remote holds to push extractions back to its paired
/// session. Fire-and-forget from the remote's point of view.
#[async_trait]
pub trait ExtractionSink: Send + Sync {
    async fn submit_extraction(&self, amount: f64) -> Result<()>;
}

/// Operations the server invokes on a player's remote view.
///
/// Calls that return a value suspend the issuing session until the remote
/// answers; `update_data` is fire-and-forget (the caller never suspends on
/// it and lost pushes are not retried).
#[async_trait]
pub trait RemoteView: Send + Sync {
    /// Mirror the part configuration, the group composition and the push
    /// capability onto the remote. Resets all client-side series.
    async fn configure(
        &self,
        cfg: PartConfig,
        group: Vec<Uuid>,
        sink: Arc<dyn ExtractionSink>,
    ) -> Result<()>;

    /// Announce the new period index
    async fn new_period(&self, index: u32) -> Result<()>;

    /// Obtain the initial extraction, before the game starts
    async fn request_initial_extraction(&self) -> Result<f64>;

    /// Run one decision round. `start` is the authoritative start instant so
    /// elapsed-time arithmetic agrees on both sides. In continuous mode this
    /// resolves only when the end-of-round signal arrives.
    async fn request_decision(&self, start: Instant) -> Result<f64>;

    /// Push the updated extraction snapshot plus elapsed seconds
    async fn update_data(&self, snapshot: ExtractionSnapshot, elapsed_secs: u64) -> Result<()>;

    /// Signal that period accrual is over
    async fn end_update_data(&self) -> Result<()>;

    /// Send the current period record, receive the summary curves
    async fn display_summary(&self, period: PeriodSnapshot) -> Result<SummaryCurves>;

    /// Inform the remote of its final payoffs
    async fn set_payoffs(&self, euros: f64, ecus: f64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_mirrors_extraction() {
        let mut e = Extraction::new(6.0, 3);
        e.resource = Some(99.0);
        e.payoff = Some(12.5);
        let snap = ExtractionSnapshot::from(&e);
        assert_eq!(snap.amount, 6.0);
        assert_eq!(snap.elapsed_secs, 3);
        assert_eq!(snap.resource, Some(99.0));
        assert_eq!(snap.payoff, Some(12.5));
        assert!(snap.benefit.is_none());
    }

    #[test]
    fn test_summary_curves_roundtrip() {
        let curves = SummaryCurves {
            extractions: vec![(0.0, 5.0), (1.0, 3.0)],
            payoffs: vec![(0.0, 0.0), (1.0, 8.2)],
            resource: vec![(0.0, 100.0)],
            cost: vec![(0.0, 1.0)],
        };
        let json = serde_json::to_string(&curves).unwrap();
        let back: SummaryCurves = serde_json::from_str(&json).unwrap();
        assert_eq!(back.payoffs.last(), Some(&(1.0, 8.2)));
    }
}
