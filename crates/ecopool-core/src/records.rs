//! Persisted data model
//!
//! One [`PlayerPart`] per player per part instance, owning its [`Period`]s in
//! insertion order; each period owns its [`Extraction`]s chronologically.
//! Summary-time [`CurvePoint`]s hang off the part. Mirrors the ownership
//! chain the persistence engine preserves (Extraction → Period → PlayerPart).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::DynamicType;
use crate::{EcopoolError, Result};

/// One extraction event.
///
/// Created with only the amount and the elapsed time; the economics fields
/// stay empty until the next update tick fills them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Chosen extraction amount (≥ 0)
    pub amount: f64,
    /// Seconds elapsed since the session start
    pub elapsed_secs: u64,
    /// Resource level after the tick that processed this extraction
    pub resource: Option<f64>,
    pub benefit: Option<f64>,
    /// Clamped at 0
    pub cost: Option<f64>,
    /// `benefit − cost`
    pub payoff: Option<f64>,
}

impl Extraction {
    pub fn new(amount: f64, elapsed_secs: u64) -> Self {
        Self {
            amount,
            elapsed_secs,
            resource: None,
            benefit: None,
            cost: None,
            payoff: None,
        }
    }
}

/// One period of the part. Period 0 holds only the initial extraction seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub index: u32,
    pub started_at: DateTime<Utc>,
    /// Seconds between the decision request and the remote's answer
    pub decision_time_secs: f64,
    pub period_payoff: f64,
    pub cumulative_payoff: f64,
    /// Append-only, chronological
    pub extractions: Vec<Extraction>,
}

impl Period {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            started_at: Utc::now(),
            decision_time_secs: 0.0,
            period_payoff: 0.0,
            cumulative_payoff: 0.0,
            extractions: Vec::new(),
        }
    }

    /// Append an extraction, returning its position
    pub fn push_extraction(&mut self, extraction: Extraction) -> usize {
        self.extractions.push(extraction);
        self.extractions.len() - 1
    }
}

/// Which summary series a curve point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Extraction,
    Payoff,
    Resource,
    Cost,
}

/// One summary curve point. Created only at summary time, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub kind: SeriesKind,
    pub x: f64,
    pub y: f64,
}

/// Per-player, per-part state and record root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPart {
    pub player_id: Uuid,
    pub dynamic: DynamicType,
    pub treatment: u32,
    pub trial: bool,
    /// Sequence number of this part instance within the session
    pub sequence: u32,
    pub group: Option<u32>,
    /// Current resource stock; never negative after a tick
    pub resource: f64,
    /// Cumulative payoff in experimental currency units
    pub gain_ecus: f64,
    /// Monetary payoff, `round(gain_ecus · rate, 2)`
    pub gain_euros: f64,
    /// Insertion order is period order
    pub periods: Vec<Period>,
    /// Populated at summary time only
    pub curves: Vec<CurvePoint>,
}

impl PlayerPart {
    pub fn new(player_id: Uuid, sequence: u32, group: Option<u32>) -> Self {
        Self {
            player_id,
            dynamic: DynamicType::Discrete,
            treatment: 0,
            trial: false,
            sequence,
            group,
            resource: 0.0,
            gain_ecus: 0.0,
            gain_euros: 0.0,
            periods: Vec::new(),
            curves: Vec::new(),
        }
    }

    /// Open a new period. Indices must strictly increase across the part.
    pub fn begin_period(&mut self, index: u32) -> Result<&mut Period> {
        if let Some(last) = self.periods.last() {
            if index <= last.index {
                debug!(player = %self.player_id, index, last = last.index, "period rejected");
                return Err(EcopoolError::State(format!(
                    "period {} after period {}",
                    index, last.index
                )));
            }
        }
        self.periods.push(Period::new(index));
        Ok(self.periods.last_mut().expect("just pushed"))
    }

    pub fn current_period(&self) -> Option<&Period> {
        self.periods.last()
    }

    pub fn current_period_mut(&mut self) -> Option<&mut Period> {
        self.periods.last_mut()
    }
}
