//! Part configuration
//!
//! Fixed at part start and mirrored to every remote view at configure time.
//! Each remote holds its own immutable copy; there is no process-wide
//! mutable parameter store.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{EcopoolError, Result};

/// Timing regime of the decision dynamic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicType {
    /// One decision per period, one update tick per period
    Discrete,
    /// One wall-clock round; decisions arrive as pushed extractions,
    /// updates fire on a fixed-interval timer
    Continuous,
}

/// Full configuration of one Ecopool part instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartConfig {
    /// Timing regime
    pub dynamic: DynamicType,
    /// Number of periods (discrete mode)
    pub periods: u32,
    /// Round duration in seconds (continuous mode)
    pub round_duration_secs: u64,
    /// Update tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Admissible extraction values
    pub grid: DecisionGrid,
    /// Resource pool settings
    pub resource: ResourceSettings,
    /// Economic parameters
    pub econ: EconParams,
    /// Ecu-to-currency exchange rate
    pub exchange_rate: f64,
    /// Trial run (payoffs not counted by the host framework)
    pub trial: bool,
    /// Treatment id
    pub treatment: u32,
    /// Lower bound of the simulated resampling interval (continuous mode), ms
    pub resample_min_ms: u64,
    /// Upper bound of the simulated resampling interval (continuous mode), ms
    pub resample_max_ms: u64,
}

impl Default for PartConfig {
    fn default() -> Self {
        Self {
            dynamic: DynamicType::Discrete,
            periods: 10,
            round_duration_secs: 120,
            tick_interval_ms: 1000,
            grid: DecisionGrid::default(),
            resource: ResourceSettings::default(),
            econ: EconParams::default(),
            exchange_rate: 0.01,
            trial: false,
            treatment: 0,
            resample_min_ms: 2000,
            resample_max_ms: 10000,
        }
    }
}

impl PartConfig {
    /// Load configuration from environment and .env file
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(dynamic) = std::env::var("ECOPOOL_DYNAMIC") {
            cfg.dynamic = match dynamic.to_lowercase().as_str() {
                "discrete" => DynamicType::Discrete,
                "continuous" => DynamicType::Continuous,
                other => {
                    return Err(EcopoolError::Config(format!(
                        "unknown dynamic type: {other}"
                    )))
                }
            };
        }
        if let Ok(val) = std::env::var("ECOPOOL_PERIODS") {
            if let Ok(v) = val.parse() {
                cfg.periods = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_ROUND_DURATION_SECS") {
            if let Ok(v) = val.parse() {
                cfg.round_duration_secs = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_TICK_INTERVAL_MS") {
            if let Ok(v) = val.parse() {
                cfg.tick_interval_ms = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_INITIAL_STOCK") {
            if let Ok(v) = val.parse() {
                cfg.resource.initial_stock = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_GROWTH") {
            if let Ok(v) = val.parse() {
                cfg.resource.growth = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_EXCHANGE_RATE") {
            if let Ok(v) = val.parse() {
                cfg.exchange_rate = v;
            }
        }
        if let Ok(val) = std::env::var("ECOPOOL_TRIAL") {
            cfg.trial = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(cfg)
    }

    /// Update tick interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Continuous round duration
    pub fn round_duration(&self) -> Duration {
        Duration::from_secs(self.round_duration_secs)
    }
}

/// Admissible extraction values: `min, min + step, …` up to (excluding) `max`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for DecisionGrid {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
            step: 1.0,
        }
    }
}

impl DecisionGrid {
    /// Materialize the grid values
    pub fn values(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut v = self.min;
        while v < self.max {
            out.push(v);
            v += self.step;
        }
        out
    }
}

/// Shared renewable resource pool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSettings {
    /// Stock at part start
    pub initial_stock: f64,
    /// Growth added at each update tick
    pub growth: f64,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            initial_stock: 100.0,
            growth: 5.0,
        }
    }
}

/// Economic parameters of the extraction game
///
/// `benefit(e) = a·e − (b/2)·e²`, `cost(e, R) = e·(c0 − c1·R)` clamped at 0,
/// `r` is the instantaneous discount rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconParams {
    pub a: f64,
    pub b: f64,
    pub c0: f64,
    pub c1: f64,
    pub r: f64,
}

impl Default for EconParams {
    fn default() -> Self {
        Self {
            a: 2.5,
            b: 0.1,
            c0: 1.0,
            c1: 0.008,
            r: 0.05,
        }
    }
}
