//! Session coordinator
//!
//! Drives one part instance across all players: fans every lifecycle step
//! out to the player sessions and joins on all of them before moving on
//! (barrier synchronization). Players progress independently between
//! barriers; nothing is shared across them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::time::Instant;
use tracing::info;

use ecopool_core::{DynamicType, EcopoolError, PartConfig, Result};
use uuid::Uuid;

use crate::session::PlayerSession;

/// Final per-player payoff table, sorted by player id
#[derive(Debug, Clone)]
pub struct PartOutcome {
    pub payoffs: Vec<(Uuid, f64)>,
}

/// Per-part server driving all player sessions
pub struct Coordinator {
    cfg: PartConfig,
    players: Vec<PlayerSession>,
    sequence: u32,
    stop: Arc<AtomicBool>,
}

impl Coordinator {
    pub fn new(cfg: PartConfig, players: Vec<PlayerSession>, sequence: u32) -> Self {
        Self {
            cfg,
            players,
            sequence,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Host-framework seam: raising this flag stops the discrete period loop
    /// at the next period boundary
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run the whole part: configure → period 0 → initial extractions →
    /// dynamic-specific rounds → summary → payoffs.
    pub async fn run(&self) -> Result<PartOutcome> {
        info!(
            sequence = self.sequence,
            players = self.players.len(),
            dynamic = ?self.cfg.dynamic,
            "starting part"
        );

        try_join_all(self.players.iter().map(|p| p.configure())).await?;

        // period 0 only seeds the initial extraction
        try_join_all(self.players.iter().map(|p| p.new_period(0))).await?;
        try_join_all(self.players.iter().map(|p| p.set_initial_extraction())).await?;
        for p in &self.players {
            p.tick_once().await?;
        }

        match self.cfg.dynamic {
            DynamicType::Continuous => self.run_continuous().await?,
            DynamicType::Discrete => self.run_discrete().await?,
        }

        try_join_all(self.players.iter().map(|p| p.display_summary())).await?;

        let mut payoffs = try_join_all(self.players.iter().map(|p| async move {
            let euros = p.finalize_payoff().await?;
            Ok::<_, EcopoolError>((p.player_id(), euros))
        }))
        .await?;
        payoffs.sort_by_key(|(id, _)| *id);

        info!(sequence = self.sequence, "part finished");
        Ok(PartOutcome { payoffs })
    }

    /// One logical period spanning a fixed wall-clock duration. The decision
    /// round stays open until the deadline fires; reaching it stops the
    /// tickers and resolves the outstanding decision waits.
    async fn run_continuous(&self) -> Result<()> {
        info!("period 1");
        try_join_all(self.players.iter().map(|p| p.new_period(1))).await?;

        let start = Instant::now();
        for p in &self.players {
            p.start_ticks().await?;
        }
        info!(duration_secs = self.cfg.round_duration_secs, "round started");

        let deadline = async {
            // slack past the deadline so a tick on the boundary still lands
            tokio::time::sleep(self.cfg.round_duration() + self.cfg.tick_interval() / 2).await;
            info!("round deadline reached");
            for p in &self.players {
                p.end_update_ticks().await?;
            }
            Ok::<(), EcopoolError>(())
        };
        let decisions = try_join_all(self.players.iter().map(|p| p.display_decision(start)));

        tokio::try_join!(deadline, decisions)?;
        Ok(())
    }

    /// Fixed number of periods, one decision and one tick each
    async fn run_discrete(&self) -> Result<()> {
        for period in 1..=self.cfg.periods {
            if self.stop.load(Ordering::Relaxed) {
                info!(period, "early stop requested");
                break;
            }
            info!(period, "period");
            try_join_all(self.players.iter().map(|p| p.new_period(period))).await?;

            let start = Instant::now();
            try_join_all(self.players.iter().map(|p| p.display_decision(start))).await?;

            for p in &self.players {
                p.tick_once().await?;
            }
        }
        for p in &self.players {
            p.end_update_ticks().await?;
        }
        Ok(())
    }
}
