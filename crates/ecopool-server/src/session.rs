//! Player session actor
//!
//! One sequential actor per player. The actor exclusively owns the player's
//! [`PlayerPart`] and processes lifecycle calls, pushed extractions and the
//! periodic update tick from a single `select!` loop, so no two mutations of
//! one player's state can ever interleave. The cloneable [`PlayerSession`]
//! handle is what the coordinator fans out to.
//!
//! A decision round must not stall the loop: the remote call is spawned off
//! and its resolution re-enters the actor as a message, so ticks and pushed
//! extractions keep flowing while the player decides.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, Interval};
use tracing::{debug, info, warn};
use uuid::Uuid;

use ecopool_core::{
    model, CurvePoint, DynamicType, EcopoolError, Extraction, ExtractionSink, ExtractionSnapshot,
    PartConfig, PeriodSnapshot, PlayerPart, RemoteView, Result, SeriesKind,
};

use crate::storage::RecordStore;

/// Lifecycle phase of a session, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unconfigured,
    Configured,
    AwaitingInitialExtraction,
    DecisionLoop,
    AwaitingSummary,
    Finalized,
}

enum SessionMsg {
    Configure {
        reply: oneshot::Sender<Result<()>>,
    },
    NewPeriod {
        index: u32,
        reply: oneshot::Sender<Result<()>>,
    },
    SetInitialExtraction {
        reply: oneshot::Sender<Result<()>>,
    },
    DisplayDecision {
        start: Instant,
        reply: oneshot::Sender<Result<()>>,
    },
    DecisionReturned {
        result: Result<f64>,
        start: Instant,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Push path: the remote submitted an extraction on its own initiative
    SubmitExtraction {
        amount: f64,
    },
    StartTicks,
    TickOnce,
    EndTicks {
        reply: oneshot::Sender<Result<()>>,
    },
    DisplaySummary {
        reply: oneshot::Sender<Result<()>>,
    },
    FinalizePayoff {
        reply: oneshot::Sender<Result<f64>>,
    },
    Part {
        reply: oneshot::Sender<PlayerPart>,
    },
}

/// Handle to one player's session actor
#[derive(Clone)]
pub struct PlayerSession {
    player_id: Uuid,
    tx: mpsc::Sender<SessionMsg>,
}

impl PlayerSession {
    /// Spawn the actor for one player.
    ///
    /// `group_members` is the composition mirrored to the remote at
    /// configure time; `group` is the stored group id.
    pub fn spawn(
        player_id: Uuid,
        sequence: u32,
        group: Option<u32>,
        group_members: Vec<Uuid>,
        cfg: PartConfig,
        remote: Arc<dyn RemoteView>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let actor = SessionActor {
            cfg,
            part: PlayerPart::new(player_id, sequence, group),
            group: group_members,
            remote,
            store,
            tx: tx.clone(),
            phase: Phase::Unconfigured,
            time_start: None,
            current: None,
        };
        tokio::spawn(actor.run(rx));
        Self { player_id, tx }
    }

    pub fn player_id(&self) -> Uuid {
        self.player_id
    }

    /// Capability the remote uses to push extractions back to this session
    pub fn extraction_sink(&self) -> Arc<dyn ExtractionSink> {
        Arc::new(SessionSink {
            tx: self.tx.clone(),
        })
    }

    pub async fn configure(&self) -> Result<()> {
        self.call(|reply| SessionMsg::Configure { reply }).await
    }

    pub async fn new_period(&self, index: u32) -> Result<()> {
        self.call(|reply| SessionMsg::NewPeriod { index, reply })
            .await
    }

    pub async fn set_initial_extraction(&self) -> Result<()> {
        self.call(|reply| SessionMsg::SetInitialExtraction { reply })
            .await
    }

    /// Run one decision round. Suspends until the remote answers (or, in
    /// continuous mode, until the end-of-round signal resolves the wait).
    pub async fn display_decision(&self, start: Instant) -> Result<()> {
        self.call(|reply| SessionMsg::DisplayDecision { start, reply })
            .await
    }

    /// Start the fixed-interval update ticker (continuous mode)
    pub async fn start_ticks(&self) -> Result<()> {
        self.send(SessionMsg::StartTicks).await
    }

    /// Apply a single update tick (discrete mode); not awaited on content
    pub async fn tick_once(&self) -> Result<()> {
        self.send(SessionMsg::TickOnce).await
    }

    /// Stop the ticker and signal the remote that accrual is over
    pub async fn end_update_ticks(&self) -> Result<()> {
        self.call(|reply| SessionMsg::EndTicks { reply }).await
    }

    pub async fn display_summary(&self) -> Result<()> {
        self.call(|reply| SessionMsg::DisplaySummary { reply }).await
    }

    /// Convert the ecu payoff to money and inform the remote. Idempotent.
    pub async fn finalize_payoff(&self) -> Result<f64> {
        self.call(|reply| SessionMsg::FinalizePayoff { reply }).await
    }

    /// Snapshot of the player's part record
    pub async fn part(&self) -> Result<PlayerPart> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionMsg::Part { reply }).await?;
        rx.await
            .map_err(|_| EcopoolError::Channel("session actor gone".into()))
    }

    async fn call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T>>) -> SessionMsg,
    ) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.send(make(reply)).await?;
        rx.await
            .map_err(|_| EcopoolError::Channel("session actor gone".into()))?
    }

    async fn send(&self, msg: SessionMsg) -> Result<()> {
        self.tx
            .send(msg)
            .await
            .map_err(|_| EcopoolError::Channel("session actor gone".into()))
    }
}

struct SessionSink {
    tx: mpsc::Sender<SessionMsg>,
}

#[async_trait]
impl ExtractionSink for SessionSink {
    async fn submit_extraction(&self, amount: f64) -> Result<()> {
        self.tx
            .send(SessionMsg::SubmitExtraction { amount })
            .await
            .map_err(|_| EcopoolError::Channel("session actor gone".into()))
    }
}

struct SessionActor {
    cfg: PartConfig,
    part: PlayerPart,
    group: Vec<Uuid>,
    remote: Arc<dyn RemoteView>,
    store: Arc<dyn RecordStore>,
    /// Self-handle, used by the sink and by spawned decision calls
    tx: mpsc::Sender<SessionMsg>,
    phase: Phase,
    /// Authoritative session start, basis of all elapsed-time arithmetic
    time_start: Option<Instant>,
    /// Location `(period slot, extraction slot)` of the extraction the next
    /// tick will process
    current: Option<(usize, usize)>,
}

impl SessionActor {
    async fn run(mut self, mut rx: mpsc::Receiver<SessionMsg>) {
        let mut ticker: Option<Interval> = None;
        loop {
            tokio::select! {
                maybe_msg = rx.recv() => {
                    let Some(msg) = maybe_msg else { break };
                    match msg {
                        SessionMsg::Configure { reply } => {
                            let _ = reply.send(self.configure().await);
                        }
                        SessionMsg::NewPeriod { index, reply } => {
                            let _ = reply.send(self.new_period(index).await);
                        }
                        SessionMsg::SetInitialExtraction { reply } => {
                            let _ = reply.send(self.set_initial_extraction().await);
                        }
                        SessionMsg::DisplayDecision { start, reply } => {
                            self.display_decision(start, reply);
                        }
                        SessionMsg::DecisionReturned { result, start, reply } => {
                            let _ = reply.send(self.decision_returned(result, start));
                        }
                        SessionMsg::SubmitExtraction { amount } => {
                            self.submit_extraction(amount);
                        }
                        SessionMsg::StartTicks => {
                            let period = self.cfg.tick_interval();
                            ticker = Some(time::interval_at(Instant::now() + period, period));
                        }
                        SessionMsg::TickOnce => {
                            self.update_tick();
                        }
                        SessionMsg::EndTicks { reply } => {
                            ticker = None;
                            let _ = reply.send(self.remote.end_update_data().await);
                        }
                        SessionMsg::DisplaySummary { reply } => {
                            let _ = reply.send(self.display_summary().await);
                        }
                        SessionMsg::FinalizePayoff { reply } => {
                            let _ = reply.send(self.finalize_payoff().await);
                        }
                        SessionMsg::Part { reply } => {
                            let _ = reply.send(self.part.clone());
                        }
                    }
                }
                _ = next_tick(&mut ticker) => {
                    self.update_tick();
                }
            }
        }
        debug!(player = %self.part.player_id, phase = ?self.phase, "session actor stopped");
    }

    async fn configure(&mut self) -> Result<()> {
        debug!(player = %self.part.player_id, "configure");
        self.part.dynamic = self.cfg.dynamic;
        self.part.treatment = self.cfg.treatment;
        self.part.trial = self.cfg.trial;
        self.part.resource = self.cfg.resource.initial_stock;
        // the remote gets a capability handle, never the session itself
        let sink: Arc<dyn ExtractionSink> = Arc::new(SessionSink {
            tx: self.tx.clone(),
        });
        self.remote
            .configure(self.cfg.clone(), self.group.clone(), sink)
            .await?;
        self.phase = Phase::Configured;
        info!(player = %self.part.player_id, "configured");
        Ok(())
    }

    async fn new_period(&mut self, index: u32) -> Result<()> {
        debug!(player = %self.part.player_id, period = index, "new period");
        self.part.begin_period(index)?;
        if let Some(period) = self.part.current_period() {
            self.store.period_created(self.part.player_id, period)?;
        }
        self.remote.new_period(index).await?;
        info!(player = %self.part.player_id, period = index, "ready for period");
        Ok(())
    }

    async fn set_initial_extraction(&mut self) -> Result<()> {
        self.phase = Phase::AwaitingInitialExtraction;
        // needed by the push path before the first decision round
        self.time_start = Some(Instant::now());
        let initial = self.remote.request_initial_extraction().await?;
        self.record_extraction(initial, 0)?;
        self.phase = Phase::DecisionLoop;
        Ok(())
    }

    /// Spawn the remote decision call so the actor keeps servicing ticks and
    /// pushed extractions while the player decides
    fn display_decision(&mut self, start: Instant, reply: oneshot::Sender<Result<()>>) {
        debug!(player = %self.part.player_id, "decision");
        self.time_start = Some(start);
        self.phase = Phase::DecisionLoop;
        let remote = Arc::clone(&self.remote);
        let tx = self.tx.clone();
        let player = self.part.player_id;
        tokio::spawn(async move {
            let result = remote.request_decision(start).await;
            let msg = SessionMsg::DecisionReturned {
                result,
                start,
                reply,
            };
            if tx.send(msg).await.is_err() {
                warn!(player = %player, "session actor gone before the decision returned");
            }
        });
    }

    fn decision_returned(&mut self, result: Result<f64>, start: Instant) -> Result<()> {
        let extraction = result?;
        let latency = start.elapsed().as_secs_f64();
        if let Some(period) = self.part.current_period_mut() {
            period.decision_time_secs = latency;
        }
        // in continuous mode extractions arrive through the push path instead
        if self.cfg.dynamic == DynamicType::Discrete {
            self.record_extraction(extraction, self.elapsed_secs())?;
        }
        info!(player = %self.part.player_id, latency, "decision received");
        Ok(())
    }

    fn submit_extraction(&mut self, amount: f64) {
        let elapsed = self.elapsed_secs();
        if let Err(err) = self.record_extraction(amount, elapsed) {
            warn!(player = %self.part.player_id, %err, "pushed extraction dropped");
        }
    }

    fn record_extraction(&mut self, amount: f64, elapsed_secs: u64) -> Result<(usize, usize)> {
        info!(player = %self.part.player_id, amount, elapsed_secs, "extraction");
        let period_slot = self.part.periods.len().checked_sub(1).ok_or_else(|| {
            EcopoolError::State("extraction received before any period".into())
        })?;
        let period = &mut self.part.periods[period_slot];
        let period_index = period.index;
        let slot = period.push_extraction(Extraction::new(amount, elapsed_secs));
        self.store.extraction_recorded(
            self.part.player_id,
            period_index,
            &self.part.periods[period_slot].extractions[slot],
        )?;
        self.current = Some((period_slot, slot));
        Ok((period_slot, slot))
    }

    /// One update tick: grow the pool, apply (or zero out) the current
    /// extraction, fill its economics, push the snapshot to the remote.
    fn update_tick(&mut self) {
        let elapsed = self.elapsed_secs();
        let Some(mut loc) = self.current else {
            // before the initial extraction there is nothing to update
            debug!(player = %self.part.player_id, "tick with no current extraction, skipped");
            return;
        };

        let pending = self.part.periods[loc.0].extractions[loc.1].amount;
        let outcome =
            model::advance_resource(self.part.resource, self.cfg.resource.growth, pending);
        if outcome.forced_zero {
            debug!(
                player = %self.part.player_id,
                pending, "extraction overdraws the pool, substituting zero"
            );
            match self.record_extraction(0.0, elapsed) {
                Ok(new_loc) => loc = new_loc,
                Err(err) => {
                    warn!(player = %self.part.player_id, %err, "zero substitution failed");
                    return;
                }
            }
        }
        self.part.resource = outcome.resource;

        let seed_period = self.part.periods[loc.0].index == 0;
        let resource = self.part.resource;
        let econ = self.cfg.econ.clone();
        {
            let extraction = &mut self.part.periods[loc.0].extractions[loc.1];
            extraction.resource = Some(resource);
            if !seed_period {
                let benefit = model::benefit(&econ, extraction.amount);
                let cost = model::cost(&econ, extraction.amount, resource);
                extraction.benefit = Some(benefit);
                extraction.cost = Some(cost);
                extraction.payoff = Some(benefit - cost);
            }
            // the initial extraction never runs through cost/payoff
        }

        let period_index = self.part.periods[loc.0].index;
        let extraction = &self.part.periods[loc.0].extractions[loc.1];
        if let Err(err) =
            self.store
                .extraction_updated(self.part.player_id, period_index, extraction)
        {
            warn!(player = %self.part.player_id, %err, "tick update not persisted");
        }

        // fire-and-forget: the tick never suspends on the remote, and lost
        // pushes are not retried
        let snapshot = ExtractionSnapshot::from(extraction);
        let remote = Arc::clone(&self.remote);
        let player = self.part.player_id;
        tokio::spawn(async move {
            if let Err(err) = remote.update_data(snapshot, elapsed).await {
                warn!(player = %player, %err, "update push dropped");
            }
        });
    }

    async fn display_summary(&mut self) -> Result<()> {
        debug!(player = %self.part.player_id, "summary");
        self.phase = Phase::AwaitingSummary;
        let snapshot = {
            let period = self
                .part
                .current_period()
                .ok_or_else(|| EcopoolError::State("no period to summarize".into()))?;
            PeriodSnapshot::from(period)
        };
        let curves = self.remote.display_summary(snapshot).await?;

        let mut points = Vec::new();
        for &(x, y) in &curves.extractions {
            points.push(CurvePoint {
                kind: SeriesKind::Extraction,
                x,
                y,
            });
        }
        for &(x, y) in &curves.payoffs {
            points.push(CurvePoint {
                kind: SeriesKind::Payoff,
                x,
                y,
            });
        }
        for &(x, y) in &curves.resource {
            points.push(CurvePoint {
                kind: SeriesKind::Resource,
                x,
                y,
            });
        }
        for &(x, y) in &curves.cost {
            points.push(CurvePoint {
                kind: SeriesKind::Cost,
                x,
                y,
            });
        }
        // the part payoff is the tail of the payoff series
        if let Some(&(_, ecus)) = curves.payoffs.last() {
            self.part.gain_ecus = ecus;
        }
        self.store.curves_recorded(self.part.player_id, &points)?;
        self.part.curves.extend(points);
        info!(player = %self.part.player_id, "summary done");
        Ok(())
    }

    async fn finalize_payoff(&mut self) -> Result<f64> {
        self.part.gain_euros = round2(self.part.gain_ecus * self.cfg.exchange_rate);
        self.remote
            .set_payoffs(self.part.gain_euros, self.part.gain_ecus)
            .await?;
        self.store.part_finalized(&self.part)?;
        self.phase = Phase::Finalized;
        info!(
            player = %self.part.player_id,
            ecus = self.part.gain_ecus,
            euros = self.part.gain_euros,
            "part payoff"
        );
        Ok(self.part.gain_euros)
    }

    fn elapsed_secs(&self) -> u64 {
        self.time_start.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopool_core::{ResourceSettings, SummaryCurves};
    use parking_lot::Mutex;

    use crate::storage::{MemoryStore, StoredEvent};

    struct ScriptedRemote {
        initial: f64,
        decision: f64,
        summary: SummaryCurves,
        updates: Mutex<Vec<(ExtractionSnapshot, u64)>>,
        payoffs: Mutex<Option<(f64, f64)>>,
    }

    impl ScriptedRemote {
        fn new(initial: f64, decision: f64) -> Self {
            Self {
                initial,
                decision,
                summary: SummaryCurves {
                    extractions: vec![(1.0, 10.0)],
                    payoffs: vec![(0.0, 40.0), (1.0, 100.0)],
                    resource: vec![(1.0, 95.0)],
                    cost: vec![(1.0, 2.0)],
                },
                updates: Mutex::new(Vec::new()),
                payoffs: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl RemoteView for ScriptedRemote {
        async fn configure(
            &self,
            _cfg: PartConfig,
            _group: Vec<Uuid>,
            _sink: Arc<dyn ExtractionSink>,
        ) -> Result<()> {
            Ok(())
        }

        async fn new_period(&self, _index: u32) -> Result<()> {
            Ok(())
        }

        async fn request_initial_extraction(&self) -> Result<f64> {
            Ok(self.initial)
        }

        async fn request_decision(&self, _start: Instant) -> Result<f64> {
            Ok(self.decision)
        }

        async fn update_data(&self, snapshot: ExtractionSnapshot, elapsed: u64) -> Result<()> {
            self.updates.lock().push((snapshot, elapsed));
            Ok(())
        }

        async fn end_update_data(&self) -> Result<()> {
            Ok(())
        }

        async fn display_summary(&self, _period: PeriodSnapshot) -> Result<SummaryCurves> {
            Ok(self.summary.clone())
        }

        async fn set_payoffs(&self, euros: f64, ecus: f64) -> Result<()> {
            *self.payoffs.lock() = Some((euros, ecus));
            Ok(())
        }
    }

    fn session(
        cfg: PartConfig,
        remote: Arc<ScriptedRemote>,
        store: Arc<MemoryStore>,
    ) -> PlayerSession {
        PlayerSession::spawn(
            Uuid::new_v4(),
            1,
            Some(1),
            vec![],
            cfg,
            remote,
            store,
        )
    }

    #[tokio::test]
    async fn test_discrete_decision_records_extraction_with_economics() {
        let cfg = PartConfig::default();
        let econ = cfg.econ.clone();
        let remote = Arc::new(ScriptedRemote::new(10.0, 10.0));
        let store = Arc::new(MemoryStore::new());
        let s = session(cfg, Arc::clone(&remote), store);

        s.configure().await.unwrap();
        s.new_period(0).await.unwrap();
        s.set_initial_extraction().await.unwrap();
        s.tick_once().await.unwrap();
        s.new_period(1).await.unwrap();
        s.display_decision(Instant::now()).await.unwrap();
        s.tick_once().await.unwrap();

        let part = s.part().await.unwrap();
        // seed tick: 100 + 5 − 10 = 95; period-1 tick: 95 + 5 − 10 = 90
        assert_eq!(part.resource, 90.0);
        assert_eq!(part.periods.len(), 2);
        let seed = &part.periods[0].extractions[0];
        assert_eq!(seed.amount, 10.0);
        assert_eq!(seed.resource, Some(95.0));
        assert!(seed.payoff.is_none(), "seed extraction has no economics");
        let e = &part.periods[1].extractions[0];
        assert_eq!(e.amount, 10.0);
        assert_eq!(e.resource, Some(90.0));
        let benefit = model::benefit(&econ, 10.0);
        let cost = model::cost(&econ, 10.0, 90.0);
        assert_eq!(e.benefit, Some(benefit));
        assert_eq!(e.cost, Some(cost));
        assert_eq!(e.payoff, Some(benefit - cost));
    }

    #[tokio::test]
    async fn test_overdraw_substitutes_zero_extraction() {
        let mut cfg = PartConfig::default();
        cfg.resource = ResourceSettings {
            initial_stock: 5.0,
            growth: 2.0,
        };
        let remote = Arc::new(ScriptedRemote::new(20.0, 0.0));
        let store = Arc::new(MemoryStore::new());
        let s = session(cfg, remote, store);

        s.configure().await.unwrap();
        s.new_period(0).await.unwrap();
        s.set_initial_extraction().await.unwrap();
        s.tick_once().await.unwrap();

        let part = s.part().await.unwrap();
        // 20 > 5 + 2: forced to zero, stock keeps the grown value
        assert_eq!(part.resource, 7.0);
        let extractions = &part.periods[0].extractions;
        assert_eq!(extractions.len(), 2);
        assert_eq!(extractions[0].amount, 20.0);
        assert_eq!(extractions[1].amount, 0.0);
        assert_eq!(extractions[1].resource, Some(7.0));
    }

    #[tokio::test]
    async fn test_finalize_payoff_is_idempotent() {
        let cfg = PartConfig::default();
        let rate = cfg.exchange_rate;
        let remote = Arc::new(ScriptedRemote::new(5.0, 5.0));
        let store = Arc::new(MemoryStore::new());
        let s = session(cfg, Arc::clone(&remote), store);

        s.configure().await.unwrap();
        s.new_period(0).await.unwrap();
        s.set_initial_extraction().await.unwrap();
        s.display_summary().await.unwrap();

        let first = s.finalize_payoff().await.unwrap();
        let second = s.finalize_payoff().await.unwrap();
        assert_eq!(first, second);
        let part = s.part().await.unwrap();
        // gain in ecus comes from the tail of the payoff series
        assert_eq!(part.gain_ecus, 100.0);
        assert_eq!(part.gain_euros, round2(100.0 * rate));
        assert_eq!(remote.payoffs.lock().unwrap(), (part.gain_euros, 100.0));
    }

    #[tokio::test]
    async fn test_pushed_extraction_lands_in_current_period() {
        let cfg = PartConfig::default();
        let remote = Arc::new(ScriptedRemote::new(3.0, 0.0));
        let store = Arc::new(MemoryStore::new());
        let s = session(cfg, remote, Arc::clone(&store));

        s.configure().await.unwrap();
        s.new_period(0).await.unwrap();
        s.set_initial_extraction().await.unwrap();
        s.new_period(1).await.unwrap();
        let sink = s.extraction_sink();
        sink.submit_extraction(8.0).await.unwrap();

        let part = s.part().await.unwrap();
        assert_eq!(part.periods[1].extractions.len(), 1);
        assert_eq!(part.periods[1].extractions[0].amount, 8.0);

        // the store saw period 0, seed, period 1, push, in that order
        let events = store.events();
        assert!(matches!(
            events.as_slice(),
            [
                StoredEvent::PeriodCreated { index: 0, .. },
                StoredEvent::ExtractionRecorded { period: 0, .. },
                StoredEvent::PeriodCreated { index: 1, .. },
                StoredEvent::ExtractionRecorded { period: 1, .. },
            ]
        ));
    }

    #[tokio::test]
    async fn test_out_of_order_period_is_rejected() {
        let cfg = PartConfig::default();
        let remote = Arc::new(ScriptedRemote::new(3.0, 0.0));
        let store = Arc::new(MemoryStore::new());
        let s = session(cfg, remote, store);

        s.configure().await.unwrap();
        s.new_period(1).await.unwrap();
        assert!(s.new_period(1).await.is_err());
        assert!(s.new_period(0).await.is_err());
        assert!(s.new_period(2).await.is_ok());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005 * 100.0 / 100.0), 1.0);
        assert_eq!(round2(123.4567), 123.46);
        assert_eq!(round2(0.0), 0.0);
    }
}
