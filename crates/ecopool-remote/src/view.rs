//! Remote view controller
//!
//! One instance per player, paired with its server-side session. Holds an
//! immutable mirror of the part configuration (set at configure time), the
//! rolling plot series, and the growing status-text history. Answers the
//! server's decision and summary requests either from the simulated policy
//! or from interactive input channels fed by the presentation layer.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use ecopool_core::{
    model, proto::RemoteView, DynamicType, EcopoolError, ExtractionSink, ExtractionSnapshot,
    PartConfig, PeriodSnapshot, Result, SummaryCurves,
};

use crate::policy;
use crate::series::PlotSeries;

use async_trait::async_trait;

/// Senders the presentation layer uses to feed an interactive controller
#[derive(Debug, Clone)]
pub struct InteractiveHandle {
    /// One value per pending initial-extraction or decision request
    pub decisions: mpsc::Sender<f64>,
    /// One ack per pending summary request
    pub acks: mpsc::Sender<()>,
}

enum ViewPolicy {
    Simulated,
    Interactive {
        decisions: tokio::sync::Mutex<mpsc::Receiver<f64>>,
        acks: tokio::sync::Mutex<mpsc::Receiver<()>>,
    },
}

/// Everything reset on configure
struct ViewState {
    cfg: Option<PartConfig>,
    sink: Option<Arc<dyn ExtractionSink>>,
    current_period: u32,
    extractions: PlotSeries,
    resource: PlotSeries,
    cost: PlotSeries,
    payoff_instant: PlotSeries,
    payoff_discounted: PlotSeries,
    payoff_part: PlotSeries,
    text_infos: String,
    end_tx: Option<oneshot::Sender<()>>,
    sim_task: Option<JoinHandle<()>>,
    final_euros: Option<f64>,
    final_ecus: Option<f64>,
}

impl ViewState {
    fn fresh(cfg: PartConfig, sink: Arc<dyn ExtractionSink>) -> Self {
        Self {
            cfg: Some(cfg),
            sink: Some(sink),
            current_period: 0,
            extractions: PlotSeries::new(),
            resource: PlotSeries::new(),
            cost: PlotSeries::new(),
            payoff_instant: PlotSeries::new(),
            payoff_discounted: PlotSeries::new(),
            payoff_part: PlotSeries::new(),
            text_infos: String::new(),
            end_tx: None,
            sim_task: None,
            final_euros: None,
            final_ecus: None,
        }
    }

    fn empty() -> Self {
        Self {
            cfg: None,
            sink: None,
            current_period: 0,
            extractions: PlotSeries::new(),
            resource: PlotSeries::new(),
            cost: PlotSeries::new(),
            payoff_instant: PlotSeries::new(),
            payoff_discounted: PlotSeries::new(),
            payoff_part: PlotSeries::new(),
            text_infos: String::new(),
            end_tx: None,
            sim_task: None,
            final_euros: None,
            final_ecus: None,
        }
    }
}

/// Client-side controller for one player
pub struct RemoteViewController {
    label: String,
    policy: ViewPolicy,
    state: Mutex<ViewState>,
    /// Presentation seam: notified when the round's accrual is over
    end_of_round: Notify,
}

impl RemoteViewController {
    /// Controller whose decisions come from the simulated policy
    pub fn simulated(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            policy: ViewPolicy::Simulated,
            state: Mutex::new(ViewState::empty()),
            end_of_round: Notify::new(),
        }
    }

    /// Controller whose decisions come from interactive input channels.
    /// The returned handle belongs to the presentation layer.
    pub fn interactive(label: impl Into<String>) -> (Self, InteractiveHandle) {
        let (decision_tx, decision_rx) = mpsc::channel(8);
        let (ack_tx, ack_rx) = mpsc::channel(8);
        let controller = Self {
            label: label.into(),
            policy: ViewPolicy::Interactive {
                decisions: tokio::sync::Mutex::new(decision_rx),
                acks: tokio::sync::Mutex::new(ack_rx),
            },
            state: Mutex::new(ViewState::empty()),
            end_of_round: Notify::new(),
        };
        let handle = InteractiveHandle {
            decisions: decision_tx,
            acks: ack_tx,
        };
        (controller, handle)
    }

    /// Wait until the end-of-round signal arrives (presentation seam)
    pub async fn wait_end_of_round(&self) {
        self.end_of_round.notified().await;
    }

    /// Current status-text history, newest block first
    pub fn status_text(&self) -> String {
        self.state.lock().text_infos.clone()
    }

    /// Number of update pushes received since configure
    pub fn update_count(&self) -> usize {
        self.state.lock().extractions.len()
    }

    pub fn extraction_points(&self) -> Vec<(f64, f64)> {
        self.state.lock().extractions.points()
    }

    pub fn part_payoff_points(&self) -> Vec<(f64, f64)> {
        self.state.lock().payoff_part.points()
    }

    /// `(euros, ecus)` once `set_payoffs` has arrived
    pub fn final_payoffs(&self) -> Option<(f64, f64)> {
        let s = self.state.lock();
        Some((s.final_euros?, s.final_ecus?))
    }

    async fn next_interactive_decision(&self) -> Result<f64> {
        match &self.policy {
            ViewPolicy::Interactive { decisions, .. } => {
                let mut rx = decisions.lock().await;
                rx.recv()
                    .await
                    .ok_or_else(|| EcopoolError::Channel("decision input closed".into()))
            }
            ViewPolicy::Simulated => Err(EcopoolError::State(
                "no interactive input on a simulated controller".into(),
            )),
        }
    }

    /// Background loop of the continuous-mode simulation: wait a randomized
    /// interval, push a grid sample through the sink, repeat until aborted.
    async fn resample_loop(
        label: String,
        cfg: PartConfig,
        sink: Arc<dyn ExtractionSink>,
        last: Arc<Mutex<f64>>,
    ) {
        loop {
            let wait = policy::resample_interval(cfg.resample_min_ms, cfg.resample_max_ms);
            tokio::time::sleep(wait).await;
            let extraction = policy::sample_extraction(&cfg.grid);
            debug!(label = %label, extraction, "simulated submission");
            if sink.submit_extraction(extraction).await.is_err() {
                break;
            }
            *last.lock() = extraction;
        }
    }
}

#[async_trait]
impl RemoteView for RemoteViewController {
    async fn configure(
        &self,
        cfg: PartConfig,
        group: Vec<Uuid>,
        sink: Arc<dyn ExtractionSink>,
    ) -> Result<()> {
        info!(label = %self.label, group_size = group.len(), "configure");
        *self.state.lock() = ViewState::fresh(cfg, sink);
        Ok(())
    }

    async fn new_period(&self, index: u32) -> Result<()> {
        info!(label = %self.label, period = index, "new period");
        self.state.lock().current_period = index;
        Ok(())
    }

    async fn request_initial_extraction(&self) -> Result<f64> {
        match &self.policy {
            ViewPolicy::Simulated => {
                let grid = {
                    let s = self.state.lock();
                    s.cfg
                        .as_ref()
                        .ok_or_else(|| EcopoolError::State("not configured".into()))?
                        .grid
                        .clone()
                };
                let extraction = policy::sample_extraction(&grid);
                info!(label = %self.label, extraction, "send initial extraction");
                Ok(extraction)
            }
            ViewPolicy::Interactive { .. } => self.next_interactive_decision().await,
        }
    }

    async fn request_decision(&self, _start: Instant) -> Result<f64> {
        let (cfg, sink) = {
            let s = self.state.lock();
            let cfg = s
                .cfg
                .clone()
                .ok_or_else(|| EcopoolError::State("not configured".into()))?;
            (cfg, s.sink.clone())
        };

        match &self.policy {
            ViewPolicy::Simulated => match cfg.dynamic {
                DynamicType::Discrete => {
                    let extraction = policy::sample_extraction(&cfg.grid);
                    info!(label = %self.label, extraction, "send decision");
                    Ok(extraction)
                }
                DynamicType::Continuous => {
                    let sink =
                        sink.ok_or_else(|| EcopoolError::State("no extraction sink".into()))?;
                    let (end_tx, end_rx) = oneshot::channel();
                    let last = Arc::new(Mutex::new(0.0_f64));
                    let task = tokio::spawn(Self::resample_loop(
                        self.label.clone(),
                        cfg,
                        sink,
                        Arc::clone(&last),
                    ));
                    {
                        let mut s = self.state.lock();
                        s.end_tx = Some(end_tx);
                        s.sim_task = Some(task);
                    }
                    // resolves only when the end-of-round signal arrives
                    end_rx
                        .await
                        .map_err(|_| EcopoolError::Channel("end-of-round signal dropped".into()))?;
                    let last = *last.lock();
                    Ok(last)
                }
            },
            ViewPolicy::Interactive { .. } => self.next_interactive_decision().await,
        }
    }

    async fn update_data(&self, snapshot: ExtractionSnapshot, elapsed_secs: u64) -> Result<()> {
        let mut s = self.state.lock();
        let cfg = s
            .cfg
            .clone()
            .ok_or_else(|| EcopoolError::State("not configured".into()))?;

        // same x for every player in the group: the server's clock
        let xdata = if s.current_period == 0 {
            0.0
        } else {
            match cfg.dynamic {
                DynamicType::Discrete => s.current_period as f64,
                DynamicType::Continuous => elapsed_secs as f64,
            }
        };

        let resource = snapshot.resource.unwrap_or(0.0);
        let instant = snapshot.payoff.unwrap_or(0.0);
        s.extractions.push(xdata, snapshot.amount);
        s.resource.push(xdata, resource);
        s.cost.push(xdata, snapshot.cost.unwrap_or(0.0));
        s.payoff_instant.push(xdata, instant);

        match cfg.dynamic {
            DynamicType::Continuous => {
                s.payoff_discounted
                    .push(xdata, model::discounted(&cfg.econ, xdata, instant));
            }
            DynamicType::Discrete => {
                // discounted accrual is not supported for the discrete
                // dynamic; the series stays empty and the part payoff is
                // the continuation term alone
                debug!(label = %self.label, "discrete discounting unsupported, skipped");
            }
        }
        let cumulative = s.payoff_discounted.sum_y();
        let infinite =
            model::infinite_horizon_payoff(&cfg.econ, xdata, resource, snapshot.amount);
        s.payoff_part.push(xdata, cumulative + infinite);

        let header = match cfg.dynamic {
            DynamicType::Continuous => "Instant",
            DynamicType::Discrete => "Period",
        };
        let block = format!(
            "{header}: {}\nExtraction: {:.2}\nAvailable resource: {:.2}\n\
             Instant payoff: {:.2}\nDiscounted payoff: {:.2}\n\
             Cumulative payoff: {:.2}\nPart payoff: {:.2}",
            xdata as i64,
            snapshot.amount,
            resource,
            instant,
            s.payoff_discounted.last_y().unwrap_or(0.0),
            cumulative,
            s.payoff_part.last_y().unwrap_or(0.0),
        );
        let old = std::mem::take(&mut s.text_infos);
        s.text_infos = format!("{block}\n{}\n{old}", "-".repeat(20));

        info!(
            label = %self.label,
            extraction = snapshot.amount,
            resource,
            part_payoff = s.payoff_part.last_y().unwrap_or(0.0),
            "update data"
        );
        Ok(())
    }

    async fn end_update_data(&self) -> Result<()> {
        debug!(label = %self.label, "end of update data");
        {
            let mut s = self.state.lock();
            // abort before resolving: the simulation loop and the pending
            // decision can never both fire
            if let Some(task) = s.sim_task.take() {
                task.abort();
            }
            if let Some(tx) = s.end_tx.take() {
                let _ = tx.send(());
            }
        }
        self.end_of_round.notify_waiters();
        Ok(())
    }

    async fn display_summary(&self, period: PeriodSnapshot) -> Result<SummaryCurves> {
        info!(label = %self.label, period = period.index, "summary");
        if let ViewPolicy::Interactive { acks, .. } = &self.policy {
            let mut rx = acks.lock().await;
            rx.recv()
                .await
                .ok_or_else(|| EcopoolError::Channel("summary ack input closed".into()))?;
        }
        let s = self.state.lock();
        info!(label = %self.label, "send curves");
        Ok(SummaryCurves {
            extractions: s.extractions.points(),
            payoffs: s.payoff_part.points(),
            resource: s.resource.points(),
            cost: s.cost.points(),
        })
    }

    async fn set_payoffs(&self, euros: f64, ecus: f64) -> Result<()> {
        info!(label = %self.label, ecus, euros, "payoffs");
        let mut s = self.state.lock();
        s.final_euros = Some(euros);
        s.final_ecus = Some(ecus);
        Ok(())
    }
}
