//! Ecopool simulated session runner
//!
//! Runs one full part with simulated players against an in-process record
//! store, end to end: configure → period 0 → decision rounds → summary →
//! payoffs. Useful for eyeballing the dynamics and the record stream
//! without the host experiment framework.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use ecopool_core::{PartConfig, RemoteView, ECOPOOL_VERSION, PART_NAME};
use ecopool_remote::RemoteViewController;
use ecopool_server::{Coordinator, JsonlStore, MemoryStore, PlayerSession, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting {PART_NAME} simulation v{ECOPOOL_VERSION}");

    let cfg = PartConfig::load()?;
    info!("Loaded configuration: {:?}", cfg);

    let player_count: usize = std::env::var("ECOPOOL_PLAYERS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4);

    let store: Arc<dyn RecordStore> = match std::env::var("ECOPOOL_RECORDS_PATH") {
        Ok(path) => {
            info!(path, "writing records as JSON lines");
            Arc::new(JsonlStore::create(path.clone())?)
        }
        Err(_) => Arc::new(MemoryStore::new()),
    };

    let group_members: Vec<Uuid> = (0..player_count).map(|_| Uuid::new_v4()).collect();
    let mut players = Vec::with_capacity(player_count);
    for (i, player_id) in group_members.iter().enumerate() {
        let view = Arc::new(RemoteViewController::simulated(format!("player-{i}")));
        players.push(PlayerSession::spawn(
            *player_id,
            1,
            Some(1),
            group_members.clone(),
            cfg.clone(),
            view as Arc<dyn RemoteView>,
            Arc::clone(&store),
        ));
    }

    let coordinator = Coordinator::new(cfg, players, 1);
    let outcome = coordinator.run().await?;

    info!("final payoffs:");
    for (player, euros) in &outcome.payoffs {
        info!(player = %player, euros, "payoff");
    }

    Ok(())
}
