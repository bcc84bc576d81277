//! Record persistence seam
//!
//! The host framework owns the real persistence engine; the part only needs
//! durable, insertion-ordered storage of its records. [`MemoryStore`] backs
//! the tests, [`JsonlStore`] appends one JSON line per event to a file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use ecopool_core::{CurvePoint, Extraction, Period, PlayerPart, Result};

/// One persisted event, tagged with the owning player (and period where
/// applicable) so the ownership chain survives flattening
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoredEvent {
    PeriodCreated {
        player: Uuid,
        index: u32,
        started_at: chrono::DateTime<chrono::Utc>,
    },
    ExtractionRecorded {
        player: Uuid,
        period: u32,
        extraction: Extraction,
    },
    ExtractionUpdated {
        player: Uuid,
        period: u32,
        extraction: Extraction,
    },
    CurvesRecorded {
        player: Uuid,
        curves: Vec<CurvePoint>,
    },
    PartFinalized {
        player: Uuid,
        sequence: u32,
        gain_ecus: f64,
        gain_euros: f64,
    },
}

/// Append-only record sink, insertion order preserved
pub trait RecordStore: Send + Sync {
    fn period_created(&self, player: Uuid, period: &Period) -> Result<()>;
    fn extraction_recorded(&self, player: Uuid, period: u32, extraction: &Extraction)
        -> Result<()>;
    fn extraction_updated(&self, player: Uuid, period: u32, extraction: &Extraction)
        -> Result<()>;
    fn curves_recorded(&self, player: Uuid, curves: &[CurvePoint]) -> Result<()>;
    fn part_finalized(&self, part: &PlayerPart) -> Result<()>;
}

/// In-memory store used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Mutex<Vec<StoredEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoredEvent> {
        self.events.lock().clone()
    }

    fn push(&self, event: StoredEvent) {
        self.events.lock().push(event);
    }
}

impl RecordStore for MemoryStore {
    fn period_created(&self, player: Uuid, period: &Period) -> Result<()> {
        self.push(StoredEvent::PeriodCreated {
            player,
            index: period.index,
            started_at: period.started_at,
        });
        Ok(())
    }

    fn extraction_recorded(
        &self,
        player: Uuid,
        period: u32,
        extraction: &Extraction,
    ) -> Result<()> {
        self.push(StoredEvent::ExtractionRecorded {
            player,
            period,
            extraction: extraction.clone(),
        });
        Ok(())
    }

    fn extraction_updated(
        &self,
        player: Uuid,
        period: u32,
        extraction: &Extraction,
    ) -> Result<()> {
        self.push(StoredEvent::ExtractionUpdated {
            player,
            period,
            extraction: extraction.clone(),
        });
        Ok(())
    }

    fn curves_recorded(&self, player: Uuid, curves: &[CurvePoint]) -> Result<()> {
        self.push(StoredEvent::CurvesRecorded {
            player,
            curves: curves.to_vec(),
        });
        Ok(())
    }

    fn part_finalized(&self, part: &PlayerPart) -> Result<()> {
        self.push(StoredEvent::PartFinalized {
            player: part.player_id,
            sequence: part.sequence,
            gain_ecus: part.gain_ecus,
            gain_euros: part.gain_euros,
        });
        Ok(())
    }
}

/// JSON-lines file store
pub struct JsonlStore {
    file: Mutex<File>,
}

impl JsonlStore {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "record store opened");
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    fn write(&self, event: &StoredEvent) -> Result<()> {
        let line = serde_json::to_string(event)?;
        let mut file = self.file.lock();
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl RecordStore for JsonlStore {
    fn period_created(&self, player: Uuid, period: &Period) -> Result<()> {
        self.write(&StoredEvent::PeriodCreated {
            player,
            index: period.index,
            started_at: period.started_at,
        })
    }

    fn extraction_recorded(
        &self,
        player: Uuid,
        period: u32,
        extraction: &Extraction,
    ) -> Result<()> {
        self.write(&StoredEvent::ExtractionRecorded {
            player,
            period,
            extraction: extraction.clone(),
        })
    }

    fn extraction_updated(
        &self,
        player: Uuid,
        period: u32,
        extraction: &Extraction,
    ) -> Result<()> {
        self.write(&StoredEvent::ExtractionUpdated {
            player,
            period,
            extraction: extraction.clone(),
        })
    }

    fn curves_recorded(&self, player: Uuid, curves: &[CurvePoint]) -> Result<()> {
        self.write(&StoredEvent::CurvesRecorded {
            player,
            curves: curves.to_vec(),
        })
    }

    fn part_finalized(&self, part: &PlayerPart) -> Result<()> {
        self.write(&StoredEvent::PartFinalized {
            player: part.player_id,
            sequence: part.sequence,
            gain_ecus: part.gain_ecus,
            gain_euros: part.gain_euros,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_preserves_order() {
        let store = MemoryStore::new();
        let player = Uuid::new_v4();
        let period = Period::new(0);
        store.period_created(player, &period).unwrap();
        store
            .extraction_recorded(player, 0, &Extraction::new(5.0, 0))
            .unwrap();
        store
            .extraction_updated(player, 0, &Extraction::new(5.0, 0))
            .unwrap();

        let events = store.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], StoredEvent::PeriodCreated { .. }));
        assert!(matches!(events[1], StoredEvent::ExtractionRecorded { .. }));
        assert!(matches!(events[2], StoredEvent::ExtractionUpdated { .. }));
    }

    #[test]
    fn test_jsonl_store_writes_one_line_per_event() {
        let dir = std::env::temp_dir().join(format!("ecopool-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("records.jsonl");

        let store = JsonlStore::create(&path).unwrap();
        let player = Uuid::new_v4();
        store.period_created(player, &Period::new(0)).unwrap();
        store
            .extraction_recorded(player, 0, &Extraction::new(3.0, 0))
            .unwrap();
        drop(store);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: StoredEvent = serde_json::from_str(lines[0]).unwrap();
        assert!(matches!(first, StoredEvent::PeriodCreated { index: 0, .. }));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
