use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

pub mod models;

use models::{Alert, EnergySummary, SensorReading, Tip, TipCategory, MAX_OFFSET_SECS};

const BUNDLED_SNAPSHOT: &str = include_str!("../../assets/home.json");

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to parse home snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("energy score {0} is outside 0..=100")]
    ScoreOutOfRange(u8),
    #[error("alert id {0} appears more than once")]
    DuplicateAlertId(u32),
    #[error("time offset {secs}s on {what} is out of range")]
    OffsetOutOfRange { what: String, secs: i64 },
}

/// Everything the dashboard and tips pages display for one household.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeSnapshot {
    pub household: String,
    pub summary: EnergySummary,
    pub sensors: Vec<SensorReading>,
    pub alerts: Vec<Alert>,
    pub tips: Vec<Tip>,
}

impl HomeSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;

        if snapshot.summary.score > 100 {
            return Err(SnapshotError::ScoreOutOfRange(snapshot.summary.score));
        }

        let mut seen = HashSet::new();
        for alert in &snapshot.alerts {
            if !seen.insert(alert.id) {
                return Err(SnapshotError::DuplicateAlertId(alert.id));
            }
        }

        for sensor in &snapshot.sensors {
            check_offset(&sensor.location, sensor.updated_secs_ago)?;
        }
        for alert in &snapshot.alerts {
            if let Some(secs) = alert.resolved_secs_ago {
                check_offset(&alert.title, secs)?;
            }
        }

        Ok(snapshot)
    }

    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.active).collect()
    }

    pub fn resolved_alerts(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| !a.active).collect()
    }

    pub fn tips_in(&self, category: TipCategory) -> Vec<&Tip> {
        self.tips.iter().filter(|t| t.category == category).collect()
    }
}

fn check_offset(what: &str, secs: i64) -> Result<(), SnapshotError> {
    if (0..=MAX_OFFSET_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(SnapshotError::OffsetOutOfRange {
            what: what.to_string(),
            secs,
        })
    }
}

// NB the bundle is checked by the `bundled_snapshot_is_valid` test
static HOME: LazyLock<HomeSnapshot> = LazyLock::new(|| {
    let snapshot = HomeSnapshot::from_json(BUNDLED_SNAPSHOT)
        .expect("bundled assets/home.json must be a valid snapshot");
    tracing::debug!(
        sensors = snapshot.sensors.len(),
        alerts = snapshot.alerts.len(),
        tips = snapshot.tips.len(),
        "loaded home snapshot"
    );
    snapshot
});

pub fn snapshot() -> &'static HomeSnapshot {
    &HOME
}
