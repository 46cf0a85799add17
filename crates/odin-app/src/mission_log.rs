//! Mission log: human-readable entries recorded for each control action.
//!
//! The engine never reads the log. Hazard responses are drawn from a small set of
//! templates with a seeded RNG, so a given seed always yields the same log.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use odin_core::enums::{LogPriority, LogSource};
use odin_core::events::{format_mission_time, MissionLogEntry};
use odin_core::hazard::Hazard;

/// Ordered log of mission events.
#[derive(Debug, Clone)]
pub struct MissionLog {
    entries: Vec<MissionLogEntry>,
    next_id: u64,
    rng: ChaCha8Rng,
}

impl MissionLog {
    pub fn new(seed: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Append an entry stamped with mission elapsed time.
    pub fn record(
        &mut self,
        mission_hours: f64,
        source: LogSource,
        message: impl Into<String>,
        priority: LogPriority,
    ) -> &MissionLogEntry {
        let entry = MissionLogEntry {
            id: format!("log-{}", self.next_id),
            timestamp: format_mission_time(mission_hours),
            source,
            message: message.into(),
            priority,
        };
        self.next_id += 1;
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Record the advisory response to a newly injected hazard.
    pub fn record_hazard(&mut self, mission_hours: f64, hazard: &Hazard) -> &MissionLogEntry {
        let message = self.hazard_response(hazard);
        self.record(
            mission_hours,
            LogSource::OdinAi,
            message,
            LogPriority::from(hazard.severity),
        )
    }

    fn hazard_response(&mut self, hazard: &Hazard) -> String {
        let kind = hazard.kind.label();
        match self.rng.gen_range(0..4) {
            0 => format!("{kind} detected. Analyzing impact on current trajectory."),
            1 => format!(
                "Hazard assessment complete. Severity: {:?}. Evaluating alternatives.",
                hazard.severity
            ),
            2 => "Recommendation: Consider trajectory adjustment for optimal safety margins."
                .to_string(),
            _ => format!("Monitoring {kind}. Crew safety protocols activated."),
        }
    }

    pub fn entries(&self) -> &[MissionLogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&MissionLogEntry> {
        self.entries.last()
    }

    /// Drop every entry. Ids keep counting so they stay unique across resets.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
