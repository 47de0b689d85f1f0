//! telemetry/timers.rs
//! Wall time per pipeline stage.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Timed unit of work. Declaration order follows the encode then decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Checksum,
    Encrypt,
    Split,
    Embed,
    EmbedIndex,
    Reveal,
    Join,
    Decrypt,
    Verify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Checksum   => "checksum",
            Stage::Encrypt    => "encrypt",
            Stage::Split      => "split",
            Stage::Embed      => "embed",
            Stage::EmbedIndex => "embed_index",
            Stage::Reveal     => "reveal",
            Stage::Join       => "join",
            Stage::Decrypt    => "decrypt",
            Stage::Verify     => "verify",
        })
    }
}

/// Accumulated durations keyed by stage, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageTimes(BTreeMap<Stage, Duration>);

impl StageTimes {
    /// Charge `dur` to `stage`; repeated stages (one per slot) accumulate.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.0.entry(stage).or_default() += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.0.get(&stage).copied().unwrap_or_default()
    }

    pub fn total(&self) -> Duration {
        self.0.values().sum()
    }

    /// Every stage in `expected` ran at least once. A stage that ran in
    /// under a clock tick still counts.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.0.contains_key(s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = btree_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Run clock plus per-stage accumulation.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    finished: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            finished: None,
            stage_times: StageTimes::default(),
        }
    }

    /// Stop the run clock. Stage timing keeps working afterwards.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    /// Run `f` and charge its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.stage_times.add(stage, t.elapsed());
        out
    }

    /// Run time so far, or up to `finish` once called.
    pub fn elapsed(&self) -> Duration {
        self.finished
            .unwrap_or_else(Instant::now)
            .duration_since(self.started)
    }
}
