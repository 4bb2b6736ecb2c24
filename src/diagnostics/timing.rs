use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds spent in one named pipeline stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings for one pipeline run, in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    /// Wall-clock time of the whole run, snapshot writes included
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `f` and record its duration under `stage`.
    pub fn time<T>(&mut self, stage: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!("stage {stage}: {elapsed_ms:.3} ms");
        self.stages.push(StageTiming {
            stage: stage.to_owned(),
            elapsed_ms,
        });
        out
    }

    pub fn stage(&self, stage: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Sum over recorded stages. Never exceeds `total_ms` once the run has
    /// finished.
    pub fn stages_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}
