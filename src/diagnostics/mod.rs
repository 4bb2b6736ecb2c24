//! Diagnostics produced by a pipeline run.
//!
//! `PipelineReport` is what `run_pipeline` returns and what the CLI writes
//! as JSON; `TimingBreakdown` records how long each stage took.

pub mod report;
pub mod timing;

pub use report::PipelineReport;
pub use timing::{StageTiming, TimingBreakdown};
