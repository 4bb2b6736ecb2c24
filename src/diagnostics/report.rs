use super::timing::TimingBreakdown;
use crate::edges::BlurKernel;
use crate::image::Channel;
use serde::Serialize;

/// Summary of one end-to-end pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub width: usize,
    pub height: usize,
    pub channel: Channel,
    pub blur: BlurKernel,
    pub percentile: u32,
    /// Intensity cutoff selected at `percentile`
    pub cutoff: f32,
    pub white_pixels: usize,
    /// Maximum refined intensity before binarization
    pub max_intensity: f32,
    pub timing: TimingBreakdown,
}

impl PipelineReport {
    /// Fraction of pixels classified as edges.
    pub fn edge_ratio(&self) -> f32 {
        let total = self.width * self.height;
        if total == 0 {
            0.0
        } else {
            self.white_pixels as f32 / total as f32
        }
    }
}
