use serde::{Deserialize, Serialize};

/// Default number of neighbor sentences buffered on each side
pub const DEFAULT_BUFFER_SIZE: usize = 1;

/// Default threshold amount (percentile rank for the default strategy)
pub const DEFAULT_THRESHOLD_AMOUNT: f64 = 95.0;

/// How the breakpoint threshold is derived from the distance series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakpointThresholdType {
    /// Interpolated percentile of the distances; the amount is the rank
    #[default]
    Percentile,

    /// Mean plus `amount` population standard deviations
    StandardDeviation,

    /// Mean plus `amount` interquartile ranges
    Interquartile,
}

/// Configuration for semantic breakpoint detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticSplitConfig {
    /// Sentences concatenated on each side of a sentence before embedding;
    /// the symmetric window stabilizes embeddings for short sentences
    pub buffer_size: usize,

    /// Threshold derivation strategy
    pub threshold_type: BreakpointThresholdType,

    /// Strategy parameter: percentile rank, or the multiplier on the
    /// standard deviation / interquartile range
    pub threshold_amount: f64,

    /// Reserved: not consumed by the breakpoint algorithm
    pub max_chunk_size: Option<usize>,

    /// Reserved: not consumed by the breakpoint algorithm
    pub chunk_split_retry_limit: Option<u32>,
}

impl Default for SemanticSplitConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            threshold_type: BreakpointThresholdType::default(),
            threshold_amount: DEFAULT_THRESHOLD_AMOUNT,
            max_chunk_size: None,
            chunk_split_retry_limit: None,
        }
    }
}

impl SemanticSplitConfig {
    /// Config using a percentile threshold at `rank`
    #[must_use]
    pub fn percentile(rank: f64) -> Self {
        Self {
            threshold_type: BreakpointThresholdType::Percentile,
            threshold_amount: rank,
            ..Default::default()
        }
    }

    /// Config using a mean + `multiplier`·σ threshold
    #[must_use]
    pub fn standard_deviation(multiplier: f64) -> Self {
        Self {
            threshold_type: BreakpointThresholdType::StandardDeviation,
            threshold_amount: multiplier,
            ..Default::default()
        }
    }

    /// Config using a mean + `multiplier`·IQR threshold
    #[must_use]
    pub fn interquartile(multiplier: f64) -> Self {
        Self {
            threshold_type: BreakpointThresholdType::Interquartile,
            threshold_amount: multiplier,
            ..Default::default()
        }
    }
}
