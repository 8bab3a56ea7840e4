use crate::config::{BreakpointThresholdType, SemanticSplitConfig};
use crate::error::{Result, SemanticError};
use crate::provider::EmbeddingProvider;
use crate::sentence::{buffered_sentences, split_sentences};
use crate::statistics;

/// Splits text at semantic discontinuities.
///
/// Sentences are embedded through the injected provider (one batched call),
/// the cosine distance between each consecutive pair forms a series, and a
/// statistical threshold over that series marks the breakpoints. The
/// original sentences are then sliced into consecutive runs at those
/// breakpoints.
#[derive(Debug, Clone, Default)]
pub struct SemanticSplitter {
    config: SemanticSplitConfig,
}

impl SemanticSplitter {
    /// Create a new splitter with configuration
    #[must_use]
    pub fn new(config: SemanticSplitConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub fn config(&self) -> &SemanticSplitConfig {
        &self.config
    }

    /// Split `text` at semantic breakpoints.
    ///
    /// Suspends exactly once, on the batched call to `provider`; any failure
    /// it raises propagates unchanged. A single-sentence input is returned
    /// as-is without calling the provider at all, and empty input yields an
    /// empty sequence.
    pub async fn split(
        &self,
        text: &str,
        provider: &dyn EmbeddingProvider,
    ) -> Result<Vec<String>> {
        let sentences = split_sentences(text);
        if sentences.len() <= 1 {
            return Ok(sentences);
        }

        let buffered = buffered_sentences(&sentences, self.config.buffer_size);
        let embeddings = provider.embed(&buffered).await?;
        if embeddings.len() != buffered.len() {
            return Err(SemanticError::EmbeddingCount {
                expected: buffered.len(),
                actual: embeddings.len(),
            });
        }

        let distances: Vec<f64> = embeddings
            .windows(2)
            .map(|pair| 1.0 - f64::from(cosine_similarity(&pair[0], &pair[1])))
            .collect();

        let threshold = self.threshold(&distances);
        let breakpoints: Vec<usize> = distances
            .iter()
            .enumerate()
            .filter(|(_, distance)| **distance > threshold)
            .map(|(idx, _)| idx)
            .collect();
        log::debug!(
            "{} breakpoints over {} gaps (threshold {threshold:.6})",
            breakpoints.len(),
            distances.len()
        );

        Ok(slice_at_breakpoints(&sentences, &breakpoints))
    }

    fn threshold(&self, distances: &[f64]) -> f64 {
        let amount = self.config.threshold_amount;
        match self.config.threshold_type {
            BreakpointThresholdType::Percentile => statistics::percentile(distances, amount),
            BreakpointThresholdType::StandardDeviation => {
                statistics::mean(distances) + amount * statistics::population_std_dev(distances)
            }
            BreakpointThresholdType::Interquartile => {
                statistics::mean(distances) + amount * statistics::interquartile_range(distances)
            }
        }
    }
}

/// Cosine similarity between two embedding vectors; 0.0 on length mismatch
/// or zero norm
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Slice the original sentences into consecutive runs, splitting after each
/// breakpoint index; runs join with a single space
fn slice_at_breakpoints(sentences: &[String], breakpoints: &[usize]) -> Vec<String> {
    let mut chunks = Vec::with_capacity(breakpoints.len() + 1);
    let mut start = 0;
    for &breakpoint in breakpoints {
        let end = breakpoint + 1;
        chunks.push(sentences[start..end].join(" "));
        start = end;
    }
    chunks.push(sentences[start..].join(" "));
    chunks
}
