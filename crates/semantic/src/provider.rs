use std::future::Future;

use async_trait::async_trait;

/// Generates one embedding vector per input text, batched in a single call.
///
/// The splitter invokes this exactly once per split with every buffered
/// sentence, and awaits the full batch before computing distances. Failures
/// propagate to the caller unchanged; the splitter never retries.
/// Cancellation is cooperative and drop-based: dropping the split future
/// drops the in-flight `embed` future with it.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed every text in `texts`, preserving order
    async fn embed(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// Adapter lifting an async closure into an [`EmbeddingProvider`]
pub struct FnEmbeddingProvider<F> {
    generate: F,
}

impl<F, Fut> FnEmbeddingProvider<F>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Vec<Vec<f32>>>> + Send,
{
    /// Wrap `generate` as a provider
    pub fn new(generate: F) -> Self {
        Self { generate }
    }
}

#[async_trait]
impl<F, Fut> EmbeddingProvider for FnEmbeddingProvider<F>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Vec<Vec<f32>>>> + Send,
{
    async fn embed(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        (self.generate)(texts.to_vec()).await
    }
}
