//! # Textseg Semantic
//!
//! Semantic breakpoint detection: splits text where the embedding distance
//! between neighboring sentences jumps above a statistical threshold.
//!
//! ## Architecture
//!
//! ```text
//! Raw text
//!     │
//!     ├──> Sentence segmentation (./?/! + whitespace)
//!     │    └─> Single sentence: returned as-is, no embedding call
//!     │
//!     ├──> Buffered windows (± buffer_size neighbors per sentence)
//!     │
//!     ├──> EmbeddingProvider::embed (ONE batched call)
//!     │
//!     ├──> Cosine-distance series over consecutive pairs
//!     │
//!     ├──> Threshold (percentile | mean + k·σ | mean + k·IQR)
//!     │
//!     └──> Slice original sentences at distances strictly above it
//! ```
//!
//! ## Example
//!
//! ```rust
//! use textseg_semantic::{EmbeddingProvider, SemanticSplitConfig, SemanticSplitter};
//! # use async_trait::async_trait;
//!
//! struct Uniform;
//!
//! #[async_trait]
//! impl EmbeddingProvider for Uniform {
//!     async fn embed(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
//!         Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let splitter = SemanticSplitter::new(SemanticSplitConfig::default());
//! let chunks = splitter.split("One topic. Still the same topic.", &Uniform).await?;
//! assert_eq!(chunks.len(), 1);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod provider;
mod sentence;
mod splitter;
pub mod statistics;

pub use config::{BreakpointThresholdType, SemanticSplitConfig};
pub use error::{Result, SemanticError};
pub use provider::{EmbeddingProvider, FnEmbeddingProvider};
pub use sentence::{buffered_sentences, split_sentences};
pub use splitter::{cosine_similarity, SemanticSplitter};
