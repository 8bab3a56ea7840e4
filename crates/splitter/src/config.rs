use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitterError};

/// Default chunk size for the base and recursive splitters
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Default trailing overlap between neighboring chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 10;

/// Chunk size used by the document-oriented (Markdown) preset
pub const DOCUMENT_CHUNK_SIZE: usize = 1000;

/// Configuration for split-and-merge chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitConfig {
    /// Upper bound on chunk size, in caller-defined length units
    pub chunk_size: usize,

    /// Length carried over from the tail of one chunk into the next
    pub chunk_overlap: usize,

    /// Candidate separators, tried in priority order
    pub separators: Vec<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: default_separators(),
        }
    }
}

impl SplitConfig {
    /// Create a validated configuration
    pub fn new(chunk_size: usize, chunk_overlap: usize, separators: Vec<String>) -> Result<Self> {
        let config = Self {
            chunk_size,
            chunk_overlap,
            separators,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a validated configuration with the default separator cascade
    pub fn with_limits(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::new(chunk_size, chunk_overlap, default_separators())
    }

    /// Create config sized for prose documents (larger chunks, same overlap)
    #[must_use]
    pub fn for_documents() -> Self {
        Self {
            chunk_size: DOCUMENT_CHUNK_SIZE,
            ..Default::default()
        }
    }

    /// Validate configuration
    ///
    /// The overlap must stay strictly below the chunk size, otherwise the
    /// merge window could never make forward progress.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_overlap >= self.chunk_size {
            return Err(SplitterError::invalid_config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// The default separator cascade: sentence terminators first, then clause
/// punctuation, then line breaks.
#[must_use]
pub fn default_separators() -> Vec<String> {
    [".", "!", "?", ";", ":", "\r\n", "\n"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
