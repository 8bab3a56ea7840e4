//! # Textseg Splitter
//!
//! Deterministic text chunking for embedding and LLM pipelines.
//!
//! ## Philosophy
//!
//! The splitters produce bounded-size chunks that:
//! - Respect natural boundaries (sentences, lines, Markdown sections)
//! - Carry a configurable trailing overlap between neighboring chunks
//! - Measure size with a caller-supplied length function (characters,
//!   tokens, graphemes; the unit is never assumed)
//! - Optionally attach document-outline metadata to every chunk
//!
//! ## Architecture
//!
//! ```text
//! Raw text + length function
//!     │
//!     ├──> Separator cascade (priority order, first match wins)
//!     │    └─> Oversized fragments re-enter with the remaining candidates
//!     │
//!     ├──> Merge window (FIFO, overlap retained across flushes)
//!     │
//!     └──> Chunks
//!          └─> Markdown strategies also emit Header_1..Header_6 / Bold
//!              context snapshots per chunk
//! ```
//!
//! ## Example
//!
//! ```rust
//! use textseg_splitter::{char_len, RecursiveSplitter, SplitConfig, TextSplitter};
//!
//! let config = SplitConfig::with_limits(12, 0).unwrap();
//! let splitter = RecursiveSplitter::new(config);
//!
//! let chunks = splitter.split("One. Two. Three. Four.", &char_len);
//! assert!(chunks.len() > 1);
//! assert!(chunks.iter().all(|chunk| char_len(chunk) <= 12));
//! ```

mod config;
mod error;
mod length;
mod markdown;
mod metadata;
mod recursive;
mod splitter;

pub use config::{default_separators, SplitConfig};
pub use error::{Result, SplitterError};
pub use length::{char_len, grapheme_len, LengthFn};
pub use markdown::{
    MarkdownHeaderSplitter, MarkdownRecursiveSplitter, MetadataSplitter, MIN_CHUNK_LEN,
};
pub use metadata::{MetadataChunk, SectionContext, HEADER_LEVELS};
pub use recursive::RecursiveSplitter;
pub use splitter::{join_chunks, merge_splits, TextSplitter};
