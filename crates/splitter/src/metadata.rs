use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of ATX header levels tracked by the rolling context
pub const HEADER_LEVELS: usize = 6;

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("bold span pattern is valid"));

/// Parse an ATX header line: returns (level, title)
pub(crate) fn parse_header(line: &str) -> Option<(usize, String)> {
    let trimmed = line.trim_start();
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();

    if hash_count > 0 && hash_count <= HEADER_LEVELS && trimmed.len() > hash_count {
        let rest = &trimmed[hash_count..];
        if rest.starts_with(' ') {
            return Some((hash_count, rest.trim().to_string()));
        }
    }
    None
}

/// Rolling document-outline context: the nearest enclosing header at each
/// level plus the most recent bold terms.
///
/// Chunks receive independent snapshots (plain `clone`), so consumers that
/// process chunks lazily or concurrently never observe later mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionContext {
    headers: [Option<String>; HEADER_LEVELS],
    bold: Vec<String>,
}

impl SectionContext {
    /// Record a header at `level` (1-based). Every deeper level is cleared:
    /// a new header invalidates descendant context, it is not cumulative
    /// across siblings.
    pub fn set_header(&mut self, level: usize, title: impl Into<String>) {
        if level == 0 || level > HEADER_LEVELS {
            return;
        }
        self.headers[level - 1] = Some(title.into());
        for slot in self.headers[level..].iter_mut() {
            *slot = None;
        }
    }

    /// The nearest enclosing header at `level` (1-based)
    #[must_use]
    pub fn header(&self, level: usize) -> Option<&str> {
        self.headers.get(level.checked_sub(1)?)?.as_deref()
    }

    /// Bold terms currently in scope, in traversal order
    #[must_use]
    pub fn bold(&self) -> &[String] {
        &self.bold
    }

    /// Update the context from one chunk's text.
    ///
    /// Headers found in the chunk are applied in order; bold spans replace
    /// the bold entry wholesale. A chunk that introduces neither collapses a
    /// multi-valued bold entry to its most recent value: only that value
    /// still encloses the chunk.
    ///
    /// Returns `true` when the chunk introduced a tracked key.
    pub(crate) fn apply(&mut self, chunk: &str) -> bool {
        let mut introduced = false;

        for line in chunk.lines() {
            if let Some((level, title)) = parse_header(line) {
                self.set_header(level, title);
                introduced = true;
            }
        }

        let spans: Vec<String> = BOLD_SPAN
            .captures_iter(chunk)
            .map(|cap| cap[1].trim().to_string())
            .filter(|span| !span.is_empty())
            .collect();
        if !spans.is_empty() {
            self.bold = spans;
            introduced = true;
        }

        if !introduced && self.bold.len() > 1 {
            self.bold.drain(..self.bold.len() - 1);
        }

        introduced
    }

    /// Ordered (key, value) view of the context: `Header_1`..`Header_6`,
    /// then `Bold`. Only keys with a value appear; a multi-valued bold entry
    /// joins its values in traversal order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        for (idx, slot) in self.headers.iter().enumerate() {
            if let Some(title) = slot {
                entries.push((format!("Header_{}", idx + 1), title.clone()));
            }
        }
        if !self.bold.is_empty() {
            entries.push(("Bold".to_string(), self.bold.join(", ")));
        }
        entries
    }

    /// True when no header or bold value is in scope
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.iter().all(Option::is_none) && self.bold.is_empty()
    }
}

/// A chunk paired with the outline context in effect where it was emitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataChunk {
    /// Snapshot of the enclosing outline context
    pub metadata: SectionContext,

    /// The chunk text
    pub content: String,
}

impl MetadataChunk {
    /// Create a new metadata chunk
    #[must_use]
    pub fn new(metadata: SectionContext, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }
}
