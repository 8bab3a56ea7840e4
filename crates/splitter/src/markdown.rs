use crate::config::SplitConfig;
use crate::length::LengthFn;
use crate::metadata::{parse_header, MetadataChunk, SectionContext, HEADER_LEVELS};
use crate::splitter::{merge_splits, TextSplitter};

/// Minimum viable chunk length; shorter results are dropped as noise
pub const MIN_CHUNK_LEN: usize = 30;

/// Delimiters tried, in order, when no sub-header splits an oversized
/// section
const FALLBACK_DELIMITERS: [&str; 5] = ["\n\n", "\n", ". ", "; ", ", "];

/// Splitters that attach document-outline metadata to every chunk
pub trait MetadataSplitter {
    /// Split `text` into (metadata, content) chunks, measured by `length`
    fn split_with_metadata(&self, text: &str, length: &LengthFn) -> Vec<MetadataChunk>;
}

/// Header-first Markdown splitter.
///
/// Partitions the document into top-level sections at level-1 header
/// boundaries. Oversized sections cascade through header levels 2..=6; a
/// section no sub-header splits falls back to a fixed delimiter cascade
/// (blank line, line break, period, semicolon, comma). Every emitted chunk
/// carries a snapshot of the enclosing `Header_1..Header_6` / `Bold` context.
#[derive(Debug, Clone)]
pub struct MarkdownHeaderSplitter {
    config: SplitConfig,
}

impl Default for MarkdownHeaderSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::for_documents())
    }
}

impl MarkdownHeaderSplitter {
    /// Create a new splitter with configuration
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Greedy partition at level-1 header lines. The preamble before the
    /// first header forms its own section.
    fn top_level_sections(text: &str) -> Vec<String> {
        split_at_header_level(text, 1).unwrap_or_else(|| vec![text.to_string()])
    }

    /// Delimiter fallback for a section without splittable sub-headers:
    /// the first delimiter whose fragments all fit wins; when none does, the
    /// last cascade's fragments are kept (oversized fragments pass through).
    fn split_by_delimiters(&self, section: &str, length: &LengthFn) -> Vec<String> {
        let mut last = vec![section.to_string()];
        for delimiter in FALLBACK_DELIMITERS {
            if !section.contains(delimiter) {
                continue;
            }
            let fragments: Vec<String> = section
                .split(delimiter)
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string)
                .collect();
            if fragments.is_empty() {
                continue;
            }
            let all_fit = fragments
                .iter()
                .all(|fragment| length(fragment) <= self.config.chunk_size);
            last = fragments;
            if all_fit {
                return last;
            }
        }
        log::warn!(
            "no delimiter split fits a section of {} units",
            length(section)
        );
        last
    }

    fn emit(
        &self,
        chunks: &mut Vec<MetadataChunk>,
        context: &mut SectionContext,
        content: &str,
        length: &LengthFn,
    ) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        // Headers inside dropped chunks still move the context forward.
        context.apply(content);
        if length(content) < MIN_CHUNK_LEN {
            log::debug!("dropping {}-unit chunk as noise", length(content));
            return;
        }
        chunks.push(MetadataChunk::new(context.clone(), content));
    }
}

impl MetadataSplitter for MarkdownHeaderSplitter {
    fn split_with_metadata(&self, text: &str, length: &LengthFn) -> Vec<MetadataChunk> {
        let mut context = SectionContext::default();
        let mut chunks = Vec::new();

        for section in Self::top_level_sections(text) {
            // Worklist of (fragment, next header level to try), pushed in
            // reverse so emission follows document order.
            let mut stack: Vec<(String, usize)> = vec![(section, 2)];
            while let Some((fragment, level)) = stack.pop() {
                if length(fragment.trim()) <= self.config.chunk_size {
                    self.emit(&mut chunks, &mut context, &fragment, length);
                    continue;
                }

                let subsections = (level..=HEADER_LEVELS).find_map(|candidate| {
                    split_at_header_level(&fragment, candidate)
                        .map(|parts| (candidate, parts))
                });

                match subsections {
                    Some((found, parts)) => {
                        for part in parts.into_iter().rev() {
                            stack.push((part, found + 1));
                        }
                    }
                    None => {
                        for piece in self.split_by_delimiters(&fragment, length) {
                            self.emit(&mut chunks, &mut context, &piece, length);
                        }
                    }
                }
            }
        }

        chunks
    }
}

impl TextSplitter for MarkdownHeaderSplitter {
    fn split(&self, text: &str, length: &LengthFn) -> Vec<String> {
        self.split_with_metadata(text, length)
            .into_iter()
            .map(|chunk| chunk.content)
            .collect()
    }
}

/// Generic recursive Markdown splitter.
///
/// The same separator cascade as [`crate::RecursiveSplitter`], restricted to
/// header markers `##`..`######`. Fragments keep their header lines (a
/// marker-stripping split would orphan the outline metadata) and small
/// neighbors are re-assembled through `merge_splits`.
#[derive(Debug, Clone)]
pub struct MarkdownRecursiveSplitter {
    config: SplitConfig,
}

enum MdTask {
    Split(String, usize),
    Merge(Vec<String>),
}

impl Default for MarkdownRecursiveSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::for_documents())
    }
}

impl MarkdownRecursiveSplitter {
    /// Join separator used when re-assembling line-oriented fragments
    const JOIN_SEPARATOR: &'static str = "\n";

    /// Create a new splitter with configuration
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    fn split_content(&self, text: &str, length: &LengthFn) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut stack = vec![MdTask::Split(text.to_string(), 2)];

        while let Some(task) = stack.pop() {
            match task {
                MdTask::Merge(fragments) => {
                    chunks.extend(merge_splits(
                        &fragments,
                        Self::JOIN_SEPARATOR,
                        length,
                        &self.config,
                    ));
                }
                MdTask::Split(text, level) => {
                    let found = (level..=HEADER_LEVELS).find_map(|candidate| {
                        split_at_header_level(&text, candidate)
                            .map(|parts| (candidate, parts))
                    });

                    let Some((found, parts)) = found else {
                        // No header marker applies: emit whole, oversized or
                        // not.
                        let fragment = text.trim();
                        if !fragment.is_empty() {
                            chunks.push(fragment.to_string());
                        }
                        continue;
                    };

                    let mut tasks: Vec<MdTask> = Vec::new();
                    let mut buffered: Vec<String> = Vec::new();
                    for part in parts {
                        let part = part.trim().to_string();
                        if part.is_empty() {
                            continue;
                        }
                        if length(&part) < self.config.chunk_size {
                            buffered.push(part);
                        } else {
                            if !buffered.is_empty() {
                                tasks.push(MdTask::Merge(std::mem::take(&mut buffered)));
                            }
                            tasks.push(MdTask::Split(part, found + 1));
                        }
                    }
                    if !buffered.is_empty() {
                        tasks.push(MdTask::Merge(buffered));
                    }
                    for task in tasks.into_iter().rev() {
                        stack.push(task);
                    }
                }
            }
        }

        chunks.retain(|chunk| !chunk.trim().is_empty());
        chunks
    }
}

impl MetadataSplitter for MarkdownRecursiveSplitter {
    fn split_with_metadata(&self, text: &str, length: &LengthFn) -> Vec<MetadataChunk> {
        let mut context = SectionContext::default();
        self.split_content(text, length)
            .into_iter()
            .map(|content| {
                context.apply(&content);
                MetadataChunk::new(context.clone(), content)
            })
            .collect()
    }
}

impl TextSplitter for MarkdownRecursiveSplitter {
    fn split(&self, text: &str, length: &LengthFn) -> Vec<String> {
        self.split_content(text, length)
    }
}

/// Split `text` at lines holding an ATX header of exactly `level`.
///
/// Each part keeps its header line. Returns `None` when the split would not
/// partition the text (no matching header, or a single matching header on
/// the first line).
fn split_at_header_level(text: &str, level: usize) -> Option<Vec<String>> {
    let mut parts: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if matches!(parse_header(line), Some((found, _)) if found == level)
            && !current.is_empty()
        {
            parts.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        parts.push(current);
    }

    if parts.len() > 1 {
        Some(parts.into_iter().map(|lines| lines.join("\n")).collect())
    } else {
        None
    }
}
