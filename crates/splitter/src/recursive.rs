use crate::config::SplitConfig;
use crate::length::LengthFn;
use crate::splitter::{merge_splits, TextSplitter};

/// Separator-cascading splitter.
///
/// Scans the configured separators in priority order and splits on the first
/// one present in the text. Fragments below the chunk size are buffered and
/// re-merged with overlap; oversized fragments re-enter the cascade, which
/// naturally advances past already-tried separators because a fragment no
/// longer contains the separator it was split on. A fragment no separator
/// applies to is emitted whole, even when oversized.
///
/// The cascade runs on an explicit worklist, so depth is bounded regardless
/// of how deeply nested the input is.
#[derive(Debug, Clone, Default)]
pub struct RecursiveSplitter {
    config: SplitConfig,
}

enum Task {
    Split(String),
    Merge(Vec<String>, String),
}

impl RecursiveSplitter {
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

    /// The first configured separator present in `text`
    fn first_separator(&self, text: &str) -> Option<&str> {
        self.config
            .separators
            .iter()
            .map(String::as_str)
            .find(|sep| !sep.is_empty() && text.contains(*sep))
    }
}

impl TextSplitter for RecursiveSplitter {
    fn split(&self, text: &str, length: &LengthFn) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut stack = vec![Task::Split(text.to_string())];

        while let Some(task) = stack.pop() {
            match task {
                Task::Merge(fragments, separator) => {
                    chunks.extend(merge_splits(&fragments, &separator, length, &self.config));
                }
                Task::Split(text) => {
                    let Some(separator) = self.first_separator(&text).map(str::to_string) else {
                        // No separator applies: emit the fragment whole,
                        // oversized or not.
                        let fragment = text.trim();
                        if !fragment.is_empty() {
                            chunks.push(fragment.to_string());
                        }
                        continue;
                    };

                    let fragments: Vec<String> = text
                        .split(separator.as_str())
                        .map(str::trim)
                        .filter(|fragment| !fragment.is_empty())
                        .map(str::to_string)
                        .collect();

                    let mut tasks: Vec<Task> = Vec::new();
                    let mut buffered: Vec<String> = Vec::new();
                    for fragment in fragments {
                        if length(&fragment) < self.config.chunk_size {
                            buffered.push(fragment);
                        } else {
                            if !buffered.is_empty() {
                                tasks.push(Task::Merge(
                                    std::mem::take(&mut buffered),
                                    separator.clone(),
                                ));
                            }
                            tasks.push(Task::Split(fragment));
                        }
                    }
                    if !buffered.is_empty() {
                        tasks.push(Task::Merge(buffered, separator.clone()));
                    }
                    // Reverse so the tasks pop in document order.
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
