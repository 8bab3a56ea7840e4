use std::collections::VecDeque;

use crate::config::SplitConfig;
use crate::length::LengthFn;

/// A strategy that turns text into an ordered sequence of chunks
pub trait TextSplitter {
    /// Split `text` into chunks, measured by `length`
    fn split(&self, text: &str, length: &LengthFn) -> Vec<String>;
}

/// Merge candidate fragments into chunks bounded by `config.chunk_size`.
///
/// Maintains a FIFO window of pending fragments and a running total of their
/// sizes plus the inter-fragment separator cost. When appending the next
/// fragment would overflow the budget, the window is flushed as one chunk and
/// then drained from the front until the remainder fits inside the overlap
/// budget and leaves room for the incoming fragment. The retained tail
/// becomes the next chunk's leading overlap.
///
/// A single fragment larger than `chunk_size` is never split here; it passes
/// through as an oversized chunk and the caller's cascading strategy is
/// responsible for breaking it down further.
pub fn merge_splits<S: AsRef<str>>(
    splits: &[S],
    separator: &str,
    length: &LengthFn,
    config: &SplitConfig,
) -> Vec<String> {
    let separator_len = length(separator);
    let mut chunks = Vec::new();
    let mut window: VecDeque<&str> = VecDeque::new();
    let mut total = 0usize;

    for fragment in splits {
        let fragment = fragment.as_ref();
        let fragment_len = length(fragment);
        let sep_cost = if window.is_empty() { 0 } else { separator_len };

        if total + fragment_len + sep_cost > config.chunk_size && !window.is_empty() {
            if total > config.chunk_size {
                log::warn!(
                    "created a chunk of {total} units, longer than the configured {}",
                    config.chunk_size
                );
            }
            if let Some(chunk) = join_window(&window, separator) {
                chunks.push(chunk);
            }
            // Drain the front until the retained tail fits the overlap budget
            // and the incoming fragment no longer overflows.
            while total > config.chunk_overlap
                || (total + fragment_len + if window.is_empty() { 0 } else { separator_len }
                    > config.chunk_size
                    && total > 0)
            {
                let Some(front) = window.pop_front() else {
                    break;
                };
                let sep = if window.is_empty() { 0 } else { separator_len };
                total = total.saturating_sub(length(front) + sep);
            }
        }

        window.push_back(fragment);
        total += fragment_len + if window.len() > 1 { separator_len } else { 0 };
    }

    if let Some(chunk) = join_window(&window, separator) {
        chunks.push(chunk);
    }
    chunks
}

/// Join chunk fragments with `separator` and trim the result.
///
/// Returns `None` when the trimmed result is empty, never an empty string.
#[must_use]
pub fn join_chunks<S: AsRef<str>>(chunks: &[S], separator: &str) -> Option<String> {
    let joined = chunks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator);
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn join_window(window: &VecDeque<&str>, separator: &str) -> Option<String> {
    let parts: Vec<&str> = window.iter().copied().collect();
    join_chunks(&parts, separator)
}
