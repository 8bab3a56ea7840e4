use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminator followed by whitespace. The automaton runs in linear
/// time, so pathological inputs cannot stall the match.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Segment `text` into sentences at `.`/`?`/`!` followed by whitespace,
/// keeping the terminator with its sentence. Blank segments are dropped.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminator is a single ASCII byte; keep it with the sentence.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// For each sentence, concatenate up to `buffer_size` neighbors on both
/// sides (clamped at the ends). The windows exist only for embedding; the
/// final chunks are sliced from the original sentences.
#[must_use]
pub fn buffered_sentences(sentences: &[String], buffer_size: usize) -> Vec<String> {
    sentences
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            let start = idx.saturating_sub(buffer_size);
            let end = (idx + buffer_size + 1).min(sentences.len());
            sentences[start..end].join(" ")
        })
        .collect()
}
