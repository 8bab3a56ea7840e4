use unicode_segmentation::UnicodeSegmentation;

/// Caller-supplied size measure mapping text to a length in arbitrary units
/// (characters, tokens, graphemes, ...). The splitters never assume a unit.
pub type LengthFn = dyn Fn(&str) -> usize + Send + Sync;

/// Length in Unicode scalar values
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Length in extended grapheme clusters
#[must_use]
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
