use pretty_assertions::assert_eq;
use textseg_splitter::{char_len, join_chunks, RecursiveSplitter, SplitConfig, TextSplitter};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn splitter(chunk_size: usize, chunk_overlap: usize) -> RecursiveSplitter {
    RecursiveSplitter::new(SplitConfig::with_limits(chunk_size, chunk_overlap).unwrap())
}

#[test]
fn chunks_stay_within_budget_except_atomic_fragments() {
    init_logging();

    let text = "First sentence here. Second sentence follows. Third sentence closes; \
                a clause trails: and a line\nbreaks it up. Done!";
    let chunks = splitter(40, 5).split(text, &char_len);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        // Budget can only be exceeded by fragments no separator applies to.
        if char_len(chunk) > 40 {
            assert!(
                !chunk.contains('.') && !chunk.contains('\n'),
                "oversized chunk still contains separators: {chunk:?}"
            );
        }
    }
}

#[test]
fn short_input_reconstructs_modulo_whitespace() {
    init_logging();

    for text in ["ab.cd", "a. b", "one; two; three"] {
        let chunks = splitter(100, 10).split(text, &char_len);
        let rejoined = join_chunks(&chunks, "").expect("non-empty input must rejoin");

        let squeeze = |s: &str| s.split_whitespace().collect::<String>();
        assert_eq!(squeeze(&rejoined), squeeze(text), "input {text:?}");
    }
}

#[test]
fn whitespace_only_input_yields_no_chunks() {
    init_logging();

    assert!(splitter(50, 5).split(" \n \r\n ", &char_len).is_empty());
}

#[test]
fn overlap_carries_fragments_across_chunk_boundaries() {
    init_logging();

    // Four equal fragments, budget for two per chunk, overlap keeps one.
    let chunks = splitter(5, 2).split("aa.bb.cc.dd", &char_len);

    assert_eq!(chunks, vec!["aa.bb", "bb.cc", "cc.dd"]);
}

#[test]
fn length_function_is_caller_defined() {
    init_logging();

    // A word-count measure: every fragment weighs its word count.
    let word_len = |s: &str| s.split_whitespace().count();
    let config = SplitConfig::with_limits(3, 0).unwrap();
    let chunks = RecursiveSplitter::new(config).split(
        "one two three. four five six. seven eight nine",
        &word_len,
    );

    assert_eq!(chunks.len(), 3);
    for chunk in &chunks {
        assert!(word_len(chunk) <= 3, "chunk too heavy: {chunk:?}");
    }
}
