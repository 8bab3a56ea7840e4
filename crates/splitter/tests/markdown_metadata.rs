use pretty_assertions::assert_eq;
use textseg_splitter::{
    char_len, MarkdownHeaderSplitter, MarkdownRecursiveSplitter, MetadataSplitter, SplitConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const API_DOC: &str = "\
# Api Reference

## Connect

Connecting is described by **dial** and **retry** semantics in detail.

## Send

Sending covers payload encoding and the acknowledgement rules.
";

#[test]
fn chunks_carry_nearest_preceding_section_headers() {
    init_logging();

    let splitter = MarkdownHeaderSplitter::new(SplitConfig::with_limits(60, 10).unwrap());
    let chunks = splitter.split_with_metadata(API_DOC, &char_len);

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert_eq!(chunk.metadata.header(1), Some("Api Reference"));
    }

    let connect = chunks
        .iter()
        .find(|c| c.content.contains("Connecting"))
        .expect("connect body chunk");
    assert_eq!(connect.metadata.header(2), Some("Connect"));

    let send = chunks
        .iter()
        .find(|c| c.content.contains("Sending"))
        .expect("send body chunk");
    assert_eq!(send.metadata.header(2), Some("Send"));
}

#[test]
fn sibling_section_titles_never_leak_into_earlier_chunks() {
    init_logging();

    let splitter = MarkdownHeaderSplitter::new(SplitConfig::with_limits(60, 10).unwrap());
    let chunks = splitter.split_with_metadata(API_DOC, &char_len);

    let connect = chunks
        .iter()
        .find(|c| c.content.contains("Connecting"))
        .expect("connect body chunk");
    assert_ne!(connect.metadata.header(2), Some("Send"));
}

#[test]
fn stale_bold_context_collapses_to_most_recent_term() {
    init_logging();

    let splitter = MarkdownHeaderSplitter::new(SplitConfig::with_limits(60, 10).unwrap());
    let chunks = splitter.split_with_metadata(API_DOC, &char_len);

    let connect = chunks
        .iter()
        .find(|c| c.content.contains("Connecting"))
        .expect("connect body chunk");
    assert_eq!(connect.metadata.bold().to_vec(), vec!["dial", "retry"]);

    // The send body introduces no bold term, so only the most recent value
    // from the earlier traversal still applies.
    let send = chunks
        .iter()
        .find(|c| c.content.contains("Sending"))
        .expect("send body chunk");
    assert_eq!(send.metadata.bold().to_vec(), vec!["retry"]);
}

#[test]
fn metadata_entries_expose_the_ordered_mapping() {
    init_logging();

    let splitter = MarkdownHeaderSplitter::new(SplitConfig::with_limits(60, 10).unwrap());
    let chunks = splitter.split_with_metadata(API_DOC, &char_len);

    let send = chunks
        .iter()
        .find(|c| c.content.contains("Sending"))
        .expect("send body chunk");
    let keys: Vec<String> = send.metadata.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["Header_1", "Header_2", "Bold"]);
}

#[test]
fn recursive_markdown_strategy_tracks_headers_too() {
    init_logging();

    let text = "\
## Setup

The setup section explains installation in a fair amount of prose.

## Teardown

The teardown section explains cleanup in a fair amount of prose too.
";
    let splitter = MarkdownRecursiveSplitter::new(SplitConfig::with_limits(70, 0).unwrap());
    let chunks = splitter.split_with_metadata(text, &char_len);

    assert!(chunks.len() >= 2);
    let teardown = chunks
        .iter()
        .find(|c| c.content.contains("cleanup"))
        .expect("teardown chunk");
    assert_eq!(teardown.metadata.header(2), Some("Teardown"));
    assert_eq!(teardown.metadata.header(1), None);
}

#[test]
fn serialized_chunks_keep_their_metadata() {
    init_logging();

    let splitter = MarkdownHeaderSplitter::new(SplitConfig::with_limits(60, 10).unwrap());
    let chunks = splitter.split_with_metadata(API_DOC, &char_len);

    let json = serde_json::to_string(&chunks).expect("chunks serialize");
    assert!(json.contains("Api Reference"));
}
