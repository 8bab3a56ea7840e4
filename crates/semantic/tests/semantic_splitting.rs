use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use textseg_semantic::{
    EmbeddingProvider, SemanticError, SemanticSplitConfig, SemanticSplitter,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test double returning canned vectors and counting invocations
struct MockProvider {
    vectors: Vec<Vec<f32>>,
    calls: AtomicUsize,
    last_batch: Mutex<Vec<String>>,
}

impl MockProvider {
    fn new(vectors: Vec<Vec<f32>>) -> Self {
        Self {
            vectors,
            calls: AtomicUsize::new(0),
            last_batch: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_batch(&self) -> Vec<String> {
        self.last_batch.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingProvider for MockProvider {
    async fn embed(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_batch.lock().unwrap() = texts.to_vec();
        Ok(self.vectors.clone())
    }
}

/// Provider that always fails
struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed(&self, _texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        Err(anyhow!("embedding backend unavailable"))
    }
}

fn unbuffered(config_amount: f64) -> SemanticSplitConfig {
    SemanticSplitConfig {
        buffer_size: 0,
        ..SemanticSplitConfig::percentile(config_amount)
    }
}

#[tokio::test]
async fn single_sentence_short_circuits_without_embedding() {
    init_logging();

    let provider = MockProvider::new(vec![]);
    let splitter = SemanticSplitter::new(SemanticSplitConfig::default());

    let chunks = splitter
        .split("Only one sentence here.", &provider)
        .await
        .unwrap();

    assert_eq!(chunks, vec!["Only one sentence here."]);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn empty_input_yields_no_chunks_and_no_calls() {
    init_logging();

    let provider = MockProvider::new(vec![]);
    let splitter = SemanticSplitter::new(SemanticSplitConfig::default());

    assert!(splitter.split("", &provider).await.unwrap().is_empty());
    assert!(splitter.split("  \n ", &provider).await.unwrap().is_empty());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn distance_jump_becomes_a_breakpoint() {
    init_logging();

    // Two aligned vectors, then an orthogonal one: the topic changes after
    // the second sentence.
    let provider = MockProvider::new(vec![
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ]);
    let splitter = SemanticSplitter::new(unbuffered(95.0));

    let chunks = splitter
        .split("Dogs bark loudly. Cats meow softly. Stocks rose sharply.", &provider)
        .await
        .unwrap();

    assert_eq!(
        chunks,
        vec!["Dogs bark loudly. Cats meow softly.", "Stocks rose sharply."]
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn percentile_amount_100_never_splits() {
    init_logging();

    let provider = MockProvider::new(vec![
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ]);
    let splitter = SemanticSplitter::new(unbuffered(100.0));

    let chunks = splitter
        .split("Dogs bark loudly. Cats meow softly. Stocks rose sharply.", &provider)
        .await
        .unwrap();

    // No distance is strictly greater than the maximum distance.
    assert_eq!(chunks.len(), 1);
}

#[tokio::test]
async fn standard_deviation_threshold_detects_the_outlier() {
    init_logging();

    let provider = MockProvider::new(vec![
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ]);
    let config = SemanticSplitConfig {
        buffer_size: 0,
        ..SemanticSplitConfig::standard_deviation(1.0)
    };
    let splitter = SemanticSplitter::new(config);

    let chunks = splitter
        .split("One fact. Another fact. A third fact. Something else entirely.", &provider)
        .await
        .unwrap();

    assert_eq!(
        chunks,
        vec![
            "One fact. Another fact. A third fact.",
            "Something else entirely."
        ]
    );
}

#[tokio::test]
async fn buffered_windows_are_sent_in_one_batch() {
    init_logging();

    let provider = MockProvider::new(vec![
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
    ]);
    let config = SemanticSplitConfig::default(); // buffer_size = 1
    let splitter = SemanticSplitter::new(config);

    splitter
        .split("Alpha one. Beta two. Gamma three.", &provider)
        .await
        .unwrap();

    assert_eq!(provider.calls(), 1);
    assert_eq!(
        provider.last_batch(),
        vec![
            "Alpha one. Beta two.",
            "Alpha one. Beta two. Gamma three.",
            "Beta two. Gamma three.",
        ]
    );
}

#[tokio::test]
async fn provider_failure_propagates_unchanged() {
    init_logging();

    let splitter = SemanticSplitter::new(SemanticSplitConfig::default());
    let err = splitter
        .split("First sentence. Second sentence.", &FailingProvider)
        .await
        .unwrap_err();

    match err {
        SemanticError::Embedding(source) => {
            assert_eq!(source.to_string(), "embedding backend unavailable");
        }
        other => panic!("expected embedding error, got {other:?}"),
    }
}

#[tokio::test]
async fn short_batch_from_provider_is_rejected() {
    init_logging();

    let provider = MockProvider::new(vec![vec![1.0, 0.0]]);
    let splitter = SemanticSplitter::new(SemanticSplitConfig::default());

    let err = splitter
        .split("First sentence. Second sentence. Third sentence.", &provider)
        .await
        .unwrap_err();

    match err {
        SemanticError::EmbeddingCount { expected, actual } => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("expected count mismatch, got {other:?}"),
    }
}
