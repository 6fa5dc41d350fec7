//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use korpus::binary::IndexWriter;
use korpus::build::{Indexer, JsonlStore};
use korpus::{DocumentInfo, RawDocument};

/// Write a JSONL corpus file into `dir` and return its path.
pub fn write_corpus(dir: &tempfile::TempDir, docs: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join("corpus.jsonl");
    let mut file = std::fs::File::create(&path).expect("create corpus file");
    for (url, html) in docs {
        let record = RawDocument {
            url: url.to_string(),
            html: html.to_string(),
        };
        let line = serde_json::to_string(&record).expect("serialize record");
        writeln!(file, "{line}").expect("write record");
    }
    path
}

/// Build an index from (url, html) pairs through the full pipeline.
/// Returns the tempdir (keep it alive) and the index path.
pub fn build_index(docs: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let corpus = write_corpus(&dir, docs);
    let index_path = dir.path().join("index.korpus");

    let store = JsonlStore::open(&corpus, None).expect("open corpus");
    Indexer::new()
        .index_corpus(store, &index_path)
        .expect("build index");

    (dir, index_path)
}

/// Write an index file straight through the writer from prepared maps,
/// bypassing the tokenizer. For format-level tests.
pub fn write_raw_index(
    docs: &[DocumentInfo],
    inverted: &HashMap<String, Vec<u32>>,
) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("index.korpus");

    let mut writer = IndexWriter::create(&path).expect("create writer");
    writer.write_forward_index(docs).expect("write forward");
    writer.write_inverted_index(inverted).expect("write inverted");
    writer.finalize().expect("finalize");

    (dir, path)
}

pub fn doc(doc_id: u32, title: &str, url: &str) -> DocumentInfo {
    DocumentInfo {
        doc_id,
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// The boolean-scenario corpus: doc 0 has {кот, мышь}, doc 1 has
/// {кот, собака}, doc 2 has {собака}.
pub fn boolean_corpus() -> (tempfile::TempDir, PathBuf) {
    build_index(&[
        (
            "https://example.org/0",
            "<html><head><title>Кот и мышь</title></head><body>кот мышь</body></html>",
        ),
        (
            "https://example.org/1",
            "<html><head><title>Кот и собака</title></head><body>кот собака</body></html>",
        ),
        (
            "https://example.org/2",
            "<html><head><title>Собака</title></head><body>собака</body></html>",
        ),
    ])
}
