// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Indexing pipeline: document stream → tokenizer → in-memory maps → writer.
//!
//! The pipeline is a single pass. Each document gets the next dense doc_id,
//! its HTML is reduced to a title and a token stream, and every *unique*
//! token appends that doc_id to its posting list. Because ids are handed out
//! in ascending order and each term sees a given document once, posting
//! lists come out sorted without any explicit sort.
//!
//! The index is written complete — stopwords stay in — so filtering remains
//! a query-side decision rather than something baked into the file.

pub mod store;

pub use store::JsonlStore;

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::binary::IndexWriter;
use crate::error::Result;
use crate::tokenize::{Tokenizer, TokenizerConfig};
use crate::types::{DocumentInfo, RawDocument};

/// Counters accumulated while indexing, reported after a build.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_tokens: usize,
    pub total_text_bytes: usize,
    pub unique_terms: usize,
    pub total_postings: usize,
    pub avg_term_bytes: f64,
    pub indexing_time_sec: f64,
}

impl IndexStats {
    pub fn docs_per_second(&self) -> f64 {
        if self.indexing_time_sec <= 0.0 {
            0.0
        } else {
            self.total_documents as f64 / self.indexing_time_sec
        }
    }

    pub fn kb_per_second(&self) -> f64 {
        if self.indexing_time_sec <= 0.0 {
            0.0
        } else {
            (self.total_text_bytes as f64 / 1024.0) / self.indexing_time_sec
        }
    }
}

/// One-shot index builder.
///
/// Consumes a stream of [`RawDocument`] records and persists a single index
/// file. The builder is single-use: feed it one corpus, get one index and
/// its statistics back.
pub struct Indexer {
    tokenizer: Tokenizer,
    documents: Vec<DocumentInfo>,
    inverted: HashMap<String, Vec<u32>>,
    stats: IndexStats,
    progress: bool,
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(TokenizerConfig {
                min_length: 2,
                lowercase: true,
                remove_stopwords: false,
            }),
            documents: Vec::new(),
            inverted: HashMap::new(),
            stats: IndexStats::default(),
            progress: false,
        }
    }

    /// Show an indicatif spinner while indexing. Off by default so library
    /// callers and tests stay quiet.
    pub fn with_progress(mut self) -> Self {
        self.progress = true;
        self
    }

    /// Consume the document stream and persist the index at `output`.
    ///
    /// Records with empty HTML are skipped without consuming a doc_id. Any
    /// failure while writing removes the partial file before the error
    /// propagates — a half-written index is worse than none.
    pub fn index_corpus<I, P>(mut self, source: I, output: P) -> Result<IndexStats>
    where
        I: IntoIterator<Item = Result<RawDocument>>,
        P: AsRef<Path>,
    {
        let started = Instant::now();
        let progress = self.spinner();

        for record in source {
            let document = record?;
            self.add_document(&document);
            progress.set_position(self.documents.len() as u64);
        }

        self.stats.total_documents = self.documents.len();
        self.stats.unique_terms = self.inverted.len();
        self.stats.total_postings = self.inverted.values().map(Vec::len).sum();
        self.stats.avg_term_bytes = if self.inverted.is_empty() {
            0.0
        } else {
            let term_bytes: usize = self.inverted.keys().map(String::len).sum();
            term_bytes as f64 / self.inverted.len() as f64
        };

        progress.finish_with_message(format!(
            "{} documents, {} terms",
            self.stats.total_documents, self.stats.unique_terms
        ));

        let output = output.as_ref();
        if let Err(e) = self.write_index(output) {
            let _ = fs::remove_file(output);
            return Err(e);
        }

        self.stats.indexing_time_sec = started.elapsed().as_secs_f64();
        Ok(self.stats)
    }

    /// Feed one document through the tokenizer into the in-memory maps.
    fn add_document(&mut self, document: &RawDocument) {
        if document.html.is_empty() {
            return;
        }

        let doc_id = self.documents.len() as u32;
        let title = self.tokenizer.extract_title(&document.html);
        let text = self.tokenizer.extract_text(&document.html);
        let tokens = self.tokenizer.tokenize(&text);

        self.documents.push(DocumentInfo {
            doc_id,
            title,
            url: document.url.clone(),
        });

        let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            self.inverted.entry(term.to_string()).or_default().push(doc_id);
        }

        self.stats.total_tokens += tokens.len();
        self.stats.total_text_bytes += text.len();
    }

    fn write_index(&self, path: &Path) -> Result<()> {
        let mut writer = IndexWriter::create(path)?;
        writer.write_forward_index(&self.documents)?;
        writer.write_inverted_index(&self.inverted)?;
        writer.finalize()
    }

    fn spinner(&self) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} {pos} docs {msg}")
                .unwrap()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        bar.set_prefix("Indexing");
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::IndexReader;

    fn record(url: &str, html: &str) -> Result<RawDocument> {
        Ok(RawDocument {
            url: url.to_string(),
            html: html.to_string(),
        })
    }

    #[test]
    fn empty_html_does_not_consume_a_doc_id() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");

        let stats = Indexer::new()
            .index_corpus(
                vec![
                    record("https://a", "<title>A</title>кот"),
                    record("https://empty", ""),
                    record("https://b", "<title>B</title>собака"),
                ],
                &path,
            )
            .unwrap();

        assert_eq!(stats.total_documents, 2);

        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.get_all_doc_ids().unwrap(), vec![0, 1]);
        assert_eq!(reader.get_document(1).unwrap().url, "https://b");
    }

    #[test]
    fn duplicate_tokens_post_once_per_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");

        Indexer::new()
            .index_corpus(
                vec![record("https://a", "<body>кот кот кот</body>")],
                &path,
            )
            .unwrap();

        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.get_posting_list("кот").unwrap(), vec![0]);
    }

    #[test]
    fn stats_count_tokens_and_postings() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");

        let stats = Indexer::new()
            .index_corpus(
                vec![
                    record("https://a", "<body>кот мышь</body>"),
                    record("https://b", "<body>кот собака</body>"),
                ],
                &path,
            )
            .unwrap();

        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_tokens, 4);
        assert_eq!(stats.unique_terms, 3);
        // кот posts twice, мышь and собака once each.
        assert_eq!(stats.total_postings, 4);
    }

    #[test]
    fn source_error_propagates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");

        let source: Vec<Result<RawDocument>> = vec![
            record("https://a", "<body>кот</body>"),
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into()),
        ];

        assert!(Indexer::new().index_corpus(source, &path).is_err());
    }

    #[test]
    fn failed_write_removes_partial_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");

        // A 300-letter word becomes a 300-byte term, over the u8 limit.
        let long_word = "x".repeat(300);
        let html = format!("<body>{long_word}</body>");
        let err = Indexer::new()
            .index_corpus(vec![record("https://a", &html)], &path)
            .unwrap_err();

        assert!(matches!(err, crate::Error::FormatLimit { what: "term", .. }));
        assert!(!path.exists());
    }
}
