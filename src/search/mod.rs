// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over sorted posting lists.
//!
//! Posting lists come off disk already sorted ascending, so AND, OR, and NOT
//! are two-pointer merges over sorted vectors — no set containers, no
//! re-sorting, and results stay in ascending doc_id order by construction.
//! NOT needs a universe to subtract from: the set of doc_ids present in the
//! forward index, materialized once per searcher and cached.

use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;

use crate::binary::IndexReader;
use crate::error::Result;
use crate::query::{QueryNode, QueryParser};
use crate::tokenize::{Tokenizer, TokenizerConfig};
use crate::types::{SearchResponse, SearchResult};

/// Evaluates boolean queries against one open index.
///
/// Stateful like the reader it wraps (lazy caches, file cursor), so one
/// searcher per worker, or a mutex around one.
pub struct Searcher {
    reader: IndexReader,
    tokenizer: Tokenizer,
    universe: Option<Vec<u32>>,
}

impl Searcher {
    /// Open the index at `path`.
    ///
    /// The tokenizer mirrors the indexing pipeline's configuration —
    /// lowercasing on, stopwords kept — so query terms normalize to exactly
    /// the on-disk term form.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = IndexReader::open(path)?;
        let tokenizer = Tokenizer::new(TokenizerConfig {
            min_length: 2,
            lowercase: true,
            remove_stopwords: false,
        });
        Ok(Self {
            reader,
            tokenizer,
            universe: None,
        })
    }

    pub fn num_documents(&self) -> u32 {
        self.reader.header().num_documents
    }

    pub fn num_terms(&self) -> u32 {
        self.reader.header().num_terms
    }

    /// Parse and evaluate `query`, returning the `[offset, offset + limit)`
    /// window of matches in ascending doc_id order.
    ///
    /// A query that parses to nothing — empty or all operators — returns an
    /// empty response rather than an error, and so does a query whose terms
    /// are simply not in the index.
    pub fn search(&mut self, query: &str, limit: usize, offset: usize) -> Result<SearchResponse> {
        let started = Instant::now();
        let mut response = SearchResponse {
            query: query.to_string(),
            results: Vec::new(),
            total_count: 0,
            query_time_ms: 0.0,
        };

        let Some(ast) = QueryParser::parse(query) else {
            return Ok(response);
        };

        let doc_ids = self.evaluate(&ast)?;
        response.total_count = doc_ids.len();

        let from = offset.min(doc_ids.len());
        let to = offset.saturating_add(limit).min(doc_ids.len());
        for &doc_id in &doc_ids[from..to] {
            let info = self.reader.get_document(doc_id)?;
            response.results.push(SearchResult {
                doc_id,
                title: info.title,
                url: info.url,
            });
        }

        response.query_time_ms = started.elapsed().as_secs_f64() * 1_000.0;
        Ok(response)
    }

    /// Recursively evaluate a query node into an ascending doc_id list.
    fn evaluate(&mut self, node: &QueryNode) -> Result<Vec<u32>> {
        match node {
            QueryNode::Term(text) => {
                let term = self.tokenizer.normalize(text);
                if term.is_empty() {
                    return Ok(Vec::new());
                }
                self.reader.get_posting_list(&term)
            }
            QueryNode::Not(child) => {
                let matched = self.evaluate(child)?;
                let universe = self.universe()?;
                Ok(difference(universe, &matched))
            }
            QueryNode::And(children) => {
                let mut children = children.iter();
                let mut result = match children.next() {
                    Some(first) => self.evaluate(first)?,
                    None => return Ok(Vec::new()),
                };
                for child in children {
                    if result.is_empty() {
                        break;
                    }
                    let right = self.evaluate(child)?;
                    result = intersect(&result, &right);
                }
                Ok(result)
            }
            QueryNode::Or(children) => {
                let mut result = Vec::new();
                for child in children {
                    let right = self.evaluate(child)?;
                    result = union(&result, &right);
                }
                Ok(result)
            }
        }
    }

    fn universe(&mut self) -> Result<&[u32]> {
        if self.universe.is_none() {
            self.universe = Some(self.reader.get_all_doc_ids()?);
        }
        Ok(self.universe.as_deref().unwrap_or(&[]))
    }
}

/// Intersection of two ascending id lists.
pub fn intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Union of two ascending id lists.
pub fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Ids in `a` that are not in `b`, both ascending.
pub fn difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out
}
