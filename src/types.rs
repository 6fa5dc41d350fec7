// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the index and its query responses.
//!
//! Everything here is plain data. The invariants that matter:
//!
//! - **DocumentInfo**: `doc_id` is dense, assigned in ingestion order from 0.
//!   Title and URL must each fit a u16 length prefix on disk; the writer
//!   rejects records that don't.
//! - **Posting lists** (`Vec<u32>` elsewhere): strictly ascending doc_ids,
//!   no duplicates. Every id in a posting list has a forward record.
//!
//! The all-empty `DocumentInfo::default()` doubles as the sentinel returned
//! for a doc_id the forward map does not contain.

use serde::{Deserialize, Serialize};

/// Descriptor of one indexed document: what the forward section stores and
/// what search results are assembled from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub doc_id: u32,
    pub title: String,
    pub url: String,
}

/// A record from the document source: raw HTML plus where it came from.
///
/// This is the only shape the indexing pipeline consumes. Where the records
/// live (a JSONL file here, a database in other deployments) is the source's
/// business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub url: String,
    pub html: String,
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: u32,
    pub title: String,
    pub url: String,
}

/// What [`Searcher::search`](crate::search::Searcher::search) hands to the
/// presentation layer.
///
/// `results` is the `[offset, offset + limit)` window of the full match set
/// in ascending doc_id order; `total_count` is the size of the whole set.
/// `query_time_ms` is wall-clock and therefore the one field two identical
/// searches are allowed to disagree on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_count: usize,
    pub query_time_ms: f64,
}
