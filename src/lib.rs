//! Compact boolean full-text search over HTML corpora.
//!
//! korpus ingests `{url, html}` records, reduces each document to a title
//! and a stream of normalized terms, and persists a single-file index: a
//! fixed 32-byte header, a forward section mapping doc_id → (title, url),
//! and an inverted section mapping each term to its ascending posting list.
//! Queries are boolean expressions — `&&`, `||`, `!`, parentheses, and
//! juxtaposition as AND — evaluated as two-pointer merges over the sorted
//! posting lists.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐      ┌────────────┐      ┌────────────┐
//! │  tokenize  │─────▶│   build    │─────▶│   binary   │
//! │ (HTML →    │      │ (pipeline, │      │ (writer /  │
//! │  terms)    │      │  JSONL)    │      │  reader)   │
//! └────────────┘      └────────────┘      └────────────┘
//!       ▲                                       │
//!       │             ┌────────────┐            │
//!       └─────────────│   search   │◀───────────┘
//!                     │ (evaluator)│
//!                     └────────────┘
//!                           ▲
//!                     ┌────────────┐
//!                     │   query    │
//!                     │  (parser)  │
//!                     └────────────┘
//! ```
//!
//! Tokenization and query-term normalization share one lowercasing
//! transducer, so a term always means the same bytes at index time and at
//! query time. That agreement is the invariant everything else leans on.
//!
//! # Usage
//!
//! ```ignore
//! use korpus::build::{Indexer, JsonlStore};
//! use korpus::search::Searcher;
//!
//! let store = JsonlStore::open("corpus.jsonl", None)?;
//! Indexer::new().index_corpus(store, "wiki.korpus")?;
//!
//! let mut searcher = Searcher::open("wiki.korpus")?;
//! let response = searcher.search("кот && !собака", 10, 0)?;
//! for result in &response.results {
//!     println!("{} {}", result.title, result.url);
//! }
//! ```

pub mod binary;
pub mod build;
mod error;
pub mod query;
pub mod search;
pub mod tokenize;
mod types;

pub use error::{Error, Result};
pub use types::{DocumentInfo, RawDocument, SearchResponse, SearchResult};
