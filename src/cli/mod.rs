// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the korpus command-line interface.
//!
//! Three subcommands: `build` to index a corpus, `search` to query an index
//! (one-shot or interactive), and `inspect` to dump an index file's header
//! and section sizes.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "korpus",
    about = "Boolean full-text search over HTML corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a JSONL corpus of {url, html} records
    Build {
        /// Corpus file, one JSON document per line
        #[arg(short, long)]
        input: String,

        /// Output index file
        #[arg(short, long, default_value = "index.korpus")]
        output: String,

        /// Index at most this many documents
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search an index; omit QUERY for an interactive prompt
    Search {
        /// Path to the index file
        file: String,

        /// Boolean query: &&, ||, !, parentheses; juxtaposition means AND
        query: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Skip this many results (pagination)
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,

        /// Print index statistics before searching
        #[arg(long)]
        stats: bool,
    },

    /// Print header fields and section sizes of an index file
    Inspect {
        /// Path to the index file
        file: String,
    },
}
