// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! korpus CLI: build, search, and inspect boolean search indexes.
//!
//! ```bash
//! # Build an index from a JSONL corpus
//! korpus build --input corpus.jsonl --output wiki.korpus
//!
//! # One-shot query
//! korpus search wiki.korpus "кот && !собака" --limit 10
//!
//! # Interactive mode (reads queries from stdin)
//! korpus search wiki.korpus
//!
//! # Look inside the file
//! korpus inspect wiki.korpus
//! ```

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use korpus::binary::{IndexHeader, IndexReader};
use korpus::build::{Indexer, JsonlStore};
use korpus::search::Searcher;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Build {
            input,
            output,
            limit,
        } => run_build(&input, &output, limit),
        Commands::Search {
            file,
            query,
            limit,
            offset,
            json,
            stats,
        } => run_search(&file, query.as_deref(), limit, offset, json, stats),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_build(input: &str, output: &str, limit: Option<usize>) -> korpus::Result<()> {
    let store = JsonlStore::open(input, limit)?;
    let stats = Indexer::new().with_progress().index_corpus(store, output)?;

    eprintln!();
    eprintln!("Indexing complete in {:.2} sec", stats.indexing_time_sec);
    eprintln!("  documents:      {}", stats.total_documents);
    eprintln!("  unique terms:   {}", stats.unique_terms);
    eprintln!("  total tokens:   {}", stats.total_tokens);
    eprintln!("  total postings: {}", stats.total_postings);
    eprintln!("  avg term bytes: {:.2}", stats.avg_term_bytes);
    eprintln!(
        "  speed:          {:.1} docs/sec, {:.1} KB/sec",
        stats.docs_per_second(),
        stats.kb_per_second()
    );
    eprintln!("  output:         {output}");
    Ok(())
}

fn run_search(
    file: &str,
    query: Option<&str>,
    limit: usize,
    offset: usize,
    json: bool,
    stats: bool,
) -> korpus::Result<()> {
    let mut searcher = Searcher::open(file)?;

    if stats {
        println!("documents: {}", searcher.num_documents());
        println!("terms:     {}", searcher.num_terms());
    }

    if let Some(query) = query {
        return execute_query(&mut searcher, query, limit, offset, json);
    }

    // Interactive mode: one query per line until EOF.
    eprintln!("Interactive mode. Ctrl+D to exit.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!(">>> ");
        stdout.flush().map_err(korpus::Error::Io)?;
        line.clear();
        if stdin.lock().read_line(&mut line).map_err(korpus::Error::Io)? == 0 {
            break;
        }
        let query = line.trim();
        if !query.is_empty() {
            execute_query(&mut searcher, query, limit, offset, json)?;
        }
    }
    Ok(())
}

fn execute_query(
    searcher: &mut Searcher,
    query: &str,
    limit: usize,
    offset: usize,
    json: bool,
) -> korpus::Result<()> {
    let response = searcher.search(query, limit, offset)?;

    if json {
        let rendered = serde_json::to_string_pretty(&response).map_err(io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    println!();
    println!("=== Query: {} ===", response.query);
    println!(
        "Found: {} in {:.2} ms",
        response.total_count, response.query_time_ms
    );
    println!();
    for (i, result) in response.results.iter().enumerate() {
        println!("{}. {}", offset + i + 1, result.title);
        println!("   {}", result.url);
        println!();
    }
    Ok(())
}

fn run_inspect(file: &str) -> korpus::Result<()> {
    let mut reader = IndexReader::open(file)?;
    let header = reader.header().clone();
    let file_size = std::fs::metadata(file)?.len();

    // The header only records where the forward section starts; its length
    // falls out of the records themselves.
    let docs = reader.load_documents()?;
    let forward_bytes: u64 = docs
        .values()
        .map(|d| 4 + 2 + d.title.len() as u64 + 2 + d.url.len() as u64)
        .sum();
    let inverted_bytes = file_size
        .saturating_sub(header.forward_offset)
        .saturating_sub(forward_bytes);

    println!("{file}");
    println!("  version:        {}.{}", header.version_major, header.version_minor);
    println!("  flags:          {:#010x}", header.flags);
    println!("  documents:      {}", header.num_documents);
    println!("  terms:          {}", header.num_terms);
    println!("  forward offset: {}", header.forward_offset);
    println!();
    println!("  SECTION    BYTES");
    println!("  header     {}", IndexHeader::SIZE);
    println!("  forward    {forward_bytes}");
    println!("  inverted   {inverted_bytes}");
    println!("  total      {file_size}");
    Ok(())
}
