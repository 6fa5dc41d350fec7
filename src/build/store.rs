// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSONL-backed document source.
//!
//! One JSON object per line, `{"url": "...", "html": "..."}`. The pipeline
//! consumes any stream of [`RawDocument`] results; this store is the
//! file-backed implementation the CLI uses. Blank lines are skipped so
//! hand-edited corpora with trailing newlines stay valid.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::Result;
use crate::types::RawDocument;

/// Streaming reader over a JSONL corpus file.
pub struct JsonlStore {
    lines: Lines<BufReader<File>>,
    remaining: Option<usize>,
}

impl JsonlStore {
    /// Open a corpus file. `limit` bounds how many records the stream
    /// yields; `None` streams the whole file.
    pub fn open<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            remaining: limit,
        })
    }
}

impl Iterator for JsonlStore {
    type Item = Result<RawDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }

            return Some(
                serde_json::from_str::<RawDocument>(&line)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into()),
            );
        }
    }
}
