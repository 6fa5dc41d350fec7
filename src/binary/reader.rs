// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index reader with lazy section caches.
//!
//! The reader owns a file handle, a stateful cursor, and two caches that
//! fill on first use. That makes it cheap to open and deliberately not
//! thread-safe: concurrent callers hold one reader each, or serialize
//! access behind a mutex.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

use super::header::IndexHeader;
use super::{read_string_u16, read_string_u8, read_u32};
use crate::error::Result;
use crate::types::DocumentInfo;

/// Read-only view of one index file.
#[derive(Debug)]
pub struct IndexReader {
    file: BufReader<File>,
    header: IndexHeader,
    docs_cache: HashMap<u32, DocumentInfo>,
    inverted_cache: HashMap<String, Vec<u32>>,
    docs_loaded: bool,
    inverted_loaded: bool,
}

impl IndexReader {
    /// Open an index file and validate its header.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = BufReader::new(File::open(path)?);
        let header = IndexHeader::read(&mut file)?;
        Ok(Self {
            file,
            header,
            docs_cache: HashMap::new(),
            inverted_cache: HashMap::new(),
            docs_loaded: false,
            inverted_loaded: false,
        })
    }

    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    /// Load the forward section into the doc_id → info cache. Idempotent;
    /// after the first call the cursor sits at the start of the inverted
    /// section.
    pub fn load_documents(&mut self) -> Result<&HashMap<u32, DocumentInfo>> {
        if !self.docs_loaded {
            self.file.seek(SeekFrom::Start(self.header.forward_offset))?;
            self.docs_cache.reserve(self.header.num_documents as usize);

            for _ in 0..self.header.num_documents {
                let doc_id = read_u32(&mut self.file)?;
                let title = read_string_u16(&mut self.file)?;
                let url = read_string_u16(&mut self.file)?;
                self.docs_cache.insert(doc_id, DocumentInfo { doc_id, title, url });
            }

            self.docs_loaded = true;
        }
        Ok(&self.docs_cache)
    }

    /// Load the inverted section into the term → postings cache.
    /// Idempotent. Loads the forward section first so the cursor is
    /// positioned at the inverted section's term count.
    pub fn load_inverted_index(&mut self) -> Result<&HashMap<String, Vec<u32>>> {
        if !self.inverted_loaded {
            self.load_documents()?;

            let num_terms = read_u32(&mut self.file)?;
            self.inverted_cache.reserve(num_terms as usize);

            for _ in 0..num_terms {
                let term = read_string_u8(&mut self.file)?;
                let df = read_u32(&mut self.file)?;
                let mut postings = Vec::with_capacity(df as usize);
                for _ in 0..df {
                    postings.push(read_u32(&mut self.file)?);
                }
                self.inverted_cache.insert(term, postings);
            }

            self.inverted_loaded = true;
        }
        Ok(&self.inverted_cache)
    }

    /// Posting list for a term. Unknown terms yield an empty list, not an
    /// error.
    pub fn get_posting_list(&mut self, term: &str) -> Result<Vec<u32>> {
        self.load_inverted_index()?;
        Ok(self.inverted_cache.get(term).cloned().unwrap_or_default())
    }

    /// All doc_ids known to the forward index, ascending.
    pub fn get_all_doc_ids(&mut self) -> Result<Vec<u32>> {
        self.load_documents()?;
        let mut ids: Vec<u32> = self.docs_cache.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Document descriptor, or the empty sentinel for an unknown id.
    pub fn get_document(&mut self, doc_id: u32) -> Result<DocumentInfo> {
        self.load_documents()?;
        Ok(self.docs_cache.get(&doc_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::IndexWriter;
    use crate::error::Error;
    use std::io::Write;

    fn write_small_index(path: &Path) {
        let docs = vec![
            DocumentInfo {
                doc_id: 0,
                title: "Кот".to_string(),
                url: "https://ru.wikipedia.org/wiki/Кот".to_string(),
            },
            DocumentInfo {
                doc_id: 1,
                title: "Собака".to_string(),
                url: "https://ru.wikipedia.org/wiki/Собака".to_string(),
            },
        ];
        let index = HashMap::from([
            ("кот".to_string(), vec![0]),
            ("собака".to_string(), vec![1]),
            ("животное".to_string(), vec![0, 1]),
        ]);

        let mut writer = IndexWriter::create(path).unwrap();
        writer.write_forward_index(&docs).unwrap();
        writer.write_inverted_index(&index).unwrap();
        writer.finalize().unwrap();
    }

    #[test]
    fn loads_are_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");
        write_small_index(&path);

        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.load_documents().unwrap().len(), 2);
        assert_eq!(reader.load_documents().unwrap().len(), 2);
        assert_eq!(reader.load_inverted_index().unwrap().len(), 3);
        assert_eq!(reader.load_inverted_index().unwrap().len(), 3);
    }

    #[test]
    fn posting_lookup_without_explicit_loads() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");
        write_small_index(&path);

        // get_posting_list pulls both sections in on demand.
        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.get_posting_list("животное").unwrap(), vec![0, 1]);
        assert_eq!(reader.get_posting_list("кит").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn unknown_doc_id_yields_sentinel() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");
        write_small_index(&path);

        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.get_document(99).unwrap(), DocumentInfo::default());
        assert_eq!(reader.get_document(1).unwrap().title, "Собака");
    }

    #[test]
    fn all_doc_ids_are_ascending() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.korpus");
        write_small_index(&path);

        let mut reader = IndexReader::open(&path).unwrap();
        assert_eq!(reader.get_all_doc_ids().unwrap(), vec![0, 1]);
    }

    #[test]
    fn garbage_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("not-an-index");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"definitely not an index file, padded out long enough")
            .unwrap();

        let err = IndexReader::open(&path).unwrap_err();
        assert!(matches!(err, Error::BadMagic { .. }));
    }
}
