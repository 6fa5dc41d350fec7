// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML text extraction and tokenization.
//!
//! Everything here is byte-level on purpose. The index stores terms exactly
//! as the tokenizer emits them, and query terms go through the same
//! [`lowercase`] transducer, so the two sides agree byte-for-byte. Host
//! locale and Unicode case folding never enter the picture — they would fold
//! characters differently across platforms and silently break that
//! agreement.
//!
//! A "letter" is ASCII `[A-Za-z]` or a two-byte UTF-8 sequence with lead
//! byte `0xD0`/`0xD1` (the Cyrillic block). Digits, punctuation, and
//! whitespace separate tokens.

mod stopwords;

pub use stopwords::STOP_WORDS;

use std::collections::HashSet;

/// Tokenizer settings.
///
/// `min_length` counts **bytes**, not characters: a single Cyrillic letter
/// is two bytes and survives the default threshold of 2.
///
/// The indexing pipeline runs with `remove_stopwords: false` so the index is
/// complete; the filter exists for callers that want a smaller term space
/// and accept the loss.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    pub min_length: usize,
    pub lowercase: bool,
    pub remove_stopwords: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_length: 2,
            lowercase: true,
            remove_stopwords: true,
        }
    }
}

/// Turns HTML into titles, text, and normalized terms.
pub struct Tokenizer {
    config: TokenizerConfig,
    stop_words: HashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Extract the document title.
    ///
    /// Looks for the first `<title>` element (case-insensitive). Wiki-style
    /// suffixes are cut at the first `" — "` or `" - "`. Falls back to the
    /// first `<h1>` with its tags stripped, then to `"Untitled"`. The result
    /// is raw display text, not normalized.
    pub fn extract_title(&self, html: &str) -> String {
        let lower = html.to_ascii_lowercase();

        let tag_start = lower.find("<title>").or_else(|| lower.find("<title "));
        if let Some(tag_start) = tag_start {
            if let Some(gt) = html[tag_start..].find('>') {
                let content_start = tag_start + gt + 1;
                if let Some(end) = lower[content_start..].find("</title>") {
                    let mut title = &html[content_start..content_start + end];
                    if let Some(cut) = title.find(" — ") {
                        title = &title[..cut];
                    }
                    if let Some(cut) = title.find(" - ") {
                        title = &title[..cut];
                    }
                    return title.to_string();
                }
            }
        }

        if let Some(h1_start) = lower.find("<h1") {
            if let Some(gt) = html[h1_start..].find('>') {
                let content_start = h1_start + gt + 1;
                if let Some(end) = lower[content_start..].find("</h1>") {
                    return self.extract_text(&html[content_start..content_start + end]);
                }
            }
        }

        "Untitled".to_string()
    }

    /// Strip tags and the bodies of `<script>`, `<style>`, and `<title>`,
    /// collapse whitespace.
    ///
    /// Single linear scan. Each tag boundary becomes one space so that
    /// `Hi<b>there</b>` does not fuse into one token. Title text is body
    /// text to a browser but not to the index — it is captured separately
    /// by [`extract_title`](Self::extract_title).
    pub fn extract_text(&self, html: &str) -> String {
        let bytes = html.as_bytes();
        let mut text = Vec::with_capacity(bytes.len());

        let mut in_tag = false;
        let mut in_script = false;
        let mut in_style = false;
        let mut in_title = false;

        for (i, &b) in bytes.iter().enumerate() {
            if b == b'<' {
                in_tag = true;

                let window = &bytes[i..bytes.len().min(i + 10)];
                let lower: Vec<u8> = window.iter().map(u8::to_ascii_lowercase).collect();
                if lower.starts_with(b"<script") {
                    in_script = true;
                } else if lower.starts_with(b"</script") {
                    in_script = false;
                } else if lower.starts_with(b"<style") {
                    in_style = true;
                } else if lower.starts_with(b"</style") {
                    in_style = false;
                } else if lower.starts_with(b"<title") {
                    in_title = true;
                } else if lower.starts_with(b"</title") {
                    in_title = false;
                }
                continue;
            }

            if b == b'>' {
                in_tag = false;
                text.push(b' ');
                continue;
            }

            if !in_tag && !in_script && !in_style && !in_title {
                text.push(b);
            }
        }

        let mut collapsed = Vec::with_capacity(text.len());
        let mut last_space = true;
        for &b in &text {
            if b.is_ascii_whitespace() {
                if !last_space {
                    collapsed.push(b' ');
                    last_space = true;
                }
            } else {
                collapsed.push(b);
                last_space = false;
            }
        }

        into_string(collapsed)
    }

    /// Split text into terms.
    ///
    /// Lowercases the whole input first (when configured), then scans for
    /// letter runs. Tokens shorter than `min_length` bytes are dropped, and
    /// stopwords too when `remove_stopwords` is set.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized;
        let bytes = if self.config.lowercase {
            normalized = lowercase(text);
            normalized.as_bytes()
        } else {
            text.as_bytes()
        };

        let mut tokens = Vec::new();
        let mut current: Vec<u8> = Vec::new();

        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b.is_ascii_alphabetic() {
                current.push(b);
                i += 1;
            } else if (b == 0xD0 || b == 0xD1) && i + 1 < bytes.len() {
                current.push(b);
                current.push(bytes[i + 1]);
                i += 2;
            } else {
                self.flush_token(&mut current, &mut tokens);
                i += 1;
            }
        }
        self.flush_token(&mut current, &mut tokens);

        tokens
    }

    /// Normalize a query term to the on-disk form: the same lowercasing as
    /// [`tokenize`](Self::tokenize), with no length or stopword filtering.
    pub fn normalize(&self, term: &str) -> String {
        if self.config.lowercase {
            lowercase(term)
        } else {
            term.to_string()
        }
    }

    fn flush_token(&self, current: &mut Vec<u8>, tokens: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        if current.len() >= self.config.min_length {
            let token = into_string(std::mem::take(current));
            if !self.config.remove_stopwords || !self.stop_words.contains(token.as_str()) {
                tokens.push(token);
            }
        }
        current.clear();
    }
}

/// Byte-level lowercasing for ASCII and the Cyrillic block.
///
/// - ASCII `A..Z` → `a..z`
/// - `А..П` (`0xD0 0x90..0x9F`) → `а..п` (`0xD0 0xB0..0xBF`)
/// - `Р..Я` (`0xD0 0xA0..0xAF`) → `р..я` (`0xD1 0x80..0x8F`)
/// - `Ё` (`0xD0 0x81`) → `ё` (`0xD1 0x91`)
/// - everything else passes through unchanged
pub fn lowercase(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_uppercase() {
            out.push(b + 0x20);
            i += 1;
        } else if b == 0xD0 && i + 1 < bytes.len() {
            let b2 = bytes[i + 1];
            match b2 {
                0x90..=0x9F => {
                    out.push(0xD0);
                    out.push(b2 + 0x20);
                }
                0xA0..=0xAF => {
                    out.push(0xD1);
                    out.push(b2 - 0x20);
                }
                0x81 => {
                    out.push(0xD1);
                    out.push(0x91);
                }
                _ => {
                    out.push(b);
                    out.push(b2);
                }
            }
            i += 2;
        } else {
            out.push(b);
            i += 1;
        }
    }

    into_string(out)
}

/// Valid UTF-8 in, valid UTF-8 out: the transducer maps whole two-byte
/// sequences onto whole two-byte sequences. The lossy path only fires on
/// inputs that were already malformed.
fn into_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexing_tokenizer() -> Tokenizer {
        Tokenizer::new(TokenizerConfig {
            min_length: 2,
            lowercase: true,
            remove_stopwords: false,
        })
    }

    #[test]
    fn lowercase_ascii() {
        assert_eq!(lowercase("Hello World"), "hello world");
        assert_eq!(lowercase("MIXED123"), "mixed123");
    }

    #[test]
    fn lowercase_cyrillic_first_half() {
        assert_eq!(lowercase("Кот"), "кот");
        assert_eq!(lowercase("МОСКВА"), "москва");
    }

    #[test]
    fn lowercase_cyrillic_second_half() {
        // Р..Я cross into the 0xD1 lead byte when lowered.
        assert_eq!(lowercase("РЫБА"), "рыба");
        assert_eq!(lowercase("ЯЩИК"), "ящик");
    }

    #[test]
    fn lowercase_yo() {
        assert_eq!(lowercase("Ёлка"), "ёлка");
        let bytes = lowercase("Ё").into_bytes();
        assert_eq!(bytes, vec![0xD1, 0x91]);
    }

    #[test]
    fn lowercase_passes_through_other_bytes() {
        assert_eq!(lowercase("café 42!"), "café 42!");
        assert_eq!(lowercase("уже строчные"), "уже строчные");
    }

    #[test]
    fn tokenize_cyrillic() {
        let tokenizer = indexing_tokenizer();
        assert_eq!(tokenizer.tokenize("Кот"), vec!["кот"]);
        assert_eq!(tokenizer.tokenize("Ёлка"), vec!["ёлка"]);
    }

    #[test]
    fn tokenize_splits_on_digits_and_punctuation() {
        let tokenizer = indexing_tokenizer();
        assert_eq!(
            tokenizer.tokenize("foo42bar, baz-qux"),
            vec!["foo", "bar", "baz", "qux"]
        );
    }

    #[test]
    fn tokenize_drops_short_tokens_by_bytes() {
        let tokenizer = indexing_tokenizer();
        // "a" is one byte and dropped; "я" is two bytes and kept.
        assert_eq!(tokenizer.tokenize("a я of"), vec!["я", "of"]);
    }

    #[test]
    fn tokenize_filters_stopwords_when_asked() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("кот и собака on the мышь"),
            vec!["кот", "собака", "мышь"]
        );
    }

    #[test]
    fn tokenize_keeps_stopwords_by_default_config_of_pipeline() {
        let tokenizer = indexing_tokenizer();
        assert_eq!(
            tokenizer.tokenize("кот и собака"),
            vec!["кот", "и", "собака"]
        );
    }

    #[test]
    fn tokens_are_already_normalized() {
        let tokenizer = indexing_tokenizer();
        for token in tokenizer.tokenize("Кот ПРЫГАЕТ через Ёлку и Ящерицу") {
            assert_eq!(tokenizer.normalize(&token), token);
        }
    }

    #[test]
    fn normalize_does_not_filter() {
        let tokenizer = Tokenizer::default();
        // Stopword and single letter both survive normalization.
        assert_eq!(tokenizer.normalize("И"), "и");
        assert_eq!(tokenizer.normalize("A"), "a");
    }

    #[test]
    fn extract_text_strips_tags_and_script_style() {
        let tokenizer = indexing_tokenizer();
        let html = "<html><head><title>Hello — World</title><style>x{}</style>\
                    </head><body>Hi <b>there</b></body></html>";
        let text = tokenizer.extract_text(html);
        assert_eq!(tokenizer.tokenize(&text), vec!["hi", "there"]);
    }

    #[test]
    fn extract_text_ignores_script_body() {
        let tokenizer = indexing_tokenizer();
        let html = "<p>visible</p><script>var hidden = 'gone';</script><p>again</p>";
        let text = tokenizer.extract_text(html);
        assert_eq!(tokenizer.tokenize(&text), vec!["visible", "again"]);
    }

    #[test]
    fn extract_text_collapses_whitespace() {
        let tokenizer = indexing_tokenizer();
        let text = tokenizer.extract_text("a\n\n   b\t\tc");
        assert_eq!(text, "a b c");
    }

    #[test]
    fn extract_title_plain() {
        let tokenizer = Tokenizer::default();
        let html = "<html><head><title>Россия</title></head></html>";
        assert_eq!(tokenizer.extract_title(html), "Россия");
    }

    #[test]
    fn extract_title_cuts_wiki_suffix() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.extract_title("<title>Кот — Википедия</title>"),
            "Кот"
        );
        assert_eq!(
            tokenizer.extract_title("<title>Hello - World</title>"),
            "Hello"
        );
    }

    #[test]
    fn extract_title_case_insensitive_with_attributes() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.extract_title("<TITLE lang=\"ru\">Заголовок</TITLE>"),
            "Заголовок"
        );
    }

    #[test]
    fn extract_title_falls_back_to_h1() {
        let tokenizer = Tokenizer::default();
        let html = "<body><h1 class=\"main\">First <em>Heading</em></h1></body>";
        assert_eq!(tokenizer.extract_title(html), "First Heading ");
    }

    #[test]
    fn extract_title_untitled() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.extract_title("<body>no title here</body>"), "Untitled");
    }
}
