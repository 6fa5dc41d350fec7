// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in stopword list: common Russian function words plus English
//! articles and prepositions.
//!
//! The list is part of the index contract — with `remove_stopwords` enabled
//! it decides which terms exist on disk — so it is a fixed constant rather
//! than a runtime input. Entries are already lowercase; the tokenizer checks
//! membership after lowercasing.

/// Stopwords dropped by [`Tokenizer::tokenize`](super::Tokenizer::tokenize)
/// when `remove_stopwords` is set. 93 entries.
pub const STOP_WORDS: &[&str] = &[
    // Russian function words
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все",
    "она", "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по",
    "только", "её", "мне", "было", "вот", "от", "меня", "ещё", "нет", "о", "из", "ему",
    "для", "при", "без", "до", "под", "над", "об", "про", "это", "этот", "эта", "эти",
    "был", "была", "были", "быть", "есть", "или", "также", "году", "года", "лет",
    "который", "которая", "которое", "которые", "где", "когда", "если", "чем",
    // English articles and prepositions
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "is", "was", "are", "were", "been", "be", "have", "has", "had", "it", "its",
];
