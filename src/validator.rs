use crate::catalog::WordCatalog;
use crate::variations::{Suggestion, VariationSearch};
use bip39::{Language, Mnemonic};
use serde::Serialize;

/// The only mnemonic lengths BIP39 sentences may have here.
pub const VALID_WORD_COUNTS: [usize; 2] = [12, 24];

/// Outcome of validating one candidate sentence. Invalid input is a normal
/// value, never an error; only broken internal state would be an `Err`
/// anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    /// Tokens that failed vocabulary membership or appeared more than once.
    /// Empty when the failure is structural (length) or cryptographic
    /// (checksum).
    pub invalid_words: Vec<String>,
    /// Repair suggestions, present only when validation failed at the
    /// checksum step and the search found any.
    pub suggestions: Vec<Suggestion>,
}

impl ValidationResult {
    fn invalid(message: String, invalid_words: Vec<String>) -> Self {
        Self {
            is_valid: false,
            message,
            invalid_words,
            suggestions: Vec::new(),
        }
    }
}

/// Lowercase, trim and split a raw sentence on runs of whitespace.
pub(crate) fn normalize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Validates candidate sentences against the BIP39 structural rules and
/// checksum. Stateless: borrows the catalog and holds nothing else, so the
/// same input always yields the same result.
pub struct MnemonicValidator<'a> {
    catalog: &'a WordCatalog,
}

impl<'a> MnemonicValidator<'a> {
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self { catalog }
    }

    /// Run the validation pipeline without attempting any repair.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        self.run(raw, false)
    }

    /// Run the validation pipeline and, when the sentence is structurally
    /// sound but fails the checksum, attach repair suggestions.
    pub fn validate_with_repairs(&self, raw: &str) -> ValidationResult {
        self.run(raw, true)
    }

    // Checks are ordered cheapest and most actionable first; the checksum
    // only runs once length, vocabulary and duplicates have all passed.
    fn run(&self, raw: &str, with_repairs: bool) -> ValidationResult {
        let words = normalize(raw);

        if !VALID_WORD_COUNTS.contains(&words.len()) {
            return ValidationResult::invalid(
                format!(
                    "Sentence must be exactly 12 or 24 words (found {})",
                    words.len()
                ),
                Vec::new(),
            );
        }

        let unknown = ordered_dedup(words.iter().filter(|w| !self.catalog.is_official_word(w)));
        if !unknown.is_empty() {
            return ValidationResult::invalid(
                format!("Not valid BIP39 words: {}", unknown.join(", ")),
                unknown,
            );
        }

        let repeated = ordered_dedup(
            words
                .iter()
                .filter(|w| words.iter().filter(|o| o == w).count() > 1),
        );
        if !repeated.is_empty() {
            return ValidationResult::invalid(
                "Sentence cannot contain duplicate words".to_string(),
                repeated,
            );
        }

        let sentence = words.join(" ");
        if Mnemonic::parse_in_normalized(Language::English, &sentence).is_err() {
            let suggestions = if with_repairs {
                VariationSearch::new(self.catalog).find_repairs(&sentence)
            } else {
                Vec::new()
            };
            return ValidationResult {
                is_valid: false,
                message: "Not a valid BIP39 mnemonic (checksum mismatch)".to_string(),
                invalid_words: Vec::new(),
                suggestions,
            };
        }

        ValidationResult {
            is_valid: true,
            message: format!("Valid {}-word BIP39 mnemonic", words.len()),
            invalid_words: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

/// Collapse exact repeats while keeping first-occurrence order.
fn ordered_dedup<'w>(words: impl Iterator<Item = &'w String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for word in words {
        if seen.insert(word.as_str()) {
            out.push(word.clone());
        }
    }
    out
}
