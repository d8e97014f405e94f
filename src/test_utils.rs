//! Helpers for building known-good and known-broken mnemonics in tests.
//!
//! Valid sentences are derived from entropy through the `bip39` crate rather
//! than hardcoded, so the fixtures cannot drift from the real checksum rules.

use bip39::{Language, Mnemonic};
use std::collections::HashSet;

/// Deterministically produce a checksum-valid 12-word mnemonic whose words
/// are pairwise distinct (most random mnemonics are; this just skips the
/// occasional collision).
pub fn valid_distinct_mnemonic() -> Vec<String> {
    for n in 0u64..10_000 {
        // Bit-mix both halves so small n still spreads across all 16 bytes.
        let mut entropy = [0u8; 16];
        entropy[..8].copy_from_slice(&(n | 1).wrapping_mul(0x9e37_79b9_7f4a_7c15).to_le_bytes());
        entropy[8..].copy_from_slice(&(n | 1).wrapping_mul(0xc2b2_ae3d_27d4_eb4f).to_le_bytes());
        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .expect("16 bytes is a valid entropy length");
        let words: Vec<String> = mnemonic
            .to_string()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
        if distinct.len() == words.len() {
            return words;
        }
    }
    unreachable!("distinct-word mnemonics are abundant in the first few entropies");
}

/// Replace the word at `index` with an official word that breaks the
/// checksum while keeping the sentence structurally sound: right length,
/// all vocabulary, no duplicates. Returns the corrupted words and the
/// replacement that was used.
pub fn corrupt_at(words: &[String], index: usize) -> (Vec<String>, String) {
    for candidate in Language::English.word_list() {
        if words.iter().any(|w| w == candidate) {
            continue;
        }
        let mut corrupted = words.to_vec();
        corrupted[index] = candidate.to_string();
        if Mnemonic::parse_in_normalized(Language::English, &corrupted.join(" ")).is_err() {
            return (corrupted, candidate.to_string());
        }
    }
    unreachable!("only 1 in 16 substitutions keeps the checksum intact");
}
