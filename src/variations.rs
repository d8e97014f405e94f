use crate::catalog::{Category, WordCatalog};
use crate::validator::{normalize, VALID_WORD_COUNTS};
use bip39::{Language, Mnemonic};
use serde::Serialize;
use std::collections::HashSet;

/// Repair suggestions returned per sentence, at most.
pub const MAX_SUGGESTIONS: usize = 3;

/// Bound for the lexical-distance candidate strategy.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// One word swapped at one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReplacement {
    pub original_word: String,
    pub new_word: String,
    /// Category the replacement was drawn from; `None` when it came from the
    /// edit-distance fallback rather than a grammatical category.
    pub category: Option<Category>,
    pub index: usize,
}

/// A repaired sentence together with the substitutions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub sentence: String,
    pub replacements: Vec<WordReplacement>,
}

/// Bounded search for single-word substitutions that turn a checksum-invalid
/// sentence into a valid BIP39 mnemonic.
///
/// This is deliberately position-local: it never changes two words at once,
/// keeping the candidate space at sentence length x vocabulary size checksum
/// evaluations instead of a combinatorial blowup.
pub struct VariationSearch<'a> {
    catalog: &'a WordCatalog,
}

impl<'a> VariationSearch<'a> {
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self { catalog }
    }

    /// Propose up to [`MAX_SUGGESTIONS`] single-substitution repairs, ranked
    /// by number of replacements with discovery order breaking ties.
    ///
    /// Structurally broken input (wrong length, foreign words, duplicates)
    /// yields an empty list: the substitution model assumes the sentence is
    /// otherwise sound. An empty result for sound input just means no repair
    /// was found, which callers must treat as a normal outcome.
    pub fn find_repairs(&self, raw: &str) -> Vec<Suggestion> {
        let words = normalize(raw);
        if !self.structurally_sound(&words) {
            return Vec::new();
        }

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut seen_sentences: HashSet<String> = HashSet::new();

        'positions: for (index, original) in words.iter().enumerate() {
            for (candidate, category) in self.candidates_for(original, &words) {
                let mut attempt = words.clone();
                attempt[index] = candidate.clone();
                let sentence = attempt.join(" ");
                if Mnemonic::parse_in_normalized(Language::English, &sentence).is_err() {
                    continue;
                }
                // The same repaired sentence can be reachable through both
                // candidate strategies; keep the first discovery only.
                if !seen_sentences.insert(sentence.clone()) {
                    continue;
                }
                suggestions.push(Suggestion {
                    sentence,
                    replacements: vec![WordReplacement {
                        original_word: original.clone(),
                        new_word: candidate,
                        category,
                        index,
                    }],
                });
                // Single substitutions all tie at one replacement, so the
                // first MAX_SUGGESTIONS discoveries are also the final ranking.
                if suggestions.len() == MAX_SUGGESTIONS {
                    break 'positions;
                }
            }
        }

        // Stable sort; only meaningful once multi-word repairs exist.
        suggestions.sort_by_key(|s| s.replacements.len());
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    fn structurally_sound(&self, words: &[String]) -> bool {
        VALID_WORD_COUNTS.contains(&words.len())
            && words.iter().all(|w| self.catalog.is_official_word(w))
            && words.iter().collect::<HashSet<_>>().len() == words.len()
    }

    /// Candidate replacements for one position: words sharing a category with
    /// the original, then official words within [`MAX_EDIT_DISTANCE`] edits.
    /// Both pools are merged and deduplicated, category hits first so their
    /// replacement records carry the category tag. Words already used
    /// elsewhere in the sentence are excluded, otherwise a "repair" could
    /// manufacture a duplicate and fail full validation anyway.
    fn candidates_for(
        &self,
        original: &str,
        sentence_words: &[String],
    ) -> Vec<(String, Option<Category>)> {
        let usable =
            |word: &str| word != original && !sentence_words.iter().any(|w| w == word);

        let mut candidates = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for category in self.catalog.categories_containing(original) {
            for word in self.catalog.words_for_category(category) {
                if usable(word) && seen.insert(word.clone()) {
                    candidates.push((word.clone(), Some(category)));
                }
            }
        }

        // Lexical fallback independent of grammar: catches plain typos even
        // when the word is uncategorized or its category is too small to help.
        for word in Language::English.word_list() {
            if usable(word)
                && levenshtein(original, word) <= MAX_EDIT_DISTANCE
                && seen.insert((*word).to_string())
            {
                candidates.push(((*word).to_string(), None));
            }
        }

        candidates
    }
}

/// Classic two-row Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut current = Vec::with_capacity(b.len() + 1);
        current.push(i + 1);
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let insertion = current[j] + 1;
            let deletion = prev[j + 1] + 1;
            current.push(substitution.min(insertion).min(deletion));
        }
        prev = current;
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{corrupt_at, valid_distinct_mnemonic};
    use crate::validator::MnemonicValidator;

    #[test]
    fn test_levenshtein_vectors() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flat", "flat"), 0);
        assert_eq!(levenshtein("", "ab"), 2);
        assert_eq!(levenshtein("cat", "cart"), 1);
        assert_eq!(levenshtein("absent", "absorb"), 3);
        assert_eq!(levenshtein("absent", "accent"), 2);
    }

    #[test]
    fn test_structurally_broken_input_yields_nothing() {
        let search = VariationSearch::new(WordCatalog::shared());
        assert!(search.find_repairs("abandon ability able").is_empty());

        let mut duplicated = valid_distinct_mnemonic();
        duplicated[1] = duplicated[0].clone();
        assert!(search.find_repairs(&duplicated.join(" ")).is_empty());

        let mut foreign = valid_distinct_mnemonic();
        foreign[0] = "xyzzy".to_string();
        assert!(search.find_repairs(&foreign.join(" ")).is_empty());
    }

    #[test]
    fn test_category_mate_repair_is_found() {
        // Pair the corrupted word with the word it replaced in one category,
        // so the category strategy must recover the original sentence.
        let words = valid_distinct_mnemonic();
        let (corrupted, corrupt_word) = corrupt_at(&words, 0);
        let catalog = WordCatalog::with_categories([(
            Category::Person,
            vec![corrupt_word.clone(), words[0].clone()],
        )]);

        let search = VariationSearch::new(&catalog);
        let repairs = search.find_repairs(&corrupted.join(" "));

        let original_sentence = words.join(" ");
        assert_eq!(repairs[0].sentence, original_sentence);
        let replacement = &repairs[0].replacements[0];
        assert_eq!(replacement.original_word, corrupt_word);
        assert_eq!(replacement.new_word, words[0]);
        assert_eq!(replacement.category, Some(Category::Person));
        assert_eq!(replacement.index, 0);
    }

    #[test]
    fn test_duplicate_sentences_collapsed_across_strategies() {
        // The original word is reachable through two categories; the repaired
        // sentence must still appear at most once.
        let words = valid_distinct_mnemonic();
        let (corrupted, corrupt_word) = corrupt_at(&words, 0);
        let pair = vec![corrupt_word, words[0].clone()];
        let catalog = WordCatalog::with_categories([
            (Category::Person, pair.clone()),
            (Category::Place, pair),
        ]);

        let search = VariationSearch::new(&catalog);
        let repairs = search.find_repairs(&corrupted.join(" "));
        let original_sentence = words.join(" ");
        let hits = repairs
            .iter()
            .filter(|s| s.sentence == original_sentence)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_edit_distance_fallback_without_categories() {
        // With an empty catalog only the lexical strategy can fire. Corrupt a
        // position whose original has an official neighbor within two edits;
        // the original is then guaranteed to be a candidate, so at least one
        // repair must come back.
        let words = valid_distinct_mnemonic();
        let neighbor = (0..words.len()).find_map(|index| {
            Language::English.word_list().iter().find_map(|candidate| {
                let near = levenshtein(&words[index], candidate) <= MAX_EDIT_DISTANCE;
                if !near || words.iter().any(|w| w == candidate) {
                    return None;
                }
                let mut corrupted = words.clone();
                corrupted[index] = (*candidate).to_string();
                let broken =
                    Mnemonic::parse_in_normalized(Language::English, &corrupted.join(" "))
                        .is_err();
                broken.then_some(corrupted)
            })
        });
        let Some(corrupted) = neighbor else {
            // No near-miss neighbor for any position in this mnemonic.
            return;
        };

        let catalog = WordCatalog::with_categories(Vec::<(Category, Vec<String>)>::new());
        let search = VariationSearch::new(&catalog);
        let repairs = search.find_repairs(&corrupted.join(" "));
        assert!(!repairs.is_empty());
        for suggestion in &repairs {
            assert_eq!(suggestion.replacements[0].category, None);
        }
    }

    #[test]
    fn test_repairs_are_sound_minimal_and_capped() {
        let catalog = WordCatalog::shared();
        let search = VariationSearch::new(catalog);
        let validator = MnemonicValidator::new(catalog);

        let words = valid_distinct_mnemonic();
        for index in [0, 5, 11] {
            let (corrupted, _) = corrupt_at(&words, index);
            let repairs = search.find_repairs(&corrupted.join(" "));
            assert!(repairs.len() <= MAX_SUGGESTIONS);
            for suggestion in &repairs {
                // Soundness: every suggestion revalidates as fully valid.
                assert!(validator.validate(&suggestion.sentence).is_valid);
                // Minimality: exactly one position differs from the input.
                let repaired: Vec<&str> = suggestion.sentence.split(' ').collect();
                let differing = corrupted
                    .iter()
                    .zip(&repaired)
                    .filter(|(a, b)| a.as_str() != **b)
                    .count();
                assert_eq!(differing, 1);
                assert_eq!(suggestion.replacements.len(), 1);
                let replacement = &suggestion.replacements[0];
                assert_eq!(corrupted[replacement.index], replacement.original_word);
                assert_eq!(repaired[replacement.index], replacement.new_word);
            }
        }
    }
}
