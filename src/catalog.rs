use crate::wordlists;
use bip39::Language;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// Grammatical role a BIP39 word can play in a sentence.
///
/// The set of categories is fixed; an unknown category name simply fails to
/// parse instead of crashing downstream lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Article,
    Adjective,
    Person,
    Action,
    Direction,
    Place,
    TimeWord,
    Conjunction,
}

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 8] = [
        Category::Article,
        Category::Adjective,
        Category::Person,
        Category::Action,
        Category::Direction,
        Category::Place,
        Category::TimeWord,
        Category::Conjunction,
    ];

    /// Stable lowercase key used in CLI arguments and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Adjective => "adjective",
            Category::Person => "person",
            Category::Action => "action",
            Category::Direction => "direction",
            Category::Place => "place",
            Category::TimeWord => "timeWord",
            Category::Conjunction => "conjunction",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Article => "Article",
            Category::Adjective => "Adjective",
            Category::Person => "Person",
            Category::Action => "Action",
            Category::Direction => "Direction",
            Category::Place => "Place",
            Category::TimeWord => "Time Word",
            Category::Conjunction => "Conjunction",
        }
    }

    /// Case-insensitive parse of a category key or label.
    /// Returns None for unknown names; an unknown category is not an error,
    /// it just has no members.
    pub fn parse(name: &str) -> Option<Category> {
        let normalized = name.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| {
            c.key().to_lowercase() == normalized || c.label().to_lowercase() == normalized
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How much of the official vocabulary the category tables cover.
/// Diagnostic only; a coverage gap never blocks validation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoverageStats {
    pub total: usize,
    pub categorized: usize,
    pub uncategorized: usize,
    pub percentage: f64,
}

/// Immutable mapping from grammatical categories to BIP39 words, plus the
/// full official 2048-word vocabulary.
///
/// Built once and never mutated; validators and the repair search borrow it,
/// so tests can construct isolated instances with `with_categories`.
pub struct WordCatalog {
    words_by_category: BTreeMap<Category, Vec<String>>,
    categories_by_word: HashMap<String, BTreeSet<Category>>,
    vocabulary: HashSet<&'static str>,
}

impl WordCatalog {
    /// Build the catalog from the built-in category word lists.
    pub fn new() -> Self {
        Self::with_categories([
            (Category::Article, wordlists::ARTICLES),
            (Category::Adjective, wordlists::ADJECTIVES),
            (Category::Person, wordlists::PEOPLE),
            (Category::Action, wordlists::ACTIONS),
            (Category::Direction, wordlists::DIRECTIONS),
            (Category::Place, wordlists::PLACES),
            (Category::TimeWord, wordlists::TIME_WORDS),
            (Category::Conjunction, wordlists::CONJUNCTIONS),
        ]
        .into_iter()
        .map(|(category, words)| (category, words.iter().map(|w| w.to_string()).collect())))
    }

    /// Build a catalog from explicit category lists. Words that are not in
    /// the official BIP39 vocabulary are dropped; the remainder is lowercased
    /// and deduplicated preserving order.
    pub fn with_categories(entries: impl IntoIterator<Item = (Category, Vec<String>)>) -> Self {
        let vocabulary: HashSet<&'static str> =
            Language::English.word_list().iter().copied().collect();

        let mut words_by_category: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        let mut categories_by_word: HashMap<String, BTreeSet<Category>> = HashMap::new();

        for (category, words) in entries {
            let mut kept = Vec::new();
            let mut seen = HashSet::new();
            for word in words {
                let word = word.to_lowercase();
                if !vocabulary.contains(word.as_str()) || !seen.insert(word.clone()) {
                    continue;
                }
                categories_by_word
                    .entry(word.clone())
                    .or_default()
                    .insert(category);
                kept.push(word);
            }
            words_by_category.entry(category).or_default().extend(kept);
        }

        let catalog = Self {
            words_by_category,
            categories_by_word,
            vocabulary,
        };

        let stats = catalog.coverage();
        if stats.uncategorized > 0 {
            warn!(
                "{} of {} BIP39 words have no category ({:.1}% covered)",
                stats.uncategorized, stats.total, stats.percentage
            );
        }

        catalog
    }

    /// The process-wide catalog built from the default word lists.
    /// Construction is deterministic, so the one-time initialization is the
    /// only synchronization this type ever needs.
    pub fn shared() -> &'static WordCatalog {
        static CATALOG: OnceLock<WordCatalog> = OnceLock::new();
        CATALOG.get_or_init(WordCatalog::new)
    }

    /// Words belonging to a category, in their curated order.
    /// A category with no members yields an empty slice.
    pub fn words_for_category(&self, category: Category) -> &[String] {
        self.words_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every category containing the word, case-insensitive.
    /// Empty for official-but-uncategorized words; that is an expected state.
    pub fn categories_containing(&self, word: &str) -> Vec<Category> {
        self.categories_by_word
            .get(&word.to_lowercase())
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Case-insensitive membership test against the official 2048-word list.
    pub fn is_official_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word.to_lowercase().as_str())
    }

    /// The full official vocabulary.
    pub fn vocabulary(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vocabulary.iter().copied()
    }

    /// Official words that no category claims, sorted.
    pub fn uncategorized_words(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self
            .vocabulary()
            .filter(|w| !self.categories_by_word.contains_key(*w))
            .collect();
        words.sort_unstable();
        words
    }

    pub fn coverage(&self) -> CoverageStats {
        let total = self.vocabulary.len();
        let categorized = self.categories_by_word.len();
        let uncategorized = total - categorized;
        CoverageStats {
            total,
            categorized,
            uncategorized,
            percentage: categorized as f64 / total as f64 * 100.0,
        }
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("article"), Some(Category::Article));
        assert_eq!(Category::parse("Time Word"), Some(Category::TimeWord));
        assert_eq!(Category::parse("TIMEWORD"), Some(Category::TimeWord));
        assert_eq!(Category::parse("verb"), None);
    }

    #[test]
    fn test_vocabulary_is_official_bip39() {
        let catalog = WordCatalog::new();
        let stats = catalog.coverage();
        assert_eq!(stats.total, 2048);
        assert!(catalog.is_official_word("abandon"));
        assert!(catalog.is_official_word("Warrior"));
        assert!(!catalog.is_official_word("xyzzy"));
        assert!(!catalog.is_official_word("the"));
    }

    #[test]
    fn test_category_lists_filtered_to_vocabulary() {
        let catalog = WordCatalog::new();
        for category in Category::ALL {
            for word in catalog.words_for_category(category) {
                assert!(
                    catalog.is_official_word(word),
                    "{word} in {category} is not a BIP39 word"
                );
            }
        }
        // "the" is in the raw article list but not in the BIP39 vocabulary
        let articles = catalog.words_for_category(Category::Article);
        assert!(!articles.iter().any(|w| w == "the"));
        assert!(articles.iter().any(|w| w == "all"));
    }

    #[test]
    fn test_categories_containing() {
        let catalog = WordCatalog::new();
        assert!(catalog
            .categories_containing("warrior")
            .contains(&Category::Person));
        assert!(catalog
            .categories_containing("ANCIENT")
            .contains(&Category::Adjective));
        // Official but uncategorized words report an empty set, not an error
        assert!(catalog.is_official_word("zoo"));
        assert!(catalog.categories_containing("zoo").is_empty());
        assert!(catalog.categories_containing("xyzzy").is_empty());
    }

    #[test]
    fn test_coverage_stats_add_up() {
        let catalog = WordCatalog::new();
        let stats = catalog.coverage();
        assert_eq!(stats.categorized + stats.uncategorized, stats.total);
        assert_eq!(catalog.vocabulary().count(), stats.total);
        assert_eq!(catalog.uncategorized_words().len(), stats.uncategorized);
        assert!(stats.uncategorized > 0, "category tables never cover all 2048 words");
    }

    #[test]
    fn test_isolated_catalog() {
        let catalog = WordCatalog::with_categories([(
            Category::Person,
            vec!["warrior".to_string(), "the".to_string(), "hero".to_string()],
        )]);
        let people = catalog.words_for_category(Category::Person);
        assert_eq!(people.to_vec(), vec!["warrior".to_string(), "hero".to_string()]);
        // Categories absent from this catalog have no members
        assert!(catalog.words_for_category(Category::Place).is_empty());
        // Vocabulary stays the full official list regardless of categories
        assert!(catalog.is_official_word("zebra"));
    }

    #[test]
    fn test_duplicate_entries_collapsed() {
        let catalog = WordCatalog::with_categories([(
            Category::Action,
            vec!["walk".to_string(), "walk".to_string()],
        )]);
        assert_eq!(catalog.words_for_category(Category::Action).len(), 1);
    }
}
