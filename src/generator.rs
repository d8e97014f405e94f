use crate::catalog::{Category, WordCatalog};
use crate::validator::VALID_WORD_COUNTS;
use anyhow::{bail, Result};
use bip39::{Language, Mnemonic};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Default 12-slot sentence shape: "any ancient warrior walks toward ..."
/// style phrases with two noun groups joined by a conjunction.
pub const DEFAULT_TEMPLATE: [Category; 12] = [
    Category::Article,
    Category::Adjective,
    Category::Person,
    Category::Action,
    Category::Direction,
    Category::Article,
    Category::Adjective,
    Category::Place,
    Category::Conjunction,
    Category::TimeWord,
    Category::Person,
    Category::Action,
];

const MAX_ATTEMPTS: usize = 1000;

/// Fills a category template with random BIP39 words until the sentence
/// passes the checksum.
///
/// The first n-1 slots are sampled freely (without repeats); the final slot
/// is then solved by scanning its category for a word that completes a valid
/// mnemonic. For 12 words each candidate completes validly with probability
/// 1/16, so a handful of attempts nearly always suffices.
pub struct SentenceGenerator<'a> {
    catalog: &'a WordCatalog,
}

impl<'a> SentenceGenerator<'a> {
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self { catalog }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Result<String> {
        self.generate_from_template(rng, &DEFAULT_TEMPLATE)
    }

    pub fn generate_from_template(
        &self,
        rng: &mut impl Rng,
        template: &[Category],
    ) -> Result<String> {
        if !VALID_WORD_COUNTS.contains(&template.len()) {
            bail!(
                "template must have exactly 12 or 24 slots, got {}",
                template.len()
            );
        }
        for &category in template {
            if self.catalog.words_for_category(category).is_empty() {
                bail!("category {category} has no BIP39 words in this catalog");
            }
        }

        let (&last_category, leading) = template.split_last().expect("template is non-empty");

        'attempts: for _ in 0..MAX_ATTEMPTS {
            let mut used: HashSet<&str> = HashSet::new();
            let mut words: Vec<&str> = Vec::with_capacity(template.len());

            for &category in leading {
                let pool = self.catalog.words_for_category(category);
                let available: Vec<&str> = pool
                    .iter()
                    .map(String::as_str)
                    .filter(|w| !used.contains(w))
                    .collect();
                let Some(&choice) = available.as_slice().choose(rng) else {
                    // Category exhausted by earlier slots; resample.
                    continue 'attempts;
                };
                used.insert(choice);
                words.push(choice);
            }

            let mut finals: Vec<&str> = self
                .catalog
                .words_for_category(last_category)
                .iter()
                .map(String::as_str)
                .filter(|w| !used.contains(w))
                .collect();
            finals.shuffle(rng);

            for word in finals {
                words.push(word);
                let sentence = words.join(" ");
                if Mnemonic::parse_in_normalized(Language::English, &sentence).is_ok() {
                    return Ok(sentence);
                }
                words.pop();
            }
        }

        bail!("no checksum-valid sentence found after {MAX_ATTEMPTS} attempts")
    }
}
