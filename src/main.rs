use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_sentence::catalog::{Category, WordCatalog};
use seed_sentence::checker::AddressChecker;
use seed_sentence::config::{Cli, Command};
use seed_sentence::generator::SentenceGenerator;
use seed_sentence::validator::{MnemonicValidator, ValidationResult};
use seed_sentence::variations::{Suggestion, VariationSearch};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let catalog = WordCatalog::shared();

    match cli.command {
        Command::Validate { sentence, json } => {
            let result = MnemonicValidator::new(catalog).validate_with_repairs(&sentence);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_validation(&result);
            }
            Ok(exit(result.is_valid))
        }

        Command::Repair { sentence, json } => {
            let suggestions = VariationSearch::new(catalog).find_repairs(&sentence);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                println!("No repair found. Try generating a new sentence instead.");
            } else {
                print_suggestions(&suggestions);
            }
            Ok(exit(!suggestions.is_empty()))
        }

        Command::Generate { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let sentence = SentenceGenerator::new(catalog).generate(&mut rng)?;
            println!("{sentence}");
            Ok(ExitCode::SUCCESS)
        }

        Command::Words { category } => match Category::parse(&category) {
            Some(category) => {
                for word in catalog.words_for_category(category) {
                    println!("{word}");
                }
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
                eprintln!("Unknown category '{}'. Known: {}", category, known.join(", "));
                Ok(ExitCode::FAILURE)
            }
        },

        Command::Coverage => {
            let stats = catalog.coverage();
            println!(
                "{} of {} BIP39 words categorized ({:.1}%), {} uncategorized",
                stats.categorized, stats.total, stats.percentage, stats.uncategorized
            );
            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            sentence,
            api_url,
            account_index,
            address_index,
            acknowledge_online_risk,
        } => {
            // Never touch the network for a sentence that does not validate.
            let result = MnemonicValidator::new(catalog).validate(&sentence);
            if !result.is_valid {
                print_validation(&result);
                return Ok(ExitCode::FAILURE);
            }

            if !acknowledge_online_risk {
                eprintln!(
                    "Checking usage contacts a public block explorer and links the \
                     derived address to your IP. Re-run with --acknowledge-online-risk \
                     to proceed."
                );
                return Ok(ExitCode::FAILURE);
            }

            info!("querying {api_url}");
            let checker = AddressChecker::new(api_url)?;
            let usage = checker
                .check_phrase(&sentence, account_index, address_index)
                .await?;
            println!("Address:  {}", usage.address);
            if usage.used {
                println!(
                    "Used:     yes ({} transactions). Consider generating a new phrase.",
                    usage.tx_count.unwrap_or(0)
                );
            } else {
                println!("Used:     no previous usage detected");
            }
            if let Some(balance) = &usage.balance {
                println!("Balance:  {balance} BTC");
            }
            if let Some(last_seen) = usage.last_seen {
                println!("Last seen: {last_seen}");
            }
            Ok(exit(!usage.used))
        }
    }
}

fn exit(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_validation(result: &ValidationResult) {
    println!("{}", result.message);
    for word in &result.invalid_words {
        println!("  - {word}");
    }
    if !result.suggestions.is_empty() {
        println!("Try one of these instead:");
        print_suggestions(&result.suggestions);
    }
}

fn print_suggestions(suggestions: &[Suggestion]) {
    for suggestion in suggestions {
        println!("  {}", suggestion.sentence);
        for replacement in &suggestion.replacements {
            let via = match replacement.category {
                Some(category) => format!(" ({})", category.label()),
                None => String::new(),
            };
            println!(
                "    replace \"{}\" with \"{}\" at position {}{}",
                replacement.original_word,
                replacement.new_word,
                replacement.index + 1,
                via
            );
        }
    }
}
