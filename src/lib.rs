pub mod catalog;
pub mod checker;
pub mod config;
pub mod generator;
pub mod test_utils;
pub mod validator;
pub mod variations;
pub mod wordlists;

// Re-export commonly used types
pub use catalog::{Category, CoverageStats, WordCatalog};
pub use checker::{AddressChecker, CheckerError, WalletCheckResult};
pub use generator::SentenceGenerator;
pub use validator::{MnemonicValidator, ValidationResult};
pub use variations::{Suggestion, VariationSearch, WordReplacement};
