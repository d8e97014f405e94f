use clap::{Parser, Subcommand};

/// BlockCypher mainnet address endpoint.
pub const DEFAULT_API_URL: &str = "https://api.blockcypher.com/v1/btc/main/addrs";
pub const DEFAULT_ACCOUNT_INDEX: u32 = 0;
pub const DEFAULT_ADDRESS_INDEX: u32 = 0;

/// Command-line interface for the sentence validator
#[derive(Debug, Parser)]
#[command(name = "seed-sentence")]
#[command(about = "Generate and validate BIP39 seed phrases that read as sentences")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a candidate sentence against the BIP39 rules
    Validate {
        sentence: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for single-word repairs of a checksum-invalid sentence
    Repair {
        sentence: String,

        /// Print the suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a checksum-valid sentence from the default template
    Generate {
        /// Seed for deterministic output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the BIP39 words belonging to a grammatical category
    Words { category: String },

    /// Show how much of the official wordlist the categories cover
    Coverage,

    /// Derive a Bitcoin address from a valid sentence and query a block
    /// explorer for on-chain usage
    Check {
        sentence: String,

        /// Block explorer address endpoint
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,

        #[arg(long, default_value_t = DEFAULT_ACCOUNT_INDEX)]
        account_index: u32,

        #[arg(long, default_value_t = DEFAULT_ADDRESS_INDEX)]
        address_index: u32,

        /// Querying a public explorer links the derived address to your IP.
        /// The check refuses to run without this flag.
        #[arg(long)]
        acknowledge_online_risk: bool,
    },
}
