use bip39::{Language, Mnemonic};
use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, Network};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Failures from the address checker, kept distinct so callers can offer
/// "try again" for network trouble instead of "regenerate your phrase".
#[derive(Debug)]
pub enum CheckerError {
    /// The phrase is not a valid BIP39 mnemonic. Derivation is only supposed
    /// to run after validation, so hitting this is a caller contract
    /// violation, never something to retry.
    InvalidMnemonic(String),
    /// BIP32 key derivation failed.
    Derivation(String),
    /// Transport-level failure talking to the block explorer. Transient and
    /// retryable at the caller's discretion.
    Network(reqwest::Error),
    /// The explorer answered with a non-success status code.
    Api { status: u16 },
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::InvalidMnemonic(reason) => {
                write!(f, "invalid BIP39 mnemonic: {reason}")
            }
            CheckerError::Derivation(reason) => write!(f, "address derivation failed: {reason}"),
            CheckerError::Network(err) => write!(f, "block explorer request failed: {err}"),
            CheckerError::Api { status } => {
                write!(f, "block explorer returned HTTP status {status}")
            }
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckerError {
    fn from(err: reqwest::Error) -> Self {
        CheckerError::Network(err)
    }
}

/// On-chain usage summary for one derived address.
#[derive(Debug, Clone, Serialize)]
pub struct WalletCheckResult {
    pub used: bool,
    pub address: String,
    /// Final balance in BTC, formatted to 8 decimals.
    pub balance: Option<String>,
    pub tx_count: Option<u64>,
    pub last_seen: Option<DateTime<Utc>>,
}

/// Response shape of the BlockCypher address endpoint. Amounts are satoshis.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainApiResponse {
    pub address: String,
    #[serde(default)]
    pub total_received: u64,
    #[serde(default)]
    pub total_sent: u64,
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub unconfirmed_balance: i64,
    #[serde(default)]
    pub final_balance: u64,
    pub n_tx: u64,
    #[serde(default)]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl From<BlockchainApiResponse> for WalletCheckResult {
    fn from(data: BlockchainApiResponse) -> Self {
        WalletCheckResult {
            used: data.n_tx > 0,
            address: data.address,
            balance: Some(format!("{:.8}", data.final_balance as f64 / 100_000_000.0)),
            tx_count: Some(data.n_tx),
            last_seen: data.last_seen,
        }
    }
}

/// Derives one Bitcoin address from a validated mnemonic and queries a block
/// explorer for its usage. The validation and repair core never touches this
/// module; everything here is optional, online-only functionality.
pub struct AddressChecker {
    client: reqwest::Client,
    api_url: String,
}

impl AddressChecker {
    pub fn new(api_url: impl Into<String>) -> Result<Self, CheckerError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Derive the P2PKH mainnet address at `m/44'/0'/{account}'/0/{index}`.
    ///
    /// Fails loudly with [`CheckerError::InvalidMnemonic`] on a
    /// checksum-invalid phrase rather than deriving from garbage.
    pub fn derive_address(
        phrase: &str,
        account_index: u32,
        address_index: u32,
    ) -> Result<String, CheckerError> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| CheckerError::InvalidMnemonic(e.to_string()))?;
        let seed = mnemonic.to_seed("");

        let secp = Secp256k1::new();
        let master = Xpriv::new_master(Network::Bitcoin, &seed)
            .map_err(|e| CheckerError::Derivation(e.to_string()))?;
        let path: DerivationPath = format!("m/44'/0'/{account_index}'/0/{address_index}")
            .parse()
            .map_err(|e: bitcoin::bip32::Error| CheckerError::Derivation(e.to_string()))?;
        let child = master
            .derive_priv(&secp, &path)
            .map_err(|e| CheckerError::Derivation(e.to_string()))?;

        let public_key = CompressedPublicKey(child.private_key.public_key(&secp));
        Ok(Address::p2pkh(public_key, Network::Bitcoin).to_string())
    }

    /// Ask the block explorer whether the address has ever been used.
    pub async fn lookup_address_usage(
        &self,
        address: &str,
    ) -> Result<WalletCheckResult, CheckerError> {
        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), address);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CheckerError::Api {
                status: response.status().as_u16(),
            });
        }
        let data: BlockchainApiResponse = response.json().await?;
        Ok(data.into())
    }

    /// Derive the first address for the phrase and look up its usage.
    pub async fn check_phrase(
        &self,
        phrase: &str,
        account_index: u32,
        address_index: u32,
    ) -> Result<WalletCheckResult, CheckerError> {
        let address = Self::derive_address(phrase, account_index, address_index)?;
        self.lookup_address_usage(&address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{corrupt_at, valid_distinct_mnemonic};

    #[test]
    fn test_derive_rejects_invalid_mnemonic() {
        let words = valid_distinct_mnemonic();
        let (corrupted, _) = corrupt_at(&words, 2);
        let err = AddressChecker::derive_address(&corrupted.join(" "), 0, 0).unwrap_err();
        assert!(matches!(err, CheckerError::InvalidMnemonic(_)), "{err}");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let phrase = valid_distinct_mnemonic().join(" ");
        let first = AddressChecker::derive_address(&phrase, 0, 0).unwrap();
        let second = AddressChecker::derive_address(&phrase, 0, 0).unwrap();
        assert_eq!(first, second);
        // Legacy P2PKH mainnet addresses are base58 and start with '1'
        assert!(first.starts_with('1'), "unexpected address {first}");
    }

    #[test]
    fn test_derivation_indices_matter() {
        let phrase = valid_distinct_mnemonic().join(" ");
        let base = AddressChecker::derive_address(&phrase, 0, 0).unwrap();
        let next_address = AddressChecker::derive_address(&phrase, 0, 1).unwrap();
        let next_account = AddressChecker::derive_address(&phrase, 1, 0).unwrap();
        assert_ne!(base, next_address);
        assert_ne!(base, next_account);
    }

    #[test]
    fn test_api_response_maps_to_result() {
        let raw = r#"{
            "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "total_received": 150000,
            "total_sent": 0,
            "balance": 150000,
            "unconfirmed_balance": 0,
            "final_balance": 150000,
            "n_tx": 3,
            "last_seen": "2024-11-02T09:30:00Z"
        }"#;
        let response: BlockchainApiResponse = serde_json::from_str(raw).unwrap();
        let result = WalletCheckResult::from(response);
        assert!(result.used);
        assert_eq!(result.balance.as_deref(), Some("0.00150000"));
        assert_eq!(result.tx_count, Some(3));
        assert!(result.last_seen.is_some());
    }

    #[test]
    fn test_unused_address_maps_to_unused() {
        let raw = r#"{"address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "n_tx": 0}"#;
        let response: BlockchainApiResponse = serde_json::from_str(raw).unwrap();
        let result = WalletCheckResult::from(response);
        assert!(!result.used);
        assert_eq!(result.balance.as_deref(), Some("0.00000000"));
    }
}
