//! Configuration schema definitions.
//!
//! The env file is a flat string map; `QuizConfig` is its typed view. Keys are
//! mapped with serde so the recognized names live in one place.

use serde::de::value::MapDeserializer;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;

use crate::config::store::EnvStore;
use crate::config::validation::ValidationError;
use crate::config::ConfigError;

/// Recognized env keys.
pub mod keys {
    pub const GATEWAY: &str = "GATEWAY";
    pub const PUBLICKEY: &str = "PUBLICKEY";
    pub const KEYSTORE: &str = "KEYSTORE";
    pub const KEYSTOREPASS: &str = "KEYSTOREPASS";
    pub const CONTRACTADDR: &str = "CONTRACTADDR";
    pub const QUESTION: &str = "QUESTION";
    pub const ANSWER: &str = "ANSWER";
    pub const CONTRACTBIN: &str = "CONTRACTBIN";
    pub const RPC_TIMEOUT_SECS: &str = "RPC_TIMEOUT_SECS";
}

/// Root configuration for the quiz client.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// JSON-RPC gateway URL.
    #[serde(rename = "GATEWAY")]
    pub gateway: String,

    /// Expected account address; empty disables the check.
    #[serde(rename = "PUBLICKEY")]
    pub public_key: String,

    /// Path to the encrypted keystore file.
    #[serde(rename = "KEYSTORE")]
    pub keystore_path: PathBuf,

    /// Keystore password.
    #[serde(rename = "KEYSTOREPASS")]
    pub keystore_password: String,

    /// Deployed contract address; empty means "deploy a new one".
    #[serde(rename = "CONTRACTADDR")]
    pub contract_address: String,

    /// Question text used when deploying.
    #[serde(rename = "QUESTION")]
    pub question: String,

    /// Plaintext answer used when deploying. Only its digest leaves the process.
    #[serde(rename = "ANSWER")]
    pub answer: String,

    /// Compiled `Quiz` creation bytecode, hex encoded.
    #[serde(rename = "CONTRACTBIN")]
    pub bytecode_path: PathBuf,

    /// Per-request RPC timeout in seconds.
    #[serde(rename = "RPC_TIMEOUT_SECS", deserialize_with = "u64_from_str")]
    pub rpc_timeout_secs: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            gateway: String::new(),
            public_key: String::new(),
            keystore_path: PathBuf::new(),
            keystore_password: String::new(),
            contract_address: String::new(),
            question: String::new(),
            answer: String::new(),
            bytecode_path: PathBuf::from("contracts/Quiz.bin"),
            rpc_timeout_secs: 30,
        }
    }
}

impl QuizConfig {
    /// Build the typed view of an env store. Absent keys take their defaults.
    pub fn from_store(store: &EnvStore) -> Result<Self, ConfigError> {
        let entries = store
            .entries()
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()));
        let deserializer = MapDeserializer::<_, serde::de::value::Error>::new(entries);
        Self::deserialize(deserializer)
            .map_err(|e| ConfigError::Validation(vec![ValidationError::Malformed(e.to_string())]))
    }

    /// True when no contract address is configured and one must be deployed.
    pub fn needs_deployment(&self) -> bool {
        self.contract_address.trim().is_empty()
    }
}

impl fmt::Debug for QuizConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizConfig")
            .field("gateway", &self.gateway)
            .field("public_key", &self.public_key)
            .field("keystore_path", &self.keystore_path)
            .field("keystore_password", &"<redacted>")
            .field("contract_address", &self.contract_address)
            .field("question", &self.question)
            .field("answer", &"<redacted>")
            .field("bytecode_path", &self.bytecode_path)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}

fn u64_from_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str)]) -> EnvStore {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EnvStore::empty(dir.path().join(".env"));
        for (key, value) in entries {
            store.update(key, value).unwrap();
        }
        store
    }

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert!(config.needs_deployment());
        assert_eq!(config.rpc_timeout_secs, 30);
        assert_eq!(config.bytecode_path, PathBuf::from("contracts/Quiz.bin"));
    }

    #[test]
    fn test_from_store_maps_keys() {
        let store = store_with(&[
            (keys::GATEWAY, "http://localhost:8545"),
            (keys::KEYSTORE, "/tmp/key.json"),
            (keys::CONTRACTADDR, "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            (keys::QUESTION, "2+2?"),
            (keys::RPC_TIMEOUT_SECS, "5"),
            ("UNRELATED", "ignored"),
        ]);

        let config = QuizConfig::from_store(&store).unwrap();
        assert_eq!(config.gateway, "http://localhost:8545");
        assert_eq!(config.keystore_path, PathBuf::from("/tmp/key.json"));
        assert_eq!(config.question, "2+2?");
        assert_eq!(config.answer, "");
        assert_eq!(config.rpc_timeout_secs, 5);
        assert!(!config.needs_deployment());
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let store = store_with(&[(keys::RPC_TIMEOUT_SECS, "soon")]);
        let result = QuizConfig::from_store(&store);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ref errors)) if matches!(errors[0], ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = QuizConfig {
            keystore_password: "hunter2".to_string(),
            answer: "4".to_string(),
            ..QuizConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
