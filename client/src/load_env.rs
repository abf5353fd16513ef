//! Loads the fee payer and RPC settings from the process environment, with optional `.env`
//! support.

use std::{
    env,
    io::ErrorKind,
};

use anyhow::{
    anyhow,
    Context,
};
use solana_commitment_config::CommitmentConfig;
use solana_keypair::Keypair;

use crate::logs::log_warning;

/// Length in bytes of a serialized ed25519 keypair (secret key followed by public key).
pub const KEYPAIR_LEN: usize = 64;

#[derive(Debug, Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingsKey {
    Secret,
    RpcEndpoint,
    Commitment,
}

pub struct Settings {
    pub payer: Keypair,
    pub rpc_endpoint: String,
    pub commitment: CommitmentConfig,
}

impl Settings {
    /// Reads settings from a `.env` file in the working directory (if any) and then from the
    /// process environment. Variables already set in the environment take precedence.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Some(error) = dotenv_error(dotenvy::dotenv()) {
            log_warning("Ignoring .env", error);
        }
        Self::from_lookup(|key| env::var(key.to_string()).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(SettingsKey) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: SettingsKey| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("{key} not found in the environment"))
        };

        let payer = parse_secret(&required(SettingsKey::Secret)?)
            .with_context(|| format!("Invalid {}", SettingsKey::Secret))?;
        let rpc_endpoint = required(SettingsKey::RpcEndpoint)?;
        let commitment = match lookup(SettingsKey::Commitment) {
            Some(level) if !level.trim().is_empty() => parse_commitment(&level)
                .with_context(|| format!("Invalid {}", SettingsKey::Commitment))?,
            _ => CommitmentConfig::confirmed(),
        };

        Ok(Self {
            payer,
            rpc_endpoint,
            commitment,
        })
    }
}

/// Returns the error from loading a `.env` file unless the file simply doesn't exist.
fn dotenv_error<T>(result: dotenvy::Result<T>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}

/// Parses a keypair from either a base-58 string or a JSON byte array like the ones written by
/// `solana-keygen`.
pub fn parse_secret(secret: &str) -> anyhow::Result<Keypair> {
    let secret = secret.trim();
    let bytes: Vec<u8> = if secret.starts_with('[') {
        serde_json::from_str(secret).context("Couldn't parse the secret as a JSON byte array")?
    } else {
        bs58::decode(secret)
            .into_vec()
            .context("Couldn't decode the secret as base-58")?
    };

    if bytes.len() != KEYPAIR_LEN {
        return Err(anyhow!(
            "Expected {KEYPAIR_LEN} keypair bytes, got {}",
            bytes.len()
        ));
    }

    Keypair::try_from(bytes.as_slice()).map_err(|e| anyhow!("Malformed keypair bytes: {e}"))
}

pub fn parse_commitment(level: &str) -> anyhow::Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(anyhow!(
            "Unknown commitment level `{other}`, expected processed, confirmed or finalized"
        )),
    }
}
