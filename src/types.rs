//! Core types for the key-value store.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Kind of a mutating command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Put,
    Delete,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Put => write!(f, "PUT"),
            CommandKind::Delete => write!(f, "DELETE"),
        }
    }
}

/// An instruction that mutates store state.
///
/// Every applied command is recorded in the command log and re-applied,
/// in commit order, on replay.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Set `key` to `value`, overwriting any existing value.
    Put { key: String, value: String },

    /// Remove `key`. Absent keys are left alone.
    Delete { key: String },
}

impl Command {
    /// Create a put command.
    pub fn put(key: impl Into<String>, value: impl Into<String>) -> Self {
        Command::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a delete command.
    pub fn delete(key: impl Into<String>) -> Self {
        Command::Delete { key: key.into() }
    }

    /// The key this command targets.
    pub fn key(&self) -> &str {
        match self {
            Command::Put { key, .. } | Command::Delete { key } => key,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Put { .. } => CommandKind::Put,
            Command::Delete { .. } => CommandKind::Delete,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Put { key, value } => write!(f, "PUT {key}={value:?}"),
            Command::Delete { key } => write!(f, "DELETE {key}"),
        }
    }
}

/// A read-only instruction. Never recorded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Query {
    /// Look up the current value of `key`.
    Get { key: String },
}

impl Query {
    /// Create a get query.
    pub fn get(key: impl Into<String>) -> Self {
        Query::Get { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Query::Get { key } => key,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Get { key } => write!(f, "GET {key}"),
        }
    }
}

/// Fingerprint of a store's contents (SHA-256).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateDigest(pub [u8; 32]);

impl StateDigest {
    /// Compute the digest of key/value pairs.
    ///
    /// Pairs must be supplied in ascending key order. Each field is length
    /// prefixed so that `("ab", "c")` and `("a", "bc")` hash differently.
    pub fn from_sorted_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hasher = Sha256::new();
        for (key, value) in pairs {
            hasher.update((key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
        StateDigest(hasher.finalize().into())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(StateDigest(arr))
    }
}

impl fmt::Debug for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateDigest({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Store statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Keys currently present.
    pub key_count: u64,
    /// Commands recorded in the log.
    pub log_len: u64,
    /// Completed replays since construction.
    pub replay_count: u64,
}
