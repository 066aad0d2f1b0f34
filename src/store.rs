//! Main Store struct tying the state and the command log together.

use crate::error::{Result, StoreError};
use crate::records::CommandLog;
use crate::state::{apply_command, evaluate_query, StoreState};
use crate::types::{Command, Query, StateDigest, StoreStats};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Store configuration.
///
/// Capacities are sizing hints only; they never change behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Keys to reserve room for up front (0 = grow on demand).
    pub initial_capacity: usize,

    /// Log entries to reserve room for up front (0 = grow on demand).
    pub log_capacity: usize,
}

/// State and log, always locked together so they cannot drift apart.
struct Inner {
    state: StoreState,
    log: CommandLog,
    replay_count: u64,
}

impl Inner {
    fn commit(&mut self, command: Command) {
        apply_command(&mut self.state, &command);
        debug!(
            kind = %command.kind(),
            key = command.key(),
            log_len = self.log.len() + 1,
            "command committed"
        );
        self.log.append(command);
    }
}

/// The in-memory key-value store.
///
/// Provides a unified interface for:
/// - Applying commands (exclusive, always logged)
/// - Executing queries (shared, never logged)
/// - Rebuilding state by replaying the command log
///
/// A single read/write lock guards the state and the log. Commands and
/// replay take it exclusively; queries share it.
pub struct Store {
    config: StoreConfig,
    inner: RwLock<Inner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        let inner = Inner {
            state: StoreState::with_capacity(config.initial_capacity),
            log: CommandLog::with_capacity(config.log_capacity),
            replay_count: 0,
        };
        Self {
            config,
            inner: RwLock::new(inner),
        }
    }

    /// Build a store by applying `commands` in order to an empty state.
    ///
    /// Every command is logged, so the result replays to itself.
    pub fn from_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            for command in commands {
                inner.commit(command);
            }
        }
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Core Operations ---

    /// Apply a command and append it to the log as one atomic step.
    ///
    /// Never fails. A delete of an absent key changes nothing but is
    /// still logged.
    pub fn apply(&self, command: Command) {
        self.inner.write().commit(command);
    }

    /// Execute a read-only query.
    ///
    /// Returns `StoreError::NotFound` when the key is absent.
    pub fn execute(&self, query: &Query) -> Result<String> {
        let inner = self.inner.read();
        let result = evaluate_query(&inner.state, query);
        trace!(query = %query, found = result.is_ok(), "query executed");
        result
    }

    /// Rebuild state from the command log.
    ///
    /// Resets the state to empty and re-applies every logged command in
    /// commit order. The log is left untouched, and no other operation can
    /// run until the rebuild is complete.
    pub fn replay(&self) {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        debug!(entries = inner.log.len(), "replay started");

        inner.state.reset();
        for command in &inner.log {
            apply_command(&mut inner.state, command);
        }
        inner.replay_count += 1;

        debug!(
            entries = inner.log.len(),
            keys = inner.state.len(),
            "replay finished"
        );
    }

    /// Copy of the command log in commit order.
    pub fn get_log(&self) -> Vec<Command> {
        self.inner.read().log.snapshot()
    }

    // --- Convenience Operations ---

    /// Set `key` to `value`.
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.apply(Command::put(key, value));
    }

    /// Get the current value of `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        self.execute(&Query::get(key))
    }

    /// Delete `key`, reporting `NotFound` if it is absent.
    ///
    /// The existence check and the delete happen under the same exclusive
    /// lock. A missing key leaves both the state and the log unchanged.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.state.contains_key(key) {
            trace!(key, "delete of absent key rejected");
            return Err(StoreError::NotFound(key.to_string()));
        }
        inner.commit(Command::delete(key));
        Ok(())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().state.contains_key(key)
    }

    /// Number of keys currently present.
    pub fn len(&self) -> usize {
        self.inner.read().state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().state.is_empty()
    }

    /// Number of commands recorded in the log.
    pub fn log_len(&self) -> usize {
        self.inner.read().log.len()
    }

    /// Copy of the current contents in key order.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.read().state.to_sorted()
    }

    /// Fingerprint of the current contents.
    ///
    /// Equal stores have equal digests regardless of how they got there.
    pub fn digest(&self) -> StateDigest {
        self.inner.read().state.digest()
    }

    /// Get store statistics.
    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            key_count: inner.state.len() as u64,
            log_len: inner.log.len() as u64,
            replay_count: inner.replay_count,
        }
    }
}
