//! Command and query application.

use super::StoreState;
use crate::error::{Result, StoreError};
use crate::types::{Command, Query};

/// Apply a command to the state in place.
///
/// Total over every input: deleting an absent key is a no-op.
pub fn apply_command(state: &mut StoreState, command: &Command) {
    match command {
        Command::Put { key, value } => {
            state.set(key.clone(), value.clone());
        }
        Command::Delete { key } => {
            state.remove(key);
        }
    }
}

/// Evaluate a query against the state, returning a copy of the value.
pub fn evaluate_query(state: &StoreState, query: &Query) -> Result<String> {
    match query {
        Query::Get { key } => state
            .get(key)
            .map(str::to_owned)
            .ok_or_else(|| StoreError::NotFound(key.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put() {
        let mut state = StoreState::new();
        apply_command(&mut state, &Command::put("foo", "bar"));
        assert_eq!(state.get("foo"), Some("bar"));
    }

    #[test]
    fn test_put_overwrites() {
        let mut state = StoreState::new();
        apply_command(&mut state, &Command::put("k", "v1"));
        apply_command(&mut state, &Command::put("k", "v2"));
        assert_eq!(evaluate_query(&state, &Query::get("k")).unwrap(), "v2");
    }

    #[test]
    fn test_put_empty_value() {
        let mut state = StoreState::new();
        apply_command(&mut state, &Command::put("k", ""));
        assert_eq!(evaluate_query(&state, &Query::get("k")).unwrap(), "");
    }

    #[test]
    fn test_delete_existing() {
        let mut state = StoreState::new();
        apply_command(&mut state, &Command::put("foo", "bar"));
        apply_command(&mut state, &Command::delete("foo"));

        let err = evaluate_query(&state, &Query::get("foo")).unwrap_err();
        assert_eq!(err, StoreError::NotFound("foo".to_string()));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut state = StoreState::new();
        apply_command(&mut state, &Command::put("a", "1"));
        let before = state.clone();

        apply_command(&mut state, &Command::delete("missing"));

        assert_eq!(state, before);
    }

    #[test]
    fn test_get_missing() {
        let state = StoreState::new();
        let err = evaluate_query(&state, &Query::get("non-existent")).unwrap_err();
        assert!(err.is_not_found());
    }
}
