//! Append-only command log.

use crate::types::Command;

/// Ordered history of every committed command.
///
/// The log only grows. Entry order is commit order, which is the order
/// replay re-applies them in.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    entries: Vec<Command>,
}

impl CommandLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a command to the tail.
    pub fn append(&mut self, command: Command) {
        self.entries.push(command);
    }

    /// Independent copy of the log in commit order.
    pub fn snapshot(&self) -> Vec<Command> {
        self.entries.clone()
    }

    /// Iterate commands in commit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommandLog {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = CommandLog::new();
        log.append(Command::put("a", "1"));
        log.append(Command::delete("a"));
        log.append(Command::put("b", "2"));

        let keys: Vec<_> = log.iter().map(|c| c.key().to_string()).collect();
        assert_eq!(keys, vec!["a", "a", "b"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut log = CommandLog::with_capacity(4);
        log.append(Command::put("a", "1"));

        let mut copy = log.snapshot();
        copy.clear();
        copy.push(Command::delete("z"));

        assert_eq!(log.len(), 1);
        assert_eq!(log.snapshot(), vec![Command::put("a", "1")]);
    }

    #[test]
    fn test_snapshot_does_not_see_later_appends() {
        let mut log = CommandLog::new();
        log.append(Command::put("a", "1"));
        let before = log.snapshot();

        log.append(Command::put("b", "2"));

        assert_eq!(before.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_empty() {
        let log = CommandLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
    }
}
