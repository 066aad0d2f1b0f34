//! # ledgerkv
//!
//! An in-memory key-value store that records every mutation as a command
//! and can rebuild its state by replaying that command log.
//!
//! ## Core Concepts
//!
//! - **Commands**: Mutations (`Put`, `Delete`), applied and logged atomically
//! - **Queries**: Reads (`Get`), never logged
//! - **Command Log**: Append-only history in commit order
//! - **Replay**: Reset to empty and re-apply the whole log
//!
//! ## Example
//!
//! ```
//! use ledgerkv::{Command, Query, Store, StoreError};
//!
//! let store = Store::new();
//! store.apply(Command::put("k1", "v1"));
//! store.apply(Command::put("k2", "v2"));
//! store.apply(Command::delete("k1"));
//!
//! store.replay();
//!
//! assert_eq!(store.execute(&Query::get("k2")).unwrap(), "v2");
//! assert!(matches!(
//!     store.execute(&Query::get("k1")),
//!     Err(StoreError::NotFound(_))
//! ));
//! assert_eq!(store.get_log().len(), 3);
//! ```

pub mod error;
pub mod records;
pub mod state;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use records::CommandLog;
pub use state::{apply_command, evaluate_query, StoreState};
pub use store::{Store, StoreConfig};
pub use types::*;
