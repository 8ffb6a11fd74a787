//! Lexa Core - cursor, scan errors and single-shape automata (pure logic, no IO)
//!
//! Each automaton recognizes exactly one token shape over a whole input string.
//! Logging goes through an explicitly passed `Arc<Logger>`; nothing here owns
//! global state.

pub mod automata;
pub mod dispatch;
pub mod kit;
pub mod token;

// Re-export common types
pub use dispatch::{scan, scan_with_logger};
pub use kit::lexer::{
    CharClass, Cursor, ErrorKind, ScanError, ScanResult, Scanned, Scanner, SourcePosition,
};
pub use token::TokenValue;

// Re-export config types from lexa-config
pub use lexa_config::Shape;
