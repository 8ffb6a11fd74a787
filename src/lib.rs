//! Lexa - single-shape character scanners
//!
//! Each scanner accepts exactly one token shape over a whole input string and
//! either returns a typed value or a three-line caret diagnostic.
//!
//! # Architecture
//!
//! ```text
//! lexa-config/  - Shape, output and log settings (pure data)
//! lexa-log/     - Explicitly passed logger, sinks, ring buffer
//! lexa-core/    - Cursor, ScanError, Scanner trait, automata (no IO)
//! lexa-api/     - run(shape, input, &RunConfig), LexaError, reports
//! lexa-cli/     - `lexa` binary
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lexa::{quick_scan, Shape, TokenValue};
//!
//! let output = quick_scan(Shape::LetterList, "a,b;c").unwrap();
//! assert_eq!(output.value, TokenValue::Letters(vec!['a', 'b', 'c']));
//!
//! let err = quick_scan(Shape::Integer, "12a").unwrap_err();
//! assert_eq!(err.to_string(), "12a\n  ^\nError in symbol a");
//! ```

// API 层（对外接口）
pub use lexa_api::*;

// 核心层：直接使用自动机
pub use lexa_core::automata;
pub use lexa_core::{Cursor, ErrorKind, Scanned, Scanner, SourcePosition};

// 日志
pub use lexa_log;
