//! Lexa Config - Pure configuration data structures
//!
//! This crate contains only data structures, no scanning logic or global state.
//! It serves as the shared configuration vocabulary across all Lexa crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token shape selected by the caller
///
/// Closed set: every variant maps to exactly one automaton in `lexa-core`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Integer,
    NonzeroInteger,
    Identifier,
    LetterDigit,
    LetterList,
    DigitList,
    LetterDigitGroup,
    Decimal,
    QuotedString,
    BlockComment,
    IdentChain,
}

impl Shape {
    /// All shapes, in declaration order
    pub const ALL: [Shape; 11] = [
        Shape::Integer,
        Shape::NonzeroInteger,
        Shape::Identifier,
        Shape::LetterDigit,
        Shape::LetterList,
        Shape::DigitList,
        Shape::LetterDigitGroup,
        Shape::Decimal,
        Shape::QuotedString,
        Shape::BlockComment,
        Shape::IdentChain,
    ];

    /// Get the string name of the shape
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Integer => "integer",
            Shape::NonzeroInteger => "nonzero-integer",
            Shape::Identifier => "identifier",
            Shape::LetterDigit => "letter-digit",
            Shape::LetterList => "letter-list",
            Shape::DigitList => "digit-list",
            Shape::LetterDigitGroup => "letter-digit-group",
            Shape::Decimal => "decimal",
            Shape::QuotedString => "quoted-string",
            Shape::BlockComment => "block-comment",
            Shape::IdentChain => "ident-chain",
        }
    }

    /// Get the log target name for this shape
    pub fn target(&self) -> String {
        format!("lexa::{}", self.as_str())
    }

    /// One-line description, used by `lexa --list`
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::Integer => "optional sign, then one or more digits",
            Shape::NonzeroInteger => "optional sign, then digits not starting with 0",
            Shape::Identifier => "letter, then letters, digits or '_'",
            Shape::LetterDigit => "letter, then strictly alternating digit/letter",
            Shape::LetterList => "letters separated by ',' or ';'",
            Shape::DigitList => "single digits separated by one space",
            Shape::LetterDigitGroup => "letter/digit groups of at most two",
            Shape::Decimal => "digits, optionally '.' and more digits",
            Shape::QuotedString => "text between single quotes",
            Shape::BlockComment => "text between /* and */",
            Shape::IdentChain => "identifiers separated by '.'",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown shape name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape '{}'", self.0)
    }
}

impl std::error::Error for UnknownShape {}

impl FromStr for Shape {
    type Err = UnknownShape;

    /// Accepts kebab-case or snake_case, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Shape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == normalized)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// Log verbosity shared by config file and CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// `silent` maps here: only errors
    #[serde(alias = "silent")]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse log level string ("silent" = only errors)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// How results and errors are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable: value on success, caret diagnostic on failure
    #[default]
    Text,
    /// One JSON document per run
    Json,
}

/// Project configuration (`lexa.json`)
///
/// Every field is optional; CLI flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexaConfig {
    /// Shape used when none is given on the command line
    pub shape: Option<Shape>,
    /// Output format
    pub format: OutputFormat,
    /// Core logger level; `None` disables core logging
    pub log_level: Option<LogLevel>,
    /// Print shape and canonical form next to the value
    pub show_steps: bool,
}

impl LexaConfig {
    /// Parse a JSON config document
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_as_str_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>(), Ok(shape));
        }
    }

    #[test]
    fn test_shape_from_str_lenient() {
        assert_eq!("Ident_Chain".parse::<Shape>(), Ok(Shape::IdentChain));
        assert_eq!(" decimal ".parse::<Shape>(), Ok(Shape::Decimal));
        assert_eq!(
            "float".parse::<Shape>(),
            Err(UnknownShape("float".to_string()))
        );
    }

    #[test]
    fn test_shape_target() {
        assert_eq!(Shape::Integer.target(), "lexa::integer");
        assert_eq!(Shape::BlockComment.target(), "lexa::block-comment");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_default_config() {
        let cfg = LexaConfig::default();
        assert_eq!(cfg.shape, None);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.log_level, None);
        assert!(!cfg.show_steps);
    }

    #[test]
    fn test_config_from_json() {
        let cfg = LexaConfig::from_json(
            r#"{ "shape": "letter-list", "format": "json", "log_level": "silent" }"#,
        )
        .unwrap();
        assert_eq!(cfg.shape, Some(Shape::LetterList));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.log_level, Some(LogLevel::Error));
        assert!(!cfg.show_steps);
    }

    #[test]
    fn test_config_from_json_rejects_unknown_shape() {
        assert!(LexaConfig::from_json(r#"{ "shape": "float" }"#).is_err());
    }
}
