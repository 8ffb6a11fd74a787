//! 统一的扫描结果值

use std::fmt;

use serde::Serialize;

/// 任意形状的扫描结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TokenValue {
    Integer(i64),
    /// 标识符、交替串、字符串和注释
    Text(String),
    Letters(Vec<char>),
    Digits(Vec<u32>),
    Decimal(f64),
    /// 标识符链的各段
    Segments(Vec<String>),
}

impl TokenValue {
    pub fn kind(&self) -> &'static str {
        match self {
            TokenValue::Integer(_) => "integer",
            TokenValue::Text(_) => "text",
            TokenValue::Letters(_) => "letters",
            TokenValue::Digits(_) => "digits",
            TokenValue::Decimal(_) => "decimal",
            TokenValue::Segments(_) => "segments",
        }
    }

    /// 能重新扫描出同一结果的输入文本
    pub fn canonical_text(&self) -> String {
        match self {
            TokenValue::Integer(n) => n.to_string(),
            TokenValue::Text(s) => s.clone(),
            TokenValue::Letters(letters) => join(letters, ","),
            TokenValue::Digits(digits) => join(digits, " "),
            // f64 的 Display 不使用指数形式
            TokenValue::Decimal(x) => x.to_string(),
            TokenValue::Segments(segments) => segments.join("."),
        }
    }
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Integer(n) => write!(f, "{n}"),
            TokenValue::Text(s) => write!(f, "{s}"),
            TokenValue::Decimal(x) => write!(f, "{x}"),
            TokenValue::Letters(letters) => write!(f, "[{}]", join(letters, ", ")),
            TokenValue::Digits(digits) => write!(f, "[{}]", join(digits, ", ")),
            TokenValue::Segments(segments) => write!(f, "[{}]", segments.join(", ")),
        }
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        TokenValue::Integer(n)
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

impl From<Vec<char>> for TokenValue {
    fn from(letters: Vec<char>) -> Self {
        TokenValue::Letters(letters)
    }
}

impl From<Vec<u32>> for TokenValue {
    fn from(digits: Vec<u32>) -> Self {
        TokenValue::Digits(digits)
    }
}

impl From<f64> for TokenValue {
    fn from(x: f64) -> Self {
        TokenValue::Decimal(x)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(segments: Vec<String>) -> Self {
        TokenValue::Segments(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text() {
        assert_eq!(TokenValue::Integer(-5).canonical_text(), "-5");
        assert_eq!(TokenValue::Letters(vec!['a', 'b']).canonical_text(), "a,b");
        assert_eq!(TokenValue::Digits(vec![1, 2, 3]).canonical_text(), "1 2 3");
        assert_eq!(TokenValue::Decimal(123.0).canonical_text(), "123");
        assert_eq!(TokenValue::Decimal(0.5).canonical_text(), "0.5");
        assert_eq!(TokenValue::Decimal(1e21).canonical_text(), "1000000000000000000000");
        assert_eq!(
            TokenValue::Segments(vec!["a".into(), "b".into()]).canonical_text(),
            "a.b"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenValue::Letters(vec!['a', 'b', 'c']).to_string(), "[a, b, c]");
        assert_eq!(TokenValue::Digits(vec![4, 2]).to_string(), "[4, 2]");
        assert_eq!(TokenValue::Text("'x'".into()).to_string(), "'x'");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&TokenValue::Digits(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"kind":"digits","value":[1,2]}"#);

        let json = serde_json::to_string(&TokenValue::Integer(7)).unwrap();
        assert_eq!(json, r#"{"kind":"integer","value":7}"#);
    }
}
