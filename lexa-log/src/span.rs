//! Span 跟踪

/// Span ID（Logger 内单调递增）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanId(pub u64);

/// 一次扫描或一个处理阶段的上下文
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub id: SpanId,
    /// 通常是扫描的形状名
    pub name: &'static str,
}

impl Span {
    pub const fn new(id: SpanId, name: &'static str) -> Self {
        Span { id, name }
    }
}
