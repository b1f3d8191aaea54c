use serde::Serialize;

/// A single finding reported by the analyzer.
///
/// Issues are plain values: immutable once constructed, with no identity
/// beyond their fields. The serialized form is the machine-readable report
/// contract consumed by external tooling: one record per issue with the
/// fields `rule`, `message`, `line`, `column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Stable identifier of the rule that produced this finding.
    #[serde(rename = "rule")]
    pub rule_id: String,
    /// Human-readable description of the finding.
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
}

impl Issue {
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{}  {}",
            self.rule_id, self.line, self.column, self.message
        )
    }
}
