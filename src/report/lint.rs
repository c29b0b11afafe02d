use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A PMD JSON report (`pmd -f json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintReport {
    pub files: Vec<LintFile>,
}

/// One analyzed source file and its violations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintFile {
    pub filename: String,

    #[serde(default)]
    pub violations: Vec<Violation>,
}

/// A single rule violation. PMD emits more fields (endline, priority,
/// ruleset, ...); only the projected ones are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub description: String,
    /// 1-based
    pub beginline: u64,
}

impl LintReport {
    /// Interpret a parsed JSON value as a lint report.
    ///
    /// A falsy value or one without a `files` key is an empty report. A
    /// present `files` key must match the expected shape.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if is_falsy(&value) || value.get("files").is_none() {
            return Ok(LintReport::default());
        }
        serde_json::from_value(value)
    }

    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
