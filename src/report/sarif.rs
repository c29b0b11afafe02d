use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// SARIF version written on every output document
pub const SARIF_VERSION: &str = "2.1.0";

/// Key used in `partialFingerprints`
pub const FINGERPRINT_KEY: &str = "default";

/// Driver name on converted PMD runs
pub const PMD_TOOL_NAME: &str = "PMD";

/// Driver information URI on converted PMD runs
pub const PMD_INFORMATION_URI: &str = "https://pmd.github.io/";

/// Root SARIF document.
///
/// Only the fields this tool reads or rewrites are modeled; anything else
/// is carried through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SarifDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub runs: Vec<Run>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SarifDocument {
    /// A 2.1.0 document wrapping the given runs
    pub fn with_runs(runs: Vec<Run>) -> Self {
        SarifDocument {
            schema: None,
            version: Some(SARIF_VERSION.to_string()),
            runs,
            extra: Map::new(),
        }
    }

    /// Total results across all runs
    pub fn result_count(&self) -> usize {
        self.runs.iter().map(Run::result_count).sum()
    }
}

/// One analysis tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<Tool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SarifResult>>,

    /// Non-portable; stripped by the merger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomies: Option<Value>,

    /// Non-portable; stripped by the merger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_details: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Run {
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    /// Driver name, empty when the run has no tool
    pub fn tool_name(&self) -> &str {
        self.tool.as_ref().map_or("", |t| t.driver.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub driver: Driver,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tool driver. Rule metadata is passed through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    pub message: Message,

    #[serde(default)]
    pub locations: Vec<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_fingerprints: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A result location. Only the first location of a result is read, so
/// every part is optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_location: Option<PhysicalLocation>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_location: Option<ArtifactLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SarifResult {
    /// Build a result with a single physical location
    pub fn new(rule_id: &str, text: &str, uri: &str, start_line: u64) -> Self {
        SarifResult {
            rule_id: Some(rule_id.to_string()),
            message: Message {
                text: text.to_string(),
                extra: Map::new(),
            },
            locations: vec![Location {
                physical_location: Some(PhysicalLocation {
                    artifact_location: Some(ArtifactLocation {
                        uri: Some(uri.to_string()),
                        extra: Map::new(),
                    }),
                    region: Some(Region {
                        start_line: Some(start_line),
                        extra: Map::new(),
                    }),
                    extra: Map::new(),
                }),
                extra: Map::new(),
            }],
            partial_fingerprints: None,
            extra: Map::new(),
        }
    }
}
