use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Result, SarifError};
use crate::report::json;
use crate::report::lint::LintReport;
use crate::report::sarif::{
    Driver, Run, SarifDocument, SarifResult, Tool, PMD_INFORMATION_URI, PMD_TOOL_NAME,
};

/// Converts a PMD JSON report into a single-run SARIF document
#[derive(Debug, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Converter
    }

    /// Read a PMD report from disk. Empty files and documents without a
    /// `files` key yield an empty report; JSON syntax errors do not.
    pub fn load(&self, path: &Path) -> Result<LintReport> {
        let content = json::read(path)?;
        if content.trim().is_empty() {
            debug!("{} is empty, treating as a report with no files", path.display());
            return Ok(LintReport::default());
        }

        let value: Value = json::parse(path, &content)?;
        let report = LintReport::from_value(value).map_err(|source| SarifError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {} files with {} violations from {}",
            report.files.len(),
            report.violation_count(),
            path.display()
        );
        Ok(report)
    }

    /// Project every violation of every file onto one SARIF result
    pub fn convert(&self, report: &LintReport) -> SarifDocument {
        let results: Vec<SarifResult> = report
            .files
            .iter()
            .flat_map(|file| {
                file.violations.iter().map(move |v| {
                    SarifResult::new(&v.rule, &v.description, &file.filename, v.beginline)
                })
            })
            .collect();

        let run = Run {
            tool: Some(Tool {
                driver: Driver {
                    name: PMD_TOOL_NAME.to_string(),
                    information_uri: Some(PMD_INFORMATION_URI.to_string()),
                    rules: Some(Vec::new()),
                    extra: Map::new(),
                },
                extra: Map::new(),
            }),
            results: Some(results),
            taxonomies: None,
            automation_details: None,
            extra: Map::new(),
        };

        SarifDocument::with_runs(vec![run])
    }

    /// Load, convert, and write in one pass
    pub fn run(&self, input: &Path, output: &Path, pretty: bool) -> Result<SarifDocument> {
        let report = self.load(input)?;
        let doc = self.convert(&report);
        info!("Converted {} results", doc.result_count());
        json::write(output, &doc, pretty)?;
        Ok(doc)
    }
}
