use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, SarifError};
use crate::report::fingerprint::LocationGap;
use crate::report::json;
use crate::report::sarif::{Run, SarifDocument};

/// Combines SARIF documents, stripping non-portable run metadata and
/// stamping every result with a content fingerprint.
#[derive(Debug, Default)]
pub struct Merger;

impl Merger {
    pub fn new() -> Self {
        Merger
    }

    /// Load a SARIF document. A path that does not exist is an empty
    /// document; a present file must parse.
    pub fn load(&self, path: &Path) -> Result<SarifDocument> {
        if !path.exists() {
            debug!("{} does not exist, treating as no runs", path.display());
            return Ok(SarifDocument::default());
        }
        let content = json::read(path)?;
        let doc: SarifDocument = json::parse(path, &content)?;
        info!(
            "Loaded {} runs with {} results from {}",
            doc.runs.len(),
            doc.result_count(),
            path.display()
        );
        Ok(doc)
    }

    /// Drop `taxonomies` and `automationDetails` from a run
    pub fn sanitize(run: &mut Run) {
        if run.taxonomies.take().is_some() {
            debug!("Removed taxonomies from {} run", run.tool_name());
        }
        if run.automation_details.take().is_some() {
            debug!("Removed automationDetails from {} run", run.tool_name());
        }
    }

    /// Fingerprint every result in `run`. `index` identifies the run in errors.
    pub fn fingerprint(run: &mut Run, index: usize) -> Result<()> {
        for (i, result) in run.results.iter_mut().flatten().enumerate() {
            let fp = result.compute_fingerprint().map_err(|gap| match gap {
                LocationGap::NoLocation => SarifError::MissingLocation { run: index, result: i },
                LocationGap::Missing(field) => SarifError::IncompleteLocation {
                    run: index,
                    result: i,
                    field,
                },
            })?;
            result.set_fingerprint(fp);
        }
        Ok(())
    }

    /// Sanitize and fingerprint `first`'s runs followed by `second`'s
    pub fn merge(&self, first: SarifDocument, second: SarifDocument) -> Result<SarifDocument> {
        let mut runs: Vec<Run> = first.runs;
        runs.extend(second.runs);

        for (index, run) in runs.iter_mut().enumerate() {
            Self::sanitize(run);
            Self::fingerprint(run, index)?;
        }

        Ok(SarifDocument::with_runs(runs))
    }

    /// Load both inputs, merge, and write
    pub fn run(
        &self,
        first: &Path,
        second: &Path,
        output: &Path,
        pretty: bool,
    ) -> Result<SarifDocument> {
        let a = self.load(first)?;
        let b = self.load(second)?;
        let merged = self.merge(a, b)?;
        info!(
            "Merged {} runs with {} fingerprinted results",
            merged.runs.len(),
            merged.result_count()
        );
        json::write(output, &merged, pretty)?;
        Ok(merged)
    }
}
