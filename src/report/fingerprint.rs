use sha2::{Digest, Sha256};

use crate::report::sarif::{SarifResult, FINGERPRINT_KEY};

/// Rule used when a result carries no `ruleId`
pub const UNKNOWN_RULE: &str = "unknown";

/// Deterministic fingerprint of a finding: SHA-256 hex of
/// `file:line:rule:message`.
pub fn fingerprint(file: &str, line: u64, rule: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}:{}:{}", file, line, rule, message).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Why a result's first location cannot be fingerprinted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationGap {
    /// `locations` is empty
    NoLocation,
    /// The first location lacks the named field
    Missing(&'static str),
}

impl SarifResult {
    /// Fingerprint of this result from its first location. Later
    /// locations are not inspected.
    pub fn compute_fingerprint(&self) -> Result<String, LocationGap> {
        let first = self.locations.first().ok_or(LocationGap::NoLocation)?;
        let physical = first
            .physical_location
            .as_ref()
            .ok_or(LocationGap::Missing("physicalLocation"))?;
        let uri = physical
            .artifact_location
            .as_ref()
            .and_then(|a| a.uri.as_deref())
            .ok_or(LocationGap::Missing("physicalLocation.artifactLocation.uri"))?;
        let line = physical
            .region
            .as_ref()
            .and_then(|r| r.start_line)
            .ok_or(LocationGap::Missing("physicalLocation.region.startLine"))?;
        let rule = self.rule_id.as_deref().unwrap_or(UNKNOWN_RULE);
        Ok(fingerprint(uri, line, rule, &self.message.text))
    }

    /// Replace `partialFingerprints` with `{"default": <fingerprint>}`
    pub fn set_fingerprint(&mut self, fp: String) {
        let mut map = std::collections::BTreeMap::new();
        map.insert(FINGERPRINT_KEY.to_string(), fp);
        self.partial_fingerprints = Some(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            fingerprint("A.java", 10, "UnusedVar", "x unused"),
            "5d209aee91a82b0262a8e51211d29ed96d2ce82aedf8820b586d0661ce632afe"
        );
    }

    #[test]
    fn same_inputs_same_fingerprint() {
        let a = fingerprint("src/Foo.java", 3, "NP_NULL", "Possible null");
        let b = fingerprint("src/Foo.java", 3, "NP_NULL", "Possible null");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn line_changes_fingerprint() {
        assert_ne!(
            fingerprint("A.java", 10, "UnusedVar", "x unused"),
            fingerprint("A.java", 11, "UnusedVar", "x unused")
        );
    }

    #[test]
    fn missing_rule_uses_unknown() {
        let mut result = SarifResult::new("ignored", "no rule", "B.java", 7);
        result.rule_id = None;
        assert_eq!(
            result.compute_fingerprint().unwrap(),
            "c8dceded8af989b60e51afb7d7bf2efc3dba975a71f36f5a787439a36b30eb69"
        );
    }

    #[test]
    fn no_location_no_fingerprint() {
        let mut result = SarifResult::new("R", "m", "A.java", 1);
        result.locations.clear();
        assert_eq!(result.compute_fingerprint(), Err(LocationGap::NoLocation));
    }

    #[test]
    fn only_first_location_is_read() {
        let mut result = SarifResult::new("UnusedVar", "x unused", "A.java", 10);
        let mut logical = result.locations[0].clone();
        logical.physical_location = None;
        result.locations.push(logical);

        assert_eq!(
            result.compute_fingerprint().unwrap(),
            "5d209aee91a82b0262a8e51211d29ed96d2ce82aedf8820b586d0661ce632afe"
        );
    }

    #[test]
    fn first_location_without_region_is_a_gap() {
        let mut result = SarifResult::new("R", "m", "A.java", 1);
        if let Some(physical) = result.locations[0].physical_location.as_mut() {
            physical.region = None;
        }
        assert_eq!(
            result.compute_fingerprint(),
            Err(LocationGap::Missing("physicalLocation.region.startLine"))
        );
    }

    #[test]
    fn first_location_without_physical_is_a_gap() {
        let mut result = SarifResult::new("R", "m", "A.java", 1);
        result.locations[0].physical_location = None;
        assert_eq!(
            result.compute_fingerprint(),
            Err(LocationGap::Missing("physicalLocation"))
        );
    }

    #[test]
    fn set_fingerprint_overwrites_existing_keys() {
        let mut result = SarifResult::new("R", "m", "A.java", 1);
        let mut stale = std::collections::BTreeMap::new();
        stale.insert("primaryLocationLineHash".to_string(), "abc".to_string());
        result.partial_fingerprints = Some(stale);

        result.set_fingerprint("fp".to_string());

        let map = result.partial_fingerprints.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(FINGERPRINT_KEY).map(String::as_str), Some("fp"));
    }
}
