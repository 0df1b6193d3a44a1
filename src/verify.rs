//! Checks of the table against an authoritative `NodeIds.csv` and against
//! the names consuming code depends on.

use std::collections::{HashMap, HashSet};

use crate::node_ids::StandardNodeId;
use crate::nodeset_csv::CsvEntry;
use crate::registry;

/// A name bound to different identifiers in the table and the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub id: StandardNodeId,
    pub csv_value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub compared: usize,
    pub mismatched: Vec<Mismatch>,
    /// Names present in the CSV but not in the table.
    pub missing: Vec<CsvEntry>,
    /// Names present in the table but not in the CSV.
    pub extra: Vec<StandardNodeId>,
    pub csv_duplicate_names: Vec<String>,
    pub csv_duplicate_ids: Vec<u32>,
}

impl VerifyReport {
    /// No identifier disagrees and the CSV is itself well formed.
    ///
    /// The table may track a different release than the CSV, so names
    /// present on only one side do not make it inconsistent.
    pub fn is_consistent(&self) -> bool {
        self.mismatched.is_empty()
            && self.csv_duplicate_names.is_empty()
            && self.csv_duplicate_ids.is_empty()
    }

    /// The table and the CSV hold exactly the same bindings.
    pub fn is_exact(&self) -> bool {
        self.is_consistent() && self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare the table with the entries of a `NodeIds.csv`.
pub fn verify_against(entries: &[CsvEntry]) -> VerifyReport {
    let mut report = VerifyReport::default();
    let mut seen_names = HashSet::new();
    let mut seen_ids: HashMap<u32, &str> = HashMap::new();
    let mut matched = HashSet::new();

    for entry in entries {
        if !seen_names.insert(entry.name.as_str()) {
            report.csv_duplicate_names.push(entry.name.clone());
            continue;
        }
        if let Some(previous) = seen_ids.insert(entry.value, entry.name.as_str()) {
            log::warn!(
                "NodeIds.csv binds i={} to both {} and {}",
                entry.value,
                previous,
                entry.name
            );
            report.csv_duplicate_ids.push(entry.value);
        }

        match registry::by_name(&entry.name) {
            Some(id) => {
                report.compared += 1;
                matched.insert(id);
                if id.value() != entry.value {
                    log::debug!(
                        "{} is i={} in the table but i={} in the CSV",
                        id,
                        id.value(),
                        entry.value
                    );
                    report.mismatched.push(Mismatch {
                        id,
                        csv_value: entry.value,
                    });
                }
            }
            None => report.missing.push(entry.clone()),
        }
    }

    report.extra = StandardNodeId::ALL
        .iter()
        .copied()
        .filter(|id| !matched.contains(id))
        .collect();

    log::info!(
        "Compared {} entries: {} mismatched, {} missing, {} extra",
        report.compared,
        report.mismatched.len(),
        report.missing.len(),
        report.extra.len()
    );

    report
}

/// Names required by consuming code that the table does not provide.
///
/// Blank lines and `#` comments are skipped.
pub fn check_required<'a, I>(names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut missing: Vec<&str> = names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.starts_with('#'))
        .filter(|name| registry::by_name(name).is_none())
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodeset_csv::NodeClass;

    fn entry(name: &str, value: u32) -> CsvEntry {
        CsvEntry {
            name: name.to_string(),
            value,
            node_class: Some(NodeClass::Object),
        }
    }

    #[test]
    fn test_matching_entries_are_consistent() {
        let report = verify_against(&[
            entry("PubSubConnectionType_Diagnostics", 19241),
            entry("CertificateGroupType_CertificateExpired", 19450),
        ]);
        assert_eq!(report.compared, 2);
        assert!(report.is_consistent());
        assert!(!report.is_exact());
        assert_eq!(report.extra.len(), StandardNodeId::ALL.len() - 2);
    }

    #[test]
    fn test_detects_renumbered_entry() {
        let report = verify_against(&[entry("NetworkAddressType", 21146)]);
        assert_eq!(
            report.mismatched,
            vec![Mismatch {
                id: StandardNodeId::NetworkAddressType,
                csv_value: 21146,
            }]
        );
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_detects_missing_and_duplicates() {
        let report = verify_against(&[
            entry("SomeFutureType", 40000),
            entry("Server", 2253),
            entry("Server", 2253),
            entry("ServerAlias", 2253),
        ]);
        assert_eq!(report.missing.len(), 2);
        assert_eq!(report.csv_duplicate_names, vec!["Server".to_string()]);
        assert_eq!(report.csv_duplicate_ids, vec![2253]);
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_full_table_is_exact() {
        let entries: Vec<CsvEntry> = StandardNodeId::ALL
            .iter()
            .map(|id| CsvEntry {
                name: id.name().to_string(),
                value: id.value(),
                node_class: None,
            })
            .collect();
        assert!(verify_against(&entries).is_exact());
    }

    #[test]
    fn test_check_required() {
        let missing = check_required([
            "Server",
            "DataSetOrderingType",
            "ArrayTestType",
            "ArrayTestType",
            "",
            "# comment",
        ]);
        assert_eq!(missing, vec!["ArrayTestType"]);
    }
}
