use std::collections::HashMap;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node_ids::StandardNodeId;

/// Separator between hierarchy segments in a symbolic name.
pub const SEGMENT_SEPARATOR: char = '_';

static NAME_INDEX: Lazy<HashMap<&'static str, StandardNodeId>> = Lazy::new(|| {
    let index: HashMap<_, _> = StandardNodeId::ALL
        .iter()
        .map(|id| (id.name(), *id))
        .collect();
    log::trace!("Built name index with {} entries", index.len());
    index
});

/// Summary of the table's coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub entries: usize,
    pub min_value: u32,
    pub max_value: u32,
}

/// Look up an entry by its exact symbolic name.
pub fn by_name(name: &str) -> Option<StandardNodeId> {
    NAME_INDEX.get(name).copied()
}

/// Look up an entry by numeric identifier.
pub fn by_value(value: u32) -> Option<StandardNodeId> {
    StandardNodeId::from_value(value)
}

/// The `_`-separated segments of an entry's name.
///
/// The segments follow the browse path the standard used to name the node,
/// which is a naming convention only; the table stores no references.
pub fn path(id: StandardNodeId) -> impl Iterator<Item = &'static str> {
    id.name().split(SEGMENT_SEPARATOR)
}

/// Depth of an entry in the naming hierarchy; top-level types are 0.
pub fn level(id: StandardNodeId) -> usize {
    id.name().matches(SEGMENT_SEPARATOR).count()
}

/// The last segment of an entry's name.
pub fn browse_name(id: StandardNodeId) -> &'static str {
    let name = id.name();
    name.rsplit(SEGMENT_SEPARATOR).next().unwrap_or(name)
}

/// The entry whose name is the longest proper `_`-prefix of `id`'s name.
///
/// Intermediate segments are not always entries themselves, so this walks up
/// until it finds one.
pub fn parent(id: StandardNodeId) -> Option<StandardNodeId> {
    let mut name = id.name();
    while let Some((head, _)) = name.rsplit_once(SEGMENT_SEPARATOR) {
        if let Some(found) = by_name(head) {
            return Some(found);
        }
        name = head;
    }
    None
}

/// Entries whose name extends `id`'s name by exactly one segment.
pub fn children(id: StandardNodeId) -> Vec<StandardNodeId> {
    let prefix = format!("{}{}", id.name(), SEGMENT_SEPARATOR);
    StandardNodeId::ALL
        .iter()
        .copied()
        .filter(|candidate| {
            candidate
                .name()
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| !rest.is_empty() && !rest.contains(SEGMENT_SEPARATOR))
        })
        .collect()
}

/// Entries whose name starts with `prefix`, in id order.
pub fn with_prefix(prefix: &str) -> Vec<StandardNodeId> {
    StandardNodeId::ALL
        .iter()
        .copied()
        .filter(|id| id.name().starts_with(prefix))
        .collect()
}

/// Entries whose name matches `pattern`, in id order.
pub fn search(pattern: &Regex) -> Vec<StandardNodeId> {
    StandardNodeId::ALL
        .iter()
        .copied()
        .filter(|id| pattern.is_match(id.name()))
        .collect()
}

/// Entries whose numeric identifier lies inside `range`.
pub fn in_range(range: RangeInclusive<u32>) -> &'static [StandardNodeId] {
    let all = StandardNodeId::ALL;
    let start = all.partition_point(|id| id.value() < *range.start());
    let end = all.partition_point(|id| id.value() <= *range.end());
    if start >= end {
        &[]
    } else {
        &all[start..end]
    }
}

pub fn stats() -> TableStats {
    let all = StandardNodeId::ALL;
    TableStats {
        entries: all.len(),
        min_value: all.first().map(|id| id.value()).unwrap_or_default(),
        max_value: all.last().map(|id| id.value()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(
            by_name("PubSubConnectionType_Diagnostics"),
            Some(StandardNodeId::PubSubConnectionType_Diagnostics)
        );
        assert_eq!(by_name("pubsubconnectiontype_diagnostics"), None);
        assert_eq!(by_name(""), None);
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for id in StandardNodeId::ALL {
            assert_eq!(by_name(id.name()), Some(*id));
            assert_eq!(by_value(id.value()), Some(*id));
        }
    }

    #[test]
    fn test_path_and_browse_name() {
        let id = StandardNodeId::PubSubConnectionType_Diagnostics;
        assert_eq!(path(id).collect::<Vec<_>>(), ["PubSubConnectionType", "Diagnostics"]);
        assert_eq!(browse_name(id), "Diagnostics");
        assert_eq!(level(id), 1);
        assert_eq!(browse_name(StandardNodeId::Server), "Server");
        assert_eq!(level(StandardNodeId::Server), 0);
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            parent(StandardNodeId::PubSubConnectionType_Diagnostics),
            Some(StandardNodeId::PubSubConnectionType)
        );
        assert_eq!(
            parent(StandardNodeId::Server_ServerStatus_State),
            Some(StandardNodeId::Server_ServerStatus)
        );
        assert_eq!(parent(StandardNodeId::Server), None);
    }

    #[test]
    fn test_children() {
        let kids = children(StandardNodeId::Server_ServerStatus);
        assert!(kids.contains(&StandardNodeId::Server_ServerStatus_State));
        assert!(kids.contains(&StandardNodeId::Server_ServerStatus_BuildInfo));
        assert!(!kids.contains(&StandardNodeId::Server_ServerStatus_BuildInfo_ProductName));
        assert!(kids.iter().all(|kid| parent(*kid) == Some(StandardNodeId::Server_ServerStatus)));
    }

    #[test]
    fn test_with_prefix_and_search() {
        let certificate_group = with_prefix("CertificateGroupType_");
        assert!(certificate_group.contains(&StandardNodeId::CertificateGroupType_CertificateExpired));

        let pattern = Regex::new("^TrustListOutOfDate").unwrap();
        assert!(search(&pattern).contains(&StandardNodeId::TrustListOutOfDateAlarmType));
    }

    #[test]
    fn test_in_range() {
        let slice = in_range(19188..=21687);
        assert!(slice.contains(&StandardNodeId::DataSetOrderingType));
        assert!(slice.contains(&StandardNodeId::NetworkAddressType));
        assert!(slice.iter().all(|id| (19188..=21687).contains(&id.value())));
        assert!(in_range(10..=1).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = stats();
        assert_eq!(stats.entries, StandardNodeId::ALL.len());
        assert_eq!(stats.min_value, 1);
        assert!(stats.max_value >= 21145);
    }
}
