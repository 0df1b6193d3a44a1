//! Compare the table with the address space of a running server.

use anyhow::{anyhow, Result};
use opcua::client::prelude::*;
use opcua::types::{
    AttributeId, DataValue, NodeId, QualifiedName, ReadValueId, StatusCode, TimestampsToReturn,
    UAString, Variant,
};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::node_id::standard_namespace_index;
use crate::node_ids::StandardNodeId;
use crate::registry;

/// An entry whose browse name on the server differs from its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub id: StandardNodeId,
    pub browse_name: String,
}

/// An entry the server rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unknown {
    pub id: StandardNodeId,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCheckReport {
    pub checked: usize,
    pub unknown: Vec<Unknown>,
    pub renamed: Vec<Renamed>,
}

impl ServerCheckReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.renamed.is_empty()
    }

    /// Fold the BrowseName read result for one entry into the report.
    pub fn record(&mut self, id: StandardNodeId, value: &DataValue) {
        self.checked += 1;

        if let Some(status) = value.status {
            if status.is_bad() {
                self.unknown.push(Unknown {
                    id,
                    status: format!("{status}"),
                });
                return;
            }
        }

        match &value.value {
            Some(Variant::QualifiedName(name)) => {
                let actual = name.name.as_ref();
                if !browse_name_matches(id, actual) {
                    log::debug!("{id} has browse name '{actual}' on the server");
                    self.renamed.push(Renamed {
                        id,
                        browse_name: actual.to_string(),
                    });
                }
            }
            other => {
                log::warn!("{id}: BrowseName read returned {other:?}");
                self.unknown.push(Unknown {
                    id,
                    status: "no browse name".to_string(),
                });
            }
        }
    }
}

/// The browse name the standard gives a node, derived from its symbolic name.
///
/// Placeholders are named after the segment before `_Placeholder` and shown
/// as `<Segment>` on the server.
pub fn expected_browse_name(id: StandardNodeId) -> String {
    let segments: Vec<&str> = registry::path(id).collect();
    match segments.as_slice() {
        [.., placeholder, "Placeholder"] => format!("<{placeholder}>"),
        [.., last] => (*last).to_string(),
        [] => String::new(),
    }
}

/// Compare ignoring case, whitespace and placeholder brackets, so that
/// `DefaultBinary` matches `Default Binary` and `AdditionalGroup_Placeholder`
/// matches `<AdditionalGroup>`.
pub fn browse_name_matches(id: StandardNodeId, actual: &str) -> bool {
    normalize(&expected_browse_name(id)) == normalize(actual)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '<' && *c != '>')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read the server's NamespaceArray and confirm the standard namespace sits at index 0.
pub async fn check_namespace_array(session: Arc<RwLock<Session>>) -> Result<()> {
    let node_id: NodeId = StandardNodeId::Server_NamespaceArray.into();

    let values = tokio::task::spawn_blocking(move || {
        let read = ReadValueId {
            node_id,
            attribute_id: AttributeId::Value as u32,
            index_range: UAString::null(),
            data_encoding: QualifiedName::null(),
        };
        session
            .read()
            .read(&[read], TimestampsToReturn::Neither, 0.0)
            .map_err(|status| anyhow!("Reading NamespaceArray failed: {}", status))
    })
    .await??;

    let namespaces: Vec<String> = match values.first().and_then(|dv| dv.value.as_ref()) {
        Some(Variant::Array(array)) => array
            .values
            .iter()
            .filter_map(|value| match value {
                Variant::String(uri) => Some(uri.as_ref().to_string()),
                _ => None,
            })
            .collect(),
        other => return Err(anyhow!("Unexpected NamespaceArray value: {:?}", other)),
    };

    log::debug!("Server namespaces: {namespaces:?}");
    standard_namespace_index(&namespaces)?;
    Ok(())
}

/// Read the BrowseName of every entry in `ids`, `batch_size` nodes per request.
pub async fn check_browse_names(
    session: Arc<RwLock<Session>>,
    ids: &[StandardNodeId],
    batch_size: usize,
) -> Result<ServerCheckReport> {
    let mut report = ServerCheckReport::default();
    let batch_size = batch_size.max(1);

    for (batch_number, batch) in ids.chunks(batch_size).enumerate() {
        let batch = batch.to_vec();
        let nodes_to_read: Vec<ReadValueId> = batch
            .iter()
            .map(|id| ReadValueId {
                node_id: (*id).into(),
                attribute_id: AttributeId::BrowseName as u32,
                index_range: UAString::null(),
                data_encoding: QualifiedName::null(),
            })
            .collect();

        let session = session.clone();
        let values = tokio::task::spawn_blocking(move || {
            session
                .read()
                .read(&nodes_to_read, TimestampsToReturn::Neither, 0.0)
                .map_err(|status| anyhow!("Read request failed: {}", status))
        })
        .await??;

        if values.len() != batch.len() {
            return Err(anyhow!(
                "Server returned {} results for {} nodes",
                values.len(),
                batch.len()
            ));
        }

        for (id, value) in batch.iter().zip(values.iter()) {
            report.record(*id, value);
        }

        log::debug!(
            "Batch {}: {} of {} entries checked",
            batch_number + 1,
            report.checked,
            ids.len()
        );
    }

    log::info!(
        "Checked {} entries: {} unknown to the server, {} with a different browse name",
        report.checked,
        report.unknown.len(),
        report.renamed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browse_name_value(name: &str) -> DataValue {
        DataValue {
            value: Some(Variant::from(QualifiedName::new(0, name))),
            status: Some(StatusCode::Good),
            ..Default::default()
        }
    }

    #[test]
    fn test_expected_browse_name() {
        assert_eq!(
            expected_browse_name(StandardNodeId::PubSubConnectionType_Diagnostics),
            "Diagnostics"
        );
        assert_eq!(
            expected_browse_name(StandardNodeId::ServerCapabilitiesType_VendorCapability_Placeholder),
            "<VendorCapability>"
        );
        assert_eq!(expected_browse_name(StandardNodeId::Server), "Server");
    }

    #[test]
    fn test_browse_name_matches_display_forms() {
        assert!(browse_name_matches(
            StandardNodeId::Argument_Encoding_DefaultBinary,
            "Default Binary"
        ));
        assert!(browse_name_matches(
            StandardNodeId::ServerCapabilitiesType_VendorCapability_Placeholder,
            "<VendorCapability>"
        ));
        assert!(!browse_name_matches(StandardNodeId::Server, "Objects"));
    }

    #[test]
    fn test_record_classifies_results() {
        let mut report = ServerCheckReport::default();
        report.record(StandardNodeId::Server, &browse_name_value("Server"));
        report.record(StandardNodeId::ObjectsFolder, &browse_name_value("Things"));
        report.record(
            StandardNodeId::NetworkAddressType,
            &DataValue {
                value: None,
                status: Some(StatusCode::BadNodeIdUnknown),
                ..Default::default()
            },
        );

        assert_eq!(report.checked, 3);
        assert_eq!(
            report.renamed,
            vec![Renamed {
                id: StandardNodeId::ObjectsFolder,
                browse_name: "Things".to_string(),
            }]
        );
        assert_eq!(report.unknown.len(), 1);
        assert_eq!(report.unknown[0].id, StandardNodeId::NetworkAddressType);
        assert!(!report.is_clean());
    }
}
