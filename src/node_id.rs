//! Resolution of the various NodeId shapes to a table entry.
//!
//! Supported text forms:
//! - `ServerType` (symbolic name)
//! - `2004` (bare numeric identifier)
//! - `i=2004`, `ns=0;i=2004`
//! - `nsu=http://opcfoundation.org/UA/;i=2004`, optionally prefixed with `svr=0;`

use once_cell::sync::Lazy;
use opcua::types::{ExpandedNodeId, Identifier, NodeId, UAString};
use regex::Regex;

use crate::error::NodeIdError;
use crate::node_ids::{StandardNodeId, STANDARD_NAMESPACE_INDEX, STANDARD_NAMESPACE_URI};

static NODE_ID_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:svr=(?P<svr>\d+);)?(?:(?:ns=(?P<ns>\d+)|nsu=(?P<nsu>[^;]+));)?(?P<kind>[isgb])=(?P<id>.*)$",
    )
    .expect("node id pattern is valid")
});

static SYMBOLIC_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern is valid"));

/// Resolve any supported text form to its table entry.
pub fn resolve(text: &str) -> Result<StandardNodeId, NodeIdError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NodeIdError::malformed(text, "empty input"));
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        let value: u32 = text
            .parse()
            .map_err(|_| NodeIdError::malformed(text, "numeric identifier out of range"))?;
        return StandardNodeId::try_from(value);
    }

    if let Some(caps) = NODE_ID_TEXT.captures(text) {
        if let Some(svr) = caps.name("svr") {
            if svr.as_str().parse::<u32>().ok() != Some(0) {
                return Err(NodeIdError::RemoteServer(text.to_string()));
            }
        }
        if let Some(ns) = caps.name("ns") {
            if ns.as_str().parse::<u16>().ok() != Some(STANDARD_NAMESPACE_INDEX) {
                return Err(NodeIdError::ForeignNamespace(text.to_string()));
            }
        }
        if let Some(nsu) = caps.name("nsu") {
            if !is_standard_uri(nsu.as_str()) {
                return Err(NodeIdError::ForeignNamespace(text.to_string()));
            }
        }
        if &caps["kind"] != "i" {
            return Err(NodeIdError::NotNumeric(text.to_string()));
        }
        let value: u32 = caps["id"]
            .parse()
            .map_err(|_| NodeIdError::malformed(text, "invalid numeric identifier"))?;
        return StandardNodeId::try_from(value);
    }

    if SYMBOLIC_NAME.is_match(text) {
        return text.parse();
    }

    Err(NodeIdError::malformed(
        text,
        "expected a symbolic name, a number, or i=/ns=/nsu= text form",
    ))
}

/// Index of the standard namespace inside a server's `NamespaceArray`.
///
/// The standard namespace must occupy index 0; a server that puts it
/// anywhere else cannot share numeric identifiers with this table.
pub fn standard_namespace_index(namespace_array: &[String]) -> Result<u16, NodeIdError> {
    match namespace_array.iter().position(|uri| is_standard_uri(uri)) {
        Some(0) => Ok(STANDARD_NAMESPACE_INDEX),
        Some(index) => Err(NodeIdError::ForeignNamespace(format!(
            "{STANDARD_NAMESPACE_URI} at index {index}"
        ))),
        None => Err(NodeIdError::NamespaceNotFound(STANDARD_NAMESPACE_URI.to_string())),
    }
}

fn is_standard_uri(uri: &str) -> bool {
    uri.trim_end_matches('/') == STANDARD_NAMESPACE_URI.trim_end_matches('/')
}

impl StandardNodeId {
    /// `i=N`
    pub fn to_text(self) -> String {
        format!("i={}", self.value())
    }

    /// `nsu=http://opcfoundation.org/UA/;i=N`
    pub fn to_expanded_text(self) -> String {
        format!("nsu={STANDARD_NAMESPACE_URI};i={}", self.value())
    }

    pub fn to_node_id(self) -> NodeId {
        NodeId::new(STANDARD_NAMESPACE_INDEX, self.value())
    }

    pub fn to_expanded_node_id(self) -> ExpandedNodeId {
        ExpandedNodeId {
            node_id: self.to_node_id(),
            namespace_uri: UAString::from(STANDARD_NAMESPACE_URI),
            server_index: 0,
        }
    }
}

impl From<StandardNodeId> for NodeId {
    fn from(id: StandardNodeId) -> Self {
        id.to_node_id()
    }
}

impl From<StandardNodeId> for ExpandedNodeId {
    fn from(id: StandardNodeId) -> Self {
        id.to_expanded_node_id()
    }
}

impl TryFrom<&NodeId> for StandardNodeId {
    type Error = NodeIdError;

    fn try_from(node_id: &NodeId) -> Result<Self, Self::Error> {
        if node_id.namespace != STANDARD_NAMESPACE_INDEX {
            return Err(NodeIdError::ForeignNamespace(node_id.to_string()));
        }
        match &node_id.identifier {
            Identifier::Numeric(value) => StandardNodeId::try_from(*value),
            _ => Err(NodeIdError::NotNumeric(node_id.to_string())),
        }
    }
}

impl TryFrom<&ExpandedNodeId> for StandardNodeId {
    type Error = NodeIdError;

    fn try_from(expanded: &ExpandedNodeId) -> Result<Self, Self::Error> {
        if expanded.server_index != 0 {
            return Err(NodeIdError::RemoteServer(expanded.node_id.to_string()));
        }
        let uri: &str = expanded.namespace_uri.as_ref();
        if uri.is_empty() {
            return StandardNodeId::try_from(&expanded.node_id);
        }
        if !is_standard_uri(uri) {
            return Err(NodeIdError::ForeignNamespace(format!("nsu={uri};{}", expanded.node_id)));
        }
        // An explicit URI overrides whatever index the node id carries.
        match &expanded.node_id.identifier {
            Identifier::Numeric(value) => StandardNodeId::try_from(*value),
            _ => Err(NodeIdError::NotNumeric(expanded.node_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text_forms() {
        let expected = StandardNodeId::ServerType;
        for text in [
            "ServerType",
            "2004",
            "i=2004",
            "ns=0;i=2004",
            "nsu=http://opcfoundation.org/UA/;i=2004",
            "svr=0;nsu=http://opcfoundation.org/UA/;i=2004",
            "  i=2004  ",
        ] {
            assert_eq!(resolve(text), Ok(expected), "{text}");
        }
    }

    #[test]
    fn test_resolve_rejects_foreign_namespaces() {
        assert!(matches!(resolve("ns=2;i=2004"), Err(NodeIdError::ForeignNamespace(_))));
        assert!(matches!(
            resolve("nsu=urn:vendor:model;i=2004"),
            Err(NodeIdError::ForeignNamespace(_))
        ));
        assert!(matches!(
            resolve("svr=1;nsu=http://opcfoundation.org/UA/;i=2004"),
            Err(NodeIdError::RemoteServer(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_non_numeric_identifiers() {
        assert!(matches!(resolve("ns=0;s=Server"), Err(NodeIdError::NotNumeric(_))));
        assert!(matches!(
            resolve("g=09087e75-8e5e-499b-954f-f2a9603db28a"),
            Err(NodeIdError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_resolve_unknown_and_malformed() {
        assert_eq!(resolve("i=4000000000"), Err(NodeIdError::UnknownValue(4_000_000_000)));
        assert!(matches!(resolve("NoSuchType"), Err(NodeIdError::UnknownName(_))));
        assert!(matches!(resolve("i=abc"), Err(NodeIdError::Malformed { .. })));
        assert!(matches!(resolve("99999999999"), Err(NodeIdError::Malformed { .. })));
        assert!(matches!(resolve("not a node"), Err(NodeIdError::Malformed { .. })));
        assert!(matches!(resolve(""), Err(NodeIdError::Malformed { .. })));
    }

    #[test]
    fn test_text_rendering() {
        let id = StandardNodeId::NetworkAddressType;
        assert_eq!(id.to_text(), "i=21145");
        assert_eq!(id.to_expanded_text(), "nsu=http://opcfoundation.org/UA/;i=21145");
        assert_eq!(resolve(&id.to_expanded_text()), Ok(id));
    }

    #[test]
    fn test_opcua_conversions() {
        let node_id: NodeId = StandardNodeId::Server.into();
        assert_eq!(node_id, NodeId::new(0, 2253u32));
        assert_eq!(StandardNodeId::try_from(&node_id), Ok(StandardNodeId::Server));

        let foreign = NodeId::new(2, 2253u32);
        assert!(matches!(
            StandardNodeId::try_from(&foreign),
            Err(NodeIdError::ForeignNamespace(_))
        ));

        let string_id = NodeId::new(0, "Server");
        assert!(matches!(
            StandardNodeId::try_from(&string_id),
            Err(NodeIdError::NotNumeric(_))
        ));

        let expanded: ExpandedNodeId = StandardNodeId::DataSetOrderingType.into();
        assert_eq!(expanded.namespace_uri.as_ref(), STANDARD_NAMESPACE_URI);
        assert_eq!(
            StandardNodeId::try_from(&expanded),
            Ok(StandardNodeId::DataSetOrderingType)
        );
    }

    #[test]
    fn test_standard_namespace_index() {
        let array = vec![
            "http://opcfoundation.org/UA/".to_string(),
            "urn:server:local".to_string(),
        ];
        assert_eq!(standard_namespace_index(&array), Ok(0));

        let misplaced = vec![
            "urn:server:local".to_string(),
            "http://opcfoundation.org/UA/".to_string(),
        ];
        assert!(matches!(
            standard_namespace_index(&misplaced),
            Err(NodeIdError::ForeignNamespace(_))
        ));

        assert!(matches!(
            standard_namespace_index(&[]),
            Err(NodeIdError::NamespaceNotFound(_))
        ));
    }
}
