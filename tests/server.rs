//! Checks against a running OPC UA server.
//!
//! These tests need a server and are ignored by default:
//!
//! ```bash
//! OPCUA_TEST_ENDPOINT=opc.tcp://localhost:4840 cargo test --test server -- --ignored
//! ```

use opcua_node_ids::config::ToolConfig;
use opcua_node_ids::connection_manager::{ConnectionConfig, ConnectionManager};
use opcua_node_ids::{registry, server_check, StandardNodeId};

const DEFAULT_TEST_ENDPOINT: &str = "opc.tcp://localhost:4840";

fn test_endpoint() -> String {
    std::env::var("OPCUA_TEST_ENDPOINT").unwrap_or_else(|_| DEFAULT_TEST_ENDPOINT.to_string())
}

#[tokio::test]
#[ignore = "requires a running OPC UA server"]
async fn test_server_object_matches_table() {
    let config = ConnectionConfig::from_tool_config(&ToolConfig::default()).unwrap();
    let (_client, session) = ConnectionManager::connect_to_server(&test_endpoint(), &config)
        .await
        .unwrap();

    server_check::check_namespace_array(session.clone()).await.unwrap();

    let mut ids = vec![StandardNodeId::Server];
    ids.extend(registry::children(StandardNodeId::Server_ServerStatus));
    let report = server_check::check_browse_names(session.clone(), &ids, 16)
        .await
        .unwrap();

    ConnectionManager::disconnect(session).await;

    assert_eq!(report.checked, ids.len());
    assert!(report.unknown.is_empty(), "{:?}", report.unknown);
}
