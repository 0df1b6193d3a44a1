//! Properties of the NodeId table as a whole.

use std::collections::HashSet;

use opcua_node_ids::{registry, verify, StandardNodeId};

#[test]
fn test_published_scenarios() {
    let cases = [
        ("PubSubConnectionType_Diagnostics", 19241),
        ("TrustListOutOfDateAlarmType", 19297),
        ("CertificateGroupType_CertificateExpired", 19450),
        ("DataSetOrderingType", 20408),
        ("NetworkAddressType", 21145),
    ];

    for (name, value) in cases {
        let id: StandardNodeId = name.parse().unwrap();
        assert_eq!(id.value(), value, "{name}");
        assert_eq!(StandardNodeId::from_value(value), Some(id), "{name}");
    }
}

#[test]
fn test_module_and_crate_paths_name_the_same_type() {
    let id: opcua_node_ids::node_ids::StandardNodeId = StandardNodeId::Server;
    assert_eq!(id.value(), 2253);
}

#[test]
fn test_well_known_core_nodes() {
    assert_eq!(StandardNodeId::Boolean.value(), 1);
    assert_eq!(StandardNodeId::References.value(), 31);
    assert_eq!(StandardNodeId::HasComponent.value(), 47);
    assert_eq!(StandardNodeId::ObjectsFolder.value(), 85);
    assert_eq!(StandardNodeId::ServerType.value(), 2004);
    assert_eq!(StandardNodeId::Server.value(), 2253);
    assert_eq!(StandardNodeId::Server_NamespaceArray.value(), 2255);
}

#[test]
fn test_names_and_ids_are_unique() {
    let names: HashSet<&str> = StandardNodeId::ALL.iter().map(|id| id.name()).collect();
    let values: HashSet<u32> = StandardNodeId::ALL.iter().map(|id| id.value()).collect();
    assert_eq!(names.len(), StandardNodeId::ALL.len());
    assert_eq!(values.len(), StandardNodeId::ALL.len());
}

#[test]
fn test_names_follow_the_standard_spelling() {
    for id in StandardNodeId::ALL {
        let name = id.name();
        assert!(name.starts_with(|c: char| c.is_ascii_uppercase()), "{name}");
        assert!(!name.contains("__"), "{name}");
        assert!(!name.ends_with('_'), "{name}");
    }
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|offset| {
            std::thread::spawn(move || {
                StandardNodeId::ALL
                    .iter()
                    .skip(offset)
                    .step_by(8)
                    .all(|id| registry::by_name(id.name()) == Some(*id))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_reference_types_are_present() {
    for name in [
        "HasPubSubConnection",
        "DataSetToWriter",
        "HasDataSetWriter",
        "HasWriterGroup",
        "HasDataSetReader",
        "HasReaderGroup",
        "AliasFor",
    ] {
        assert!(registry::by_name(name).is_some(), "{name}");
    }
}

#[test]
fn test_sdk_required_names_are_present() {
    let names = include_str!("data/sdk_required_names.txt");
    let missing = verify::check_required(names.lines());
    assert!(missing.is_empty(), "missing: {missing:?}");
}

#[test]
fn test_retired_spellings_resolve_to_current_names() {
    let renamed = [
        ("ProgramStateMachineType_ProgramDiagnostics", "ProgramStateMachineType_ProgramDiagnostic"),
        (
            "SubscriptionDiagnosticsType_EventQueueOverFlowCount",
            "SubscriptionDiagnosticsType_EventQueueOverflowCount",
        ),
        ("FileDirectoryType_Delete", "FileDirectoryType_DeleteFileSystemObject"),
    ];

    for (retired, current) in renamed {
        assert!(registry::by_name(retired).is_none(), "{retired}");
        assert!(registry::by_name(current).is_some(), "{current}");
    }
}

#[test]
fn test_pubsub_and_certificate_ranges_are_populated() {
    for name in [
        "PubSubDiagnosticsType_Counters",
        "Server_ResendData",
        "ServerType_RequestServerStateChange",
        "ConditionType_ConditionRefresh2",
        "CertificateGroupType_TrustList",
        "FileDirectoryType_CreateFile",
        "AccessLevelType",
    ] {
        assert!(registry::by_name(name).is_some(), "{name}");
    }

    // Dense block of PubSub, alarm and certificate-management nodes.
    assert!(registry::in_range(19188..=21687).len() > 2000);
}
