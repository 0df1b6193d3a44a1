//! End-to-end checks of the CLI against NodeIds.csv files on disk.

use std::io::Write;

use clap::Parser;
use opcua_node_ids::cli::{self, Cli, Outcome};
use opcua_node_ids::{nodeset_csv, StandardNodeId};
use tempfile::NamedTempFile;

async fn run(args: &[&str]) -> (Outcome, String) {
    let cli = Cli::try_parse_from(std::iter::once("ua-node-ids").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let outcome = cli::run(cli, &mut out).await.unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_consistent_subset_passes() {
    let file = csv_file(
        "PubSubConnectionType_Diagnostics,19241,Object\n\
         TrustListOutOfDateAlarmType,19297,ObjectType\n\
         CertificateGroupType_CertificateExpired,19450,Object\n\
         DataSetOrderingType,20408,DataType\n\
         NetworkAddressType,21145,ObjectType\n",
    );
    let path = file.path().to_str().unwrap();

    let (outcome, text) = run(&["verify-csv", path]).await;
    assert_eq!(outcome, Outcome::Success);
    assert!(text.contains("compared 5 entries: 0 mismatched"));

    let (outcome, _) = run(&["verify-csv", "--exact", path]).await;
    assert_eq!(outcome, Outcome::Failed);
}

#[tokio::test]
async fn test_renumbered_entry_fails() {
    let file = csv_file("DataSetOrderingType,20409,DataType\n");
    let (outcome, text) = run(&["verify-csv", file.path().to_str().unwrap()]).await;
    assert_eq!(outcome, Outcome::Failed);
    assert!(text.contains("mismatch: DataSetOrderingType is 20408 in the table, 20409 in the CSV"));
}

#[tokio::test]
async fn test_export_round_trips_exactly() {
    let out = NamedTempFile::new().unwrap();
    let path = out.path().to_str().unwrap().to_string();

    let (outcome, _) = run(&["export", "--output", &path]).await;
    assert_eq!(outcome, Outcome::Success);

    let content = std::fs::read_to_string(&path).unwrap();
    let entries = nodeset_csv::parse(content.as_bytes()).unwrap();
    assert_eq!(entries.len(), StandardNodeId::ALL.len());

    let (outcome, _) = run(&["verify-csv", "--exact", &path]).await;
    assert_eq!(outcome, Outcome::Success);
}

#[tokio::test]
async fn test_check_required() {
    let file = csv_file("Server\nNetworkAddressType\nSomeVendorType\n");
    let (outcome, text) = run(&["check-required", file.path().to_str().unwrap()]).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(text.trim(), "missing: SomeVendorType");
}

#[tokio::test]
async fn test_config_file_is_loaded() {
    let config = csv_file("server_url = \"opc.tcp://plc.local:4840\"\nbatch_size = 0\n");
    let cli = Cli::try_parse_from([
        "ua-node-ids",
        "--config",
        config.path().to_str().unwrap(),
        "stats",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = cli::run(cli, &mut out).await.unwrap_err();
    assert!(err.to_string().contains("batch_size"));
}
