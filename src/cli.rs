//! Command-line interface for querying and checking the NodeId table.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use regex::Regex;

use crate::config::ToolConfig;
use crate::connection_manager::{ConnectionConfig, ConnectionManager};
use crate::node_ids::StandardNodeId;
use crate::{node_id, nodeset_csv, registry, server_check, verify};

#[derive(Parser, Debug)]
#[command(
    name = "ua-node-ids",
    version,
    about = "Query the OPC UA namespace-zero NodeId table and check it against published sources",
    propagate_version = true
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "UA_NODE_IDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the identifier of a symbolic name
    Lookup { name: String },

    /// Resolve a name, number, i=/ns=/nsu= NodeId to its table entry
    Resolve { node_id: String },

    /// List the direct children of an entry by naming convention
    Children { name: String },

    /// List entries whose name matches a regular expression
    Search { pattern: String },

    /// List entries, optionally filtered by id range and name prefix
    List(ListArgs),

    /// Write the table in NodeIds.csv format
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare the table with a published NodeIds.csv
    #[command(name = "verify-csv")]
    VerifyCsv {
        path: PathBuf,

        /// Also fail when the CSV and the table do not hold the same names
        #[arg(long)]
        exact: bool,
    },

    /// Check names required by consuming code, one per line
    #[command(name = "check-required")]
    CheckRequired { path: PathBuf },

    /// Compare the table with the address space of a running server
    #[command(name = "verify-server")]
    VerifyServer(VerifyServerArgs),

    /// Show the number of entries and the id range
    Stats,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Lowest numeric id (inclusive)
    #[arg(long)]
    pub from: Option<u32>,

    /// Highest numeric id (inclusive)
    #[arg(long)]
    pub to: Option<u32>,

    /// Only names starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VerifyServerArgs {
    /// Server URL (overrides the configuration file)
    #[arg(long)]
    pub url: Option<String>,

    /// Only check entries whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Fail when the server lacks an entry or names it differently
    #[arg(long)]
    pub strict: bool,
}

/// Process exit status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Read the configuration file, apply command-line overrides, then validate.
pub fn load_config(cli: &Cli) -> Result<ToolConfig> {
    let mut config = match &cli.config {
        Some(path) => ToolConfig::read(path)?,
        None => ToolConfig::default(),
    };
    if let Commands::VerifyServer(VerifyServerArgs { url: Some(url), .. }) = &cli.command {
        config.server_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Lookup { name } => {
            let id: StandardNodeId = name.parse()?;
            print_entry(out, id)?;
        }
        Commands::Resolve { node_id } => {
            let id = node_id::resolve(&node_id)?;
            print_entry(out, id)?;
        }
        Commands::Children { name } => {
            let id: StandardNodeId = name.parse()?;
            print_list(out, &registry::children(id))?;
        }
        Commands::Search { pattern } => {
            let pattern = Regex::new(&pattern).with_context(|| format!("invalid pattern '{pattern}'"))?;
            print_list(out, &registry::search(&pattern))?;
        }
        Commands::List(args) => print_list(out, &list(&args))?,
        Commands::Export { output } => match output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                nodeset_csv::write_table(BufWriter::new(file), StandardNodeId::ALL, |_| None)?;
                log::info!("Wrote {} entries to {}", StandardNodeId::ALL.len(), path.display());
            }
            None => nodeset_csv::write_table(&mut *out, StandardNodeId::ALL, |_| None)?,
        },
        Commands::VerifyCsv { path, exact } => return verify_csv(out, &path, exact),
        Commands::CheckRequired { path } => return check_required(out, &path),
        Commands::VerifyServer(args) => return verify_server(out, &config, &args).await,
        Commands::Stats => {
            let stats = registry::stats();
            writeln!(out, "entries: {}", stats.entries)?;
            writeln!(out, "ids: {}..={}", stats.min_value, stats.max_value)?;
        }
    }

    Ok(Outcome::Success)
}

pub fn list(args: &ListArgs) -> Vec<StandardNodeId> {
    let from = args.from.unwrap_or(0);
    let to = args.to.unwrap_or(u32::MAX);
    registry::in_range(from..=to)
        .iter()
        .copied()
        .filter(|id| {
            args.prefix
                .as_deref()
                .map_or(true, |prefix| id.name().starts_with(prefix))
        })
        .collect()
}

fn print_entry<W: Write>(out: &mut W, id: StandardNodeId) -> Result<()> {
    writeln!(out, "{} = {}", id.name(), id.value())?;
    writeln!(out, "  node id:  {}", id.to_text())?;
    writeln!(out, "  expanded: {}", id.to_expanded_text())?;
    if let Some(parent) = registry::parent(id) {
        writeln!(out, "  parent:   {} ({})", parent, parent.value())?;
    }
    Ok(())
}

fn print_list<W: Write>(out: &mut W, ids: &[StandardNodeId]) -> Result<()> {
    for id in ids {
        writeln!(out, "{:>6}  {}", id.value(), id.name())?;
    }
    Ok(())
}

fn verify_csv<W: Write>(out: &mut W, path: &Path, exact: bool) -> Result<Outcome> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let entries = nodeset_csv::parse(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", path.display()))?;
    let report = verify::verify_against(&entries);

    for mismatch in &report.mismatched {
        writeln!(
            out,
            "mismatch: {} is {} in the table, {} in the CSV",
            mismatch.id,
            mismatch.id.value(),
            mismatch.csv_value
        )?;
    }
    for name in &report.csv_duplicate_names {
        writeln!(out, "duplicate name in CSV: {name}")?;
    }
    for value in &report.csv_duplicate_ids {
        writeln!(out, "duplicate id in CSV: {value}")?;
    }
    if exact {
        for entry in &report.missing {
            writeln!(out, "missing: {},{}", entry.name, entry.value)?;
        }
        for id in &report.extra {
            writeln!(out, "extra: {},{}", id.name(), id.value())?;
        }
    }
    writeln!(
        out,
        "compared {} entries: {} mismatched, {} missing from the table, {} not in the CSV",
        report.compared,
        report.mismatched.len(),
        report.missing.len(),
        report.extra.len()
    )?;

    let ok = if exact {
        report.is_exact()
    } else {
        report.is_consistent()
    };
    Ok(if ok { Outcome::Success } else { Outcome::Failed })
}

fn check_required<W: Write>(out: &mut W, path: &Path) -> Result<Outcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let missing = verify::check_required(content.lines());

    for name in &missing {
        writeln!(out, "missing: {name}")?;
    }
    Ok(if missing.is_empty() {
        Outcome::Success
    } else {
        Outcome::Failed
    })
}

async fn verify_server<W: Write>(
    out: &mut W,
    config: &ToolConfig,
    args: &VerifyServerArgs,
) -> Result<Outcome> {
    let server_url = &config.server_url;

    let ids = match &args.prefix {
        Some(prefix) => registry::with_prefix(prefix),
        None => StandardNodeId::ALL.to_vec(),
    };
    if ids.is_empty() {
        return Err(anyhow!("no entries selected"));
    }

    let connection = ConnectionConfig::from_tool_config(config)?;
    let (_client, session) = ConnectionManager::connect_to_server(server_url, &connection).await?;

    let result = async {
        server_check::check_namespace_array(session.clone()).await?;
        server_check::check_browse_names(session.clone(), &ids, config.batch_size).await
    }
    .await;
    ConnectionManager::disconnect(session).await;
    let report = result?;

    for unknown in &report.unknown {
        writeln!(out, "unknown: {} ({}): {}", unknown.id, unknown.id.value(), unknown.status)?;
    }
    for renamed in &report.renamed {
        writeln!(
            out,
            "browse name: {} ({}) is '{}' on the server",
            renamed.id,
            renamed.id.value(),
            renamed.browse_name
        )?;
    }
    writeln!(
        out,
        "checked {} entries against {}: {} unknown, {} renamed",
        report.checked,
        server_url,
        report.unknown.len(),
        report.renamed.len()
    )?;

    Ok(if args.strict && !report.is_clean() {
        Outcome::Failed
    } else {
        Outcome::Success
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ua-node-ids").chain(args.iter().copied())).unwrap()
    }

    async fn run_to_string(args: &[&str]) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(cli(args), &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_lookup() {
        let (outcome, text) = run_to_string(&["lookup", "CertificateGroupType_CertificateExpired"]).await;
        assert_eq!(outcome, Outcome::Success);
        assert!(text.starts_with("CertificateGroupType_CertificateExpired = 19450"));
        assert!(text.contains("nsu=http://opcfoundation.org/UA/;i=19450"));
    }

    #[tokio::test]
    async fn test_resolve() {
        let (_, text) = run_to_string(&["resolve", "ns=0;i=20408"]).await;
        assert!(text.starts_with("DataSetOrderingType = 20408"));
    }

    #[tokio::test]
    async fn test_unknown_name_is_an_error() {
        let mut out = Vec::new();
        assert!(run(cli(&["lookup", "NotANode"]), &mut out).await.is_err());
    }

    #[tokio::test]
    async fn test_stats() {
        let (_, text) = run_to_string(&["stats"]).await;
        assert!(text.contains(&format!("entries: {}", StandardNodeId::ALL.len())));
    }

    #[test]
    fn test_list_filters() {
        let ids = list(&ListArgs {
            from: Some(21145),
            to: Some(21147),
            prefix: Some("NetworkAddress".to_string()),
        });
        assert!(ids.contains(&StandardNodeId::NetworkAddressType));
        assert!(ids.iter().all(|id| id.name().starts_with("NetworkAddress")));
        assert!(ids.iter().all(|id| (21145..=21147).contains(&id.value())));
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_url_flag_overrides_config_file() {
        let file = config_file("server_url = \"opc.tcp://plc.local:4840\"\n");
        let path = file.path().to_str().unwrap();

        let config = load_config(&cli(&["--config", path, "verify-server"])).unwrap();
        assert_eq!(config.server_url, "opc.tcp://plc.local:4840");

        let config = load_config(&cli(&[
            "--config",
            path,
            "verify-server",
            "--url",
            "opc.tcp://other:4841",
        ]))
        .unwrap();
        assert_eq!(config.server_url, "opc.tcp://other:4841");
    }

    #[test]
    fn test_url_flag_replaces_invalid_config_url() {
        let file = config_file("server_url = \"http://plc.local\"\n");
        let path = file.path().to_str().unwrap();

        assert!(load_config(&cli(&["--config", path, "verify-server"])).is_err());
        let config = load_config(&cli(&[
            "--config",
            path,
            "verify-server",
            "--url",
            "opc.tcp://plc.local:4840",
        ]))
        .unwrap();
        assert_eq!(config.server_url, "opc.tcp://plc.local:4840");

        let err = load_config(&cli(&["verify-server", "--url", "http://plc.local"])).unwrap_err();
        assert!(err.to_string().contains("server_url"));
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(cli(&["-vv", "stats"]).verbose, 2);
    }
}
