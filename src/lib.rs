//! The namespace-zero NodeId table of the OPC UA Information Model.
//!
//! [`StandardNodeId`] binds each standard symbolic name to its numeric
//! identifier. The rest of the crate resolves the textual and stack NodeId
//! forms to table entries and checks the table against published
//! `NodeIds.csv` files and live servers.

pub mod cli;
pub mod config;
pub mod connection_manager;
pub mod error;
pub mod logging;
pub mod node_id;
pub mod node_ids;
pub mod nodeset_csv;
pub mod registry;
pub mod server_check;
pub mod verify;

pub use error::{ConfigError, CsvError, NodeIdError};
pub use node_ids::{StandardNodeId, STANDARD_NAMESPACE_INDEX, STANDARD_NAMESPACE_URI};
