use thiserror::Error;

/// Errors raised while resolving a NodeId against the standard table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeIdError {
    #[error("unknown standard node name: {0}")]
    UnknownName(String),

    #[error("no standard node has identifier i={0}")]
    UnknownValue(u32),

    #[error("node id '{0}' is not in the standard namespace")]
    ForeignNamespace(String),

    #[error("node id '{0}' refers to a remote server")]
    RemoteServer(String),

    #[error("node id '{0}' does not have a numeric identifier")]
    NotNumeric(String),

    #[error("malformed node id '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("namespace array does not contain {0}")]
    NamespaceNotFound(String),
}

impl NodeIdError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while reading a `NodeIds.csv` file.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: {reason}")]
    Line { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvError {
    pub fn line(line: usize, reason: impl Into<String>) -> Self {
        Self::Line {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading or validating the tool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
