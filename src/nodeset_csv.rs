//! Reader and writer for the `NodeIds.csv` file the OPC Foundation publishes
//! alongside each release of the standard (`Name,Id,NodeClass` per line).

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::CsvError;
use crate::node_ids::StandardNodeId;

/// The NodeClass column of `NodeIds.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Object,
    Variable,
    Method,
    ObjectType,
    VariableType,
    DataType,
    ReferenceType,
    View,
}

impl NodeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeClass::Object => "Object",
            NodeClass::Variable => "Variable",
            NodeClass::Method => "Method",
            NodeClass::ObjectType => "ObjectType",
            NodeClass::VariableType => "VariableType",
            NodeClass::DataType => "DataType",
            NodeClass::ReferenceType => "ReferenceType",
            NodeClass::View => "View",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Object" => Ok(NodeClass::Object),
            "Variable" => Ok(NodeClass::Variable),
            "Method" => Ok(NodeClass::Method),
            "ObjectType" => Ok(NodeClass::ObjectType),
            "VariableType" => Ok(NodeClass::VariableType),
            "DataType" => Ok(NodeClass::DataType),
            "ReferenceType" => Ok(NodeClass::ReferenceType),
            "View" => Ok(NodeClass::View),
            other => Err(format!("unknown node class '{other}'")),
        }
    }
}

/// One line of `NodeIds.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEntry {
    pub name: String,
    pub value: u32,
    pub node_class: Option<NodeClass>,
}

/// Parse `NodeIds.csv` content.
///
/// Blank lines and lines starting with `#` are skipped. The NodeClass column
/// is optional so that files written by [`write_table`] read back cleanly.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<CsvEntry>, CsvError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let line = line.trim().trim_start_matches('\u{feff}');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(CsvError::line(
                line_number,
                format!("expected 2 or 3 fields, found {}", fields.len()),
            ));
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(CsvError::line(line_number, "empty name"));
        }

        let value = fields[1].parse::<u32>().map_err(|_| {
            CsvError::line(line_number, format!("invalid identifier '{}'", fields[1]))
        })?;

        let node_class = match fields.get(2) {
            Some(class) if !class.is_empty() => Some(
                class
                    .parse::<NodeClass>()
                    .map_err(|reason| CsvError::line(line_number, reason))?,
            ),
            _ => None,
        };

        entries.push(CsvEntry {
            name: name.to_string(),
            value,
            node_class,
        });
    }

    log::debug!("Parsed {} NodeIds.csv entries", entries.len());
    Ok(entries)
}

/// Write table entries in `NodeIds.csv` format.
///
/// The table does not record node classes, so entries are written as
/// `Name,Id` unless `classes` supplies one.
pub fn write_table<W, F>(mut writer: W, ids: &[StandardNodeId], classes: F) -> Result<(), CsvError>
where
    W: Write,
    F: Fn(StandardNodeId) -> Option<NodeClass>,
{
    for id in ids {
        match classes(*id) {
            Some(class) => writeln!(writer, "{},{},{}", id.name(), id.value(), class)?,
            None => writeln!(writer, "{},{}", id.name(), id.value())?,
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_published_format() {
        let content = "\
Boolean,1,DataType
# comment
PubSubConnectionType_Diagnostics,19241,Object

NetworkAddressType,21145,ObjectType
";
        let entries = parse(content.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name, "PubSubConnectionType_Diagnostics");
        assert_eq!(entries[1].value, 19241);
        assert_eq!(entries[1].node_class, Some(NodeClass::Object));
        assert_eq!(entries[2].node_class, Some(NodeClass::ObjectType));
    }

    #[test]
    fn test_parse_without_class_column() {
        let entries = parse("Server,2253\n".as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![CsvEntry {
                name: "Server".to_string(),
                value: 2253,
                node_class: None,
            }]
        );
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = parse("Boolean,1,DataType\nBroken,abc,Object\n".as_bytes()).unwrap_err();
        match err {
            CsvError::Line { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse("Boolean,1,Thing\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown node class"));

        let err = parse("Boolean\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 1"));
    }

    #[test]
    fn test_write_table() {
        let mut out = Vec::new();
        let ids = [StandardNodeId::Boolean, StandardNodeId::Server];
        write_table(&mut out, &ids, |id| {
            (id == StandardNodeId::Boolean).then_some(NodeClass::DataType)
        })
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Boolean,1,DataType\nServer,2253\n");
    }

    #[test]
    fn test_written_table_parses_back() {
        let mut out = Vec::new();
        write_table(&mut out, StandardNodeId::ALL, |_| None).unwrap();
        let entries = parse(out.as_slice()).unwrap();
        assert_eq!(entries.len(), StandardNodeId::ALL.len());
    }
}
