//! The namespace-zero NodeId table.
//!
//! Every standard node is a variant of [`StandardNodeId`]; the variant's
//! discriminant is its numeric identifier. Duplicate names or duplicate
//! identifiers are rejected by the compiler, so the table cannot drift into
//! an ambiguous state.

use std::fmt;
use std::str::FromStr;

use crate::error::NodeIdError;

/// Namespace index of the standard OPC UA namespace.
pub const STANDARD_NAMESPACE_INDEX: u16 = 0;

/// Namespace URI of the standard OPC UA namespace.
pub const STANDARD_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

macro_rules! standard_node_ids {
    ($($name:ident = $value:literal,)*) => {
        /// A well-known node in namespace zero.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum StandardNodeId {
            $($name = $value,)*
        }

        // Hand-written equivalent of `#[derive(Debug)]`, which exhausts
        // compiler memory on an enum of this size.
        impl ::std::fmt::Debug for StandardNodeId {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl StandardNodeId {
            /// All entries, ordered by numeric identifier.
            pub const ALL: &'static [StandardNodeId] = &[$(StandardNodeId::$name,)*];

            /// The symbolic name, spelled exactly as the standard spells it.
            pub const fn name(self) -> &'static str {
                match self {
                    $(StandardNodeId::$name => stringify!($name),)*
                }
            }
        }
    };
}

mod table;

pub use table::StandardNodeId;

impl StandardNodeId {
    /// The numeric identifier.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Always [`STANDARD_NAMESPACE_INDEX`].
    pub const fn namespace(self) -> u16 {
        STANDARD_NAMESPACE_INDEX
    }

    /// Reverse lookup (id → name).
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL
            .binary_search_by_key(&value, |id| id.value())
            .ok()
            .map(|index| Self::ALL[index])
    }

    /// Forward lookup (name → id).
    pub fn from_name(name: &str) -> Option<Self> {
        crate::registry::by_name(name)
    }
}

impl fmt::Display for StandardNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardNodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| NodeIdError::UnknownName(s.trim().to_string()))
    }
}

impl TryFrom<u32> for StandardNodeId {
    type Error = NodeIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(NodeIdError::UnknownValue(value))
    }
}

impl From<StandardNodeId> for u32 {
    fn from(id: StandardNodeId) -> Self {
        id.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_identifiers() {
        assert_eq!(StandardNodeId::PubSubConnectionType_Diagnostics.value(), 19241);
        assert_eq!(StandardNodeId::TrustListOutOfDateAlarmType.value(), 19297);
        assert_eq!(StandardNodeId::CertificateGroupType_CertificateExpired.value(), 19450);
        assert_eq!(StandardNodeId::DataSetOrderingType.value(), 20408);
        assert_eq!(StandardNodeId::NetworkAddressType.value(), 21145);
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        assert!(StandardNodeId::ALL
            .windows(2)
            .all(|pair| pair[0].value() < pair[1].value()));
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(StandardNodeId::from_value(2253), Some(StandardNodeId::Server));
        assert_eq!(StandardNodeId::from_value(0), None);
        assert!(matches!(
            StandardNodeId::try_from(u32::MAX),
            Err(NodeIdError::UnknownValue(u32::MAX))
        ));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        let id: StandardNodeId = "NetworkAddressType".parse().unwrap();
        assert_eq!(id, StandardNodeId::NetworkAddressType);
        assert_eq!(id.to_string(), "NetworkAddressType");
        assert!("NotAStandardNode".parse::<StandardNodeId>().is_err());
    }

    #[test]
    fn test_namespace_is_zero() {
        assert!(StandardNodeId::ALL.iter().all(|id| id.namespace() == 0));
    }
}
