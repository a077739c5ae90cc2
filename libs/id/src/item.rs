//! Item identifiers: the closed set of addressable item kinds.
//!
//! An item is either a node or a property attached to a node. The original
//! polymorphic hierarchy is modeled as a tagged variant so callers can
//! discriminate the two kinds without a type test.

use crate::{IdError, NodeId};

/// Identifies a property by its parent node and property name.
///
/// The literal form is `{node-id}/{name}`, e.g.
/// `f81d4fae-7dec-11d0-a765-00a0c91e6bf6/title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    parent: NodeId,
    name: String,
}

impl PropertyId {
    /// Creates a property identifier for a named property of the given node.
    ///
    /// The name must be non-empty.
    pub fn new(parent: NodeId, name: impl Into<String>) -> Result<Self, IdError> {
        let name = name.into();
        if name.is_empty() {
            return Err(IdError::EmptyName);
        }
        Ok(Self { parent, name })
    }

    /// Parses a property identifier from its `{node-id}/{name}` literal.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some((parent, name)) = s.split_once('/') else {
            return Err(IdError::MissingSeparator);
        };

        let parent = NodeId::parse(parent)?;
        Self::new(parent, name)
    }

    /// Returns the identifier of the node carrying the property.
    #[must_use]
    pub const fn parent_id(&self) -> NodeId {
        self.parent
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.parent, self.name)
    }
}

impl std::str::FromStr for PropertyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Identifies an addressable item: a node or a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// A node identifier.
    Node(NodeId),
    /// A property identifier.
    Property(PropertyId),
}

impl ItemId {
    /// Returns `true` if this identifier denotes a node rather than a
    /// property.
    #[must_use]
    pub const fn denotes_node(&self) -> bool {
        matches!(self, ItemId::Node(_))
    }

    /// Parses an item identifier from its literal form.
    ///
    /// A literal containing `/` is a property identifier; anything else is
    /// parsed as a node identifier.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.contains('/') {
            PropertyId::parse(s).map(ItemId::Property)
        } else {
            NodeId::parse(s).map(ItemId::Node)
        }
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Node(id) => write!(f, "{}", id),
            ItemId::Property(id) => write!(f, "{}", id),
        }
    }
}

impl std::str::FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NodeId> for ItemId {
    fn from(id: NodeId) -> Self {
        ItemId::Node(id)
    }
}

impl From<PropertyId> for ItemId {
    fn from(id: PropertyId) -> Self {
        ItemId::Property(id)
    }
}

impl serde::Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for PropertyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PropertyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
