//! The O-DF object hierarchy.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A nested O-DF object hierarchy.
///
/// A node is either a mapping of identifiers to child hierarchies or a flat
/// list of terminal identifiers. The variant is chosen by the caller at
/// construction time; there is no runtime shape inspection. Both variants
/// keep their entries in insertion order, and that order is the order the
/// serializer emits `<Object>` elements in.
///
/// The structure is acyclic by construction (child nodes are owned), which
/// matches its origin as literal configuration data rather than an object
/// graph with back-references.
///
/// Identifiers are emitted into XML verbatim, so callers are responsible for
/// supplying XML-safe text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hierarchy {
    /// An ordered collection of (identifier, child hierarchy) pairs.
    Mapping(Vec<(String, Hierarchy)>),
    /// An ordered sequence of terminal identifiers with no children.
    List(Vec<String>),
}

impl Hierarchy {
    /// Create a mapping node from (identifier, child) pairs.
    #[must_use]
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Mapping(entries.into_iter().map(|(id, child)| (id.into(), child)).collect())
    }

    /// Create a leaf-list node from terminal identifiers.
    #[must_use]
    pub fn list<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(ids.into_iter().map(Into::into).collect())
    }

    /// Whether this node has no direct entries.
    ///
    /// An empty node renders as an empty XML fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Mapping(entries) => entries.is_empty(),
            Self::List(ids) => ids.is_empty(),
        }
    }
}

impl Default for Hierarchy {
    /// The empty leaf list.
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Serialize for Hierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (id, child) in entries {
                    map.serialize_entry(id, child)?;
                }
                map.end()
            }
            Self::List(ids) => {
                let mut seq = serializer.serialize_seq(Some(ids.len()))?;
                for id in ids {
                    seq.serialize_element(id)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Hierarchy {
    /// Deserialize from a map (mapping node) or a sequence (leaf list).
    ///
    /// Any other input shape — a number, string, boolean, or null — is a
    /// type error. Map entries are consumed in document order, so key order
    /// in the source survives into the hierarchy.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HierarchyVisitor)
    }
}

struct HierarchyVisitor;

impl<'de> Visitor<'de> for HierarchyVisitor {
    type Value = Hierarchy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of identifiers to hierarchies or a sequence of identifiers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, Hierarchy>()? {
            entries.push(entry);
        }
        Ok(Hierarchy::Mapping(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ids = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(id) = access.next_element::<String>()? {
            ids.push(id);
        }
        Ok(Hierarchy::List(ids))
    }
}
