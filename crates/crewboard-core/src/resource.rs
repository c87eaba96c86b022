//! Resources (technicians) that own rows on the board.

use serde::{Deserialize, Serialize};

/// Identifier of a resource, as carried by the CRM feed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A technician row on the board.
///
/// The layout engine keeps rows in the order the caller supplies them;
/// callers wanting the canonical roster order apply [`sort_resources`]
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    /// Display name for the row header.
    pub name: String,
    /// Crew or depot grouping key; empty when the roster is flat.
    #[serde(default)]
    pub group_key: String,
}

impl Resource {
    /// Create a resource with an empty group key.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group_key: String::new(),
        }
    }

    /// Assign a grouping key.
    #[must_use]
    pub fn with_group(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = group_key.into();
        self
    }
}

/// Sort a roster into canonical display order: group key, then name,
/// then id. Stable, so fully tied entries keep their feed order.
pub fn sort_resources(resources: &mut [Resource]) {
    resources.sort_by(|a, b| {
        a.group_key
            .cmp(&b.group_key)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
}
