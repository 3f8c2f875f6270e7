use serde::{Deserialize, Serialize};

/// The "many" side of a to-many relationship, e.g. the spaces a service
/// instance is shared with.
///
/// Order is preserved as returned by the API and is significant for equality,
/// even though the relationship itself is unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipList {
    pub guids: Vec<String>,
}

impl RelationshipList {
    /// Creates a relationship list from any sequence of GUIDs.
    pub fn new<I, S>(guids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guids: guids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.guids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.guids.len()
    }

    pub fn contains(&self, guid: &str) -> bool {
        self.guids.iter().any(|g| g == guid)
    }
}
