use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a document item. Numeric and textual ids are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Identity-relevant view of an editable document.
pub trait Snapshot {
    fn title(&self) -> &str;

    fn description(&self) -> Option<&str>;

    /// Item identifiers in document order. Item content is not part of the
    /// snapshot.
    fn item_ids(&self) -> impl Iterator<Item = &ItemId>;
}

/// Owned, normalized copy of a document's identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentSnapshot {
    title: String,
    description: String,
    item_ids: Vec<ItemId>,
}

impl DocumentSnapshot {
    pub fn capture(doc: &impl Snapshot) -> Self {
        Self {
            title: doc.title().to_string(),
            description: doc.description().unwrap_or_default().to_string(),
            item_ids: doc.item_ids().cloned().collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    /// Field-wise comparison against a live document without copying it.
    pub fn matches(&self, doc: &impl Snapshot) -> bool {
        self.title == doc.title()
            && self.description == doc.description().unwrap_or_default()
            && self.item_ids.iter().eq(doc.item_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentSnapshot, ItemId};

    #[test]
    fn item_ids_deserialize_from_numbers_and_strings() {
        let ids: Vec<ItemId> =
            serde_json::from_str(r#"[1, "song-2"]"#).expect("ids should parse");
        assert_eq!(ids, vec![ItemId::from(1), ItemId::from("song-2")]);
        assert_eq!(ids[0].to_string(), "1");
        assert_eq!(ids[1].to_string(), "song-2");
    }

    #[test]
    fn default_snapshot_is_empty() {
        let snapshot = DocumentSnapshot::default();
        assert!(snapshot.title().is_empty());
        assert!(snapshot.description().is_empty());
        assert!(snapshot.item_ids().is_empty());
    }
}
