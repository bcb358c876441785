use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Identifies the node currently active on the canvas.
///
/// At most one node is selected at a time; replacing the selection clears
/// the previous one. The variant encodes which path fields are meaningful,
/// so a selection can never claim to target an item without naming one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum Selection {
    /// A top-level section
    Section { section_id: String },
    /// One nested entry of a list section
    Entry {
        section_id: String,
        entry_id: String,
    },
    /// A leaf content item, optionally inside a nested entry
    Item {
        section_id: String,
        entry_id: Option<String>,
        item_id: String,
    },
}

impl Selection {
    pub fn section(section_id: impl Into<String>) -> Self {
        Selection::Section {
            section_id: section_id.into(),
        }
    }

    pub fn entry(section_id: impl Into<String>, entry_id: impl Into<String>) -> Self {
        Selection::Entry {
            section_id: section_id.into(),
            entry_id: entry_id.into(),
        }
    }

    pub fn item(section_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Selection::Item {
            section_id: section_id.into(),
            entry_id: None,
            item_id: item_id.into(),
        }
    }

    pub fn entry_item(
        section_id: impl Into<String>,
        entry_id: impl Into<String>,
        item_id: impl Into<String>,
    ) -> Self {
        Selection::Item {
            section_id: section_id.into(),
            entry_id: Some(entry_id.into()),
            item_id: item_id.into(),
        }
    }

    pub fn section_id(&self) -> &str {
        match self {
            Selection::Section { section_id }
            | Selection::Entry { section_id, .. }
            | Selection::Item { section_id, .. } => section_id,
        }
    }

    pub fn entry_id(&self) -> Option<&str> {
        match self {
            Selection::Section { .. } => None,
            Selection::Entry { entry_id, .. } => Some(entry_id),
            Selection::Item { entry_id, .. } => entry_id.as_deref(),
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            Selection::Item { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// Whether every id on the selection path resolves in `doc`.
    ///
    /// The whole path is checked, not just id existence: an entry id must
    /// name an entry of the named section, an item id must name an item
    /// inside the named holder.
    pub fn resolves_in(&self, doc: &Document) -> bool {
        match self {
            Selection::Section { section_id } => doc.find_section(section_id).is_some(),
            Selection::Entry {
                section_id,
                entry_id,
            } => doc
                .find_section(section_id)
                .and_then(|s| s.entry(entry_id))
                .is_some(),
            Selection::Item {
                section_id,
                entry_id,
                item_id,
            } => {
                let Some(section) = doc.find_section(section_id) else {
                    return false;
                };
                let holder = match entry_id {
                    Some(entry_id) => match section.entry(entry_id) {
                        Some(entry) => entry,
                        None => return false,
                    },
                    None => section,
                };
                holder
                    .leaf_items()
                    .is_some_and(|items| items.iter().any(|i| i.id == *item_id))
            }
        }
    }

    /// Whether the selection path references the given node id
    pub fn references(&self, id: &str) -> bool {
        self.section_id() == id
            || self.entry_id() == Some(id)
            || self.item_id() == Some(id)
    }
}
