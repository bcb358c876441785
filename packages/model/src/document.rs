use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// CSS-like style properties attached to a node.
///
/// Keys are open-ended (`fontSize`, `color`, `textAlign`, ...). An absent
/// key means inherit/default in presentation. Style updates are always a
/// shallow merge, never a replace.
pub type StyleMap = HashMap<String, String>;

/// Kind of payload a content item carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Editable text run
    Text,
    /// Image reference (value is a URL)
    Image,
    /// Pre-rendered list fragment
    List,
    /// Hyperlink (value is a URL)
    Link,
}

/// Leaf node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Opaque id, assigned at creation and never reassigned
    pub id: String,
    pub kind: ItemKind,
    /// Text content, or a URL for image/link items
    pub value: String,
    /// Descriptive field name (e.g. "Name"), never used for identity
    pub label: Option<String>,
    pub styles: StyleMap,
    /// Hidden items stay in the tree and are only excluded from rendering
    pub visible: bool,
}

impl ContentItem {
    /// Create a visible text item with no label and no styles
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Text,
            value: value.into(),
            label: None,
            styles: StyleMap::new(),
            visible: true,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }
}

/// Semantic role of a section; describes intent, not structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Custom,
}

/// Children of a section.
///
/// A leaf section holds content items directly; a list section holds one
/// nested entry section per repeated record (one job, one degree, ...).
/// The variant is the single source of truth for the section's shape — a
/// leaf section can never hold entries and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "items", rename_all = "lowercase")]
pub enum SectionItems {
    Leaf(Vec<ContentItem>),
    Entries(Vec<SectionNode>),
}

impl SectionItems {
    pub fn is_list(&self) -> bool {
        matches!(self, SectionItems::Entries(_))
    }

    pub fn len(&self) -> usize {
        match self {
            SectionItems::Leaf(items) => items.len(),
            SectionItems::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Composite node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Opaque id, unique across the whole document
    pub id: String,
    pub kind: SectionKind,
    /// Heading shown on the canvas; always present
    pub title: String,
    pub items: SectionItems,
    pub styles: StyleMap,
    pub visible: bool,
}

impl SectionNode {
    /// Create an empty leaf section
    pub fn leaf(id: impl Into<String>, kind: SectionKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            items: SectionItems::Leaf(Vec::new()),
            styles: StyleMap::new(),
            visible: true,
        }
    }

    /// Create an empty list section (repeated-entry container)
    pub fn list(id: impl Into<String>, kind: SectionKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            items: SectionItems::Entries(Vec::new()),
            styles: StyleMap::new(),
            visible: true,
        }
    }

    pub fn is_list(&self) -> bool {
        self.items.is_list()
    }

    pub fn leaf_items(&self) -> Option<&[ContentItem]> {
        match &self.items {
            SectionItems::Leaf(items) => Some(items),
            SectionItems::Entries(_) => None,
        }
    }

    pub fn leaf_items_mut(&mut self) -> Option<&mut Vec<ContentItem>> {
        match &mut self.items {
            SectionItems::Leaf(items) => Some(items),
            SectionItems::Entries(_) => None,
        }
    }

    pub fn entries(&self) -> Option<&[SectionNode]> {
        match &self.items {
            SectionItems::Leaf(_) => None,
            SectionItems::Entries(entries) => Some(entries),
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut Vec<SectionNode>> {
        match &mut self.items {
            SectionItems::Leaf(_) => None,
            SectionItems::Entries(entries) => Some(entries),
        }
    }

    pub fn entry(&self, entry_id: &str) -> Option<&SectionNode> {
        self.entries()?.iter().find(|e| e.id == entry_id)
    }

    pub fn entry_mut(&mut self, entry_id: &str) -> Option<&mut SectionNode> {
        self.entries_mut()?.iter_mut().find(|e| e.id == entry_id)
    }
}

/// Root aggregate: an ordered sequence of sections.
///
/// Order is significant — it drives render order and is mutable via
/// reorder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<SectionNode>,
}

impl Document {
    pub fn new(sections: Vec<SectionNode>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn find_section(&self, section_id: &str) -> Option<&SectionNode> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_section_mut(&mut self, section_id: &str) -> Option<&mut SectionNode> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    /// Resolve the node path shared by every item-level operation.
    ///
    /// With `entry_id` set, the lookup descends into a list section's
    /// nested entry before searching for the item; without it, the item is
    /// searched in the section's own leaf items. Any miss along the path
    /// resolves to `None`.
    pub fn content_item_mut(
        &mut self,
        section_id: &str,
        entry_id: Option<&str>,
        item_id: &str,
    ) -> Option<&mut ContentItem> {
        let section = self.find_section_mut(section_id)?;
        let holder = match entry_id {
            Some(entry_id) => section.entry_mut(entry_id)?,
            None => section,
        };
        holder
            .leaf_items_mut()?
            .iter_mut()
            .find(|i| i.id == item_id)
    }

    /// Whether any node in the tree carries the given id
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections.iter().any(|s| section_contains_id(s, id))
    }

    /// Collect every id in the tree, in document order
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for section in &self.sections {
            collect_section_ids(section, &mut ids);
        }
        ids
    }
}

fn section_contains_id(section: &SectionNode, id: &str) -> bool {
    if section.id == id {
        return true;
    }
    match &section.items {
        SectionItems::Leaf(items) => items.iter().any(|i| i.id == id),
        SectionItems::Entries(entries) => entries.iter().any(|e| section_contains_id(e, id)),
    }
}

fn collect_section_ids<'a>(section: &'a SectionNode, ids: &mut Vec<&'a str>) {
    ids.push(&section.id);
    match &section.items {
        SectionItems::Leaf(items) => {
            for item in items {
                ids.push(&item.id);
            }
        }
        SectionItems::Entries(entries) => {
            for entry in entries {
                collect_section_ids(entry, ids);
            }
        }
    }
}
