//! # Document Mutations
//!
//! Semantic operations over the CV document tree.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one user gesture (type into
//!    a field, drag a section, click "add entry"), not a generic patch
//! 2. **Uniform**: every write is "locate by id path, then replace or
//!    merge a bounded piece of data"
//! 3. **Total**: applying never fails — a missing id or a wrong-shape
//!    target is a no-op, because a miss means the gesture raced a change
//!    that already removed its target
//! 4. **Merge, not replace, for styles**: style updates only touch the
//!    keys they mention
//!
//! The id path descends top-level section → optional nested entry → leaf
//! item; [`vitae_model::Document::content_item_mut`] is the single
//! resolver every item-level operation goes through.

use crate::templates;
use serde::{Deserialize, Serialize};
use vitae_model::{Document, IdGenerator, SectionKind, SectionNode, StyleMap};

/// Semantic mutations issued by canvas gestures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Replace the document wholesale; the load path for imports and
    /// resets
    SetSections { sections: Vec<SectionNode> },

    /// Merge properties into a section's styles
    UpdateSectionStyles {
        section_id: String,
        styles: StyleMap,
    },

    /// Merge properties into a content item's styles
    UpdateItemStyles {
        section_id: String,
        entry_id: Option<String>,
        item_id: String,
        styles: StyleMap,
    },

    /// Replace a content item's value; styles are untouched
    UpdateContent {
        section_id: String,
        entry_id: Option<String>,
        item_id: String,
        value: String,
    },

    /// Rename a section
    UpdateSectionTitle { section_id: String, title: String },

    /// Replace the section order. The canvas computes the new order from
    /// the drag gesture; the store does not validate it is a permutation.
    ReorderSections { sections: Vec<SectionNode> },

    /// Append a new empty section from the template for `kind`
    AddSection { kind: SectionKind },

    /// Remove a section outright
    RemoveSection { section_id: String },

    /// Append a templated entry to a list section
    AddEntry { section_id: String },

    /// Remove one entry from a list section
    RemoveEntry {
        section_id: String,
        entry_id: String,
    },

    /// Show or hide a section; hidden nodes stay in the tree
    SetSectionVisibility { section_id: String, visible: bool },

    /// Show or hide a content item
    SetItemVisibility {
        section_id: String,
        entry_id: Option<String>,
        item_id: String,
        visible: bool,
    },
}

/// Result of applying a mutation through the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOutcome {
    /// The document changed; `version` identifies the new snapshot
    Applied { version: u64 },
    /// The mutation referenced a missing path or a wrong-shape target;
    /// state is unchanged
    Noop,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }
}

impl Mutation {
    /// Apply to a document, drawing fresh ids from `ids` for creation
    /// operations. Returns whether anything changed.
    pub(crate) fn apply(&self, doc: &mut Document, ids: &mut IdGenerator) -> bool {
        match self {
            Mutation::SetSections { sections } => {
                doc.sections = sections.clone();
                true
            }

            Mutation::UpdateSectionStyles { section_id, styles } => {
                match doc.find_section_mut(section_id) {
                    Some(section) => {
                        section.styles.extend(styles.clone());
                        true
                    }
                    None => false,
                }
            }

            Mutation::UpdateItemStyles {
                section_id,
                entry_id,
                item_id,
                styles,
            } => match doc.content_item_mut(section_id, entry_id.as_deref(), item_id) {
                Some(item) => {
                    item.styles.extend(styles.clone());
                    true
                }
                None => false,
            },

            Mutation::UpdateContent {
                section_id,
                entry_id,
                item_id,
                value,
            } => match doc.content_item_mut(section_id, entry_id.as_deref(), item_id) {
                Some(item) => {
                    item.value = value.clone();
                    true
                }
                None => false,
            },

            Mutation::UpdateSectionTitle { section_id, title } => {
                match doc.find_section_mut(section_id) {
                    Some(section) => {
                        section.title = title.clone();
                        true
                    }
                    None => false,
                }
            }

            Mutation::ReorderSections { sections } => {
                doc.sections = sections.clone();
                true
            }

            Mutation::AddSection { kind } => {
                doc.sections.push(templates::new_section(*kind, ids));
                true
            }

            Mutation::RemoveSection { section_id } => {
                let before = doc.sections.len();
                doc.sections.retain(|s| s.id != *section_id);
                doc.sections.len() != before
            }

            Mutation::AddEntry { section_id } => {
                let entries = doc
                    .find_section_mut(section_id)
                    .and_then(SectionNode::entries_mut);
                match entries {
                    Some(entries) => {
                        entries.push(templates::new_entry(ids));
                        true
                    }
                    None => false,
                }
            }

            Mutation::RemoveEntry {
                section_id,
                entry_id,
            } => {
                let entries = doc
                    .find_section_mut(section_id)
                    .and_then(SectionNode::entries_mut);
                match entries {
                    Some(entries) => {
                        let before = entries.len();
                        entries.retain(|e| e.id != *entry_id);
                        entries.len() != before
                    }
                    None => false,
                }
            }

            Mutation::SetSectionVisibility {
                section_id,
                visible,
            } => match doc.find_section_mut(section_id) {
                Some(section) => {
                    section.visible = *visible;
                    true
                }
                None => false,
            },

            Mutation::SetItemVisibility {
                section_id,
                entry_id,
                item_id,
                visible,
            } => match doc.content_item_mut(section_id, entry_id.as_deref(), item_id) {
                Some(item) => {
                    item.visible = *visible;
                    true
                }
                None => false,
            },
        }
    }

    /// Operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetSections { .. } => "setSections",
            Mutation::UpdateSectionStyles { .. } => "updateSectionStyles",
            Mutation::UpdateItemStyles { .. } => "updateItemStyles",
            Mutation::UpdateContent { .. } => "updateContent",
            Mutation::UpdateSectionTitle { .. } => "updateSectionTitle",
            Mutation::ReorderSections { .. } => "reorderSections",
            Mutation::AddSection { .. } => "addSection",
            Mutation::RemoveSection { .. } => "removeSection",
            Mutation::AddEntry { .. } => "addEntry",
            Mutation::RemoveEntry { .. } => "removeEntry",
            Mutation::SetSectionVisibility { .. } => "setSectionVisibility",
            Mutation::SetItemVisibility { .. } => "setItemVisibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_model::{ContentItem, SectionItems};

    fn styles(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn doc() -> Document {
        let mut about = SectionNode::leaf("about", SectionKind::Summary, "About");
        about.styles = styles(&[("color", "red"), ("fontSize", "12px")]);
        about.items = SectionItems::Leaf(vec![ContentItem::text("blurb", "Engineer")]);

        let work = SectionNode::list("work", SectionKind::Experience, "Experience");

        Document::new(vec![about, work])
    }

    #[test]
    fn test_style_merge_preserves_unmentioned_keys() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        let changed = Mutation::UpdateSectionStyles {
            section_id: "about".into(),
            styles: styles(&[("color", "blue")]),
        }
        .apply(&mut d, &mut ids);

        assert!(changed);
        let section = d.find_section("about").unwrap();
        assert_eq!(section.styles.get("color").unwrap(), "blue");
        assert_eq!(section.styles.get("fontSize").unwrap(), "12px");
    }

    #[test]
    fn test_update_content_leaves_styles_alone() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        Mutation::UpdateItemStyles {
            section_id: "about".into(),
            entry_id: None,
            item_id: "blurb".into(),
            styles: styles(&[("fontStyle", "italic")]),
        }
        .apply(&mut d, &mut ids);

        Mutation::UpdateContent {
            section_id: "about".into(),
            entry_id: None,
            item_id: "blurb".into(),
            value: "Staff Engineer".into(),
        }
        .apply(&mut d, &mut ids);

        let item = d.content_item_mut("about", None, "blurb").unwrap();
        assert_eq!(item.value, "Staff Engineer");
        assert_eq!(item.styles.get("fontStyle").unwrap(), "italic");
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");
        let before = d.clone();

        let mutations = [
            Mutation::UpdateSectionStyles {
                section_id: "ghost".into(),
                styles: styles(&[("color", "blue")]),
            },
            Mutation::UpdateItemStyles {
                section_id: "ghost".into(),
                entry_id: None,
                item_id: "ghost".into(),
                styles: styles(&[("color", "blue")]),
            },
            Mutation::UpdateContent {
                section_id: "about".into(),
                entry_id: None,
                item_id: "ghost".into(),
                value: "x".into(),
            },
            Mutation::UpdateSectionTitle {
                section_id: "ghost".into(),
                title: "x".into(),
            },
            Mutation::RemoveSection {
                section_id: "ghost".into(),
            },
            Mutation::RemoveEntry {
                section_id: "work".into(),
                entry_id: "ghost".into(),
            },
            Mutation::SetSectionVisibility {
                section_id: "ghost".into(),
                visible: false,
            },
        ];

        for mutation in mutations {
            assert!(
                !mutation.apply(&mut d, &mut ids),
                "{} should be a no-op",
                mutation.name()
            );
        }
        assert_eq!(d, before);
    }

    #[test]
    fn test_add_entry_requires_list_section() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        // Leaf section: silent no-op
        assert!(!Mutation::AddEntry {
            section_id: "about".into()
        }
        .apply(&mut d, &mut ids));

        // List section: templated entry appended
        assert!(Mutation::AddEntry {
            section_id: "work".into()
        }
        .apply(&mut d, &mut ids));
        assert_eq!(d.find_section("work").unwrap().entries().unwrap().len(), 1);
    }

    #[test]
    fn test_add_then_remove_entry_roundtrips_to_empty() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        Mutation::AddEntry {
            section_id: "work".into(),
        }
        .apply(&mut d, &mut ids);
        let entry_id = d.find_section("work").unwrap().entries().unwrap()[0]
            .id
            .clone();

        let changed = Mutation::RemoveEntry {
            section_id: "work".into(),
            entry_id,
        }
        .apply(&mut d, &mut ids);

        assert!(changed);
        assert!(d.find_section("work").unwrap().entries().unwrap().is_empty());
    }

    #[test]
    fn test_remove_entry_against_leaf_section_is_noop() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        assert!(!Mutation::RemoveEntry {
            section_id: "about".into(),
            entry_id: "blurb".into(),
        }
        .apply(&mut d, &mut ids));
    }

    #[test]
    fn test_visibility_toggle() {
        let mut d = doc();
        let mut ids = IdGenerator::from_seed("t");

        Mutation::SetSectionVisibility {
            section_id: "about".into(),
            visible: false,
        }
        .apply(&mut d, &mut ids);
        assert!(!d.find_section("about").unwrap().visible);

        // Hidden, not removed
        assert!(d.contains_id("blurb"));
    }

    #[test]
    fn test_mutation_serialization_roundtrip() {
        let mutation = Mutation::UpdateContent {
            section_id: "about".into(),
            entry_id: None,
            item_id: "blurb".into(),
            value: "Hello World".into(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, back);
    }
}
