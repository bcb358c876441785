//! # Editor Store
//!
//! Single authority over the current document and selection.
//!
//! The store owns the only mutable reference to the tree. Every write goes
//! through [`EditorStore::apply`]; every applied mutation publishes a new
//! `Arc<Document>` snapshot, so consumers detect change by identity
//! (`Arc::ptr_eq`) without diffing. A no-op keeps the previous allocation.
//!
//! Selection is held beside the document and kept honest: a new selection
//! must resolve against the current tree, and a mutation that deletes a
//! selected node clears the selection in the same step.

use crate::{templates, EditorError, Mutation, MutationOutcome};
use std::sync::Arc;
use tracing::debug;
use vitae_importer::HtmlImporter;
use vitae_model::{Document, IdGenerator, SectionKind, SectionNode, Selection, StyleMap};

pub struct EditorStore {
    document: Arc<Document>,
    selection: Option<Selection>,
    version: u64,
    ids: IdGenerator,
}

impl EditorStore {
    /// Empty store for a fresh editing session
    pub fn new() -> Self {
        Self::with_document(Document::default())
    }

    /// Store over an already-built document.
    ///
    /// The document's ids are trusted as-is; this is the load path for
    /// snapshots and imports performed elsewhere.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(document),
            selection: None,
            version: 0,
            ids: IdGenerator::new("cv"),
        }
    }

    /// Store pre-populated with the starter CV
    /// (header / summary / experience)
    pub fn with_starter() -> Self {
        let mut ids = IdGenerator::new("cv");
        let document = templates::starter_document(&mut ids);
        Self {
            document: Arc::new(document),
            selection: None,
            version: 0,
            ids,
        }
    }

    /// Store seeded by importing an HTML template.
    ///
    /// The importer draws from the store's own id generator, so ids minted
    /// by later creation operations can never collide with imported ones.
    pub fn from_html(html: &str) -> Self {
        let mut ids = IdGenerator::new("cv");
        let document = HtmlImporter::new().import_with_ids(html, &mut ids);
        Self {
            document: Arc::new(document),
            selection: None,
            version: 0,
            ids,
        }
    }

    /// Current document snapshot
    pub fn document(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Snapshot counter; increments once per applied mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation and publish the new snapshot.
    ///
    /// Mutations are total: a missing id or wrong-shape target returns
    /// [`MutationOutcome::Noop`] with state untouched.
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let mut next = Document::clone(&self.document);
        let changed = mutation.apply(&mut next, &mut self.ids);
        if !changed {
            debug!(op = mutation.name(), "mutation was a no-op");
            return MutationOutcome::Noop;
        }

        self.version += 1;
        self.document = Arc::new(next);

        // Deleting or replacing a selected node must not leave the
        // selection dangling
        if let Some(selection) = &self.selection {
            if !selection.resolves_in(&self.document) {
                debug!("selection no longer resolves, clearing");
                self.selection = None;
            }
        }

        debug!(
            op = mutation.name(),
            version = self.version,
            "applied mutation"
        );
        MutationOutcome::Applied {
            version: self.version,
        }
    }

    /// Replace the selection.
    ///
    /// `None` always clears. A selection whose id path does not resolve in
    /// the current document is rejected and the previous selection kept;
    /// returns whether the selection was accepted.
    pub fn select(&mut self, selection: Option<Selection>) -> bool {
        match selection {
            None => {
                self.selection = None;
                true
            }
            Some(selection) => {
                if selection.resolves_in(&self.document) {
                    self.selection = Some(selection);
                    true
                } else {
                    debug!("rejecting selection that does not resolve");
                    false
                }
            }
        }
    }

    /// Import an HTML template into the running session, replacing the
    /// document wholesale
    pub fn import_html(&mut self, html: &str) -> MutationOutcome {
        let imported = HtmlImporter::new().import_with_ids(html, &mut self.ids);
        self.set_sections(imported.sections)
    }

    // Convenience methods mirroring the gesture surface one-to-one

    pub fn set_sections(&mut self, sections: Vec<SectionNode>) -> MutationOutcome {
        self.apply(Mutation::SetSections { sections })
    }

    pub fn update_section_styles(&mut self, section_id: &str, styles: StyleMap) -> MutationOutcome {
        self.apply(Mutation::UpdateSectionStyles {
            section_id: section_id.to_string(),
            styles,
        })
    }

    pub fn update_item_styles(
        &mut self,
        section_id: &str,
        entry_id: Option<&str>,
        item_id: &str,
        styles: StyleMap,
    ) -> MutationOutcome {
        self.apply(Mutation::UpdateItemStyles {
            section_id: section_id.to_string(),
            entry_id: entry_id.map(str::to_string),
            item_id: item_id.to_string(),
            styles,
        })
    }

    pub fn update_content(
        &mut self,
        section_id: &str,
        entry_id: Option<&str>,
        item_id: &str,
        value: &str,
    ) -> MutationOutcome {
        self.apply(Mutation::UpdateContent {
            section_id: section_id.to_string(),
            entry_id: entry_id.map(str::to_string),
            item_id: item_id.to_string(),
            value: value.to_string(),
        })
    }

    pub fn update_section_title(&mut self, section_id: &str, title: &str) -> MutationOutcome {
        self.apply(Mutation::UpdateSectionTitle {
            section_id: section_id.to_string(),
            title: title.to_string(),
        })
    }

    pub fn reorder_sections(&mut self, sections: Vec<SectionNode>) -> MutationOutcome {
        self.apply(Mutation::ReorderSections { sections })
    }

    pub fn add_section(&mut self, kind: SectionKind) -> MutationOutcome {
        self.apply(Mutation::AddSection { kind })
    }

    pub fn remove_section(&mut self, section_id: &str) -> MutationOutcome {
        self.apply(Mutation::RemoveSection {
            section_id: section_id.to_string(),
        })
    }

    pub fn add_entry(&mut self, section_id: &str) -> MutationOutcome {
        self.apply(Mutation::AddEntry {
            section_id: section_id.to_string(),
        })
    }

    pub fn remove_entry(&mut self, section_id: &str, entry_id: &str) -> MutationOutcome {
        self.apply(Mutation::RemoveEntry {
            section_id: section_id.to_string(),
            entry_id: entry_id.to_string(),
        })
    }

    pub fn set_section_visibility(&mut self, section_id: &str, visible: bool) -> MutationOutcome {
        self.apply(Mutation::SetSectionVisibility {
            section_id: section_id.to_string(),
            visible,
        })
    }

    pub fn set_item_visibility(
        &mut self,
        section_id: &str,
        entry_id: Option<&str>,
        item_id: &str,
        visible: bool,
    ) -> MutationOutcome {
        self.apply(Mutation::SetItemVisibility {
            section_id: section_id.to_string(),
            entry_id: entry_id.map(str::to_string),
            item_id: item_id.to_string(),
            visible,
        })
    }

    /// Serialize the current document for host-side persistence
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self.document.as_ref())?)
    }

    /// Replace the document from a serialized snapshot
    pub fn load_json(&mut self, json: &str) -> Result<MutationOutcome, EditorError> {
        let document: Document = serde_json::from_str(json)?;
        Ok(self.set_sections(document.sections))
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
