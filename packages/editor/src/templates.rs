//! Node templates used by creation operations.
//!
//! Creation mutations never build nodes ad hoc; they instantiate these
//! templates so freshly added sections and entries always arrive with the
//! shape, labels, and default styling the canvas expects.

use vitae_model::{
    ContentItem, Document, IdGenerator, SectionItems, SectionKind, SectionNode, StyleMap,
};

fn styles(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// New empty section for the given kind.
///
/// Experience and education hold repeated entries and are created as list
/// sections; every other kind starts as an empty leaf.
pub fn new_section(kind: SectionKind, ids: &mut IdGenerator) -> SectionNode {
    let title = match kind {
        SectionKind::Header => "Header",
        SectionKind::Summary => "Summary",
        SectionKind::Experience => "Experience",
        SectionKind::Education => "Education",
        SectionKind::Skills => "Skills",
        SectionKind::Custom => "New Section",
    };

    match kind {
        SectionKind::Experience | SectionKind::Education => {
            SectionNode::list(ids.next_id(), kind, title)
        }
        _ => SectionNode::leaf(ids.next_id(), kind, title),
    }
}

/// New repeated entry pre-populated with the fixed
/// title/subtitle/date/description item template
pub fn new_entry(ids: &mut IdGenerator) -> SectionNode {
    let items = vec![
        ContentItem::text(ids.next_id(), "Title")
            .with_label("Title")
            .with_styles(styles(&[("fontSize", "16px"), ("fontWeight", "bold")])),
        ContentItem::text(ids.next_id(), "Subtitle")
            .with_label("Subtitle")
            .with_styles(styles(&[("fontSize", "14px"), ("color", "#444444")])),
        ContentItem::text(ids.next_id(), "Date")
            .with_label("Date")
            .with_styles(styles(&[("fontSize", "12px"), ("color", "#666666")])),
        ContentItem::text(ids.next_id(), "Description")
            .with_label("Description")
            .with_styles(styles(&[("fontSize", "14px")])),
    ];

    let mut entry = SectionNode::leaf(ids.next_id(), SectionKind::Custom, "New Entry");
    entry.items = SectionItems::Leaf(items);
    entry
}

/// Hard-coded starter CV: header, summary, and one experience entry
pub fn starter_document(ids: &mut IdGenerator) -> Document {
    let mut header = SectionNode::leaf(ids.next_id(), SectionKind::Header, "Header");
    header.items = SectionItems::Leaf(vec![
        ContentItem::text(ids.next_id(), "Your Name")
            .with_label("Name")
            .with_styles(styles(&[
                ("fontSize", "32px"),
                ("fontWeight", "bold"),
                ("textAlign", "center"),
                ("color", "#000000"),
            ])),
        ContentItem::text(ids.next_id(), "Your Role")
            .with_label("Role")
            .with_styles(styles(&[
                ("fontSize", "16px"),
                ("color", "#666666"),
                ("textAlign", "center"),
            ])),
    ]);

    let mut summary = SectionNode::leaf(ids.next_id(), SectionKind::Summary, "Summary");
    summary.items = SectionItems::Leaf(vec![ContentItem::text(
        ids.next_id(),
        "A short professional summary.",
    )]);

    let mut experience = SectionNode::list(ids.next_id(), SectionKind::Experience, "Experience");
    experience
        .entries_mut()
        .expect("experience template is a list section")
        .push(new_entry(ids));

    Document::new(vec![header, summary, experience])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_template_shapes() {
        let mut ids = IdGenerator::from_seed("t");

        assert!(new_section(SectionKind::Experience, &mut ids).is_list());
        assert!(new_section(SectionKind::Education, &mut ids).is_list());
        assert!(!new_section(SectionKind::Skills, &mut ids).is_list());
        assert!(!new_section(SectionKind::Custom, &mut ids).is_list());
    }

    #[test]
    fn test_custom_section_gets_placeholder_title() {
        let mut ids = IdGenerator::from_seed("t");
        assert_eq!(new_section(SectionKind::Custom, &mut ids).title, "New Section");
    }

    #[test]
    fn test_entry_template_items() {
        let mut ids = IdGenerator::from_seed("t");
        let entry = new_entry(&mut ids);

        let labels: Vec<_> = entry
            .leaf_items()
            .unwrap()
            .iter()
            .map(|i| i.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec!["Title", "Subtitle", "Date", "Description"]);
    }

    #[test]
    fn test_starter_document_ids_are_unique() {
        let mut ids = IdGenerator::from_seed("t");
        let doc = starter_document(&mut ids);

        let all = doc.all_ids();
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn test_starter_document_sections() {
        let mut ids = IdGenerator::from_seed("t");
        let doc = starter_document(&mut ids);

        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Header,
                SectionKind::Summary,
                SectionKind::Experience
            ]
        );
        assert_eq!(doc.sections[2].entries().unwrap().len(), 1);
    }
}
