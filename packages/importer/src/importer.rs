//! Heuristic translation from an element tree to a document.
//!
//! The pipeline is intentionally lossy: header detection, per-`<section>`
//! classification, and a guaranteed catch-all fallback. Content the
//! heuristics cannot classify is dropped, not erred; with a working markup
//! capability the result always contains at least one section.

use crate::dom::{BuiltinMarkup, DomElement, MarkupCapability};
use tracing::debug;
use vitae_model::{
    document_seed, ContentItem, Document, IdGenerator, SectionItems, SectionKind, SectionNode,
    StyleMap,
};

/// Inline style properties copied verbatim into the model, keyed by the
/// model's camelCase property names
const RECOGNIZED_STYLES: &[(&str, &str)] = &[
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("color", "color"),
    ("text-align", "textAlign"),
    ("background-color", "backgroundColor"),
];

const NAME_STYLES: &[(&str, &str)] = &[
    ("fontSize", "32px"),
    ("fontWeight", "bold"),
    ("textAlign", "center"),
    ("color", "#000000"),
];

const ROLE_STYLES: &[(&str, &str)] = &[
    ("fontSize", "16px"),
    ("color", "#666666"),
    ("textAlign", "center"),
];

const LIST_ENTRY_STYLES: &[(&str, &str)] = &[("display", "block")];

/// Shown when even the fallback section finds no text to wrap
const EMPTY_IMPORT_PLACEHOLDER: &str = "No readable content";

/// One-way HTML-to-document translator.
///
/// Construction decides the markup capability: [`HtmlImporter::new`] uses
/// the built-in tokenizer, [`HtmlImporter::with_capability`] injects a
/// host-provided reader, and [`HtmlImporter::detached`] has none — a
/// detached importer maps every input to an empty document, the documented
/// behavior for hosts that cannot parse markup at all.
pub struct HtmlImporter {
    capability: Option<Box<dyn MarkupCapability>>,
}

impl HtmlImporter {
    pub fn new() -> Self {
        Self {
            capability: Some(Box::new(BuiltinMarkup)),
        }
    }

    pub fn with_capability(capability: Box<dyn MarkupCapability>) -> Self {
        Self {
            capability: Some(capability),
        }
    }

    pub fn detached() -> Self {
        Self { capability: None }
    }

    /// Import markup with a self-contained id namespace derived from the
    /// input
    pub fn import(&self, html: &str) -> Document {
        let mut ids = IdGenerator::from_seed(format!("html-{}", document_seed(html)));
        self.import_with_ids(html, &mut ids)
    }

    /// Import markup, drawing node ids from the caller's generator.
    ///
    /// The editor store threads its own generator through here so ids
    /// minted by later creation operations can never collide with
    /// imported ones.
    pub fn import_with_ids(&self, html: &str, ids: &mut IdGenerator) -> Document {
        let Some(capability) = &self.capability else {
            debug!("no markup capability, importing as empty document");
            return Document::default();
        };
        let Some(root) = capability.parse(html) else {
            debug!("markup capability could not read input, importing as empty document");
            return Document::default();
        };

        let mut sections = Vec::new();

        if let Some(header) = import_header(&root, ids) {
            sections.push(header);
        }

        for sec in root.find_all(&["section"]) {
            if let Some(section) = import_section(sec, ids) {
                sections.push(section);
            }
        }

        if sections.is_empty() {
            debug!("no recognizable structure, importing as catch-all section");
            sections.push(fallback_section(&root, ids));
        }

        debug!(sections = sections.len(), "imported document");
        Document::new(sections)
    }
}

impl Default for HtmlImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot import with the built-in markup reader
pub fn import(html: &str) -> Document {
    HtmlImporter::new().import(html)
}

fn import_header(root: &DomElement, ids: &mut IdGenerator) -> Option<SectionNode> {
    let header = root.find_first(&["header"])?;
    let mut items = Vec::new();

    let name_el = header.find_first(&["h1"]);
    let name_text = name_el.map(DomElement::collapsed_text).unwrap_or_default();
    if let Some(el) = name_el {
        if !name_text.is_empty() {
            items.push(
                ContentItem::text(ids.next_id(), name_text.clone())
                    .with_label("Name")
                    .with_styles(styled(NAME_STYLES, el)),
            );
        }
    }

    // A second distinct heading or paragraph becomes the role line
    let role = header
        .find_all(&["h2", "h3", "p"])
        .into_iter()
        .find_map(|el| {
            let text = el.collapsed_text();
            if text.is_empty() || text == name_text {
                None
            } else {
                Some((text, styled(ROLE_STYLES, el)))
            }
        });
    if let Some((text, styles)) = role {
        items.push(
            ContentItem::text(ids.next_id(), text)
                .with_label("Role")
                .with_styles(styles),
        );
    }

    let mut section = SectionNode::leaf(ids.next_id(), SectionKind::Header, "Header");
    section.styles = recognized_styles(header);
    section.items = SectionItems::Leaf(items);
    Some(section)
}

fn import_section(sec: &DomElement, ids: &mut IdGenerator) -> Option<SectionNode> {
    let title = sec
        .find_first(&["h2", "h3"])
        .map(DomElement::collapsed_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Section".to_string());

    // List-item markup wins over paragraph prose
    let list_entries: Vec<&DomElement> = sec
        .find_all(&["li"])
        .into_iter()
        .filter(|li| !li.collapsed_text().is_empty())
        .collect();
    if !list_entries.is_empty() {
        let items = list_entries
            .into_iter()
            .map(|li| {
                ContentItem::text(ids.next_id(), li.collapsed_text())
                    .with_styles(styled(LIST_ENTRY_STYLES, li))
            })
            .collect();
        let mut section = SectionNode::leaf(ids.next_id(), SectionKind::Custom, title);
        section.styles = recognized_styles(sec);
        section.items = SectionItems::Leaf(items);
        return Some(section);
    }

    let paragraphs: Vec<String> = sec
        .find_all(&["p"])
        .into_iter()
        .map(DomElement::collapsed_text)
        .filter(|t| !t.is_empty())
        .collect();
    let style_source = if paragraphs.is_empty() {
        sec
    } else {
        sec.find_first(&["p"]).unwrap_or(sec)
    };
    let body = if paragraphs.is_empty() {
        sec.collapsed_text()
    } else {
        paragraphs.join("\n")
    };
    if body.trim().is_empty() {
        return None;
    }

    let mut section = SectionNode::leaf(ids.next_id(), SectionKind::Summary, title);
    section.styles = recognized_styles(sec);
    section.items = SectionItems::Leaf(vec![ContentItem::text(ids.next_id(), body)
        .with_styles(recognized_styles(style_source))]);
    Some(section)
}

fn fallback_section(root: &DomElement, ids: &mut IdGenerator) -> SectionNode {
    let body = root.collapsed_text();
    let body = if body.is_empty() {
        EMPTY_IMPORT_PLACEHOLDER.to_string()
    } else {
        body
    };

    let mut section = SectionNode::leaf(ids.next_id(), SectionKind::Summary, "Imported Content");
    section.items = SectionItems::Leaf(vec![ContentItem::text(ids.next_id(), body)]);
    section
}

fn recognized_styles(el: &DomElement) -> StyleMap {
    let mut styles = StyleMap::new();
    for (prop, value) in el.inline_styles() {
        if let Some((_, key)) = RECOGNIZED_STYLES.iter().find(|(css, _)| *css == prop) {
            styles.insert((*key).to_string(), value);
        }
    }
    styles
}

/// Semantic defaults overridden by whatever recognized inline styles the
/// element carries
fn styled(defaults: &[(&str, &str)], el: &DomElement) -> StyleMap {
    let mut styles: StyleMap = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    styles.extend(recognized_styles(el));
    styles
}
