//! Forgiving element-tree construction over the markup tokenizer.
//!
//! This is not a conforming HTML parser; it is the minimal DOM the import
//! heuristics need: elements with lowercased tag names and attributes,
//! text runs with basic entities decoded, and a handful of query helpers.
//! Construction is total — unclosed tags are closed at end of input,
//! unmatched close tags are dropped, void elements take no children, and
//! `script`/`style` bodies are swallowed whole.

use crate::tokenizer::{tokenize, Token};

/// Elements that never have children
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose raw contents are discarded entirely
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Element node of the parsed tree
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Lowercased tag name
    pub tag: String,
    /// Lowercased attribute names with entity-decoded values
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DomNode>,
}

/// Tree node: element or text run
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element(DomElement),
    Text(String),
}

impl DomElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parse the inline `style` attribute into `(property, value)` pairs
    pub fn inline_styles(&self) -> Vec<(String, String)> {
        let Some(style) = self.attr("style") else {
            return Vec::new();
        };
        style
            .split(';')
            .filter_map(|decl| {
                let (prop, value) = decl.split_once(':')?;
                let prop = prop.trim().to_ascii_lowercase();
                let value = value.trim();
                if prop.is_empty() || value.is_empty() {
                    return None;
                }
                Some((prop, value.to_string()))
            })
            .collect()
    }

    /// First descendant matching any of `tags`, in document order
    pub fn find_first(&self, tags: &[&str]) -> Option<&DomElement> {
        for child in &self.children {
            if let DomNode::Element(el) = child {
                if tags.contains(&el.tag.as_str()) {
                    return Some(el);
                }
                if let Some(found) = el.find_first(tags) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All descendants matching any of `tags`, in document order
    pub fn find_all(&self, tags: &[&str]) -> Vec<&DomElement> {
        let mut found = Vec::new();
        self.collect_matching(tags, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, tags: &[&str], found: &mut Vec<&'a DomElement>) {
        for child in &self.children {
            if let DomNode::Element(el) = child {
                if tags.contains(&el.tag.as_str()) {
                    found.push(el);
                }
                el.collect_matching(tags, found);
            }
        }
    }

    /// Concatenated descendant text, as written
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    /// Descendant text with runs of whitespace collapsed to single spaces
    pub fn collapsed_text(&self) -> String {
        self.text().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                DomNode::Text(text) => out.push_str(text),
                DomNode::Element(el) => el.push_text(out),
            }
        }
    }
}

/// Markup-reading capability injected into the importer.
///
/// The import heuristics are host-agnostic: anything that can turn an HTML
/// string into an element tree can back them. `None` means the input could
/// not be read at all; implementations built on this crate's tokenizer
/// never return it.
pub trait MarkupCapability {
    fn parse(&self, html: &str) -> Option<DomElement>;
}

/// Built-in capability backed by the tokenizer in this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMarkup;

impl MarkupCapability for BuiltinMarkup {
    fn parse(&self, html: &str) -> Option<DomElement> {
        Some(build_tree(html))
    }
}

/// Build an element tree from markup.
///
/// The returned element is a synthetic root wrapping the whole input.
pub fn build_tree(html: &str) -> DomElement {
    let mut root = DomElement::new("root");
    let mut stack: Vec<DomElement> = Vec::new();
    // Set while discarding the body of a raw-text element
    let mut raw_until: Option<String> = None;

    for token in tokenize(html) {
        if let Some(target) = &raw_until {
            if let Token::CloseTag(slice) = &token {
                if close_tag_name(slice) == *target {
                    raw_until = None;
                }
            }
            continue;
        }

        match token {
            Token::OpenTag(slice) => {
                let (tag, attributes, self_closing) = parse_open_tag(slice);
                if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                    if !self_closing {
                        raw_until = Some(tag);
                    }
                    continue;
                }
                let element = DomElement {
                    tag: tag.clone(),
                    attributes,
                    children: Vec::new(),
                };
                if self_closing || VOID_ELEMENTS.contains(&tag.as_str()) {
                    attach(&mut root, &mut stack, DomNode::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Token::CloseTag(slice) => {
                let name = close_tag_name(slice);
                // Close everything up to the matching open tag; a close
                // tag with no matching open is dropped
                if let Some(pos) = stack.iter().rposition(|el| el.tag == name) {
                    while stack.len() > pos {
                        let done = stack.pop().expect("stack length checked");
                        attach(&mut root, &mut stack, DomNode::Element(done));
                    }
                }
            }
            Token::Text(slice) => {
                let text = decode_entities(slice);
                if !text.is_empty() {
                    attach(&mut root, &mut stack, DomNode::Text(text));
                }
            }
            Token::Comment | Token::Doctype => {}
        }
    }

    // Unclosed tags are closed by the end of input
    while let Some(done) = stack.pop() {
        attach(&mut root, &mut stack, DomNode::Element(done));
    }

    root
}

fn attach(root: &mut DomElement, stack: &mut Vec<DomElement>, node: DomNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.children.push(node),
    }
}

fn close_tag_name(slice: &str) -> String {
    slice
        .trim_start_matches("</")
        .trim_end_matches('>')
        .trim()
        .to_ascii_lowercase()
}

fn parse_open_tag(slice: &str) -> (String, Vec<(String, String)>, bool) {
    let inner = slice.strip_prefix('<').unwrap_or(slice);
    let inner = inner.strip_suffix('>').unwrap_or(inner);
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };
    let inner = inner.trim();

    let name_end = inner
        .find(|c: char| c.is_whitespace())
        .unwrap_or(inner.len());
    let tag = inner[..name_end].to_ascii_lowercase();
    let attributes = parse_attributes(&inner[name_end..]);

    (tag, attributes, self_closing)
}

fn parse_attributes(input: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        let Some(&first) = chars.peek() else { break };
        if first == '=' || first == '"' || first == '\'' {
            // Stray punctuation between attributes
            chars.next();
            continue;
        }

        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            name.push(c);
            chars.next();
        }

        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        let mut value = String::new();
        if chars.peek() == Some(&'=') {
            chars.next();
            while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
                chars.next();
            }
            match chars.peek() {
                Some(&quote) if quote == '"' || quote == '\'' => {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == quote {
                            break;
                        }
                        value.push(c);
                    }
                }
                _ => {
                    while let Some(&c) = chars.peek() {
                        if c.is_whitespace() {
                            break;
                        }
                        value.push(c);
                        chars.next();
                    }
                }
            }
        }

        if !name.is_empty() {
            attrs.push((name.to_ascii_lowercase(), decode_entities(&value)));
        }
    }

    attrs
}

/// Decode the named entities that show up in CV templates plus numeric
/// references; anything unrecognized is kept literally.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let semi = rest
            .char_indices()
            .take(10)
            .find(|(_, c)| *c == ';')
            .map(|(i, _)| i);
        let decoded = semi.and_then(|end| {
            let entity = &rest[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => entity.strip_prefix('#').and_then(|num| {
                    let code = match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            c.map(|c| (c, end))
        });

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
