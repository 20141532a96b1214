use std::sync::LazyLock;

use scraper::{Html, Node, Selector};

use crate::core::substitute::Substitution;

static BODY_TEXT_PARENTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body, body *").expect("static selector"));

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));

/// Tags whose character data is machine-readable, not visible text.
const SKIP_TAGS: [&str; 2] = ["script", "style"];

/// Walks every text node at or under `<body>` and applies the
/// substitution in place. Attribute values, tag names, and comments
/// are never touched; script and style contents are skipped, as are
/// whitespace-only nodes. Returns the number of nodes rewritten.
pub fn rewrite_text_nodes(doc: &mut Html, substitution: &Substitution) -> usize {
    let mut edits = Vec::new();
    for element in doc.select(&BODY_TEXT_PARENTS) {
        if SKIP_TAGS.contains(&element.value().name()) {
            continue;
        }
        for child in element.children() {
            let Some(text) = child.value().as_text() else {
                continue;
            };
            if text.trim().is_empty() || !substitution.is_match(text) {
                continue;
            }
            edits.push((child.id(), substitution.apply(text)));
        }
    }

    let rewritten = edits.len();
    for (id, new_text) in edits {
        if let Some(mut node) = doc.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = new_text.as_str().into();
            }
        }
    }
    rewritten
}

/// Rewrites the document title with the same case-preserving rule.
/// Titles live in `<head>`, outside the body walk, so they get their
/// own pass. Returns the final title text.
pub fn rewrite_title(doc: &mut Html, substitution: &Substitution) -> String {
    let (text_ids, current) = match doc.select(&TITLE).next() {
        Some(title) => {
            let ids: Vec<_> = title
                .children()
                .filter(|child| child.value().is_text())
                .map(|child| child.id())
                .collect();
            (ids, title.text().collect::<String>())
        }
        None => return String::new(),
    };

    if !substitution.is_match(&current) {
        return current;
    }

    let rewritten = substitution.apply(&current);
    for (index, id) in text_ids.into_iter().enumerate() {
        if let Some(mut node) = doc.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                // The whole rewritten title goes into the first text
                // node; any further fragments are cleared.
                text.text = if index == 0 {
                    rewritten.as_str().into()
                } else {
                    "".into()
                };
            }
        }
    }
    rewritten
}
