use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{Html, Node, Selector};
use url::Url;

static BASE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("base").expect("static selector"));

static HEAD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head").expect("static selector"));

/// Points relative links and resources back at the source origin by
/// ensuring `<head>` carries a `<base href="origin/">` declaration.
/// An existing declaration is overwritten, never duplicated. Returns
/// the href that was written.
pub fn ensure_base_href(doc: &mut Html, request_url: &Url) -> String {
    let href = format!("{}/", request_url.origin().ascii_serialization());

    if let Some(id) = doc.select(&BASE).next().map(|el| el.id()) {
        if let Some(mut node) = doc.tree.get_mut(id) {
            if let Node::Element(element) = node.value() {
                set_href(element, &href);
            }
        }
        return href;
    }

    let head_id = doc.select(&HEAD).next().map(|el| el.id());
    if let (Some(head_id), Some(base)) = (head_id, make_base(&href)) {
        if let Some(mut head) = doc.tree.get_mut(head_id) {
            head.prepend(Node::Element(base));
        }
    }
    href
}

fn set_href(element: &mut Element, href: &str) {
    for (name, value) in element.attrs.iter_mut() {
        if &*name.local == "href" {
            *value = href.into();
            return;
        }
    }
    // Declaration without an href; graft one from a template element.
    if let Some(template) = make_base(href) {
        for (name, value) in template.attrs {
            element.attrs.push((name, value));
        }
    }
}

/// Builds a `<base>` element by parsing a fragment, so attribute names
/// come from the parser rather than hand-assembled qualified names.
fn make_base(href: &str) -> Option<Element> {
    let fragment = Html::parse_fragment(&format!("<base href=\"{href}\">"));
    fragment.select(&BASE).next().map(|el| el.value().clone())
}
