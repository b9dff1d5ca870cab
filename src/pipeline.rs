//! Parse → select root → walk → serialize.

use crate::error::{Error, Result};
use crate::etree::{Element, Node};
use crate::options::Options;
use crate::{serialize, walker};
use dom_query::Document;
use regex::Regex;
use std::sync::LazyLock;

/// Input starting like this (after any leading comments) is treated as a
/// whole document rather than a fragment.
#[allow(clippy::expect_used)]
static FULL_DOCUMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*(?:<!--.*?-->\s*)*<(?:html|!doctype)").expect("valid regex")
});

/// The part of the parsed document that gets written out.
#[derive(Debug)]
enum Root {
    /// Written with its own start and end tags.
    Element(Node),
    /// The parser's implied `<body>`: only its content is written.
    BodyContent(Node),
}

impl Root {
    fn node_mut(&mut self) -> &mut Node {
        match self {
            Self::Element(node) | Self::BodyContent(node) => node,
        }
    }

    fn to_html(&self, options: &Options) -> Result<String> {
        match self {
            Self::Element(node) => serialize::to_html(node, options),
            Self::BodyContent(node) => serialize::content_to_html(node, options),
        }
    }
}

/// Runs the full cleaning pipeline over one document.
pub(crate) fn clean_document(html: &str, options: &Options) -> Result<String> {
    tracing::info!(bytes = html.len(), "Parsing the HTML content...");
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let document = Document::from(html);
    let html_root = document_element(&document, options)?;
    let mut root = select_root(html_root, FULL_DOCUMENT_RE.is_match(html))?;

    tracing::debug!("Modifying all text nodes to keep only the first word...");
    let stats = walker::walk(root.node_mut());

    let cleaned = root.to_html(options)?;
    tracing::debug!(
        nodes = stats.nodes,
        truncated = stats.truncated,
        "HTML cleaned successfully, keeping only the first word of each text node"
    );
    Ok(cleaned)
}

/// Collapses a typed result into the `Option` sentinel, logging the cause.
pub(crate) fn into_sentinel(result: Result<String>) -> Option<String> {
    match result {
        Ok(cleaned) => Some(cleaned),
        Err(err) => {
            tracing::error!("Error cleaning HTML: {err}");
            None
        }
    }
}

fn document_element(document: &Document, options: &Options) -> Result<Element> {
    let selection = document.select("html");
    let node = selection
        .nodes()
        .first()
        .ok_or_else(|| Error::ParseError("no <html> element in parsed document".to_string()))?;
    Element::from_dom(node, options.max_depth)
}

/// Picks what the output is rooted at.
///
/// `<html>` is kept for whole documents, for fragments that put anything
/// in `<head>` and for documents without a `<body>` (framesets). Otherwise
/// the parser's implied `<body>` is dropped: a lone element becomes the
/// root, bare text is wrapped in a `span`, and anything else is written
/// as a sequence of top-level nodes.
fn select_root(mut html_root: Element, full_document: bool) -> Result<Root> {
    if full_document {
        return Ok(Root::Element(html_root.into()));
    }

    let head_has_content = html_root
        .children
        .iter()
        .find(|c| c.name() == Some("head"))
        .is_some_and(|head| !head.children().is_empty());
    if head_has_content {
        return Ok(Root::Element(html_root.into()));
    }

    let Some(mut body) = take_element(&mut html_root.children, "body") else {
        return Ok(Root::Element(html_root.into()));
    };
    if body.children.is_empty() && body.text.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }
    body.tail.clear();

    let single_element = body.text.trim().is_empty()
        && body.children.len() == 1
        && matches!(&body.children[0], Node::Element(el) if el.tail.trim().is_empty());
    if single_element {
        if let Some(Node::Element(mut only)) = body.children.pop() {
            only.tail.clear();
            return Ok(Root::Element(only.into()));
        }
    }

    if !body.children.iter().any(|c| matches!(c, Node::Element(_))) {
        body.name = "span".to_string();
        return Ok(Root::Element(body.into()));
    }

    Ok(Root::BodyContent(body.into()))
}

fn take_element(children: &mut Vec<Node>, name: &str) -> Option<Element> {
    let pos = children.iter().position(|c| c.name() == Some(name))?;
    match children.remove(pos) {
        Node::Element(el) => Some(el),
        Node::Comment(_) => None,
    }
}
