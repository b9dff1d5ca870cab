//! Element Tree (etree) Model
//!
//! An owned document tree using the text/tail model, built from a parsed
//! `dom_query` document.
//!
//! ## Text vs Tail
//!
//! In lxml-style trees, elements have:
//! - **Text**: Text content BEFORE the first child node
//! - **Tail**: Text content AFTER the element's closing tag, up to the next sibling
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- This is div's "text" -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- This is span's "tail" -->
//! </div>
//! ```
//!
//! html5ever keeps text as sibling nodes instead. [`Element::from_dom`]
//! reads both values through `html_cleaning::tree`, which applies the same
//! text/tail rules the rest of the dom_query tooling uses. Comments are
//! kept in place among the children; the text around them belongs to the
//! neighbouring element's text or tail, so a comment's own tail stays empty.

use crate::error::{Error, Result};
use dom_query::{NodeData, NodeRef, Selection};
use html_cleaning::tree;

/// A node of the document tree: an element or a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Comment(Comment),
}

/// An HTML element with its own text, children and trailing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name as the parser reports it.
    pub name: String,
    /// Attributes in source order.
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
    pub tail: String,
}

/// An HTML comment. Its content plays the role of own text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub tail: String,
}

impl Node {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Element(el) => &el.text,
            Self::Comment(c) => &c.text,
        }
    }

    #[must_use]
    pub fn tail(&self) -> &str {
        match self {
            Self::Element(el) => &el.tail,
            Self::Comment(c) => &c.tail,
        }
    }

    pub fn text_mut(&mut self) -> &mut String {
        match self {
            Self::Element(el) => &mut el.text,
            Self::Comment(c) => &mut c.text,
        }
    }

    pub fn tail_mut(&mut self) -> &mut String {
        match self {
            Self::Element(el) => &mut el.tail,
            Self::Comment(c) => &mut c.tail,
        }
    }

    /// Child nodes; always empty for comments.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(el) => &el.children,
            Self::Comment(_) => &[],
        }
    }

    /// Tag name, `None` for comments.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.name),
            Self::Comment(_) => None,
        }
    }

    /// Iterates over this node and all its descendants in document order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<Comment> for Node {
    fn from(c: Comment) -> Self {
        Self::Comment(c)
    }
}

/// Pre-order iterator returned by [`Node::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Builds an owned element from a parsed `dom_query` element node.
    ///
    /// Doctypes and processing instructions are dropped. Fails when the
    /// element nests deeper than `max_depth`.
    pub fn from_dom(node: &NodeRef, max_depth: usize) -> Result<Self> {
        build_element(node, 0, max_depth)
    }
}

fn build_element(node: &NodeRef, depth: usize, max_depth: usize) -> Result<Element> {
    if depth > max_depth {
        return Err(Error::ParseError(format!(
            "element nesting exceeds {max_depth} levels"
        )));
    }

    // html5ever already lowercases HTML names; SVG/MathML keep their case
    let name = node.node_name().map(|n| n.to_string()).unwrap_or_default();
    let attrs = node
        .attrs()
        .iter()
        .map(|attr| {
            let key = match &attr.name.prefix {
                Some(prefix) => format!("{prefix}:{}", attr.name.local),
                None => attr.name.local.to_string(),
            };
            (key, attr.value.to_string())
        })
        .collect();

    // <template> children live in a separate document fragment
    let content = template_contents(node).unwrap_or(*node);

    let mut element = Element {
        name,
        attrs,
        text: tree::text(&Selection::from(content)).to_string(),
        children: Vec::new(),
        tail: tree::tail(&Selection::from(*node)).to_string(),
    };

    for child in content.children() {
        if child.is_element() {
            let sub = build_element(&child, depth + 1, max_depth)?;
            element.children.push(Node::Element(sub));
        } else if let Some(text) = comment_contents(&child) {
            element.children.push(Node::Comment(Comment {
                text,
                tail: String::new(),
            }));
        }
    }

    Ok(element)
}

fn template_contents<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let id = node
        .query(|n| match &n.data {
            NodeData::Element(el) => el.template_contents,
            _ => None,
        })
        .flatten()?;
    Some(NodeRef::new(id, node.tree))
}

fn comment_contents(node: &NodeRef) -> Option<String> {
    node.query(|n| match &n.data {
        NodeData::Comment { contents } => Some(contents.to_string()),
        _ => None,
    })
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn body_of(html: &str) -> Element {
        let doc = Document::from(html);
        let body = doc.select("body");
        let node = body.nodes().first().expect("body element");
        Element::from_dom(node, 64).expect("tree builds")
    }

    #[test]
    fn test_text_and_tail_are_split_around_children() {
        let body = body_of("<div>Foo <b>Bar Baz</b> Qux Quux</div>");
        let Node::Element(div) = &body.children[0] else {
            panic!("expected element");
        };
        assert_eq!(div.name, "div");
        assert_eq!(div.text, "Foo ");
        assert_eq!(div.children.len(), 1);
        assert_eq!(div.children[0].name(), Some("b"));
        assert_eq!(div.children[0].text(), "Bar Baz");
        assert_eq!(div.children[0].tail(), " Qux Quux");
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let body = body_of(r#"<a href="/x" class="nav" data-id="7">link</a>"#);
        let Node::Element(a) = &body.children[0] else {
            panic!("expected element");
        };
        let keys: Vec<&str> = a.attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["href", "class", "data-id"]);
        assert_eq!(a.attr("data-id"), Some("7"));
        assert_eq!(a.attr("missing"), None);
    }

    #[test]
    fn test_comments_are_children() {
        let body = body_of("<p>one<!-- a note -->two</p>");
        let p = &body.children[0];
        assert!(p.text().starts_with("one"));
        assert_eq!(p.children().len(), 1);
        let comment = &p.children()[0];
        assert!(matches!(comment, Node::Comment(_)));
        assert_eq!(comment.text(), " a note ");
        assert_eq!(comment.tail(), "");
    }

    #[test]
    fn test_nesting_limit() {
        let html = format!("{}x", "<div>".repeat(20));
        let doc = Document::from(html.as_str());
        let body = doc.select("body");
        let node = body.nodes().first().expect("body element");
        assert!(matches!(
            Element::from_dom(node, 10),
            Err(Error::ParseError(_))
        ));
        assert!(Element::from_dom(node, 30).is_ok());
    }

    #[test]
    fn test_template_contents_are_children() {
        let body = body_of("<div><template>lead <p>inside template</p> after</template></div>");
        let template = &body.children[0].children()[0];
        assert_eq!(template.name(), Some("template"));
        assert_eq!(template.text(), "lead ");
        assert_eq!(template.children().len(), 1);
        assert_eq!(template.children()[0].name(), Some("p"));
        assert_eq!(template.children()[0].text(), "inside template");
        assert_eq!(template.children()[0].tail(), " after");
    }

    #[test]
    fn test_svg_names_keep_their_case() {
        let body = body_of("<svg><foreignObject></foreignObject><linearGradient/></svg>");
        let svg = &body.children[0];
        let names: Vec<&str> = svg.children().iter().filter_map(Node::name).collect();
        assert_eq!(names, ["foreignObject", "linearGradient"]);
    }

    #[test]
    fn test_iter_is_document_order() {
        let tree: Node = Element::new("ul")
            .with_child(Element::new("li").with_child(Element::new("b")))
            .with_child(Element::new("li"))
            .into();
        let names: Vec<&str> = tree.iter().filter_map(Node::name).collect();
        assert_eq!(names, ["ul", "li", "b", "li"]);
    }
}
