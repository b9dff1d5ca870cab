//! HTML serialization of the element tree.
//!
//! Escaping follows the HTML fragment serialization algorithm that
//! html5ever implements. Pretty printing only touches element-only
//! content, so reparsing the output yields the same text values after a
//! first-token walk.

use crate::error::{Error, Result};
use crate::etree::{Element, Node};
use crate::options::Options;

/// Elements without an end tag.
const VOID_ELEMENTS: [&str; 18] = [
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is written verbatim.
const RAW_TEXT_ELEMENTS: [&str; 7] = [
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Elements where added whitespace would change the content.
const PRESERVE_SPACE_ELEMENTS: [&str; 2] = ["pre", "textarea"];

/// Serializes `root` (without its tail) to an HTML string.
///
/// With `options.pretty_print` the output ends with a newline.
pub fn to_html(root: &Node, options: &Options) -> Result<String> {
    let mut out = String::new();
    write_node(root, 0, false, options, &mut out)?;
    if options.pretty_print {
        out.push('\n');
    }
    Ok(out)
}

/// Serializes only the content of `root`: its text, its children and their
/// tails, without the root's own tags.
///
/// Element-only content is written one top-level node per line when
/// pretty printing.
pub fn content_to_html(root: &Node, options: &Options) -> Result<String> {
    let mut out = String::new();
    match root {
        Node::Element(el) if lays_out_children(el, options) => {
            for (i, child) in el.children.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_node(child, 0, false, options, &mut out)?;
            }
        }
        Node::Element(el) => {
            push_text(&el.text, false, &mut out);
            for child in &el.children {
                write_node(child, 0, false, options, &mut out)?;
                push_text(child.tail(), false, &mut out);
            }
        }
        Node::Comment(c) => push_text(&c.text, false, &mut out),
    }
    if options.pretty_print {
        out.push('\n');
    }
    Ok(out)
}

/// Whether the children of `el` go on separate, indented lines.
fn lays_out_children(el: &Element, options: &Options) -> bool {
    let name = el.name.as_str();
    options.pretty_print
        && el.text.is_empty()
        && !el.children.is_empty()
        && el.children.iter().all(|c| c.tail().is_empty())
        && !RAW_TEXT_ELEMENTS.contains(&name)
        && !PRESERVE_SPACE_ELEMENTS.contains(&name)
}

fn write_node(node: &Node, depth: usize, raw: bool, options: &Options, out: &mut String) -> Result<()> {
    match node {
        Node::Element(el) => write_element(el, depth, options, out),
        Node::Comment(c) => {
            if raw {
                return Err(Error::SerializeError(
                    "comment inside a raw text element".to_string(),
                ));
            }
            out.push_str("<!--");
            out.push_str(&c.text);
            out.push_str("-->");
            Ok(())
        }
    }
}

fn write_element(el: &Element, depth: usize, options: &Options, out: &mut String) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::SerializeError(format!(
            "element nesting exceeds {} levels",
            options.max_depth
        )));
    }
    if el.name.is_empty() {
        return Err(Error::SerializeError("element without a tag name".to_string()));
    }

    out.push('<');
    out.push_str(&el.name);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped(value, true, out);
        out.push('"');
    }
    out.push('>');

    let name = el.name.as_str();
    if VOID_ELEMENTS.contains(&name) {
        return Ok(());
    }

    let raw = RAW_TEXT_ELEMENTS.contains(&name);
    if lays_out_children(el, options) {
        for child in &el.children {
            push_newline(depth + 1, options.indent, out);
            write_node(child, depth + 1, false, options, out)?;
        }
        push_newline(depth, options.indent, out);
    } else {
        push_text(&el.text, raw, out);
        for child in &el.children {
            write_node(child, depth + 1, raw, options, out)?;
            push_text(child.tail(), raw, out);
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
    Ok(())
}

fn push_newline(depth: usize, indent: usize, out: &mut String) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(depth * indent));
}

fn push_text(text: &str, raw: bool, out: &mut String) {
    if raw {
        out.push_str(text);
    } else {
        push_escaped(text, false, out);
    }
}

fn push_escaped(text: &str, attr_mode: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
