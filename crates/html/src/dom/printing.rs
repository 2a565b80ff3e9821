use core::fmt;

use super::{Dom, DomNode, NodeKind};
use indextree::NodeId;

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

/// Elements serialized without an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are serialized without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn push_non_null(children: &mut Vec<Value>, value: Value) {
    if !value.is_null() {
        children.push(value);
    }
}

fn coalesce_children(dom: &Dom, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in dom.children(id) {
        if let Some(DomNode {
            kind: NodeKind::Text { text },
            ..
        }) = dom.node(child)
        {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        push_non_null(&mut children, node_to_json(dom, child));
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn sorted_attrs(node: &DomNode) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = node
        .attrs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    pairs.sort_by(|left, right| left.0.cmp(right.0));
    pairs
}

fn node_to_json(dom: &Dom, id: NodeId) -> Value {
    let Some(node) = dom.node(id) else {
        return Value::Null;
    };
    match &node.kind {
        NodeKind::Document => json!({ "type": "document", "children": coalesce_children(dom, id) }),
        NodeKind::Element { tag } => {
            // Sorted by key for determinism
            let mut attrs_obj = Map::new();
            for (key, value) in sorted_attrs(node) {
                attrs_obj.insert(key.to_owned(), Value::String(value.to_owned()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": coalesce_children(dom, id),
            })
        }
        NodeKind::Text { text } => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text })
            }
        }
        NodeKind::Comment { .. } => Value::Null,
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(character),
        }
    }
    out
}

fn escape_html(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if in_attribute => out.push_str("&quot;"),
            '<' if !in_attribute => out.push_str("&lt;"),
            '>' if !in_attribute => out.push_str("&gt;"),
            _ => out.push(character),
        }
    }
    out
}

fn write_html(dom: &Dom, id: NodeId, raw_text: bool, out: &mut String) {
    let Some(node) = dom.node(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Document => {
            for child in dom.children(id) {
                write_html(dom, child, false, out);
            }
        }
        NodeKind::Element { tag } => {
            out.push('<');
            out.push_str(tag);
            // Source order, so serialization matches what a browser would print.
            for (key, value) in node.attrs.iter() {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_html(value, true));
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            let raw_children = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for child in dom.children(id) {
                write_html(dom, child, raw_children, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeKind::Text { text } if raw_text => out.push_str(text),
        NodeKind::Text { text } => out.push_str(&escape_html(text, false)),
        NodeKind::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

impl fmt::Debug for Dom {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                formatter.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_node(
            dom: &Dom,
            id: NodeId,
            formatter: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            let Some(node) = dom.node(id) else {
                return Ok(());
            };
            match &node.kind {
                NodeKind::Document => {
                    write_indent(formatter, depth)?;
                    writeln!(formatter, "#document")?;
                }
                NodeKind::Element { tag } => {
                    write_indent(formatter, depth)?;
                    write!(formatter, "<{tag}")?;
                    for (key, value) in sorted_attrs(node) {
                        write!(formatter, " {key}=\"{}\"", escape_text(value))?;
                    }
                    writeln!(formatter, ">")?;
                }
                NodeKind::Text { text } => {
                    // Skip pure-whitespace text nodes in the printer for cleaner output
                    if text.chars().all(char::is_whitespace) {
                        return Ok(());
                    }
                    write_indent(formatter, depth)?;
                    writeln!(formatter, "\"{}\"", escape_text(text))?;
                    return Ok(());
                }
                NodeKind::Comment { .. } => return Ok(()),
            }
            for child in dom.children(id) {
                fmt_node(dom, child, formatter, depth + 1)?;
            }
            if let NodeKind::Element { tag } = &node.kind {
                write_indent(formatter, depth)?;
                writeln!(formatter, "</{tag}>")?;
            }
            Ok(())
        }

        writeln!(formatter, "DOM")?;
        fmt_node(self, self.root, formatter, 0)
    }
}

impl Dom {
    /// Build a deterministic JSON representation of the DOM.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag": "div", "attrs": {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    ///
    /// Comments are omitted.
    pub fn to_json_value(&self) -> Value {
        node_to_json(self, self.root)
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }

    /// Serialize the document back to HTML markup.
    pub fn to_html_string(&self) -> String {
        let mut out = String::new();
        write_html(self, self.root, false, &mut out);
        out
    }

    /// Serialize the subtree at `id` (including `id` itself), like `outerHTML`.
    pub fn outer_html(&self, id: NodeId) -> String {
        let raw_text = self
            .parent(id)
            .and_then(|parent| self.tag(parent))
            .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
        let mut out = String::new();
        write_html(self, id, raw_text, &mut out);
        out
    }
}
