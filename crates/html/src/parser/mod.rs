//! HTML5 parsing using html5ever.

use crate::dom::{Dom, DomNode};
use anyhow::{Context as _, Error};
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use indextree::NodeId;
use log::trace;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse a full HTML document into a [`Dom`].
///
/// The html5ever tree builder inserts the implied `html`/`head`/`body`
/// elements. Text is kept as parsed, whitespace included. Doctypes and
/// processing instructions are dropped.
///
/// # Errors
/// Returns an error if the input cannot be read by the parser.
pub fn parse_html(html: &str) -> Result<Dom, Error> {
    let rc_dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("failed to parse HTML document")?;
    let mut dom = Dom::new();
    let root = dom.root();
    convert_node(&mut dom, &rc_dom.document, root)?;
    trace!("parsed document with {} arena nodes", dom.arena.count());
    Ok(dom)
}

impl Dom {
    /// See [`parse_html`].
    ///
    /// # Errors
    /// Returns an error if the input cannot be read by the parser.
    pub fn parse_html(html: &str) -> Result<Self, Error> {
        parse_html(html)
    }
}

/// Convert an html5ever node into the arena under `parent`.
fn convert_node(dom: &mut Dom, rc_node: &Handle, parent: NodeId) -> Result<(), Error> {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, parent)?;
            }
        }
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
        RcNodeData::Text { contents } => {
            let node = dom.create_text(&contents.borrow());
            dom.append_child(parent, node)?;
        }
        RcNodeData::Comment { contents } => {
            let node = dom.create_comment(contents);
            dom.append_child(parent, node)?;
        }
        RcNodeData::Element { name, attrs, .. } => {
            let mut data = DomNode::element(&name.local);
            for attr in attrs.borrow().iter() {
                let key = match &attr.name.prefix {
                    Some(prefix) => format!("{prefix}:{}", attr.name.local),
                    None => attr.name.local.to_string(),
                };
                data.attrs.push((key, attr.value.to_string()));
            }
            let node = dom.arena.new_node(data);
            dom.append_child(parent, node)?;
            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, node)?;
            }
        }
    }
    Ok(())
}
