//! Serialization of markup trees and generated source.
//!
//! All escaping lives here. Generators hand over raw labels and keys; the
//! writer decides how each value has to be quoted for the target dialect.

use crate::element::{AttrValue, Element, Node};

/// Indentation unit for generated code.
const INDENT: &str = "  ";

/// JSX elements with more attributes than this get one attribute per line.
const MAX_INLINE_ATTRS: usize = 3;

/// HTML elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img"];

/// Target markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Html,
    Jsx,
}

/// Line-oriented source buffer with indentation tracking.
#[derive(Debug, Default)]
pub struct CodeWriter {
    lines: Vec<String>,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write `open`, the body one level deeper, then `close`.
    pub fn block(&mut self, open: impl AsRef<str>, close: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(open);
        self.indent();
        body(self);
        self.dedent();
        self.line(close);
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Write an element tree.
pub fn write_element(w: &mut CodeWriter, element: &Element, dialect: Dialect) {
    if element.children.is_empty() {
        write_childless(w, element, dialect);
    } else if element.is_inline() {
        w.line(inline_element(element, dialect));
    } else {
        write_open_tag(w, element, dialect, ">");
        w.indent();
        for child in &element.children {
            write_node(w, child, dialect);
        }
        w.dedent();
        w.line(format!("</{}>", element.tag));
    }
}

/// Serialize a tree on its own, starting at depth zero.
pub fn element_to_string(element: &Element, dialect: Dialect) -> String {
    let mut w = CodeWriter::new();
    write_element(&mut w, element, dialect);
    w.finish()
}

fn write_node(w: &mut CodeWriter, node: &Node, dialect: Dialect) {
    match node {
        Node::Element(e) => write_element(w, e, dialect),
        Node::Text(t) => w.line(text(t, dialect)),
        Node::Expr(e) => w.line(format!("{{{e}}}")),
        Node::Conditional { condition, body } => {
            w.block(format!("{{{condition} && ("), ")}", |w| {
                write_element(w, body, dialect)
            });
        }
    }
}

fn write_childless(w: &mut CodeWriter, element: &Element, dialect: Dialect) {
    match dialect {
        Dialect::Jsx => write_open_tag(w, element, dialect, " />"),
        Dialect::Html if VOID_ELEMENTS.contains(&element.tag.as_str()) => {
            w.line(format!("<{}{} />", element.tag, attrs_inline(element, dialect)))
        }
        Dialect::Html => w.line(format!(
            "<{}{}></{}>",
            element.tag,
            attrs_inline(element, dialect),
            element.tag
        )),
    }
}

/// Opening tag, one attribute per line when a JSX element has many.
fn write_open_tag(w: &mut CodeWriter, element: &Element, dialect: Dialect, end: &str) {
    if dialect == Dialect::Jsx && element.attrs.len() > MAX_INLINE_ATTRS {
        w.line(format!("<{}", element.tag));
        w.indent();
        for attr in &element.attrs {
            w.line(attr_to_string(&attr.name, &attr.value, dialect));
        }
        w.dedent();
        w.line(end.trim_start());
    } else {
        w.line(format!("<{}{}{}", element.tag, attrs_inline(element, dialect), end));
    }
}

fn inline_element(element: &Element, dialect: Dialect) -> String {
    let open = format!("<{}{}", element.tag, attrs_inline(element, dialect));
    if element.children.is_empty() {
        return format!("{open} />");
    }
    let mut out = format!("{open}>");
    for child in &element.children {
        match child {
            Node::Element(e) => out.push_str(&inline_element(e, dialect)),
            Node::Text(t) => out.push_str(&text(t, dialect)),
            Node::Expr(e) => out.push_str(&format!("{{{e}}}")),
            Node::Conditional { condition, body } => out.push_str(&format!(
                "{{{condition} && {}}}",
                inline_element(body, dialect)
            )),
        }
    }
    out.push_str(&format!("</{}>", element.tag));
    out
}

fn attrs_inline(element: &Element, dialect: Dialect) -> String {
    element
        .attrs
        .iter()
        .map(|a| format!(" {}", attr_to_string(&a.name, &a.value, dialect)))
        .collect()
}

fn attr_to_string(name: &str, value: &AttrValue, dialect: Dialect) -> String {
    match (value, dialect) {
        (AttrValue::Flag, _) => name.to_string(),
        (AttrValue::Str(v), Dialect::Html) | (AttrValue::Expr(v), Dialect::Html) => {
            format!("{name}=\"{}\"", escape_html(v))
        }
        (AttrValue::Str(v), Dialect::Jsx) if v.contains(['"', '&']) => {
            format!("{name}={{{}}}", js_string(v))
        }
        (AttrValue::Str(v), Dialect::Jsx) => format!("{name}=\"{v}\""),
        (AttrValue::Expr(e), Dialect::Jsx) => format!("{name}={{{e}}}"),
    }
}

fn text(t: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Html => escape_html(t),
        Dialect::Jsx if t.contains(['{', '}', '<', '>', '&']) => format!("{{{}}}", js_string(t)),
        Dialect::Jsx => t.to_string(),
    }
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A double-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Whether `s` can be written as a bare property name or identifier.
pub fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A property key in an object literal or interface.
pub fn js_key(key: &str) -> String {
    if is_js_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Property access on `object`: `object.key` or `object["key"]`.
pub fn js_member(object: &str, key: &str) -> String {
    if is_js_identifier(key) {
        format!("{object}.{key}")
    } else {
        format!("{object}[{}]", js_string(key))
    }
}
