//! Markup tree for generated forms.
//!
//! Generators describe their output as elements carrying raw data (labels,
//! keys, JS expressions). Nothing here is escaped; escaping happens once, in
//! the writer that serializes the tree.

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A literal string, quoted and escaped by the writer.
    Str(String),
    /// A JavaScript expression, written as `{expr}` in JSX.
    Expr(String),
    /// A boolean attribute written by name only.
    Flag,
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped by the writer.
    Text(String),
    /// A JavaScript expression in child position, written as `{expr}`.
    Expr(String),
    /// `{condition && ( ... )}`: renders the element only when the
    /// condition is truthy.
    Conditional { condition: String, body: Box<Element> },
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a string attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name: name.into(),
            value: AttrValue::Str(value.into()),
        });
        self
    }

    /// Add an expression attribute.
    pub fn expr_attr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name: name.into(),
            value: AttrValue::Expr(expr.into()),
        });
        self
    }

    /// Add a boolean attribute when `on` is true.
    pub fn flag_if(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attrs.push(Attr {
                name: name.into(),
                value: AttrValue::Flag,
            });
        }
        self
    }

    /// Add a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Add text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Add an expression child.
    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.children.push(Node::Expr(expr.into()));
        self
    }

    /// Add a conditionally rendered child.
    pub fn conditional(mut self, condition: impl Into<String>, body: Element) -> Self {
        self.children.push(Node::Conditional {
            condition: condition.into(),
            body: Box::new(body),
        });
        self
    }

    /// Elements with text or expression children are written on one line.
    pub fn is_inline(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, Node::Text(_) | Node::Expr(_)))
    }
}
