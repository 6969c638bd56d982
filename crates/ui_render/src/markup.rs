//! Immutable markup tree emitted by widgets and its HTML serialization.
//!
//! Widgets never build HTML strings directly. They assemble [`Element`] values, which keep
//! attributes in insertion order so the serialized output is deterministic, and leave escaping
//! to [`Markup::to_html`].

use std::fmt;

use serde::Serialize;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Single attribute on an [`Element`]. A missing value renders as a boolean attribute.
pub struct Attr {
    name: String,
    value: Option<String>,
}

impl Attr {
    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, `None` for boolean attributes.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// HTML element node with ordered attributes and child nodes.
pub struct Element {
    tag: String,
    attrs: Vec<Attr>,
    children: Vec<Markup>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing the value in place when the name already exists.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, Some(value.into()));
        self
    }

    /// Sets an attribute only when `value` is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets a boolean attribute such as `disabled`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_attr(name, None);
        self
    }

    /// Sets a boolean attribute only when `enabled` is true.
    pub fn flag_if(self, enabled: bool, name: impl Into<String>) -> Self {
        if enabled {
            self.flag(name)
        } else {
            self
        }
    }

    /// Sets the `id` attribute.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Sets the `class` attribute. An empty class string emits no attribute.
    pub fn class(self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if classes.is_empty() {
            self
        } else {
            self.attr("class", classes)
        }
    }

    /// Appends one child node.
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every node yielded by `children`.
    pub fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// In-place attribute update used by the builder methods.
    pub fn set_attr(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.attrs.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value,
            None => self.attrs.push(Attr { name, value }),
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Direct child nodes.
    pub fn child_nodes(&self) -> &[Markup] {
        &self.children
    }

    /// Returns an attribute value. Boolean attributes read as an empty string.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_deref().unwrap_or(""))
    }

    /// Returns `true` when the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or("").split_whitespace()
    }

    /// Returns `true` when `token` appears in the `class` attribute.
    pub fn has_class(&self, token: &str) -> bool {
        self.class_tokens().any(|candidate| candidate == token)
    }

    /// Returns `true` for elements serialized without a closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// This element and all descendant elements in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for child in &self.children {
            child.collect_elements(out);
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(&attr.name);
            if let Some(value) = &attr.value {
                out.push_str("=\"");
                escape_into(out, value, true);
                out.push('"');
            }
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Node in a rendered widget tree.
pub enum Markup {
    /// HTML element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// Trusted pre-rendered markup (for example icon path bodies), emitted verbatim.
    Raw(String),
    /// Sequence of sibling nodes without a wrapping element.
    Fragment(Vec<Markup>),
}

impl Default for Markup {
    fn default() -> Self {
        Self::Fragment(Vec::new())
    }
}

impl Markup {
    /// Escaped text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Trusted markup emitted verbatim.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Sibling sequence.
    pub fn fragment<I, M>(nodes: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        Self::Fragment(nodes.into_iter().map(Into::into).collect())
    }

    /// Returns the element when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// All elements in the tree in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    /// All elements matching `predicate`, in document order.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// First element whose `id` equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.get_attr("id") == Some(id))
    }

    /// Concatenated text nodes, ignoring raw markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Serializes the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Self::Element(element) => element.collect_elements(out),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_elements(out);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
            Self::Raw(_) => {}
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => escape_into(out, text, false),
            Self::Raw(raw) => out.push_str(raw),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn escape_into(out: &mut String, raw: &str, in_attr: bool) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
