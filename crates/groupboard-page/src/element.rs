//! In-memory element tree.
//!
//! The rendering target is a small tree of elements mirroring the DOM nodes
//! the page mutates: attributes, a class-token list, text content, and
//! children, serialized to HTML at the end of the load. The class-token
//! operations are idempotent so repeated state updates never duplicate a
//! token.

use std::fmt::Write;

/// One element in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an `id` attribute.
    pub fn with_id(tag: impl Into<String>, id: impl Into<String>) -> Self {
        let mut el = Self::new(tag);
        el.set_attr("id", id);
        el
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Returns an attribute value, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a class token if not already present. Adding the same token
    /// twice leaves a single occurrence.
    pub fn add_class(&mut self, class_name: &str) {
        if !self.has_class(class_name) {
            self.classes.push(class_name.to_string());
        }
    }

    /// Removes a class token; no-op if absent.
    pub fn remove_class(&mut self, class_name: &str) {
        self.classes.retain(|c| c != class_name);
    }

    /// Whether the class token is present.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    /// The space-joined class list, as it would serialize.
    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    /// Replaces the element's text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The element's text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// The element's children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to a child by index.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    /// Serializes the element and its subtree to HTML. Text and attribute
    /// values are escaped; the tree is trusted structure, the strings in it
    /// are not.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_list()));
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escapes text for HTML text and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_class_is_idempotent() {
        let mut el = Element::new("a");
        el.add_class("badge");
        el.add_class("badge");
        assert_eq!(el.class_list(), "badge");
    }

    #[test]
    fn remove_class_is_noop_when_absent() {
        let mut el = Element::new("a");
        el.add_class("one");
        el.remove_class("two");
        assert_eq!(el.class_list(), "one");
        el.remove_class("one");
        assert_eq!(el.class_list(), "");
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::new("a");
        el.set_attr("href", "/subscribe/g1");
        el.set_attr("href", "/unsubscribe/g1");
        assert_eq!(el.attr("href"), Some("/unsubscribe/g1"));
        // Still a single attribute in the output.
        assert_eq!(el.to_html().matches("href").count(), 1);
    }

    #[test]
    fn to_html_escapes_text_and_attributes() {
        let mut el = Element::with_id("li", "g1");
        el.set_attr("title", "a \"quoted\" name");
        el.set_text("Fish & <Chips>");
        let html = el.to_html();
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(html.contains("title=\"a &quot;quoted&quot; name\""));
    }

    #[test]
    fn children_serialize_after_text() {
        let mut a = Element::with_id("a", "g1");
        a.set_text("Alpha ");
        let mut span = Element::new("span");
        span.set_text("Not subscribed");
        a.push_child(span);
        assert_eq!(
            a.to_html(),
            "<a id=\"g1\">Alpha <span>Not subscribed</span></a>"
        );
    }
}
