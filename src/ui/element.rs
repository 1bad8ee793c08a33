use indexmap::IndexMap;
use serde::Serialize;

/// Attribute carrying the stable selector end-to-end scenarios locate nodes by.
pub const TEST_ID_ATTR: &str = "data-cy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Form,
    Heading,
    Field,
    Label,
    Input,
    Help,
    Button,
}

/// A node of the rendered view.
///
/// The tree is what the renderer draws and what tests inspect; attributes
/// keep insertion order so forwarded attributes come out as they went in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            text: None,
            focused: false,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_attrs<'a>(mut self, attrs: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        for (name, value) in attrs {
            self.attrs.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn test_id(&self) -> Option<&str> {
        self.attr(TEST_ID_ATTR)
    }

    /// Depth-first search including `self`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(predicate, out);
        }
    }

    pub fn by_test_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.test_id() == Some(id))
    }

    pub fn by_tag(&self, tag: Tag) -> Vec<&Element> {
        let mut out = Vec::new();
        self.find_all(&|el| el.tag == tag, &mut out);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
