//! Arena-backed element tree standing in for the browser document.

use std::collections::BTreeMap;
use std::fmt;

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Inline `display` style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    TableRow,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::TableRow => "table-row",
        }
    }

    pub fn from_css(s: &str) -> Option<Self> {
        match s.trim() {
            "none" => Some(Display::None),
            "block" => Some(Display::Block),
            "table-row" => Some(Display::TableRow),
            _ => None,
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub value: String,
    pub display: Option<Display>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            value: String::new(),
            display: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Anything not explicitly styled `display: none` counts as visible.
    pub fn is_visible(&self) -> bool {
        self.display != Some(Display::None)
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// In-memory page. Node 0 is always the `body` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                element: Element::new("body"),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            element,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0].element
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0].element
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Descendants of `scope` in document (pre-)order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// First element in document order carrying `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id_within(self.root(), id)
    }

    /// First descendant of `scope` carrying `id`.
    pub fn find_by_id_within(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&n| self.element(n).id.as_deref() == Some(id))
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants_with_class(self.root(), class)
    }

    pub fn descendants_with_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.element(n).has_class(class))
            .collect()
    }

    pub fn descendants_by_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.element(n).tag == tag)
            .collect()
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).attr(name)
    }

    pub fn value(&self, node: NodeId) -> &str {
        &self.element(node).value
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.element_mut(node).value = value.to_string();
    }

    pub fn display(&self, node: NodeId) -> Option<Display> {
        self.element(node).display
    }

    pub fn set_display(&mut self, node: NodeId, display: Display) {
        self.element_mut(node).display = Some(display);
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.element(node).is_visible()
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let element = self.element_mut(node);
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).has_class(class)
    }
}
