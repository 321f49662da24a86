//! JSON page fixtures.
//!
//! A fixture is a nested element tree; it is loaded into a [`Document`]
//! under the `body` root. Example:
//!
//! ```json
//! { "children": [
//!     { "tag": "form", "class": ["profile-form"], "children": [
//!         { "tag": "input", "id": "semester_cgpa", "value": "11" } ] } ] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{Display, Document, Element, NodeId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "class", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, rename = "attrs", skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

impl PageSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse page fixture")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page fixture {}", path.display()))?;
        Self::from_json(&contents)
    }

    pub fn build(&self) -> Result<Document> {
        let mut doc = Document::new();
        let root = doc.root();
        for child in &self.children {
            append_spec(&mut doc, root, child)?;
        }
        Ok(doc)
    }
}

fn append_spec(doc: &mut Document, parent: NodeId, spec: &ElementSpec) -> Result<()> {
    let mut element = Element::new(&spec.tag).with_value(&spec.value);
    if let Some(ref id) = spec.id {
        element = element.with_id(id);
    }
    for class in &spec.classes {
        element = element.with_class(class);
    }
    for (name, value) in &spec.attributes {
        element = element.with_attr(name, value);
    }
    if let Some(ref display) = spec.display {
        let display = Display::from_css(display)
            .with_context(|| format!("Unsupported display value '{}'", display))?;
        element = element.with_display(display);
    }

    let node = doc.append(parent, element);
    for child in &spec.children {
        append_spec(doc, node, child)?;
    }
    Ok(())
}
