//! Parsed template data model

use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// A parsed template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Top-level nodes in source order
    pub nodes: Vec<Node>,
}

impl Template {
    /// Parse a template source
    pub fn parse(source: &str) -> Result<Self> {
        super::parser::TemplateParser::new(source).parse()
    }

    /// Render with a serializable context in lenient mode
    pub fn render<T: Serialize>(&self, context: &T) -> Result<String> {
        let value = serde_json::to_value(context)?;
        super::renderer::Renderer::new().render(self, &value)
    }

    /// Distinct placeholder paths in order of first appearance
    pub fn placeholders(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_placeholders(&self.nodes, &mut found);
        found
    }

    /// Check whether the template has no placeholders at all
    pub fn is_static(&self) -> bool {
        self.nodes.iter().all(|n| matches!(n, Node::Text(_)))
    }
}

fn collect_placeholders(nodes: &[Node], found: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Text(_) => {}
            Node::Expression { path, .. } => push_unique(found, path.as_str()),
            Node::Each(block) => {
                push_unique(found, block.path.as_str());
                collect_placeholders(&block.body, found);
                collect_placeholders(&block.inverse, found);
            }
        }
    }
}

fn push_unique(found: &mut Vec<String>, raw: &str) {
    if !found.iter().any(|f| f == raw) {
        found.push(raw.to_string());
    }
}

/// A node of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal markup
    Text(String),
    /// `{{path}}` (escaped) or `{{{path}}}` (raw)
    Expression { path: Path, escaped: bool },
    /// `{{#each path}} ... {{/each}}`
    Each(EachBlock),
}

/// An `each` block
#[derive(Debug, Clone, PartialEq)]
pub struct EachBlock {
    /// Collection to iterate
    pub path: Path,
    /// Block parameter bound to each item (`as |alias|`)
    pub alias: Option<String>,
    /// Second block parameter, bound to the index or object key (`as |alias index|`)
    pub index_alias: Option<String>,
    /// Rendered once per item
    pub body: Vec<Node>,
    /// Rendered when the collection is empty or missing (`{{else}}`)
    pub inverse: Vec<Node>,
}

/// A placeholder path such as `comment.meta.user_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    raw: String,
    kind: PathKind,
}

/// How a path is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind {
    /// `this` or `this.a.b`: the current context only
    This(Vec<String>),
    /// `a.b.c`: block parameters first, then the current context
    Lookup(Vec<String>),
    /// `@index`, `@key`, `@first`, `@last`
    Data(String),
}

impl Path {
    pub(crate) fn new(raw: impl Into<String>, kind: PathKind) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }

    /// Source text of the path
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resolution kind
    pub fn kind(&self) -> &PathKind {
        &self.kind
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
