//! Template renderer

use super::model::{EachBlock, Node, Path, PathKind, Template};
use crate::error::{Result, VacError};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Escape text for inclusion in HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out
}

/// Per-iteration data variables of an `each` block
#[derive(Debug, Clone)]
struct IterationData {
    index: usize,
    key: Option<String>,
    first: bool,
    last: bool,
}

impl IterationData {
    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "index" => Some(Value::from(self.index)),
            "key" => self.key.clone().map(Value::String),
            "first" => Some(Value::Bool(self.first)),
            "last" => Some(Value::Bool(self.last)),
            _ => None,
        }
    }
}

/// One level of the context stack
struct Scope<'a> {
    context: &'a Value,
    alias: Option<(&'a str, &'a Value)>,
    index_alias: Option<(&'a str, Value)>,
    data: Option<IterationData>,
}

impl<'a> Scope<'a> {
    fn root(context: &'a Value) -> Self {
        Self {
            context,
            alias: None,
            index_alias: None,
            data: None,
        }
    }
}

/// Renders parsed templates against JSON contexts
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    strict: bool,
}

impl Renderer {
    /// Create a lenient renderer: missing values render as empty text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that fails on missing or non-text values
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check whether strict mode is enabled
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Render a template
    pub fn render(&self, template: &Template, context: &Value) -> Result<String> {
        let mut out = String::new();
        let mut scopes = vec![Scope::root(context)];
        self.render_nodes(&template.nodes, &mut scopes, &mut out)?;
        Ok(out)
    }

    fn render_nodes<'a>(
        &self,
        nodes: &'a [Node],
        scopes: &mut Vec<Scope<'a>>,
        out: &mut String,
    ) -> Result<()> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Expression { path, escaped } => {
                    let resolved = resolve(path, scopes);
                    if let Some(text) = self.to_text(path, resolved.as_deref())? {
                        if *escaped {
                            out.push_str(&escape_html(&text));
                        } else {
                            out.push_str(&text);
                        }
                    }
                }
                Node::Each(block) => self.render_each(block, scopes, out)?,
            }
        }
        Ok(())
    }

    fn render_each<'a>(
        &self,
        block: &'a EachBlock,
        scopes: &mut Vec<Scope<'a>>,
        out: &mut String,
    ) -> Result<()> {
        // Data variables resolve to owned scalars, which are never iterable.
        let collection = match resolve(&block.path, scopes) {
            Some(Cow::Borrowed(value)) => Some(value),
            Some(Cow::Owned(_)) | None => None,
        };

        let items: Vec<(Option<String>, &'a Value)> = match collection {
            Some(Value::Array(items)) => items.iter().map(|v| (None, v)).collect(),
            Some(Value::Object(map)) => map.iter().map(|(k, v)| (Some(k.clone()), v)).collect(),
            None | Some(Value::Null) | Some(Value::Bool(false)) => Vec::new(),
            Some(_) if self.strict => {
                return Err(VacError::NotRenderable(block.path.to_string()));
            }
            Some(_) => Vec::new(),
        };

        if items.is_empty() {
            debug!("each '{}' has no items", block.path);
            return self.render_nodes(&block.inverse, scopes, out);
        }

        let count = items.len();
        for (index, (key, item)) in items.into_iter().enumerate() {
            let position = match &key {
                Some(key) => Value::String(key.clone()),
                None => Value::from(index),
            };
            scopes.push(Scope {
                context: item,
                alias: block.alias.as_deref().map(|name| (name, item)),
                index_alias: block.index_alias.as_deref().map(|name| (name, position)),
                data: Some(IterationData {
                    index,
                    key,
                    first: index == 0,
                    last: index + 1 == count,
                }),
            });
            let result = self.render_nodes(&block.body, scopes, out);
            scopes.pop();
            result?;
        }

        Ok(())
    }

    fn to_text(&self, path: &Path, value: Option<&Value>) -> Result<Option<String>> {
        match value {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            None | Some(Value::Null) => {
                if self.strict {
                    Err(VacError::MissingValue(path.to_string()))
                } else {
                    debug!("placeholder '{}' has no value", path);
                    Ok(None)
                }
            }
            Some(Value::Array(_)) | Some(Value::Object(_)) => {
                if self.strict {
                    Err(VacError::NotRenderable(path.to_string()))
                } else {
                    debug!("placeholder '{}' is not a scalar", path);
                    Ok(None)
                }
            }
        }
    }
}

fn resolve<'a>(path: &Path, scopes: &[Scope<'a>]) -> Option<Cow<'a, Value>> {
    match path.kind() {
        PathKind::Data(name) => scopes
            .iter()
            .rev()
            .find_map(|s| s.data.as_ref())
            .and_then(|data| data.get(name))
            .map(Cow::Owned),
        PathKind::This(segments) => {
            let context = scopes.last()?.context;
            walk(context, segments).map(Cow::Borrowed)
        }
        PathKind::Lookup(segments) => {
            let (first, rest) = segments.split_first()?;
            for scope in scopes.iter().rev() {
                if let Some((name, value)) = scope.alias {
                    if name == first.as_str() {
                        return walk(value, rest).map(Cow::Borrowed);
                    }
                }
                if let Some((name, position)) = &scope.index_alias {
                    if *name == first.as_str() {
                        return walk(position, rest).map(|v| Cow::Owned(v.clone()));
                    }
                }
            }
            let context = scopes.last()?.context;
            walk(context, segments).map(Cow::Borrowed)
        }
    }
}

fn walk<'a>(mut value: &'a Value, segments: &[String]) -> Option<&'a Value> {
    for segment in segments {
        value = match value {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(value)
}
