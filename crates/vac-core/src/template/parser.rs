//! Template source parser

use super::model::{EachBlock, Node, Path, PathKind, Template};
use crate::error::{Result, VacError};

/// Data variables available inside `each` blocks
const DATA_VARIABLES: [&str; 4] = ["index", "key", "first", "last"];

/// A single `{{ ... }}` tag
#[derive(Debug, PartialEq)]
enum Tag<'s> {
    Comment,
    Expression { content: &'s str, escaped: bool },
    Open(&'s str),
    Close(&'s str),
    Else,
}

/// An `each` block whose closing tag has not been seen yet
struct OpenBlock {
    offset: usize,
    path: Path,
    alias: Option<String>,
    index_alias: Option<String>,
    body: Vec<Node>,
    inverse: Vec<Node>,
    in_inverse: bool,
}

impl OpenBlock {
    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        if self.in_inverse {
            &mut self.inverse
        } else {
            &mut self.body
        }
    }

    fn build(self) -> Node {
        Node::Each(EachBlock {
            path: self.path,
            alias: self.alias,
            index_alias: self.index_alias,
            body: self.body,
            inverse: self.inverse,
        })
    }
}

/// Parser for template sources
pub(crate) struct TemplateParser<'s> {
    source: &'s str,
    root: Vec<Node>,
    stack: Vec<OpenBlock>,
}

impl<'s> TemplateParser<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        Self {
            source,
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Template> {
        let mut pos = 0;

        while let Some(rel) = self.source[pos..].find("{{") {
            let start = pos + rel;
            if start > pos {
                self.push(Node::Text(self.source[pos..start].to_string()));
            }

            let (tag, end) = self.read_tag(start)?;
            pos = end;

            match tag {
                Tag::Comment => {}
                Tag::Expression { content, escaped } => {
                    let path = parse_path(content, start)?;
                    self.push(Node::Expression { path, escaped });
                }
                Tag::Open(content) => {
                    let block = parse_open(content, start)?;
                    self.stack.push(block);
                }
                Tag::Close(name) => self.close(name, start)?,
                Tag::Else => {
                    let block = self
                        .stack
                        .last_mut()
                        .ok_or_else(|| VacError::syntax(start, "{{else}} outside of a block"))?;
                    if block.in_inverse {
                        return Err(VacError::syntax(start, "duplicate {{else}} in block"));
                    }
                    block.in_inverse = true;
                }
            }
        }

        if pos < self.source.len() {
            self.push(Node::Text(self.source[pos..].to_string()));
        }

        if let Some(block) = self.stack.pop() {
            return Err(VacError::syntax(
                block.offset,
                format!("unclosed block 'each {}'", block.path),
            ));
        }

        Ok(Template { nodes: self.root })
    }

    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(block) => block.nodes_mut().push(node),
            None => self.root.push(node),
        }
    }

    fn close(&mut self, name: &str, offset: usize) -> Result<()> {
        let block = self.stack.pop().ok_or_else(|| {
            VacError::syntax(offset, format!("closing tag '{{{{/{}}}}}' without open block", name))
        })?;

        if name != "each" {
            return Err(VacError::syntax(
                offset,
                format!("expected '{{{{/each}}}}', found '{{{{/{}}}}}'", name),
            ));
        }

        let node = block.build();
        self.push(node);
        Ok(())
    }

    /// Read the tag starting at `start`; returns the tag and the offset just past it
    fn read_tag(&self, start: usize) -> Result<(Tag<'s>, usize)> {
        let source = self.source;
        let rest = &source[start..];

        if rest.starts_with("{{!--") {
            let close = find_from(source, start + 5, "--}}")
                .ok_or_else(|| VacError::syntax(start, "unterminated comment"))?;
            return Ok((Tag::Comment, close + 4));
        }

        if rest.starts_with("{{!") {
            let close = find_from(source, start + 3, "}}")
                .ok_or_else(|| VacError::syntax(start, "unterminated comment"))?;
            return Ok((Tag::Comment, close + 2));
        }

        if rest.starts_with("{{{") {
            let close = find_from(source, start + 3, "}}}")
                .ok_or_else(|| VacError::syntax(start, "unterminated tag '{{{'"))?;
            let content = source[start + 3..close].trim();
            if content.is_empty() {
                return Err(VacError::syntax(start, "empty expression"));
            }
            return Ok((
                Tag::Expression {
                    content,
                    escaped: false,
                },
                close + 3,
            ));
        }

        let close = find_from(source, start + 2, "}}")
            .ok_or_else(|| VacError::syntax(start, "unterminated tag '{{'"))?;
        let content = source[start + 2..close].trim();
        let end = close + 2;

        let tag = if content.is_empty() {
            return Err(VacError::syntax(start, "empty expression"));
        } else if let Some(open) = content.strip_prefix('#') {
            Tag::Open(open.trim())
        } else if let Some(name) = content.strip_prefix('/') {
            Tag::Close(name.trim())
        } else if content == "else" {
            Tag::Else
        } else {
            Tag::Expression {
                content,
                escaped: true,
            }
        };

        Ok((tag, end))
    }
}

fn find_from(source: &str, from: usize, needle: &str) -> Option<usize> {
    source[from..].find(needle).map(|i| from + i)
}

/// Parse the inside of `{{#each path [as |alias [index]|]}}`
fn parse_open(content: &str, offset: usize) -> Result<OpenBlock> {
    let tokens: Vec<&str> = content.split_whitespace().collect();

    let helper = tokens.first().copied().unwrap_or_default();
    if helper != "each" {
        return Err(VacError::syntax(
            offset,
            format!("unknown block helper '{}'", helper),
        ));
    }

    let path = match tokens.get(1) {
        Some(raw) => parse_path(raw, offset)?,
        None => return Err(VacError::syntax(offset, "'each' requires a collection path")),
    };

    let (alias, index_alias) = if tokens.len() > 2 {
        let (alias, index_alias) = parse_block_params(&tokens[2..].join(" "), offset)?;
        (Some(alias), index_alias)
    } else {
        (None, None)
    };

    Ok(OpenBlock {
        offset,
        path,
        alias,
        index_alias,
        body: Vec::new(),
        inverse: Vec::new(),
        in_inverse: false,
    })
}

/// Parse `as |item|` or `as |item index|`
fn parse_block_params(params: &str, offset: usize) -> Result<(String, Option<String>)> {
    let malformed = || {
        VacError::syntax(
            offset,
            format!(
                "malformed block parameters '{}', expected 'as |item|' or 'as |item index|'",
                params
            ),
        )
    };

    let rest = params.strip_prefix("as").ok_or_else(malformed)?.trim();
    let names: Vec<&str> = rest
        .strip_prefix('|')
        .and_then(|r| r.strip_suffix('|'))
        .ok_or_else(malformed)?
        .split_whitespace()
        .collect();

    if names.iter().any(|n| !is_identifier(n)) {
        return Err(malformed());
    }

    match names.as_slice() {
        [item] => Ok((item.to_string(), None)),
        [item, index] if item != index => Ok((item.to_string(), Some(index.to_string()))),
        _ => Err(malformed()),
    }
}

/// Parse a dotted path expression
fn parse_path(raw: &str, offset: usize) -> Result<Path> {
    if raw.contains(char::is_whitespace) {
        return Err(VacError::syntax(
            offset,
            format!("helpers are not supported in expression '{}'", raw),
        ));
    }

    if let Some(name) = raw.strip_prefix('@') {
        if !DATA_VARIABLES.contains(&name) {
            return Err(VacError::syntax(
                offset,
                format!("unknown data variable '@{}'", name),
            ));
        }
        return Ok(Path::new(raw, PathKind::Data(name.to_string())));
    }

    let segments: Vec<&str> = raw.split('.').collect();
    if segments.iter().any(|s| !is_identifier(s)) {
        return Err(VacError::syntax(offset, format!("invalid path '{}'", raw)));
    }

    let kind = if segments[0] == "this" {
        PathKind::This(segments[1..].iter().map(|s| s.to_string()).collect())
    } else {
        PathKind::Lookup(segments.iter().map(|s| s.to_string()).collect())
    };

    Ok(Path::new(raw, kind))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '-')
}
