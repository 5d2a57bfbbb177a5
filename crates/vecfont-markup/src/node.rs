//! The markup tree

use std::fmt;

/// What a markup node stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Text(String),
    Variable {
        namespace: Option<String>,
        name: String,
    },
    Superscript,
    Subscript,
    Overbar,
}

/// One node of a parsed markup string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub kind: NodeKind,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn root(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Root, children)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::with_children(NodeKind::Text(text.into()), Vec::new())
    }

    pub fn variable(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self::with_children(
            NodeKind::Variable {
                namespace: namespace.map(str::to_owned),
                name: name.into(),
            },
            Vec::new(),
        )
    }

    pub fn superscript(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Superscript, children)
    }

    pub fn subscript(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Subscript, children)
    }

    pub fn overbar(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Overbar, children)
    }

    fn with_children(kind: NodeKind, children: Vec<MarkupNode>) -> Self {
        Self { kind, children }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, NodeKind::Variable { .. })
    }

    pub fn is_superscript(&self) -> bool {
        matches!(self.kind, NodeKind::Superscript)
    }

    pub fn is_subscript(&self) -> bool {
        matches!(self.kind, NodeKind::Subscript)
    }

    pub fn is_overbar(&self) -> bool {
        matches!(self.kind, NodeKind::Overbar)
    }

    /// Text of a text node, `None` for every other kind
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Display text of the whole subtree
    ///
    /// Spans contribute their content only; variables come back as
    /// `${name}` or `${namespace:name}`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Variable { namespace, name } => {
                out.push_str("${");
                if let Some(ns) = namespace {
                    out.push_str(ns);
                    out.push(':');
                }
                out.push_str(name);
                out.push('}');
            }
            _ => {
                for child in &self.children {
                    child.write_plain(out);
                }
            }
        }
    }

    /// Does any node of the subtree need more than plain text rendering?
    pub fn has_spans(&self) -> bool {
        self.children
            .iter()
            .any(|c| !c.is_text() || c.has_spans())
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        match &self.kind {
            NodeKind::Root => writeln!(f, "root")?,
            NodeKind::Text(text) => writeln!(f, "text {text:?}")?,
            NodeKind::Variable {
                namespace: Some(ns),
                name,
            } => writeln!(f, "variable {ns}:{name}")?,
            NodeKind::Variable {
                namespace: None,
                name,
            } => writeln!(f, "variable {name}")?,
            NodeKind::Superscript => writeln!(f, "superscript")?,
            NodeKind::Subscript => writeln!(f, "subscript")?,
            NodeKind::Overbar => writeln!(f, "overbar")?,
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree dump, one node per line
impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
