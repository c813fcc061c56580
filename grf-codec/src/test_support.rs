//! In-memory [`TreeWriter`] for asserting on document structure.

use crate::error::WriteError;
use crate::writer::TreeWriter;

/// One recorded element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Element name.
    pub name: String,
    /// Attributes in writing order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content.
    pub text: String,
    /// Child elements in writing order.
    pub children: Vec<Node>,
}

impl Node {
    /// Value of the attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child called `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Children called `name`, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Descend through first children matching each name in `path`.
    #[must_use]
    pub fn path(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Text of the first child called `name`.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }

    /// Names of the direct children, in order.
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.name.as_str()).collect()
    }
}

/// Records written elements as a [`Node`] tree.
///
/// Several top-level elements may be written; [`TreeRecorder::into_root`]
/// returns the first.
#[derive(Debug, Default)]
pub struct TreeRecorder {
    stack: Vec<Node>,
    roots: Vec<Node>,
    events: usize,
}

impl TreeRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            roots: Vec::new(),
            events: 0,
        }
    }

    /// Whether no call reached the recorder.
    #[must_use]
    pub const fn is_untouched(&self) -> bool {
        self.events == 0
    }

    /// Completed top-level elements.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// First completed top-level element.
    #[must_use]
    pub fn into_root(self) -> Option<Node> {
        self.roots.into_iter().next()
    }

    /// All completed top-level elements.
    #[must_use]
    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }
}

impl TreeWriter for TreeRecorder {
    fn start_element(&mut self, name: &str) -> Result<(), WriteError> {
        self.events += 1;
        self.stack.push(Node {
            name: name.to_owned(),
            ..Node::default()
        });
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.events += 1;
        let node = self
            .stack
            .last_mut()
            .filter(|node| node.text.is_empty() && node.children.is_empty())
            .ok_or_else(|| WriteError::AttributeOutsideStartTag {
                name: name.to_owned(),
            })?;
        node.attributes.push((name.to_owned(), value.to_owned()));
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<(), WriteError> {
        self.events += 1;
        let node = self.stack.last_mut().ok_or(WriteError::UnbalancedEnd)?;
        node.text.push_str(value);
        Ok(())
    }

    fn end_element(&mut self) -> Result<(), WriteError> {
        self.events += 1;
        let node = self.stack.pop().ok_or(WriteError::UnbalancedEnd)?;
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
        Ok(())
    }
}
