//! Labeled tree of spatial reference nodes
//!
//! Every coordinate system definition is held as a tree of `SrsNode`s: a
//! keyword or literal value plus an ordered list of children. Children are
//! owned by their parent. Nodes keep no back-reference; operations that need
//! the parent's identity (WKT quoting) receive it from the caller while
//! walking down from the root.

pub mod wkt;
pub mod ordering;
mod tests;

pub use wkt::{MAX_NESTING_DEPTH, MAX_NODE_COUNT, MAX_TOKEN_LENGTH};

/// A single node in a spatial reference tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SrsNode {
    /// Keyword (`GEOGCS`, `UNIT`, ...) or literal value (`"WGS 84"`, `6378137`)
    value: String,
    /// Ordered child nodes
    children: Vec<SrsNode>,
}

impl SrsNode {
    /// Create a leaf node with the given value
    pub fn new(value: &str) -> Self {
        SrsNode {
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    /// Create a node with the given value and leaf children
    ///
    /// # Arguments
    /// * `value` - Value of the new node
    /// * `leaves` - Values of leaf children, in order
    pub fn with_leaves(value: &str, leaves: &[&str]) -> Self {
        SrsNode {
            value: value.to_string(),
            children: leaves.iter().map(|leaf| SrsNode::new(leaf)).collect(),
        }
    }

    /// The node's value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the node's value
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Case-insensitive comparison of the node's value
    pub fn value_is(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&SrsNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut SrsNode> {
        self.children.get_mut(index)
    }

    /// Value of the child at `index`, if present
    pub fn child_value(&self, index: usize) -> Option<&str> {
        self.children.get(index).map(|c| c.value.as_str())
    }

    pub fn children(&self) -> &[SrsNode] {
        &self.children
    }

    /// Append a child
    pub fn add_child(&mut self, child: SrsNode) {
        self.children.push(child);
    }

    /// Insert a child at `index`, appending when the index is past the end
    pub fn insert_child(&mut self, child: SrsNode, index: usize) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Remove and return the child at `index`
    pub fn destroy_child(&mut self, index: usize) -> Option<SrsNode> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Remove every child
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Index of the first immediate child whose value matches, case-insensitively
    pub fn find_child(&self, value: &str) -> Option<usize> {
        self.children.iter().position(|c| c.value_is(value))
    }

    /// Find a non-leaf node named `name` in this subtree
    ///
    /// The node itself wins when it matches. Otherwise immediate children are
    /// preferred over deeper descendants; deeper matches are searched per
    /// child, in child order.
    pub fn get_node(&self, name: &str) -> Option<&SrsNode> {
        let path = self.find_node_path(name)?;
        self.node_at_path(&path)
    }

    /// Mutable counterpart of `get_node`
    pub fn get_node_mut(&mut self, name: &str) -> Option<&mut SrsNode> {
        let path = self.find_node_path(name)?;
        self.node_at_path_mut(&path)
    }

    /// Child-index path from this node to the `get_node` match
    pub fn find_node_path(&self, name: &str) -> Option<Vec<usize>> {
        if !self.children.is_empty() && self.value_is(name) {
            return Some(Vec::new());
        }

        if let Some(index) = self
            .children
            .iter()
            .position(|c| !c.children.is_empty() && c.value_is(name))
        {
            return Some(vec![index]);
        }

        for (index, child) in self.children.iter().enumerate() {
            if let Some(mut sub_path) = child.find_node_path(name) {
                sub_path.insert(0, index);
                return Some(sub_path);
            }
        }

        None
    }

    /// Follow a child-index path
    pub fn node_at_path(&self, path: &[usize]) -> Option<&SrsNode> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Follow a child-index path mutably
    pub fn node_at_path_mut(&mut self, path: &[usize]) -> Option<&mut SrsNode> {
        let mut node = self;
        for &index in path {
            node = node.children.get_mut(index)?;
        }
        Some(node)
    }

    /// Remove all descendant nodes whose value matches `name`
    pub fn strip_nodes(&mut self, name: &str) {
        self.children.retain(|c| !c.value_is(name));

        for child in &mut self.children {
            child.strip_nodes(name);
        }
    }

    /// Rewrite node values through a source-to-destination table
    ///
    /// # Arguments
    /// * `scope` - When set, only children of nodes with this value (and
    ///   nodes with this value themselves) are rewritten
    /// * `pairs` - `(source, destination)` pairs; an empty destination is skipped
    /// * `child_of_hit` - Whether this node sits directly under a scope match
    pub fn apply_remapper(&mut self, scope: Option<&str>, pairs: &[(&str, &str)], child_of_hit: bool) {
        let in_scope = match scope {
            None => true,
            Some(name) => child_of_hit || self.value_is(name),
        };

        if in_scope {
            if let Some((_, destination)) = pairs
                .iter()
                .find(|(source, destination)| self.value_is(source) && !destination.is_empty())
            {
                self.value = destination.to_string();
            }
        }

        let children_in_scope = match scope {
            None => child_of_hit,
            Some(name) => self.value_is(name),
        };

        for child in &mut self.children {
            child.apply_remapper(scope, pairs, children_in_scope);
        }
    }
}
