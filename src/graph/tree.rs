//! Display-only tree built alongside the dependency graph.
//!
//! The walker records which role and cookbook expansions it actually entered
//! so the tree mirrors the traversal rather than the full graph: a cookbook
//! that was already expanded contributes an edge to the adjacency mapping
//! but no second subtree here.

/// A sibling-ordered tree of role and cookbook names.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Appends a child and returns a handle to it so the caller can keep
    /// building beneath it.
    pub fn add_child(&mut self, label: impl Into<String>) -> &mut TreeNode {
        self.children.push(TreeNode::new(label));
        let end = self.children.len() - 1;
        &mut self.children[end]
    }

    /// Renders the tree with box-drawing connectors.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.label);
        out.push('\n');
        self.render_children(&mut out, "");
        out
    }

    fn render_children(&self, out: &mut String, prefix: &str) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(&child.label);
            out.push('\n');

            let child_prefix = if last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            child.render_children(out, &child_prefix);
        }
    }
}
