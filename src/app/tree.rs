//! Process tree building logic
//!
//! Nodes live in an arena and refer to each other by index, so a parent
//! link never owns anything. Parentage is fixed at build time; afterwards
//! only the `collapsed` flags change.

use std::collections::{HashMap, HashSet};

use crate::system::ProcessRecord;

/// Index of a node in a [`ProcessTree`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub process: ProcessRecord,
    /// None for roots
    pub parent: Option<NodeId>,
    /// Ordered by pid
    pub children: Vec<NodeId>,
    /// Hides the subtree below this node
    pub collapsed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl ProcessTree {
    /// Builds the tree from a flat snapshot.
    ///
    /// A process whose parent is missing from the snapshot becomes a root.
    /// So does a process whose parent chain would loop back to itself,
    /// which stale pid reuse can produce.
    pub fn build(mut processes: Vec<ProcessRecord>) -> Self {
        processes.sort_by_key(|p| p.pid);
        processes.dedup_by_key(|p| p.pid);

        let index: HashMap<u32, NodeId> = processes
            .iter()
            .enumerate()
            .map(|(id, p)| (p.pid, id))
            .collect();

        let mut tree = Self {
            nodes: processes
                .into_iter()
                .map(|process| TreeNode {
                    process,
                    parent: None,
                    children: Vec::new(),
                    collapsed: false,
                })
                .collect(),
            roots: Vec::new(),
        };

        // ids ascend with pid, so children come out ordered by pid
        for id in 0..tree.nodes.len() {
            let parent = tree.nodes[id]
                .process
                .parent_pid
                .and_then(|ppid| index.get(&ppid).copied())
                .filter(|&parent| !tree.is_ancestor_or_self(id, parent));

            match parent {
                Some(parent) => {
                    tree.nodes[id].parent = Some(parent);
                    tree.nodes[parent].children.push(id);
                }
                None => tree.roots.push(id),
            }
        }

        tree
    }

    /// True if `ancestor` is `id` or one of its already linked ancestors.
    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.nodes[node].parent;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn find(&self, pid: u32) -> Option<NodeId> {
        self.nodes
            .binary_search_by_key(&pid, |n| n.process.pid)
            .ok()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id].parent, move |&n| self.nodes[n].parent)
    }

    #[cfg(test)]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    fn is_last_sibling(&self, id: NodeId) -> bool {
        let siblings = match self.nodes[id].parent {
            Some(parent) => &self.nodes[parent].children,
            None => &self.roots,
        };
        siblings.last() == Some(&id)
    }

    /// Branch glyphs in front of a node, two columns per level of depth.
    ///
    /// ```text
    /// init
    /// ├─ sshd
    /// │ └─ bash
    /// └─ cron
    /// ```
    pub fn prefix(&self, id: NodeId) -> String {
        if self.nodes[id].parent.is_none() {
            return String::new();
        }

        let mut parts = vec![if self.is_last_sibling(id) { "└─" } else { "├─" }];
        parts.extend(
            self.ancestors(id)
                .filter(|&a| self.nodes[a].parent.is_some())
                .map(|a| if self.is_last_sibling(a) { "  " } else { "│ " }),
        );
        parts.reverse();
        parts.concat()
    }

    /// Glyph drawn between the prefix and the command: `┼` marks a
    /// collapsed node, `─` continues the branch of a child.
    pub fn marker(&self, id: NodeId) -> &'static str {
        let node = &self.nodes[id];
        if node.collapsed {
            "┼"
        } else if node.parent.is_some() {
            "─"
        } else {
            ""
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.nodes[id].collapsed = true;
    }

    pub fn expand(&mut self, id: NodeId) {
        self.nodes[id].collapsed = false;
    }

    pub fn toggle(&mut self, id: NodeId) {
        if self.nodes[id].collapsed {
            self.expand(id);
        } else {
            self.collapse(id);
        }
    }

    #[cfg(test)]
    /// Number of descendants, regardless of collapse state.
    pub fn descendant_count(&self, id: NodeId) -> usize {
        self.nodes[id]
            .children
            .iter()
            .map(|&child| 1 + self.descendant_count(child))
            .sum()
    }

    /// Pre-order flattening, skipping everything below collapsed nodes.
    pub fn visible(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            let node = &self.nodes[id];
            if !node.collapsed {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// Pids of the collapsed nodes, carried across rebuilds.
    pub fn collapsed_pids(&self) -> HashSet<u32> {
        self.nodes
            .iter()
            .filter(|n| n.collapsed)
            .map(|n| n.process.pid)
            .collect()
    }
}
