//! Node arena for the search tree
//!
//! Every page discovered during one search becomes a [`Node`] in an
//! append-only arena. Parent links are indices into the arena rather than
//! references, so nodes can be handed across workers freely and the parent
//! chain stays walkable after the pool has shut down. Nodes are never
//! mutated and never freed individually; the whole arena is dropped with
//! the search.

use std::sync::RwLock;

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One discovered page in the search tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Canonical article URL
    pub url: String,

    /// Distance from the start article; the root is 0
    pub depth: u32,

    /// Parent in the search tree; `None` only for the root
    pub parent: Option<NodeId>,
}

/// Append-only arena holding every node of one search
///
/// Appends take the write lock; reads of already constructed nodes only
/// contend with appends, never with each other.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: RwLock<Vec<Node>>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id
    ///
    /// Callers must hold a successful Visited-Set admission for `url`;
    /// the arena itself does not deduplicate.
    pub fn alloc(&self, url: String, depth: u32, parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.write().unwrap();
        nodes.push(Node { url, depth, parent });
        NodeId(nodes.len() - 1)
    }

    /// Returns a copy of the node with the given id
    pub fn get(&self, id: NodeId) -> Node {
        self.nodes.read().unwrap()[id.0].clone()
    }

    /// Number of nodes constructed so far
    pub fn len(&self) -> usize {
        self.nodes.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks parent links from `id` back to the root and returns the chain
    /// in root-to-target order
    ///
    /// The returned sequence has length `target.depth + 1` and consecutive
    /// entries differ in depth by exactly one.
    pub fn path_from_root(&self, id: NodeId) -> Vec<Node> {
        let nodes = self.nodes.read().unwrap();

        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            let node = &nodes[i.0];
            chain.push(node.clone());
            current = node.parent;
        }

        chain.reverse();
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let arena = NodeArena::new();
        let root = arena.alloc("https://en.wikipedia.org/wiki/A".to_string(), 0, None);

        let node = arena.get(root);
        assert_eq!(node.url, "https://en.wikipedia.org/wiki/A");
        assert_eq!(node.depth, 0);
        assert_eq!(node.parent, None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_path_from_root_order_and_length() {
        let arena = NodeArena::new();
        let a = arena.alloc("https://en.wikipedia.org/wiki/A".to_string(), 0, None);
        let b = arena.alloc("https://en.wikipedia.org/wiki/B".to_string(), 1, Some(a));
        let c = arena.alloc("https://en.wikipedia.org/wiki/C".to_string(), 2, Some(b));

        let path = arena.path_from_root(c);
        assert_eq!(path.len(), 3);

        let urls: Vec<&str> = path.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://en.wikipedia.org/wiki/A",
                "https://en.wikipedia.org/wiki/B",
                "https://en.wikipedia.org/wiki/C",
            ]
        );

        for window in path.windows(2) {
            assert_eq!(window[1].depth, window[0].depth + 1);
        }
    }

    #[test]
    fn test_path_from_root_single_node() {
        let arena = NodeArena::new();
        let root = arena.alloc("https://en.wikipedia.org/wiki/A".to_string(), 0, None);

        let path = arena.path_from_root(root);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].depth, 0);
    }

    #[test]
    fn test_branches_share_a_parent() {
        let arena = NodeArena::new();
        let root = arena.alloc("https://en.wikipedia.org/wiki/A".to_string(), 0, None);
        let left = arena.alloc("https://en.wikipedia.org/wiki/L".to_string(), 1, Some(root));
        let right = arena.alloc("https://en.wikipedia.org/wiki/R".to_string(), 1, Some(root));

        assert_eq!(arena.path_from_root(left)[0].url, arena.get(root).url);
        assert_eq!(arena.path_from_root(right)[0].url, arena.get(root).url);
    }
}
