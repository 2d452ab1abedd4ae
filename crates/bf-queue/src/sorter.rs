//! `DistanceTree`: scratch binary search tree keyed on depot distance.
//!
//! Built fresh for each ordering pass, walked once in order, then dropped.
//! Nodes live in a `Vec` arena and link by index, so there is no per-node
//! allocation and nothing to free by hand.
//!
//! Insertion goes left only when the new distance is strictly smaller than the
//! node's; equal distances go right.  An in-order walk therefore yields equal
//! distances in insertion order.

use bf_core::Bin;

struct Node<'a> {
    bin:   &'a Bin,
    left:  Option<usize>,
    right: Option<usize>,
}

/// Unbalanced BST over borrowed bins, ordered by `distance_km`.
#[derive(Default)]
pub struct DistanceTree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> DistanceTree<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert `bin` below the root.
    pub fn insert(&mut self, bin: &'a Bin) {
        let new_idx = self.nodes.len();
        self.nodes.push(Node { bin, left: None, right: None });
        if new_idx == 0 {
            return;
        }

        let mut cur = 0;
        loop {
            let node = &mut self.nodes[cur];
            let slot = if bin.distance_km() < node.bin.distance_km() {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => cur = next,
                None => {
                    *slot = Some(new_idx);
                    return;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bins in ascending distance (in-order walk).  Iterative, so a
    /// degenerate tree built from pre-sorted input cannot overflow the stack.
    pub fn in_order(&self) -> Vec<&'a Bin> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = Vec::new();
        let mut cur = if self.nodes.is_empty() { None } else { Some(0) };

        while cur.is_some() || !stack.is_empty() {
            while let Some(idx) = cur {
                stack.push(idx);
                cur = self.nodes[idx].left;
            }
            if let Some(idx) = stack.pop() {
                out.push(self.nodes[idx].bin);
                cur = self.nodes[idx].right;
            }
        }
        out
    }
}
