// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Search nodes and the parent-linked arena
//!
//! Every node in the completion tree records the bin it just closed, the
//! items still unplaced, the waste accumulated so far, and a link to its
//! parent. Nodes live in a flat arena addressed by `NodeIndex`, so a
//! finished search reconstructs the solution by walking parent links
//! instead of keeping bin lists on a call stack.
//!
//! The arena only ever grows during a solve. `clear` drops the nodes but
//! keeps the allocation, letting a solver instance be reused across
//! instances without churn.

use stevedore_core::{
    num::{constants::Zero, solver::SolverNumeric},
    utils::index::{TypedIndex, TypedIndexTag},
};
use stevedore_model::index::ItemIndex;

/// A tag type for completion node indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeIndexTag;

impl TypedIndexTag for NodeIndexTag {
    const NAME: &'static str = "NodeIndex";
}

/// A typed index for completion nodes.
pub type NodeIndex = TypedIndex<NodeIndexTag>;

/// One node of the completion tree.
#[derive(Debug, Clone)]
pub struct CompletionNode<T> {
    /// The bin closed on the way to this node. Empty for the root.
    bin: Vec<ItemIndex>,
    /// Unplaced items, sorted by size descending.
    tail: Vec<ItemIndex>,
    /// Total slack of all bins closed on the path to this node.
    accumulated_waste: T,
    /// Number of bins closed on the path to this node.
    depth: usize,
    /// The parent node, `None` for the root.
    parent: Option<NodeIndex>,
}

impl<T> CompletionNode<T>
where
    T: SolverNumeric,
{
    /// Returns the bin closed on the way to this node.
    #[inline]
    pub fn bin(&self) -> &[ItemIndex] {
        &self.bin
    }

    /// Returns the unplaced items, largest first.
    #[inline]
    pub fn tail(&self) -> &[ItemIndex] {
        &self.tail
    }

    /// Returns the waste accumulated along the path to this node.
    #[inline(always)]
    pub fn accumulated_waste(&self) -> T {
        self.accumulated_waste
    }

    /// Returns the number of bins closed along the path to this node.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the parent of this node, `None` for the root.
    #[inline(always)]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }
}

/// A flat arena of completion nodes.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<CompletionNode<T>>,
}

impl<T> NodeArena<T>
where
    T: SolverNumeric,
{
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an arena with room for roughly one node per item.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Installs the root node holding the full tail and returns its index.
    pub fn root(&mut self, tail: Vec<ItemIndex>) -> NodeIndex {
        debug_assert!(
            self.nodes.is_empty(),
            "called `NodeArena::root` on a non-empty arena with {} nodes",
            self.nodes.len()
        );
        self.nodes.push(CompletionNode {
            bin: Vec::new(),
            tail,
            accumulated_waste: T::ZERO,
            depth: 0,
            parent: None,
        });
        NodeIndex::new(0)
    }

    /// Adds a child node and returns its index.
    pub fn push_child(
        &mut self,
        parent: NodeIndex,
        bin: Vec<ItemIndex>,
        tail: Vec<ItemIndex>,
        accumulated_waste: T,
    ) -> NodeIndex {
        debug_assert!(
            parent.get() < self.nodes.len(),
            "called `NodeArena::push_child` with parent index out of bounds: the len is {} but the index is {}",
            self.nodes.len(),
            parent.get()
        );
        let depth = self.nodes[parent.get()].depth + 1;
        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(CompletionNode {
            bin,
            tail,
            accumulated_waste,
            depth,
            parent: Some(parent),
        });
        index
    }

    /// Returns the node at the given index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> &CompletionNode<T> {
        debug_assert!(
            index.get() < self.nodes.len(),
            "called `NodeArena::get` with node index out of bounds: the len is {} but the index is {}",
            self.nodes.len(),
            index.get()
        );
        &self.nodes[index.get()]
    }

    /// Returns the number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops all nodes but keeps the allocation for the next solve.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Rebuilds the bin lists along the path from the root to `node`,
    /// appending `final_bin` as the last bin.
    ///
    /// The root's empty bin is skipped; bins come out in the order they
    /// were closed during the descent.
    pub fn reconstruct(&self, node: NodeIndex, final_bin: Vec<ItemIndex>) -> Vec<Vec<ItemIndex>> {
        let mut bins = vec![final_bin];
        let mut cursor = Some(node);
        while let Some(index) = cursor {
            let current = self.get(index);
            if current.parent.is_some() {
                bins.push(current.bin.clone());
            }
            cursor = current.parent;
        }
        bins.reverse();
        bins
    }
}

impl<T> Default for NodeArena<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}
