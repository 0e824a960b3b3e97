// huffman_code/src/tree.rs

//! Huffman tree nodes and the frequency-driven tree builder.

use std::collections::BTreeMap;

use contracts::*;
use tracing::{debug, instrument, trace};

use crate::error::{HuffmanError, Result};
use crate::priority_queue::MinPriorityQueue;

/// A tree node: either a leaf carrying a symbol or an internal merge point.
///
/// A well-formed leaf has a symbol and no children; a well-formed internal
/// node has two children and no symbol. [`Node::leaf`] and [`Node::internal`]
/// only build well-formed nodes. [`Node::from_parts`] accepts anything, for
/// trees rebuilt by a caller; those are checked when they are traversed.
#[derive(Debug)]
pub struct Node<S> {
    frequency: u64,
    symbol: Option<S>,
    left: Option<Box<Node<S>>>,
    right: Option<Box<Node<S>>>,
}

/// Borrowed view of a node that passed the shape check.
#[derive(Debug)]
pub(crate) enum Shape<'a, S> {
    Leaf(&'a S),
    Internal(&'a Node<S>, &'a Node<S>),
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, frequency: u64) -> Self {
        Node {
            frequency,
            symbol: Some(symbol),
            left: None,
            right: None,
        }
    }

    /// Merges two subtrees under a new node whose frequency is their sum.
    pub fn internal(left: Node<S>, right: Node<S>) -> Self {
        Node {
            frequency: left.frequency.saturating_add(right.frequency),
            symbol: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Builds a node from raw parts without checking its shape.
    pub fn from_parts(
        frequency: u64,
        symbol: Option<S>,
        left: Option<Node<S>>,
        right: Option<Node<S>>,
    ) -> Self {
        Node {
            frequency,
            symbol,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    pub fn left(&self) -> Option<&Node<S>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<S>> {
        self.right.as_deref()
    }

    /// True iff the node has a symbol and no children.
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some() && self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn shape(&self) -> Result<Shape<'_, S>> {
        match (&self.symbol, self.left.as_deref(), self.right.as_deref()) {
            (Some(symbol), None, None) => Ok(Shape::Leaf(symbol)),
            (None, Some(left), Some(right)) => Ok(Shape::Internal(left, right)),
            (Some(_), _, _) => Err(HuffmanError::MalformedTree(
                "leaf node has children".to_string(),
            )),
            (None, None, None) => Err(HuffmanError::MalformedTree(
                "node has neither a symbol nor children".to_string(),
            )),
            (None, _, _) => Err(HuffmanError::MalformedTree(
                "internal node has a single child".to_string(),
            )),
        }
    }
}

// Children are unlinked onto a work list so that dropping a deep, skewed
// tree does not recurse once per level.
impl<S> Drop for Node<S> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<S>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Counts occurrences of each distinct symbol.
///
/// The map is ordered by symbol, which fixes the order leaves enter the
/// priority queue.
pub fn count_frequencies<S, I>(symbols: I) -> BTreeMap<S, u64>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    symbols
        .into_iter()
        .fold(BTreeMap::new(), |mut acc, symbol| {
            *acc.entry(symbol).or_insert(0) += 1;
            acc
        })
}

/// An immutable Huffman tree with one leaf per distinct source symbol.
#[derive(Debug)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Ord> HuffmanTree<S> {
    /// Builds the tree for a source sequence.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The source sequence; each distinct symbol becomes a leaf.
    ///
    /// # Returns
    ///
    /// * `Result<HuffmanTree<S>>` - The tree, or an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_code::HuffmanTree;
    ///
    /// let tree = HuffmanTree::build("apple".chars()).unwrap();
    /// assert_eq!(tree.leaf_count(), 4);
    /// assert_eq!(tree.total_frequency(), 5);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn build<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let frequencies = count_frequencies(symbols);
        if frequencies.is_empty() {
            return Err(HuffmanError::InvalidInput(
                "source sequence is empty".to_string(),
            ));
        }
        Self::from_frequencies(frequencies)
    }

    /// Builds the tree from a precomputed frequency table.
    ///
    /// Leaves enter the queue in symbol order and equal frequencies are
    /// extracted in insertion order, so the same table always yields the
    /// same tree.
    ///
    /// # Arguments
    ///
    /// * `frequencies` - Occurrence count for each distinct symbol.
    ///
    /// # Returns
    ///
    /// * `Result<HuffmanTree<S>>` - The tree, or an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the table is empty.
    #[debug_ensures(ret.is_err() || ret.as_ref().ok().map(HuffmanTree::leaf_count) == Some(old(frequencies.len())))]
    pub fn from_frequencies(frequencies: BTreeMap<S, u64>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::InvalidInput(
                "frequency table is empty".to_string(),
            ));
        }

        let distinct = frequencies.len();
        let mut queue = MinPriorityQueue::with_capacity(distinct);
        for (symbol, frequency) in frequencies {
            queue.insert(frequency, Node::leaf(symbol, frequency));
        }

        while queue.size() > 1 {
            let left = Self::next_node(&mut queue)?;
            let right = Self::next_node(&mut queue)?;
            trace!(
                left = left.frequency(),
                right = right.frequency(),
                "merging lowest-frequency nodes"
            );
            let merged = Node::internal(left, right);
            queue.insert(merged.frequency(), merged);
        }

        let root = Self::next_node(&mut queue)?;
        debug!(
            distinct,
            total = root.frequency(),
            "built huffman tree"
        );
        Ok(HuffmanTree { root })
    }

    fn next_node(queue: &mut MinPriorityQueue<u64, Node<S>>) -> Result<Node<S>> {
        queue.extract_min().ok_or_else(|| {
            HuffmanError::MalformedTree("priority queue drained before a root remained".to_string())
        })
    }
}

impl<S> HuffmanTree<S> {
    /// Adopts a tree built elsewhere. The shape is not checked here.
    pub fn from_root(root: Node<S>) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Sum of all leaf frequencies, i.e. the source length for a built tree.
    pub fn total_frequency(&self) -> u64 {
        self.root.frequency()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path; zero for a single-leaf tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Pre-order iterator over every node in the tree.
    fn nodes(&self) -> impl Iterator<Item = &Node<S>> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node)
        })
    }
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Recovers the leaf frequency table the tree was built from.
    pub fn frequencies(&self) -> BTreeMap<S, u64> {
        self.nodes()
            .filter_map(|node| match (node.is_leaf(), node.symbol()) {
                (true, Some(symbol)) => Some((symbol.clone(), node.frequency())),
                _ => None,
            })
            .collect()
    }
}
