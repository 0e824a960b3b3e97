// huffman_code/src/code_table.rs

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;

use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Shape};

/// Code assigned to the only symbol of a single-leaf tree.
const SINGLE_LEAF_CODE: &str = "0";

/// Symbol-to-code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, String>,
}

impl<S: Ord + Clone + Debug> CodeTable<S> {
    /// Walks the tree, appending '0' for each left branch and '1' for each
    /// right branch, and records the accumulated path at every leaf.
    ///
    /// A tree whose root is a leaf gets the one-bit code "0" so that
    /// repeated occurrences stay countable in the bit stream.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTree` if a node has one child, a leaf has
    /// children, or two leaves carry the same symbol.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Result<Self> {
        let mut codes = BTreeMap::new();

        if let Shape::Leaf(symbol) = tree.root().shape()? {
            codes.insert(symbol.clone(), SINGLE_LEAF_CODE.to_string());
            return Ok(CodeTable { codes });
        }

        let mut stack = vec![(tree.root(), String::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node.shape()? {
                Shape::Leaf(symbol) => {
                    if codes.insert(symbol.clone(), prefix).is_some() {
                        return Err(HuffmanError::MalformedTree(format!(
                            "symbol {:?} appears in more than one leaf",
                            symbol
                        )));
                    }
                }
                Shape::Internal(left, right) => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((right, right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((left, left_prefix));
                }
            }
        }

        debug!(symbols = codes.len(), "built code table");
        Ok(CodeTable { codes })
    }

    /// Total encoded length, in bits, of a source with these frequencies.
    ///
    /// # Errors
    ///
    /// * `UnknownSymbol` if a symbol has no code.
    /// * `InvalidInput` if the total does not fit in a `u64`.
    pub fn encoded_bit_length(&self, frequencies: &BTreeMap<S, u64>) -> Result<u64> {
        frequencies.iter().try_fold(0u64, |total, (symbol, &frequency)| {
            let code = self.code_for(symbol)?;
            frequency
                .checked_mul(code.len() as u64)
                .and_then(|bits| total.checked_add(bits))
                .ok_or_else(|| {
                    HuffmanError::InvalidInput(format!(
                        "encoded length overflows u64 at symbol {:?}",
                        symbol
                    ))
                })
        })
    }

    pub(crate) fn code_for(&self, symbol: &S) -> Result<&str> {
        self.get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", symbol)))
    }
}

impl<S: Ord> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_str()))
    }

    /// True if no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // After sorting, a prefix sorts immediately before some code it prefixes.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<S> IntoIterator for CodeTable<S> {
    type Item = (S, String);
    type IntoIter = btree_map::IntoIter<S, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}
