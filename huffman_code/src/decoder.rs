// huffman_code/src/decoder.rs

use tracing::{debug, instrument, trace};

use crate::error::{HuffmanError, Result};
use crate::stream::EncodedStream;
use crate::tree::{HuffmanTree, Node, Shape};

/// Decodes a bit stream by walking `tree` from the root.
///
/// # Arguments
///
/// * `stream` - Bits produced by encoding with this tree.
/// * `tree` - The tree the bits were encoded with.
///
/// # Returns
///
/// * `Result<Vec<S>>` - The decoded symbol sequence or an error.
///
/// # Errors
///
/// * `TruncatedStream` if the bits end between the root and a leaf.
/// * `MalformedTree` if the walk reaches a node with a broken shape.
///
/// # Examples
///
/// ```
/// use huffman_code::{decode, EncodedStream, HuffmanTree};
///
/// let tree = HuffmanTree::build("aaaa".chars()).unwrap();
/// let bits: EncodedStream = "0000".parse().unwrap();
/// assert_eq!(decode(&bits, &tree).unwrap(), vec!['a'; 4]);
/// ```
pub fn decode<S: Clone>(stream: &EncodedStream, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    decode_from_root(stream, Some(tree.root()))
}

/// Decodes against an optional root, for callers that received the tree
/// separately from the bits.
///
/// # Arguments
///
/// * `stream` - Bits produced by encoding with the tree under `root`.
/// * `root` - Root of the tree, or `None` if no tree was supplied.
///
/// # Returns
///
/// * `Result<Vec<S>>` - The decoded symbol sequence or an error.
///
/// # Errors
///
/// Returns `EmptyTree` if `root` is `None`; otherwise as [`decode`].
#[instrument(level = "debug", skip_all, fields(bits = stream.len()))]
pub fn decode_from_root<S: Clone>(stream: &EncodedStream, root: Option<&Node<S>>) -> Result<Vec<S>> {
    let root = root.ok_or(HuffmanError::EmptyTree)?;

    // A lone leaf has the one-bit code: each bit stands for one occurrence.
    if let Shape::Leaf(symbol) = root.shape()? {
        return Ok(vec![symbol.clone(); stream.len()]);
    }

    let mut decoded = Vec::new();
    let mut cursor = root;

    for (index, bit) in stream.bits().enumerate() {
        let (left, right) = match cursor.shape()? {
            Shape::Internal(left, right) => (left, right),
            Shape::Leaf(_) => {
                return Err(HuffmanError::MalformedTree(
                    "decoder cursor rested on a leaf".to_string(),
                ))
            }
        };
        cursor = if bit { right } else { left };

        if let Shape::Leaf(symbol) = cursor.shape()? {
            trace!(position = index, "decoded symbol");
            decoded.push(symbol.clone());
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(HuffmanError::TruncatedStream {
            consumed: stream.len(),
        });
    }

    debug!(symbols = decoded.len(), "decoded stream");
    Ok(decoded)
}
