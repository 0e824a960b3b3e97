// huffman_code/src/huffman.rs

use std::fmt::Debug;

use crate::code_table::CodeTable;
use crate::decoder::decode_from_root;
use crate::encoder::encode;
use crate::error::{HuffmanError, Result};
use crate::stream::EncodedStream;
use crate::tree::{HuffmanTree, Node};

/// A source sequence together with its tree, code table and encoding.
///
/// Built either from the source, which is encoded on construction, or from
/// an encoding plus the tree root it was produced with, which is decoded on
/// construction. Either way all parts are available afterwards.
#[derive(Debug)]
pub struct HuffmanEncoding<S> {
    source: Vec<S>,
    tree: HuffmanTree<S>,
    table: CodeTable<S>,
    encoded: EncodedStream,
}

impl<S: Ord + Clone + Debug> HuffmanEncoding<S> {
    /// Builds the tree and code table for `source` and encodes it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `source` is empty.
    pub fn new<I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let source: Vec<S> = source.into_iter().collect();
        let tree = HuffmanTree::build(source.iter().cloned())?;
        let table = CodeTable::from_tree(&tree)?;
        let encoded = encode(&source, &table)?;
        Ok(HuffmanEncoding {
            source,
            tree,
            table,
            encoded,
        })
    }

    /// Decodes `encoded` with the tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// * `EmptyTree` if `root` is `None`.
    /// * `TruncatedStream` or `MalformedTree` from decoding.
    pub fn from_encoded(encoded: EncodedStream, root: Option<Node<S>>) -> Result<Self> {
        let source = decode_from_root(&encoded, root.as_ref())?;
        let tree = HuffmanTree::from_root(root.ok_or(HuffmanError::EmptyTree)?);
        let table = CodeTable::from_tree(&tree)?;
        Ok(HuffmanEncoding {
            source,
            tree,
            table,
            encoded,
        })
    }
}

impl<S> HuffmanEncoding<S> {
    /// The encoded bits.
    pub fn encoding(&self) -> &EncodedStream {
        &self.encoded
    }

    /// The original symbol sequence.
    pub fn source(&self) -> &[S] {
        &self.source
    }

    pub fn root(&self) -> &Node<S> {
        self.tree.root()
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn into_parts(self) -> (Vec<S>, HuffmanTree<S>, EncodedStream) {
        (self.source, self.tree, self.encoded)
    }
}

impl HuffmanEncoding<char> {
    /// Encodes the characters of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(text.chars())
    }

    /// The original source as a string.
    pub fn source_text(&self) -> String {
        self.source.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_apple_round_trip() {
        let encoding = HuffmanEncoding::from_text("apple").unwrap();
        assert_eq!(encoding.source_text(), "apple");
        assert_eq!(encoding.encoding().len(), 10);
        assert_eq!(encoding.code_table().len(), 4);

        let bits = encoding.encoding().clone();
        let (_, tree, _) = encoding.into_parts();
        let decoded = HuffmanEncoding::from_encoded(bits, Some(tree.into_root())).unwrap();
        assert_eq!(decoded.source_text(), "apple");
    }

    #[test]
    fn test_single_symbol_source() {
        let encoding = HuffmanEncoding::from_text("aaaa").unwrap();
        assert!(encoding.root().is_leaf());
        assert_eq!(encoding.code_table().get(&'a'), Some("0"));
        assert_eq!(encoding.encoding().to_string(), "0000");

        let decoded =
            HuffmanEncoding::from_encoded("0000".parse().unwrap(), Some(Node::leaf('a', 4))).unwrap();
        assert_eq!(decoded.source_text(), "aaaa");
    }

    #[test]
    fn test_empty_source_fails() {
        let err = HuffmanEncoding::from_text("").unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidInput(_)));
    }

    #[test]
    fn test_decode_without_root_fails() {
        let err = HuffmanEncoding::<char>::from_encoded("0101".parse().unwrap(), None).unwrap_err();
        assert_eq!(err, HuffmanError::EmptyTree);
    }

    #[test]
    fn test_generic_symbols() {
        let words = ["to", "be", "or", "not", "to", "be"];
        let encoding = HuffmanEncoding::new(words.iter().map(|w| w.to_string())).unwrap();
        assert_eq!(encoding.source().len(), 6);
        assert!(encoding.code_table().is_prefix_free());
        assert_eq!(encoding.tree().leaf_count(), 4);
    }

    proptest! {
        #[test]
        fn test_rebuilt_tree_decodes_identically(text in "\\PC{1,200}") {
            let encoding = HuffmanEncoding::from_text(&text).unwrap();
            let bits = encoding.encoding().clone();

            // Receiver side: rebuild from the transmitted frequency table.
            let rebuilt = HuffmanTree::from_frequencies(encoding.tree().frequencies()).unwrap();
            let decoded = HuffmanEncoding::from_encoded(bits, Some(rebuilt.into_root())).unwrap();
            prop_assert_eq!(decoded.source_text(), text);
        }

        #[test]
        fn test_builds_have_equal_encoded_length(text in "\\PC{1,200}") {
            let first = HuffmanEncoding::from_text(&text).unwrap();
            let second = HuffmanEncoding::from_text(&text).unwrap();
            prop_assert_eq!(first.encoding().len(), second.encoding().len());
            prop_assert_eq!(first.encoding(), second.encoding());
        }
    }
}
