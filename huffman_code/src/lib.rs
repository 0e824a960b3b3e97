// huffman_code/src/lib.rs

//! Huffman Coding Library
//!
//! This library builds optimal prefix-free codes from symbol frequencies,
//! encodes symbol sequences into bit streams and decodes them back.
//!
//! ```
//! use huffman_code::HuffmanEncoding;
//!
//! let encoding = HuffmanEncoding::from_text("apple").unwrap();
//! let bits = encoding.encoding().clone();
//! let (_, tree, _) = encoding.into_parts();
//!
//! let decoded = HuffmanEncoding::from_encoded(bits, Some(tree.into_root())).unwrap();
//! assert_eq!(decoded.source_text(), "apple");
//! ```

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod huffman;
pub mod priority_queue;
pub mod stream;
pub mod tree;

pub use code_table::CodeTable;
pub use decoder::{decode, decode_from_root};
pub use encoder::encode;
pub use error::{HuffmanError, Result};
pub use huffman::HuffmanEncoding;
pub use priority_queue::MinPriorityQueue;
pub use stream::EncodedStream;
pub use tree::{count_frequencies, HuffmanTree, Node};
