// huffman_code/src/error.rs

use thiserror::Error;

/// Error type for tree construction, encoding and decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// The source sequence (or frequency table) holds no symbols.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A node is neither a proper leaf nor a proper internal node.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// A source symbol has no entry in the code table.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The bit stream ended while the decoder was between the root and a leaf.
    #[error("truncated stream: bits ran out mid-code after {consumed} bits")]
    TruncatedStream { consumed: usize },

    /// Decoding was requested without a tree.
    #[error("cannot decode without a tree")]
    EmptyTree,

    /// A textual bit string contained something other than '0' or '1'.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
