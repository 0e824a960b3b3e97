// huffman_code/src/encoder.rs

use std::borrow::Borrow;
use std::fmt::Debug;

use tracing::{debug, instrument};

use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::stream::EncodedStream;

/// Encodes a symbol sequence by concatenating each symbol's code in order.
///
/// # Arguments
///
/// * `symbols` - The source sequence, by value or by reference.
/// * `table` - Code table covering every symbol in `symbols`.
///
/// # Errors
///
/// * `InvalidInput` if `symbols` is empty.
/// * `UnknownSymbol` if a symbol has no entry in `table`.
///
/// # Examples
///
/// ```
/// use huffman_code::{encode, CodeTable, HuffmanTree};
///
/// let tree = HuffmanTree::build("aaaa".chars()).unwrap();
/// let table = CodeTable::from_tree(&tree).unwrap();
/// let encoded = encode("aaaa".chars(), &table).unwrap();
/// assert_eq!(encoded.to_string(), "0000");
/// ```
#[instrument(level = "debug", skip_all)]
pub fn encode<S, I>(symbols: I, table: &CodeTable<S>) -> Result<EncodedStream>
where
    S: Ord + Clone + Debug,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut stream = EncodedStream::new();
    let mut count = 0usize;

    for symbol in symbols {
        let code = table.code_for(symbol.borrow())?;
        stream.push_code(code)?;
        count += 1;
    }

    if count == 0 {
        return Err(HuffmanError::InvalidInput(
            "source sequence is empty".to_string(),
        ));
    }

    debug!(symbols = count, bits = stream.len(), "encoded source");
    Ok(stream)
}
