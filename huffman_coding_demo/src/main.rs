// huffman_coding_demo/src/main.rs

use clap::Parser;
use huffman_code::{count_frequencies, CodeTable, HuffmanEncoding};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Builds a Huffman code for some text, encodes it and decodes it back.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text to encode.
    #[arg(default_value = "apple")]
    text: String,

    /// Read the text from standard input instead.
    #[arg(long)]
    stdin: bool,

    /// Log tree construction and coding at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// Helper function to print a code table, one symbol per line.
fn print_code_table(table: &CodeTable<char>) {
    for (symbol, code) in table.iter() {
        println!("  {:?}: {}", symbol, code);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Encodes `text`, decodes the bits with only the tree in hand and prints
/// each stage.
///
/// # Returns
///
/// * `Result<bool, huffman_code::HuffmanError>` - Whether the decoded text
///   matches the input.
fn run(text: &str) -> Result<bool, huffman_code::HuffmanError> {
    println!("Source Text: {:?}", text);

    println!("Frequencies: ");
    for (symbol, count) in count_frequencies(text.chars()) {
        println!("  {:?}: {}", symbol, count);
    }

    // Encoding
    info!(chars = text.chars().count(), "encoding source text");
    let encoding = HuffmanEncoding::from_text(text)?;

    println!("Code Table: ");
    print_code_table(encoding.code_table());

    let encoded = encoding.encoding().clone();
    println!("Encoded Bits ({} bits): ", encoded.len());
    println!("{}", encoded);

    // Decoding, with only the bits and the tree in hand
    let (_, tree, _) = encoding.into_parts();
    debug!(
        leaves = tree.leaf_count(),
        depth = tree.depth(),
        "decoding with transmitted tree"
    );
    let decoded = HuffmanEncoding::from_encoded(encoded, Some(tree.into_root()))?;
    let decoded_text = decoded.source_text();
    info!(bits = decoded.encoding().len(), "decoded bit stream");

    println!("Decoded Text: {:?}", decoded_text);
    Ok(decoded_text == text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text
    };

    // Verify correctness
    if run(&text)? {
        println!("Decoding successful. The decoded text matches the original input.");
    } else {
        println!("Decoding failed. The decoded text does not match the original input.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_round_trips_text() {
        assert!(run("apple").unwrap());
        assert!(run("aaaa").unwrap());
        assert!(run("the quick brown fox jumps over the lazy dog").unwrap());
    }

    #[test]
    fn test_run_rejects_empty_text() {
        let err = run("").unwrap_err();
        assert!(matches!(err, huffman_code::HuffmanError::InvalidInput(_)));
    }
}
