pub mod alphabet;
pub mod artifact;
pub mod bits;
pub mod code_builder;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequency;

#[cfg(test)]
mod example;

pub use alphabet::{Alphabet, ProbabilityEntry, Symbol};
pub use artifact::{Artifact, FormatError};
pub use code_table::{Code, CodeTable, TableError};
pub use decoder::{DecodeError, Decoder, decode_text};
pub use encoder::{EncodeError, Encoder, Encoding, encode_text};
pub use frequency::{FrequencyModel, TextSymbol};

/// Character a decoded whitespace symbol is rendered as, both in decoded
/// text and in the symbol position of a persisted table entry.
pub const WHITESPACE_RENDERING: char = ' ';
/// Separates the symbol from its code on a persisted table line.
const ENTRY_SEPARATOR: char = ' ';
const LINE_SEPARATOR: &str = "\n";
