//! Text form of an encoded message, as handed to storage.
//!
//! ```text
//! 01110        <- encoded bits
//! a 0          <- one line per table entry: symbol, space, code
//!   11         <- the whitespace symbol is written as a space
//! b 10
//! ```
//!
//! Lines are separated by `\n` with no trailing newline. Parsing also
//! accepts `\r\n` and skips blank lines. Literal symbols are never
//! whitespace, so a space in the symbol position always means the
//! whitespace symbol.

use crate::bits::{self, ParseBitsError};
use crate::code_table::{Code, CodeTable, TableError};
use crate::decoder::{DecodeError, decode_text};
use crate::encoder::Encoding;
use crate::frequency::TextSymbol;
use crate::{ENTRY_SEPARATOR, LINE_SEPARATOR};
use biterator::Bit;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur while parsing a stored artifact
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("Artifact has no encoded bits line")]
    MissingBits,
    #[error("Table entry on line {line} is not of the form `<symbol> <code>`")]
    MalformedEntry { line: usize },
    #[error("Invalid encoded bits: {0}")]
    InvalidBits(#[from] ParseBitsError),
    #[error("Invalid code table: {0}")]
    InvalidTable(#[from] TableError),
}

/// An encoded message together with the table needed to decode it.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub bits: Vec<Bit>,
    pub table: CodeTable<TextSymbol>,
}

impl Artifact {
    pub fn decode(&self) -> Result<String, DecodeError> {
        decode_text(&self.bits, &self.table)
    }
}

impl From<Encoding<TextSymbol>> for Artifact {
    fn from(encoding: Encoding<TextSymbol>) -> Self {
        Artifact {
            bits: encoding.bits,
            table: encoding.table,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits::to_string(&self.bits))?;
        for (symbol, code) in self.table.iter() {
            write!(f, "{LINE_SEPARATOR}{symbol}{ENTRY_SEPARATOR}{code}")?;
        }
        Ok(())
    }
}

fn parse_entry(line: &str, number: usize) -> Result<(TextSymbol, Code), FormatError> {
    let mut chars = line.chars();
    let symbol = chars.next().map(TextSymbol::from);
    let code = chars.as_str().strip_prefix(ENTRY_SEPARATOR);
    match (symbol, code) {
        (Some(symbol), Some(code)) if !code.is_empty() && !code.starts_with(ENTRY_SEPARATOR) => {
            Ok((symbol, code.parse()?))
        }
        _ => Err(FormatError::MalformedEntry { line: number }),
    }
}

impl FromStr for Artifact {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.is_empty());

        let (_, first) = lines.next().ok_or(FormatError::MissingBits)?;
        let bits = bits::parse(first)?;

        let entries = lines
            .map(|(number, line)| parse_entry(line, number))
            .collect::<Result<Vec<_>, _>>()?;
        let table = CodeTable::from_entries(entries)?;

        Ok(Artifact { bits, table })
    }
}
