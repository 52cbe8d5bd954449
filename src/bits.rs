//! Conversion between bit sequences and their `'0'`/`'1'` text form, which is
//! how encoded messages and codes are displayed and persisted.

use biterator::Bit;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseBitsError {
    #[error("invalid bit {found:?} at position {position}, expected '0' or '1'")]
    InvalidBit { position: usize, found: char },
}

pub fn bit_char(bit: &Bit) -> char {
    match bit {
        Bit::Zero => '0',
        Bit::One => '1',
    }
}

pub fn to_string(bits: &[Bit]) -> String {
    bits.iter().map(bit_char).collect()
}

pub fn parse(text: &str) -> Result<Vec<Bit>, ParseBitsError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            found => Err(ParseBitsError::InvalidBit { position, found }),
        })
        .collect()
}
