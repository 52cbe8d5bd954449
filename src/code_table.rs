use crate::alphabet::{Alphabet, Symbol, ratio};
use crate::bits::{self, ParseBitsError};
use crate::code_builder::build_codes;
use biterator::Bit;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

/// The bit sequence assigned to a single symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Bit>);

impl Code {
    pub fn new(bits: Vec<Bit>) -> Self {
        Code(bits)
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is a (not necessarily proper) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits::to_string(&self.0))
    }
}

impl FromStr for Code {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bits::parse(s).map(Code)
    }
}

/// Errors that can occur while assembling a code table
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Code table has no entries")]
    Empty,
    #[error("Entry {index} has an empty code")]
    EmptyCode { index: usize },
    #[error("Entry {index} repeats a symbol already in the table")]
    DuplicateSymbol { index: usize },
    #[error("Code {shorter} is a prefix of code {longer}")]
    AmbiguousCodes { shorter: String, longer: String },
}

/// Mapping from symbol to code. Every table is non-empty and prefix-free, so
/// a bit stream made of its codes decodes unambiguously.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable<S: Symbol> {
    entries: Vec<(S, Code)>,
    /// Position of each symbol in `entries`.
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeTable<S> {
    /// Build the optimal prefix code for an alphabet. Entries follow the
    /// alphabet's symbol order.
    pub fn build<A: Alphabet<S = S>>(alphabet: &A) -> Result<Self, TableError> {
        let codes = build_codes(&alphabet.weights());
        let entries = alphabet.symbols().copied().zip(codes).collect();
        Self::from_entries(entries)
    }

    /// Assemble a table from explicit entries, e.g. ones loaded from storage.
    pub fn from_entries(entries: Vec<(S, Code)>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut positions = HashMap::with_capacity(entries.len());
        for (index, (symbol, code)) in entries.iter().enumerate() {
            if code.is_empty() {
                return Err(TableError::EmptyCode { index });
            }
            match positions.entry(*symbol) {
                Entry::Occupied(_) => return Err(TableError::DuplicateSymbol { index }),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        // After sorting, any code that prefixes another also prefixes its
        // immediate successor.
        let mut codes: Vec<&Code> = entries.iter().map(|(_, code)| code).collect();
        codes.sort_by_cached_key(|code| code.to_string());
        for pair in codes.windows(2) {
            if pair[0].is_prefix_of(pair[1]) {
                return Err(TableError::AmbiguousCodes {
                    shorter: pair[0].to_string(),
                    longer: pair[1].to_string(),
                });
            }
        }

        Ok(Self {
            entries,
            index: positions,
        })
    }

    pub fn code(&self, symbol: &S) -> Option<&Code> {
        self.index
            .get(symbol)
            .map(|&position| &self.entries[position].1)
    }

    pub fn symbol(&self, code: &Code) -> Option<&S> {
        self.entries
            .iter()
            .find(|(_, c)| c == code)
            .map(|(symbol, _)| symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(S, Code)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expected number of bits per symbol when coding text drawn from
    /// `alphabet`. Symbols missing from the table contribute nothing.
    pub fn coding_price<A: Alphabet<S = S>>(&self, alphabet: &A) -> f64 {
        let total = alphabet.total_weight();
        alphabet
            .symbols()
            .filter_map(|symbol| {
                self.code(symbol)
                    .map(|code| ratio(alphabet.weight(symbol), total) * code.len() as f64)
            })
            .sum()
    }
}
