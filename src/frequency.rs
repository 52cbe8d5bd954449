use crate::alphabet::{Alphabet, Symbol};
use crate::encoder::EncodeError;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

/// A symbol of text input. Every whitespace character collapses into the
/// single `Whitespace` symbol, so `Char` never holds whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSymbol {
    Char(char),
    Whitespace,
}

impl Symbol for TextSymbol {}

impl From<char> for TextSymbol {
    fn from(c: char) -> Self {
        if c.is_whitespace() {
            TextSymbol::Whitespace
        } else {
            TextSymbol::Char(c)
        }
    }
}

impl fmt::Display for TextSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSymbol::Char(c) => write!(f, "{c}"),
            TextSymbol::Whitespace => write!(f, "{}", crate::WHITESPACE_RENDERING),
        }
    }
}

/// Occurrence counts of the symbols of a text, ordered by descending count.
/// Symbols with equal counts keep the order in which they first appear.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    symbols: Vec<TextSymbol>,
    counts: Vec<usize>,
    /// Position of each symbol in `symbols`.
    index: HashMap<TextSymbol, usize>,
    length: usize,
}

impl FrequencyModel {
    pub fn from_text(text: &str) -> Result<Self, EncodeError> {
        // symbol -> (first occurrence, count)
        let mut tallies: HashMap<TextSymbol, (usize, usize)> = HashMap::new();
        let mut length = 0;
        for c in text.chars() {
            let first_seen = tallies.len();
            tallies.entry(TextSymbol::from(c)).or_insert((first_seen, 0)).1 += 1;
            length += 1;
        }

        if length == 0 {
            return Err(EncodeError::EmptyInput);
        }

        let mut ordered: Vec<_> = tallies.into_iter().collect();
        ordered.sort_unstable_by_key(|&(_, (first_seen, count))| (Reverse(count), first_seen));

        let index = ordered
            .iter()
            .enumerate()
            .map(|(position, &(symbol, _))| (symbol, position))
            .collect();
        let (symbols, counts) = ordered
            .into_iter()
            .map(|(symbol, (_, count))| (symbol, count))
            .unzip();

        Ok(Self {
            symbols,
            counts,
            index,
            length,
        })
    }

    /// Number of characters in the text the model was built from. Never zero.
    pub fn text_len(&self) -> usize {
        self.length
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbols.len()
    }
}

impl Alphabet for FrequencyModel {
    type S = TextSymbol;

    fn symbols(&self) -> impl Iterator<Item = &Self::S> {
        self.symbols.iter()
    }

    fn weight(&self, symbol: &Self::S) -> usize {
        self.index
            .get(symbol)
            .map_or(0, |&position| self.counts[position])
    }

    fn total_weight(&self) -> usize {
        self.length
    }

    fn weights(&self) -> Vec<usize> {
        self.counts.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use TextSymbol::*;

    #[test]
    fn abracadabra_probabilities() {
        let model = FrequencyModel::from_text("abracadabra").unwrap();
        assert_eq!(model.text_len(), 11);
        assert_eq!(
            model.symbols().collect::<Vec<_>>(),
            vec![&Char('a'), &Char('b'), &Char('r'), &Char('c'), &Char('d')]
        );

        let probabilities: Vec<f64> = model
            .probabilities()
            .iter()
            .map(|e| e.probability)
            .collect();
        assert_eq!(
            probabilities,
            vec![5.0 / 11.0, 2.0 / 11.0, 2.0 / 11.0, 1.0 / 11.0, 1.0 / 11.0]
        );
    }

    #[test]
    fn whitespace_is_one_symbol() {
        let model = FrequencyModel::from_text("a b\tc\r\nd").unwrap();
        assert_eq!(model.distinct_symbols(), 5);
        assert_eq!(model.weight(&Whitespace), 4);
        assert_eq!(model.symbols().next(), Some(&Whitespace));
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let model = FrequencyModel::from_text("zyxxyz").unwrap();
        assert_eq!(
            model.symbols().collect::<Vec<_>>(),
            vec![&Char('z'), &Char('y'), &Char('x')]
        );
    }

    #[test]
    fn many_distinct_symbols_keep_discovery_order() {
        let chars: Vec<char> = (0..20_000u32)
            .filter_map(|i| char::from_u32(0x4e00 + i))
            .collect();
        let text: String = chars.iter().chain(chars[..10].iter()).collect();
        let model = FrequencyModel::from_text(&text).unwrap();

        assert_eq!(model.distinct_symbols(), 20_000);
        let symbols: Vec<_> = model.symbols().copied().collect();
        let expected: Vec<_> = chars.iter().map(|&c| Char(c)).collect();
        assert_eq!(symbols, expected);
        assert_eq!(model.weight(&Char(chars[9])), 2);
        assert_eq!(model.weight(&Char(chars[10])), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let model = FrequencyModel::from_text("ééa").unwrap();
        assert_eq!(model.text_len(), 3);
        assert_eq!(model.probability(&Char('é')), 2.0 / 3.0);
    }

    #[test]
    fn unknown_symbol_has_zero_weight() {
        let model = FrequencyModel::from_text("aa").unwrap();
        assert_eq!(model.weight(&Char('b')), 0);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(FrequencyModel::from_text(""), Err(EncodeError::EmptyInput));
    }

    #[test]
    fn whitespace_never_becomes_a_literal() {
        assert_eq!(TextSymbol::from('\u{2003}'), Whitespace);
        assert_eq!(TextSymbol::from('&'), Char('&'));
    }
}
