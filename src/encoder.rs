use crate::alphabet::{Alphabet, ProbabilityEntry, Symbol};
use crate::code_table::{CodeTable, TableError};
use crate::frequency::{FrequencyModel, TextSymbol};
use biterator::Bit;
use log::debug;

/// Encodes symbols by substituting each with its code from a table.
pub struct Encoder<S: Symbol> {
    table: CodeTable<S>,
}

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("Cannot encode empty input")]
    EmptyInput,
    #[error("Symbol at position {position} has no code in the table")]
    UnknownSymbol { position: usize },
    #[error("Could not build code table: {0}")]
    InvalidTable(#[from] TableError),
}

/// Lazily produced bits of an encoded symbol stream.
pub struct EncoderOutput<'e, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    input: I,
    encoder: &'e Encoder<S>,
    /// Remaining bits of the code currently being emitted.
    pending: std::slice::Iter<'e, Bit>,
    position: usize,
    failed: bool,
}

impl<'e, S: Symbol, I: Iterator<Item = S>> Iterator for EncoderOutput<'e, S, I> {
    type Item = Result<Bit, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(bit) = self.pending.next() {
                return Some(Ok(*bit));
            }

            let symbol = self.input.next()?;
            let position = self.position;
            self.position += 1;

            let encoder = self.encoder;
            match encoder.table.code(&symbol) {
                Some(code) => self.pending = code.bits().iter(),
                None => {
                    self.failed = true;
                    return Some(Err(EncodeError::UnknownSymbol { position }));
                }
            }
        }
    }
}

impl<S: Symbol> Encoder<S> {
    /// Create an encoder capable of encoding input made of the table's
    /// symbols.
    pub fn new(table: CodeTable<S>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn into_table(self) -> CodeTable<S> {
        self.table
    }

    /// Encode a stream of symbols as a stream of bits.
    ///
    /// Every symbol must have a code in the encoder's table. The stream ends
    /// after the first symbol that does not.
    pub fn encode<I>(&self, input: I) -> EncoderOutput<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        EncoderOutput {
            input: input.into_iter(),
            encoder: self,
            pending: (&[] as &[Bit]).iter(),
            position: 0,
            failed: false,
        }
    }
}

/// Everything produced by encoding one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding<S: Symbol> {
    pub bits: Vec<Bit>,
    pub table: CodeTable<S>,
    /// Symbols by descending probability, in the order codes were assigned.
    pub probabilities: Vec<ProbabilityEntry<S>>,
    /// Expected number of bits per symbol.
    pub coding_price: f64,
}

impl<S: Symbol> Encoding<S> {
    pub fn bit_string(&self) -> String {
        crate::bits::to_string(&self.bits)
    }
}

/// Encode text with a code built from its own symbol frequencies.
pub fn encode_text(text: &str) -> Result<Encoding<TextSymbol>, EncodeError> {
    let model = FrequencyModel::from_text(text)?;
    let table = CodeTable::build(&model)?;
    let coding_price = table.coding_price(&model);

    let encoder = Encoder::new(table);
    let bits = encoder
        .encode(text.chars().map(TextSymbol::from))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "encoded {} symbols ({} distinct) into {} bits, coding price {coding_price:.4}",
        model.text_len(),
        model.distinct_symbols(),
        bits.len()
    );

    Ok(Encoding {
        bits,
        table: encoder.into_table(),
        probabilities: model.probabilities(),
        coding_price,
    })
}
