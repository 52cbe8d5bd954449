use crate::alphabet::Symbol;
use crate::code_table::CodeTable;
use crate::frequency::TextSymbol;
use biterator::Bit;
use log::debug;

/// A node of the decoding trie. The root is at index 0.
#[derive(Debug)]
struct TrieNode<S: Symbol> {
    /// Next node for a `Zero` and a `One` bit respectively.
    children: [Option<usize>; 2],
    symbol: Option<S>,
}

impl<S: Symbol> TrieNode<S> {
    fn empty() -> Self {
        Self {
            children: [None, None],
            symbol: None,
        }
    }
}

/// Decodes bit streams produced with a given code table.
#[derive(Debug)]
pub struct Decoder<S: Symbol> {
    nodes: Vec<TrieNode<S>>,
}

#[derive(Debug, PartialEq)]
pub enum DecoderEvent<S: Symbol> {
    /// A symbol was decoded from the input stream.
    DecodedSymbol(S),
    /// The input is exhausted and ended on a code boundary. The usize
    /// indicates how many bits were decoded.
    MessageLength(usize),
}

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Bits starting at position {position} do not begin any code in the table")]
    UnknownCode { position: usize },
    #[error("Input ends with {residual} bits that do not form a complete code")]
    TruncatedInput { residual: usize },
}

fn branch(bit: &Bit) -> usize {
    match bit {
        Bit::Zero => 0,
        Bit::One => 1,
    }
}

impl<S: Symbol> Decoder<S> {
    /// Create a decoder capable of decoding a stream of bits that was encoded
    /// using the given table.
    pub fn new(table: &CodeTable<S>) -> Self {
        let mut nodes = vec![TrieNode::empty()];
        for (symbol, code) in table.iter() {
            let mut node = 0;
            for bit in code.bits() {
                let b = branch(bit);
                node = match nodes[node].children[b] {
                    Some(child) => child,
                    None => {
                        let child = nodes.len();
                        nodes.push(TrieNode::empty());
                        nodes[node].children[b] = Some(child);
                        child
                    }
                };
            }
            nodes[node].symbol = Some(*symbol);
        }
        Decoder { nodes }
    }

    /// Decode a stream of bits as a stream of symbols.
    ///
    /// Every decoded symbol is yielded as soon as its last bit is read. If
    /// the input ends on a code boundary, completion is indicated with the
    /// MessageLength event; otherwise the last item is an error.
    pub fn decode<I>(&self, input: I) -> DecoderOutput<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = Bit>,
    {
        DecoderOutput {
            input: input.into_iter(),
            decoder: self,
            node: 0,
            position: 0,
            code_start: 0,
            finished: false,
        }
    }
}

pub struct DecoderOutput<'d, S, I>
where
    S: Symbol,
    I: Iterator<Item = Bit>,
{
    input: I,
    decoder: &'d Decoder<S>,
    /// Trie node reached by the bits read since the last decoded symbol.
    node: usize,
    position: usize,
    code_start: usize,
    finished: bool,
}

impl<S: Symbol, I: Iterator<Item = Bit>> Iterator for DecoderOutput<'_, S, I> {
    type Item = Result<DecoderEvent<S>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let nodes = &self.decoder.nodes;
        while let Some(bit) = self.input.next() {
            self.position += 1;
            let Some(child) = nodes[self.node].children[branch(&bit)] else {
                self.finished = true;
                return Some(Err(DecodeError::UnknownCode {
                    position: self.code_start,
                }));
            };

            if let Some(symbol) = nodes[child].symbol {
                self.node = 0;
                self.code_start = self.position;
                return Some(Ok(DecoderEvent::DecodedSymbol(symbol)));
            }
            self.node = child;
        }

        self.finished = true;
        if self.node != 0 {
            return Some(Err(DecodeError::TruncatedInput {
                residual: self.position - self.code_start,
            }));
        }
        Some(Ok(DecoderEvent::MessageLength(self.position)))
    }
}

/// Decode bits back into text. The whitespace symbol becomes a space.
pub fn decode_text(bits: &[Bit], table: &CodeTable<TextSymbol>) -> Result<String, DecodeError> {
    let decoder = Decoder::new(table);
    let mut text = String::new();
    for event in decoder.decode(bits.iter().copied()) {
        match event? {
            DecoderEvent::DecodedSymbol(TextSymbol::Char(c)) => text.push(c),
            DecoderEvent::DecodedSymbol(TextSymbol::Whitespace) => {
                text.push(crate::WHITESPACE_RENDERING)
            }
            DecoderEvent::MessageLength(length) => {
                debug!("decoded {length} bits into {} chars", text.chars().count())
            }
        }
    }
    Ok(text)
}
