use crate::alphabet::{Alphabet, Symbol};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum ExampleSymbol {
    A,
    B,
    R,
    C,
    D,
}

impl Symbol for ExampleSymbol {}

/// The letter counts of "abracadabra".
pub struct ExampleAlphabet {
    symbols: Vec<ExampleSymbol>,
}

impl ExampleAlphabet {
    pub fn new() -> Self {
        Self {
            symbols: vec![
                ExampleSymbol::A,
                ExampleSymbol::B,
                ExampleSymbol::R,
                ExampleSymbol::C,
                ExampleSymbol::D,
            ],
        }
    }
}

impl Alphabet for ExampleAlphabet {
    type S = ExampleSymbol;

    fn symbols(&self) -> impl Iterator<Item = &Self::S> {
        self.symbols.iter()
    }

    fn weight(&self, symbol: &Self::S) -> usize {
        match symbol {
            ExampleSymbol::A => 5,
            ExampleSymbol::B => 2,
            ExampleSymbol::R => 2,
            ExampleSymbol::C => 1,
            ExampleSymbol::D => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ExampleSymbol::*;

    #[test]
    fn test_symbols() {
        let alphabet = ExampleAlphabet::new();
        assert_eq!(
            alphabet.symbols().collect::<Vec<_>>(),
            vec![&A, &B, &R, &C, &D]
        );
    }

    #[test]
    fn test_total_weight() {
        let alphabet = ExampleAlphabet::new();
        assert_eq!(alphabet.total_weight(), 11);
    }

    #[test]
    fn test_probability() {
        let alphabet = ExampleAlphabet::new();
        assert_eq!(alphabet.probability(&A), 5.0 / 11.0);
        assert_eq!(alphabet.probability(&D), 1.0 / 11.0);

        let sum: f64 = alphabet.probabilities().iter().map(|e| e.probability).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy() {
        let alphabet = ExampleAlphabet::new();
        let entropy = alphabet.entropy();
        assert!(entropy > 2.0 && entropy < 2.1, "entropy was {entropy}");
    }
}
