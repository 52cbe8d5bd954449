use std::fmt::Debug;
use std::hash::Hash;

pub trait Symbol: Eq + Hash + Copy + Debug {}

/// A symbol together with the fraction of the input it accounts for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityEntry<S: Symbol> {
    pub symbol: S,
    pub probability: f64,
}

/// `weight / total`, or zero for an empty alphabet.
pub(crate) fn ratio(weight: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    weight as f64 / total as f64
}

pub trait Alphabet {
    type S: Symbol;

    /// An iterator over the symbols in the alphabet. Codes are assigned in
    /// this order.
    fn symbols(&self) -> impl Iterator<Item = &Self::S>;

    /// The number of times this symbol occurs, represented as an integer such
    /// that dividing it by the sum of all weights in the symbol set yields
    /// the probability.
    fn weight(&self, symbol: &Self::S) -> usize;

    /// The sum of all weights.
    fn total_weight(&self) -> usize {
        let mut sum = 0;
        for symbol in self.symbols() {
            sum += self.weight(symbol);
        }
        sum
    }

    /// Weights in symbol order.
    fn weights(&self) -> Vec<usize> {
        self.symbols().map(|symbol| self.weight(symbol)).collect()
    }

    fn probability(&self, symbol: &Self::S) -> f64 {
        ratio(self.weight(symbol), self.total_weight())
    }

    fn probabilities(&self) -> Vec<ProbabilityEntry<Self::S>> {
        let total = self.total_weight();
        self.symbols()
            .map(|&symbol| ProbabilityEntry {
                symbol,
                probability: ratio(self.weight(&symbol), total),
            })
            .collect()
    }

    /// Shannon entropy in bits per symbol. No prefix code can have a lower
    /// coding price.
    fn entropy(&self) -> f64 {
        let total = self.total_weight();
        self.symbols()
            .map(|symbol| ratio(self.weight(symbol), total))
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.log2())
            .sum()
    }
}
