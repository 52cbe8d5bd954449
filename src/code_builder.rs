use crate::code_table::Code;
use biterator::Bit;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A node of the code tree. Children are referenced by their index in the
/// arena that owns every node.
#[derive(Debug)]
enum Node {
    Leaf { position: usize },
    Internal { zero: usize, one: usize },
}

// Code Construction
//
// Input: weights w_1, ..., w_n (usually in descending order)
//
// push a leaf for every w_i onto a min-priority queue
// while the queue holds more than one node:
//     x = pop lightest, y = pop next lightest
//     push internal node z with weight w_x + w_y, children (0: x, 1: y)
// walk down from the remaining node, appending 0 or 1 per edge taken
//
// Ties are broken by a rank so the result only depends on the weights and
// their order: among equal weights, leaves later in the input are merged
// first, then internal nodes in the order they were created.

/// Build a prefix-free code for the given symbol weights. The i-th code
/// belongs to the i-th weight.
///
/// A single weight gets the one-bit code `0`; no weights give no codes.
pub fn build_codes(weights: &[usize]) -> Vec<Code> {
    let n = weights.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![Code::new(vec![Bit::Zero])],
        _ => {}
    }

    let mut arena = Vec::with_capacity(2 * n - 1);
    let mut queue = BinaryHeap::with_capacity(n);
    for (position, &weight) in weights.iter().enumerate() {
        let rank = n - 1 - position;
        queue.push(Reverse((weight, rank, arena.len())));
        arena.push(Node::Leaf { position });
    }

    let mut next_rank = n;
    while queue.len() > 1 {
        let (Some(Reverse((w_zero, _, zero))), Some(Reverse((w_one, _, one)))) =
            (queue.pop(), queue.pop())
        else {
            break;
        };
        let weight = w_zero + w_one;
        trace!("merging nodes {zero} ({w_zero}) and {one} ({w_one}) into {}", arena.len());
        queue.push(Reverse((weight, next_rank, arena.len())));
        arena.push(Node::Internal { zero, one });
        next_rank += 1;
    }

    let mut codes = vec![Code::new(Vec::new()); n];
    let root = arena.len() - 1;
    let mut pending = vec![(root, Vec::new())];
    while let Some((index, prefix)) = pending.pop() {
        match arena[index] {
            Node::Leaf { position } => codes[position] = Code::new(prefix),
            Node::Internal { zero, one } => {
                let mut zero_prefix = prefix.clone();
                zero_prefix.push(Bit::Zero);
                let mut one_prefix = prefix;
                one_prefix.push(Bit::One);
                pending.push((one, one_prefix));
                pending.push((zero, zero_prefix));
            }
        }
    }

    debug!(
        "built {n} codes, longest {} bits",
        codes.iter().map(Code::len).max().unwrap_or(0)
    );
    codes
}

#[cfg(test)]
mod test {
    use super::*;

    fn build(weights: &[usize]) -> Vec<String> {
        build_codes(weights).iter().map(Code::to_string).collect()
    }

    #[test]
    fn no_symbols() {
        assert!(build_codes(&[]).is_empty());
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        assert_eq!(build(&[4]), vec!["0"]);
    }

    #[test]
    fn two_symbols() {
        assert_eq!(build(&[3, 1]), vec!["1", "0"]);
    }

    #[test_log::test]
    fn abracadabra_weights() {
        assert_eq!(
            build(&[5, 2, 2, 1, 1]),
            vec!["0", "111", "110", "101", "100"]
        );
    }

    #[test]
    fn equal_weights_prefer_earlier_symbols() {
        let codes = build(&[1, 1, 1]);
        assert_eq!(codes, vec!["0", "11", "10"]);
    }

    #[test]
    fn skewed_weights_give_increasing_lengths() {
        let lengths: Vec<_> = build_codes(&[16, 8, 4, 2, 1, 1])
            .iter()
            .map(Code::len)
            .collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 5, 5]);
    }

    #[test]
    fn deterministic() {
        let weights = [7, 3, 3, 3, 2, 2, 1, 1, 1];
        assert_eq!(build_codes(&weights), build_codes(&weights));
    }

    #[test]
    fn codes_are_prefix_free() {
        let codes = build_codes(&[9, 7, 7, 5, 3, 3, 3, 1, 1, 1, 1]);
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }
}
