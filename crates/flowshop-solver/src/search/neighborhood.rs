// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Same-machine swap neighbourhoods over operation orderings.

use crate::{numeric::SolveNumeric, search::err::NotEnoughSwapPairsError};
use flowshop_model::prelude::Operation;
use rand::seq::SliceRandom;

/// An unordered pair of two distinct same-machine operations.
///
/// Stored normalized (lesser operation first), so derived equality is set
/// equality: `{a, b} == {b, a}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPair<T> {
    first: Operation<T>,
    second: Operation<T>,
}

impl<T: Copy + Ord + std::fmt::Debug> SwapPair<T> {
    #[inline]
    pub fn new(a: Operation<T>, b: Operation<T>) -> Self {
        debug_assert_eq!(a.machine(), b.machine());
        debug_assert_ne!(a, b);
        if b < a {
            Self {
                first: b,
                second: a,
            }
        } else {
            Self {
                first: a,
                second: b,
            }
        }
    }

    #[inline]
    pub fn first(&self) -> Operation<T> {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Operation<T> {
        self.second
    }
}

/// Number of distinct same-machine pairs over `order`.
fn distinct_pair_count<T: SolveNumeric>(order: &[Operation<T>]) -> usize {
    flowshop_model::prelude::Machine::ALL
        .iter()
        .map(|&m| {
            let n = order.iter().filter(|o| o.machine() == m).count();
            if n < 2 { 0 } else { n * (n - 1) / 2 }
        })
        .sum()
}

/// Samples `count` distinct same-machine [`SwapPair`]s from `order`.
///
/// Rejection sampling over a shuffled scratch copy: the last element is
/// drawn as the pair's first member, the nearest same-machine element in
/// the shuffled view as its second. Fails up front when fewer than `count`
/// distinct pairs exist at all.
pub fn generate_swap_pairs<T, R>(
    order: &[Operation<T>],
    count: usize,
    rng: &mut R,
) -> Result<Vec<SwapPair<T>>, NotEnoughSwapPairsError>
where
    T: SolveNumeric,
    R: rand::Rng,
{
    let available = distinct_pair_count(order);
    if available < count {
        return Err(NotEnoughSwapPairsError::new(count, available));
    }

    let mut pairs: Vec<SwapPair<T>> = Vec::with_capacity(count);
    let mut scratch: Vec<Operation<T>> = order.to_vec();
    while pairs.len() < count {
        scratch.shuffle(rng);
        let Some(first) = scratch.last().copied() else {
            break;
        };
        let Some(second) = scratch[..scratch.len() - 1]
            .iter()
            .find(|o| o.machine() == first.machine())
            .copied()
        else {
            // The draw landed on a machine with a single operation.
            continue;
        };
        let pair = SwapPair::new(first, second);
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// A copy of `order` with the two members of `pair` exchanged in place.
pub fn apply_swap<T: SolveNumeric>(order: &[Operation<T>], pair: &SwapPair<T>) -> Vec<Operation<T>> {
    let mut swapped = order.to_vec();
    let first = swapped.iter().position(|o| *o == pair.first());
    let second = swapped.iter().position(|o| *o == pair.second());
    if let (Some(i), Some(j)) = (first, second) {
        swapped.swap(i, j);
    } else {
        debug_assert!(false, "swap pair members missing from the ordering");
    }
    swapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowshop_core::prelude::TimeDelta;
    use flowshop_model::prelude::{JobId, Machine};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn op(machine: Machine, job: u32, length: i64) -> Operation<i64> {
        Operation::new(machine, JobId::new(job), TimeDelta::new(length))
    }

    fn order() -> Vec<Operation<i64>> {
        vec![
            op(Machine::First, 1, 3),
            op(Machine::Second, 1, 4),
            op(Machine::First, 2, 5),
            op(Machine::Second, 2, 6),
            op(Machine::First, 3, 7),
            op(Machine::Second, 3, 8),
        ]
    }

    #[test]
    fn test_swap_pair_equality_is_set_equality() {
        let a = op(Machine::First, 1, 3);
        let b = op(Machine::First, 2, 5);
        let c = op(Machine::First, 3, 7);
        assert_eq!(SwapPair::new(a, b), SwapPair::new(b, a));
        assert_ne!(SwapPair::new(a, b), SwapPair::new(a, c));
    }

    #[test]
    fn test_generated_pairs_are_distinct_and_same_machine() {
        let ord = order();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // 3 ops per machine → C(3,2) * 2 = 6 distinct pairs; ask for all.
        let pairs = generate_swap_pairs(&ord, 6, &mut rng).unwrap();
        assert_eq!(pairs.len(), 6);
        for (i, p) in pairs.iter().enumerate() {
            assert_eq!(p.first().machine(), p.second().machine());
            assert_ne!(p.first(), p.second());
            for q in &pairs[i + 1..] {
                assert_ne!(p, q);
            }
        }
    }

    #[test]
    fn test_generation_fails_when_not_enough_pairs_exist() {
        let ord = order();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = generate_swap_pairs(&ord, 7, &mut rng).unwrap_err();
        assert_eq!(err.requested(), 7);
        assert_eq!(err.available(), 6);
    }

    #[test]
    fn test_generation_fails_for_single_job() {
        let ord = vec![op(Machine::First, 1, 3), op(Machine::Second, 1, 4)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate_swap_pairs(&ord, 1, &mut rng).is_err());
    }

    #[test]
    fn test_apply_swap_exchanges_positions() {
        let ord = order();
        let pair = SwapPair::new(ord[0], ord[4]);
        let swapped = apply_swap(&ord, &pair);
        assert_eq!(swapped[0], ord[4]);
        assert_eq!(swapped[4], ord[0]);
        // Everything else is untouched.
        for i in [1usize, 2, 3, 5] {
            assert_eq!(swapped[i], ord[i]);
        }
    }

    #[test]
    fn test_apply_swap_is_an_involution() {
        let ord = order();
        let pair = SwapPair::new(ord[2], ord[0]);
        let twice = apply_swap(&apply_swap(&ord, &pair), &pair);
        assert_eq!(twice, ord);
    }
}
