//! Inclusion-exclusion over the union of events.
//!
//! P(E₁ ∪ … ∪ Eₙ) = Σ_{k=1..n} (-1)^{k+1} Σ_{|S|=k} P(∩_{i∈S} Eᵢ)
//!
//! The sum runs over all 2ⁿ - 1 non-empty subsets, so `n` is bounded by a
//! caller-supplied event limit.

use relia_core::errors::ProbabilityError;

use crate::value::ProbabilityValue;

/// Lexicographic k-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        // Rightmost index that can still advance.
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

/// Inclusion-exclusion where the intersection of the events in a subset is
/// supplied by `intersection`, called once per non-empty subset.
pub fn inclusion_exclusion_with<T, F>(
    events: usize,
    max_events: usize,
    mut intersection: F,
) -> Result<T, ProbabilityError>
where
    T: ProbabilityValue,
    F: FnMut(&[usize]) -> T,
{
    if events > max_events {
        return Err(ProbabilityError::EventLimitExceeded {
            limit: max_events,
            events,
        });
    }

    let mut total = T::zero();
    for k in 1..=events {
        let layer = T::sum_all(Combinations::new(events, k).map(|subset| intersection(&subset)));
        total = if k % 2 == 1 { total + layer } else { total + -layer };
    }
    Ok(total)
}

/// Probability of the union of independent events: each intersection is the
/// product of the member probabilities. Empty input gives zero.
pub fn inclusion_exclusion<T: ProbabilityValue>(
    events: &[T],
    max_events: usize,
) -> Result<T, ProbabilityError> {
    inclusion_exclusion_with(events.len(), max_events, |subset| {
        T::product_all(subset.iter().map(|&i| events[i].clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_are_lexicographic() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn combination_edge_cases() {
        assert_eq!(Combinations::new(3, 3).count(), 1);
        assert_eq!(Combinations::new(3, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(10, 4).count(), 210);
    }

    #[test]
    fn subset_count_is_two_to_the_n_minus_one() {
        let mut calls = 0;
        let _: f64 = inclusion_exclusion_with(5, 20, |_| {
            calls += 1;
            0.0
        })
        .unwrap();
        assert_eq!(calls, 31);
    }
}
