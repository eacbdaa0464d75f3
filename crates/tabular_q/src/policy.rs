//! Epsilon-greedy action selection.

use crate::error::{Error, Result};
use crate::value::QValue;
use rand::Rng;

/// How an action was picked by [`EpsilonGreedy::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The action with the highest Q-value (lowest index on ties).
    Greedy(usize),
    /// An action drawn uniformly at random.
    Random(usize),
}

impl Selection {
    /// Returns the selected action index.
    pub fn action(self) -> usize {
        match self {
            Selection::Greedy(action) | Selection::Random(action) => action,
        }
    }
}

/// Exploits the best-known action with probability `exploit_probability` and
/// explores uniformly otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    exploit_probability: f64,
}

impl EpsilonGreedy {
    /// Creates a policy that takes the greedy action with probability `exploit_probability`.
    pub fn new(exploit_probability: f64) -> Self {
        Self {
            exploit_probability,
        }
    }

    /// Creates a policy that explores with probability `epsilon`.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self::new(1.0 - epsilon)
    }

    /// Returns the probability of taking the greedy action.
    pub fn exploit_probability(&self) -> f64 {
        self.exploit_probability
    }

    /// Returns the probability of exploring (epsilon).
    pub fn epsilon(&self) -> f64 {
        1.0 - self.exploit_probability
    }

    /// Picks an action given the Q-values of the current state.
    ///
    /// A value drawn from `[0, 1)` below `exploit_probability` selects the
    /// greedy action; anything else selects uniformly among all actions.
    pub fn select<T: QValue, R: Rng>(&self, q_values: &[T], rng: &mut R) -> Result<Selection> {
        if q_values.is_empty() {
            return Err(Error::invalid_argument("Cannot choose from an empty action set."));
        }

        if rng.random::<f64>() < self.exploit_probability {
            Ok(Selection::Greedy(greedy(q_values)))
        } else {
            Ok(Selection::Random(rng.random_range(0..q_values.len())))
        }
    }
}

/// Returns the index of the strictly greatest value, the first one on ties.
///
/// `q_values` must not be empty.
pub(crate) fn greedy<T: QValue>(q_values: &[T]) -> usize {
    let mut best_action = 0;
    let mut max_q = q_values[0];
    for (action, &q) in q_values.iter().enumerate().skip(1) {
        if q > max_q {
            best_action = action;
            max_q = q;
        }
    }
    best_action
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_full_exploitation_is_greedy() {
        let policy = EpsilonGreedy::new(1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let q = [0.1, 0.9, 0.3];
        for _ in 0..100 {
            assert_eq!(policy.select(&q, &mut rng).unwrap(), Selection::Greedy(1));
        }
    }

    #[test]
    fn test_full_exploration_is_random() {
        let policy = EpsilonGreedy::with_epsilon(1.0);
        let mut rng = StdRng::seed_from_u64(2);
        let q = [0.0f32, 5.0, 0.0, 0.0];
        let mut seen = [false; 4];
        for _ in 0..500 {
            match policy.select(&q, &mut rng).unwrap() {
                Selection::Random(a) => seen[a] = true,
                other => panic!("expected a random selection, got {:?}", other),
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_greedy_tie_break() {
        assert_eq!(greedy(&[1.0, 2.0, 2.0]), 1);
        assert_eq!(greedy(&[0.0f32; 5]), 0);
        assert_eq!(greedy(&[-3.0, -1.0, -2.0]), 1);
    }

    #[test]
    fn test_empty_rejected() {
        let policy = EpsilonGreedy::new(0.5);
        let mut rng = StdRng::seed_from_u64(3);
        let q: [f64; 0] = [];
        assert!(matches!(
            policy.select(&q, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_epsilon_accessors() {
        let policy = EpsilonGreedy::new(0.75);
        assert_eq!(policy.exploit_probability(), 0.75);
        assert_eq!(policy.epsilon(), 0.25);
        assert_eq!(Selection::Random(3).action(), 3);
    }
}
