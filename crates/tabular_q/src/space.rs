//! Discretized multi-dimensional state spaces.
//!
//! A state is one coordinate per dimension. [`StateSpace`] maps it onto a
//! single row index with mixed-radix positional encoding, the last dimension
//! varying fastest:
//!
//! ```text
//! dims  = [2, 3]
//! state = [1, 2]  ->  2 * 1 + 1 * 3 = 5
//! ```

use crate::error::{Error, Result};

/// The shape of a discretized state space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace {
    dimensions: Vec<usize>,
    total_states: usize,
}

impl StateSpace {
    /// Creates a state space from the number of values each coordinate may take.
    ///
    /// Fails with `InvalidArgument` if `dimensions` is empty, contains a zero,
    /// or if the number of states does not fit in `usize`.
    pub fn new(dimensions: Vec<usize>) -> Result<Self> {
        if dimensions.is_empty() {
            return Err(Error::invalid_argument("Dimensions cannot be empty."));
        }
        if let Some(i) = dimensions.iter().position(|&size| size == 0) {
            return Err(Error::invalid_argument(format!(
                "Dimension {} has size 0.",
                i
            )));
        }

        let total_states = dimensions
            .iter()
            .try_fold(1usize, |acc, &size| acc.checked_mul(size))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "State space [{}] is too large.",
                    render(&dimensions)
                ))
            })?;

        Ok(Self {
            dimensions,
            total_states,
        })
    }

    /// Returns the size of every dimension.
    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// Returns the number of coordinates in a state.
    pub fn dimensionality(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the product of all dimension sizes.
    pub fn total_states(&self) -> usize {
        self.total_states
    }

    /// Computes the linear row index of `state`.
    pub fn index_of(&self, state: &[usize]) -> Result<usize> {
        if state.len() != self.dimensions.len() {
            log::warn!(
                "Rejected state [{}]: expected {} coordinates",
                render(state),
                self.dimensions.len()
            );
            return Err(Error::DimensionMismatch {
                expected: self.dimensions.len(),
                got: state.len(),
            });
        }

        let mut index = 0;
        let mut multiplier = 1;
        for (dimension, (&value, &size)) in state.iter().zip(&self.dimensions).enumerate().rev() {
            if value >= size {
                log::warn!(
                    "Rejected state [{}]: coordinate {} out of bounds",
                    render(state),
                    dimension
                );
                return Err(Error::OutOfRange {
                    dimension,
                    value,
                    size,
                });
            }
            index += value * multiplier;
            multiplier *= size;
        }

        Ok(index)
    }

    /// Recovers the state whose linear row index is `index`.
    pub fn state_of(&self, index: usize) -> Result<Vec<usize>> {
        if index >= self.total_states {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.total_states,
            });
        }

        let mut remainder = index;
        let mut state = vec![0; self.dimensions.len()];
        for (slot, &size) in state.iter_mut().zip(&self.dimensions).rev() {
            *slot = remainder % size;
            remainder /= size;
        }
        Ok(state)
    }

    /// Iterates over every state in row order.
    pub fn states(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.total_states).filter_map(move |index| self.state_of(index).ok())
    }

    /// Renders a state as space-separated coordinates, for diagnostics.
    pub fn render(state: &[usize]) -> String {
        render(state)
    }
}

fn render(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
