//! Flattened Q-table storage.

use crate::error::{Error, Result};
use crate::policy::greedy;
use crate::value::QValue;

/// A `rows × actions` table of Q-values stored row-major in one buffer.
///
/// Rows are linear state indices as produced by
/// [`StateSpace::index_of`](crate::StateSpace::index_of).
#[derive(Debug, Clone, PartialEq)]
pub struct QTable<T> {
    values: Vec<T>,
    rows: usize,
    actions: usize,
}

impl<T: QValue> QTable<T> {
    /// Allocates a zero-filled table.
    pub fn zeros(rows: usize, actions: usize) -> Result<Self> {
        let len = rows.checked_mul(actions).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Q-table of {} states x {} actions is too large.",
                rows, actions
            ))
        })?;
        Ok(Self {
            values: vec![T::zero(); len],
            rows,
            actions,
        })
    }

    /// Returns the number of rows (states).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (actions).
    pub fn actions(&self) -> usize {
        self.actions
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values of every action in `row`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let start = self.row_start(row)?;
        Ok(&self.values[start..start + self.actions])
    }

    /// Returns the value at (`row`, `action`).
    pub fn get(&self, row: usize, action: usize) -> Result<T> {
        Ok(self.values[self.cell(row, action)?])
    }

    /// Returns a mutable reference to the value at (`row`, `action`).
    pub fn get_mut(&mut self, row: usize, action: usize) -> Result<&mut T> {
        let cell = self.cell(row, action)?;
        Ok(&mut self.values[cell])
    }

    /// Overwrites the value at (`row`, `action`).
    pub fn set(&mut self, row: usize, action: usize, value: T) -> Result<()> {
        *self.get_mut(row, action)? = value;
        Ok(())
    }

    /// Returns the largest value in `row`.
    pub fn max(&self, row: usize) -> Result<T> {
        let values = self.row(row)?;
        let (&first, rest) = values.split_first().ok_or(Error::IndexOutOfRange {
            index: 0,
            len: self.actions,
        })?;
        Ok(rest
            .iter()
            .fold(first, |best, &q| if q > best { q } else { best }))
    }

    /// Returns the action with the largest value in `row`.
    ///
    /// Only a strictly greater value displaces the current best, so ties go to
    /// the lowest action index.
    pub fn argmax(&self, row: usize) -> Result<usize> {
        let values = self.row(row)?;
        if values.is_empty() {
            return Err(Error::IndexOutOfRange {
                index: 0,
                len: self.actions,
            });
        }
        Ok(greedy(values))
    }

    /// Resets every cell to zero.
    pub fn fill_zero(&mut self) {
        self.values.fill(T::zero());
    }

    /// Returns the raw row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    fn row_start(&self, row: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        Ok(row * self.actions)
    }

    fn cell(&self, row: usize, action: usize) -> Result<usize> {
        if action >= self.actions {
            log::warn!(
                "Rejected action {}: only {} actions available",
                action,
                self.actions
            );
            return Err(Error::IndexOutOfRange {
                index: action,
                len: self.actions,
            });
        }
        Ok(self.row_start(row)? + action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let table: QTable<f64> = QTable::zeros(4, 2).unwrap();
        assert_eq!(table.rows(), 4);
        assert_eq!(table.actions(), 2);
        assert_eq!(table.len(), 8);
        assert!(table.as_slice().iter().all(|&q| q == 0.0));
    }

    #[test]
    fn test_set_get() {
        let mut table: QTable<f32> = QTable::zeros(3, 3).unwrap();
        table.set(2, 1, 1.5).unwrap();
        assert_eq!(table.get(2, 1).unwrap(), 1.5);
        assert_eq!(table.row(2).unwrap(), &[0.0, 1.5, 0.0]);
        assert_eq!(table.as_slice()[7], 1.5);
    }

    #[test]
    fn test_out_of_range() {
        let mut table: QTable<f64> = QTable::zeros(2, 2).unwrap();
        assert_eq!(
            table.get(0, 2).unwrap_err(),
            Error::IndexOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(
            table.set(2, 0, 1.0).unwrap_err(),
            Error::IndexOutOfRange { index: 2, len: 2 }
        );
        assert!(table.row(5).is_err());
    }

    #[test]
    fn test_max_and_argmax() {
        let mut table: QTable<f64> = QTable::zeros(1, 4).unwrap();
        table.set(0, 0, -1.0).unwrap();
        table.set(0, 1, 0.5).unwrap();
        table.set(0, 2, 2.0).unwrap();
        table.set(0, 3, 0.8).unwrap();
        assert_eq!(table.max(0).unwrap(), 2.0);
        assert_eq!(table.argmax(0).unwrap(), 2);
    }

    #[test]
    fn test_argmax_ties_go_to_lowest_index() {
        let mut table: QTable<f64> = QTable::zeros(1, 3).unwrap();
        table.set(0, 1, 3.0).unwrap();
        table.set(0, 2, 3.0).unwrap();
        assert_eq!(table.argmax(0).unwrap(), 1);

        let zeros: QTable<f64> = QTable::zeros(1, 3).unwrap();
        assert_eq!(zeros.argmax(0).unwrap(), 0);
    }

    #[test]
    fn test_fill_zero() {
        let mut table: QTable<f64> = QTable::zeros(2, 2).unwrap();
        table.set(1, 1, 9.0).unwrap();
        table.fill_zero();
        assert!(table.as_slice().iter().all(|&q| q == 0.0));
    }

    #[test]
    fn test_empty_row_has_no_max() {
        let table: QTable<f64> = QTable::zeros(2, 0).unwrap();
        assert!(table.is_empty());
        assert!(table.max(0).is_err());
        assert!(table.argmax(0).is_err());
    }
}
