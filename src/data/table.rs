//! Contingency table representation
//!
//! Rows are groups (e.g. patient cohorts), columns are categories. Counts are
//! stored as f64 so that tables ingested from CSV with fractional weights
//! still work, but the usual input is non-negative integers.

use std::collections::HashSet;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{ChisqError, Result};

/// A cross-tabulation of counts over two categorical dimensions
///
/// Rows are groups identified by unique string labels, columns are categories
/// shared and aligned across all rows.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    /// Raw count data (groups x categories)
    counts: Array2<f64>,
    /// Group labels, one per row, unique
    row_labels: Vec<String>,
    /// Category labels, one per column
    col_labels: Vec<String>,
}

impl ContingencyTable {
    /// Create a new contingency table from raw counts and labels
    pub fn new(
        counts: Array2<f64>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> Result<Self> {
        let (n_rows, n_cols) = counts.dim();

        if row_labels.len() != n_rows {
            return Err(ChisqError::InvalidTable {
                reason: format!(
                    "Expected {} row labels, got {}",
                    n_rows,
                    row_labels.len()
                ),
            });
        }

        if col_labels.len() != n_cols {
            return Err(ChisqError::InvalidTable {
                reason: format!(
                    "Expected {} column labels, got {}",
                    n_cols,
                    col_labels.len()
                ),
            });
        }

        let unique: HashSet<&String> = row_labels.iter().collect();
        if unique.len() != row_labels.len() {
            return Err(ChisqError::InvalidTable {
                reason: "Row labels must be unique".to_string(),
            });
        }

        if counts.iter().any(|&x| x < 0.0 || !x.is_finite()) {
            return Err(ChisqError::InvalidTable {
                reason: "Counts must be non-negative finite values".to_string(),
            });
        }

        if !counts.is_empty() && counts.iter().all(|&x| x == 0.0) {
            return Err(ChisqError::InvalidTable {
                reason: "All counts are zero".to_string(),
            });
        }

        Ok(Self {
            counts,
            row_labels,
            col_labels,
        })
    }

    /// Get the number of rows (groups)
    pub fn n_rows(&self) -> usize {
        self.counts.nrows()
    }

    /// Get the number of columns (categories)
    pub fn n_cols(&self) -> usize {
        self.counts.ncols()
    }

    /// Get the raw counts as a view
    pub fn counts(&self) -> ArrayView2<'_, f64> {
        self.counts.view()
    }

    /// Get the group labels
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Get the category labels
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Get counts for a specific group
    pub fn row(&self, row_idx: usize) -> ArrayView1<'_, f64> {
        self.counts.row(row_idx)
    }

    /// Get row index by group label
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|l| l == label)
    }

    /// Sum of counts per group
    pub fn row_totals(&self) -> Array1<f64> {
        self.counts.sum_axis(Axis(1))
    }

    /// Sum of counts per category
    pub fn col_totals(&self) -> Array1<f64> {
        self.counts.sum_axis(Axis(0))
    }

    /// Total count over the whole table
    pub fn grand_total(&self) -> f64 {
        self.counts.sum()
    }

    /// Build the 2-row sub-table for a pair of groups
    ///
    /// All columns are retained in their original order; row `i` of the
    /// sub-table is row `row_a` of the parent, row `1` is row `row_b`.
    pub fn pair_table(&self, row_a: usize, row_b: usize) -> Result<Self> {
        let n = self.n_rows();
        if row_a >= n || row_b >= n {
            return Err(ChisqError::InvalidInput {
                reason: format!(
                    "Row index out of range: table has {} rows, requested ({}, {})",
                    n, row_a, row_b
                ),
            });
        }

        let sub_counts = self.counts.select(Axis(0), &[row_a, row_b]);
        let sub_labels = vec![self.row_labels[row_a].clone(), self.row_labels[row_b].clone()];

        Self::new(sub_counts, sub_labels, self.col_labels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_creation() {
        let counts = array![[10.0, 20.0, 30.0], [5.0, 15.0, 25.0]];
        let table =
            ContingencyTable::new(counts, labels(&["g1", "g2"]), labels(&["a", "b", "c"])).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(table.grand_total(), 105.0);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let counts = array![[10.0, -5.0], [5.0, 15.0]];
        let result = ContingencyTable::new(counts, labels(&["g1", "g2"]), labels(&["a", "b"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_row_labels_rejected() {
        let counts = array![[10.0, 5.0], [5.0, 15.0]];
        let result = ContingencyTable::new(counts, labels(&["g1", "g1"]), labels(&["a", "b"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_label_count_mismatch_rejected() {
        let counts = array![[10.0, 5.0], [5.0, 15.0]];
        let result = ContingencyTable::new(counts, labels(&["g1"]), labels(&["a", "b"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_totals() {
        let counts = array![[10.0, 20.0], [5.0, 15.0]];
        let table =
            ContingencyTable::new(counts, labels(&["g1", "g2"]), labels(&["a", "b"])).unwrap();
        assert_eq!(table.row_totals().to_vec(), vec![30.0, 20.0]);
        assert_eq!(table.col_totals().to_vec(), vec![15.0, 35.0]);
    }

    #[test]
    fn test_pair_table_keeps_columns() {
        let counts = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let table = ContingencyTable::new(
            counts,
            labels(&["g1", "g2", "g3"]),
            labels(&["a", "b", "c"]),
        )
        .unwrap();

        let sub = table.pair_table(0, 2).unwrap();
        assert_eq!(sub.n_rows(), 2);
        assert_eq!(sub.row_labels(), &["g1".to_string(), "g3".to_string()]);
        assert_eq!(sub.row(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(sub.row(1).to_vec(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_pair_table_out_of_range() {
        let counts = array![[1.0, 2.0], [3.0, 4.0]];
        let table =
            ContingencyTable::new(counts, labels(&["g1", "g2"]), labels(&["a", "b"])).unwrap();
        assert!(table.pair_table(0, 5).is_err());
    }
}
