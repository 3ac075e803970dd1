//! Post-hoc pairwise enumeration
//!
//! The pair order is load-bearing: corrected p-values are aligned to it
//! positionally, so it must be the standard "combinations of size 2" order
//! over the original row sequence.

/// Enumerate all unordered pairs of row indices in combinatorial order
///
/// For rows 0..n the pairs are (0,1), (0,2), ..., (0,n-1), (1,2), ...
/// The result has length n*(n-1)/2.
pub fn row_pairs(n_rows: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n_rows * n_rows.saturating_sub(1) / 2);
    for a in 0..n_rows {
        for b in (a + 1)..n_rows {
            pairs.push((a, b));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_order() {
        let pairs = row_pairs(4);
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_pair_count() {
        for n in 0..10 {
            assert_eq!(row_pairs(n).len(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn test_degenerate() {
        assert!(row_pairs(0).is_empty());
        assert!(row_pairs(1).is_empty());
        assert_eq!(row_pairs(2), vec![(0, 1)]);
    }
}
