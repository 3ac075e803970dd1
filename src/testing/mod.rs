//! Statistical testing: omnibus chi-square, post-hoc pairwise tests,
//! multiple-comparisons correction

mod chi2;
mod correction;
mod pairs;
mod significance;

pub use chi2::chi_square_test;
pub use correction::{benjamini_hochberg, bonferroni, holm, sidak, CorrectionMethod};
pub use pairs::row_pairs;
pub use significance::significance_code;

use log::{debug, info};
use rayon::prelude::*;

use crate::data::ContingencyTable;
use crate::error::{ChisqError, Result};
use crate::io::{PairwiseResult, PosthocResults};

/// Omnibus test plus corrected pairwise post-hoc comparisons
///
/// Runs the chi-square test of independence on the full table, then tests
/// every unordered pair of row groups on its own 2xC sub-table, corrects the
/// batch of raw p-values with `method`, and marks each pair rejected when
/// its corrected p-value is at most `alpha`.
///
/// Pairwise results are returned in combinations-of-2 order over the input
/// rows: (r0,r1), (r0,r2), ..., (r1,r2), ... The output is deterministic for
/// identical inputs.
pub fn posthoc_with_correction(
    table: &ContingencyTable,
    method: CorrectionMethod,
    alpha: f64,
) -> Result<PosthocResults> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ChisqError::InvalidInput {
            reason: format!("alpha must be in (0, 1), got {}", alpha),
        });
    }

    let omnibus = chi_square_test(table)?;
    info!(
        "Omnibus chi-square: statistic = {:.4}, dof = {}, p = {:.4e}",
        omnibus.statistic, omnibus.dof, omnibus.p_value
    );

    let pairs = row_pairs(table.n_rows());
    debug!("Testing {} pairwise comparisons", pairs.len());

    // Sub-tests are independent; the indexed collect preserves pair order,
    // which the rank-based correction below relies on.
    let pvalues: Vec<f64> = pairs
        .par_iter()
        .map(|&(a, b)| {
            let sub = table.pair_table(a, b)?;
            Ok(chi_square_test(&sub)?.p_value)
        })
        .collect::<Result<Vec<f64>>>()?;

    let padj = method.adjust(&pvalues)?;

    let labels = table.row_labels();
    let results = pairs
        .iter()
        .zip(pvalues.iter().zip(padj.iter()))
        .map(|(&(a, b), (&p, &q))| PairwiseResult {
            label_a: labels[a].clone(),
            label_b: labels[b].clone(),
            p_value: p,
            p_adjusted: q,
            reject: q <= alpha,
        })
        .collect();

    Ok(PosthocResults {
        omnibus,
        pairs: results,
        method,
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn three_group_table() -> ContingencyTable {
        ContingencyTable::new(
            array![
                [50.0, 30.0, 20.0],
                [48.0, 32.0, 20.0],
                [10.0, 30.0, 60.0]
            ],
            labels(&["g1", "g2", "g3"]),
            labels(&["a", "b", "c"]),
        )
        .unwrap()
    }

    #[test]
    fn test_pair_order_and_count() {
        let table = three_group_table();
        let results =
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();

        assert_eq!(results.pairs.len(), 3);
        let order: Vec<(&str, &str)> = results
            .pairs
            .iter()
            .map(|p| (p.label_a.as_str(), p.label_b.as_str()))
            .collect();
        assert_eq!(order, vec![("g1", "g2"), ("g1", "g3"), ("g2", "g3")]);
    }

    #[test]
    fn test_reject_matches_alpha() {
        let table = three_group_table();
        let results =
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();

        for pair in &results.pairs {
            assert_eq!(pair.reject, pair.p_adjusted <= 0.05);
            assert!(pair.p_adjusted >= pair.p_value);
        }

        // g1 and g2 are nearly identical, g3 is very different
        assert!(!results.pairs[0].reject);
        assert!(results.pairs[1].reject);
        assert!(results.pairs[2].reject);
    }

    #[test]
    fn test_pairwise_matches_direct_subtable_test() {
        let table = three_group_table();
        let results =
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();

        let sub = table.pair_table(0, 2).unwrap();
        let direct = chi_square_test(&sub).unwrap();
        assert_eq!(results.pairs[1].p_value, direct.p_value);
    }

    #[test]
    fn test_deterministic_rerun() {
        let table = three_group_table();
        let first =
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();
        let second =
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();

        assert_eq!(first.omnibus.statistic.to_bits(), second.omnibus.statistic.to_bits());
        assert_eq!(first.omnibus.p_value.to_bits(), second.omnibus.p_value.to_bits());
        assert_eq!(first.pairs, second.pairs);
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let table = three_group_table();
        for alpha in [0.0, 1.0, -0.1, 1.5] {
            assert!(matches!(
                posthoc_with_correction(&table, CorrectionMethod::FdrBh, alpha),
                Err(ChisqError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_dimension_error_propagates() {
        let table = ContingencyTable::new(
            array![[10.0, 20.0]],
            labels(&["only"]),
            labels(&["a", "b"]),
        )
        .unwrap();
        assert!(matches!(
            posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05),
            Err(ChisqError::Dimension { .. })
        ));
    }

    #[test]
    fn test_bonferroni_more_conservative_than_bh() {
        let table = three_group_table();
        let bh = posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05).unwrap();
        let bonf =
            posthoc_with_correction(&table, CorrectionMethod::Bonferroni, 0.05).unwrap();

        for (a, b) in bh.pairs.iter().zip(bonf.pairs.iter()) {
            assert!(b.p_adjusted >= a.p_adjusted - 1e-15);
        }
    }
}
