//! Omnibus chi-square test of independence

use ndarray::Array2;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::data::ContingencyTable;
use crate::error::{ChisqError, Result};
use crate::io::OmnibusResult;

/// Chi-square test of independence on a full contingency table
///
/// Computes expected frequencies under independence, the chi-square statistic
/// with (R-1)(C-1) degrees of freedom, and the upper-tail p-value. The Yates
/// continuity correction is applied for 2x2 tables only; it has no defined
/// effect for larger tables, matching scipy's `correction=True` behavior.
pub fn chi_square_test(table: &ContingencyTable) -> Result<OmnibusResult> {
    let (r, c) = (table.n_rows(), table.n_cols());
    if r < 2 || c < 2 {
        return Err(ChisqError::Dimension { rows: r, cols: c });
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    let grand_total = table.grand_total();

    // A zero row or column total makes an entire row/column of expected
    // frequencies zero and the statistic undefined.
    if let Some(i) = row_totals.iter().position(|&t| t == 0.0) {
        return Err(ChisqError::InvalidTable {
            reason: format!(
                "Row '{}' sums to zero; expected frequencies are undefined",
                table.row_labels()[i]
            ),
        });
    }
    if let Some(j) = col_totals.iter().position(|&t| t == 0.0) {
        return Err(ChisqError::InvalidTable {
            reason: format!(
                "Column '{}' sums to zero; expected frequencies are undefined",
                table.col_labels()[j]
            ),
        });
    }

    let mut expected = Array2::zeros((r, c));
    for i in 0..r {
        for j in 0..c {
            expected[[i, j]] = row_totals[i] * col_totals[j] / grand_total;
        }
    }

    let yates = r == 2 && c == 2;

    let counts = table.counts();
    let mut statistic = 0.0;
    for i in 0..r {
        for j in 0..c {
            let e = expected[[i, j]];
            let mut dev = (counts[[i, j]] - e).abs();
            if yates {
                dev = (dev - 0.5).max(0.0);
            }
            statistic += dev * dev / e;
        }
    }

    let dof = (r - 1) * (c - 1);
    // dof >= 1 after the dimension check, so construction cannot fail
    let chi2 = ChiSquared::new(dof as f64).unwrap();
    let p_value = chi2.sf(statistic);

    Ok(OmnibusResult {
        statistic,
        p_value,
        dof,
        expected,
    })
}
