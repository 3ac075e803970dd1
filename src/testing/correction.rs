//! P-value adjustment methods for multiple testing correction
//!
//! Implements:
//! - Benjamini-Hochberg (BH) FDR correction (the default)
//! - Bonferroni family-wise error rate correction
//! - Holm step-down correction
//! - Sidak correction
//!
//! The batch is corrected atomically: rank-based procedures (BH, Holm) need
//! every p-value before any adjusted value can be produced.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChisqError, Result};

/// Multiple-comparisons correction method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMethod {
    /// Benjamini-Hochberg false discovery rate (statsmodels "fdr_bh")
    #[default]
    FdrBh,
    /// Bonferroni family-wise error rate
    Bonferroni,
    /// Holm step-down
    Holm,
    /// Sidak one-step
    Sidak,
}

impl CorrectionMethod {
    /// The string identifier used on the command line and in output
    pub fn name(&self) -> &'static str {
        match self {
            CorrectionMethod::FdrBh => "fdr_bh",
            CorrectionMethod::Bonferroni => "bonferroni",
            CorrectionMethod::Holm => "holm",
            CorrectionMethod::Sidak => "sidak",
        }
    }

    /// Adjust a batch of raw p-values
    ///
    /// The output aligns positionally with the input. Fails eagerly on an
    /// empty batch or any p-value outside [0, 1]; out-of-range values are a
    /// contract violation upstream and are never clamped.
    pub fn adjust(&self, pvalues: &[f64]) -> Result<Vec<f64>> {
        validate_batch(pvalues)?;
        Ok(match self {
            CorrectionMethod::FdrBh => benjamini_hochberg(pvalues),
            CorrectionMethod::Bonferroni => bonferroni(pvalues),
            CorrectionMethod::Holm => holm(pvalues),
            CorrectionMethod::Sidak => sidak(pvalues),
        })
    }
}

impl FromStr for CorrectionMethod {
    type Err = ChisqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fdr_bh" => Ok(CorrectionMethod::FdrBh),
            "bonferroni" => Ok(CorrectionMethod::Bonferroni),
            "holm" => Ok(CorrectionMethod::Holm),
            "sidak" => Ok(CorrectionMethod::Sidak),
            other => Err(ChisqError::UnknownCorrectionMethod {
                name: other.to_string(),
            }),
        }
    }
}

fn validate_batch(pvalues: &[f64]) -> Result<()> {
    if pvalues.is_empty() {
        return Err(ChisqError::EmptyBatch);
    }
    for &p in pvalues {
        if !(0.0..=1.0).contains(&p) {
            return Err(ChisqError::InvalidPValue { value: p });
        }
    }
    Ok(())
}

/// Ascending sort order of a p-value slice, by index
fn ascending_order(pvalues: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..pvalues.len()).collect();
    indices.sort_by(|&a, &b| {
        pvalues[a]
            .partial_cmp(&pvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Apply Benjamini-Hochberg FDR correction to p-values
/// R equivalent: p.adjust(method="BH")
///
/// Returns adjusted p-values (q-values) that control the false discovery
/// rate: p_adj(k) = min over j >= k of p(j) * m / j in rank order, mapped
/// back to the input order.
pub fn benjamini_hochberg(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len();
    let indices = ascending_order(pvalues);

    let mut padj = vec![0.0; m];
    let mut cummin = f64::INFINITY;

    // Walk from the largest rank down, taking a running minimum
    for (rank0, &i) in indices.iter().enumerate().rev() {
        let adj = (pvalues[i] * m as f64 / (rank0 + 1) as f64).min(1.0);
        cummin = cummin.min(adj);
        padj[i] = cummin;
    }

    padj
}

/// Apply Bonferroni correction to p-values
/// R equivalent: p.adjust(method="bonferroni")
///
/// Simple and conservative: multiplies each p-value by the number of tests.
pub fn bonferroni(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len() as f64;
    pvalues.iter().map(|&p| (p * m).min(1.0)).collect()
}

/// Apply Holm step-down correction to p-values
/// R equivalent: p.adjust(method="holm")
///
/// p_adj(k) = max over j <= k of (m - j + 1) * p(j) in rank order, capped
/// at 1, mapped back to the input order.
pub fn holm(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len();
    let indices = ascending_order(pvalues);

    let mut padj = vec![0.0; m];
    let mut cummax = 0.0_f64;

    for (rank0, &i) in indices.iter().enumerate() {
        let adj = ((m - rank0) as f64 * pvalues[i]).min(1.0);
        cummax = cummax.max(adj);
        padj[i] = cummax;
    }

    padj
}

/// Apply Sidak correction to p-values
/// statsmodels equivalent: multipletests(method="sidak")
///
/// One-step: p_adj = 1 - (1 - p)^m.
pub fn sidak(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len() as f64;
    pvalues.iter().map(|&p| 1.0 - (1.0 - p).powf(m)).collect()
}
