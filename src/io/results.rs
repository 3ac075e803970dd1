//! Result structures for the omnibus and post-hoc analyses

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::testing::{significance_code, CorrectionMethod};

/// Result of the omnibus chi-square test of independence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmnibusResult {
    /// Chi-square statistic
    pub statistic: f64,
    /// Upper-tail p-value
    pub p_value: f64,
    /// Degrees of freedom: (rows - 1) * (columns - 1)
    pub dof: usize,
    /// Expected frequencies under independence, same shape as the input
    pub expected: Array2<f64>,
}

/// One pairwise post-hoc comparison between two groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseResult {
    /// First group label
    pub label_a: String,
    /// Second group label
    pub label_b: String,
    /// Raw p-value from the 2xC sub-table test
    pub p_value: f64,
    /// Corrected p-value
    pub p_adjusted: f64,
    /// True iff p_adjusted <= alpha
    pub reject: bool,
}

/// Full analysis output: omnibus test plus ordered pairwise comparisons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosthocResults {
    pub omnibus: OmnibusResult,
    /// Pairwise results in combinations-of-2 order over the input rows
    pub pairs: Vec<PairwiseResult>,
    pub method: CorrectionMethod,
    pub alpha: f64,
}

impl PosthocResults {
    /// Render a human-readable summary of the analysis
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str("Chi-square test of independence\n");
        out.push_str(&format!(
            "  statistic = {:.4}, dof = {}, p-value = {:.4e}\n\n",
            self.omnibus.statistic, self.omnibus.dof, self.omnibus.p_value
        ));

        out.push_str(&format!(
            "Post-hoc pairwise comparisons ({} pairs, {} correction, alpha = {})\n",
            self.pairs.len(),
            self.method.name(),
            self.alpha
        ));

        let label_width = self
            .pairs
            .iter()
            .map(|p| p.label_a.len() + p.label_b.len() + 4)
            .max()
            .unwrap_or(0);

        for pair in &self.pairs {
            let vs = format!("{} vs {}", pair.label_a, pair.label_b);
            out.push_str(&format!(
                "  {:<width$}  p = {:.4e}  p_adj = {:.4e}  {:<4}  {}\n",
                vs,
                pair.p_value,
                pair.p_adjusted,
                significance_code(pair.p_adjusted, self.alpha),
                if pair.reject { "reject" } else { "accept" },
                width = label_width
            ));
        }

        out
    }
}
