//! Significance code annotation

/// Map a p-value to a display significance code
///
/// Thresholds are fixed: p > alpha gives "ns", then "****" below 1e-4,
/// "***" below 1e-3, "**" below 1e-2, and "*" otherwise. Display only; the
/// reject decision is made on the corrected p-value against alpha, not here.
pub fn significance_code(p_value: f64, alpha: f64) -> &'static str {
    if p_value > alpha {
        "ns"
    } else if p_value < 1e-4 {
        "****"
    } else if p_value < 1e-3 {
        "***"
    } else if p_value < 1e-2 {
        "**"
    } else {
        "*"
    }
}
