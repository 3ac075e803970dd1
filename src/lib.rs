//! chisq_posthoc: chi-square test of independence with post-hoc pairwise
//! comparisons and multiple-testing correction
//!
//! Given a contingency table (rows = groups, columns = categories), this
//! crate runs the omnibus chi-square test, then a pairwise chi-square test
//! for every unordered pair of row groups, and corrects the batch of
//! pairwise p-values (Benjamini-Hochberg by default).
//!
//! # Example
//!
//! ```ignore
//! use chisq_posthoc::prelude::*;
//!
//! // Load data
//! let table = read_contingency_table("counts.csv")?;
//!
//! // Omnibus test + corrected pairwise comparisons
//! let results = posthoc_with_correction(&table, CorrectionMethod::FdrBh, 0.05)?;
//!
//! println!("{}", results.summary());
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod io;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::ContingencyTable;
    pub use crate::error::{ChisqError, Result};
    pub use crate::io::{
        read_contingency_table, write_results, OmnibusResult, PairwiseResult, PosthocResults,
    };
    pub use crate::testing::{
        chi_square_test, posthoc_with_correction, significance_code, CorrectionMethod,
    };
}

use prelude::*;

/// Default significance threshold
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Run the full analysis with default parameters (BH correction, alpha 0.05)
pub fn run_posthoc(table: &ContingencyTable) -> Result<PosthocResults> {
    posthoc_with_correction(table, CorrectionMethod::FdrBh, DEFAULT_ALPHA)
}
