//! Input/output: table loading and result structures

mod csv;
mod results;

pub use csv::{read_contingency_table, write_results};
pub use results::{OmnibusResult, PairwiseResult, PosthocResults};
