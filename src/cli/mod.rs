//! Command-line interface for chisq_posthoc

use clap::Parser;

#[derive(Parser)]
#[command(name = "chisq_posthoc")]
#[command(version)]
#[command(about = "Chi-square test of independence with post-hoc pairwise comparisons")]
#[command(
    long_about = "Chi-square test of independence with post-hoc pairwise comparisons\n\n\
        Runs the omnibus chi-square test on the full contingency table, then a\n\
        pairwise chi-square test for every pair of row groups, and corrects the\n\
        pairwise p-values for multiple comparisons (Benjamini-Hochberg by default).",
    after_long_help = "\
Examples:
  # Default: BH correction at alpha 0.05
  chisq_posthoc counts.csv

  # Bonferroni at a stricter threshold, writing a TSV of pairwise results
  chisq_posthoc counts.csv --method bonferroni --alpha 0.01 -o pairs.tsv

  # Machine-readable output
  chisq_posthoc counts.csv --json"
)]
pub struct Cli {
    /// Path to contingency table CSV/TSV file
    #[arg(
        long_help = "Path to the contingency table file.\n\
            Format: first column = group labels, first row = category labels,\n\
            remaining cells = non-negative counts.\n\
            Supports both CSV (comma) and TSV (tab) delimiters (auto-detected)."
    )]
    pub table: String,

    /// Correction method [default: fdr_bh]
    #[arg(short, long, default_value = "fdr_bh",
        long_help = "Multiple-comparisons correction method.\n\
            fdr_bh:     Benjamini-Hochberg false discovery rate (default)\n\
            bonferroni: Bonferroni family-wise error rate\n\
            holm:       Holm step-down\n\
            sidak:      Sidak one-step")]
    pub method: String,

    /// Significance threshold [default: 0.05]
    #[arg(short, long, default_value = "0.05",
        long_help = "Significance threshold for the reject decision.\n\
            A pair is rejected when its corrected p-value is at most alpha.\n\
            Must lie strictly between 0 and 1.")]
    pub alpha: f64,

    /// Output TSV file for pairwise results
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print results as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Number of threads (0 = auto) [default: 0]
    #[arg(short = 't', long, default_value = "0")]
    pub threads: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
