//! CSV reading and writing for contingency tables and results

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ndarray::Array2;

use crate::data::ContingencyTable;
use crate::error::{ChisqError, Result};
use crate::io::PosthocResults;
use crate::testing::significance_code;

/// Strip surrounding quotes from a string
fn strip_quotes(s: &str) -> String {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')) {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Read a contingency table from a CSV or TSV file
///
/// Expected format: first column is group labels, first row is category
/// labels. The delimiter (comma or tab) is auto-detected from the header.
pub fn read_contingency_table<P: AsRef<Path>>(path: P) -> Result<ContingencyTable> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = lines.next().ok_or_else(|| ChisqError::InvalidTable {
        reason: "Empty file".to_string(),
    })??;

    let delimiter = if header_line.contains('\t') { '\t' } else { ',' };

    let header: Vec<&str> = header_line.split(delimiter).collect();
    if header.len() < 2 {
        return Err(ChisqError::InvalidTable {
            reason: "Not enough columns in header".to_string(),
        });
    }

    let col_labels: Vec<String> = header[1..].iter().map(|s| strip_quotes(s)).collect();
    let n_cols = col_labels.len();

    let mut row_labels: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != n_cols + 1 {
            return Err(ChisqError::InvalidTable {
                reason: format!(
                    "Row has {} columns, expected {}",
                    fields.len(),
                    n_cols + 1
                ),
            });
        }

        row_labels.push(strip_quotes(fields[0]));

        let counts: Result<Vec<f64>> = fields[1..]
            .iter()
            .map(|s| {
                let val = strip_quotes(s);
                val.parse::<f64>().map_err(|_| ChisqError::InvalidTable {
                    reason: format!("Invalid count value: {}", val),
                })
            })
            .collect();

        rows.push(counts?);
    }

    if row_labels.is_empty() {
        return Err(ChisqError::InvalidTable {
            reason: "No data rows found".to_string(),
        });
    }

    let n_rows = row_labels.len();
    let mut counts = Array2::zeros((n_rows, n_cols));
    for (i, row) in rows.iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            counts[[i, j]] = val;
        }
    }

    ContingencyTable::new(counts, row_labels, col_labels)
}

/// Write pairwise results to a TSV file
pub fn write_results<P: AsRef<Path>>(path: P, results: &PosthocResults) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "group_a\tgroup_b\tpvalue\tpadj\tsignificance\treject")?;

    for pair in &results.pairs {
        writeln!(
            file,
            "{}\t{}\t{:.6e}\t{:.6e}\t{}\t{}",
            pair.label_a,
            pair.label_b,
            pair.p_value,
            pair.p_adjusted,
            significance_code(pair.p_adjusted, results.alpha),
            pair.reject,
        )?;
    }

    Ok(())
}
