//! Stats command implementation.

use burrows_codec::{bwt, mtf};
use serde::Serialize;
use std::path::Path;

use crate::utils::read_input;

/// How well the transforms concentrate an input.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Input length in bytes.
    pub length: usize,
    /// Distinct byte values in the input.
    pub distinct_symbols: usize,
    /// Burrows-Wheeler first-row index.
    pub first_row: usize,
    /// Maximal runs of equal bytes in the input.
    pub input_runs: usize,
    /// Maximal runs of equal bytes in the last column.
    pub bwt_runs: usize,
    /// Fraction of move-to-front indices that are zero.
    pub mtf_zero_ratio: f64,
    /// Mean move-to-front index.
    pub mtf_mean_index: f64,
}

fn count_runs(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    1 + data.windows(2).filter(|w| w[0] != w[1]).count()
}

pub fn build_report(data: &[u8]) -> StatsReport {
    let mut seen = [false; 256];
    for &byte in data {
        seen[byte as usize] = true;
    }

    let block = bwt::transform(data);
    let indices = mtf::transform(&block.last);

    let denominator = data.len().max(1) as f64;
    let zeros = indices.iter().filter(|&&i| i == 0).count();
    let index_sum: u64 = indices.iter().map(|&i| i as u64).sum();

    StatsReport {
        length: data.len(),
        distinct_symbols: seen.iter().filter(|&&s| s).count(),
        first_row: block.first,
        input_runs: count_runs(data),
        bwt_runs: count_runs(&block.last),
        mtf_zero_ratio: zeros as f64 / denominator,
        mtf_mean_index: index_sum as f64 / denominator,
    }
}

pub fn cmd_stats(input: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let report = build_report(&data);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Transform Statistics");
    println!("====================");
    println!("Length: {} bytes", report.length);
    println!("Distinct symbols: {}", report.distinct_symbols);
    println!("BWT first row: {}", report.first_row);
    println!("Runs: {} -> {} after BWT", report.input_runs, report.bwt_runs);
    println!("MTF zeros: {:.1}%", report.mtf_zero_ratio * 100.0);
    println!("MTF mean index: {:.2}", report.mtf_mean_index);

    Ok(())
}
