//! Index command implementation.

use burrows_codec::config::SuffixSortConfig;
use burrows_codec::suffix::CircularSuffixIndex;
use serde::Serialize;
use std::path::Path;

use crate::utils::read_input;

/// Text indexed when none is given.
pub const DEFAULT_TEXT: &str = "ABRACADABRA!";

/// Machine-readable index listing.
#[derive(Debug, Serialize)]
pub struct IndexReport {
    /// Block length.
    pub length: usize,
    /// Sorted row of the unrotated block.
    pub first_row: Option<usize>,
    /// Starting offset of each sorted rotation.
    pub order: Vec<usize>,
}

pub fn build_report(data: &[u8], config: &SuffixSortConfig) -> IndexReport {
    let index = CircularSuffixIndex::with_config(data, config);
    IndexReport {
        length: index.len(),
        first_row: index.first_row(),
        order: index.into_vec(),
    }
}

pub fn cmd_index(
    text: Option<&str>,
    input: Option<&Path>,
    json: bool,
    config: &SuffixSortConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = match (text, input) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => read_input(Some(path))?,
        (None, None) => DEFAULT_TEXT.as_bytes().to_vec(),
    };

    let report = build_report(&data, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("length = {}", report.length);
    for (row, offset) in report.order.iter().enumerate() {
        println!("{:2}: {:2}", row, offset);
    }

    Ok(())
}
