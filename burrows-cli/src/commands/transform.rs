//! Transform commands (bwt, mtf, pipeline).

use burrows_codec::config::SuffixSortConfig;
use burrows_codec::{BurrowsWheeler, MoveToFront, Pipeline};
use burrows_core::{ByteCodec, Direction};
use log::info;
use std::path::Path;

use crate::utils::{read_input, write_output};

/// Which stage a transform command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Framed Burrows-Wheeler transform.
    Bwt(SuffixSortConfig),
    /// Move-to-front over the full byte alphabet.
    Mtf,
    /// Burrows-Wheeler followed by move-to-front.
    Pipeline(SuffixSortConfig),
}

impl Stage {
    /// Build the codec for this stage.
    pub fn codec(self) -> Box<dyn ByteCodec> {
        match self {
            Stage::Bwt(config) => Box::new(BurrowsWheeler::new(config)),
            Stage::Mtf => Box::new(MoveToFront::new()),
            Stage::Pipeline(config) => Box::new(Pipeline::new(config)),
        }
    }
}

/// Apply one stage to the whole input.
pub fn run_stage(
    stage: Stage,
    direction: Direction,
    input: &[u8],
) -> burrows_core::Result<Vec<u8>> {
    let codec = stage.codec();
    let output = codec.apply(direction, input)?;
    info!(
        "{} {:?}: {} bytes -> {} bytes",
        codec.name(),
        direction,
        input.len(),
        output.len()
    );
    Ok(output)
}

pub fn cmd_transform(
    stage: Stage,
    direction: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let result = run_stage(stage, direction, &data)?;
    write_output(output, &result)?;
    Ok(())
}
