//! Command implementations for the burrows CLI.

pub mod index;
pub mod stats;
pub mod transform;

pub use index::cmd_index;
pub use stats::cmd_stats;
pub use transform::{Stage, cmd_transform};
