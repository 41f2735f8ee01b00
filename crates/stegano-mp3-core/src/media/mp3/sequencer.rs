use log::debug;

use super::permutation::Permutation;
use super::scanner::FrameTable;
use crate::media::configuration::Configuration;

/// Absolute byte positions of all ancillary bytes in embedding order.
///
/// Frames are visited in ascending order, or shuffled by the key when random
/// embedding is enabled. Bytes within one frame always keep their offset order.
pub fn order(table: &FrameTable, config: &Configuration) -> Vec<usize> {
    let frames = table.frames();
    let permutation = if config.random_embedding() {
        Permutation::from_seed(config.key().as_bytes(), frames.len())
    } else {
        Permutation::identity(frames.len())
    };

    let positions: Vec<usize> = permutation
        .iter()
        .flat_map(|i| frames[i].ancillary())
        .collect();
    debug!(
        "ordered {} ancillary bytes over {} frames",
        positions.len(),
        frames.len()
    );

    positions
}
