//! Keyed permutation of frame indices.
//!
//! The shuffle is part of the hidden data format: the same key has to produce
//! the same order on every platform and in every release. `ChaCha20Rng` output
//! is value-stable; indices are drawn with a plain modulo, not `rand` range sampling.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Pseudo-random permutation of `0..len`.
///
/// Deterministic for a given seed, which lets the extracting side rebuild the
/// exact order that was used while embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from seed bytes.
    ///
    /// The seed is hashed with FNV-1a 64, the hash seeds a ChaCha20 generator
    /// that drives a Fisher-Yates shuffle of the identity sequence.
    pub fn from_seed(seed: &[u8], len: usize) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(hash_seed(seed));
        let mut indices: Vec<usize> = (0..len).collect();

        for i in (1..len).rev() {
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            indices.swap(i, j);
        }

        Self { indices }
    }

    /// Create an identity permutation (no shuffling).
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// the permuted indices, in traversal order
    pub fn order(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// FNV-1a 64 over the seed bytes.
fn hash_seed(seed: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    seed.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ (byte as u64)).wrapping_mul(FNV_PRIME)
    })
}
