//! Reel input contract.

/// Props and word timestamp types.
pub mod model;
