//! Building reel props from transcription analysis and clip picks.

/// Analysis documents, clip specs, and props assembly.
pub mod clip;
