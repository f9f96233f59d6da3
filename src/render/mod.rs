//! Frame rendering: per-frame visual trees and range evaluation.

/// Stateless per-frame evaluation.
pub mod frame;
/// Range evaluation (sequential or chunked parallel).
pub mod pipeline;
/// Style values and derivations.
pub mod style;
/// Declarative visual tree.
pub mod tree;
