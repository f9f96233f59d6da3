//! Reel composition: validated props, derived pages, and registration metadata.

/// Builder API.
pub mod dsl;
/// Registration metadata.
pub mod meta;
/// The reel value.
pub mod reel;
