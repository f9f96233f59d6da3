//! Static asset resolution.

/// `videoSrc` normalization and resolution.
pub mod resolve;
