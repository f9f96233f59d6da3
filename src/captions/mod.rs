//! Caption grouping: filter words to the clip window, rebase them, and group them into pages.

/// Memoized page derivation.
pub mod cache;
/// Clip-relative captions.
pub mod caption;
/// Pages and tokens.
pub mod pages;
