/// Core timeline and canvas value types.
pub mod core;
/// Error type and result alias.
pub mod error;
