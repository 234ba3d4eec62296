/// Shared kernel - error types, result alias and security helpers
///
/// Everything here is used across layers and depends on no other module
/// of the crate.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
