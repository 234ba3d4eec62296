/// Result alias used across the crate.
/// Typed `TrimError`s travel inside `anyhow::Error` and are recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
