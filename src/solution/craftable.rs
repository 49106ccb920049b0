// src/solution/craftable.rs

/// Anything a [`Factory`](super::Factory) can turn into a production.
///
/// New kinds only need to implement this trait, in this crate or any other.
/// Nothing that consumes craftables has to change.
pub trait Craftable: Send + Sync {
    /// Human-readable kind label, e.g. `"Wood"`.
    fn kind(&self) -> &str;
}
