use crate::Variant;

/// Built-in run settings of the demonstration binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Demonstrations to run, in order.
    pub variants: Vec<Variant>,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            variants: vec![Variant::Violation, Variant::Solution],
        }
    }
}
