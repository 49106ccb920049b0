// src/violation/factory.rs

use super::{Material, Metal, Production, Wood};
use tracing::debug;

/// Factory with one crafting operation per material kind.
///
/// Every new kind needs a new `craft_*` operation here, which is exactly the
/// modification the [`solution`](crate::solution) factory avoids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }

    /// Crafts a production out of wood blocks.
    ///
    /// # Arguments
    /// * `wood_blocks` - Wood blocks in crafting order, possibly empty
    ///
    /// # Returns
    /// * `Production` - Production holding the wood blocks
    pub fn craft_wood<I>(&self, wood_blocks: I) -> Production
    where
        I: IntoIterator<Item = Wood>,
    {
        Self::wrap("Wood", wood_blocks)
    }

    /// Crafts a production out of metal blocks.
    ///
    /// # Arguments
    /// * `metal_blocks` - Metal blocks in crafting order, possibly empty
    ///
    /// # Returns
    /// * `Production` - Production holding the metal blocks
    pub fn craft_metal<I>(&self, metal_blocks: I) -> Production
    where
        I: IntoIterator<Item = Metal>,
    {
        Self::wrap("Metal", metal_blocks)
    }

    fn wrap<M, I>(kind: &str, blocks: I) -> Production
    where
        M: Material + 'static,
        I: IntoIterator<Item = M>,
    {
        let production = Production::new(
            blocks
                .into_iter()
                .map(|block| Box::new(block) as Box<dyn Material>),
        );
        debug!(kind, count = production.len(), "crafted production");
        production
    }
}
