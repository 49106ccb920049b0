// src/solution/factory.rs

use super::{Craftable, Production};
use tracing::debug;

/// Factory for crafting productions out of any [`Craftable`].
///
/// The factory only knows the capability, never a concrete kind, so new
/// kinds can be crafted without changing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }

    /// Crafts a production from an ordered collection of craftables.
    ///
    /// # Arguments
    /// * `craftables` - Craftables of any kind, possibly mixed, possibly empty
    ///
    /// # Returns
    /// * `Production` - Production holding the craftables in the given order
    ///
    /// # Examples
    /// ```
    /// use ocp_craft::solution::{Craftable, Factory, Metal, Wood};
    ///
    /// let craftables: Vec<Box<dyn Craftable>> = vec![Box::new(Wood), Box::new(Metal)];
    /// let production = Factory::new().craft(craftables);
    ///
    /// assert_eq!(production.render(), "Object is composed of\n:\tWood\tMetal");
    /// ```
    pub fn craft<I>(&self, craftables: I) -> Production
    where
        I: IntoIterator<Item = Box<dyn Craftable>>,
    {
        let production = Production::new(craftables);
        debug!(count = production.len(), "crafted production");
        production
    }
}
