// src/solution/production.rs

use super::Craftable;
use crate::{CraftError, description};
use std::fmt;

/// Result of a crafting run: an ordered, read-only set of craftables.
pub struct Production {
    craftables: Vec<Box<dyn Craftable>>,
}

impl Production {
    pub fn new<I>(craftables: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Craftable>>,
    {
        Self {
            craftables: craftables.into_iter().collect(),
        }
    }

    /// Returns the craftables in the order they were supplied.
    pub fn craftables(&self) -> impl ExactSizeIterator<Item = &dyn Craftable> {
        self.craftables.iter().map(|craftable| craftable.as_ref())
    }

    /// Returns the kind label of every craftable, in order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.craftables.iter().map(|craftable| craftable.kind())
    }

    pub fn len(&self) -> usize {
        self.craftables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.craftables.is_empty()
    }

    /// Renders the production description.
    pub fn render(&self) -> String {
        description::describe(self.kinds())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Production")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

impl TryFrom<Option<Vec<Box<dyn Craftable>>>> for Production {
    type Error = CraftError;

    fn try_from(craftables: Option<Vec<Box<dyn Craftable>>>) -> Result<Self, Self::Error> {
        craftables
            .map(Self::new)
            .ok_or_else(|| CraftError::invalid_argument("craftable collection is absent"))
    }
}
