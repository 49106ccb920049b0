// src/violation/production.rs

use super::Material;
use crate::{CraftError, description};
use std::fmt;

pub struct Production {
    materials: Vec<Box<dyn Material>>,
}

impl Production {
    pub fn new<I>(materials: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Material>>,
    {
        Self {
            materials: materials.into_iter().collect(),
        }
    }

    /// Returns the materials in the order they were supplied.
    pub fn materials(&self) -> impl ExactSizeIterator<Item = &dyn Material> {
        self.materials.iter().map(|material| material.as_ref())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|material| material.kind())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

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

impl TryFrom<Option<Vec<Box<dyn Material>>>> for Production {
    type Error = CraftError;

    fn try_from(materials: Option<Vec<Box<dyn Material>>>) -> Result<Self, Self::Error> {
        materials
            .map(Self::new)
            .ok_or_else(|| CraftError::invalid_argument("material collection is absent"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::{Metal, Wood};

    #[test]
    fn test_render_empty_production() {
        let production = Production::new(Vec::new());

        assert_eq!(production.render(), "Object is composed of\n:");
    }

    #[test]
    fn test_render_keeps_order() {
        let production = Production::new(vec![
            Box::new(Metal) as Box<dyn Material>,
            Box::new(Wood),
        ]);

        assert_eq!(production.to_string(), "Object is composed of\n:\tMetal\tWood");
        assert_eq!(production.materials().len(), 2);
    }

    #[test]
    fn test_absent_collection_is_rejected() {
        let result = Production::try_from(None::<Vec<Box<dyn Material>>>);

        assert!(matches!(result, Err(CraftError::InvalidArgument(_))));
    }
}
