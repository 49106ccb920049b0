// src/solution/materials.rs

use super::Craftable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wood;

impl Craftable for Wood {
    fn kind(&self) -> &str {
        "Wood"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Metal;

impl Craftable for Metal {
    fn kind(&self) -> &str {
        "Metal"
    }
}
