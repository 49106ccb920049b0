// src/violation/mod.rs

//! Crafting that must be modified for every new material kind.
//!
//! Kept as the contrast case to [`solution`](crate::solution): the factory
//! has one operation per concrete kind and the kinds form a closed set.

mod factory;
mod material;
mod production;

pub use factory::Factory;
pub use material::{Material, Metal, Wood};
pub use production::Production;

/// Crafts the fixed demonstration collections: two wood blocks, then two metal blocks.
pub fn demonstrate() -> Vec<Production> {
    let factory = Factory::new();

    let wood_blocks = vec![Wood, Wood];
    let metal_blocks = vec![Metal, Metal];

    vec![
        factory.craft_wood(wood_blocks),
        factory.craft_metal(metal_blocks),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demonstrate() {
        let rendered: Vec<String> = demonstrate().iter().map(Production::render).collect();

        assert_eq!(
            rendered,
            [
                "Object is composed of\n:\tWood\tWood",
                "Object is composed of\n:\tMetal\tMetal",
            ]
        );
    }
}
