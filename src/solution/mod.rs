// src/solution/mod.rs

//! Crafting that is open for extension and closed for modification.
//!
//! Materials implement the [`Craftable`] capability and a single
//! [`Factory::craft`] handles every kind, including ones defined later.

mod craftable;
mod factory;
mod materials;
mod production;

pub use craftable::Craftable;
pub use factory::Factory;
pub use materials::{Metal, Wood};
pub use production::Production;

/// Crafts the fixed demonstration collection: one wood block and one metal block.
pub fn demonstrate() -> Vec<Production> {
    let factory = Factory::new();

    let craftables: Vec<Box<dyn Craftable>> = vec![Box::new(Wood), Box::new(Metal)];

    vec![factory.craft(craftables)]
}
