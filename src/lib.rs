pub mod description;
pub mod errors;
pub mod models;
pub mod observability;
pub mod solution;
pub mod violation;

pub use errors::*;
pub use models::*;
