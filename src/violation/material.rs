// src/violation/material.rs

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Wood {}
    impl Sealed for super::Metal {}
}

/// Base of every material kind.
///
/// The set of kinds is fixed inside this crate. Each kind also needs its own
/// operation on [`Factory`](super::Factory), so adding one means editing both.
pub trait Material: sealed::Sealed + Send + Sync {
    fn kind(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wood;

impl Material for Wood {
    fn kind(&self) -> &str {
        "Wood"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Metal;

impl Material for Metal {
    fn kind(&self) -> &str {
        "Metal"
    }
}
