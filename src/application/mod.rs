//! Application layer: the catalog facade over the domain tree

pub mod cafe;

pub use cafe::CatCafe;
