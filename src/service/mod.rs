//! Service Module
//!
//! Product business rules between the HTTP handlers and the repository.

mod product;

#[cfg(test)]
mod property_tests;

pub use product::ProductService;
