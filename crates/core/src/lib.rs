//! `retail-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and
//! order crates: the error model, typed identifiers, marker traits, and money.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainErrorKind, DomainResult};
pub use id::{OrderId, ProductId};
pub use money::Price;
pub use value_object::ValueObject;
