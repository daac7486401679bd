//! Catalog domain module.
//!
//! Sellable items and the ways they reach a customer: products with a live
//! price, positions that decorate a product with pricing adjustments, and
//! delivery methods. Pure domain logic (no IO, no storage).

pub mod delivery;
pub mod product;
pub mod sellable;

pub use delivery::{DeliveryKind, DeliveryMethod};
pub use product::Product;
pub use sellable::{
    BasePosition, DiscountPercent, DiscountedPosition, PositionKind, Sellable, SharedSellable,
};
