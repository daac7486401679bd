//! Orders domain module.
//!
//! This crate contains the order aggregate: it owns sellable positions and a
//! delivery method and keeps the rule that discounted positions and courier
//! delivery never coexist. Pure domain logic (no IO, no storage).

pub mod order;

pub use order::{Order, OrderSummary};
