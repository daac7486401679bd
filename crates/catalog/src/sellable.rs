//! Sellable positions: a product plus zero or more pricing decorations.
//!
//! A position is either a [`BasePosition`] (the product at its own price) or a
//! [`DiscountedPosition`] wrapping another position. Chains may nest
//! arbitrarily; every layer resolves to the same underlying [`Product`] and
//! recomputes its total from the product's *current* price on each call.

use std::rc::Rc;

use retail_core::{DomainError, DomainResult, Price, ValueObject};

use crate::product::Product;

/// Discriminator used by aggregates that apply rules per kind of position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Base,
    Discounted,
}

/// Anything that can be put on an order.
pub trait Sellable: core::fmt::Display + core::fmt::Debug {
    /// The product at the bottom of the decorator chain.
    fn product(&self) -> &Product;

    /// Price of this position, computed from the product's current price.
    fn total_price(&self) -> Price;

    fn kind(&self) -> PositionKind;

    fn is_discounted(&self) -> bool {
        self.kind() == PositionKind::Discounted
    }
}

/// Positions are shared: the same position may sit on an order and be the
/// base of several discounted positions at once.
pub type SharedSellable = Rc<dyn Sellable>;

/// A product sold at its own price.
#[derive(Debug, Clone)]
pub struct BasePosition {
    product: Product,
}

impl BasePosition {
    pub fn new(product: Product) -> Self {
        Self { product }
    }
}

impl Sellable for BasePosition {
    fn product(&self) -> &Product {
        &self.product
    }

    fn total_price(&self) -> Price {
        self.product.price()
    }

    fn kind(&self) -> PositionKind {
        PositionKind::Base
    }
}

impl core::fmt::Display for BasePosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.product, f)
    }
}

/// Whole-number discount percentage in `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(percent: i32) -> DomainResult<Self> {
        if percent < Self::MIN {
            return Err(DomainError::out_of_range(
                "discount percent",
                format!("must not be less than {}%", Self::MIN),
            ));
        }
        if percent > Self::MAX {
            return Err(DomainError::out_of_range(
                "discount percent",
                format!("must not be greater than {}%", Self::MAX),
            ));
        }
        Ok(Self(percent as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for DiscountPercent {}

impl TryFrom<i32> for DiscountPercent {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A position sold at a percentage off the product's current price.
///
/// The discount is taken from the product price, not from the wrapped
/// position's total: stacking 10% on top of 20% yields 10% off, not 28%.
#[derive(Debug, Clone)]
pub struct DiscountedPosition {
    base: SharedSellable,
    percent: DiscountPercent,
}

impl DiscountedPosition {
    /// Wrap `base` with a discount. Fails with `OutOfRange` outside `0..=100`.
    pub fn new(base: SharedSellable, percent: i32) -> DomainResult<Self> {
        let percent = DiscountPercent::new(percent)?;
        Ok(Self::with_percent(base, percent))
    }

    pub fn with_percent(base: SharedSellable, percent: DiscountPercent) -> Self {
        Self { base, percent }
    }

    pub fn base(&self) -> &SharedSellable {
        &self.base
    }

    pub fn percent(&self) -> DiscountPercent {
        self.percent
    }

    pub fn discount_amount(&self) -> Price {
        self.product().price().percent_of(self.percent.value())
    }
}

impl Sellable for DiscountedPosition {
    fn product(&self) -> &Product {
        self.base.product()
    }

    fn total_price(&self) -> Price {
        self.product().price() - self.discount_amount()
    }

    fn kind(&self) -> PositionKind {
        PositionKind::Discounted
    }
}

impl core::fmt::Display for DiscountedPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, discount: {} ({}), total: {}",
            self.product(),
            self.discount_amount(),
            self.percent,
            self.total_price()
        )
    }
}
