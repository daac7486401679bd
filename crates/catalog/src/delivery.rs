//! Delivery methods.

use serde::{Deserialize, Serialize};

use retail_core::{Price, ValueObject};

/// How an order reaches the customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    Pickup,
    Courier,
}

impl DeliveryKind {
    pub const fn default_price(self) -> Price {
        match self {
            DeliveryKind::Pickup => Price::new(10.0),
            DeliveryKind::Courier => Price::new(50.0),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DeliveryKind::Pickup => "pickup",
            DeliveryKind::Courier => "courier delivery",
        }
    }
}

/// A priced delivery method. Immutable; replace it wholesale to change it.
///
/// Explicit prices are taken as given, negative ones included.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMethod {
    kind: DeliveryKind,
    price: Price,
}

impl DeliveryMethod {
    pub fn new(kind: DeliveryKind, price: impl Into<Price>) -> Self {
        Self {
            kind,
            price: price.into(),
        }
    }

    pub fn pickup() -> Self {
        Self::new(DeliveryKind::Pickup, DeliveryKind::Pickup.default_price())
    }

    pub fn pickup_at(price: impl Into<Price>) -> Self {
        Self::new(DeliveryKind::Pickup, price)
    }

    pub fn courier() -> Self {
        Self::new(DeliveryKind::Courier, DeliveryKind::Courier.default_price())
    }

    pub fn courier_at(price: impl Into<Price>) -> Self {
        Self::new(DeliveryKind::Courier, price)
    }

    pub fn kind(&self) -> DeliveryKind {
        self.kind
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn is_courier(&self) -> bool {
        self.kind == DeliveryKind::Courier
    }
}

impl Default for DeliveryMethod {
    fn default() -> Self {
        Self::pickup()
    }
}

impl ValueObject for DeliveryMethod {}

impl core::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: Delivery - {}, price: {}", self.label(), self.price)
    }
}
