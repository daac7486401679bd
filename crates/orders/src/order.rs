use std::rc::Rc;

use serde::Serialize;

use retail_catalog::{DeliveryMethod, Sellable, SharedSellable};
use retail_core::{AggregateRoot, DomainError, DomainResult, OrderId, Price};

/// Aggregate root: Order.
///
/// Owns an ordered list of positions and one delivery method. Every mutation
/// either applies fully or returns an error and leaves the order untouched,
/// so a courier delivery and a discounted position are never both present.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    positions: Vec<SharedSellable>,
    delivery: DeliveryMethod,
    version: u64,
}

/// Display data for one order: what a receipt or a console print needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub positions: Vec<String>,
    pub delivery: String,
    pub total: Price,
}

impl Order {
    /// Create an empty order with the default pickup delivery.
    pub fn new() -> Self {
        Self::with_id(OrderId::new())
    }

    pub fn with_id(id: OrderId) -> Self {
        Self {
            id,
            positions: Vec::new(),
            // An empty order accepts any delivery method.
            delivery: DeliveryMethod::pickup(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn positions(&self) -> &[SharedSellable] {
        &self.positions
    }

    pub fn delivery(&self) -> &DeliveryMethod {
        &self.delivery
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_discounted(&self) -> bool {
        self.positions.iter().any(|p| p.is_discounted())
    }

    /// Append a position. Discounted positions are refused under courier delivery.
    pub fn add_position(&mut self, position: SharedSellable) -> DomainResult<()> {
        self.ensure_position_allowed(position.as_ref())?;

        self.positions.push(position);
        self.bump_version();
        tracing::debug!(
            order_id = %self.id,
            version = self.version,
            positions = self.positions.len(),
            "position added"
        );
        Ok(())
    }

    /// Remove the first occurrence of `position` (by identity).
    ///
    /// Returns whether anything was removed; an unknown position is a no-op.
    pub fn remove_position<S: Sellable + ?Sized>(&mut self, position: &Rc<S>) -> bool {
        let target = Rc::as_ptr(position);
        let Some(index) = self
            .positions
            .iter()
            .position(|p| std::ptr::addr_eq(Rc::as_ptr(p), target))
        else {
            return false;
        };

        self.positions.remove(index);
        self.bump_version();
        tracing::debug!(
            order_id = %self.id,
            version = self.version,
            positions = self.positions.len(),
            "position removed"
        );
        true
    }

    /// Drop every discounted position, keeping base positions in order.
    ///
    /// Returns the number of positions removed.
    pub fn remove_all_discounted(&mut self) -> usize {
        let before = self.positions.len();
        self.positions.retain(|p| !p.is_discounted());
        let removed = before - self.positions.len();

        if removed > 0 {
            self.bump_version();
            tracing::debug!(
                order_id = %self.id,
                version = self.version,
                removed,
                "discounted positions removed"
            );
        }
        removed
    }

    /// Replace the delivery method.
    ///
    /// `None` fails with `NullArgument`; courier delivery fails with
    /// `InvalidOperation` while discounted positions are present.
    pub fn set_delivery(&mut self, method: impl Into<Option<DeliveryMethod>>) -> DomainResult<()> {
        let method = method
            .into()
            .ok_or_else(|| DomainError::null_argument("delivery method"))?;
        self.ensure_delivery_allowed(&method)?;

        self.delivery = method;
        self.bump_version();
        tracing::debug!(
            order_id = %self.id,
            version = self.version,
            delivery = self.delivery.label(),
            price = %self.delivery.price(),
            "delivery changed"
        );
        Ok(())
    }

    /// Delivery price plus every position's current total.
    pub fn total_price(&self) -> Price {
        self.delivery.price() + self.positions.iter().map(|p| p.total_price()).sum::<Price>()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            positions: self.positions.iter().map(|p| p.to_string()).collect(),
            delivery: self.delivery.to_string(),
            total: self.total_price(),
        }
    }
}

impl Order {
    fn ensure_position_allowed(&self, position: &dyn Sellable) -> Result<(), DomainError> {
        if position.is_discounted() && self.delivery.is_courier() {
            return Err(DomainError::invalid_operation(
                "discounted position cannot be added to an order with courier delivery; \
                 switch delivery to pickup first",
            ));
        }
        Ok(())
    }

    fn ensure_delivery_allowed(&self, method: &DeliveryMethod) -> Result<(), DomainError> {
        if method.is_courier() && self.has_discounted() {
            return Err(DomainError::invalid_operation(
                "courier delivery is not possible while the order contains discounted positions; \
                 remove them first",
            ));
        }
        Ok(())
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for position in &self.positions {
            writeln!(f, "{position}")?;
        }
        writeln!(f, "{}", self.delivery)?;
        write!(f, "Total: {}", self.total_price())
    }
}
