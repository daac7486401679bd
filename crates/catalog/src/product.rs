use std::cell::Cell;
use std::rc::Rc;

use retail_core::{Entity, Price, ProductId};

#[derive(Debug)]
struct ProductState {
    id: ProductId,
    name: String,
    price: Cell<Price>,
}

/// Entity: a named item with a live, mutable price.
///
/// `Product` is a handle. Cloning it yields another handle to the *same*
/// item, so a price change made through any handle is observed by every
/// position wrapping that item. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone)]
pub struct Product {
    state: Rc<ProductState>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self::with_id(ProductId::new(), name, price)
    }

    pub fn with_id(id: ProductId, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            state: Rc::new(ProductState {
                id,
                name: name.into(),
                price: Cell::new(price.into()),
            }),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.state.id
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn price(&self) -> Price {
        self.state.price.get()
    }

    /// Replace the price. No validation; visible through every handle immediately.
    pub fn set_price(&self, price: impl Into<Price>) {
        self.state.price.set(price.into());
    }

    /// True when both handles point at the same item instance.
    pub fn same_as(&self, other: &Product) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.state.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}, price: {}", self.name(), self.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_change_is_visible_through_every_handle() {
        let product = Product::new("Item 1", 1.25);
        let other_handle = product.clone();

        product.set_price(10.35);

        assert_eq!(other_handle.price(), Price::new(10.35));
        assert!(other_handle.same_as(&product));
    }

    #[test]
    fn distinct_products_are_not_the_same_instance() {
        let a = Product::new("A", 1.0);
        let b = Product::new("A", 1.0);
        assert!(!a.same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_follows_identity_not_price() {
        let id = ProductId::new();
        let a = Product::with_id(id, "A", 1.0);
        let b = Product::with_id(id, "A", 2.0);
        assert_eq!(a, b);
        assert_eq!(a.id(), &id);
    }

    #[test]
    fn display_renders_name_and_two_decimal_price() {
        let product = Product::new("Item 1", 1.25);
        assert_eq!(product.to_string(), "Name: Item 1, price: 1.25");
        product.set_price(10.0);
        assert_eq!(product.to_string(), "Name: Item 1, price: 10.00");
    }
}
