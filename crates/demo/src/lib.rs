//! Showcase driver for the pricing engine.
//!
//! Builds an order of discounted positions, changes the product price and the
//! delivery method, and walks into both sides of the courier/discount rule,
//! printing the order after each step.

use std::env;
use std::io::Write;
use std::rc::Rc;

use retail_catalog::{BasePosition, DeliveryMethod, DiscountedPosition, Product, SharedSellable};
use retail_core::DomainResult;
use retail_orders::Order;

/// Environment variable selecting the showcase output format.
pub const OUTPUT_FORMAT_VAR: &str = "RETAIL_DEMO_FORMAT";

/// Separator written after every printed block in text mode.
pub const SEPARATOR: &str = "---";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Receipt-like text blocks, each followed by [`SEPARATOR`].
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub format: OutputFormat,
    pub rejected_format: Option<String>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(OUTPUT_FORMAT_VAR).ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match OutputFormat::parse(raw) {
            Some(format) => Self {
                format,
                rejected_format: None,
            },
            None => Self {
                format: OutputFormat::default(),
                rejected_format: Some(raw.to_string()),
            },
        }
    }
}

/// Writes order snapshots and caught business errors in the chosen format.
pub struct Printer<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: &'a mut W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn order(&mut self, order: &Order) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{order}")?;
                writeln!(self.out, "{SEPARATOR}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.out, &order.summary())?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Report the outcome of a step that the caller expects may be refused.
    ///
    /// A refused step is printed and logged; the order keeps its prior state.
    pub fn attempt(&mut self, step: &'static str, result: DomainResult<()>) -> anyhow::Result<()> {
        let Err(err) = result else {
            return Ok(());
        };
        tracing::warn!(step, kind = ?err.kind(), error = %err, "operation refused");

        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{err}")?;
                writeln!(self.out, "{SEPARATOR}")?;
            }
            OutputFormat::Json => {
                let line = serde_json::json!({ "step": step, "error": err.to_string() });
                serde_json::to_writer(&mut *self.out, &line)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// Run the full showcase, writing every step to `out`.
pub fn run_showcase<W: Write>(out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
    let mut printer = Printer::new(out, format);

    let product = Product::new("Item 1", 1.25);
    let base: SharedSellable = Rc::new(BasePosition::new(product.clone()));

    // One base position plus three discounted ones on the shelf.
    let mut order = Order::new();
    order.add_position(base.clone())?;
    for percent in [10, 20, 30] {
        order.add_position(Rc::new(DiscountedPosition::new(base.clone(), percent)?))?;
    }
    tracing::info!(order_id = %order.id_typed(), positions = order.len(), "order built");
    printer.order(&order)?;

    product.set_price(10.35);
    tracing::info!(price = %product.price(), "product price changed");
    printer.order(&order)?;

    order.set_delivery(DeliveryMethod::pickup_at(5.0))?;
    printer.order(&order)?;

    printer.attempt(
        "courier with discounts",
        order.set_delivery(DeliveryMethod::courier_at(25.0)),
    )?;

    order.remove_all_discounted();
    order.set_delivery(DeliveryMethod::courier_at(25.0))?;
    printer.order(&order)?;

    let late_discount = Rc::new(DiscountedPosition::new(base.clone(), 30)?);
    printer.attempt(
        "discount with courier",
        order.add_position(late_discount),
    )?;
    printer.order(&order)?;

    Ok(())
}
