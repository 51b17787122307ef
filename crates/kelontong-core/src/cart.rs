//! # Shopping Cart
//!
//! The transient per-session cart for the point-of-sale screen.
//!
//! ## Session State Machine
//! ```text
//! ┌──────────┐  add   ┌──────────┐  checkout (shop layer)  ┌───────────┐
//! │  Empty   │ ─────► │ Building │ ──────────────────────► │ Checked-  │
//! │          │ ◄───── │          │                         │   Out     │
//! └──────────┘ clear  └──────────┘                         └───────────┘
//!                      add / remove / change_quantity
//! ```
//!
//! Cart lines snapshot the product's name, price and cost at the moment of
//! adding; a later catalog edit does not change what the customer is
//! charged. The cart itself is never persisted.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, SaleLine};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart: a product snapshot plus a requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id (for catalog lookup at checkout).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit selling price at time of adding (frozen).
    pub unit_price: Money,

    /// Unit acquisition cost at time of adding (frozen).
    pub unit_cost: Money,

    /// Requested quantity. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line from a product at quantity 1.
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            unit_cost: product.cost,
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Converts this line into a frozen sale line for the ledger.
    fn to_sale_line(&self) -> SaleLine {
        SaleLine {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.unit_price,
            cost: self.unit_cost,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product again
///   increments its quantity)
/// - Quantity is always >= 1; a line only disappears through [`Cart::remove`]
/// - At most MAX_CART_LINES distinct lines, MAX_LINE_QUANTITY per line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increments by 1
    /// - Otherwise: a new line is inserted at quantity 1
    /// - The resulting quantity may not exceed the product's available
    ///   stock; a product with zero stock cannot be added at all
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        let in_cart = self
            .lines
            .iter()
            .find(|l| l.product_id == product.id)
            .map(|l| l.quantity)
            .unwrap_or(0);
        let requested = in_cart + 1;

        if requested > product.stock {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested,
            });
        }

        if requested > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = requested;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_product(product));
        Ok(())
    }

    /// Removes the line for a product id. Removing an absent line is a
    /// no-op; this is the only way a line leaves the cart.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Changes a line's quantity by a signed delta and returns the new
    /// quantity.
    ///
    /// ## Behavior
    /// - New quantity = max(1, current + delta): the quantity floor is 1,
    ///   never 0 - a large negative delta clamps to 1 and keeps the line
    /// - Exceeding MAX_LINE_QUANTITY is rejected
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) -> CoreResult<i64> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;

        let new_quantity = (line.quantity + delta).max(1);
        if new_quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: new_quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        line.quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Cart total (sum of price × quantity across all lines). Pure.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Frozen sale-line snapshots of the current cart, for checkout.
    pub fn sale_lines(&self) -> Vec<SaleLine> {
        self.lines.iter().map(CartLine::to_sale_line).collect()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart (cancellation, or after checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
