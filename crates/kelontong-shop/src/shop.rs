//! # Shop Service
//!
//! The single operator session. All catalog/ledger/cart mutations are
//! synchronous `&mut self` methods, so no operation can observe another
//! mid-mutation. The advisory methods are the only suspension points; they
//! take `&self`, build their prompt from a snapshot of current state and
//! only then await the network, so a reply that arrives late can simply be
//! dropped by the caller without touching shop state.
//!
//! ## Checkout
//! ```text
//! checkout()
//!   │  cart empty? ──► Err(EmptyCart)            (nothing touched)
//!   │  verify stock for EVERY line               (nothing touched)
//!   │       └─ any short? ──► Err(InsufficientStock)
//!   ▼
//!   decrement stock per line      ┐ infallible after verification:
//!   append one SALE transaction   │ the caller observes checkout as
//!   clear the cart                ┘ atomic
//!   persist catalog + ledger      (failure = warning, state kept)
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use kelontong_advisor::{prompt, AdvisorClient, ANALYSIS_UNAVAILABLE, CHAT_UNAVAILABLE};
use kelontong_core::{
    finance, validation, Cart, Catalog, CoreError, FinancialSummary, Ledger, Money, Product,
    ProductDraft, ProductPatch, Transaction, TransactionType,
};
use kelontong_store::{snapshot, BlobStore};

use crate::error::ShopResult;

// =============================================================================
// Shop
// =============================================================================

/// The shop service: catalog + ledger + active cart behind one handle.
pub struct Shop<S: BlobStore> {
    store: S,
    catalog: Catalog,
    ledger: Ledger,
    cart: Cart,
}

impl<S: BlobStore> Shop<S> {
    /// Opens the shop from persisted state.
    ///
    /// When no catalog blob exists yet, `default_products` becomes the
    /// starting catalog (see [`crate::seed::starter_catalog`]). An absent
    /// ledger blob starts an empty ledger.
    pub fn open(store: S, default_products: Vec<Product>) -> ShopResult<Self> {
        let catalog = snapshot::load_catalog_or(&store, default_products)?;
        let ledger = snapshot::load_ledger(&store)?;

        info!(
            products = catalog.len(),
            transactions = ledger.len(),
            "shop opened"
        );

        Ok(Shop {
            store,
            catalog,
            ledger,
            cart: Cart::new(),
        })
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Adds a new product from form input and persists the catalog.
    pub fn add_product(&mut self, draft: ProductDraft) -> ShopResult<Product> {
        let product = draft.into_product(Uuid::new_v4().to_string());
        let stored = self.catalog.add(product)?.clone();
        self.persist_catalog();

        info!(id = %stored.id, name = %stored.name, "product added");
        Ok(stored)
    }

    /// Applies an edit patch to a product and persists the catalog.
    pub fn update_product(&mut self, id: &str, patch: &ProductPatch) -> ShopResult<Product> {
        let updated = self.catalog.update(id, patch)?.clone();
        self.persist_catalog();

        info!(id = %updated.id, "product updated");
        Ok(updated)
    }

    /// Deletes a product. Returns the removed record; `None` when the id
    /// was absent (a no-op, nothing is persisted).
    pub fn delete_product(&mut self, id: &str) -> Option<Product> {
        let removed = self.catalog.remove(id);
        if let Some(product) = &removed {
            self.persist_catalog();
            info!(id = %product.id, name = %product.name, "product deleted");
        }
        removed
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of a product to the cart.
    pub fn add_to_cart(&mut self, product_id: &str) -> ShopResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        self.cart.add(product)?;
        debug!(product_id, lines = self.cart.line_count(), "added to cart");
        Ok(())
    }

    /// Removes a line from the cart (no-op for an absent line).
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
        debug!(product_id, "removed from cart");
    }

    /// Changes a cart line's quantity by a signed delta; the quantity never
    /// falls below 1. Returns the new quantity.
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) -> ShopResult<i64> {
        let quantity = self.cart.change_quantity(product_id, delta)?;
        debug!(product_id, quantity, "cart quantity changed");
        Ok(quantity)
    }

    /// The active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Empties the cart (sale cancelled).
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Converts the cart into one SALE transaction and decrements stock.
    ///
    /// The recorded total and line costs reflect the catalog state as
    /// observed when the cart was built, not any later edits. On any error
    /// the cart, catalog and ledger are all unchanged.
    pub fn checkout(&mut self) -> ShopResult<Transaction> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        // Verify every line against live stock before mutating anything.
        // The cart already rejects over-adding, but stock may have been
        // sold or edited since the lines were created.
        for line in self.cart.lines() {
            let product = self
                .catalog
                .get(&line.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;
            if line.quantity > product.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: line.quantity,
                }
                .into());
            }
        }

        for line in self.cart.lines() {
            self.catalog.adjust_stock(&line.product_id, -line.quantity)?;
        }

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            kind: TransactionType::Sale,
            total: self.cart.total(),
            items: Some(self.cart.sale_lines()),
            note: None,
        };
        let recorded = self.ledger.record(transaction).clone();
        self.cart.clear();

        self.persist_catalog();
        self.persist_ledger();

        info!(
            id = %recorded.id,
            total = %recorded.total,
            lines = recorded.items.as_deref().map(|items| items.len()).unwrap_or(0),
            "checkout complete"
        );
        Ok(recorded)
    }

    // =========================================================================
    // Expenses & Restocking
    // =========================================================================

    /// Records an operational expense in the ledger.
    pub fn record_expense(
        &mut self,
        amount: Money,
        note: impl Into<String>,
    ) -> ShopResult<Transaction> {
        validation::validate_expense_amount(amount).map_err(CoreError::from)?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            kind: TransactionType::Expense,
            total: amount,
            items: None,
            note: Some(note.into()),
        };
        let recorded = self.ledger.record(transaction).clone();
        self.persist_ledger();

        info!(id = %recorded.id, total = %recorded.total, "expense recorded");
        Ok(recorded)
    }

    /// Replenishes a product's stock and records a RESTOCK transaction
    /// whose total is the replenishment spend (cost × quantity).
    pub fn restock(
        &mut self,
        product_id: &str,
        quantity: i64,
        note: impl Into<String>,
    ) -> ShopResult<Transaction> {
        validation::validate_quantity(quantity).map_err(CoreError::from)?;

        let cost = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?
            .cost;
        let new_level = self.catalog.adjust_stock(product_id, quantity)?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            kind: TransactionType::Restock,
            total: cost * quantity,
            items: None,
            note: Some(note.into()),
        };
        let recorded = self.ledger.record(transaction).clone();

        self.persist_catalog();
        self.persist_ledger();

        info!(
            product_id,
            quantity,
            stock = new_level,
            "stock replenished"
        );
        Ok(recorded)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The catalog records in insertion order.
    pub fn products(&self) -> &[Product] {
        self.catalog.records()
    }

    /// Products currently below the low-stock threshold.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.catalog.low_stock()
    }

    /// The full transaction log in chronological order.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.all()
    }

    /// The financial summary, recomputed from the full log on every call.
    pub fn summary(&self) -> FinancialSummary {
        finance::summarize(self.ledger.all())
    }

    // =========================================================================
    // Advisory
    // =========================================================================

    /// Asks the advisor for a business-health analysis.
    ///
    /// Always returns displayable text: any adapter failure is absorbed
    /// here and replaced with the fixed fallback message.
    pub async fn business_health(&self, advisor: &AdvisorClient) -> String {
        let prompt = prompt::health_report(self.products(), self.transactions(), &self.summary());

        match advisor.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "health analysis failed");
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Sends a chat message to the advisor with compact business context.
    ///
    /// Always returns displayable text, exactly like
    /// [`Shop::business_health`].
    pub async fn chat(&self, advisor: &AdvisorClient, message: &str) -> String {
        let context = prompt::chat_context(&self.summary(), self.products());
        let prompt = prompt::chat(message, &context);

        match advisor.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "chat reply failed");
                CHAT_UNAVAILABLE.to_string()
            }
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_catalog(&self) {
        if let Err(err) = snapshot::save_catalog(&self.store, &self.catalog) {
            warn!(error = %err, "failed to persist catalog; in-memory state is unaffected");
        }
    }

    fn persist_ledger(&self) {
        if let Err(err) = snapshot::save_ledger(&self.store, &self.ledger) {
            warn!(error = %err, "failed to persist ledger; in-memory state is unaffected");
        }
    }
}
