//! # Prompt Builders
//!
//! Pure builders for the advisory prompts. The context is summarized
//! before it leaves the process: the low-stock list, the last ten
//! transactions and the derived summary - never the full dataset.

use kelontong_core::{FinancialSummary, Product, Transaction};

/// Number of recent transactions included in the health-report context.
const RECENT_TX_SAMPLE: usize = 10;

/// Number of catalog entries included in the chat context.
const CHAT_PRODUCT_SAMPLE: usize = 5;

/// Builds the business-health analysis prompt.
pub fn health_report(
    products: &[Product],
    transactions: &[Transaction],
    summary: &FinancialSummary,
) -> String {
    let low_stock: Vec<String> = products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| format!("{} ({} {})", p.name, p.stock, p.unit))
        .collect();
    let low_stock_line = if low_stock.is_empty() {
        "None".to_string()
    } else {
        low_stock.join(", ")
    };

    let recent_tx: Vec<String> = transactions
        .iter()
        .rev()
        .take(RECENT_TX_SAMPLE)
        .map(|t| format!("{}: {} - {}", t.date.format("%Y-%m-%d"), t.kind, t.total))
        .collect();

    format!(
        "Act as a senior accounting professor and business consultant for a \
         small grocery shop.\n\
         \n\
         Current financial data for the shop:\n\
         \n\
         1. Financial summary:\n\
            - Revenue: {revenue}\n\
            - COGS (cost of goods sold): {cogs}\n\
            - Gross profit: {gross}\n\
            - Operating expenses: {expenses}\n\
            - Net profit: {net}\n\
         \n\
         2. Inventory & stock:\n\
            - Total products: {sku_count} SKU\n\
            - Low stock (< 10 units): {low_stock_line}\n\
         \n\
         3. Recent transactions (sample):\n\
         {recent}\n\
         \n\
         Your task:\n\
         Give a short, sharp, actionable analysis of the business health. \
         Focus on cash flow, stock efficiency and profitability. If stock is \
         running low, give a firm warning. If margins are thin, advise on \
         pricing.",
        revenue = summary.revenue,
        cogs = summary.cogs,
        gross = summary.gross_profit,
        expenses = summary.expenses,
        net = summary.net_profit,
        sku_count = products.len(),
        low_stock_line = low_stock_line,
        recent = recent_tx.join("\n"),
    )
}

/// Builds the compact context string carried by every chat turn: the
/// derived summary plus the first few catalog entries.
pub fn chat_context(summary: &FinancialSummary, products: &[Product]) -> String {
    let top: Vec<&Product> = products.iter().take(CHAT_PRODUCT_SAMPLE).collect();
    format!(
        "Summary: {}\nTop products: {}",
        serde_json::to_string(summary).unwrap_or_default(),
        serde_json::to_string(&top).unwrap_or_default(),
    )
}

/// Builds the chat prompt from a user message and a context string.
pub fn chat(message: &str, context: &str) -> String {
    format!(
        "Business context data:\n\
         {context}\n\
         \n\
         User question: {message}\n\
         \n\
         System instruction:\n\
         You are the ERP assistant for a small grocery shop. Answer the \
         user's question from the context data above. Explain accounting \
         concepts (profit & loss, COGS, margin) simply when asked. Give \
         practical business advice."
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kelontong_core::{finance, Money, TransactionType};

    fn product(id: &str, name: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Sembako".to_string(),
            price: Money::new(16_000),
            cost: Money::new(14_000),
            stock,
            unit: "btl".to_string(),
        }
    }

    fn expense(id: &str, total: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-03-01T09:00:00Z".parse().unwrap(),
            kind: TransactionType::Expense,
            total: Money::new(total),
            items: None,
            note: Some("Listrik".to_string()),
        }
    }

    #[test]
    fn test_health_report_contents() {
        let products = vec![
            product("1", "Kopi Kapal Api", 8),
            product("2", "Indomie Goreng", 100),
        ];
        let transactions = vec![expense("e1", 10_000)];
        let summary = finance::summarize(&transactions);

        let prompt = health_report(&products, &transactions, &summary);

        assert!(prompt.contains("Kopi Kapal Api (8 btl)"));
        assert!(!prompt.contains("Indomie Goreng (100"));
        assert!(prompt.contains("Total products: 2 SKU"));
        assert!(prompt.contains("2024-03-01: EXPENSE - Rp10.000"));
        assert!(prompt.contains("Net profit: -Rp10.000"));
    }

    #[test]
    fn test_health_report_no_low_stock() {
        let products = vec![product("1", "Indomie Goreng", 100)];
        let summary = finance::summarize(&[]);
        let prompt = health_report(&products, &[], &summary);

        assert!(prompt.contains("Low stock (< 10 units): None"));
    }

    #[test]
    fn test_health_report_samples_last_ten() {
        let transactions: Vec<Transaction> =
            (0..15).map(|i| expense(&format!("e{i}"), 1_000)).collect();
        let summary = finance::summarize(&transactions);
        let prompt = health_report(&[], &transactions, &summary);

        let lines = prompt.matches("EXPENSE").count();
        assert_eq!(lines, RECENT_TX_SAMPLE);
    }

    #[test]
    fn test_chat_context_limits_products() {
        let products: Vec<Product> = (0..8)
            .map(|i| product(&format!("p{i}"), &format!("Product {i}"), 20))
            .collect();
        let context = chat_context(&finance::summarize(&[]), &products);

        assert!(context.contains("Product 4"));
        assert!(!context.contains("Product 5"));
        assert!(context.contains("\"netProfit\":0"));
    }

    #[test]
    fn test_chat_prompt_carries_message_and_context() {
        let prompt = chat("How do I raise my margin?", "Summary: {}");
        assert!(prompt.contains("User question: How do I raise my margin?"));
        assert!(prompt.contains("Summary: {}"));
    }
}
