//! Output formatting for the CLI.

use console::style;

use loom_catalog::catalog::{Product, LOW_STOCK_THRESHOLD};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print one product as a listing row.
    pub fn product_row(&self, product: &Product) {
        if self.json {
            return;
        }
        println!(
            "  {:>4}  {:<50}  {:<10}  {}  {}",
            style(product.id.as_str()).dim(),
            product.name,
            product.brand,
            price_tag(product),
            stock_badge(product),
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Effective price, with the struck retail price and discount when on offer.
pub fn price_tag(product: &Product) -> String {
    let price = product.effective_price().display();
    match product.discount_percent() {
        Some(percent) => format!(
            "{} {} {}",
            style(price).bold(),
            style(product.retail_price.display()).dim().strikethrough(),
            style(format!("{}% off", percent)).green(),
        ),
        _ => style(price).bold().to_string(),
    }
}

/// Stock state badge.
pub fn stock_badge(product: &Product) -> String {
    if !product.is_in_stock() {
        style("out of stock").red().to_string()
    } else if product.is_low_stock(LOW_STOCK_THRESHOLD) {
        style(format!("only {} left", product.stock)).yellow().to_string()
    } else {
        style("in stock").green().to_string()
    }
}

/// Star rendering of a rating, e.g. `4.5★ (128)`.
pub fn rating_text(product: &Product) -> String {
    match product.rating {
        Some(rating) => format!("{:.1}★ ({})", rating, product.reviews_count),
        None => style("unrated").dim().to_string(),
    }
}
