//! Demo 2: Complete Order History for a Day
//!
//! Showcases: signed requests, window-bisection pagination, deduplication
//!
//! Run: cargo run --bin order_history -- 2024-01-15 CRO_USD
//!
//! Requires `CRYPTOCOM_API_KEY` and `CRYPTOCOM_API_SECRET`. The date defaults
//! to yesterday (UTC); the instrument filter is optional.

use chrono::{NaiveDate, Utc};
use colored::*;
use cryptocom_rest::{ClientConfig, CryptoComClient, OrderSide, RestError};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const PAGE_LIMIT: u32 = 100;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), RestError> {
    let mut args = std::env::args().skip(1);
    let day = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| RestError::InvalidParameter(format!("bad date '{raw}': {e}")))?,
        None => Utc::now().date_naive().pred_opt().unwrap_or_else(|| Utc::now().date_naive()),
    };
    let instrument = args.next();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ORDER HISTORY".cyan().bold());
    println!(
        "{}",
        format!("  {day} {}", instrument.as_deref().unwrap_or("all instruments")).cyan()
    );
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CryptoComClient::with_config(ClientConfig::from_env()?)?;
    let orders = client
        .get_order_history_for_day(day, PAGE_LIMIT, instrument.as_deref())
        .await?;

    println!(
        "  {:<20} {:<12} {:<5} {:<10} {:>14} {:>14}",
        "ORDER ID".white().bold(),
        "INSTRUMENT".white().bold(),
        "SIDE".white().bold(),
        "STATUS".white().bold(),
        "QUANTITY".white().bold(),
        "PRICE".white().bold()
    );
    println!("  {}", "─".repeat(80));

    let mut bought = Decimal::ZERO;
    let mut sold = Decimal::ZERO;
    for order in &orders {
        let side = match order.side {
            OrderSide::Buy => "BUY".green(),
            OrderSide::Sell => "SELL".red(),
        };
        let price = order
            .unit_price()
            .map(|p| p.round_dp(8).to_string())
            .unwrap_or_else(|| "-".to_string());
        let filled = order.cumulative_value.unwrap_or_default();
        match order.side {
            OrderSide::Buy => bought += filled,
            OrderSide::Sell => sold += filled,
        }

        println!(
            "  {:<20} {:<12} {:<5} {:<10} {:>14} {:>14}",
            order.order_id,
            order.instrument_name,
            side,
            format!("{:?}", order.status),
            order.quantity,
            price
        );
    }

    println!();
    println!(
        "{} {} orders, bought {} / sold {} (quote value)",
        "✓".green(),
        orders.len(),
        bought,
        sold
    );

    Ok(())
}
