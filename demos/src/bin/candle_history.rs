//! Demo 1: Candlestick History Walk
//!
//! Showcases: public endpoints, backward time-walk pagination
//!
//! Run: cargo run --bin candle_history -- BTC_USD 1h 7
//!
//! Arguments are instrument, interval and number of days back (all optional).
//! Set `RUST_LOG=cryptocom_rest=debug` to watch each window being fetched.

use chrono::{Duration, Utc};
use colored::*;
use cryptocom_rest::{CandleQuery, CandlestickInterval, ClientConfig, CryptoComClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let instrument = args.next().unwrap_or_else(|| "BTC_USD".to_string());
    let interval: CandlestickInterval = args.next().as_deref().unwrap_or("1h").parse()?;
    let days: i64 = args.next().map(|d| d.parse()).transpose()?.unwrap_or(7);

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  CANDLESTICK HISTORY".cyan().bold());
    println!("{}", format!("  {instrument} {interval}, last {days} days").cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CryptoComClient::with_config(ClientConfig::from_env()?)?;
    let query = CandleQuery::new(&instrument, interval).since(Utc::now() - Duration::days(days));

    let mut candles = client.get_all_candlesticks(&query).await?;
    candles.sort_by_key(|c| c.timestamp);
    candles.dedup_by_key(|c| c.timestamp);

    if candles.is_empty() {
        println!("{} No candles returned", "!".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "TIME".white().bold(),
        "OPEN".white().bold(),
        "HIGH".white().bold(),
        "LOW".white().bold(),
        "CLOSE".white().bold(),
        "VOLUME".white().bold()
    );
    println!("  {}", "─".repeat(86));

    for candle in candles.iter().rev().take(20) {
        let time = chrono::DateTime::from_timestamp_millis(candle.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| candle.timestamp.to_string());
        let close = format!("{:>12.2}", candle.close);
        let close = if candle.is_bullish() { close.green() } else { close.red() };

        println!(
            "  {:<20} {:>12.2} {:>12.2} {:>12.2} {} {:>12.4}",
            time, candle.open, candle.high, candle.low, close, candle.volume
        );
    }

    let high = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    println!();
    println!(
        "{} {} candles, range {:.2} - {:.2}",
        "✓".green(),
        candles.len(),
        low,
        high
    );

    Ok(())
}
