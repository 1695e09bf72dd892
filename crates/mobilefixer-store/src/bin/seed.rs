//! # Sample Store Viewer
//!
//! Builds the seeded store and prints what a demo account sees.
//!
//! ## Usage
//! ```bash
//! # Owner's dashboard (default)
//! cargo run -p mobilefixer-store --bin seed
//!
//! # Staff view of the Mall store
//! cargo run -p mobilefixer-store --bin seed -- --as staff2@mobileshop.com
//!
//! # Dump the dashboard as JSON
//! cargo run -p mobilefixer-store --bin seed -- --json
//!
//! # Verbose store logging
//! RUST_LOG=mobilefixer_store=debug cargo run -p mobilefixer-store --bin seed
//! ```

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mobilefixer_core::query::PriceView;
use mobilefixer_core::Money;
use mobilefixer_store::{AppConfig, DataStore, StoreError};

const DEFAULT_ACCOUNT: &str = "owner@mobileshop.com";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut account = DEFAULT_ACCOUNT.to_string();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--as" | "-a" => {
                if i + 1 < args.len() {
                    account = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" | "-j" => json = true,
            "--help" | "-h" => {
                println!("MobileFixer Pro Sample Store Viewer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -a, --as <EMAIL>   Demo account to view as (default: {})", DEFAULT_ACCOUNT);
                println!("  -j, --json         Print the dashboard as JSON");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let store = DataStore::from_config(&config);
    let user = store
        .user_by_email(&account)
        .cloned()
        .ok_or_else(|| StoreError::not_found("User", account.clone()))?;

    info!(user = %user.email, role = ?user.role, "Viewing store");

    let view = store.dashboard(&user, config.recent_activity_limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("📱 MobileFixer Pro");
    println!("==================");
    println!("Signed in as {} ({:?})", user.email, user.role);
    println!();

    let stats = &view.stats;
    println!("Active repairs:    {} / {}", stats.active_repairs.value, stats.active_repairs.total);
    println!("Pending delivery:  {} / {}", stats.pending_delivery.value, stats.pending_delivery.total);
    println!("Low stock items:   {} / {}", stats.low_stock_items.value, stats.low_stock_items.total);
    println!("Customers:         {}", stats.total_customers.value);

    println!();
    println!("Recent activity:");
    for repair in &view.recent_repairs {
        println!(
            "  {}  {:<24} {:<12} {:>12}  next: {}",
            repair.received_date.format("%Y-%m-%d"),
            repair.device_label(),
            repair.status,
            config.format_currency(repair.bill_amount),
            repair.status.next_action_label().unwrap_or("-")
        );
    }

    println!();
    println!("Inventory:");
    let inventory = store.inventory_for(&user);
    for item in &inventory {
        let prices = PriceView::for_role(item, user.role);
        let flag = if item.is_low_stock() { "⚠ low" } else { "" };
        match prices.buy {
            Some(buy) => println!(
                "  {:<28} qty {:>3}  buy {}  retail {}  value {}  {}",
                item.name,
                item.quantity,
                config.format_currency(buy),
                config.format_currency(prices.retail),
                config.format_currency(item.stock_value()),
                flag
            ),
            None => println!(
                "  {:<28} qty {:>3}  retail {}  value {}  {}",
                item.name,
                item.quantity,
                config.format_currency(prices.retail),
                config.format_currency(item.stock_value()),
                flag
            ),
        }
    }
    let total: Money = inventory.iter().map(|item| item.stock_value()).sum();
    println!("  Stock value: {}", config.format_currency(total));

    if !view.pending_requests.is_empty() {
        println!();
        println!("Awaiting review:");
        for pending in &view.pending_requests {
            println!(
                "  {} on {}: {:+} ({})",
                pending.request.id, pending.item_name, pending.request.quantity_change, pending.request.reason
            );
        }
    }

    Ok(())
}
