//! # Demo Cart Seeder
//!
//! Writes a demo cart into local storage so the checkout has something to
//! show during development.
//!
//! ## Usage
//! ```bash
//! cargo run -p shoez-db --bin seed
//!
//! # Specify database path
//! cargo run -p shoez-db --bin seed -- --db ./data/shoez.db
//!
//! # Overwrite an existing cart
//! cargo run -p shoez-db --bin seed -- --force
//! ```

use shoez_core::cart::{cart_subtotal, CartRepository};
use shoez_core::{CartLineItem, Money};
use shoez_db::{Database, DbConfig};
use std::env;

/// (name, image, price in cents, quantity)
const DEMO_CART: &[(&str, &str, i64, i64)] = &[
    ("Air Runner", "/images/air-runner.png", 5000, 2),
    ("Court Classic", "/images/court-classic.png", 7499, 1),
    ("Beach Flip", "/images/beach-flip.png", 1999, 3),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = "./shoez_dev.db".to_string();
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Shoezshop Demo Cart Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shoez_dev.db)");
                println!("  -f, --force        Replace an existing cart");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Shoezshop Demo Cart Seeder");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let carts = db.carts();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if !force && carts.raw().await?.is_some() {
        println!("⚠ A cart is already stored");
        println!("  Pass --force to replace it.");
        return Ok(());
    }

    let items: Vec<CartLineItem> = DEMO_CART
        .iter()
        .map(|(name, image, cents, qty)| {
            CartLineItem::new(*name, *image, Money::from_cents(*cents), *qty)
        })
        .collect();

    carts.save(&items).await?;

    println!();
    for item in &items {
        println!("  {} × {} @ {}", item.quantity, item.name, item.unit_price);
    }
    println!();
    println!("✓ Cart written, subtotal {}", cart_subtotal(&items));

    db.close().await;
    Ok(())
}
