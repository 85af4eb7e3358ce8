//! # Seed Data Loader
//!
//! Populates an empty database with the sample suppliers and medicines.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p medvault-db --bin seed
//!
//! # Specify database path
//! cargo run -p medvault-db --bin seed -- --db ./data/medvault.db
//! ```

use std::env;

use medvault_db::seed::{seed_sample_data, SeedOutcome};
use medvault_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./data/medvault.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("MedVault Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./data/medvault.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("MedVault Seed Data Loader");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    match seed_sample_data(&db).await? {
        SeedOutcome::Seeded {
            suppliers,
            medicines,
        } => {
            println!("✓ Inserted {} suppliers", suppliers);
            println!("✓ Inserted {} medicines", medicines);
        }
        SeedOutcome::Skipped { existing_suppliers } => {
            println!("⚠ Database already has {} suppliers", existing_suppliers);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the database file to regenerate.");
        }
    }

    db.close().await;
    Ok(())
}
