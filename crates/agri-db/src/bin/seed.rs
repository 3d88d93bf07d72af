//! # Seed Data Writer
//!
//! Writes the default records for every stored collection.
//!
//! ## Usage
//! ```bash
//! # Seed ./agri_dev.db (skips collections that already hold data)
//! cargo run -p agri-db --bin seed
//!
//! # Specify database path
//! cargo run -p agri-db --bin seed -- --db ./data/agri.db
//!
//! # Overwrite existing data with the defaults
//! cargo run -p agri-db --bin seed -- --force
//! ```

use std::env;

use agri_core::{Crop, SoilType, StoredRecord, User, WeatherRecord};
use agri_db::{CollectionRepository, Database, DbConfig, DbResult, SeedOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut force = false;
    let mut db_path = String::from("./agri_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--force" | "-f" => force = true,
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Smart Agri Yield Seed Data Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./agri_dev.db)");
                println!("  -f, --force        Overwrite collections that already hold data");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other} (see --help)");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    println!("🌱 Smart Agri Yield Seed Data Writer");
    println!("====================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let repo = db.collections();
    seed::<Crop>(&repo, force).await?;
    seed::<SoilType>(&repo, force).await?;
    seed::<WeatherRecord>(&repo, force).await?;
    seed::<User>(&repo, force).await?;

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

async fn seed<T: StoredRecord>(repo: &CollectionRepository, force: bool) -> DbResult<()> {
    let key = T::STORAGE_KEY;
    match repo.seed::<T>(force).await? {
        SeedOutcome::Skipped => {
            println!("⚠ {key}: already stored, skipping (use --force to overwrite)")
        }
        SeedOutcome::Written(records) => println!("✓ {key}: wrote {records} records"),
    }
    Ok(())
}
