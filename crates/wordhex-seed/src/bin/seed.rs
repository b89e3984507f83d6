//! Seeds the sample word list in the extended record shape
//! (value, hint, difficulty, category).
//!
//! Run with:
//! ```
//! cargo run -p wordhex-seed --bin seed
//! ```

use tracing_subscriber::EnvFilter;
use wordhex_seed::api::DataApiClient;
use wordhex_seed::config::{BackendConfig, RecordShape};
use wordhex_seed::{seed, words};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let rule = "=".repeat(70);
    println!("{rule}");
    println!("WordHex Database Seeding");
    println!("{rule}\n");

    let config = BackendConfig::from_env();
    let client = DataApiClient::new(&config)?;

    let report = seed::seed_words(&client, words::SAMPLE_WORDS, RecordShape::Extended).await;
    tracing::debug!("Seed pass finished: {:?}", report);

    println!("\n[+] Database seeding complete!");
    println!("[+] You can now start using the WordHex app!");

    Ok(())
}
