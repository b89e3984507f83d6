//! Verifies the WordHex tables and prints manual schema setup instructions.
//!
//! Run with:
//! ```
//! cargo run -p wordhex-seed --bin setup-schema
//! ```

use std::path::Path;

use tracing_subscriber::EnvFilter;
use wordhex_seed::api::DataApiClient;
use wordhex_seed::config::BackendConfig;
use wordhex_seed::schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sql_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("supabase_schema.sql");
    let sql = schema::load_schema_sql(&sql_path)?;
    println!("{}\n", schema::loaded_banner(&sql));

    let config = BackendConfig::from_env();
    let client = DataApiClient::new(&config)?;

    let summary = schema::verify_tables(&client).await;

    if !summary.all_present() {
        println!();
        println!("{}", schema::render_instructions(&sql));
        println!("For a guided walkthrough, visit:");
        println!("  {}", schema::DOCS_URL);
    }

    Ok(())
}
