//! Table existence checks and manual schema-setup instructions.
//!
//! The anonymous key cannot execute arbitrary SQL through the data API, so
//! schema creation stays a manual dashboard step. This module only verifies
//! which expected tables already answer probe requests and, when any are
//! missing, renders the operator walkthrough with the SQL text inline.

use std::path::Path;

use anyhow::Context;

use crate::api::{DataApiClient, TableStatus};

/// Tables the app expects the backend to expose.
pub const TABLES: [&str; 3] = ["player_stats", "words", "match_history"];

/// Notice the SQL script raises when it completes; the operator watches for
/// this in the dashboard output.
pub const SUCCESS_MARKER: &str = "WordHex Supabase Schema Setup Complete!";

/// Docs pointer printed after the manual steps.
pub const DOCS_URL: &str = "https://supabase.com/docs/guides/database/connecting-to-postgres";

const DASHBOARD_URL: &str = "https://app.supabase.com";

/// Reads the local SQL schema file in full. The file is never parsed or
/// executed locally.
pub fn load_schema_sql(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("SQL schema file not found: {}", path.display()))
}

/// Banner reporting the exact byte length of the loaded SQL text.
pub fn loaded_banner(sql: &str) -> String {
    format!("[+] Loaded SQL schema file ({} bytes)", sql.len())
}

/// Per-table probe results over one verification pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerifySummary {
    pub present: usize,
    pub missing: usize,
    /// Probes that could not be made at all; distinct from missing.
    pub unverified: usize,
}

impl VerifySummary {
    pub fn all_present(&self) -> bool {
        self.present == TABLES.len()
    }

    pub fn tally(&mut self, status: &TableStatus) {
        match status {
            TableStatus::Present => self.present += 1,
            TableStatus::Missing(_) => self.missing += 1,
            TableStatus::Unverified(_) => self.unverified += 1,
        }
    }
}

/// Formats the report line for one table probe.
pub fn table_line(table: &str, status: &TableStatus) -> String {
    match status {
        TableStatus::Present => format!("  [+] {table} exists"),
        TableStatus::Missing(status) => {
            format!("  [!] {table} not found (HTTP {})", status.as_u16())
        }
        TableStatus::Unverified(message) => format!("  [x] Could not verify {table}: {message}"),
    }
}

/// Probes every expected table, printing one line per result and a verdict.
pub async fn verify_tables(client: &DataApiClient) -> VerifySummary {
    println!("Checking for existing tables...\n");

    let mut summary = VerifySummary::default();

    for table in TABLES {
        let status = client.probe_table(table).await;
        println!("{}", table_line(table, &status));
        summary.tally(&status);
    }

    if summary.all_present() {
        println!("\n[+] All tables exist! Database is ready to use.");
    } else if summary.present > 0 {
        println!(
            "\n[!] Some tables exist ({}/{})",
            summary.present,
            TABLES.len()
        );
        println!("    Run the SQL manually to complete the setup.");
    } else {
        println!("\n[!] No tables found. Running the SQL setup is required.");
    }

    summary
}

/// Renders the manual dashboard walkthrough with the SQL text verbatim.
///
/// Text-only by design: nothing here executes SQL.
pub fn render_instructions(sql: &str) -> String {
    let rule = "=".repeat(70);
    let dashes = "-".repeat(70);

    let mut out = String::new();
    out.push_str(&format!("{rule}\n"));
    out.push_str("WordHex Schema Setup\n");
    out.push_str(&format!("{rule}\n\n"));
    out.push_str("[!] IMPORTANT: Direct SQL execution via the API requires a Service\n");
    out.push_str("    Role key (not the anonymous key), so run the schema by hand:\n\n");
    out.push_str("MANUAL SETUP STEPS:\n");
    out.push_str(&format!("{dashes}\n"));
    out.push_str(&format!("1. Go to: {DASHBOARD_URL}\n"));
    out.push_str("2. Login with your credentials\n");
    out.push_str("3. Select your WordHex project\n");
    out.push_str("4. Click 'SQL Editor' in the left sidebar\n");
    out.push_str("5. Click 'New Query'\n");
    out.push_str("6. Paste the following SQL code:\n");
    out.push_str(&format!("{dashes}\n"));
    out.push_str(sql);
    if !sql.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("{dashes}\n"));
    out.push_str("7. Click the 'Run' button (or Ctrl+Enter)\n");
    out.push_str(&format!(
        "8. Check for success message: '{SUCCESS_MARKER}'\n"
    ));
    out.push_str("\n[+] Once complete, your database will be ready for the app!\n");

    out
}
