//! Sequential record seeding with per-record outcome reporting.
//!
//! Each record is one POST; there are no retries and no cross-record
//! dependencies, so a failed record is counted and skipped. A pass where
//! anything at all went in counts as a success.

use tracing::debug;

use crate::api::{DataApiClient, InsertOutcome};
use crate::config::RecordShape;
use crate::words::WordRecord;

/// Counters accumulated over one seeding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub failed: usize,
}

impl SeedReport {
    /// Partial seeding is acceptable; the pass succeeded if at least one
    /// record went in.
    pub fn any_added(&self) -> bool {
        self.added > 0
    }

    pub fn tally(&mut self, outcome: &InsertOutcome) {
        if outcome.is_inserted() {
            self.added += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Truncates to at most `max` characters without splitting a UTF-8 sequence.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Formats the fixed-prefix report line for one record's outcome.
pub fn outcome_line(record: &WordRecord, shape: RecordShape, outcome: &InsertOutcome) -> String {
    match outcome {
        InsertOutcome::Inserted => match shape {
            RecordShape::Basic => format!(
                "  [+] {:<15} - {}",
                record.value,
                truncate(record.hint, 40)
            ),
            RecordShape::Extended => format!(
                "  [+] {:<15} ({:<6}) - {}",
                record.value,
                record.difficulty.as_str(),
                truncate(record.hint, 40)
            ),
        },
        InsertOutcome::AlreadyExists => format!(
            "  [!] {:<15} - HTTP 409\n      (Already exists)",
            record.value
        ),
        InsertOutcome::Rejected(status) => {
            format!("  [!] {:<15} - HTTP {}", record.value, status.as_u16())
        }
        InsertOutcome::Failed(message) => format!(
            "  [x] {:<15} - Error: {}",
            record.value,
            truncate(message, 30)
        ),
    }
}

/// Seeds the sample list, one POST per record, printing a line per outcome
/// and a final summary.
pub async fn seed_words(
    client: &DataApiClient,
    records: &[WordRecord],
    shape: RecordShape,
) -> SeedReport {
    println!("Adding sample words to database...\n");

    let mut report = SeedReport::default();

    for record in records {
        let outcome = client.insert_word(record, shape).await;
        debug!("Seed outcome for {}: {:?}", record.value, outcome);
        println!("{}", outcome_line(record, shape, &outcome));
        report.tally(&outcome);
    }

    println!("\nAdded {} words successfully", report.added);
    if report.failed > 0 {
        println!("Skipped {} words", report.failed);
    }

    report
}

/// Samples up to five stored words and reports what the backend holds.
///
/// A transport failure here is reported but never fatal.
pub async fn verify_seeded(client: &DataApiClient) -> bool {
    println!("\nVerifying database...");

    match client.fetch_words(5).await {
        Ok(words) if !words.is_empty() => {
            println!("  [+] Database contains {} words", words.len());
            let first = &words[0];
            println!(
                "  [+] Sample: {} - {}",
                first.value,
                first.hint.as_deref().unwrap_or("No hint")
            );
            true
        }
        Ok(_) => {
            println!("  [!] No words found in database");
            false
        }
        Err(e) => {
            println!("  [x] Could not verify: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Difficulty;
    use reqwest::StatusCode;

    const RECORD: WordRecord = WordRecord {
        value: "HEXAGON",
        hint: "Six-sided polygon shape",
        difficulty: Difficulty::Easy,
        category: "geometry",
    };

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("short", 40), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(50);
        assert_eq!(truncate(&long, 40).len(), 40);
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        // Must count characters, not bytes.
        let s = "héllo wörld with accénts and mör";
        let cut = truncate(s, 10);
        assert_eq!(cut.chars().count(), 10);
    }

    #[test]
    fn test_success_line_basic() {
        let line = outcome_line(&RECORD, RecordShape::Basic, &InsertOutcome::Inserted);
        assert_eq!(line, "  [+] HEXAGON         - Six-sided polygon shape");
    }

    #[test]
    fn test_success_line_extended_shows_difficulty() {
        let line = outcome_line(&RECORD, RecordShape::Extended, &InsertOutcome::Inserted);
        assert!(line.starts_with("  [+] HEXAGON"));
        assert!(line.contains("(easy  )"));
    }

    #[test]
    fn test_conflict_line_carries_annotation() {
        let line = outcome_line(&RECORD, RecordShape::Basic, &InsertOutcome::AlreadyExists);
        assert!(line.contains("HTTP 409"));
        assert!(line.contains("(Already exists)"));
    }

    #[test]
    fn test_rejection_line_shows_raw_status() {
        let line = outcome_line(
            &RECORD,
            RecordShape::Basic,
            &InsertOutcome::Rejected(StatusCode::INTERNAL_SERVER_ERROR),
        );
        assert!(line.starts_with("  [!]"));
        assert!(line.contains("HTTP 500"));
    }

    #[test]
    fn test_transport_line_truncates_message() {
        let message = "m".repeat(80);
        let line = outcome_line(&RECORD, RecordShape::Basic, &InsertOutcome::Failed(message));
        assert!(line.starts_with("  [x]"));
        assert!(line.contains(&"m".repeat(30)));
        assert!(!line.contains(&"m".repeat(31)));
    }

    #[test]
    fn test_report_tally() {
        let mut report = SeedReport::default();
        report.tally(&InsertOutcome::Inserted);
        report.tally(&InsertOutcome::AlreadyExists);
        report.tally(&InsertOutcome::Failed("timeout".to_string()));

        assert_eq!(report.added, 1);
        assert_eq!(report.failed, 2);
        assert!(report.any_added());
    }

    #[test]
    fn test_report_all_failed_is_not_success() {
        let mut report = SeedReport::default();
        for _ in 0..15 {
            report.tally(&InsertOutcome::Failed("connection timed out".to_string()));
        }

        assert_eq!(report.added, 0);
        assert_eq!(report.failed, 15);
        assert!(!report.any_added());
    }
}
