//! Terminal output after a run: colored summary or JSON report.
//!
//! Log lines go to stderr and the log file; this module only writes the
//! final result to stdout.

use console::Style;

use crate::sync::{ItemOutcome, SyncReport, WorkItem};

pub struct Summary {
    green: Style,
    red: Style,
    dim: Style,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }
}

impl Summary {
    pub fn print_report(&self, report: &SyncReport, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
            return;
        }

        println!(
            "  {} keys scanned",
            self.dim.apply_to(report.keys_fetched)
        );
        for outcome in &report.outcomes {
            match outcome {
                ItemOutcome::Updated {
                    language_iso, text, ..
                } => println!("  {} {language_iso}: {text}", self.green.apply_to("✓")),
                ItemOutcome::Failed {
                    language_iso,
                    translation_id,
                    reason,
                } => println!(
                    "  {} {language_iso} (translation {translation_id}): {reason}",
                    self.red.apply_to("✗")
                ),
            }
        }
        println!(
            "  {} updated, {} failed",
            self.green.apply_to(report.updated()),
            self.red.apply_to(report.failed())
        );
    }

    pub fn print_pending(&self, items: &[WorkItem], json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
            return;
        }

        for item in items {
            println!(
                "  {} key {} → {} {}",
                self.dim.apply_to("•"),
                item.key_id,
                item.language_iso,
                self.dim.apply_to(format!("\"{}\"", item.source_text))
            );
        }
        println!("  {} untranslated", items.len());
    }
}
