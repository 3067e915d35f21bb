use serde::Serialize;

use fenbook_domain::{parse_import, validate_fen};

use crate::cli::ValidateArgs;
use crate::output;

#[derive(Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub entries: Vec<EntryReport>,
}

#[derive(Serialize)]
pub struct EntryReport {
    pub fen: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", args.file, e))?;

    let report = build_report(&text);
    if report.valid == report.total {
        output::output_success(report);
        Ok(())
    } else {
        let invalid = report.total - report.valid;
        let message = format!("{invalid} of {} entries failed validation", report.total);
        output::output_failure(Some(report), &message)
    }
}

fn build_report(text: &str) -> ValidationReport {
    let entries: Vec<EntryReport> = parse_import(text)
        .into_iter()
        .map(|entry| {
            let error = validate_fen(&entry.fen).err().map(|e| e.to_string());
            EntryReport {
                fen: entry.fen,
                description: entry.description,
                error,
            }
        })
        .collect();

    ValidationReport {
        total: entries.len(),
        valid: entries.iter().filter(|e| e.error.is_none()).count(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_valid_and_invalid_entries() {
        let report = build_report(
            "8/8/8/8/8/8/8/8 w - - 0 1 // empty board\nnot a fen at all\n",
        );
        assert_eq!(report.total, 2);
        assert_eq!(report.valid, 1);
        assert!(report.entries[0].error.is_none());
        assert!(report.entries[1].error.is_some());
    }

    #[test]
    fn test_empty_file_reports_zero_entries() {
        let report = build_report("\n\n");
        assert_eq!(report.total, 0);
        assert_eq!(report.valid, 0);
    }
}
