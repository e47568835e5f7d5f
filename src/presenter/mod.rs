// Result presentation - maps the engine report onto display entries
use crate::models::JobReport;
use serde::Serialize;

const STATUS_SUCCESS: &str = "success";

/// Binary display class for one per-file outcome. Only the exact status
/// string "success" counts as resized; skipped, errored and unsupported
/// entries all render as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    Resized,
    Error,
}

impl OutcomeClass {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeClass::Resized => "Resized",
            OutcomeClass::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderEntry {
    pub file: String,
    pub output_file: String,
    pub timestamp: String,
    pub class: OutcomeClass,
    pub label: &'static str,
    /// Not surfaced in the current UI; kept for a detail view.
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub output_folder: String,
    pub processing_time: String,
    pub entries: Vec<RenderEntry>,
}

/// Builds the render model, preserving the engine's reporting order exactly.
pub fn present(report: &JobReport) -> RenderModel {
    let entries = report
        .results
        .iter()
        .map(|outcome| {
            let class = if outcome.status == STATUS_SUCCESS {
                OutcomeClass::Resized
            } else {
                OutcomeClass::Error
            };

            RenderEntry {
                file: outcome.file.clone(),
                output_file: outcome.output_file.clone(),
                timestamp: outcome.timestamp.clone(),
                class,
                label: class.label(),
                message: outcome.message.clone(),
            }
        })
        .collect();

    RenderModel {
        output_folder: report.output_folder.clone(),
        processing_time: report.processing_time.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileOutcome;

    fn outcome(file: &str, status: &str, message: &str) -> FileOutcome {
        FileOutcome {
            file: file.to_string(),
            output_file: format!("/out/{}", file),
            timestamp: "2026-08-30 11:02:15".to_string(),
            status: status.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn mixed_report_keeps_order_and_classes() {
        let report = JobReport {
            output_folder: "/out".to_string(),
            processing_time: "2.00 seconds".to_string(),
            results: vec![
                outcome("a.png", "success", "Image resized successfully."),
                outcome("b.png", "failed", "Error opening image."),
            ],
        };

        let model = present(&report);
        assert_eq!(model.entries.len(), 2);
        assert_eq!(model.entries[0].file, "a.png");
        assert_eq!(model.entries[0].class, OutcomeClass::Resized);
        assert_eq!(model.entries[0].label, "Resized");
        assert_eq!(model.entries[1].file, "b.png");
        assert_eq!(model.entries[1].class, OutcomeClass::Error);
        assert_eq!(model.entries[1].label, "Error");
    }

    #[test]
    fn only_the_exact_success_string_counts() {
        for status in ["skipped", "unsupported_format", "error", "Success", ""] {
            let report = JobReport {
                output_folder: "/out".to_string(),
                processing_time: "0.10 seconds".to_string(),
                results: vec![outcome("a.png", status, "")],
            };
            assert_eq!(present(&report).entries[0].class, OutcomeClass::Error);
        }
    }

    #[test]
    fn message_is_retained_for_a_detail_view() {
        let report = JobReport {
            output_folder: "/out".to_string(),
            processing_time: "0.10 seconds".to_string(),
            results: vec![outcome("a.png", "skipped", "File already exists, skipping.")],
        };

        assert_eq!(
            present(&report).entries[0].message,
            "File already exists, skipping."
        );
    }
}
