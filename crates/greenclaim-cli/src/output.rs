//! Output formatting for the CLI.

use crate::commands::batch::BatchEntry;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use greenclaim_domain::{DocumentLabel, FinalVerdict, SemanticCategory};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single verdict.
    pub fn format_verdict(&self, verdict: &FinalVerdict) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&verdict_json(verdict))?),
            OutputFormat::Table => Ok(self.format_verdict_table(verdict)),
        }
    }

    /// Format batch results.
    pub fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(entries),
            OutputFormat::Table => Ok(self.format_batch_table(entries)),
        }
    }

    fn format_verdict_table(&self, verdict: &FinalVerdict) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Stage", "Outcome", "Confidence", "Rationale"]);

        let document = &verdict.document;
        builder.push_record([
            "Document".to_string(),
            self.label(document.label),
            format!("{:.2}", document.confidence),
            document.rationale.clone(),
        ]);
        if let Some(semantic) = &verdict.semantic {
            builder.push_record([
                "Semantic".to_string(),
                self.category(semantic.category),
                "-".to_string(),
                semantic.rationale.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_batch_json(&self, entries: &[BatchEntry]) -> Result<String> {
        let json_entries: Vec<serde_json::Value> = entries
            .iter()
            .map(|entry| match &entry.result {
                Ok(verdict) => serde_json::json!({
                    "line": entry.line,
                    "verdict": verdict_json(verdict),
                }),
                Err(message) => serde_json::json!({
                    "line": entry.line,
                    "error": message,
                }),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_entries)?)
    }

    fn format_batch_table(&self, entries: &[BatchEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Line", "Document", "Confidence", "Semantic", "Rationale"]);

        for entry in entries {
            let line = entry.line.to_string();
            match &entry.result {
                Ok(verdict) => {
                    let (semantic, rationale) = match &verdict.semantic {
                        Some(s) => (self.category(s.category), s.rationale.clone()),
                        None => ("-".to_string(), verdict.document.rationale.clone()),
                    };
                    builder.push_record([
                        line,
                        self.label(verdict.document.label),
                        format!("{:.2}", verdict.document.confidence),
                        semantic,
                        rationale,
                    ]);
                }
                Err(message) => {
                    builder.push_record([
                        line,
                        self.colorize("error", "red"),
                        "-".to_string(),
                        "-".to_string(),
                        message.clone(),
                    ]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let failed = entries.iter().filter(|e| e.result.is_err()).count();
        let summary = format!("Evaluated {} record(s), {} failed", entries.len(), failed);
        let summary = if failed == 0 {
            self.success(&summary)
        } else {
            self.warning(&summary)
        };

        format!("{}\n{}", table, summary)
    }

    fn label(&self, label: DocumentLabel) -> String {
        match label {
            DocumentLabel::Compliant => self.colorize(label.as_str(), "green"),
            DocumentLabel::GreenwashingRisk => self.colorize(label.as_str(), "red"),
        }
    }

    fn category(&self, category: SemanticCategory) -> String {
        let color = match category {
            SemanticCategory::Valid => "green",
            SemanticCategory::Ambiguous | SemanticCategory::Marketing => "yellow",
            SemanticCategory::Misleading => "red",
            SemanticCategory::Irrelevant => "cyan",
        };
        self.colorize(category.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn verdict_json(verdict: &FinalVerdict) -> serde_json::Value {
    serde_json::json!({
        "document": {
            "label": verdict.document.label.as_str(),
            "rationale": verdict.document.rationale,
            "confidence": verdict.document.confidence,
        },
        "semantic": verdict.semantic.as_ref().map(|s| serde_json::json!({
            "category": s.category.as_str(),
            "rationale": s.rationale,
        })),
    })
}
