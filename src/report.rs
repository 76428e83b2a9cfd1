use clap::ValueEnum;
use colored::Colorize;

use crate::{runner::PassReport, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a finished pass for stdout.
pub fn render(
    report: &PassReport,
    completion_message: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, completion_message)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &PassReport, completion_message: &str) -> String {
    let mut out = String::new();
    for file in &report.files {
        let marker = if file.changed {
            "changed".green()
        } else {
            "unchanged".dimmed()
        };
        out.push_str(&format!(
            "{:>9} {} ({} replacements)\n",
            marker,
            file.path.display(),
            file.total()
        ));
    }
    out.push_str(&completion_message.bold().to_string());
    out
}
