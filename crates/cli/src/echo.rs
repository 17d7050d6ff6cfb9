use std::path::Path;
use std::time::Duration;

use metrica_core::{AnalysisReport, ExtractOutcome, ExtractReport};
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Metrica".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Article extraction and text metrics\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print stage timing, green under a second, yellow under ten
pub fn print_timing(label: &str, duration: Duration) {
    let secs = duration.as_secs_f64();
    let label = format!("{}:", label);

    if secs < 1.0 {
        eprintln!("  {} {:>8.2}s", label.dimmed(), secs.green());
    } else if secs < 10.0 {
        eprintln!("  {} {:>8.2}s", label.dimmed(), secs.bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}s", label.dimmed(), secs.bright_red());
    }
}

/// Print the per-record results of an extraction batch
pub fn print_extraction_summary(report: &ExtractReport) {
    for outcome in &report.outcomes {
        if let ExtractOutcome::Failed { id, url, error } = outcome {
            print_warning(&format!("{} ({}): {}", id, url, error));
        }
    }

    eprintln!(
        "  {} {}  {} {}",
        "Saved:".dimmed(),
        report.saved().to_string().bright_white(),
        "Failed:".dimmed(),
        report.failed().to_string().bright_white()
    );
}

/// Print the row count and skipped ids of an analysis batch
pub fn print_analysis_summary(report: &AnalysisReport, output: &Path) {
    if !report.skipped.is_empty() {
        print_warning(&format!("Skipped (no article): {}", report.skipped.join(", ")));
    }

    let size = std::fs::metadata(output).map(|m| m.len() as usize).unwrap_or(0);
    eprintln!(
        "  {} {}  {} {}",
        "Rows:".dimmed(),
        report.rows.len().to_string().bright_white(),
        "Size:".dimmed(),
        format_size(size).bright_white()
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
