//! Terminal output formatting.

use colored::Colorize;
use pcmp_analytics::{
    format_cost, format_token_count, CatalogEntry, ComparisonReport, DiffAnnotation, ModelEstimate, Segment,
};
use pcmp_core::comparison::model::PromptComparison;
use pcmp_core::project::model::Project;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render one side of a diff with highlighted words.
pub fn render_annotation(annotation: &DiffAnnotation) -> String {
    let mut out = String::new();
    for segment in annotation.segments() {
        match segment {
            Segment::Literal { text } => out.push_str(text),
            Segment::Highlighted { text } => out.push_str(&text.as_str().black().on_yellow().to_string()),
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Print both sides of a positional diff.
pub fn print_diff(a: &DiffAnnotation, b: &DiffAnnotation) {
    println!("{}", "Prompt A".cyan().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("{}", render_annotation(a));
    println!();
    println!("{}", "Prompt B".cyan().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("{}", render_annotation(b));

    if !a.has_differences() && !b.has_differences() {
        println!();
        println!("{}", "No differences.".dimmed());
    }
}

/// Print the stats, similarity and token estimates of a comparison.
pub fn print_report(report: &ComparisonReport) {
    let rule = "─".repeat(50);

    println!("{}", "Prompt Comparison".bold());
    println!("{}", rule.dimmed());
    println!("{:<12}{:>12}{:>12}{:>12}", "", "Prompt A", "Prompt B", "Diff");
    for (label, a, b, d) in [
        ("Characters", report.stats_a.chars, report.stats_b.chars, report.delta.chars),
        ("Words", report.stats_a.words, report.stats_b.words, report.delta.words),
        ("Lines", report.stats_a.lines, report.stats_b.lines, report.delta.lines),
    ] {
        println!("{:<12}{:>12}{:>12}{:>12}", label, a, b, d);
    }
    println!("{}", rule.dimmed());
    println!("Similarity: {}", similarity_colored(report.similarity));
    println!();

    println!("{}", "Estimated input tokens".bold());
    for (a, b) in report.estimates_a.iter().zip(&report.estimates_b) {
        println!(
            "  {} A: {:>7} ({:>12})  B: {:>7} ({:>12})",
            pad_right(a.model.pricing.name, 20),
            format_token_count(a.estimate.tokens).cyan(),
            format_cost(a.estimate.cost),
            format_token_count(b.estimate.tokens).cyan(),
            format_cost(b.estimate.cost),
        );
    }
    println!("  {}", "Approximate, based on average tokens per word.".dimmed());
}

fn similarity_colored(similarity: u8) -> colored::ColoredString {
    let label = format!("{}%", similarity);
    match similarity {
        80..=100 => label.green().bold(),
        40..=79 => label.yellow().bold(),
        _ => label.red().bold(),
    }
}

/// Print token estimates for one text.
pub fn print_estimates(estimates: &[ModelEstimate], default_model: &str) {
    println!("{:<3}{:<22}{:<12}{:>10}{:>14}", "", "Model", "Provider", "Tokens", "Cost");
    println!("{}", "─".repeat(61));

    for estimate in estimates {
        let marker = if estimate.model.key == default_model { "*".green() } else { " ".normal() };
        println!(
            "{:<3}{}{:<12}{:>10}{:>14}",
            marker,
            pad_right(estimate.model.pricing.name, 22),
            estimate.model.pricing.provider,
            format_token_count(estimate.estimate.tokens),
            format_cost(estimate.estimate.cost),
        );
    }
}

/// Print the pricing catalog.
pub fn print_models(models: &[CatalogEntry], default_model: &str) {
    println!(
        "{:<3}{:<20}{:<20}{:<12}{:>12}{:>12}",
        "", "Key", "Name", "Provider", "$/1K in", "Tok/word"
    );
    println!("{}", "─".repeat(79));

    for model in models {
        let marker = if model.key == default_model { "*".green() } else { " ".normal() };
        println!(
            "{:<3}{:<20}{:<20}{:<12}{:>12}{:>12}",
            marker,
            model.key.cyan(),
            model.pricing.name,
            model.pricing.provider,
            format!("{:.6}", model.pricing.input_cost_per_1k_tokens),
            model.pricing.average_tokens_per_word,
        );
    }
}

/// Print projects as a table.
pub fn print_projects_table(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", "No projects found.".dimmed());
        return;
    }

    println!("{:<10} {:<30} {:<36}", "ID", "Name", "Description");
    println!("{}", "─".repeat(78));

    for project in projects {
        println!(
            "{:<10} {} {}",
            short_id(&project.id),
            pad_right(&truncate(&project.name, 30), 30),
            truncate(project.description.as_deref().unwrap_or(""), 36).dimmed()
        );
    }

    println!();
    println!("{} project(s) total", projects.len());
}

/// Print saved comparisons as a table.
pub fn print_comparisons_table(comparisons: &[PromptComparison]) {
    if comparisons.is_empty() {
        println!("{}", "No saved comparisons found.".dimmed());
        return;
    }

    println!("{:<10} {:<30} {:>10} {:<20}", "ID", "Title", "Similarity", "Updated");
    println!("{}", "─".repeat(73));

    for comparison in comparisons {
        let similarity = comparison
            .derived_metadata()
            .map(|m| format!("{}%", m.similarity))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {} {:>10} {:<20}",
            short_id(&comparison.id),
            pad_right(&truncate(&comparison.title, 30), 30),
            similarity,
            comparison.updated_at.get(..19).unwrap_or(&comparison.updated_at).dimmed()
        );
    }

    println!();
    println!("{} comparison(s) total", comparisons.len());
}

/// Print a single saved comparison.
pub fn print_comparison(comparison: &PromptComparison) {
    println!(
        "{} {}",
        comparison.title.cyan().bold(),
        format!("({})", comparison.id).dimmed()
    );
    if let Some(project_id) = &comparison.project_id {
        println!("{}: {}", "Project".bold(), project_id);
    }
    println!("{}: {}", "Updated".bold(), comparison.updated_at);
    println!();

    println!("{}", "Prompt A".bold());
    println!("{}", comparison.prompt_a);
    println!();
    println!("{}", "Prompt B".bold());
    println!("{}", comparison.prompt_b);

    if let Some(metadata) = comparison.derived_metadata() {
        println!();
        println!(
            "{}: {}  A: {} words  B: {} words",
            "Similarity".bold(),
            similarity_colored(metadata.similarity),
            metadata.stats_a.words,
            metadata.stats_b.words
        );
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string to a maximum visual width.
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("...");
    result
}
