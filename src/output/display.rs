//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, render_path};
use crate::commands::{BenchmarkResult, PlanResult, SolveResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a grid
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving {}x{} grid",
        result.grid.rows(),
        result.grid.cols()
    );
    println!("{}", "─".repeat(60).cyan());
    for line in result.grid.to_string().lines() {
        println!("   {}", line.to_uppercase().bright_yellow().bold());
    }

    if result.found.is_empty() {
        println!("\n{}", "No words found".red().bold());
        return;
    }

    println!();
    for (key, path) in result.found.longest_first() {
        println!(
            "  {:<16} {}",
            key.text.to_uppercase().green(),
            format_path(path).bright_black()
        );

        if show_paths {
            for line in render_path(&result.grid, path) {
                println!("      {line}");
            }
            println!();
        }
    }

    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for key in result.found.keys() {
        *by_length.entry(key.text.len()).or_default() += 1;
    }
    let most = by_length.values().copied().max().unwrap_or(0);

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    for (len, count) in &by_length {
        let bar = create_progress_bar(*count as f64, most as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!(
        "\n{}",
        format!(
            "✅ Found {} words ({} letters) in {:.2?}",
            result.found.len(),
            result.total_letters(),
            result.duration
        )
        .green()
        .bold()
    );
}

/// Print a stroke plan
pub fn print_plan_result(result: &PlanResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}x{} ",
        "STROKE PLAN".bright_cyan().bold(),
        result.rows,
        result.cols
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, stroke) in result.strokes.iter().enumerate() {
        let points = stroke
            .points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:4}. {:<16} {}",
            i + 1,
            stroke.word.text.to_uppercase().bright_yellow(),
            points
        );
    }

    println!(
        "\n{} strokes, {} pointer positions",
        result.strokes.len(),
        result.total_points()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids solved:     {}", result.grids);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if let Some(grid) = &result.best_grid {
        println!("\n🏆 {}", "Richest grid:".bright_cyan().bold());
        for line in grid.to_string().lines() {
            println!("   {}", line.to_uppercase().bright_yellow());
        }
    }
}
