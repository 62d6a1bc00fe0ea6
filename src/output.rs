//! Output formatting module
//!
//! Colored status lines, section headers and tables shared by every command.
//! The `*_line` builders return text so the page renderer can compose them.

use colored::Colorize;
use std::fmt::Display;
use tabled::{
    settings::{formatting::TabSize, peaker::PriorityMax, Style, Width},
    Table, Tabled,
};

use crate::config::OutputFormat;

/// Fallback width when stdout is not a terminal
pub const DEFAULT_TERMINAL_WIDTH: usize = 120;

const TAB_WIDTH: usize = 4;

pub fn success_line(message: impl Display) -> String {
    format!("{} {}", "✓".green(), message)
}

pub fn error_line(message: impl Display) -> String {
    format!("{} {}", "✗".red(), message)
}

pub fn info_line(message: impl Display) -> String {
    format!("{} {}", "ℹ".blue(), message)
}

pub fn progress_line(message: impl Display) -> String {
    format!("{} {}", "⠿".cyan(), message)
}

/// Format and print a success message
pub fn success(message: impl Display) {
    println!("{}", success_line(message));
}

/// Format and print an error message
pub fn error(message: impl Display) {
    eprintln!("{}", error_line(message));
}

/// Get the current terminal width, falling back to 120 columns
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Build a table wrapped to `width`.
///
/// Uses `PriorityMax`: the widest column (usually the document text) wraps
/// first. Words are not kept whole, so long tokens break instead of
/// overflowing the terminal. Tabs are expanded to spaces before measuring.
pub fn table<T: Tabled>(rows: &[T], format: OutputFormat, width: usize) -> String {
    let mut table = Table::new(rows);
    table.with(TabSize::new(TAB_WIDTH));
    match format {
        OutputFormat::Plain => table.with(Style::blank()),
        _ => table.with(Style::rounded()),
    };
    table
        .with(Width::wrap(width).priority::<PriorityMax>())
        .to_string()
}

/// Horizontal separator
pub fn separator_line() -> String {
    "─".repeat(60).dimmed().to_string()
}

/// Section header
pub fn section_line(title: impl Display) -> String {
    title.to_string().bold().underline().to_string()
}
