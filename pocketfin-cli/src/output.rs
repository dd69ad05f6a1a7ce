//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Disable coloring when stdout is not a terminal
pub fn init_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render a 0-100 percentage as a fixed-width meter
pub fn meter(pct: u32) -> String {
    const WIDTH: u32 = 20;
    let filled = (pct.min(100) * WIDTH).div_ceil(100);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled as usize),
        "░".repeat((WIDTH - filled) as usize),
        pct
    )
}

/// Format an amount with its sign implied by the row kind
pub fn amount_cell(amount: Decimal, income: bool) -> String {
    if income {
        format!("+{}", amount)
    } else {
        format!("-{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert!(meter(0).starts_with("░"));
        assert!(meter(100).starts_with("█"));
        assert!(meter(100).contains("100%"));
        assert!(!meter(50).contains("█░█"));
    }

    #[test]
    fn test_amount_cell_signs() {
        assert_eq!(amount_cell(Decimal::new(5000, 2), false), "-50.00");
        assert_eq!(amount_cell(Decimal::new(5000, 2), true), "+50.00");
    }
}
