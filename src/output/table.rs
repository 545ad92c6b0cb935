//! Plain-text report sections for the console.
//!
//! Every function returns a `String` so the layout can be checked in tests
//! without capturing stdout.

use crate::parser::model::{ClassBucket, RankedSymbol};
use crate::utils::config::BANNER_WIDTH;

/// Section banner: rule, title, rule
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{}\n{}\n{}", rule, title, rule)
}

/// Top symbols table with size and share of total
///
/// **Public** - "TOP FLASH CONSUMERS BY SYMBOL" section
pub fn render_symbol_table(symbols: &[RankedSymbol], total_code_size: u64) -> String {
    let mut lines = Vec::with_capacity(symbols.len() + 4);

    lines.push(format!("{:<15} {:<12} {}", "Size (bytes)", "% of Total", "Symbol"));
    lines.push("-".repeat(BANNER_WIDTH));

    for symbol in symbols {
        lines.push(format!(
            "{:<15} {:>6.2}%      {}",
            symbol.size, symbol.percentage, symbol.name
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total code size: {} bytes", total_code_size));

    lines.join("\n")
}

/// Class/namespace table
///
/// **Public** - "SIZE BY CLASS/NAMESPACE" section
pub fn render_class_table(classes: &[ClassBucket]) -> String {
    let mut lines = Vec::with_capacity(classes.len() + 2);

    lines.push(format!("{:<15} {}", "Size (bytes)", "Class/Namespace"));
    lines.push("-".repeat(BANNER_WIDTH));

    for class in classes {
        lines.push(format!("{:<15} {}", class.total_size, class.label));
    }

    lines.join("\n")
}
