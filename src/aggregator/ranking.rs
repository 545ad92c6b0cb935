//! Rank code symbols by size.
//!
//! The largest symbols are the primary targets when trimming flash usage.

use crate::parser::model::RankedSymbol;
use crate::parser::SymbolRecord;
use log::debug;

/// Sum of the sizes of all code symbols
///
/// **Public** - grand total used for percentages
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn total_code_size(records: &[SymbolRecord]) -> u64 {
    records
        .iter()
        .filter(|r| r.is_code())
        .map(|r| r.size)
        .fold(0u64, u64::saturating_add)
}

/// Code symbols sorted by size, largest first
///
/// Ties are broken by name, ascending, so the order is deterministic.
/// Reverse-sorting `(size, name)` pairs would list tied names descending
/// instead; rows of equal size can therefore appear in the opposite order
/// from such a listing.
pub fn sorted_code_symbols(records: &[SymbolRecord]) -> Vec<&SymbolRecord> {
    let mut code: Vec<&SymbolRecord> = records.iter().filter(|r| r.is_code()).collect();
    code.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
    code
}

/// Calculate the top symbols table
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `records` - All parsed symbol records (non-code ones are ignored)
/// * `top_n` - Number of symbols to return (e.g., 50)
///
/// # Returns
/// Up to `top_n` symbols, non-increasing by size, with their share of the
/// total code size
pub fn rank_symbols(records: &[SymbolRecord], top_n: usize) -> Vec<RankedSymbol> {
    let total = total_code_size(records);
    let sorted = sorted_code_symbols(records);

    debug!(
        "Ranking top {} of {} code symbols ({} bytes)",
        top_n,
        sorted.len(),
        total
    );

    sorted
        .into_iter()
        .take(top_n)
        .map(|record| create_ranked_symbol(record, total))
        .collect()
}

/// Create a RankedSymbol from a SymbolRecord
///
/// **Public** - exposed for tests
pub fn create_ranked_symbol(record: &SymbolRecord, total: u64) -> RankedSymbol {
    RankedSymbol {
        name: record.name.clone(),
        size: record.size,
        percentage: percentage_of(record.size, total),
    }
}

/// Share of `total` taken by `size`, in percent; 0 when `total` is 0
pub fn percentage_of(size: u64, total: u64) -> f64 {
    if total > 0 {
        (size as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SymbolKind;

    fn code(size: u64, name: &str) -> SymbolRecord {
        SymbolRecord::new(size, name, SymbolKind::Code)
    }

    #[test]
    fn test_rank_symbols() {
        let records = vec![
            code(2000, "loop"),
            code(5000, "setup"),
            SymbolRecord::new(9000, "buffer", SymbolKind::Other),
            code(3000, "draw"),
        ];

        let ranked = rank_symbols(&records, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "setup");
        assert_eq!(ranked[0].size, 5000);
        assert_eq!(ranked[0].percentage, 50.0);
        assert_eq!(ranked[1].name, "draw");
    }

    #[test]
    fn test_total_ignores_other_symbols() {
        let records = vec![
            code(10, "a"),
            SymbolRecord::new(99, "b", SymbolKind::Other),
            code(5, "c"),
        ];

        assert_eq!(total_code_size(&records), 15);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let records = vec![code(0, "a"), code(0, "b")];

        let ranked = rank_symbols(&records, 50);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.percentage == 0.0));
    }

    #[test]
    fn test_ties_broken_by_name() {
        let records = vec![code(8, "zeta"), code(8, "alpha"), code(9, "mid")];

        let names: Vec<&str> = sorted_code_symbols(&records)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(names, vec!["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let records = vec![code(u64::MAX, "a"), code(1, "b")];

        assert_eq!(total_code_size(&records), u64::MAX);

        let ranked = rank_symbols(&records, 50);
        assert_eq!(ranked[0].percentage, 100.0);
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(25, 100), 25.0);
        assert_eq!(percentage_of(25, 0), 0.0);
    }
}
