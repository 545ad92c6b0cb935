//! One-pass symbol analysis: parse, rank, attribute.

use super::buckets::build_class_buckets;
use super::ranking::{rank_symbols, total_code_size};
use crate::parser::model::SymbolAnalysis;
use crate::parser::{parse_symbol_dump, SymbolRecord};
use crate::toolchain::Demangler;
use log::debug;

/// Analyze parsed symbol records
///
/// **Public** - combines ranking and class attribution
///
/// # Arguments
/// * `records` - Parsed symbol records
/// * `demangler` - Name resolver for mangled names
/// * `top_symbols` - Rows in the top symbols table
/// * `top_classes` - Rows in the class table
pub fn analyze_symbols(
    records: &[SymbolRecord],
    demangler: &dyn Demangler,
    top_symbols: usize,
    top_classes: usize,
) -> SymbolAnalysis {
    let total = total_code_size(records);
    let code_symbol_count = records.iter().filter(|r| r.is_code()).count();
    let top = rank_symbols(records, top_symbols);

    let (mut classes, unattributed_size) = build_class_buckets(records, demangler);
    classes.truncate(top_classes);

    debug!(
        "Symbol analysis: {} code symbols, {} bytes, {} bytes unattributed",
        code_symbol_count, total, unattributed_size
    );

    SymbolAnalysis {
        total_code_size: total,
        code_symbol_count,
        top_symbols: top,
        classes,
        unattributed_size,
    }
}

/// Analyze raw symbol dump text
///
/// **Public** - convenience wrapper over `parse_symbol_dump` + `analyze_symbols`
pub fn analyze_symbol_dump(
    dump: &str,
    demangler: &dyn Demangler,
    top_symbols: usize,
    top_classes: usize,
) -> SymbolAnalysis {
    let records = parse_symbol_dump(dump.lines());
    analyze_symbols(&records, demangler, top_symbols, top_classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::DisabledDemangler;

    #[test]
    fn test_buckets_plus_unattributed_equals_total() {
        let dump = "\
00000100 00000040 T Clock::tick()
00000200 00000030 T main
00000300 00000020 W Menu::show()
00000400 00000500 D table
00000500 00000010 T _ZN4Menu4hideEv
";
        let analysis = analyze_symbol_dump(dump, &DisabledDemangler, 50, 30);

        let bucketed: u64 = analysis.classes.iter().map(|c| c.total_size).sum();
        assert_eq!(analysis.total_code_size, 100);
        assert_eq!(analysis.code_symbol_count, 4);
        assert_eq!(bucketed + analysis.unattributed_size, analysis.total_code_size);
        assert_eq!(analysis.unattributed_size, 40);
    }

    #[test]
    fn test_truncates_tables() {
        let dump = "\
1 30 T A::a()
2 20 T B::b()
3 10 T C::c()
";
        let analysis = analyze_symbol_dump(dump, &DisabledDemangler, 2, 1);

        assert_eq!(analysis.top_symbols.len(), 2);
        assert_eq!(analysis.classes.len(), 1);
        assert_eq!(analysis.classes[0].label, "A");
        assert_eq!(analysis.total_code_size, 60);
    }

    #[test]
    fn test_empty_dump() {
        let analysis = analyze_symbol_dump("", &DisabledDemangler, 50, 30);

        assert_eq!(analysis, SymbolAnalysis::default());
    }
}
