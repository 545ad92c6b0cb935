//! Roll code symbol sizes up to their owning class or namespace.
//!
//! Example: `BinaryClock::setup(bool)` and `BinaryClock::loop()` both land
//! in the `BinaryClock` bucket.

use crate::parser::model::ClassBucket;
use crate::parser::SymbolRecord;
use crate::toolchain::Demangler;
use crate::utils::config::{MANGLED_PREFIX, SCOPE_SEPARATOR};
use log::{debug, trace};
use std::collections::HashMap;

/// Derive the class/namespace label of a symbol name
///
/// **Public** - attribution rule, independent of any real toolchain
///
/// # Algorithm
/// 1. Names already containing `::` use the part before the first `::`
/// 2. Mangled names (`_Z...`) are demangled; if the result contains `::`,
///    the part before it, cut at `(` and trimmed, is the label
/// 3. Everything else (including demangling failures) has no label
pub fn derive_label(raw_name: &str, demangler: &dyn Demangler) -> Option<String> {
    if let Some((scope, _)) = raw_name.split_once(SCOPE_SEPARATOR) {
        return Some(scope.to_string());
    }

    if !raw_name.starts_with(MANGLED_PREFIX) {
        return None;
    }

    let demangled = match demangler.demangle(raw_name) {
        Ok(name) => name,
        Err(e) => {
            trace!("Could not demangle {}: {}", raw_name, e);
            return None;
        }
    };

    let (scope, _) = demangled.split_once(SCOPE_SEPARATOR)?;
    let scope = scope.split('(').next().unwrap_or(scope);

    Some(scope.trim().to_string())
}

/// Build class buckets from code symbols
///
/// **Public** - main entry point for attribution
///
/// # Arguments
/// * `records` - Parsed symbol records (non-code ones are ignored)
/// * `demangler` - Used for mangled names without a `::`
///
/// # Returns
/// Buckets sorted by total size (descending, ties by label) and the number
/// of code bytes that could not be attributed
pub fn build_class_buckets(
    records: &[SymbolRecord],
    demangler: &dyn Demangler,
) -> (Vec<ClassBucket>, u64) {
    // label -> total size
    let mut bucket_map: HashMap<String, u64> = HashMap::new();
    // raw name -> label, so each name is demangled at most once
    let mut labels: HashMap<&str, Option<String>> = HashMap::new();
    let mut unattributed = 0u64;

    for record in records.iter().filter(|r| r.is_code()) {
        let label = labels
            .entry(record.name.as_str())
            .or_insert_with(|| derive_label(&record.name, demangler));

        match label {
            Some(label) => {
                let total = bucket_map.entry(label.clone()).or_insert(0);
                *total = total.saturating_add(record.size);
            }
            None => unattributed = unattributed.saturating_add(record.size),
        }
    }

    let mut buckets: Vec<ClassBucket> = bucket_map
        .into_iter()
        .map(|(label, total)| ClassBucket::new(label, total))
        .collect();

    sort_buckets(&mut buckets);

    debug!(
        "Built {} class buckets ({} bytes unattributed)",
        buckets.len(),
        unattributed
    );

    (buckets, unattributed)
}

/// Sort buckets by total size (descending), then label
pub fn sort_buckets(buckets: &mut [ClassBucket]) {
    buckets.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| a.label.cmp(&b.label))
    });
}
