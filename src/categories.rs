use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::Value;

/// Reference Lighthouse report shipped with the crate.
///
/// The API has no endpoint for listing audit categories, so the set comes
/// from the `categories` object of a canonical report and stays fixed for
/// the process lifetime.
const REFERENCE_REPORT: &str = include_str!("../data/reference-lhr.json");

#[derive(Deserialize)]
struct ReferenceReport {
    categories: BTreeMap<String, Value>,
}

/// Audit category identifiers, parsed once from the reference report.
pub static CATEGORIES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let report: ReferenceReport =
        serde_json::from_str(REFERENCE_REPORT).expect("reference report is valid JSON");
    report.categories.into_keys().collect()
});

/// All category identifiers in canonical (hyphenated) form.
pub fn names() -> &'static [String] {
    &CATEGORIES
}

/// Category identifier as the API expects it on the wire.
///
/// The API takes "best_practices" where reports say "best-practices".
pub fn wire_name(category: &str) -> String {
    category.replace('-', "_")
}
