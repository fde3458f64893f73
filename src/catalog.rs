use crate::models::{StandardRecord, ALL_CATEGORIES};

static CATALOG_JSON: &str = include_str!("../data/standards.json");

lazy_static::lazy_static! {
    /// The full standards catalog, parsed once from the embedded JSON.
    pub static ref CATALOG: Vec<StandardRecord> =
        serde_json::from_str(CATALOG_JSON).expect("embedded standards catalog must be valid JSON");
}

/// Category tags available for filtering: "All" first, then the distinct
/// category values in catalog order.
pub fn categories(catalog: &[StandardRecord]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for record in catalog {
        if !result.contains(&record.category) {
            result.push(record.category.clone());
        }
    }
    result
}
