use std::collections::BTreeMap;

use super::filter::distinct_values;

// ---------------------------------------------------------------------------
// Taxonomy columns
// ---------------------------------------------------------------------------

/// The three product-taxonomy columns the filter panel is built around.
/// Names match the headers the consolidation pipeline writes.
pub const SUPER_FAMILY: &str = "Super Familia";
pub const FAMILY: &str = "Familia";
pub const PRODUCT_CODE: &str = "Codigo Producto";

// ---------------------------------------------------------------------------
// Row – one record of the catalog
// ---------------------------------------------------------------------------

/// A single catalog record: column name → trimmed text value.
///
/// Every value stays text. The source pipeline emits numbers and dates,
/// but this viewer never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: String, value: String) {
        self.cells.insert(column, value);
    }

    /// Value of `column`, or `None` when the row has no such column.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Value of `column`, with empty text standing in for an absent column.
    pub fn get(&self, column: &str) -> &str {
        self.cell(column).unwrap_or("")
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Row {
            cells: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// StockCatalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog with the pre-derived taxonomy value lists.
///
/// `rows` is populated once per load and never mutated afterwards;
/// filtered views are always rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockCatalog {
    /// Column names in file order, taken verbatim (trimmed) from the header.
    pub headers: Vec<String>,
    /// All records, in file order.
    pub rows: Vec<Row>,
    /// Unique `Super Familia` values, first-seen order.
    pub super_families: Vec<String>,
    /// Unique `Familia` values, first-seen order.
    pub families: Vec<String>,
    /// Unique `Codigo Producto` values, first-seen order.
    pub product_codes: Vec<String>,
}

impl StockCatalog {
    /// Build the catalog and derive the three taxonomy value lists.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let super_families = distinct_values(&rows, SUPER_FAMILY);
        let families = distinct_values(&rows, FAMILY);
        let product_codes = distinct_values(&rows, PRODUCT_CODE);

        StockCatalog {
            headers,
            rows,
            super_families,
            families,
            product_codes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_falls_back_to_empty_text() {
        let r = row(&[("Familia", "Hilos")]);
        assert_eq!(r.get("Familia"), "Hilos");
        assert_eq!(r.get("No Such Column"), "");
        assert_eq!(r.cell("No Such Column"), None);
    }

    #[test]
    fn from_rows_derives_taxonomy_lists_in_first_seen_order() {
        let rows = vec![
            row(&[(SUPER_FAMILY, "Invierno"), (FAMILY, "Lanas"), (PRODUCT_CODE, "L-01")]),
            row(&[(SUPER_FAMILY, "Verano"), (FAMILY, "Hilos"), (PRODUCT_CODE, "H-01")]),
            row(&[(SUPER_FAMILY, "Invierno"), (FAMILY, "Lanas"), (PRODUCT_CODE, "L-02")]),
        ];
        let catalog = StockCatalog::from_rows(
            vec![SUPER_FAMILY.into(), FAMILY.into(), PRODUCT_CODE.into()],
            rows,
        );

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.super_families, ["Invierno", "Verano"]);
        assert_eq!(catalog.families, ["Lanas", "Hilos"]);
        assert_eq!(catalog.product_codes, ["L-01", "H-01", "L-02"]);
    }
}
