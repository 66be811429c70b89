use super::model::Row;

// ---------------------------------------------------------------------------
// Distinct values per column
// ---------------------------------------------------------------------------

/// Unique values of `column` across `rows`, in first-seen order.
/// A row without the column contributes empty text.
pub fn distinct_values(rows: &[Row], column: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for row in rows {
        let value = row.get(column);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

// ---------------------------------------------------------------------------
// Exact-match filter
// ---------------------------------------------------------------------------

/// Rows whose `field` equals `value` exactly, in original order.
///
/// Matching is case-sensitive on the already-trimmed cell text; there is
/// no substring or fuzzy matching. An unknown `field` or a `value` no row
/// carries both yield an empty result, never an error.
pub fn filter_rows(rows: &[Row], field: &str, value: &str) -> Vec<Row> {
    rows.iter()
        .filter(|row| row.cell(field) == Some(value))
        .cloned()
        .collect()
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
    fn distinct_values_dedupes_in_first_seen_order() {
        let rows = vec![
            row(&[("Familia", "Lanas")]),
            row(&[("Familia", "Hilos")]),
            row(&[("Familia", "Lanas")]),
            row(&[("Familia", "Cintas")]),
        ];
        assert_eq!(distinct_values(&rows, "Familia"), ["Lanas", "Hilos", "Cintas"]);
    }

    #[test]
    fn distinct_values_keeps_empty_text_for_missing_column() {
        let rows = vec![row(&[("Familia", "Lanas")]), row(&[("Otra", "x")])];
        assert_eq!(distinct_values(&rows, "Familia"), ["Lanas", ""]);
    }

    #[test]
    fn distinct_values_of_no_rows_is_empty() {
        assert!(distinct_values(&[], "Familia").is_empty());
    }

    #[test]
    fn filter_keeps_all_matching_rows_in_order() {
        let rows = vec![
            row(&[("A", "1"), ("B", "2")]),
            row(&[("A", "3"), ("B", "2")]),
        ];
        let matched = filter_rows(&rows, "B", "2");
        assert_eq!(matched, rows);
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let rows = vec![
            row(&[("Familia", "Lanas")]),
            row(&[("Familia", "lanas")]),
            row(&[("Familia", "Lanas finas")]),
        ];
        let matched = filter_rows(&rows, "Familia", "Lanas");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].get("Familia"), "Lanas");
    }

    #[test]
    fn filter_on_unknown_field_or_value_is_empty() {
        let rows = vec![row(&[("Familia", "Lanas")])];
        assert!(filter_rows(&rows, "No Such Column", "Lanas").is_empty());
        assert!(filter_rows(&rows, "No Such Column", "").is_empty());
        assert!(filter_rows(&rows, "Familia", "Sedas").is_empty());
    }

    #[test]
    fn filter_matches_empty_cells_of_known_columns() {
        let rows = vec![
            row(&[("Familia", "")]),
            row(&[("Familia", "Lanas")]),
        ];
        let matched = filter_rows(&rows, "Familia", "");
        assert_eq!(matched.len(), 1);
    }
}
