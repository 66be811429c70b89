use crate::color::ColorMap;
use crate::data::filter::filter_rows;
use crate::data::model::{Row, StockCatalog};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `catalog` is written once per load action and only read afterwards;
/// the filtered view is always rebuilt from it in full.
pub struct AppState {
    /// Loaded catalog (None until a file or URL is loaded).
    pub catalog: Option<StockCatalog>,

    /// Rows currently shown in the results table.  Rebuilt from the
    /// catalog on every filter request, never edited in place.
    pub table_rows: Vec<Row>,

    /// The (field, value) pair behind `table_rows`.  One filter at a
    /// time; choosing a new pair replaces the previous one.
    pub active_filter: Option<(String, String)>,

    /// Whether the results table is revealed.  Starts hidden until the
    /// user runs the projection.
    pub results_visible: bool,

    /// Colour per super-family value.
    pub color_map: Option<ColorMap>,

    /// URL typed into the top-bar fetch box.
    pub url_input: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a load operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            table_rows: Vec::new(),
            active_filter: None,
            results_visible: false,
            color_map: None,
            url_input: String::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog, dropping any previous filter and
    /// hiding the results until the projection is run again.
    pub fn set_catalog(&mut self, catalog: StockCatalog) {
        self.color_map = Some(ColorMap::new(&catalog.super_families));
        self.table_rows.clear();
        self.active_filter = None;
        self.results_visible = false;

        self.catalog = Some(catalog);
        self.status_message = None;
        self.loading = false;
    }

    /// Record a failed load.  The previously loaded data (if any) is
    /// left untouched; a failed initial load leaves the state empty
    /// rather than partially populated.
    pub fn load_failed(&mut self, error: &anyhow::Error) {
        log::error!("Failed to load catalog: {error:#}");
        self.status_message = Some(format!("Error: {error:#}"));
        self.loading = false;
    }

    /// Rebuild the filtered view for an exact `field == value` match.
    pub fn apply_filter(&mut self, field: &str, value: &str) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        self.table_rows = filter_rows(&catalog.rows, field, value);
        self.active_filter = Some((field.to_string(), value.to_string()));
    }

    /// Reveal the results table.  Purely a visibility switch; the
    /// filtered rows are whatever the last filter produced.
    pub fn run_projection(&mut self) {
        self.results_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;
    use crate::data::model::{FAMILY, SUPER_FAMILY};

    fn sample_catalog() -> StockCatalog {
        parse_csv(
            "Super Familia,Familia,Codigo Producto\n\
             Invierno,Lanas,L-01\n\
             Verano,Hilos,H-01\n\
             Invierno,Cintas,C-03\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn starts_empty_and_hidden() {
        let state = AppState::default();
        assert!(state.catalog.is_none());
        assert!(state.table_rows.is_empty());
        assert!(!state.results_visible);
    }

    #[test]
    fn set_catalog_resets_filter_and_visibility() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());
        state.apply_filter(SUPER_FAMILY, "Invierno");
        state.run_projection();

        state.set_catalog(sample_catalog());
        assert!(state.table_rows.is_empty());
        assert!(state.active_filter.is_none());
        assert!(!state.results_visible);
        assert!(state.color_map.is_some());
    }

    #[test]
    fn apply_filter_rebuilds_the_view_without_touching_the_catalog() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());

        state.apply_filter(SUPER_FAMILY, "Invierno");
        assert_eq!(state.table_rows.len(), 2);

        // A second, unrelated filter starts from the full catalog again.
        state.apply_filter(FAMILY, "Hilos");
        assert_eq!(state.table_rows.len(), 1);
        assert_eq!(state.table_rows[0].get(SUPER_FAMILY), "Verano");

        assert_eq!(state.catalog.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn apply_filter_without_a_catalog_is_a_no_op() {
        let mut state = AppState::default();
        state.apply_filter(SUPER_FAMILY, "Invierno");
        assert!(state.table_rows.is_empty());
        assert!(state.active_filter.is_none());
    }

    #[test]
    fn projection_is_hidden_until_triggered() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());
        assert!(!state.results_visible);

        state.run_projection();
        assert!(state.results_visible);
    }

    #[test]
    fn failed_initial_load_leaves_everything_empty() {
        let mut state = AppState::default();
        state.load_failed(&anyhow::anyhow!("404 Not Found"));

        assert!(state.catalog.is_none());
        assert!(state.table_rows.is_empty());
        assert!(state.status_message.as_deref().unwrap().contains("404"));

        // Filtering over the empty state still yields nothing.
        state.apply_filter(SUPER_FAMILY, "Invierno");
        assert!(state.table_rows.is_empty());
    }
}
