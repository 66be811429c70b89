use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{FAMILY, PRODUCT_CODE, SUPER_FAMILY};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – taxonomy filter selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel: one selector per taxonomy column and
/// the projection trigger.  Choosing a value applies that single
/// (field, value) filter; the previous selection is replaced, filters
/// never combine.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    // Clone the option lists so we can mutate state inside the combos.
    let selectors = [
        (SUPER_FAMILY, catalog.super_families.clone()),
        (FAMILY, catalog.families.clone()),
        (PRODUCT_CODE, catalog.product_codes.clone()),
    ];

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (field, values) in &selectors {
                ui.strong(*field);

                let current = state
                    .active_filter
                    .as_ref()
                    .filter(|(f, _)| f == field)
                    .map(|(_, v)| v.clone());
                let selected_text = current
                    .as_deref()
                    .map(display_value)
                    .unwrap_or("—")
                    .to_string();

                egui::ComboBox::from_id_salt(*field)
                    .selected_text(selected_text)
                    .width(ui.available_width() * 0.9)
                    .show_ui(ui, |ui: &mut Ui| {
                        for value in values {
                            let is_selected = current.as_deref() == Some(value.as_str());

                            // Show the super-family swatch colour.
                            let mut text = RichText::new(display_value(value));
                            if *field == SUPER_FAMILY {
                                if let Some(cm) = &state.color_map {
                                    text = text.color(cm.color_for(value));
                                }
                            }

                            if ui.selectable_label(is_selected, text).clicked() {
                                state.apply_filter(field, value);
                            }
                        }
                    });
                ui.add_space(8.0);
            }

            ui.separator();

            match &state.active_filter {
                Some((field, value)) => {
                    ui.label(format!(
                        "{field} = {}  ({} rows)",
                        display_value(value),
                        state.table_rows.len()
                    ));
                }
                None => {
                    ui.label("No filter selected.");
                }
            }
            ui.add_space(4.0);

            if ui.button("Run projection").clicked() {
                state.run_projection();
            }
        });
}

/// Empty text is a legitimate filter value (rows missing the column);
/// give it a visible label.
fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }

            let can_export = !state.table_rows.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export filtered…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut state.url_input)
                .hint_text("https://…/consolidado_datos.csv")
                .desired_width(280.0),
        );
        if ui.button("Fetch").clicked() {
            fetch_from_url(state);
        }

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} rows loaded, {} matching",
                catalog.len(),
                state.table_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs and URL fetch
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open stock catalog")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    catalog.len(),
                    catalog.headers
                );
                state.set_catalog(catalog);
            }
            Err(e) => state.load_failed(&e),
        }
    }
}

/// Download the catalog from the URL in the top-bar box.  Blocks the UI
/// until the request finishes, like the rest of the loading paths.
fn fetch_from_url(state: &mut AppState) {
    let url = state.url_input.trim().to_string();
    if url.is_empty() {
        return;
    }

    state.loading = true;
    match crate::data::fetch::fetch_catalog(&url) {
        Ok(catalog) => {
            log::info!("Fetched {} rows from {url}", catalog.len());
            state.set_catalog(catalog);
        }
        Err(e) => state.load_failed(&e),
    }
}

fn export_dialog(state: &mut AppState) {
    let Some(catalog) = &state.catalog else {
        return;
    };
    let headers = catalog.headers.clone();

    let file = rfd::FileDialog::new()
        .set_title("Export filtered rows")
        .add_filter("CSV", &["csv"])
        .set_file_name("proyeccion_filtrada.csv")
        .save_file();

    if let Some(path) = file {
        match crate::data::loader::write_csv(&path, &headers, &state.table_rows) {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    state.table_rows.len(),
                    path.display()
                );
                state.status_message =
                    Some(format!("Exported {} rows", state.table_rows.len()));
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
