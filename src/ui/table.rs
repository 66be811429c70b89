use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::SUPER_FAMILY;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the results area.  The table stays hidden until the user runs
/// the projection; revealing it involves no computation.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog to begin  (File → Open…)");
        });
        return;
    };

    if !state.results_visible {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Choose a filter, then run the projection");
        });
        return;
    }

    if state.table_rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No rows match the current filter");
        });
        return;
    }

    let headers = &catalog.headers;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(80.0), headers.len())
        .header(22.0, |mut header| {
            for name in headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.table_rows.len(), |mut table_row| {
                let row = &state.table_rows[table_row.index()];
                for name in headers {
                    table_row.col(|ui: &mut Ui| {
                        let value = row.get(name);
                        let mut text = RichText::new(value);
                        if name == SUPER_FAMILY {
                            if let Some(cm) = &state.color_map {
                                text = text.color(cm.color_for(value));
                            }
                        }
                        ui.label(text);
                    });
                }
            });
        });
}
