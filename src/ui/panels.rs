use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Top bar – title, region dropdown, status
// ---------------------------------------------------------------------------

/// Render the page header and the region selector.
pub fn top_bar(ui: &mut Ui, title: &str, state: &mut DashboardState) {
    ui.add_space(4.0);
    ui.heading(RichText::new(title).strong());
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Region");
        region_dropdown(ui, state);

        ui.separator();

        ui.label(format!(
            "{} rows loaded, {} shown",
            state.dataset.len(),
            state.figure.point_count()
        ));

        if let Some((lo, hi)) = state.figure.price_range() {
            ui.separator();
            ui.label(format!("price {lo:.2} – {hi:.2}"));
        }

        ui.separator();

        if ui.button("Copy figure JSON").clicked() {
            copy_figure_json(ui, state);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::GRAY));
        }
    });
    ui.add_space(4.0);
}

fn region_dropdown(ui: &mut Ui, state: &mut DashboardState) {
    let current = state.selected_region.clone();
    let mut chosen: Option<String> = None;

    egui::ComboBox::from_id_salt("region-dropdown")
        .selected_text(&current)
        .width(220.0)
        .show_ui(ui, |ui: &mut Ui| {
            for (region, count) in &state.region_options {
                let label = format!("{region}  ({count})");
                if ui.selectable_label(current == *region, label).clicked() {
                    chosen = Some(region.clone());
                }
            }
        });

    if let Some(region) = chosen {
        state.select_region(&region);
    }
}

fn copy_figure_json(ui: &Ui, state: &mut DashboardState) {
    match state.figure.to_json_pretty() {
        Ok(json) => {
            ui.ctx().copy_text(json);
            state.status_message = Some("Figure JSON copied".to_string());
        }
        Err(e) => {
            log::error!("Failed to serialize figure: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
