use std::sync::Arc;

use eframe::egui;

use crate::data::model::Dataset;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AvocadoDashboardApp {
    title: String,
    pub state: DashboardState,
}

impl AvocadoDashboardApp {
    pub fn new(title: String, dataset: Arc<Dataset>) -> Self {
        Self {
            title,
            state: DashboardState::new(dataset),
        }
    }
}

impl eframe::App for AvocadoDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + region dropdown ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.title, &mut self.state);
        });

        // ---- Central panel: price chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::price_chart(ui, &self.state);
        });
    }
}
