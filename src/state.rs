use std::sync::Arc;

use crate::color::RegionColors;
use crate::data::filter::region_row_counts;
use crate::data::model::Dataset;
use crate::figure::{update_graph, Figure};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct DashboardState {
    /// Loaded dataset, shared read-only for the process lifetime.
    pub dataset: Arc<Dataset>,

    /// Region currently chosen in the dropdown.
    pub selected_region: String,

    /// Chart for `selected_region`; rebuilt on every selection change.
    pub figure: Figure,

    /// Dropdown entries: region and its row count.
    pub region_options: Vec<(String, usize)>,

    pub colors: RegionColors,

    /// Status / info message shown in the UI.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Build the initial state, selecting the first region in file order.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let selected_region = dataset.default_region().unwrap_or_default().to_string();
        let figure = update_graph(&dataset, &selected_region);
        Self {
            region_options: region_row_counts(&dataset),
            colors: RegionColors::new(dataset.regions()),
            dataset,
            selected_region,
            figure,
            status_message: None,
        }
    }

    /// Handle a dropdown change: store the selection and redraw from scratch.
    pub fn select_region(&mut self, region: &str) {
        if region == self.selected_region {
            return;
        }
        self.selected_region = region.to_string();
        self.figure = update_graph(&self.dataset, region);
        self.status_message = None;
        log::debug!(
            "Selected region '{}' ({} points)",
            region,
            self.figure.point_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;

    #[test]
    fn starts_on_first_region() {
        let state = DashboardState::new(Arc::new(sample_dataset()));
        assert_eq!(state.selected_region, "Albany");
        assert_eq!(state.figure.point_count(), 2);
        assert_eq!(
            state.region_options,
            vec![("Albany".to_string(), 2), ("Chicago".to_string(), 1)]
        );
    }

    #[test]
    fn selecting_rebuilds_figure() {
        let ds = Arc::new(sample_dataset());
        let mut state = DashboardState::new(ds.clone());
        state.select_region("Chicago");
        assert_eq!(state.selected_region, "Chicago");
        assert_eq!(state.figure, update_graph(&ds, "Chicago"));

        state.select_region("Albany");
        assert_eq!(state.figure, update_graph(&ds, "Albany"));
    }

    #[test]
    fn unknown_selection_shows_empty_chart() {
        let mut state = DashboardState::new(Arc::new(sample_dataset()));
        state.select_region("Atlantis");
        assert_eq!(state.figure.point_count(), 0);
        assert_eq!(state.figure.layout.title, "Average Avocado Price in Atlantis");
    }
}
