use chrono::{Datelike, NaiveDate};
use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::DashboardState;

/// Bar width in days; the source data is weekly.
const BAR_WIDTH_DAYS: f64 = 5.0;

// ---------------------------------------------------------------------------
// Date <-> plot axis mapping
// ---------------------------------------------------------------------------

pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn x_to_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Price chart (central panel)
// ---------------------------------------------------------------------------

/// Draw the current figure as a bar chart.
pub fn price_chart(ui: &mut Ui, state: &DashboardState) {
    let figure = &state.figure;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.layout.title);
    });

    if figure.point_count() == 0 {
        ui.label(RichText::new(format!("No rows for region '{}'", state.selected_region)).weak());
    }

    let color = state.colors.color_for(&state.selected_region);

    Plot::new("price-graph")
        .legend(Legend::default())
        .x_axis_label(figure.layout.xaxis.title.clone())
        .y_axis_label(figure.layout.yaxis.title.clone())
        .x_axis_formatter(|mark, _range| x_to_label(mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in &figure.data {
                let bars: Vec<Bar> = trace
                    .x
                    .iter()
                    .zip(trace.y.iter())
                    .map(|(&date, &price)| Bar::new(date_to_x(date), price).width(BAR_WIDTH_DAYS))
                    .collect();

                let chart = BarChart::new(bars)
                    .name(&trace.name)
                    .color(color)
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        format!("{}\n{:.2}", x_to_label(bar.argument), bar.value)
                    }));

                plot_ui.bar_chart(chart);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_mapping_round_trips_dates() {
        let d = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
        assert_eq!(x_to_label(date_to_x(d)), "2015-01-04");
        // grid marks land between days
        assert_eq!(x_to_label(date_to_x(d) + 0.4), "2015-01-04");
    }
}
