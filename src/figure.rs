use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::filter::rows_for_region;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Chart payload (plotly figure shape)
// ---------------------------------------------------------------------------

/// Everything the plot layer needs to draw one chart.
///
/// Serializes to the plotly figure layout:
/// `{"data": [{"x", "y", "type", "name"}], "layout": {"title", "xaxis", "yaxis"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Dates, serialized as `YYYY-MM-DD`.
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Axis {
            title: title.to_string(),
        }
    }
}

pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Average Price";

/// Build the price chart for `selected_region`.
///
/// Pure function of its inputs. A region with no rows produces a single
/// empty bar series rather than an error.
pub fn update_graph(dataset: &Dataset, selected_region: &str) -> Figure {
    let (x, y): (Vec<NaiveDate>, Vec<f64>) = rows_for_region(dataset, selected_region)
        .map(|row| (row.date, row.average_price))
        .unzip();

    Figure {
        data: vec![Trace {
            x,
            y,
            kind: TraceKind::Bar,
            name: selected_region.to_string(),
        }],
        layout: Layout {
            title: format!("Average Avocado Price in {selected_region}"),
            xaxis: Axis::titled(X_AXIS_TITLE),
            yaxis: Axis::titled(Y_AXIS_TITLE),
        },
    }
}

impl Figure {
    /// Total number of bars across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|t| t.y.len()).sum()
    }

    /// Lowest and highest price shown, `None` for an empty chart.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .flat_map(|t| t.y.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
