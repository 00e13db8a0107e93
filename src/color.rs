use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Region → bar colour
// ---------------------------------------------------------------------------

/// Stable bar colour per region, keyed by first-seen position.
#[derive(Debug, Clone)]
pub struct RegionColors {
    regions: Vec<String>,
    palette: Vec<Color32>,
    default_color: Color32,
}

impl RegionColors {
    pub fn new(regions: &[String]) -> Self {
        RegionColors {
            regions: regions.to_vec(),
            palette: generate_palette(regions.len()),
            default_color: Color32::GRAY,
        }
    }

    /// Colour for `region`; regions outside the dataset get grey.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.regions
            .iter()
            .position(|r| r == region)
            .and_then(|i| self.palette.get(i).copied())
            .unwrap_or(self.default_color)
    }
}
