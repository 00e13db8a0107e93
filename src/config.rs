use std::path::PathBuf;

/// Compiled-in settings. There is no config file and no CLI surface;
/// only `RUST_LOG` is read from the environment (by the logger).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset location, relative to the working directory.
    pub data_path: PathBuf,
    /// Page heading and window title.
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("avocado.csv"),
            title: "Avocado Price Analysis".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
