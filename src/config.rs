use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "ViewerConfig::default_title")]
    pub title: String,
    #[serde(default = "ViewerConfig::default_width")]
    pub width: f32,
    #[serde(default = "ViewerConfig::default_height")]
    pub height: f32,
    #[serde(default = "ViewerConfig::default_pixels_per_point")]
    pub pixels_per_point: f32,
}

impl ViewerConfig {
    fn default_title() -> String {
        "Fitness progression".to_string()
    }
    fn default_width() -> f32 {
        1000.0
    }
    fn default_height() -> f32 {
        700.0
    }
    fn default_pixels_per_point() -> f32 {
        1.25
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            width: Self::default_width(),
            height: Self::default_height(),
            pixels_per_point: Self::default_pixels_per_point(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_x_label")]
    pub x_label: String,
    /// Historical label; the plotted quantity is derived from best fitness.
    #[serde(default = "ChartConfig::default_y_label")]
    pub y_label: String,
    #[serde(default = "ChartConfig::default_line_width")]
    pub line_width: f32,
}

impl ChartConfig {
    fn default_x_label() -> String {
        "Generation".to_string()
    }
    fn default_y_label() -> String {
        "Average fitness (log)".to_string()
    }
    fn default_line_width() -> f32 {
        1.0
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_label: Self::default_x_label(),
            y_label: Self::default_y_label(),
            line_width: Self::default_line_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_width")]
    pub width: u32,
    #[serde(default = "ExportConfig::default_height")]
    pub height: u32,
}

impl ExportConfig {
    fn default_width() -> u32 {
        1280
    }
    fn default_height() -> u32 {
        760
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults (commented out) and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, Self::comment_out(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }

    /// Keep section headers, prefix every key with `# `.
    fn comment_out(text: &str) -> String {
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
                commented.push_str(line);
            } else {
                commented.push_str("# ");
                commented.push_str(line);
            }
            commented.push('\n');
        }
        commented
    }
}
