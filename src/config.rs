use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Aero Analysis".to_string(), width: 650, height: 500 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "AnalysisConfig::default_voxel_count")]
    pub voxel_count: u32,
    #[serde(default = "AnalysisConfig::default_cooldown_ticks")]
    pub cooldown_ticks: u32,
    #[serde(default = "AnalysisConfig::default_crop_to_bounds")]
    pub crop_to_bounds: bool,
}

impl AnalysisConfig {
    const fn default_voxel_count() -> u32 {
        125_000
    }

    const fn default_cooldown_ticks() -> u32 {
        20
    }

    const fn default_crop_to_bounds() -> bool {
        true
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            voxel_count: Self::default_voxel_count(),
            cooldown_ticks: Self::default_cooldown_ticks(),
            crop_to_bounds: Self::default_crop_to_bounds(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "OverlayConfig::default_background_color")]
    pub background_color: [f32; 4],
    #[serde(default = "OverlayConfig::default_area_color")]
    pub area_color: [f32; 4],
    #[serde(default = "OverlayConfig::default_derivative_color")]
    pub derivative_color: [f32; 4],
    #[serde(default = "OverlayConfig::default_axis_divisions")]
    pub axis_divisions: u32,
    #[serde(default = "OverlayConfig::default_curve_width")]
    pub curve_width: f32,
}

impl OverlayConfig {
    const fn default_background_color() -> [f32; 4] {
        [0.05, 0.05, 0.05, 0.8]
    }

    const fn default_area_color() -> [f32; 4] {
        [0.0, 1.0, 0.0, 1.0]
    }

    const fn default_derivative_color() -> [f32; 4] {
        [1.0, 1.0, 0.0, 1.0]
    }

    const fn default_axis_divisions() -> u32 {
        10
    }

    const fn default_curve_width() -> f32 {
        5.0
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            background_color: Self::default_background_color(),
            area_color: Self::default_area_color(),
            derivative_color: Self::default_derivative_color(),
            axis_divisions: Self::default_axis_divisions(),
            curve_width: Self::default_curve_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WorkbenchConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl WorkbenchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}
