use anyhow::{Context, Result};
use glam::{EulerRot, Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vec3Data {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vec3Data> for Vec3 {
    fn from(v: Vec3Data) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    #[default]
    Fuselage,
    Wing,
    ControlSurface,
    Engine,
    Pod,
}

impl PartKind {
    pub fn label(self) -> &'static str {
        match self {
            PartKind::Fuselage => "fuselage",
            PartKind::Wing => "wing",
            PartKind::ControlSurface => "control surface",
            PartKind::Engine => "engine",
            PartKind::Pod => "pod",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    #[serde(default)]
    pub kind: PartKind,
    #[serde(default)]
    pub translation: Vec3Data,
    #[serde(default)]
    pub rotation_degrees: Vec3Data,
    pub half_extents: Vec3Data,
}

impl Part {
    pub fn local_to_vessel(&self) -> Mat4 {
        let rotation = Vec3::from(self.rotation_degrees);
        Mat4::from_translation(Vec3::from(self.translation))
            * Mat4::from_euler(
                EulerRot::XYZ,
                rotation.x.to_radians(),
                rotation.y.to_radians(),
                rotation.z.to_radians(),
            )
    }

    /// Axis-aligned bounds of this part in vessel space, from the eight
    /// transformed corners of its local box.
    pub fn vessel_bounds(&self) -> (Vec3, Vec3) {
        let transform = self.local_to_vessel();
        let he = Vec3::from(self.half_extents);
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for ix in [-1.0f32, 1.0] {
            for iy in [-1.0f32, 1.0] {
                for iz in [-1.0f32, 1.0] {
                    let corner = transform.transform_point3(he * Vec3::new(ix, iy, iz));
                    min = min.min(corner);
                    max = max.max(corner);
                }
            }
        }
        (min, max)
    }
}

/// Wing lifting-surface bookkeeping refreshed after every structural edit.
/// Exposure is the fraction of the wing's planform not shadowed by
/// neighbouring part bounds.
#[derive(Debug, Clone)]
pub struct WingAeroModel {
    pub part: usize,
    pub exposure: f64,
}

impl WingAeroModel {
    pub fn update_interactions(&mut self, parts: &[Part]) {
        let Some(wing) = parts.get(self.part) else {
            self.exposure = 0.0;
            return;
        };
        let (wing_min, wing_max) = wing.vessel_bounds();
        let wing_volume = f64::from((wing_max - wing_min).element_product());
        if wing_volume <= 0.0 {
            self.exposure = 0.0;
            return;
        }
        let mut shadowed = 0.0f64;
        for (index, other) in parts.iter().enumerate() {
            if index == self.part {
                continue;
            }
            let (other_min, other_max) = other.vessel_bounds();
            let overlap = (wing_max.min(other_max) - wing_min.max(other_min)).max(Vec3::ZERO);
            shadowed += f64::from(overlap.element_product());
        }
        self.exposure = (1.0 - shadowed / wing_volume).clamp(0.0, 1.0);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vessel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub root: Option<usize>,
    #[serde(default = "Vessel::default_longitudinal_axis")]
    pub longitudinal_axis: Vec3Data,
}

impl Vessel {
    fn default_longitudinal_axis() -> Vec3Data {
        Vec3Data { x: 0.0, y: 0.0, z: 1.0 }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read craft file {}", path.display()))?;
        let vessel: Vessel = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse craft file {}", path.display()))?;
        Ok(vessel)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self).context("Failed to serialize craft")?;
        fs::write(path, json).with_context(|| format!("Failed to write craft file {}", path.display()))?;
        Ok(())
    }

    pub fn root_part(&self) -> Option<&Part> {
        self.root.and_then(|index| self.parts.get(index))
    }

    /// Root-part frame used for voxelization requests. The editor keeps the
    /// vessel at the origin, so the root's own transform is the frame.
    pub fn local_to_world(&self) -> Option<Mat4> {
        self.root_part().map(Part::local_to_vessel)
    }

    pub fn world_to_local(&self) -> Option<Mat4> {
        self.local_to_world().map(|m| m.inverse())
    }

    pub fn longitudinal_axis(&self) -> Vec3 {
        let axis = Vec3::from(self.longitudinal_axis);
        if axis.length_squared() > 0.0 {
            axis.normalize()
        } else {
            Vec3::Z
        }
    }

    pub fn attach_part(&mut self, part: Part) -> usize {
        self.parts.push(part);
        let index = self.parts.len() - 1;
        if self.root.is_none() {
            self.root = Some(index);
        }
        index
    }

    pub fn detach_part(&mut self, name: &str) -> Option<Part> {
        let index = self.parts.iter().position(|p| p.name == name)?;
        let removed = self.parts.remove(index);
        self.root = match self.root {
            Some(root) if root == index => None,
            Some(root) if root > index => Some(root - 1),
            other => other,
        };
        Some(removed)
    }

    pub fn set_root(&mut self, name: &str) -> bool {
        match self.parts.iter().position(|p| p.name == name) {
            Some(index) => {
                self.root = Some(index);
                true
            }
            None => false,
        }
    }

    /// Rebuilds the wing model list from the current part set; mirrors the
    /// per-edit part cache reset the editor performs alongside requeueing
    /// a voxelization.
    pub fn rebuild_wing_models(&self) -> Vec<WingAeroModel> {
        let mut wings: Vec<WingAeroModel> = self
            .parts
            .iter()
            .enumerate()
            .filter(|(_, part)| matches!(part.kind, PartKind::Wing | PartKind::ControlSurface))
            .map(|(index, _)| WingAeroModel { part: index, exposure: 1.0 })
            .collect();
        for wing in &mut wings {
            wing.update_interactions(&self.parts);
        }
        wings
    }
}
