use crate::vessel::Part;
use anyhow::Result;
use glam::{Mat4, Vec3};

pub mod background;
pub mod cross_section;

pub use background::BackgroundAero;

/// One voxelization job: the root-part frame, the voxel budget, and a
/// snapshot of the part list taken when the scheduler fired.
#[derive(Debug, Clone)]
pub struct VoxelRequest {
    pub world_to_local: Mat4,
    pub local_to_world: Mat4,
    pub voxel_count: u32,
    pub parts: Vec<Part>,
    pub longitudinal_axis: Vec3,
    pub crop_to_bounds: bool,
}

/// Result of a voxelization pass: the cross-sectional area distribution
/// along the vessel's length and its second-derivative curve.
#[derive(Debug, Clone)]
pub struct CrossSectionProfile {
    pub areas: Vec<f64>,
    pub second_derivs: Vec<f64>,
    pub section_thickness: f64,
    pub first_section_offset: f64,
    pub voxel_axis_to_local: Mat4,
}

impl CrossSectionProfile {
    pub fn section_count(&self) -> usize {
        self.areas.len()
    }

    pub fn vehicle_length(&self) -> f64 {
        self.section_thickness * self.areas.len() as f64
    }
}

/// Boundary to the voxelization engine. Requests are fire-and-forget;
/// completion is observed by polling once per fixed tick, never by
/// blocking the control thread.
pub trait AeroEngine {
    fn request_voxelization(&mut self, request: VoxelRequest) -> Result<()>;
    fn poll_completed(&mut self) -> Option<CrossSectionProfile>;
}

/// Synchronous engine used by tests and the headless report tool: the
/// profile is computed inside the request and handed back on the next poll.
#[derive(Default)]
pub struct InstantAero {
    pending: Option<CrossSectionProfile>,
}

impl AeroEngine for InstantAero {
    fn request_voxelization(&mut self, request: VoxelRequest) -> Result<()> {
        self.pending = Some(cross_section::compute(&request));
        Ok(())
    }

    fn poll_completed(&mut self) -> Option<CrossSectionProfile> {
        self.pending.take()
    }
}
