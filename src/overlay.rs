use crate::aero::CrossSectionProfile;
use crate::config::OverlayConfig;
use glam::Mat4;

/// Display-side cache of the latest cross-section curves for the transonic
/// design overlay. Rebuilt from scratch on undo/redo, updated in place when
/// a voxelization completes.
pub struct AreaRulingOverlay {
    background_color: [f32; 4],
    area_color: [f32; 4],
    derivative_color: [f32; 4],
    axis_divisions: u32,
    curve_width: f32,
    visible: bool,
    x_axis: Vec<f64>,
    areas: Vec<f64>,
    second_derivs: Vec<f64>,
    max_area: f64,
    voxel_axis_to_local: Mat4,
}

impl AreaRulingOverlay {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            background_color: config.background_color,
            area_color: config.area_color,
            derivative_color: config.derivative_color,
            axis_divisions: config.axis_divisions,
            curve_width: config.curve_width,
            visible: false,
            x_axis: Vec::new(),
            areas: Vec::new(),
            second_derivs: Vec::new(),
            max_area: 0.0,
            voxel_axis_to_local: Mat4::IDENTITY,
        }
    }

    /// Rebuilds the display curves from a finished profile. Station i sits
    /// at `(n - 1 - i) * thickness + offset`: section 0 is the far end of
    /// the span, so the x axis descends with the section index.
    pub fn update_from_profile(&mut self, profile: &CrossSectionProfile) {
        let n = profile.areas.len();
        let mut max_area = 0.0f64;
        for &area in &profile.areas {
            max_area = max_area.max(area);
        }
        let mut x_axis = vec![0.0f64; n];
        for (i, station) in x_axis.iter_mut().enumerate() {
            *station =
                (n - 1 - i) as f64 * profile.section_thickness + profile.first_section_offset;
        }
        self.x_axis = x_axis;
        self.areas = profile.areas.clone();
        self.second_derivs = profile.second_derivs.clone();
        self.max_area = max_area;
        self.voxel_axis_to_local = profile.voxel_axis_to_local;
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_data(&self) -> bool {
        !self.areas.is_empty()
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    pub fn second_derivs(&self) -> &[f64] {
        &self.second_derivs
    }

    pub fn max_area(&self) -> f64 {
        self.max_area
    }

    pub fn voxel_axis_to_local(&self) -> Mat4 {
        self.voxel_axis_to_local
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.background_color
    }

    pub fn area_color(&self) -> [f32; 4] {
        self.area_color
    }

    pub fn derivative_color(&self) -> [f32; 4] {
        self.derivative_color
    }

    pub fn axis_divisions(&self) -> u32 {
        self.axis_divisions
    }

    pub fn curve_width(&self) -> f32 {
        self.curve_width
    }
}
