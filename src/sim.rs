use crate::aero::CrossSectionProfile;

/// Whole-vehicle quantities derived from the latest cross-section
/// distribution, consumed by the stability and simulation display modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AeroSnapshot {
    pub vehicle_length: f64,
    pub max_cross_section_area: f64,
    pub fineness_ratio: f64,
    pub wave_drag_area: f64,
}

impl AeroSnapshot {
    fn from_profile(profile: &CrossSectionProfile) -> Self {
        let length = profile.vehicle_length();
        let mut max_area = 0.0f64;
        for &area in &profile.areas {
            max_area = max_area.max(area);
        }
        let equivalent_diameter = 2.0 * (max_area / std::f64::consts::PI).sqrt();
        let fineness_ratio =
            if equivalent_diameter > 0.0 { length / equivalent_diameter } else { 0.0 };
        Self {
            vehicle_length: length,
            max_cross_section_area: max_area,
            fineness_ratio,
            wave_drag_area: wave_drag_area(&profile.second_derivs, profile.section_thickness),
        }
    }
}

/// Slender-body wave drag integral over the second derivative of the area
/// distribution, evaluated as a discrete double sum with the singular
/// self-term skipped.
fn wave_drag_area(second_derivs: &[f64], thickness: f64) -> f64 {
    if second_derivs.len() < 2 || thickness <= 0.0 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for (i, &di) in second_derivs.iter().enumerate() {
        for (j, &dj) in second_derivs.iter().enumerate() {
            if i == j {
                continue;
            }
            let separation = thickness * (i as f64 - j as f64).abs();
            sum += di * dj * separation.ln();
        }
    }
    -(thickness * thickness) * sum / (4.0 * std::f64::consts::PI)
}

/// Receives finished aero data on behalf of the analysis display modes.
#[derive(Default)]
pub struct SimManager {
    snapshot: Option<AeroSnapshot>,
    updates: u64,
}

impl SimManager {
    pub fn update_aero_data(&mut self, profile: &CrossSectionProfile) {
        self.snapshot = Some(AeroSnapshot::from_profile(profile));
        self.updates += 1;
    }

    pub fn snapshot(&self) -> Option<&AeroSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn update_count(&self) -> u64 {
        self.updates
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}
