use super::{CrossSectionProfile, VoxelRequest};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

const MIN_SECTIONS: usize = 2;

/// Slices the part set into equal-thickness sections along the vessel's
/// longitudinal axis and accumulates per-section cross-sectional area from
/// the parts' bounding boxes. Sections are indexed nose-first: index 0 sits
/// at the far end of the span, matching the overlay's x-axis convention.
pub fn compute(request: &VoxelRequest) -> CrossSectionProfile {
    let axis = normalized_axis(request.longitudinal_axis);
    let (lateral_u, lateral_v) = axis.any_orthonormal_pair();
    let sections = section_count(request.voxel_count);

    // Per-part span along the axis plus the lateral box cross-section.
    let mut spans: Vec<(f64, f64, f64)> = Vec::with_capacity(request.parts.len());
    let mut span_min = f64::INFINITY;
    let mut span_max = f64::NEG_INFINITY;
    for part in &request.parts {
        let (min, max) = part.vessel_bounds();
        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;
        let mid = f64::from(axis.dot(center));
        let reach = f64::from(support_extent(axis, half));
        let width = 2.0 * f64::from(support_extent(lateral_u, half));
        let height = 2.0 * f64::from(support_extent(lateral_v, half));
        let lo = mid - reach;
        let hi = mid + reach;
        spans.push((lo, hi, width * height));
        span_min = span_min.min(lo);
        span_max = span_max.max(hi);
    }

    if spans.is_empty() || span_max <= span_min {
        return empty_profile(axis, lateral_u, lateral_v);
    }

    let mut length = span_max - span_min;
    let mut offset = span_min;
    if !request.crop_to_bounds {
        // Leave one empty section of margin at each end of the span.
        let margin = length / sections as f64;
        length += 2.0 * margin;
        offset -= margin;
    }
    let thickness = length / sections as f64;

    let mut areas = vec![0.0f64; sections];
    for (index, area) in areas.iter_mut().enumerate() {
        // Nose-first indexing: section 0 is the far end of the span.
        let station = offset + (sections - 1 - index) as f64 * thickness + thickness * 0.5;
        let hits: SmallVec<[f64; 8]> = spans
            .iter()
            .filter(|(lo, hi, _)| station >= *lo && station <= *hi)
            .map(|(_, _, section_area)| *section_area)
            .collect();
        *area = hits.iter().sum();
    }

    let second_derivs = second_derivatives(&areas, thickness);

    CrossSectionProfile {
        areas,
        second_derivs,
        section_thickness: thickness,
        first_section_offset: offset,
        voxel_axis_to_local: axis_frame(axis, lateral_u, lateral_v, offset),
    }
}

/// Section resolution follows the voxel budget: the per-axis voxel count
/// of an even cubic split, so the default 125 000 budget yields 50 sections.
pub fn section_count(voxel_count: u32) -> usize {
    (f64::from(voxel_count).cbrt().round() as usize).max(MIN_SECTIONS)
}

fn normalized_axis(axis: Vec3) -> Vec3 {
    if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec3::Z
    }
}

/// Half-extent of an axis-aligned box when projected onto a unit direction.
fn support_extent(direction: Vec3, half: Vec3) -> f32 {
    direction.abs().dot(half)
}

fn second_derivatives(areas: &[f64], thickness: f64) -> Vec<f64> {
    let mut derivs = vec![0.0f64; areas.len()];
    if areas.len() < 3 || thickness <= 0.0 {
        return derivs;
    }
    let dx_sq = thickness * thickness;
    for i in 1..areas.len() - 1 {
        derivs[i] = (areas[i - 1] - 2.0 * areas[i] + areas[i + 1]) / dx_sq;
    }
    derivs
}

fn axis_frame(axis: Vec3, lateral_u: Vec3, lateral_v: Vec3, offset: f64) -> Mat4 {
    Mat4::from_cols(
        lateral_u.extend(0.0),
        lateral_v.extend(0.0),
        axis.extend(0.0),
        (axis * offset as f32).extend(1.0),
    )
}

fn empty_profile(axis: Vec3, lateral_u: Vec3, lateral_v: Vec3) -> CrossSectionProfile {
    CrossSectionProfile {
        areas: Vec::new(),
        second_derivs: Vec::new(),
        section_thickness: 0.0,
        first_section_offset: 0.0,
        voxel_axis_to_local: axis_frame(axis, lateral_u, lateral_v, 0.0),
    }
}
