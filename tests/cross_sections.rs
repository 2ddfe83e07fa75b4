use aero_workbench::aero::{cross_section, VoxelRequest};
use aero_workbench::config::OverlayConfig;
use aero_workbench::overlay::AreaRulingOverlay;
use aero_workbench::vessel::Vec3Data;
use aero_workbench::{Part, PartKind, Vessel};
use glam::Vec3;

fn fuselage(name: &str, z: f32, half_extents: Vec3) -> Part {
    Part {
        name: name.to_string(),
        kind: PartKind::Fuselage,
        translation: Vec3Data { x: 0.0, y: 0.0, z },
        rotation_degrees: Vec3Data::default(),
        half_extents: Vec3Data::from(half_extents),
    }
}

fn request_for(vessel: &Vessel) -> VoxelRequest {
    VoxelRequest {
        world_to_local: vessel.world_to_local().expect("root frame"),
        local_to_world: vessel.local_to_world().expect("root frame"),
        voxel_count: 125_000,
        parts: vessel.parts.clone(),
        longitudinal_axis: vessel.longitudinal_axis(),
        crop_to_bounds: true,
    }
}

#[test]
fn stepped_body_shows_the_area_step() {
    let mut vessel = Vessel::default();
    // Wide body over z in [-4, 0], narrow nose over z in [0, 4].
    vessel.attach_part(fuselage("body", -2.0, Vec3::new(2.0, 2.0, 2.0)));
    vessel.attach_part(fuselage("nose", 2.0, Vec3::new(1.0, 1.0, 2.0)));
    let profile = cross_section::compute(&request_for(&vessel));

    assert_eq!(profile.section_count(), 50);
    assert!((profile.vehicle_length() - 8.0).abs() < 1.0e-6);
    // Sections are nose-first: early indices sit at high z (the nose).
    let first = profile.areas.first().copied().unwrap();
    let last = profile.areas.last().copied().unwrap();
    assert!((first - 4.0).abs() < 1.0e-9, "nose sections are 2x2, got {first}");
    assert!((last - 16.0).abs() < 1.0e-9, "body sections are 4x4, got {last}");
    let step_derivs = profile.second_derivs.iter().filter(|d| d.abs() > 1.0e-9).count();
    assert!(step_derivs > 0, "the area step must show up in the second derivative");
}

#[test]
fn overlay_builds_descending_station_axis() {
    let mut vessel = Vessel::default();
    vessel.attach_part(fuselage("body", 0.0, Vec3::new(1.0, 1.0, 5.0)));
    let profile = cross_section::compute(&request_for(&vessel));

    let mut overlay = AreaRulingOverlay::new(&OverlayConfig::default());
    assert!(!overlay.has_data());
    overlay.update_from_profile(&profile);
    assert!(overlay.has_data());
    assert_eq!(overlay.x_axis().len(), profile.areas.len());

    let n = profile.areas.len();
    let expected_first =
        (n - 1) as f64 * profile.section_thickness + profile.first_section_offset;
    assert!((overlay.x_axis()[0] - expected_first).abs() < 1.0e-9);
    assert!(
        (overlay.x_axis()[n - 1] - profile.first_section_offset).abs() < 1.0e-9,
        "last station sits at the section offset"
    );
    for pair in overlay.x_axis().windows(2) {
        assert!(pair[0] > pair[1], "station axis must descend with the section index");
    }
    assert!((overlay.max_area() - 4.0).abs() < 1.0e-9);
}

#[test]
fn overlay_keeps_configured_style() {
    let config = OverlayConfig {
        background_color: [0.1, 0.2, 0.3, 0.4],
        area_color: [0.0, 0.5, 0.0, 1.0],
        derivative_color: [0.5, 0.5, 0.0, 1.0],
        axis_divisions: 4,
        curve_width: 2.5,
    };
    let overlay = AreaRulingOverlay::new(&config);
    assert_eq!(overlay.background_color(), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(overlay.area_color(), [0.0, 0.5, 0.0, 1.0]);
    assert_eq!(overlay.derivative_color(), [0.5, 0.5, 0.0, 1.0]);
    assert_eq!(overlay.axis_divisions(), 4);
    assert!((overlay.curve_width() - 2.5).abs() < f32::EPSILON);
}

#[test]
fn overlay_visibility_toggles() {
    let mut overlay = AreaRulingOverlay::new(&OverlayConfig::default());
    assert!(!overlay.is_visible());
    overlay.toggle_visibility();
    assert!(overlay.is_visible());
    overlay.toggle_visibility();
    assert!(!overlay.is_visible());
}

#[test]
fn rotated_part_widens_its_footprint() {
    let upright = Part {
        name: "fin".to_string(),
        kind: PartKind::ControlSurface,
        translation: Vec3Data::default(),
        rotation_degrees: Vec3Data::default(),
        half_extents: Vec3Data { x: 0.1, y: 2.0, z: 1.0 },
    };
    let mut rotated = upright.clone();
    rotated.rotation_degrees = Vec3Data { x: 0.0, y: 0.0, z: 45.0 };

    let (u_min, u_max) = upright.vessel_bounds();
    let (r_min, r_max) = rotated.vessel_bounds();
    assert!((r_max.x - r_min.x) > (u_max.x - u_min.x), "45 degree roll widens the x span");
    assert!((r_max.z - r_min.z - (u_max.z - u_min.z)).abs() < 1.0e-5, "roll leaves z alone");
}

#[test]
fn craft_files_round_trip() {
    let mut vessel = Vessel { name: "round trip".to_string(), ..Vessel::default() };
    vessel.attach_part(fuselage("body", 0.0, Vec3::new(1.0, 1.0, 3.0)));
    vessel.attach_part(fuselage("nose", 3.5, Vec3::new(0.5, 0.5, 0.5)));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("craft.json");
    vessel.save_to_path(&path).expect("save craft");
    let loaded = Vessel::load_from_path(&path).expect("load craft");
    assert_eq!(loaded.name, "round trip");
    assert_eq!(loaded.parts.len(), 2);
    assert_eq!(loaded.root, Some(0));
    assert_eq!(loaded.parts[1].name, "nose");
}

#[test]
fn voxel_axis_frame_points_along_the_slicing_axis() {
    let mut vessel = Vessel::default();
    vessel.attach_part(fuselage("body", 1.0, Vec3::new(1.0, 1.0, 2.0)));
    let profile = cross_section::compute(&request_for(&vessel));
    let axis_column = profile.voxel_axis_to_local * glam::Vec4::new(0.0, 0.0, 1.0, 0.0);
    assert!((Vec3::new(axis_column.x, axis_column.y, axis_column.z) - Vec3::Z).length() < 1.0e-6);
}
