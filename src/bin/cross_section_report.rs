use aero_workbench::aero::cross_section;
use aero_workbench::aero::VoxelRequest;
use aero_workbench::sim::SimManager;
use aero_workbench::{Vessel, WorkbenchConfig};
use anyhow::{anyhow, Result};
use std::env;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(craft_path) = args.next() else {
        print_usage();
        return Ok(());
    };
    let config = match args.next() {
        Some(path) => WorkbenchConfig::load(&path)?,
        None => WorkbenchConfig::default(),
    };

    let vessel = Vessel::load_from_path(&craft_path)?;
    let local_to_world =
        vessel.local_to_world().ok_or_else(|| anyhow!("craft '{craft_path}' has no root part"))?;
    let request = VoxelRequest {
        world_to_local: local_to_world.inverse(),
        local_to_world,
        voxel_count: config.analysis.voxel_count,
        parts: vessel.parts.clone(),
        longitudinal_axis: vessel.longitudinal_axis(),
        crop_to_bounds: config.analysis.crop_to_bounds,
    };
    let profile = cross_section::compute(&request);

    let name = if vessel.name.is_empty() { craft_path.as_str() } else { vessel.name.as_str() };
    println!("Craft: {name} ({} parts)", vessel.parts.len());
    for part in &vessel.parts {
        println!("  - {} ({})", part.name, part.kind.label());
    }
    println!(
        "Sections: {} x {:.4} m starting at {:.4} m",
        profile.section_count(),
        profile.section_thickness,
        profile.first_section_offset
    );
    println!("{:>10} {:>14} {:>14}", "station", "area", "d2A/dx2");
    let n = profile.areas.len();
    for (i, (area, deriv)) in profile.areas.iter().zip(profile.second_derivs.iter()).enumerate() {
        let station = (n - 1 - i) as f64 * profile.section_thickness + profile.first_section_offset;
        println!("{station:>10.3} {area:>14.5} {deriv:>14.5}");
    }

    let mut sim = SimManager::default();
    sim.update_aero_data(&profile);
    if let Some(snapshot) = sim.snapshot() {
        println!();
        println!("Vehicle length:      {:.3} m", snapshot.vehicle_length);
        println!("Max section area:    {:.4} m^2", snapshot.max_cross_section_area);
        println!("Fineness ratio:      {:.3}", snapshot.fineness_ratio);
        println!("Wave drag area:      {:.5} m^2", snapshot.wave_drag_area);
    }
    Ok(())
}

fn print_usage() {
    println!("usage: cross_section_report <craft.json> [config.json]");
}
