use crate::session::{AnalysisMode, EditorSession};
use egui_plot as eplot;

/// Top-level analysis window: four-way mode selector plus the active
/// mode's panel. The host shell decides when the window is open (its
/// launcher button toggles `open`).
pub fn analysis_window(ctx: &egui::Context, session: &mut EditorSession, open: &mut bool) {
    let title = session.config().window.title.clone();
    let size = [
        session.config().window.width as f32,
        session.config().window.height as f32,
    ];
    egui::Window::new(title).open(open).default_size(size).show(ctx, |ui| {
        ui.horizontal(|ui| {
            for mode in AnalysisMode::ALL {
                if ui.selectable_label(session.mode() == mode, mode.label()).clicked() {
                    session.set_mode(mode);
                }
            }
        });
        ui.separator();
        match session.mode() {
            AnalysisMode::StaticAnalysis => static_analysis_panel(ui, session),
            AnalysisMode::StabilityDerivatives => stability_panel(ui, session),
            AnalysisMode::DerivativeSimulation => simulation_panel(ui, session),
            AnalysisMode::TransonicDesign => transonic_panel(ui, session),
        }
        ui.separator();
        ui.collapsing("Recent construction events", |ui| {
            for event in session.recent_events() {
                ui.label(event.to_string());
            }
        });
    });
}

fn curve_points(x_axis: &[f64], values: &[f64]) -> eplot::PlotPoints<'static> {
    let points: Vec<[f64; 2]> =
        x_axis.iter().zip(values.iter()).map(|(&x, &y)| [x, y]).collect();
    eplot::PlotPoints::from(points)
}

fn curve_color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn static_analysis_panel(ui: &mut egui::Ui, session: &EditorSession) {
    let overlay = session.overlay();
    if !overlay.has_data() {
        ui.label("Waiting for first voxelization pass...");
        return;
    }
    let plot = eplot::Plot::new("area_distribution").height(260.0).include_y(0.0);
    plot.show(ui, |plot_ui| {
        plot_ui.line(
            eplot::Line::new("Cross-section area", curve_points(overlay.x_axis(), overlay.areas()))
                .color(curve_color(overlay.area_color()))
                .width(overlay.curve_width()),
        );
    });
    ui.label(format!("Peak cross-section area: {:.3} m^2", overlay.max_area()));
    ui.label(format!("Wing surfaces tracked: {}", session.wing_models().len()));
}

fn stability_panel(ui: &mut egui::Ui, session: &EditorSession) {
    let Some(snapshot) = session.sim().snapshot() else {
        ui.label("No aero data yet; edit the vessel or wait for the cooldown.");
        return;
    };
    egui::Grid::new("stability_grid").num_columns(2).show(ui, |ui| {
        ui.label("Vehicle length");
        ui.label(format!("{:.2} m", snapshot.vehicle_length));
        ui.end_row();
        ui.label("Max cross-section area");
        ui.label(format!("{:.3} m^2", snapshot.max_cross_section_area));
        ui.end_row();
        ui.label("Fineness ratio");
        ui.label(format!("{:.2}", snapshot.fineness_ratio));
        ui.end_row();
        ui.label("Wave drag area");
        ui.label(format!("{:.4} m^2", snapshot.wave_drag_area));
        ui.end_row();
    });
}

fn simulation_panel(ui: &mut egui::Ui, session: &EditorSession) {
    match session.sim().snapshot() {
        Some(snapshot) => {
            ui.label(format!(
                "Linearized about the current geometry (update #{}).",
                session.sim().update_count()
            ));
            ui.label(format!(
                "Slender-body drag rise proxy: {:.4} m^2 over {:.2} m",
                snapshot.wave_drag_area, snapshot.vehicle_length
            ));
        }
        None => {
            ui.label("Simulation inputs appear after the first completed analysis.");
        }
    }
    ui.separator();
    ui.label(format!(
        "Recompute cooldown: {} / {} ticks{}",
        session.scheduler().ticks_since_run(),
        session.scheduler().cooldown_ticks(),
        if session.scheduler().update_queued() { " (update queued)" } else { "" }
    ));
}

fn transonic_panel(ui: &mut egui::Ui, session: &mut EditorSession) {
    ui.horizontal(|ui| {
        if ui.button("Toggle Cross Sections").clicked() {
            session.overlay_mut().toggle_visibility();
        }
        if ui.button("Display Debug Voxels").clicked() {
            session.request_debug_voxels();
        }
    });
    let overlay = session.overlay();
    if !overlay.has_data() {
        ui.label("Waiting for first voxelization pass...");
        return;
    }
    egui::Frame::default().fill(curve_color(overlay.background_color())).show(ui, |ui| {
        let plot = eplot::Plot::new("area_ruling").height(220.0);
        plot.show(ui, |plot_ui| {
            plot_ui.line(
                eplot::Line::new("Area", curve_points(overlay.x_axis(), overlay.areas()))
                    .color(curve_color(overlay.area_color())),
            );
            plot_ui.line(
                eplot::Line::new("d2A/dx2", curve_points(overlay.x_axis(), overlay.second_derivs()))
                    .color(curve_color(overlay.derivative_color())),
            );
        });
    });
    let divisions = overlay.axis_divisions().max(1);
    let span = overlay.x_axis().first().copied().unwrap_or(0.0)
        - overlay.x_axis().last().copied().unwrap_or(0.0);
    ui.label(format!("Station ruler: {divisions} divisions of {:.2} m", span / f64::from(divisions)));
    ui.label(if overlay.is_visible() {
        "Cross-section overlay shown in the editor viewport."
    } else {
        "Cross-section overlay hidden."
    });
}
