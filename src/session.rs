use crate::aero::{AeroEngine, VoxelRequest};
use crate::config::WorkbenchConfig;
use crate::events::{ConstructionEvent, EventBus};
use crate::overlay::AreaRulingOverlay;
use crate::scheduler::RecomputeScheduler;
use crate::sim::SimManager;
use crate::vessel::{Vessel, WingAeroModel};
use std::collections::VecDeque;

const EVENT_LOG_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    StaticAnalysis,
    StabilityDerivatives,
    DerivativeSimulation,
    TransonicDesign,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 4] = [
        AnalysisMode::StaticAnalysis,
        AnalysisMode::StabilityDerivatives,
        AnalysisMode::DerivativeSimulation,
        AnalysisMode::TransonicDesign,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::StaticAnalysis => "Static Analysis",
            AnalysisMode::StabilityDerivatives => "Data + Stability Derivatives",
            AnalysisMode::DerivativeSimulation => "Stability Deriv Simulation",
            AnalysisMode::TransonicDesign => "Transonic Design",
        }
    }
}

/// One editor session: owns the vessel under construction, the recompute
/// scheduler, and the analysis display state, and drives the voxelization
/// engine from the host's fixed-update hook. Created when the editor
/// scene loads, dropped when it unloads; event callbacks reach it through
/// whatever adapter the host registers, not through a global.
pub struct EditorSession {
    config: WorkbenchConfig,
    vessel: Vessel,
    engine: Box<dyn AeroEngine>,
    scheduler: RecomputeScheduler,
    bus: EventBus,
    sim: SimManager,
    overlay: AreaRulingOverlay,
    wing_models: Vec<WingAeroModel>,
    mode: AnalysisMode,
    recent_events: VecDeque<ConstructionEvent>,
    debug_voxels_requested: bool,
}

impl EditorSession {
    pub fn new(config: WorkbenchConfig, vessel: Vessel, engine: Box<dyn AeroEngine>) -> Self {
        let scheduler = RecomputeScheduler::new(config.analysis.cooldown_ticks);
        let overlay = AreaRulingOverlay::new(&config.overlay);
        let wing_models = vessel.rebuild_wing_models();
        let mut session = Self {
            config,
            vessel,
            engine,
            scheduler,
            bus: EventBus::default(),
            sim: SimManager::default(),
            overlay,
            wing_models,
            mode: AnalysisMode::default(),
            recent_events: VecDeque::with_capacity(EVENT_LOG_LIMIT),
            debug_voxels_requested: false,
        };
        // A fresh session owes the engine one pass over the loaded vessel.
        session.scheduler.notify_geometry_changed();
        session
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn vessel_mut(&mut self) -> &mut Vessel {
        &mut self.vessel
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn scheduler(&self) -> &RecomputeScheduler {
        &self.scheduler
    }

    pub fn sim(&self) -> &SimManager {
        &self.sim
    }

    pub fn overlay(&self) -> &AreaRulingOverlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut AreaRulingOverlay {
        &mut self.overlay
    }

    pub fn wing_models(&self) -> &[WingAeroModel] {
        &self.wing_models
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn recent_events(&self) -> impl Iterator<Item = &ConstructionEvent> {
        self.recent_events.iter()
    }

    pub fn request_debug_voxels(&mut self) {
        self.debug_voxels_requested = true;
    }

    /// Consumed by the host shell; drawing the voxel debug view is its job.
    pub fn take_debug_voxels_request(&mut self) -> bool {
        std::mem::take(&mut self.debug_voxels_requested)
    }

    pub fn handle_event(&mut self, event: ConstructionEvent) {
        if self.recent_events.len() == EVENT_LOG_LIMIT {
            self.recent_events.pop_front();
        }
        self.recent_events.push_back(event.clone());
        if event.is_structural() {
            self.geometry_changed();
        } else {
            self.rebuild_all();
        }
    }

    /// Structural edit: requeue a voxelization and refresh the per-part
    /// caches that depend on the part list.
    fn geometry_changed(&mut self) {
        self.scheduler.notify_geometry_changed();
        self.wing_models = self.vessel.rebuild_wing_models();
    }

    /// Undo/redo path: fresh overlay, immediate voxelization bypassing the
    /// cooldown, scheduler state reset as if a run just finished.
    pub fn rebuild_all(&mut self) {
        self.overlay = AreaRulingOverlay::new(&self.config.overlay);
        self.scheduler.force_reset();
        self.dispatch_voxelization();
        self.wing_models = self.vessel.rebuild_wing_models();
    }

    /// The host's fixed-update hook. Drains queued construction events,
    /// then, only while a root part exists, folds in any finished
    /// voxelization and advances the cooldown. Without a root part all
    /// scheduling is skipped and queued state survives to the next tick.
    pub fn fixed_update(&mut self) {
        for event in self.bus.drain() {
            self.handle_event(event);
        }

        if self.vessel.root_part().is_none() {
            return;
        }

        if let Some(profile) = self.engine.poll_completed() {
            self.sim.update_aero_data(&profile);
            self.overlay.update_from_profile(&profile);
        }

        if self.scheduler.tick() {
            self.dispatch_voxelization();
        }
    }

    fn dispatch_voxelization(&mut self) {
        let (Some(local_to_world), Some(world_to_local)) =
            (self.vessel.local_to_world(), self.vessel.world_to_local())
        else {
            // No root frame to voxelize against; the pass stays owed until
            // a root part exists again.
            self.scheduler.notify_geometry_changed();
            return;
        };
        let request = VoxelRequest {
            world_to_local,
            local_to_world,
            voxel_count: self.config.analysis.voxel_count,
            parts: self.vessel.parts.clone(),
            longitudinal_axis: self.vessel.longitudinal_axis(),
            crop_to_bounds: self.config.analysis.crop_to_bounds,
        };
        if let Err(err) = self.engine.request_voxelization(request) {
            // Engine still busy; requeue and let a later tick retry.
            eprintln!("[aero] voxelization request deferred: {err}");
            self.scheduler.notify_geometry_changed();
        }
    }
}
