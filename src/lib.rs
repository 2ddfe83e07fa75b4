pub mod aero;
pub mod config;
pub mod events;
pub mod overlay;
pub mod scheduler;
pub mod session;
pub mod sim;
#[cfg(feature = "editor")]
pub mod ui;
pub mod vessel;

pub use aero::{AeroEngine, BackgroundAero, CrossSectionProfile, InstantAero, VoxelRequest};
pub use config::WorkbenchConfig;
pub use events::{ConstructionEvent, EventBus};
pub use scheduler::RecomputeScheduler;
pub use session::{AnalysisMode, EditorSession};
pub use vessel::{Part, PartKind, Vessel};
