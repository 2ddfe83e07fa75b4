use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionEvent {
    PartAttached { part: String },
    PartDetached { part: String },
    PartRotated { part: String },
    PartOffset { part: String },
    RootSelected { part: String },
    Undo,
    Redo,
}

impl ConstructionEvent {
    /// Structural events change the vessel's shape and requeue a
    /// voxelization; undo/redo trigger a full rebuild instead.
    pub fn is_structural(&self) -> bool {
        !matches!(self, ConstructionEvent::Undo | ConstructionEvent::Redo)
    }
}

impl fmt::Display for ConstructionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionEvent::PartAttached { part } => write!(f, "PartAttached part={part}"),
            ConstructionEvent::PartDetached { part } => write!(f, "PartDetached part={part}"),
            ConstructionEvent::PartRotated { part } => write!(f, "PartRotated part={part}"),
            ConstructionEvent::PartOffset { part } => write!(f, "PartOffset part={part}"),
            ConstructionEvent::RootSelected { part } => write!(f, "RootSelected part={part}"),
            ConstructionEvent::Undo => write!(f, "Undo"),
            ConstructionEvent::Redo => write!(f, "Redo"),
        }
    }
}

/// Collects construction events from the host editor between fixed ticks.
#[derive(Default)]
pub struct EventBus {
    events: Vec<ConstructionEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: ConstructionEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<ConstructionEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
