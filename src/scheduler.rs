/// Debounces bursty geometry-change notifications into at most one
/// voxelization request per cooldown window, with a guaranteed trailing
/// run for changes that arrive mid-cooldown.
pub struct RecomputeScheduler {
    cooldown_ticks: u32,
    ticks_since_run: u32,
    update_queued: bool,
}

impl RecomputeScheduler {
    pub fn new(cooldown_ticks: u32) -> Self {
        Self { cooldown_ticks, ticks_since_run: 0, update_queued: false }
    }

    pub fn cooldown_ticks(&self) -> u32 {
        self.cooldown_ticks
    }

    pub fn ticks_since_run(&self) -> u32 {
        self.ticks_since_run
    }

    pub fn update_queued(&self) -> bool {
        self.update_queued
    }

    /// Records that vessel geometry changed. A change landing near the end
    /// of the cooldown pulls the counter back so at least two more ticks
    /// pass before the next run.
    pub fn notify_geometry_changed(&mut self) {
        let requeue_floor = self.cooldown_ticks.saturating_sub(2);
        if self.ticks_since_run > requeue_floor {
            self.ticks_since_run = requeue_floor;
        }
        self.update_queued = true;
    }

    /// Advances the cooldown by one tick. Returns `true` when a queued
    /// recomputation should run now; the scheduler state is reset before
    /// returning so the caller can dispatch immediately.
    pub fn tick(&mut self) -> bool {
        if self.ticks_since_run < self.cooldown_ticks {
            self.ticks_since_run += 1;
        }
        if self.ticks_since_run >= self.cooldown_ticks && self.update_queued {
            self.ticks_since_run = 0;
            self.update_queued = false;
            true
        } else {
            false
        }
    }

    /// Clears scheduler state as if a recomputation just ran. Used by
    /// full-rebuild paths (undo/redo) that dispatch the recomputation
    /// themselves, bypassing the cooldown.
    pub fn force_reset(&mut self) {
        self.ticks_since_run = 0;
        self.update_queued = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counter_saturates_at_threshold() {
        let mut scheduler = RecomputeScheduler::new(20);
        for _ in 0..100 {
            assert!(!scheduler.tick());
        }
        assert_eq!(scheduler.ticks_since_run(), 20);
    }

    #[test]
    fn change_near_boundary_is_pulled_back() {
        let mut scheduler = RecomputeScheduler::new(20);
        for _ in 0..19 {
            scheduler.tick();
        }
        assert_eq!(scheduler.ticks_since_run(), 19);
        scheduler.notify_geometry_changed();
        assert_eq!(scheduler.ticks_since_run(), 18);
        assert!(scheduler.update_queued());
    }
}
