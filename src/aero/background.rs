use super::{cross_section, AeroEngine, CrossSectionProfile, VoxelRequest};
use anyhow::Result;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

/// Runs each voxelization on a worker thread and reports the finished
/// profile through a channel drained once per fixed tick. There is no
/// cancellation: a request issued while one is in flight is refused, and
/// the session requeues it for a later tick.
pub struct BackgroundAero {
    tx: Sender<CrossSectionProfile>,
    rx: Receiver<CrossSectionProfile>,
    in_flight: bool,
}

impl BackgroundAero {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx, in_flight: false }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

impl Default for BackgroundAero {
    fn default() -> Self {
        Self::new()
    }
}

impl AeroEngine for BackgroundAero {
    fn request_voxelization(&mut self, request: VoxelRequest) -> Result<()> {
        if self.in_flight {
            anyhow::bail!("voxelization already in flight");
        }
        let tx = self.tx.clone();
        thread::spawn(move || {
            let profile = cross_section::compute(&request);
            let _ = tx.send(profile);
        });
        self.in_flight = true;
        Ok(())
    }

    fn poll_completed(&mut self) -> Option<CrossSectionProfile> {
        match self.rx.try_recv() {
            Ok(profile) => {
                self.in_flight = false;
                Some(profile)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                eprintln!("[aero] voxelization worker channel disconnected");
                self.in_flight = false;
                None
            }
        }
    }
}
