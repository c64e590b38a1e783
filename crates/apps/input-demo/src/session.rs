//! Wiring between a device backend, the bindings and the reader

use devices::{DeviceBackend, DeviceState};
use input::{
    InputControls, InputReader, JumpSource, ModeSwitch, MoveSource, PauseSource, ScanSource,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Number of each gameplay event seen during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTally {
    pub moves: u32,
    pub sprint_moves: u32,
    pub jumps: u32,
    pub scans_started: u32,
    pub scans_stopped: u32,
    pub pauses: u32,
    pub resumes: u32,
}

/// One running input session owned by the composition root
pub struct Session {
    backend: Box<dyn DeviceBackend>,
    devices: DeviceState,
    reader: InputReader<InputControls>,
    tally: Rc<RefCell<EventTally>>,
}

impl Session {
    /// Build the session and subscribe logging listeners
    pub fn new(
        backend: Box<dyn DeviceBackend>,
        devices: DeviceState,
        reader: InputReader<InputControls>,
    ) -> Self {
        let mut session = Self {
            backend,
            devices,
            reader,
            tally: Rc::new(RefCell::new(EventTally::default())),
        };
        session.subscribe();
        session
    }

    fn subscribe(&mut self) {
        let watch = self.reader.mode_watch();
        let reader = &mut self.reader;

        let tally = self.tally.clone();
        reader.on_move(move |direction| {
            info!(?direction, "move");
            tally.borrow_mut().moves += 1;
        });
        let tally = self.tally.clone();
        reader.on_sprint_move(move |direction| {
            info!(?direction, "sprint");
            tally.borrow_mut().sprint_moves += 1;
        });
        let tally = self.tally.clone();
        reader.on_jump(move || {
            info!("jump");
            tally.borrow_mut().jumps += 1;
        });
        let tally = self.tally.clone();
        reader.on_start_scan(move || {
            info!("scan started");
            tally.borrow_mut().scans_started += 1;
        });
        let tally = self.tally.clone();
        reader.on_stop_scan(move || {
            info!("scan stopped");
            tally.borrow_mut().scans_stopped += 1;
        });
        let (tally, mode) = (self.tally.clone(), watch.clone());
        reader.on_pause_enter(move || {
            info!(mode = %mode.get(), "paused");
            tally.borrow_mut().pauses += 1;
        });
        let (tally, mode) = (self.tally.clone(), watch);
        reader.on_pause_exit(move || {
            info!(mode = %mode.get(), "resumed");
            tally.borrow_mut().resumes += 1;
        });
    }

    /// Run one fixed step: poll devices, update bindings, handle edges, sample
    pub fn step(&mut self) {
        self.backend.poll(&mut self.devices);
        self.reader.update(&self.devices);
        self.reader.pump();
        self.reader.tick();
    }

    #[cfg(test)]
    pub fn reader_mut(&mut self) -> &mut InputReader<InputControls> {
        &mut self.reader
    }

    /// Dispose the reader and return the final tally
    pub fn finish(mut self) -> EventTally {
        self.reader.dispose();
        info!(mode = %self.reader.mode(), "session finished");
        // Bound to a local so the `Ref` guard ends before `self` is dropped.
        let tally = self.tally.borrow().clone();
        tally
    }
}
