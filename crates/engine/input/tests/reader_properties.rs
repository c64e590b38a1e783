//! Behavioural properties of the input reader
//!
//! Uses a scripted binding object so each property is checked without any
//! device or edge-detection logic in the way.

use glam::{Vec2, Vec3};
use input::{
    Action, ActionEdge, ActionMap, ActionPhase, InputBindings, InputControlMode, InputReader,
    JumpSource, ModeSwitch, MoveSource, PauseSource, ScanSource,
};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Values the test sets while the reader owns the bindings
#[derive(Default)]
struct ScriptedInput {
    axis: Vec2,
    jump_held: bool,
    queued: VecDeque<ActionEdge>,
}

/// Binding object driven through a shared [`ScriptedInput`]
#[derive(Default)]
struct ScriptedBindings {
    enabled: HashSet<ActionMap>,
    input: Rc<RefCell<ScriptedInput>>,
    disable_all_calls: usize,
}

impl ScriptedBindings {
    fn with_input() -> (Self, Rc<RefCell<ScriptedInput>>) {
        let bindings = Self::default();
        let input = bindings.input.clone();
        (bindings, input)
    }
}

impl InputBindings for ScriptedBindings {
    fn enable_map(&mut self, map: ActionMap) {
        self.enabled.insert(map);
    }

    fn disable_map(&mut self, map: ActionMap) {
        self.enabled.remove(&map);
    }

    fn is_map_enabled(&self, map: ActionMap) -> bool {
        self.enabled.contains(&map)
    }

    fn disable_all(&mut self) {
        self.disable_all_calls += 1;
        self.enabled.clear();
    }

    fn read_axis(&self, _action: Action) -> Vec2 {
        self.input.borrow().axis
    }

    fn is_pressed(&self, action: Action) -> bool {
        action == Action::Jump && self.input.borrow().jump_held
    }

    fn next_edge(&mut self) -> Option<ActionEdge> {
        self.input.borrow_mut().queued.pop_front()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Move(Vec3),
    Sprint(Vec3),
    Jump,
    StartScan,
    StopScan,
    PauseEnter(InputControlMode),
    PauseExit(InputControlMode),
}

type Recorded = (
    InputReader<ScriptedBindings>,
    Rc<RefCell<Vec<Seen>>>,
    Rc<RefCell<ScriptedInput>>,
);

/// Reader in gameplay mode with a recorder subscribed to every event
fn recorded_reader() -> Recorded {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (bindings, input) = ScriptedBindings::with_input();
    let mut reader = InputReader::new(bindings);
    reader.change_mode(InputControlMode::Gameplay);
    let watch = reader.mode_watch();

    let s = seen.clone();
    reader.on_move(move |v| s.borrow_mut().push(Seen::Move(v)));
    let s = seen.clone();
    reader.on_sprint_move(move |v| s.borrow_mut().push(Seen::Sprint(v)));
    let s = seen.clone();
    reader.on_jump(move || s.borrow_mut().push(Seen::Jump));
    let s = seen.clone();
    reader.on_start_scan(move || s.borrow_mut().push(Seen::StartScan));
    let s = seen.clone();
    reader.on_stop_scan(move || s.borrow_mut().push(Seen::StopScan));
    let (s, w) = (seen.clone(), watch.clone());
    reader.on_pause_enter(move || s.borrow_mut().push(Seen::PauseEnter(w.get())));
    let (s, w) = (seen.clone(), watch);
    reader.on_pause_exit(move || s.borrow_mut().push(Seen::PauseExit(w.get())));

    (reader, seen, input)
}

fn edge(reader: &mut InputReader<ScriptedBindings>, action: Action, phase: ActionPhase) {
    reader.handle_edge(ActionEdge::new(action, phase));
}

fn take(seen: &Rc<RefCell<Vec<Seen>>>) -> Vec<Seen> {
    std::mem::take(&mut *seen.borrow_mut())
}

#[test]
fn test_zero_axis_emits_no_movement() {
    let (mut reader, seen, _) = recorded_reader();

    reader.tick();
    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    reader.tick();

    assert!(take(&seen).is_empty());
}

#[test]
fn test_axis_maps_to_horizontal_move() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().axis = Vec2::new(0.5, -0.5);

    reader.tick();

    assert_eq!(take(&seen), vec![Seen::Move(Vec3::new(0.5, 0.0, -0.5))]);
}

#[test]
fn test_single_component_axis_still_moves() {
    let (mut reader, seen, input) = recorded_reader();

    for axis in [Vec2::new(1.0, 0.0), Vec2::new(0.0, -0.25)] {
        input.borrow_mut().axis = axis;
        reader.tick();
    }

    assert_eq!(
        take(&seen),
        vec![
            Seen::Move(Vec3::new(1.0, 0.0, 0.0)),
            Seen::Move(Vec3::new(0.0, 0.0, -0.25)),
        ]
    );
}

#[test]
fn test_sprint_replaces_move() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().axis = Vec2::new(-1.0, 0.3);

    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    reader.tick();

    assert_eq!(take(&seen), vec![Seen::Sprint(Vec3::new(-1.0, 0.0, 0.3))]);
}

#[test]
fn test_sprint_flag_follows_edges_not_ticks() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().axis = Vec2::Y;

    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    assert!(reader.is_sprinting());
    edge(&mut reader, Action::SprintMove, ActionPhase::Performed);
    assert!(reader.is_sprinting());
    edge(&mut reader, Action::SprintMove, ActionPhase::Canceled);
    assert!(!reader.is_sprinting());
    // Flag changes alone emit nothing.
    assert!(take(&seen).is_empty());

    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    edge(&mut reader, Action::SprintMove, ActionPhase::Canceled);
    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    reader.tick();
    edge(&mut reader, Action::SprintMove, ActionPhase::Canceled);
    reader.tick();

    assert_eq!(
        take(&seen),
        vec![
            Seen::Sprint(Vec3::new(0.0, 0.0, 1.0)),
            Seen::Move(Vec3::new(0.0, 0.0, 1.0)),
        ]
    );
}

#[test]
fn test_jump_repeats_every_held_tick() {
    let (mut reader, seen, input) = recorded_reader();

    input.borrow_mut().jump_held = true;
    for _ in 0..3 {
        reader.tick();
    }
    input.borrow_mut().jump_held = false;
    reader.tick();
    reader.tick();

    assert_eq!(take(&seen), vec![Seen::Jump, Seen::Jump, Seen::Jump]);
}

#[test]
fn test_move_precedes_jump_within_tick() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().axis = Vec2::X;
    input.borrow_mut().jump_held = true;

    reader.tick();

    assert_eq!(take(&seen), vec![Seen::Move(Vec3::X), Seen::Jump]);
}

#[test]
fn test_scan_start_and_stop() {
    let (mut reader, seen, _) = recorded_reader();

    edge(&mut reader, Action::Scan, ActionPhase::Started);
    edge(&mut reader, Action::Scan, ActionPhase::Performed);
    edge(&mut reader, Action::Scan, ActionPhase::Canceled);

    assert_eq!(take(&seen), vec![Seen::StartScan, Seen::StopScan]);
}

#[test]
fn test_pause_ignores_started_phase() {
    let (mut reader, seen, _) = recorded_reader();

    edge(&mut reader, Action::Pause, ActionPhase::Started);
    edge(&mut reader, Action::Pause, ActionPhase::Canceled);

    assert!(take(&seen).is_empty());
    assert_eq!(reader.mode(), InputControlMode::Gameplay);
}

#[test]
fn test_pause_subscribers_observe_new_mode() {
    let (mut reader, seen, _) = recorded_reader();

    edge(&mut reader, Action::Pause, ActionPhase::Performed);
    assert!(reader.bindings().is_map_enabled(ActionMap::Ui));
    assert!(!reader.bindings().is_map_enabled(ActionMap::Gameplay));

    edge(&mut reader, Action::Play, ActionPhase::Performed);
    assert!(reader.bindings().is_map_enabled(ActionMap::Gameplay));
    assert!(!reader.bindings().is_map_enabled(ActionMap::Ui));

    assert_eq!(
        take(&seen),
        vec![
            Seen::PauseEnter(InputControlMode::Ui),
            Seen::PauseExit(InputControlMode::Gameplay),
        ]
    );
}

#[test]
fn test_mode_switch_enables_exactly_one_map() {
    let mut reader = InputReader::new(ScriptedBindings::default());
    let enabled = |reader: &InputReader<ScriptedBindings>| {
        (
            reader.bindings().is_map_enabled(ActionMap::Gameplay),
            reader.bindings().is_map_enabled(ActionMap::Ui),
        )
    };

    reader.change_mode(InputControlMode::Ui);
    reader.change_mode(InputControlMode::Gameplay);
    assert_eq!(enabled(&reader), (true, false));

    reader.change_mode(InputControlMode::Gameplay);
    assert_eq!(enabled(&reader), (true, false));

    reader.change_mode(InputControlMode::Ui);
    assert_eq!(enabled(&reader), (false, true));

    reader.change_mode(InputControlMode::None);
    assert_eq!(enabled(&reader), (false, false));
    assert_eq!(reader.mode(), InputControlMode::None);
}

#[test]
fn test_multiple_subscribers_and_unsubscribe() {
    use input::EventSource;

    let count = Rc::new(RefCell::new((0, 0)));
    let mut reader = InputReader::new(ScriptedBindings::default());
    reader.change_mode(InputControlMode::Gameplay);

    let c = count.clone();
    let first = reader.on_start_scan(move || c.borrow_mut().0 += 1);
    let c = count.clone();
    reader.on_start_scan(move || c.borrow_mut().1 += 1);

    edge(&mut reader, Action::Scan, ActionPhase::Started);
    assert!(reader.unsubscribe(first));
    edge(&mut reader, Action::Scan, ActionPhase::Started);

    assert_eq!(*count.borrow(), (1, 2));
}

#[test]
fn test_dispose_is_idempotent_and_silences_reader() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().axis = Vec2::ONE;
    input.borrow_mut().jump_held = true;

    reader.dispose();
    reader.dispose();

    reader.tick();
    edge(&mut reader, Action::Scan, ActionPhase::Started);
    edge(&mut reader, Action::Pause, ActionPhase::Performed);

    assert!(take(&seen).is_empty());
    // One reset at construction, one at dispose.
    assert_eq!(reader.bindings().disable_all_calls, 2);
    assert_eq!(reader.mode(), InputControlMode::None);
}

#[test]
fn test_capabilities_usable_in_isolation() {
    fn wire_scanner(source: &mut impl ScanSource, hits: Rc<RefCell<u32>>) {
        source.on_start_scan(move || *hits.borrow_mut() += 1);
    }

    fn start_level(switch: &mut impl ModeSwitch) {
        switch.change_mode(InputControlMode::Gameplay);
    }

    let hits = Rc::new(RefCell::new(0));
    let mut reader = InputReader::new(ScriptedBindings::default());
    wire_scanner(&mut reader, hits.clone());
    start_level(&mut reader);

    edge(&mut reader, Action::Scan, ActionPhase::Started);

    assert_eq!(*hits.borrow(), 1);
    assert_eq!(reader.mode(), InputControlMode::Gameplay);
}

#[test]
fn test_disabled_map_edges_ignored_except_cancel() {
    let (mut reader, seen, _) = recorded_reader();
    edge(&mut reader, Action::SprintMove, ActionPhase::Started);
    reader.change_mode(InputControlMode::Ui);

    edge(&mut reader, Action::Scan, ActionPhase::Started);
    edge(&mut reader, Action::Pause, ActionPhase::Performed);
    assert!(reader.is_sprinting());
    edge(&mut reader, Action::SprintMove, ActionPhase::Canceled);
    assert!(!reader.is_sprinting());

    reader.change_mode(InputControlMode::Gameplay);
    edge(&mut reader, Action::Play, ActionPhase::Performed);

    assert!(take(&seen).is_empty());
    assert_eq!(reader.mode(), InputControlMode::Gameplay);
}

#[test]
fn test_pump_stops_gameplay_edges_queued_behind_pause() {
    let (mut reader, seen, input) = recorded_reader();
    input.borrow_mut().queued.extend([
        ActionEdge::new(Action::Pause, ActionPhase::Performed),
        ActionEdge::new(Action::Scan, ActionPhase::Started),
        ActionEdge::new(Action::Play, ActionPhase::Performed),
    ]);

    reader.pump();

    assert_eq!(
        take(&seen),
        vec![
            Seen::PauseEnter(InputControlMode::Ui),
            Seen::PauseExit(InputControlMode::Gameplay),
        ]
    );
    assert!(input.borrow().queued.is_empty());
}
