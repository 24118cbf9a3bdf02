//! Integration tests for the playback/trim synchronization stack.
//!
//! Runs a full editing session against a simulated playback engine that
//! advances in fixed steps, the way a real engine delivers periodic
//! position notifications.

use std::cell::RefCell;
use std::rc::Rc;

use cliptrim_core::{TimeCode, TrimError, TrimWindow};
use cliptrim_sync::{PlaybackSource, SyncConfig, SyncEvent, TrimSession, TrimSyncController};

// ── Simulated engine ───────────────────────────────────────────

#[derive(Debug, Default)]
struct Engine {
    position: f64,
    playing: bool,
    seeks: Vec<f64>,
}

/// Shared handle so tests can step the engine while the session owns it.
#[derive(Debug, Clone, Default)]
struct EngineHandle(Rc<RefCell<Engine>>);

impl EngineHandle {
    fn new() -> Self {
        Self::default()
    }

    /// Advance the simulated clock by `step` seconds if playing.
    fn step(&self, step: f64) {
        let mut engine = self.0.borrow_mut();
        if engine.playing {
            engine.position += step;
        }
    }

    fn position(&self) -> f64 {
        self.0.borrow().position
    }

    fn seeks(&self) -> Vec<f64> {
        self.0.borrow().seeks.clone()
    }
}

impl PlaybackSource for EngineHandle {
    fn position(&self) -> TimeCode {
        TimeCode::from_secs(self.0.borrow().position)
    }
    fn is_playing(&self) -> bool {
        self.0.borrow().playing
    }
    fn seek(&mut self, to: TimeCode) {
        let mut engine = self.0.borrow_mut();
        engine.position = to.as_secs();
        engine.seeks.push(to.as_secs());
    }
    fn play(&mut self) {
        self.0.borrow_mut().playing = true;
    }
    fn pause(&mut self) {
        self.0.borrow_mut().playing = false;
    }
}

fn secs(s: f64) -> TimeCode {
    TimeCode::from_secs(s)
}

fn open_session(duration: f64) -> (TrimSession, EngineHandle) {
    let engine = EngineHandle::new();
    let session = TrimSession::open(
        Box::new(engine.clone()),
        secs(duration),
        SyncConfig::default(),
    )
    .unwrap();
    (session, engine)
}

// ── Full editing session ───────────────────────────────────────

#[test]
fn trimmed_playback_runs_window_and_stops_at_end() {
    let (mut session, engine) = open_session(20.0);
    let events = session.subscribe();

    // User drags the handles to (3.0, 8.0).
    session.begin_handle_drag();
    session.drag_window(secs(3.0), secs(8.0)).unwrap();
    session.end_handle_drag();

    // Resume: the drag previewed the end edge, so the cursor is corrected
    // back to the trim start and play lands one tick later.
    session.request_resume();
    assert!(!session.is_playing());
    session.tick();
    assert!(session.is_playing());
    assert_eq!(engine.seeks(), vec![8.0, 3.0]);

    // Engine advances in 0.5s steps; playback must stop past 8.0.
    let mut guard = 0;
    while session.is_playing() {
        engine.step(0.5);
        session.tick();
        guard += 1;
        assert!(guard < 100, "boundary stop never fired");
    }

    let received: Vec<SyncEvent> = events.try_iter().collect();
    let stops: Vec<&SyncEvent> = received
        .iter()
        .filter(|e| matches!(e, SyncEvent::StoppedAtBoundary { .. }))
        .collect();
    assert_eq!(stops.len(), 1);
    assert_eq!(*stops[0], SyncEvent::StoppedAtBoundary { at: secs(8.0) });

    // Every propagated position stayed inside the window.
    for event in &received {
        if let SyncEvent::PositionChanged { at } = event {
            assert!(*at <= secs(8.0), "position {at} escaped the trim end");
        }
    }

    // Confirm and hand the final window back to the caller.
    let window = session.finish();
    assert_eq!(window.start().as_secs(), 3.0);
    assert_eq!(window.end().as_secs(), 8.0);
}

#[test]
fn resume_after_boundary_stop_restarts_from_trim_start() {
    let (mut session, engine) = open_session(20.0);

    session.begin_handle_drag();
    session.drag_window(secs(3.0), secs(8.0)).unwrap();
    session.end_handle_drag();

    session.request_resume();
    session.tick();
    while session.is_playing() {
        engine.step(0.5);
        session.tick();
    }
    // Stopped just past the trim end; pressing play again must restart
    // from the trim start, not the stalled tail position.
    session.request_resume();
    session.tick();
    assert!(session.is_playing());
    assert_eq!(engine.position(), 3.0);
}

#[test]
fn dragging_while_playing_never_fights_the_user() {
    let (mut session, engine) = open_session(20.0);
    let events = session.subscribe();

    session.request_resume();
    session.tick();
    assert!(session.is_playing());

    // Mid-playback the user grabs a handle and pulls the end before the
    // current position. No stop may fire until the drag ends.
    session.begin_handle_drag();
    session.drag_window(secs(0.0), secs(4.0)).unwrap();
    for _ in 0..5 {
        engine.step(0.5);
        session.tick();
    }
    assert!(session.is_playing());

    session.end_handle_drag();
    // The drag previewed the end edge at 4.0; the next advance past it
    // triggers the stop.
    engine.step(0.5);
    session.tick();
    assert!(!session.is_playing());
    assert!(events
        .try_iter()
        .any(|e| matches!(e, SyncEvent::StoppedAtBoundary { .. })));
}

#[test]
fn cancel_discards_the_edit() {
    let (mut session, engine) = open_session(20.0);
    session.begin_handle_drag();
    session.drag_window(secs(5.0), secs(10.0)).unwrap();
    session.end_handle_drag();
    session.request_resume();

    session.cancel();
    assert!(!engine.0.borrow().playing);
}

// ── Controller driven directly ─────────────────────────────────

#[test]
fn controller_worked_example() {
    let window = TrimWindow::new(secs(3.0), secs(8.0), secs(20.0)).unwrap();
    let mut controller =
        TrimSyncController::new(secs(20.0), window, SyncConfig::default()).unwrap();

    let mut engine = EngineHandle::new();
    engine.seek(secs(7.95));
    engine.0.borrow_mut().seeks.clear();

    assert!(controller.will_start_playback(&mut engine));
    assert_eq!(engine.seeks(), vec![3.0]);

    engine.0.borrow_mut().position = 5.0;
    assert!(!controller.will_start_playback(&mut engine));

    engine.play();
    engine.0.borrow_mut().position = 8.01;
    controller.on_playback_time_advanced(&mut engine);
    assert!(!engine.is_playing());
}

#[test]
fn invalid_windows_surface_synchronously() {
    let (mut session, _engine) = open_session(10.0);
    let err = session.drag_window(secs(5.0), secs(2.0)).unwrap_err();
    assert!(matches!(err, TrimError::InvalidWindow { .. }));

    session.drag_window(secs(2.0), secs(5.0)).unwrap();
    assert_eq!(session.window().start().as_secs(), 2.0);
    assert_eq!(session.window().end().as_secs(), 5.0);
}

// ── Persistence across the host boundary ───────────────────────

#[test]
fn draft_window_survives_serialization() {
    let (mut session, _engine) = open_session(20.0);
    session.begin_handle_drag();
    session.drag_window(secs(3.0), secs(8.0)).unwrap();
    session.end_handle_drag();

    let json = serde_json::to_string(&session.window()).unwrap();
    let restored: TrimWindow = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session.window());
}
