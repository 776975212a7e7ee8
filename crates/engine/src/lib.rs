//! Tick engine - scheduling decoupled from any UI event system.
//!
//! [`TickClock`] is a cancellable fixed-interval scheduler: callers feed it
//! elapsed wall-clock time and it reports how many ticks fell due.
//! Cancelling discards any pending accumulation, so a paused game never
//! banks ticks; starting again schedules the next tick a full interval out.
//!
//! [`GameLoop`] composes a [`GameSession`] with a clock: due ticks drive
//! gravity, input commands are routed through to the session, and
//! pause/resume are wired to clock cancel/reschedule.

use blockfall_core::{GameSession, SessionSnapshot};
use blockfall_types::{GameCommand, TICK_INTERVAL_MS};

/// A cancellable periodic timer over caller-supplied elapsed time.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl TickClock {
    /// Create a running clock with the given interval.
    pub fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0, "tick interval must be positive");
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Schedule the next tick one full interval from now.
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_ms = 0;
    }

    /// Cancel the pending tick and stop accumulating.
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Account for elapsed time and return the number of ticks now due.
    /// A stopped clock never reports due ticks.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed_ms += elapsed_ms;
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }
}

/// Session plus scheduling: the object the runner binary drives.
#[derive(Debug, Clone)]
pub struct GameLoop {
    session: GameSession,
    clock: TickClock,
}

impl GameLoop {
    /// New game at the default 1000 ms gravity interval.
    pub fn new(seed: u32) -> Self {
        Self::with_interval(seed, TICK_INTERVAL_MS)
    }

    pub fn with_interval(seed: u32, interval_ms: u32) -> Self {
        Self {
            session: GameSession::new(seed),
            clock: TickClock::new(interval_ms),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Feed elapsed wall-clock time; runs one session tick per due interval.
    /// Ticks run to completion in order and never overlap.
    pub fn advance(&mut self, elapsed_ms: u32) {
        for _ in 0..self.clock.advance(elapsed_ms) {
            self.session.tick();
        }
    }

    /// Route a movement command into the session. Commands are validated
    /// and applied synchronously between ticks.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        self.session.handle_command(command)
    }

    /// Pause gameplay and cancel the pending tick.
    pub fn pause(&mut self) {
        self.session.pause();
        self.clock.cancel();
    }

    /// Resume gameplay; the next tick fires a full interval from now.
    pub fn resume(&mut self) {
        self.session.resume();
        self.clock.start();
    }

    pub fn toggle_pause(&mut self) {
        if self.session.paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Start a new game and restart the tick schedule.
    pub fn restart(&mut self) {
        self.session.restart();
        self.clock.start();
    }
}
