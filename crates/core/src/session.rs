//! Session module - the game state machine.
//!
//! Owns the grid, the active piece and its position, the queued next piece,
//! and the score/pause/over flags. One logical tick applies a single gravity
//! step and, when downward motion is blocked, runs the lock/line-clear
//! resolution. Every movement command is validated against the grid before
//! it commits; invalid commands roll back completely and silently.

use blockfall_types::{GameCommand, SPAWN_X, SPAWN_Y};

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::PieceFactory;
use crate::scoring::line_clear_score;
use crate::snapshot::{PieceSnapshot, SessionSnapshot};

/// Integer offset of the active piece's shape origin in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// The fixed spawn position for every new piece.
    pub fn spawn() -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    active: Piece,
    position: Position,
    next: Piece,
    factory: PieceFactory,
    score: u32,
    paused: bool,
    over: bool,
}

impl GameSession {
    /// Create a fresh session with the given RNG seed and spawn the first
    /// piece. Spawn placement is not validated; game over is only ever
    /// declared by the post-merge top-row check.
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let active = factory.next_piece();
        let next = factory.next_piece();
        Self {
            grid: Grid::new(),
            active,
            position: Position::spawn(),
            next,
            factory,
            score: 0,
            paused: false,
            over: false,
        }
    }

    /// Reset for a new game: empty grid, zero score, cleared flags, fresh
    /// pieces. The factory keeps its RNG state, so the piece sequence
    /// continues rather than replaying.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = self.factory.next_piece();
        self.next = self.factory.next_piece();
        self.position = Position::spawn();
        self.score = 0;
        self.paused = false;
        self.over = false;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Replace the active piece and its position (for staging scenarios).
    #[cfg(test)]
    pub fn set_active(&mut self, piece: Piece, position: Position) {
        self.active = piece;
        self.position = position;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether downward motion from the current position is blocked.
    pub fn landed(&self) -> bool {
        !self
            .active
            .shape
            .fits(&self.grid, self.position.x, self.position.y + 1)
    }

    /// One logical gravity tick.
    ///
    /// Moves the active piece down one row. If the new position collides,
    /// the move is reverted; if the piece is then landed (the row below the
    /// reverted position is blocked), it locks and the resolution pass runs.
    pub fn tick(&mut self) {
        if self.paused || self.over {
            return;
        }

        self.position.y += 1;
        if !self
            .active
            .shape
            .fits(&self.grid, self.position.x, self.position.y)
        {
            self.position.y -= 1;
            if self.landed() {
                self.lock_and_resolve();
            }
        }
    }

    /// Apply a movement command. Returns whether the transform committed.
    /// Rejected while paused or after game over.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        if self.paused || self.over {
            return false;
        }
        match command {
            GameCommand::MoveLeft => self.try_shift(-1, 0),
            GameCommand::MoveRight => self.try_shift(1, 0),
            GameCommand::SoftDrop => self.try_shift(0, 1),
            GameCommand::Rotate => self.try_rotate(),
        }
    }

    /// Tentatively shift the active piece, rolling back when the validator
    /// rejects the new position. Soft drop never locks; only a gravity tick
    /// can trigger resolution.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let x = self.position.x + dx;
        let y = self.position.y + dy;
        if self.active.shape.fits(&self.grid, x, y) {
            self.position = Position { x, y };
            return true;
        }
        false
    }

    /// Tentatively rotate the active piece's shape matrix in place,
    /// keeping the origin fixed. Rolls back when the rotated shape does not
    /// fit at the current position.
    fn try_rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated();
        if rotated.fits(&self.grid, self.position.x, self.position.y) {
            self.active.shape = rotated;
            return true;
        }
        false
    }

    /// Lock the active piece and resolve the turn, in order: merge into the
    /// grid, top-row game-over check, spawn the queued piece, clear full
    /// rows, add the score delta for the cleared count.
    fn lock_and_resolve(&mut self) {
        self.grid.merge_piece(
            &self.active.shape,
            self.position.x,
            self.position.y,
            self.active.kind,
        );

        if self.grid.row0_occupied() {
            self.over = true;
        }

        self.active = std::mem::replace(&mut self.next, self.factory.next_piece());
        self.position = Position::spawn();

        let cleared = self.grid.clear_full_rows();
        self.score += line_clear_score(cleared.len());
    }

    /// Read-only copy of everything a renderer needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot {
            grid: Default::default(),
            active: PieceSnapshot {
                kind: self.active.kind,
                shape: self.active.shape,
                x: self.position.x,
                y: self.position.y,
            },
            next_kind: self.next.kind,
            next_shape: self.next.shape,
            score: self.score,
            paused: self.paused,
            over: self.over,
        };
        self.grid.copy_into(&mut snapshot.grid);
        snapshot
    }
}
