//! Core game rules - pure, deterministic, and testable.
//!
//! This crate contains the complete rules engine with **zero dependencies**
//! on UI, timers, or I/O:
//!
//! - [`grid`]: the 10x20 playfield with row clearing and compaction
//! - [`pieces`]: the tetromino catalog, shape matrices, and the placement
//!   validator
//! - [`rng`]: seeded uniform piece generation
//! - [`scoring`]: the fixed per-line-count score table
//! - [`session`]: the game state machine (gravity, locking, line clears,
//!   pause/over flags)
//! - [`snapshot`]: read-only state copies for renderers
//!
//! # Game rules
//!
//! - Pieces spawn at a fixed position and fall one row per gravity tick.
//! - Every move/rotate is validated against the grid and rolled back
//!   entirely when it would collide or leave the playfield.
//! - A piece locks when a gravity step finds downward motion blocked; the
//!   resolution pass then merges it, checks the top row for game over,
//!   spawns the queued piece, and clears full rows (1/2/3/4 rows score
//!   10/20/30/50 points).
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::GameCommand;
//!
//! let mut session = GameSession::new(12345);
//! session.handle_command(GameCommand::MoveLeft);
//! session.tick();
//!
//! assert!(!session.over());
//! ```

pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use grid::Grid;
pub use pieces::{catalog_shape, Piece, ShapeGrid};
pub use rng::{PieceFactory, SimpleRng};
pub use scoring::line_clear_score;
pub use session::{GameSession, Position};
pub use snapshot::{PieceSnapshot, SessionSnapshot};
