//! Terminal presentation module.
//!
//! A thin rendering layer over the core: [`GameView`] draws a session
//! snapshot into a [`FrameBuffer`], and [`TerminalRenderer`] flushes frames
//! to the terminal. The core never calls into this crate; renderers only
//! read snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
