//! Terminal input module.
//!
//! Maps `crossterm` key events into movement commands and session controls.
//! Independent of any UI framework; the runner binary decides what to do
//! with each action.

pub mod map;

pub use map::{handle_key_event, should_quit, KeyAction};
