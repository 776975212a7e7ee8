//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof: the pure rules engine, the
//! tick scheduler, and the terminal presentation layers. The runner binary
//! and the integration tests go through this facade.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
