//! The headless shell around the lucidoku deduction engine.
//!
//! This crate owns the screen flow the engine runs inside, without any
//! rendering: a [`Session`] starts in value-entry mode with a sample puzzle
//! loaded, switches to solve mode to step the deduction engine, and can
//! return to entry or reset to a blank board. It is the state container a
//! UI drives; the engine itself lives in `lucidoku-solver`.

pub use self::session::{GameError, Mode, Session, default_puzzle};

mod session;
