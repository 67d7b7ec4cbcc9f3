//! Session control
//!
//! `mode` is the pure transition table; `controller` owns the live session
//! (mode, progression, settings, store, collaborators) and decides when to
//! save.

pub mod controller;
pub mod mode;

pub use controller::SessionController;
pub use mode::{SessionMode, Transition};
