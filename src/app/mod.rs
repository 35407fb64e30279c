//! Core application logic: screen state, event handling, and effect dispatch.

pub mod effect;
pub mod event;
pub mod handler;
pub mod state;
