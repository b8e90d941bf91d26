//! Controller layer: terminal commands and their routing into the session.

pub mod commands;
pub mod orchestration;
