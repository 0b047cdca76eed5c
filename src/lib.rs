//! Emits `trello-player-config.js` for the Trello Player power-up build.

pub mod config;
pub mod emitter;
pub mod error;
pub mod logger;
