//! Terminal music player: a playlist and transport controller over a sound engine.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod media_controls;
pub mod model;
pub mod timer;
pub mod view;

pub use controller::AppController;
pub use error::PlayerError;
