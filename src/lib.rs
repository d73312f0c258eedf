//! A small dot animator: draw white dots on a black square across a fixed
//! number of frames, with onion skin, a looping preview and PNG export.

pub mod app;
pub mod cache;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod frame;
pub mod gesture;
pub mod layout;
pub mod onion;
pub mod preview;
pub mod session;
pub mod store;
pub mod surface;
pub mod types;
pub mod ui;

pub use app::{App, Command};
pub use config::AnimatorConfig;
pub use error::{Error, Result};
pub use frame::Frame;
pub use store::FrameStore;
