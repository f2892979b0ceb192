//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `dialogs` - rfd file dialogs and message boxes
//! - `input` - keyboard event to message mapping

pub mod app;
pub mod dialogs;
pub mod input;

pub use app::App;
