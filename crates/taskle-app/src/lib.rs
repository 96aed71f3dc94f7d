//! Taskle Whiteboard Application
//!
//! Session container tying tools, zoom and the drawing surface together,
//! plus the headless replay driver and the optional native window.

mod app;
mod replay;
mod shortcuts;
mod ui;

pub use app::{AppError, AppResult, ExportedImage, Whiteboard};
pub use replay::{ReplaySummary, Script, ScriptEvent, Step, run_script};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::UiAction;

#[cfg(feature = "window")]
mod window;

#[cfg(feature = "window")]
pub use window::run as run_window;
