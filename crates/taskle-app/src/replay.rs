//! Headless replay of scripted whiteboard input.
//!
//! Scripts are JSON documents with an `events` array. Each event is tagged by
//! `"type"`:
//!
//! ```json
//! { "events": [
//!     { "type": "set_tool", "tool": "pen" },
//!     { "type": "pointer_down", "x": 100, "y": 100 },
//!     { "type": "pointer_move", "x": 300, "y": 100 },
//!     { "type": "pointer_up" },
//!     { "type": "export" }
//! ] }
//! ```

use crate::app::{AppResult, Whiteboard};
use crate::ui::UiAction;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskle_core::{PointerEvent, SerializableColor, ToolKind};
use taskle_render::write_export;

/// A single scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    SetTool { tool: ToolKind },
    SetColor { color: SerializableColor },
    SetSize { size: u32 },
    SetSizeSlider { value: i64 },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Clear,
    Export,
    Undo,
    Redo,
    Import,
}

/// What a scripted event feeds into the whiteboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Pointer(PointerEvent),
    Action(UiAction),
}

impl ScriptEvent {
    pub fn step(&self) -> Step {
        match *self {
            ScriptEvent::PointerDown { x, y } => Step::Pointer(PointerEvent::down(x, y)),
            ScriptEvent::PointerMove { x, y } => Step::Pointer(PointerEvent::move_to(x, y)),
            ScriptEvent::PointerUp => Step::Pointer(PointerEvent::Up),
            ScriptEvent::PointerLeave => Step::Pointer(PointerEvent::Leave),
            ScriptEvent::SetTool { tool } => Step::Action(UiAction::SetTool(tool)),
            ScriptEvent::SetColor { color } => Step::Action(UiAction::SetColor(color)),
            ScriptEvent::SetSize { size } => Step::Action(UiAction::SetSize(size)),
            ScriptEvent::SetSizeSlider { value } => Step::Action(UiAction::SetSizeSlider(value)),
            ScriptEvent::ZoomIn => Step::Action(UiAction::ZoomIn),
            ScriptEvent::ZoomOut => Step::Action(UiAction::ZoomOut),
            ScriptEvent::ZoomReset => Step::Action(UiAction::ZoomReset),
            ScriptEvent::Clear => Step::Action(UiAction::Clear),
            ScriptEvent::Export => Step::Action(UiAction::Export),
            ScriptEvent::Undo => Step::Action(UiAction::Undo),
            ScriptEvent::Redo => Step::Action(UiAction::Redo),
            ScriptEvent::Import => Step::Action(UiAction::Import),
        }
    }
}

/// A replay script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Outcome of a replay run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    /// Number of events processed.
    pub events: usize,
    /// Files written, one per export event.
    pub exports: Vec<PathBuf>,
}

/// Run every event of `script` against `board`, writing exports into `out_dir`.
pub fn run_script(
    board: &mut Whiteboard,
    script: &Script,
    out_dir: &Path,
) -> AppResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for event in &script.events {
        match event.step() {
            Step::Pointer(pointer) => board.handle_pointer(pointer),
            Step::Action(action) => {
                if let Some(image) = board.apply(action)? {
                    let path = write_export(&image.png, out_dir, &image.file_name)?;
                    summary.exports.push(path);
                }
            }
        }
        summary.events += 1;
    }
    log::info!("Replayed {} events, {} exports", summary.events, summary.exports.len());
    Ok(summary)
}
