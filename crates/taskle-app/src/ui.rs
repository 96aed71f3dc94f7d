//! Toolbar actions.

use taskle_core::{SerializableColor, ToolKind};

/// Actions that can be triggered from the whiteboard toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// Change the current tool.
    SetTool(ToolKind),
    /// Change stroke color.
    SetColor(SerializableColor),
    /// Pick one of the size preset buttons.
    SetSize(u32),
    /// Move the size slider (compact toolbar).
    SetSizeSlider(i64),
    /// Zoom in.
    ZoomIn,
    /// Zoom out.
    ZoomOut,
    /// Reset zoom to 100%.
    ZoomReset,
    /// Repaint the surface with the background.
    Clear,
    /// Export the surface as PNG.
    Export,
    /// Undo (no backing behavior yet).
    Undo,
    /// Redo (no backing behavior yet).
    Redo,
    /// Import an image (no backing behavior yet).
    Import,
}

impl UiAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SetTool(_) => "set tool",
            UiAction::SetColor(_) => "set color",
            UiAction::SetSize(_) => "set size",
            UiAction::SetSizeSlider(_) => "set size slider",
            UiAction::ZoomIn => "zoom in",
            UiAction::ZoomOut => "zoom out",
            UiAction::ZoomReset => "zoom reset",
            UiAction::Clear => "clear",
            UiAction::Export => "export",
            UiAction::Undo => "undo",
            UiAction::Redo => "redo",
            UiAction::Import => "import",
        }
    }

    /// Whether the toolbar shows this action without any behavior behind it.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, UiAction::Undo | UiAction::Redo | UiAction::Import)
    }
}
