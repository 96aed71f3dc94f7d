//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;
use taskle_core::palette::{self, SIZE_PRESETS};
use taskle_core::{InertTool, SerializableColor, ToolKind};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, description: &'static str) -> Self {
        Self { key, ctrl, description }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("P", false, "Pen"),
            Shortcut::new("E", false, "Eraser"),
            Shortcut::new("R", false, "Rectangle (no drawing yet)"),
            Shortcut::new("C", false, "Circle (no drawing yet)"),
            Shortcut::new("T", false, "Text (no drawing yet)"),
            Shortcut::new("M", false, "Move"),
            Shortcut::new("K", false, "Next color"),
            Shortcut::new("1-7", false, "Brush size presets 1, 2, 3, 5, 8, 12, 16"),
            Shortcut::new("+", false, "Zoom in"),
            Shortcut::new("-", false, "Zoom out"),
            Shortcut::new("0", false, "Reset zoom"),
            Shortcut::new("Delete", false, "Clear canvas"),
            Shortcut::new("S", true, "Export to whiteboard.png"),
            Shortcut::new("Z", true, "Undo (not implemented)"),
            Shortcut::new("Y", true, "Redo (not implemented)"),
            Shortcut::new("I", true, "Import (not implemented)"),
            Shortcut::new("Escape", false, "Quit"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:10} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }

    /// Map a key press to a toolbar action.
    ///
    /// `key` is the key name as listed in [`ShortcutRegistry::all`] (digits are
    /// matched individually). `current_color` is needed to cycle the palette.
    pub fn action_for(key: &str, ctrl: bool, current_color: SerializableColor) -> Option<UiAction> {
        if ctrl {
            return match key {
                "S" => Some(UiAction::Export),
                "Z" => Some(UiAction::Undo),
                "Y" => Some(UiAction::Redo),
                "I" => Some(UiAction::Import),
                _ => None,
            };
        }

        let action = match key {
            "P" => UiAction::SetTool(ToolKind::Pen),
            "E" => UiAction::SetTool(ToolKind::Eraser),
            "R" => UiAction::SetTool(ToolKind::Inert(InertTool::Rectangle)),
            "C" => UiAction::SetTool(ToolKind::Inert(InertTool::Circle)),
            "T" => UiAction::SetTool(ToolKind::Inert(InertTool::Text)),
            "M" => UiAction::SetTool(ToolKind::Inert(InertTool::Move)),
            "K" => UiAction::SetColor(palette::next_swatch(current_color).color),
            "+" | "=" => UiAction::ZoomIn,
            "-" => UiAction::ZoomOut,
            "0" => UiAction::ZoomReset,
            "Delete" => UiAction::Clear,
            digit => {
                let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
                UiAction::SetSize(*SIZE_PRESETS.get(index)?)
            }
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskle_core::palette::DEFAULT_COLOR;

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("S", true, "").format(), "Ctrl+S");
        assert_eq!(Shortcut::new("Delete", false, "").format(), "Delete");
    }

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            ShortcutRegistry::action_for("E", false, DEFAULT_COLOR),
            Some(UiAction::SetTool(ToolKind::Eraser))
        );
        assert_eq!(
            ShortcutRegistry::action_for("M", false, DEFAULT_COLOR),
            Some(UiAction::SetTool(ToolKind::Inert(InertTool::Move)))
        );
    }

    #[test]
    fn test_size_digits() {
        let action = |key| ShortcutRegistry::action_for(key, false, DEFAULT_COLOR);
        assert_eq!(action("1"), Some(UiAction::SetSize(1)));
        assert_eq!(action("7"), Some(UiAction::SetSize(16)));
        assert_eq!(ShortcutRegistry::action_for("8", false, DEFAULT_COLOR), None);
        assert_eq!(ShortcutRegistry::action_for("Q", false, DEFAULT_COLOR), None);
    }

    #[test]
    fn test_ctrl_keys() {
        assert_eq!(ShortcutRegistry::action_for("S", true, DEFAULT_COLOR), Some(UiAction::Export));
        assert_eq!(ShortcutRegistry::action_for("Z", true, DEFAULT_COLOR), Some(UiAction::Undo));
        assert_eq!(ShortcutRegistry::action_for("P", true, DEFAULT_COLOR), None);
    }

    #[test]
    fn test_color_cycle() {
        let action = ShortcutRegistry::action_for("K", false, DEFAULT_COLOR);
        assert_eq!(action, Some(UiAction::SetColor(SerializableColor::white())));
    }
}
