//! Tool system for the whiteboard.

use crate::color::SerializableColor;
use crate::palette::{DEFAULT_COLOR, MAX_SIZE, MIN_SIZE, SIZE_PRESETS};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Eraser strokes are this many times wider than the nominal brush size.
pub const ERASER_WIDTH_FACTOR: f64 = 2.0;

/// Default brush size.
pub const DEFAULT_SIZE: u32 = 3;

/// Tools that can be selected in the toolbar but do not paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InertTool {
    Rectangle,
    Circle,
    Text,
    Move,
}

/// Available tools.
///
/// Only [`ToolKind::Pen`] and [`ToolKind::Eraser`] produce pixels. Shape and text
/// tools are placeholders until they get their own drawing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Inert(InertTool),
}

/// Error for unknown tool names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0:?}")]
pub struct UnknownTool(pub String);

/// Cursor shown over the canvas for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Crosshair,
    Move,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Inert(InertTool::Rectangle),
        ToolKind::Inert(InertTool::Circle),
        ToolKind::Inert(InertTool::Text),
        ToolKind::Inert(InertTool::Move),
    ];

    /// Stable lowercase name used in configuration and scripts.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Inert(InertTool::Rectangle) => "rectangle",
            ToolKind::Inert(InertTool::Circle) => "circle",
            ToolKind::Inert(InertTool::Text) => "text",
            ToolKind::Inert(InertTool::Move) => "move",
        }
    }

    /// Whether pressing the pointer with this tool starts a stroke.
    pub fn starts_stroke(self) -> bool {
        !matches!(self, ToolKind::Inert(InertTool::Move))
    }

    pub fn cursor(self) -> CursorStyle {
        match self {
            ToolKind::Inert(InertTool::Move) => CursorStyle::Move,
            _ => CursorStyle::Crosshair,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

impl TryFrom<String> for ToolKind {
    type Error = UnknownTool;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToolKind> for String {
    fn from(kind: ToolKind) -> Self {
        kind.name().to_string()
    }
}

/// Stroke width in pixels, always within `MIN_SIZE..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BrushSize(u32);

/// Error for sizes outside the slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Brush size {0} is outside the 1..=16 range")]
pub struct InvalidBrushSize(pub u32);

impl BrushSize {
    /// Create a size if it lies within the slider range.
    pub fn new(size: u32) -> Option<Self> {
        (MIN_SIZE..=MAX_SIZE).contains(&size).then_some(Self(size))
    }

    /// Create a size from one of the toolbar presets only.
    pub fn preset(size: u32) -> Option<Self> {
        SIZE_PRESETS.contains(&size).then_some(Self(size))
    }

    /// Create a size from a raw slider value, clamping into range.
    pub fn from_slider(value: i64) -> Self {
        Self(value.clamp(i64::from(MIN_SIZE), i64::from(MAX_SIZE)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl TryFrom<u32> for BrushSize {
    type Error = InvalidBrushSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidBrushSize(value))
    }
}

impl From<BrushSize> for u32 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// How a segment is composited onto the surface.
#[derive(Debug, Clone, Copy)]
pub enum Brush {
    /// Normal source-over painting.
    Paint { color: Color, width: f64 },
    /// Destination-out: removes existing pixels.
    Erase { width: f64 },
}

impl Brush {
    pub fn width(&self) -> f64 {
        match self {
            Brush::Paint { width, .. } | Brush::Erase { width } => *width,
        }
    }

    pub fn is_erase(&self) -> bool {
        matches!(self, Brush::Erase { .. })
    }
}

/// The active drawing instrument and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub kind: ToolKind,
    pub color: SerializableColor,
    pub size: BrushSize,
}

impl Default for Tool {
    fn default() -> Self {
        Self {
            kind: ToolKind::Pen,
            color: DEFAULT_COLOR,
            size: BrushSize::default(),
        }
    }
}

impl Tool {
    pub fn with_kind(self, kind: ToolKind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_color(self, color: SerializableColor) -> Self {
        Self { color, ..self }
    }

    pub fn with_size(self, size: BrushSize) -> Self {
        Self { size, ..self }
    }

    /// Resolve the brush for the next segment, or `None` for tools that don't paint.
    pub fn brush(&self) -> Option<Brush> {
        let size = f64::from(self.size.get());
        match self.kind {
            ToolKind::Pen => Some(Brush::Paint {
                color: self.color.into(),
                width: size,
            }),
            ToolKind::Eraser => Some(Brush::Erase {
                width: size * ERASER_WIDTH_FACTOR,
            }),
            ToolKind::Inert(
                InertTool::Rectangle | InertTool::Circle | InertTool::Text | InertTool::Move,
            ) => None,
        }
    }
}

/// Holds the current tool. Every setter replaces the whole [`Tool`] value.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    tool: Tool,
}

impl ToolManager {
    /// Create a tool manager with the default tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager starting from the given tool.
    pub fn with_tool(tool: Tool) -> Self {
        Self { tool }
    }

    pub fn current(&self) -> Tool {
        self.tool
    }

    /// Replace the whole tool value.
    pub fn set(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Switch tool kind, keeping color and size.
    pub fn set_kind(&mut self, kind: ToolKind) {
        log::debug!("Tool set to {}", kind);
        self.tool = self.tool.with_kind(kind);
    }

    pub fn set_color(&mut self, color: SerializableColor) {
        log::debug!("Tool color set to {}", color);
        self.tool = self.tool.with_color(color);
    }

    /// Apply a preset size. Returns false (and keeps the size) for non-preset values.
    pub fn set_preset_size(&mut self, size: u32) -> bool {
        match BrushSize::preset(size) {
            Some(size) => {
                self.tool = self.tool.with_size(size);
                true
            }
            None => {
                log::debug!("Ignoring non-preset brush size {}", size);
                false
            }
        }
    }

    /// Apply a slider value, clamped into range.
    pub fn set_slider_size(&mut self, value: i64) {
        self.tool = self.tool.with_size(BrushSize::from_slider(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool() {
        let tool = Tool::default();
        assert_eq!(tool.kind, ToolKind::Pen);
        assert_eq!(tool.color.to_hex(), "#fbbf24");
        assert_eq!(tool.size.get(), 3);
    }

    #[test]
    fn test_tool_names_roundtrip() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.name().parse::<ToolKind>().unwrap(), kind);
        }
        assert_eq!("Eraser".parse::<ToolKind>().unwrap(), ToolKind::Eraser);
        assert!("lasso".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_tool_kind_serde() {
        let json = serde_json::to_string(&ToolKind::Inert(InertTool::Circle)).unwrap();
        assert_eq!(json, "\"circle\"");
        let kind: ToolKind = serde_json::from_str("\"move\"").unwrap();
        assert_eq!(kind, ToolKind::Inert(InertTool::Move));
    }

    #[test]
    fn test_pen_brush() {
        let brush = Tool::default().brush().unwrap();
        assert!(!brush.is_erase());
        assert!((brush.width() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_eraser_is_twice_as_wide() {
        let tool = Tool::default()
            .with_kind(ToolKind::Eraser)
            .with_size(BrushSize::new(8).unwrap());
        let brush = tool.brush().unwrap();
        assert!(brush.is_erase());
        assert!((brush.width() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inert_tools_have_no_brush() {
        for inert in [
            InertTool::Rectangle,
            InertTool::Circle,
            InertTool::Text,
            InertTool::Move,
        ] {
            assert!(Tool::default().with_kind(ToolKind::Inert(inert)).brush().is_none());
        }
    }

    #[test]
    fn test_only_move_skips_stroke() {
        for kind in ToolKind::ALL {
            let is_move = kind == ToolKind::Inert(InertTool::Move);
            assert_eq!(kind.starts_stroke(), !is_move);
            assert_eq!(kind.cursor() == CursorStyle::Move, is_move);
        }
    }

    #[test]
    fn test_brush_size_bounds() {
        assert!(BrushSize::new(0).is_none());
        assert!(BrushSize::new(17).is_none());
        assert_eq!(BrushSize::new(16).unwrap().get(), 16);

        assert!(BrushSize::preset(4).is_none());
        assert_eq!(BrushSize::preset(12).unwrap().get(), 12);

        assert_eq!(BrushSize::from_slider(-5).get(), 1);
        assert_eq!(BrushSize::from_slider(0).get(), 1);
        assert_eq!(BrushSize::from_slider(99).get(), 16);
        assert_eq!(BrushSize::from_slider(7).get(), 7);
    }

    #[test]
    fn test_brush_size_serde_rejects_zero() {
        assert!(serde_json::from_str::<BrushSize>("0").is_err());
        assert_eq!(serde_json::from_str::<BrushSize>("5").unwrap().get(), 5);
    }

    #[test]
    fn test_switching_kind_keeps_color_and_size() {
        let mut tm = ToolManager::new();
        tm.set_color(crate::palette::SWATCHES[3].color);
        assert!(tm.set_preset_size(12));
        tm.set_kind(ToolKind::Eraser);
        tm.set_kind(ToolKind::Pen);

        let tool = tm.current();
        assert_eq!(tool.color, crate::palette::SWATCHES[3].color);
        assert_eq!(tool.size.get(), 12);
    }

    #[test]
    fn test_non_preset_size_ignored() {
        let mut tm = ToolManager::new();
        assert!(!tm.set_preset_size(4));
        assert_eq!(tm.current().size.get(), 3);

        tm.set_slider_size(4);
        assert_eq!(tm.current().size.get(), 4);
    }

    #[test]
    fn test_tool_deserialize_with_defaults() {
        let tool: Tool = serde_json::from_str(r#"{"kind":"eraser"}"#).unwrap();
        assert_eq!(tool.kind, ToolKind::Eraser);
        assert_eq!(tool.color, DEFAULT_COLOR);
        assert_eq!(tool.size.get(), 3);
    }
}
