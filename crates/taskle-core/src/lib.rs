//! Taskle Whiteboard Core Library
//!
//! Platform-agnostic state and logic for the Taskle whiteboard: tools and
//! palette, presentation zoom, pointer input and the drawing session state machine.

pub mod color;
pub mod config;
pub mod input;
pub mod palette;
pub mod session;
pub mod tools;
pub mod viewport;

pub use color::{ColorParseError, SerializableColor};
pub use config::{ConfigError, WhiteboardConfig};
pub use input::PointerEvent;
pub use session::{DrawingSession, SessionState, StrokeSegment};
pub use tools::{Brush, BrushSize, CursorStyle, InertTool, Tool, ToolKind, ToolManager};
pub use viewport::Viewport;
