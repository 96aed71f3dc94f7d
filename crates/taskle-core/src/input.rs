//! Pointer events delivered by the display surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in surface coordinates. Events arrive strictly ordered as
/// `Down`, zero or more `Move`, then `Up` or `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    /// Pointer left the surface; ends the stroke like `Up`.
    Leave,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        PointerEvent::Down {
            position: Point::new(x, y),
        }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    /// Apply `f` to the position of `Down` and `Move`; releases pass through.
    pub fn map_position(self, f: impl FnOnce(Point) -> Point) -> Self {
        match self {
            PointerEvent::Down { position } => PointerEvent::Down {
                position: f(position),
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: f(position),
            },
            release => release,
        }
    }
}
