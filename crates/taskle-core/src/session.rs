//! Drawing session state machine.
//!
//! Turns the ordered pointer event stream into stroke segments. The tool is
//! passed in on every event, so a tool change in the middle of a gesture
//! applies from the next segment on.

use crate::input::PointerEvent;
use crate::tools::{Brush, Tool};
use kurbo::Point;

/// State of a drawing interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    /// No pointer button is held over the surface.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// End of the last painted segment (or the pointer-down position).
        last: Point,
    },
}

/// A straight piece of a stroke, ready to be composited.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    pub brush: Brush,
}

/// Tracks whether a stroke is in progress and where it currently ends.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: SessionState,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SessionState::Drawing { .. })
    }

    pub fn last_point(&self) -> Option<Point> {
        match self.state {
            SessionState::Drawing { last } => Some(last),
            SessionState::Idle => None,
        }
    }

    /// Abandon any stroke in progress.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Advance the state machine by one event.
    ///
    /// Returns the segment to paint, if any. Pointer-down never paints, so a
    /// stroke made of a single point leaves no mark.
    pub fn handle(&mut self, event: PointerEvent, tool: &Tool) -> Option<StrokeSegment> {
        match event {
            PointerEvent::Down { position } => {
                if tool.kind.starts_stroke() {
                    self.state = SessionState::Drawing { last: position };
                }
                None
            }
            PointerEvent::Move { position } => {
                let SessionState::Drawing { last } = self.state else {
                    return None;
                };
                if position == last {
                    return None;
                }
                self.state = SessionState::Drawing { last: position };

                let segment = tool.brush().map(|brush| StrokeSegment {
                    from: last,
                    to: position,
                    brush,
                });
                if let Some(segment) = &segment {
                    log::trace!(
                        "Segment {:?} -> {:?} ({:?})",
                        segment.from,
                        segment.to,
                        segment.brush
                    );
                }
                segment
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.state = SessionState::Idle;
                None
            }
        }
    }
}
