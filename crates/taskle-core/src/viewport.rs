//! Viewport module for presentation zoom.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom level that corresponds to "100%" in the UI.
pub const DEFAULT_ZOOM: u16 = 100;
/// Minimum zoom percentage.
pub const MIN_ZOOM: u16 = 50;
/// Maximum zoom percentage.
pub const MAX_ZOOM: u16 = 200;
/// Increment applied by a single zoom in/out.
pub const ZOOM_STEP: u16 = 25;

/// Viewport holds the zoom level of the canvas presentation.
///
/// Zoom is a pure view concern: it scales how the surface is shown inside its
/// container and never touches the pixels of the surface itself. The scale is
/// applied around the container center, with the surface centered in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current zoom level in percent (`MIN_ZOOM..=MAX_ZOOM`).
    zoom: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }
}

impl Viewport {
    /// Create a viewport at 100%.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom percentage.
    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    /// Zoom as a scale factor (`zoom / 100`).
    pub fn scale(&self) -> f64 {
        f64::from(self.zoom) / 100.0
    }

    /// Zoom in by one step, clamped at `MAX_ZOOM`. Returns the new zoom.
    pub fn zoom_in(&mut self) -> u16 {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        log::debug!("Zoom {}%", self.zoom);
        self.zoom
    }

    /// Zoom out by one step, clamped at `MIN_ZOOM`. Returns the new zoom.
    pub fn zoom_out(&mut self) -> u16 {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
        log::debug!("Zoom {}%", self.zoom);
        self.zoom
    }

    /// Reset zoom to 100%.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
    }

    /// Zoom label shown in the toolbar, e.g. "125%".
    pub fn label(&self) -> String {
        format!("{}%", self.zoom)
    }

    /// Get the affine transform for presentation.
    ///
    /// This transform converts surface coordinates to container (screen) coordinates.
    pub fn transform(&self, surface: Size, container: Size) -> Affine {
        let container_center = Vec2::new(container.width / 2.0, container.height / 2.0);
        let surface_center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        Affine::translate(container_center)
            * Affine::scale(self.scale())
            * Affine::translate(-surface_center)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts container (screen) coordinates to surface coordinates.
    pub fn inverse_transform(&self, surface: Size, container: Size) -> Affine {
        let container_center = Vec2::new(container.width / 2.0, container.height / 2.0);
        let surface_center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        Affine::translate(surface_center)
            * Affine::scale(1.0 / self.scale())
            * Affine::translate(-container_center)
    }

    /// Convert a container point to surface coordinates.
    pub fn screen_to_surface(&self, screen_point: Point, surface: Size, container: Size) -> Point {
        self.inverse_transform(surface, container) * screen_point
    }

    /// Convert a surface point to container coordinates.
    pub fn surface_to_screen(&self, surface_point: Point, surface: Size, container: Size) -> Point {
        self.transform(surface, container) * surface_point
    }
}
