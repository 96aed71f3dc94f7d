//! Whiteboard session container.

use crate::ui::UiAction;
use kurbo::Size;
use taskle_core::{
    ConfigError, DrawingSession, PointerEvent, SerializableColor, Tool, ToolKind, ToolManager,
    Viewport, WhiteboardConfig,
};
use taskle_render::{RasterSurface, Renderer, RendererError};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Window error: {0}")]
    Window(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// A PNG export ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Owns everything a drawing view needs: the tool, zoom, the in-progress
/// stroke and the surface itself.
///
/// The surface only exists while the view is mounted. Operations that need
/// it are skipped silently before `mount` and after `unmount`.
#[derive(Debug)]
pub struct Whiteboard<R: Renderer = RasterSurface> {
    config: WhiteboardConfig,
    tools: ToolManager,
    viewport: Viewport,
    session: DrawingSession,
    surface: Option<R>,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new(WhiteboardConfig::default())
    }
}

impl Whiteboard {
    /// Create the surface and fill it with the background. Only the first
    /// call after construction (or after `unmount`) does anything.
    pub fn mount(&mut self) -> AppResult<()> {
        if self.surface.is_none() {
            let surface = RasterSurface::from_config(&self.config)?;
            self.mount_with(surface);
        }
        Ok(())
    }
}

impl<R: Renderer> Whiteboard<R> {
    /// Create an unmounted whiteboard.
    pub fn new(config: WhiteboardConfig) -> Self {
        Self {
            tools: ToolManager::with_tool(config.default_tool),
            config,
            viewport: Viewport::new(),
            session: DrawingSession::new(),
            surface: None,
        }
    }

    /// Attach an already-initialized surface, unless one is mounted.
    pub fn mount_with(&mut self, surface: R) {
        if self.surface.is_some() {
            return;
        }
        let size = surface.size();
        log::info!("Whiteboard mounted ({}x{})", size.width, size.height);
        self.surface = Some(surface);
    }

    /// Drop the surface. All drawing is lost, and the tool and zoom go back
    /// to their defaults.
    pub fn unmount(&mut self) -> Option<R> {
        self.session.reset();
        self.tools = ToolManager::with_tool(self.config.default_tool);
        self.viewport.reset();
        let surface = self.surface.take();
        if surface.is_some() {
            log::info!("Whiteboard unmounted");
        }
        surface
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tools.current()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn surface(&self) -> Option<&R> {
        self.surface.as_ref()
    }

    /// Size of the mounted surface, or the configured size before mounting.
    pub fn surface_size(&self) -> Size {
        self.surface
            .as_ref()
            .map_or_else(|| self.config.surface_size(), |surface| surface.size())
    }

    /// Feed a pointer event in surface coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let tool = self.tools.current();
        let Some(segment) = self.session.handle(event, &tool) else {
            return;
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.paint_segment(&segment);
        }
    }

    /// Feed a pointer event captured on the zoomed presentation.
    ///
    /// `container` is the size of the area the surface is centered in.
    pub fn handle_screen_pointer(&mut self, event: PointerEvent, container: Size) {
        let surface = self.surface_size();
        let viewport = self.viewport;
        let event = event.map_position(|p| viewport.screen_to_surface(p, surface, container));
        self.handle_pointer(event);
    }

    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tools.set_kind(kind);
    }

    pub fn set_color(&mut self, color: SerializableColor) {
        self.tools.set_color(color);
    }

    /// Repaint the surface with the background, discarding every stroke.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Encode the surface as PNG. `None` when nothing is mounted.
    pub fn export(&self) -> AppResult<Option<ExportedImage>> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(None);
        };
        let png = surface.encode_png()?;
        Ok(Some(ExportedImage {
            file_name: self.config.export_file_name.clone(),
            png,
        }))
    }

    /// Dispatch a toolbar action. Returns the export for [`UiAction::Export`].
    pub fn apply(&mut self, action: UiAction) -> AppResult<Option<ExportedImage>> {
        match action {
            UiAction::SetTool(kind) => self.set_tool(kind),
            UiAction::SetColor(color) => self.set_color(color),
            UiAction::SetSize(size) => {
                self.tools.set_preset_size(size);
            }
            UiAction::SetSizeSlider(value) => self.tools.set_slider_size(value),
            UiAction::ZoomIn => {
                self.viewport.zoom_in();
            }
            UiAction::ZoomOut => {
                self.viewport.zoom_out();
            }
            UiAction::ZoomReset => self.viewport.reset(),
            UiAction::Clear => self.clear(),
            UiAction::Export => return self.export(),
            UiAction::Undo | UiAction::Redo | UiAction::Import => {
                log::warn!("'{}' is not implemented", action.name());
            }
        }
        Ok(None)
    }
}
