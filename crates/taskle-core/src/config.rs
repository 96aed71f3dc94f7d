//! Whiteboard configuration.

use crate::color::SerializableColor;
use crate::palette::BACKGROUND;
use crate::tools::Tool;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: u32 = 800;
/// File name offered for PNG exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "whiteboard.png";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Export file name must not be empty")]
    EmptyExportName,
    #[error("Export file name {0:?} must be a plain file name")]
    InvalidExportName(String),
}

/// Whether `name` names a file directly inside a directory: no separators,
/// no `.`/`..`.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Settings for a whiteboard session. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    pub title: String,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Fill used on mount and clear.
    pub background: SerializableColor,
    /// Tool selected when the session starts.
    pub default_tool: Tool,
    pub export_file_name: String,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            title: "Project Whiteboard".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: BACKGROUND,
            default_tool: Tool::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl WhiteboardConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::EmptyExportName);
        }
        if !is_plain_file_name(&self.export_file_name) {
            return Err(ConfigError::InvalidExportName(self.export_file_name.clone()));
        }
        Ok(())
    }

    pub fn surface_size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolKind;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WhiteboardConfig::default();
        assert_eq!((config.width, config.height), (1200, 800));
        assert_eq!(config.background.to_hex(), "#1f2937");
        assert_eq!(config.export_file_name, "whiteboard.png");
        assert_eq!(config.default_tool, Tool::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WhiteboardConfig::from_json(
            r##"{"background":"#000000","default_tool":{"kind":"eraser","size":8}}"##,
        )
        .unwrap();
        assert_eq!(config.background, SerializableColor::black());
        assert_eq!(config.default_tool.kind, ToolKind::Eraser);
        assert_eq!(config.default_tool.size.get(), 8);
        assert_eq!(config.width, 1200);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{"width":0}"#),
            Err(ConfigError::InvalidSize { width: 0, .. })
        ));
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{"export_file_name":" "}"#),
            Err(ConfigError::EmptyExportName)
        ));
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{"default_tool":{"size":0}}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_export_name_must_stay_in_output_dir() {
        for name in ["../x.png", "out/whiteboard.png", "..\\x.png", "/tmp/x.png", ".."] {
            let json = serde_json::json!({ "export_file_name": name }).to_string();
            assert!(
                matches!(
                    WhiteboardConfig::from_json(&json),
                    Err(ConfigError::InvalidExportName(_))
                ),
                "{name}"
            );
        }
        let config = WhiteboardConfig::from_json(r#"{"export_file_name":"board.v2.png"}"#).unwrap();
        assert_eq!(config.export_file_name, "board.v2.png");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title":"Sprint planning","height":600}}"#).unwrap();

        let config = WhiteboardConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Sprint planning");
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WhiteboardConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
