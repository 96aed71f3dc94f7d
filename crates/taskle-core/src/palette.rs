//! Fixed toolbar palette: color swatches, brush size presets and the canvas background.
//!
//! Colors are taken from the Tailwind CSS palette used by the rest of the Taskle UI.

use crate::color::SerializableColor;

/// A named color swatch shown in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Tailwind name (e.g. "yellow-400").
    pub name: &'static str,
    pub color: SerializableColor,
}

impl Swatch {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: SerializableColor::rgb(r, g, b),
        }
    }
}

/// Swatches in toolbar order. The first entry is the default pen color.
pub const SWATCHES: [Swatch; 10] = [
    Swatch::new("yellow-400", 0xfb, 0xbf, 0x24),
    Swatch::new("white", 0xff, 0xff, 0xff),
    Swatch::new("black", 0x00, 0x00, 0x00),
    Swatch::new("red-500", 0xef, 0x44, 0x44),
    Swatch::new("blue-500", 0x3b, 0x82, 0xf6),
    Swatch::new("green-500", 0x10, 0xb9, 0x81),
    Swatch::new("purple-500", 0x8b, 0x5c, 0xf6),
    Swatch::new("orange-500", 0xf9, 0x73, 0x16),
    Swatch::new("pink-500", 0xec, 0x48, 0x99),
    Swatch::new("cyan-500", 0x06, 0xb6, 0xd4),
];

/// Default pen color (yellow-400).
pub const DEFAULT_COLOR: SerializableColor = SWATCHES[0].color;

/// Canvas background (gray-800).
pub const BACKGROUND: SerializableColor = SerializableColor::rgb(0x1f, 0x29, 0x37);

/// Brush size presets offered as toolbar buttons.
pub const SIZE_PRESETS: [u32; 7] = [1, 2, 3, 5, 8, 12, 16];

/// Slider lower bound.
pub const MIN_SIZE: u32 = 1;
/// Slider upper bound.
pub const MAX_SIZE: u32 = 16;

/// Index of the swatch with the given color, if it is part of the palette.
pub fn swatch_index(color: SerializableColor) -> Option<usize> {
    SWATCHES.iter().position(|s| s.color == color)
}

/// The swatch after `color` in toolbar order, wrapping around.
/// Colors outside the palette continue from the first swatch.
pub fn next_swatch(color: SerializableColor) -> &'static Swatch {
    let next = swatch_index(color).map_or(0, |i| (i + 1) % SWATCHES.len());
    &SWATCHES[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_yellow() {
        assert_eq!(DEFAULT_COLOR.to_hex(), "#fbbf24");
        assert_eq!(BACKGROUND.to_hex(), "#1f2937");
    }

    #[test]
    fn test_presets_within_slider_range() {
        for size in SIZE_PRESETS {
            assert!((MIN_SIZE..=MAX_SIZE).contains(&size));
        }
        assert!(SIZE_PRESETS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_swatch_lookup() {
        let red = SWATCHES[3];
        assert_eq!((red.name, red.color.to_hex().as_str()), ("red-500", "#ef4444"));
        assert_eq!(swatch_index(red.color), Some(3));
        assert_eq!(swatch_index(SerializableColor::rgb(1, 2, 3)), None);
    }

    #[test]
    fn test_next_swatch_wraps() {
        assert_eq!(next_swatch(DEFAULT_COLOR).name, "white");
        assert_eq!(next_swatch(SWATCHES[9].color).name, "yellow-400");
        assert_eq!(next_swatch(SerializableColor::rgb(1, 2, 3)).name, "yellow-400");
    }
}
