//! Hand-tuned wallpaper palettes.
//!
//! Lookup is a pure function of `(WallpaperStyle, Appearance)`. Styles without a
//! gradient palette resolve to [`Palette::NEUTRAL`].

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::style::window::Appearance;

/// Named wallpaper preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallpaperStyle {
    #[default]
    Ocean,
    Sunset,
    Meadow,
    /// One flat fill keyed by appearance.
    Solid,
    /// White left half, black right half.
    HighContrast,
}

impl WallpaperStyle {
    pub const ALL: [Self; 5] = [
        Self::Ocean,
        Self::Sunset,
        Self::Meadow,
        Self::Solid,
        Self::HighContrast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
            Self::Meadow => "Meadow",
            Self::Solid => "Solid",
            Self::HighContrast => "Contrast",
        }
    }
}

/// Color of one wallpaper shape and the opacity the whole shape is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShapeColor {
    pub color: Color,
    pub opacity: f32,
}

const fn sc(rgb: u32, opacity: f32) -> ShapeColor {
    ShapeColor {
        color: Color::hex(rgb),
        opacity,
    }
}

/// Resolved colors for one `(style, appearance)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Palette {
    /// Diagonal base gradient, top-leading first.
    pub base: [Color; 2],
    /// Shape colors in paint order.
    pub shapes: [ShapeColor; 5],
}

impl Palette {
    /// Uniform gray fallback.
    pub const NEUTRAL: Self = Self {
        base: [Color::hex(0xB4B4B8), Color::hex(0x8E8E93)],
        shapes: [
            sc(0x9A9A9F, 0.6),
            sc(0x9A9A9F, 0.6),
            sc(0x9A9A9F, 0.6),
            sc(0x9A9A9F, 0.6),
            sc(0x9A9A9F, 0.6),
        ],
    };

    const OCEAN_LIGHT: Self = Self {
        base: [Color::hex(0xA8D8F0), Color::hex(0x3A7BD5)],
        shapes: [
            sc(0x1E90FF, 0.75),
            sc(0x00B4D8, 0.65),
            sc(0x0077B6, 0.70),
            sc(0x48CAE4, 0.60),
            sc(0x023E8A, 0.55),
        ],
    };

    const OCEAN_DARK: Self = Self {
        base: [Color::hex(0x0B1D3A), Color::hex(0x03045E)],
        shapes: [
            sc(0x1565C0, 0.80),
            sc(0x00838F, 0.70),
            sc(0x283593, 0.75),
            sc(0x0097A7, 0.60),
            sc(0x1A237E, 0.85),
        ],
    };

    const SUNSET_LIGHT: Self = Self {
        base: [Color::hex(0xFFD6A5), Color::hex(0xFF7E5F)],
        shapes: [
            sc(0xFF6B6B, 0.70),
            sc(0xFFA94D, 0.65),
            sc(0xF06595, 0.60),
            sc(0xFFD43B, 0.55),
            sc(0xE8590C, 0.75),
        ],
    };

    const SUNSET_DARK: Self = Self {
        base: [Color::hex(0x2D1B3D), Color::hex(0x5C2A3F)],
        shapes: [
            sc(0xC2185B, 0.75),
            sc(0xE65100, 0.70),
            sc(0x7B1FA2, 0.65),
            sc(0xF57C00, 0.60),
            sc(0xAD1457, 0.80),
        ],
    };

    const MEADOW_LIGHT: Self = Self {
        base: [Color::hex(0xD8F3DC), Color::hex(0x74C69D)],
        shapes: [
            sc(0x40916C, 0.70),
            sc(0x95D5B2, 0.60),
            sc(0x2D6A4F, 0.75),
            sc(0xB7E4C7, 0.55),
            sc(0x52B788, 0.65),
        ],
    };

    const MEADOW_DARK: Self = Self {
        base: [Color::hex(0x081C15), Color::hex(0x1B4332)],
        shapes: [
            sc(0x2D6A4F, 0.80),
            sc(0x40916C, 0.70),
            sc(0x1B4332, 0.85),
            sc(0x52B788, 0.60),
            sc(0x74C69D, 0.50),
        ],
    };
}

pub fn palette(style: WallpaperStyle, appearance: Appearance) -> Palette {
    match (style, appearance) {
        (WallpaperStyle::Ocean, Appearance::Light) => Palette::OCEAN_LIGHT,
        (WallpaperStyle::Ocean, Appearance::Dark) => Palette::OCEAN_DARK,
        (WallpaperStyle::Sunset, Appearance::Light) => Palette::SUNSET_LIGHT,
        (WallpaperStyle::Sunset, Appearance::Dark) => Palette::SUNSET_DARK,
        (WallpaperStyle::Meadow, Appearance::Light) => Palette::MEADOW_LIGHT,
        (WallpaperStyle::Meadow, Appearance::Dark) => Palette::MEADOW_DARK,
        _ => Palette::NEUTRAL,
    }
}

/// Flat fill used by [`WallpaperStyle::Solid`].
pub fn solid_fill(appearance: Appearance) -> Color {
    match appearance {
        Appearance::Light => Color::hex(0xECECEE),
        Appearance::Dark => Color::hex(0x1C1C1E),
    }
}

/// Two-stop shape gradient: 35% toward white, then 30% toward black.
///
/// Only lightness moves, so every shape keeps its hue.
pub fn gradient_stops(color: Color) -> [Color; 2] {
    [color.mix(Color::WHITE, 0.35), color.mix(Color::BLACK, 0.30)]
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/palette.rs"]
mod tests;
