use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::style::insets::InsetKind;

/// Light/dark selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Named window chrome preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStyle {
    /// Standard title bar with centered title.
    #[default]
    TitleBar,
    /// No title bar; content reaches the top edge.
    HiddenTitleBar,
    /// Unified title bar + toolbar (taller inset, rounder corners).
    ToolBar,
    /// Hidden title bar with a caller-chosen corner radius (not validated).
    Custom(f64),
}

impl WindowStyle {
    pub const PRESETS: [Self; 3] = [Self::TitleBar, Self::HiddenTitleBar, Self::ToolBar];

    pub fn corner_radius(self) -> f64 {
        match self {
            Self::TitleBar | Self::HiddenTitleBar => 16.0,
            Self::ToolBar => 26.0,
            Self::Custom(r) => r,
        }
    }

    /// Which measured inset this style reserves at the top, if any.
    pub fn inset_kind(self) -> Option<InsetKind> {
        match self {
            Self::TitleBar => Some(InsetKind::TitleBar),
            Self::ToolBar => Some(InsetKind::ToolBar),
            Self::HiddenTitleBar | Self::Custom(_) => None,
        }
    }

    pub fn shows_title_bar(self) -> bool {
        self.inset_kind().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::TitleBar => "Title Bar",
            Self::HiddenTitleBar => "Hidden",
            Self::ToolBar => "Toolbar",
            Self::Custom(_) => "Custom",
        }
    }
}

/// Window sizing mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSize {
    /// Exact outer frame size in points. Zero/negative values pass through.
    Fixed { width: f64, height: f64 },
    /// Frame hugs the content's intrinsic size plus the style's top inset.
    #[default]
    FitContent,
}

/// Blur strength of a material background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialIntensity {
    UltraThin,
    Thin,
    Regular,
    Thick,
    UltraThick,
}

impl MaterialIntensity {
    pub fn blur_radius(self) -> f64 {
        match self {
            Self::UltraThin => 8.0,
            Self::Thin => 12.0,
            Self::Regular => 18.0,
            Self::Thick => 24.0,
            Self::UltraThick => 30.0,
        }
    }

    pub fn tint_alpha(self) -> f64 {
        match self {
            Self::UltraThin => 0.25,
            Self::Thin => 0.35,
            Self::Regular => 0.5,
            Self::Thick => 0.65,
            Self::UltraThick => 0.8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UltraThin => "Ultra Thin",
            Self::Thin => "Thin",
            Self::Regular => "Regular",
            Self::Thick => "Thick",
            Self::UltraThick => "Ultra Thick",
        }
    }
}

/// Strength of a glass background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassIntensity {
    Clear,
    Regular,
}

impl GlassIntensity {
    pub fn blur_radius(self) -> f64 {
        match self {
            Self::Clear => 4.0,
            Self::Regular => 10.0,
        }
    }

    pub fn tint_alpha(self) -> f64 {
        match self {
            Self::Clear => 0.08,
            Self::Regular => 0.18,
        }
    }
}

/// Fill drawn behind the content. The modes are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    /// Opaque window background color.
    #[default]
    SystemDefault,
    /// Backdrop blur at the given intensity; `None` draws nothing at all.
    Material(Option<MaterialIntensity>),
    /// Light backdrop blur with a faint tint, sheen and specular rim.
    Glass(GlassIntensity),
}

impl BackgroundStyle {
    /// Option cycle offered by the background control.
    pub const CYCLE: [Self; 6] = [
        Self::SystemDefault,
        Self::Material(Some(MaterialIntensity::Regular)),
        Self::Material(Some(MaterialIntensity::Thin)),
        Self::Glass(GlassIntensity::Regular),
        Self::Glass(GlassIntensity::Clear),
        Self::Material(None),
    ];

    pub fn is_transparent(self) -> bool {
        matches!(self, Self::Material(None))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SystemDefault => "Default",
            Self::Material(Some(i)) => i.name(),
            Self::Material(None) => "None",
            Self::Glass(GlassIntensity::Regular) => "Glass",
            Self::Glass(GlassIntensity::Clear) => "Clear Glass",
        }
    }
}

/// Opaque window background color for [`BackgroundStyle::SystemDefault`].
pub fn system_window_color(appearance: Appearance) -> Color {
    match appearance {
        Appearance::Light => Color::hex(0xECECEC),
        Appearance::Dark => Color::hex(0x282828),
    }
}

/// Tint layered over a material or glass backdrop blur.
pub fn material_tint(appearance: Appearance) -> Color {
    match appearance {
        Appearance::Light => Color::hex(0xF6F6F6),
        Appearance::Dark => Color::hex(0x1E1E1E),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/window.rs"]
mod tests;
