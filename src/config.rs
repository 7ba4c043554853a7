//! JSON configuration for a framed window.
//!
//! ```json
//! {
//!   "size": { "fixed": { "width": 500, "height": 350 } },
//!   "style": "tool_bar",
//!   "background": { "glass": "regular" },
//!   "title": "Preview",
//!   "wallpaper": { "style": "sunset", "appearance": "dark" },
//!   "content": { "kind": "image", "path": "shot.png" }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compose::chrome::WindowChrome;
use crate::compose::content::Content;
use crate::foundation::color::Color;
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::style::window::{Appearance, BackgroundStyle, WindowSize, WindowStyle};
use crate::wallpaper::palette::WallpaperStyle;

/// Serializable description of a [`WindowChrome`] and the ambient it is rendered under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChromeConfig {
    #[serde(default)]
    pub size: WindowSize,
    #[serde(default)]
    pub style: WindowStyle,
    #[serde(default)]
    pub background: BackgroundStyle,
    #[serde(default = "default_true")]
    pub traffic_lights: bool,
    #[serde(default)]
    pub title: Option<String>,
    /// Pinned window appearance; unset follows `ambient`.
    #[serde(default)]
    pub appearance: Option<Appearance>,
    #[serde(default)]
    pub wallpaper: WallpaperConfig,
    /// Appearance of the surrounding environment.
    #[serde(default)]
    pub ambient: Appearance,
    pub content: ContentConfig,
    #[serde(default)]
    pub custom_wallpaper: Option<ContentConfig>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WallpaperConfig {
    #[serde(default)]
    pub style: WallpaperStyle,
    #[serde(default)]
    pub appearance: Option<Appearance>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ContentConfig {
    Solid { width: f64, height: f64, color: Color },
    /// Image file; relative paths resolve against the assets root.
    Image { path: PathBuf },
}

fn default_true() -> bool {
    true
}

impl ContentConfig {
    fn load(&self, assets_root: &Path) -> ChromeResult<Content> {
        match self {
            Self::Solid {
                width,
                height,
                color,
            } => {
                if !width.is_finite() || !height.is_finite() {
                    return Err(ChromeError::config("solid content size must be finite"));
                }
                Ok(Content::solid(*width, *height, *color))
            }
            Self::Image { path } => {
                let resolved = if path.is_absolute() {
                    path.clone()
                } else {
                    assets_root.join(path)
                };
                Content::load_image(&resolved).map_err(|e| {
                    ChromeError::config(format!("load image '{}': {e}", resolved.display()))
                })
            }
        }
    }
}

impl ChromeConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ChromeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChromeError::serde(format!("parse chrome config JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> ChromeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ChromeError::serde(format!("parse chrome config JSON: {e}")))
    }

    /// Read a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> ChromeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChromeError::config(format!("open chrome config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build the configured chrome, loading image content relative to `assets_root`.
    pub fn into_chrome(self, assets_root: impl AsRef<Path>) -> ChromeResult<WindowChrome> {
        let root = assets_root.as_ref();
        let mut chrome = WindowChrome::new(self.content.load(root)?)
            .size(self.size)
            .style(self.style)
            .background(self.background)
            .traffic_lights(self.traffic_lights)
            .appearance(self.appearance)
            .wallpaper(self.wallpaper.style, self.wallpaper.appearance);
        if let Some(title) = self.title {
            chrome = chrome.title(title);
        }
        if let Some(custom) = &self.custom_wallpaper {
            chrome = chrome.custom_wallpaper(custom.load(root)?);
        }
        Ok(chrome)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
