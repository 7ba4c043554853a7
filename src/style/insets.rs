//! Top insets reserved by title bar styles.
//!
//! The simulated chrome should match the proportions of a real window manager.
//! Insets are calibrated once per process from the host environment and cached;
//! callers that need different geometry (tests, other platforms) inject their own
//! [`InsetProvider`].

use std::sync::OnceLock;

use crate::style::window::WindowStyle;

/// Kinds of top inset a window style can reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsetKind {
    TitleBar,
    ToolBar,
}

impl InsetKind {
    /// Environment variable consulted when calibrating this inset.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::TitleBar => "CHROMESHOT_TITLE_BAR_INSET",
            Self::ToolBar => "CHROMESHOT_TOOLBAR_INSET",
        }
    }
}

/// Source of top-inset geometry for title bar styles.
pub trait InsetProvider: std::fmt::Debug + Send + Sync {
    fn top_inset(&self, kind: InsetKind) -> f64;
}

/// Fixed inset constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedInsets {
    pub title_bar: f64,
    pub toolbar: f64,
}

impl FixedInsets {
    /// Desktop title bar heights: 28pt for a plain title bar, 52pt for a title bar
    /// merged with a toolbar (the macOS unified toolbar window style since 11.0).
    /// Hosts without comparable chrome use these as tuned constants.
    pub const PLATFORM: Self = Self {
        title_bar: 28.0,
        toolbar: 52.0,
    };
}

impl Default for FixedInsets {
    fn default() -> Self {
        Self::PLATFORM
    }
}

impl InsetProvider for FixedInsets {
    fn top_inset(&self, kind: InsetKind) -> f64 {
        match kind {
            InsetKind::TitleBar => self.title_bar,
            InsetKind::ToolBar => self.toolbar,
        }
    }
}

static TITLE_BAR_INSET: OnceLock<f64> = OnceLock::new();
static TOOLBAR_INSET: OnceLock<f64> = OnceLock::new();

/// Process-wide insets, calibrated lazily on first access and never invalidated.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalibratedInsets;

impl InsetProvider for CalibratedInsets {
    fn top_inset(&self, kind: InsetKind) -> f64 {
        let cell = match kind {
            InsetKind::TitleBar => &TITLE_BAR_INSET,
            InsetKind::ToolBar => &TOOLBAR_INSET,
        };
        *cell.get_or_init(|| {
            let raw = std::env::var(kind.env_var()).ok();
            let v = calibrate(raw.as_deref(), FixedInsets::PLATFORM.top_inset(kind));
            tracing::debug!(?kind, inset = v, "calibrated chrome inset");
            v
        })
    }
}

/// Parse a measured inset, falling back when it is missing or not a positive finite number.
pub(crate) fn calibrate(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(fallback)
}

/// Top inset reserved by `style`, zero for styles without a title bar.
pub fn top_inset_for(style: WindowStyle, provider: &dyn InsetProvider) -> f64 {
    style
        .inset_kind()
        .map(|kind| provider.top_inset(kind))
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/style/insets.rs"]
mod tests;
