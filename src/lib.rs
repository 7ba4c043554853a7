//! chromeshot renders a simulated desktop window around a UI fragment.
//!
//! A [`WindowChrome`] frames caller-supplied [`Content`] with a title bar, traffic lights,
//! border highlights, a drop shadow, a background material and a procedurally generated
//! wallpaper, then rasterizes the result headlessly.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `WindowChrome + Appearance -> Scene` (a layered node tree)
//! 2. **Compile**: `Scene -> RenderPlan` (passes over explicit canvas-sized surfaces)
//! 3. **Render**: `RenderPlan -> FrameRGBA` (CPU backend, premultiplied RGBA8)
//! 4. **Encode**: `FrameRGBA -> PNG`
//!
//! Composing never fails and is deterministic: the same configuration yields an equal
//! scene with an equal [`SceneFingerprint`].
//!
//! ```no_run
//! use chromeshot::{
//!     Appearance, BackgroundStyle, Color, Content, GlassIntensity, RenderSettings, WindowChrome,
//!     WindowSize, WindowStyle,
//! };
//!
//! let frame = WindowChrome::new(Content::solid(480.0, 300.0, Color::hex(0xFAFAFA)))
//!     .size(WindowSize::Fixed { width: 500.0, height: 350.0 })
//!     .style(WindowStyle::ToolBar)
//!     .background(BackgroundStyle::Glass(GlassIntensity::Regular))
//!     .title("Preview")
//!     .render(Appearance::Light, &RenderSettings::default())?;
//! frame.save_png("preview.png")?;
//! # Ok::<(), chromeshot::ChromeError>(())
//! ```
#![forbid(unsafe_code)]

mod compile;
mod compose;
mod config;
mod foundation;
mod render;
mod scene;
mod style;
mod wallpaper;

pub use compile::plan::{
    CompositeOp, CompositePass, DrawOp, GradientSpec, MaskGenPass, OffscreenPass, Pass, PassFx,
    PixelFormat, PlanPaint, RenderPlan, ScenePass, SurfaceDesc, SurfaceId, compile_scene,
};
pub use compose::chrome::{
    ChromeGeometry, OUTER_PADDING, TRAFFIC_LIGHT_COLORS, WallpaperSource, WindowChrome,
};
pub use compose::content::Content;
pub use compose::controls::{ControlKind, ControlSegment, ControlState, ControlStrip};
pub use config::{ChromeConfig, ContentConfig, WallpaperConfig};
pub use foundation::color::Color;
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Size, Vec2};
pub use foundation::error::{ChromeError, ChromeResult};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::blur::blur_rgba8_premul;
pub use render::composite::{masked_out_in_place, masked_over_in_place, over, over_in_place};
pub use render::cpu::CpuBackend;
pub use render::passes::{PassBackend, execute_plan};
pub use render::pipeline::{render_scene, render_scene_with};
pub use scene::fingerprint::SceneFingerprint;
pub use scene::model::{LayerRole, Node, Paint, Scene, Shape, ShapeKind};
pub use style::insets::{CalibratedInsets, FixedInsets, InsetKind, InsetProvider, top_inset_for};
pub use style::window::{
    Appearance, BackgroundStyle, GlassIntensity, MaterialIntensity, WindowSize, WindowStyle,
    material_tint, system_window_color,
};
pub use wallpaper::generator::{WallpaperGenerator, shape_layout};
pub use wallpaper::palette::{
    Palette, ShapeColor, WallpaperStyle, gradient_stops, palette, solid_fill,
};
