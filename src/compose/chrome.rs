use std::sync::Arc;

use crate::compose::content::Content;
use crate::compose::controls::{ControlKind, ControlState, ControlStrip, next_in};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point, Rect, Size, Vec2};
use crate::foundation::error::ChromeResult;
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::scene::model::{LayerRole, Node, Paint, Scene, Shape};
use crate::style::insets::{CalibratedInsets, InsetProvider, top_inset_for};
use crate::style::window::{
    Appearance, BackgroundStyle, WindowSize, WindowStyle, material_tint, system_window_color,
};
use crate::wallpaper::generator::WallpaperGenerator;
use crate::wallpaper::palette::WallpaperStyle;

/// Space between the window frame and the canvas edge.
pub const OUTER_PADDING: f64 = 60.0;

const SHADOW_BLUR: f64 = 22.0;
const SHADOW_OFFSET_Y: f64 = 12.0;

const LIGHT_DIAMETER: f64 = 12.0;
const LIGHT_FIRST_X: f64 = 20.0;
const LIGHT_SPACING: f64 = 20.0;
const STANDALONE_LIGHT_Y: f64 = 20.0;
pub const TRAFFIC_LIGHT_COLORS: [Color; 3] = [
    Color::hex(0xFF6159),
    Color::hex(0xFFC740),
    Color::hex(0x26CC40),
];

const TITLE_FONT_SIZE: f64 = 13.0;
const GLASS_SHEEN_FRACTION: f64 = 0.4;

/// Where the wallpaper layer comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum WallpaperSource {
    Generated(WallpaperGenerator),
    Custom(Content),
}

/// Resolved window geometry in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeGeometry {
    pub canvas: Canvas,
    /// Outer window frame.
    pub window: Rect,
    pub corner_radius: f64,
    pub top_inset: f64,
    /// Area below the title bar inset.
    pub content: Rect,
}

/// Simulated desktop window around a content fragment.
///
/// Setters consume and return the value, so a configured chrome can be cloned and
/// branched freely.
#[derive(Clone, Debug)]
pub struct WindowChrome {
    content: Content,
    size: WindowSize,
    style: WindowStyle,
    background: BackgroundStyle,
    traffic_lights: bool,
    title: Option<String>,
    appearance: Option<Appearance>,
    wallpaper: WallpaperSource,
    insets: Arc<dyn InsetProvider>,
}

impl WindowChrome {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            size: WindowSize::default(),
            style: WindowStyle::default(),
            background: BackgroundStyle::default(),
            traffic_lights: true,
            title: None,
            appearance: None,
            wallpaper: WallpaperSource::Generated(WallpaperGenerator::default()),
            insets: Arc::new(CalibratedInsets),
        }
    }

    #[must_use]
    pub fn size(mut self, size: WindowSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn style(mut self, style: WindowStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn background(mut self, background: BackgroundStyle) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn traffic_lights(mut self, show: bool) -> Self {
        self.traffic_lights = show;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pin the window's appearance; `None` follows the ambient appearance.
    #[must_use]
    pub fn appearance(mut self, appearance: Option<Appearance>) -> Self {
        self.appearance = appearance;
        self
    }

    /// Use a generated wallpaper, optionally pinned to an appearance.
    #[must_use]
    pub fn wallpaper(mut self, style: WallpaperStyle, appearance: Option<Appearance>) -> Self {
        self.wallpaper = WallpaperSource::Generated(
            WallpaperGenerator::new(style).override_appearance(appearance),
        );
        self
    }

    /// Use caller-supplied wallpaper content. Disables the control strip.
    #[must_use]
    pub fn custom_wallpaper(mut self, content: Content) -> Self {
        self.wallpaper = WallpaperSource::Custom(content);
        self
    }

    #[must_use]
    pub fn insets(mut self, provider: Arc<dyn InsetProvider>) -> Self {
        self.insets = provider;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn window_style(&self) -> WindowStyle {
        self.style
    }

    pub fn background_style(&self) -> BackgroundStyle {
        self.background
    }

    pub fn wallpaper_source(&self) -> &WallpaperSource {
        &self.wallpaper
    }

    pub fn resolved_appearance(&self, ambient: Appearance) -> Appearance {
        self.appearance.unwrap_or(ambient)
    }

    pub fn geometry(&self) -> ChromeGeometry {
        let inset = top_inset_for(self.style, self.insets.as_ref());
        let frame = match self.size {
            WindowSize::Fixed { width, height } => Size::new(width, height),
            WindowSize::FitContent => {
                let natural = self.content.intrinsic_size();
                Size::new(natural.width, natural.height + inset)
            }
        };
        let padded_width = frame.width.max(0.0) + 2.0 * OUTER_PADDING;
        // Narrow windows get a wider canvas so the control strip stays on it.
        let strip_room = match self.wallpaper {
            WallpaperSource::Generated(_) => {
                (ControlStrip::min_canvas_width() - padded_width).max(0.0)
            }
            WallpaperSource::Custom(_) => 0.0,
        };
        let canvas = Canvas::covering(Size::new(
            padded_width + strip_room,
            frame.height.max(0.0) + 2.0 * OUTER_PADDING,
        ));
        let x0 = OUTER_PADDING + strip_room / 2.0;
        let window = Rect::new(
            x0,
            OUTER_PADDING,
            x0 + frame.width,
            OUTER_PADDING + frame.height,
        );
        ChromeGeometry {
            canvas,
            window,
            corner_radius: self.style.corner_radius(),
            top_inset: inset,
            content: Rect::new(window.x0, window.y0 + inset, window.x1, window.y1),
        }
    }

    /// Current control selection, or `None` when a custom wallpaper hides the strip.
    pub fn controls(&self, ambient: Appearance) -> Option<ControlState> {
        let WallpaperSource::Generated(generator) = &self.wallpaper else {
            return None;
        };
        Some(ControlState {
            wallpaper: generator.style(),
            background: self.background,
            style: self.style,
            appearance: self.resolved_appearance(ambient),
        })
    }

    /// Control under `point`, in canvas coordinates.
    pub fn hit_test(&self, point: Point) -> Option<ControlKind> {
        match self.wallpaper {
            WallpaperSource::Generated(_) => ControlStrip::hit_test(self.geometry().canvas, point),
            WallpaperSource::Custom(_) => None,
        }
    }

    /// Copy with the control `kind` moved to its next option.
    #[must_use]
    pub fn advance_control(self, kind: ControlKind, ambient: Appearance) -> Self {
        match kind {
            ControlKind::Wallpaper => match &self.wallpaper {
                WallpaperSource::Generated(g) => {
                    let next = next_in(&WallpaperStyle::ALL, g.style());
                    self.select_wallpaper(next)
                }
                WallpaperSource::Custom(_) => self,
            },
            ControlKind::Background => {
                let next = next_in(&BackgroundStyle::CYCLE, self.background);
                self.select_background(next)
            }
            ControlKind::Style => {
                let next = next_in(&WindowStyle::PRESETS, self.style);
                self.select_style(next)
            }
            ControlKind::Appearance => {
                let next = self.resolved_appearance(ambient).toggled();
                self.select_appearance(next)
            }
        }
    }

    /// Select a generated wallpaper style, keeping any pinned wallpaper appearance.
    #[must_use]
    pub fn select_wallpaper(mut self, style: WallpaperStyle) -> Self {
        if let WallpaperSource::Generated(g) = self.wallpaper {
            self.wallpaper = WallpaperSource::Generated(g.with_style(style));
        }
        self
    }

    #[must_use]
    pub fn select_background(self, background: BackgroundStyle) -> Self {
        self.background(background)
    }

    #[must_use]
    pub fn select_style(self, style: WindowStyle) -> Self {
        self.style(style)
    }

    #[must_use]
    pub fn select_appearance(self, appearance: Appearance) -> Self {
        self.appearance(Some(appearance))
    }

    /// Build the layered window scene. Never fails.
    #[tracing::instrument(skip(self), fields(style = self.style.name(), background = self.background.name()))]
    pub fn compose(&self, ambient: Appearance) -> Scene {
        let geo = self.geometry();
        let appearance = self.resolved_appearance(ambient);
        let frame = Shape::rounded(geo.window, geo.corner_radius);

        let mut window = vec![
            self.background_layer(&geo, appearance),
            Node::group(LayerRole::Content, self.content.place(geo.content)),
        ];
        if let Some(title_bar) = self.title_bar_layer(&geo, appearance) {
            window.push(title_bar);
        }
        if self.traffic_lights {
            window.push(self.traffic_light_layer(&geo));
        }

        let mut root = vec![
            Node::group(LayerRole::Wallpaper, self.wallpaper_layer(&geo, appearance)),
            Node::group(
                LayerRole::Shadow,
                vec![Node::Shadow {
                    shape: frame,
                    color: Color::BLACK.with_alpha(match appearance {
                        Appearance::Light => 0.30,
                        Appearance::Dark => 0.55,
                    }),
                    blur_radius: SHADOW_BLUR,
                    offset: Vec2::new(0.0, SHADOW_OFFSET_Y),
                }],
            ),
            Node::clipped(LayerRole::Window, frame, window),
            border_layer(&geo, appearance),
        ];
        if let Some(state) = self.controls(ambient) {
            root.push(ControlStrip::compose(geo.canvas, &state));
        }

        let scene = Scene {
            canvas: geo.canvas,
            root: Node::group(LayerRole::Root, root),
        };
        tracing::debug!(
            width = geo.canvas.width,
            height = geo.canvas.height,
            "composed window chrome"
        );
        scene
    }

    /// Compose and rasterize on the CPU backend.
    pub fn render(&self, ambient: Appearance, settings: &RenderSettings) -> ChromeResult<FrameRGBA> {
        crate::render::pipeline::render_scene(&self.compose(ambient), settings)
    }

    fn wallpaper_layer(&self, geo: &ChromeGeometry, appearance: Appearance) -> Vec<Node> {
        match &self.wallpaper {
            WallpaperSource::Generated(g) => g.layers(geo.canvas.rect(), appearance),
            WallpaperSource::Custom(content) => content.cover(geo.canvas.rect()),
        }
    }

    fn background_layer(&self, geo: &ChromeGeometry, appearance: Appearance) -> Node {
        let area = Shape::rect(geo.window);
        let children = match self.background {
            BackgroundStyle::SystemDefault => {
                vec![Node::fill(area, Paint::Solid(system_window_color(appearance)))]
            }
            BackgroundStyle::Material(None) => Vec::new(),
            BackgroundStyle::Material(Some(intensity)) => vec![Node::Backdrop {
                shape: area,
                blur_radius: intensity.blur_radius(),
                tint: material_tint(appearance).with_alpha(intensity.tint_alpha()),
            }],
            BackgroundStyle::Glass(intensity) => {
                let w = geo.window;
                let sheen = Rect::new(w.x0, w.y0, w.x1, w.y0 + w.height() * GLASS_SHEEN_FRACTION);
                let rim_radius = (geo.corner_radius - 1.0).max(0.0);
                vec![
                    Node::Backdrop {
                        shape: area,
                        blur_radius: intensity.blur_radius(),
                        tint: material_tint(appearance).with_alpha(intensity.tint_alpha()),
                    },
                    Node::fill(
                        Shape::rect(sheen),
                        Paint::vertical([
                            Color::WHITE.with_alpha(0.22),
                            Color::WHITE.with_alpha(0.0),
                        ]),
                    ),
                    Node::Stroke {
                        shape: Shape::rounded(w.inset(-1.0), rim_radius),
                        paint: Paint::vertical([
                            Color::WHITE.with_alpha(0.55),
                            Color::WHITE.with_alpha(0.12),
                        ]),
                        width: 1.0,
                        opacity: 1.0,
                    },
                ]
            }
        };
        Node::group(LayerRole::Background, children)
    }

    fn title_bar_layer(&self, geo: &ChromeGeometry, appearance: Appearance) -> Option<Node> {
        if !self.style.shows_title_bar() {
            return None;
        }
        let w = geo.window;
        let bar_bottom = w.y0 + geo.top_inset;
        let (separator, ink) = match appearance {
            Appearance::Light => (Color::BLACK.with_alpha(0.10), Color::hex(0x4D4D4D)),
            Appearance::Dark => (Color::BLACK.with_alpha(0.50), Color::hex(0xDCDCDC)),
        };
        let mut children = vec![Node::fill(
            Shape::rect(Rect::new(w.x0, bar_bottom - 1.0, w.x1, bar_bottom)),
            Paint::Solid(separator),
        )];
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            children.push(Node::Label {
                text: title.to_owned(),
                center: Point::new(w.center().x, w.y0 + geo.top_inset / 2.0),
                font_size: TITLE_FONT_SIZE,
                color: ink,
            });
        }
        Some(Node::group(LayerRole::TitleBar, children))
    }

    fn traffic_light_layer(&self, geo: &ChromeGeometry) -> Node {
        let w = geo.window;
        let cy = if self.style.shows_title_bar() {
            w.y0 + geo.top_inset / 2.0
        } else {
            w.y0 + STANDALONE_LIGHT_Y
        };
        let mut children = Vec::with_capacity(6);
        for (i, color) in TRAFFIC_LIGHT_COLORS.into_iter().enumerate() {
            let center = Point::new(w.x0 + LIGHT_FIRST_X + i as f64 * LIGHT_SPACING, cy);
            let light = Shape::circle(center, LIGHT_DIAMETER / 2.0);
            children.push(Node::fill(light, Paint::Solid(color)));
            children.push(Node::Stroke {
                shape: light,
                paint: Paint::Solid(Color::BLACK.with_alpha(0.12)),
                width: 0.5,
                opacity: 1.0,
            });
        }
        Node::group(LayerRole::TrafficLights, children)
    }
}

fn border_layer(geo: &ChromeGeometry, appearance: Appearance) -> Node {
    let (highlight, definition) = match appearance {
        Appearance::Light => (Color::WHITE.with_alpha(0.45), Color::BLACK.with_alpha(0.18)),
        Appearance::Dark => (Color::WHITE.with_alpha(0.18), Color::BLACK.with_alpha(0.65)),
    };
    let r = geo.corner_radius.max(0.0);
    Node::group(
        LayerRole::Border,
        vec![
            Node::Stroke {
                shape: Shape::rounded(geo.window.inset(-0.5), (r - 0.5).max(0.0)),
                paint: Paint::Solid(highlight),
                width: 1.0,
                opacity: 1.0,
            },
            Node::Stroke {
                shape: Shape::rounded(geo.window.inset(0.5), r + 0.5),
                paint: Paint::Solid(definition),
                width: 1.0,
                opacity: 1.0,
            },
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compose/chrome.rs"]
mod tests;
