use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Rect, Vec2};
use crate::foundation::error::ChromeResult;
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::scene::model::{LayerRole, Node, Paint, Scene, Shape};
use crate::style::window::Appearance;
use crate::wallpaper::palette::{Palette, WallpaperStyle, gradient_stops, palette, solid_fill};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Deterministic decorative backdrop for a `(style, appearance)` pair.
///
/// Geometry is expressed as fractions of the container, so the same generator
/// composes at any size.
pub struct WallpaperGenerator {
    style: WallpaperStyle,
    appearance: Option<Appearance>,
}

impl Default for WallpaperGenerator {
    fn default() -> Self {
        Self::new(WallpaperStyle::default())
    }
}

impl WallpaperGenerator {
    pub fn new(style: WallpaperStyle) -> Self {
        Self {
            style,
            appearance: None,
        }
    }

    /// Pin the appearance used for palette lookup; `None` follows the ambient appearance.
    #[must_use]
    pub fn override_appearance(mut self, appearance: Option<Appearance>) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: WallpaperStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> WallpaperStyle {
        self.style
    }

    pub fn appearance_override(&self) -> Option<Appearance> {
        self.appearance
    }

    pub fn resolved_appearance(&self, ambient: Appearance) -> Appearance {
        self.appearance.unwrap_or(ambient)
    }

    pub fn palette(&self, ambient: Appearance) -> Palette {
        palette(self.style, self.resolved_appearance(ambient))
    }

    /// Wallpaper layers filling `bounds`, back to front.
    pub fn layers(&self, bounds: Rect, ambient: Appearance) -> Vec<Node> {
        let appearance = self.resolved_appearance(ambient);
        match self.style {
            WallpaperStyle::Solid => vec![Node::fill(
                Shape::rect(bounds),
                Paint::Solid(solid_fill(appearance)),
            )],
            WallpaperStyle::HighContrast => {
                let mid = bounds.x0 + bounds.width() / 2.0;
                vec![
                    Node::fill(
                        Shape::rect(Rect::new(bounds.x0, bounds.y0, mid, bounds.y1)),
                        Paint::Solid(Color::WHITE),
                    ),
                    Node::fill(
                        Shape::rect(Rect::new(mid, bounds.y0, bounds.x1, bounds.y1)),
                        Paint::Solid(Color::BLACK),
                    ),
                ]
            }
            WallpaperStyle::Ocean | WallpaperStyle::Sunset | WallpaperStyle::Meadow => {
                let pal = palette(self.style, appearance);
                let mut out = Vec::with_capacity(6);
                out.push(Node::fill(Shape::rect(bounds), Paint::diagonal(pal.base)));
                for (shape, sc) in shape_layout(bounds).into_iter().zip(pal.shapes) {
                    out.push(Node::Fill {
                        shape,
                        paint: Paint::diagonal(gradient_stops(sc.color)),
                        opacity: sc.opacity,
                    });
                }
                out
            }
        }
    }

    /// Standalone wallpaper scene covering `canvas`.
    pub fn scene(&self, canvas: Canvas, ambient: Appearance) -> Scene {
        Scene {
            canvas,
            root: Node::group(
                LayerRole::Root,
                vec![Node::group(
                    LayerRole::Wallpaper,
                    self.layers(canvas.rect(), ambient),
                )],
            ),
        }
    }

    /// Rasterize the standalone wallpaper on the CPU backend.
    pub fn render_frame(
        &self,
        canvas: Canvas,
        ambient: Appearance,
        settings: &RenderSettings,
    ) -> ChromeResult<FrameRGBA> {
        crate::render::pipeline::render_scene(&self.scene(canvas, ambient), settings)
    }
}

/// The five decorative shapes, in paint order, laid out inside `bounds`.
///
/// Sizes and center offsets are fractions of the container's width/height.
pub fn shape_layout(bounds: Rect) -> [Shape; 5] {
    let (w, h) = (bounds.width(), bounds.height());
    let center = bounds.center();
    let at = |dx: f64, dy: f64| center + Vec2::new(dx * w, dy * h);
    let framed = |dx: f64, dy: f64, fw: f64, fh: f64| Rect::from_center_size(at(dx, dy), (fw, fh));

    let inscribed_circle = |frame: Rect| -> Shape {
        let d = frame.width().abs().min(frame.height().abs());
        Shape::circle(frame.center(), d / 2.0)
    };

    [
        Shape::circle(at(-0.20, -0.25), 0.70 * w),
        Shape::ellipse(framed(0.25, 0.05, 0.45 * w, 0.80 * h)),
        Shape::rounded(framed(0.05, -0.10, 0.55 * w, 0.28 * h), 40.0).rotated(-12.0),
        inscribed_circle(framed(-0.15, 0.30, 0.45 * w, 0.45 * h)),
        Shape::ellipse(framed(0.28, 0.35, 0.38 * w, 0.32 * h)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/generator.rs"]
mod tests;
