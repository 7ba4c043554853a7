use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::scene::model::{LayerRole, Node, Paint, Shape};
use crate::style::window::{
    Appearance, BackgroundStyle, WindowStyle, material_tint, system_window_color,
};
use crate::wallpaper::palette::{WallpaperStyle, palette, solid_fill};

const CAPSULE_HEIGHT: f64 = 30.0;
const SEGMENT_WIDTH: f64 = 96.0;
const SEGMENT_GAP: f64 = 4.0;
const CAPSULE_PADDING: f64 = 4.0;
const BOTTOM_MARGIN: f64 = 12.0;
const SIDE_MARGIN: f64 = 12.0;
const CAPSULE_BLUR: f64 = 12.0;
const SWATCH_RADIUS: f64 = 5.0;
const LABEL_SIZE: f64 = 11.0;

/// One control of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Wallpaper,
    Background,
    Style,
    Appearance,
}

impl ControlKind {
    /// Left to right order in the strip.
    pub const ALL: [Self; 4] = [Self::Wallpaper, Self::Background, Self::Style, Self::Appearance];
}

/// Live selection shown by the control strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    pub wallpaper: WallpaperStyle,
    pub background: BackgroundStyle,
    pub style: WindowStyle,
    pub appearance: Appearance,
}

impl ControlState {
    /// Human readable name of the current option for `kind`.
    pub fn label(&self, kind: ControlKind) -> &'static str {
        match kind {
            ControlKind::Wallpaper => self.wallpaper.name(),
            ControlKind::Background => self.background.name(),
            ControlKind::Style => self.style.name(),
            ControlKind::Appearance => match self.appearance {
                Appearance::Light => "Light",
                Appearance::Dark => "Dark",
            },
        }
    }

    fn swatch(&self, kind: ControlKind) -> Color {
        match kind {
            ControlKind::Wallpaper => match self.wallpaper {
                WallpaperStyle::Solid => solid_fill(self.appearance),
                WallpaperStyle::HighContrast => Color::hex(0x808080),
                style => palette(style, self.appearance).base[1],
            },
            ControlKind::Background => match self.background {
                BackgroundStyle::SystemDefault => system_window_color(self.appearance),
                BackgroundStyle::Material(None) => Color::TRANSPARENT,
                BackgroundStyle::Material(Some(_)) | BackgroundStyle::Glass(_) => {
                    material_tint(self.appearance)
                }
            },
            ControlKind::Style => Color::hex(0x8E8E93),
            ControlKind::Appearance => match self.appearance {
                Appearance::Light => Color::WHITE,
                Appearance::Dark => Color::BLACK,
            },
        }
    }
}

/// Hit region of one control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSegment {
    pub kind: ControlKind,
    pub rect: Rect,
}

/// Floating capsule anchored to the bottom edge of the canvas.
pub struct ControlStrip;

impl ControlStrip {
    fn capsule_width() -> f64 {
        let n = ControlKind::ALL.len() as f64;
        n * SEGMENT_WIDTH + (n - 1.0) * SEGMENT_GAP + 2.0 * CAPSULE_PADDING
    }

    /// Narrowest canvas that shows the whole strip with its side margins.
    pub fn min_canvas_width() -> f64 {
        Self::capsule_width() + 2.0 * SIDE_MARGIN
    }

    /// Bounds of the capsule, horizontally centered.
    pub fn capsule(canvas: Canvas) -> Rect {
        let width = Self::capsule_width();
        let cx = f64::from(canvas.width) / 2.0;
        let y1 = f64::from(canvas.height) - BOTTOM_MARGIN;
        Rect::new(cx - width / 2.0, y1 - CAPSULE_HEIGHT, cx + width / 2.0, y1)
    }

    pub fn layout(canvas: Canvas) -> Vec<ControlSegment> {
        let capsule = Self::capsule(canvas);
        ControlKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let x0 = capsule.x0 + CAPSULE_PADDING + i as f64 * (SEGMENT_WIDTH + SEGMENT_GAP);
                ControlSegment {
                    kind,
                    rect: Rect::new(
                        x0,
                        capsule.y0 + CAPSULE_PADDING,
                        x0 + SEGMENT_WIDTH,
                        capsule.y1 - CAPSULE_PADDING,
                    ),
                }
            })
            .collect()
    }

    pub fn hit_test(canvas: Canvas, point: Point) -> Option<ControlKind> {
        Self::layout(canvas)
            .into_iter()
            .find(|s| s.rect.contains(point))
            .map(|s| s.kind)
    }

    pub fn compose(canvas: Canvas, state: &ControlState) -> Node {
        let capsule = Self::capsule(canvas);
        let radius = capsule.height() / 2.0;
        let (tint, ink, chip) = match state.appearance {
            Appearance::Light => (
                Color::WHITE.with_alpha(0.55),
                Color::hex(0x1C1C1E),
                Color::WHITE.with_alpha(0.45),
            ),
            Appearance::Dark => (
                Color::hex(0x2C2C2E).with_alpha(0.6),
                Color::hex(0xF2F2F7),
                Color::WHITE.with_alpha(0.12),
            ),
        };

        let mut children = vec![
            Node::Backdrop {
                shape: Shape::rounded(capsule, radius),
                blur_radius: CAPSULE_BLUR,
                tint,
            },
            Node::Stroke {
                shape: Shape::rounded(capsule, radius),
                paint: Paint::Solid(Color::BLACK.with_alpha(0.12)),
                width: 0.5,
                opacity: 1.0,
            },
        ];

        for seg in Self::layout(canvas) {
            let r = seg.rect;
            children.push(Node::fill(
                Shape::rounded(r, r.height() / 2.0),
                Paint::Solid(chip),
            ));
            let swatch_center = Point::new(r.x0 + 8.0 + SWATCH_RADIUS, r.center().y);
            children.push(Node::fill(
                Shape::circle(swatch_center, SWATCH_RADIUS),
                Paint::Solid(state.swatch(seg.kind)),
            ));
            children.push(Node::Stroke {
                shape: Shape::circle(swatch_center, SWATCH_RADIUS),
                paint: Paint::Solid(ink.with_alpha(0.35)),
                width: 0.5,
                opacity: 1.0,
            });
            let label_left = swatch_center.x + SWATCH_RADIUS + 4.0;
            children.push(Node::Label {
                text: state.label(seg.kind).to_owned(),
                center: Point::new((label_left + r.x1 - 4.0) / 2.0, r.center().y),
                font_size: LABEL_SIZE,
                color: ink,
            });
        }

        Node::group(LayerRole::Controls, children)
    }
}

/// Option after `current` in `cycle`, wrapping; values outside the cycle restart it.
pub(crate) fn next_in<T: Copy + PartialEq>(cycle: &[T], current: T) -> T {
    match cycle.iter().position(|c| *c == current) {
        Some(i) => cycle[(i + 1) % cycle.len()],
        None => cycle[0],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/controls.rs"]
mod tests;
