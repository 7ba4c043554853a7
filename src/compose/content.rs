use std::path::Path;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::core::{Rect, Size, Vec2};
use crate::foundation::error::ChromeResult;
use crate::render::backend::FrameRGBA;
use crate::scene::model::{Node, Paint, Shape};

/// The fragment framed by the window, or a caller-supplied wallpaper.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Flat color with an intrinsic size.
    Solid { size: Size, color: Color },
    /// Decoded image, intrinsic size in pixels.
    Image(Arc<FrameRGBA>),
    /// Arbitrary nodes laid out in local space `(0,0)..size`.
    Nodes { size: Size, nodes: Vec<Node> },
}

impl Content {
    pub fn solid(width: f64, height: f64, color: Color) -> Self {
        Self::Solid {
            size: Size::new(width, height),
            color,
        }
    }

    pub fn image(frame: FrameRGBA) -> Self {
        Self::Image(Arc::new(frame))
    }

    /// Decode an image file into content.
    pub fn load_image(path: impl AsRef<Path>) -> ChromeResult<Self> {
        Ok(Self::image(FrameRGBA::load(path)?))
    }

    pub fn nodes(size: Size, nodes: Vec<Node>) -> Self {
        Self::Nodes { size, nodes }
    }

    /// Natural size used by [`crate::WindowSize::FitContent`].
    pub fn intrinsic_size(&self) -> Size {
        match self {
            Self::Solid { size, .. } | Self::Nodes { size, .. } => *size,
            Self::Image(frame) => Size::new(f64::from(frame.width), f64::from(frame.height)),
        }
    }

    /// Nodes showing this content inside `region`.
    ///
    /// Solid content fills the region; images and node content keep their intrinsic size,
    /// centered, and rely on the enclosing clip when they overflow.
    pub fn place(&self, region: Rect) -> Vec<Node> {
        match self {
            Self::Solid { color, .. } => vec![solid(region, *color)],
            Self::Image(frame) => vec![Node::Image {
                image: frame.clone(),
                rect: centered(region, self.intrinsic_size()),
            }],
            Self::Nodes { size, nodes } => {
                let origin = centered(region, *size).origin().to_vec2();
                nodes.iter().map(|n| n.translated(origin)).collect()
            }
        }
    }

    /// Nodes covering all of `region`, as a wallpaper would.
    ///
    /// Images are scaled to cover the region and cropped by the canvas edges.
    pub fn cover(&self, region: Rect) -> Vec<Node> {
        match self {
            Self::Solid { color, .. } => vec![solid(region, *color)],
            Self::Image(frame) => {
                let natural = self.intrinsic_size();
                let scale = if natural.width > 0.0 && natural.height > 0.0 {
                    (region.width() / natural.width).max(region.height() / natural.height)
                } else {
                    1.0
                };
                vec![Node::Image {
                    image: frame.clone(),
                    rect: centered(region, natural * scale),
                }]
            }
            Self::Nodes { .. } => self.place(region),
        }
    }
}

fn solid(region: Rect, color: Color) -> Node {
    Node::fill(Shape::rect(region), Paint::Solid(color))
}

fn centered(region: Rect, size: Size) -> Rect {
    let offset = Vec2::new(
        (region.width() - size.width) / 2.0,
        (region.height() - size.height) / 2.0,
    );
    Rect::from_origin_size(region.origin() + offset, size)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/content.rs"]
mod tests;
