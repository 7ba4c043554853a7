use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2};
use crate::render::backend::FrameRGBA;

const PATH_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
/// A composed visual tree, ready to be compiled into a render plan.
///
/// Children are stored back to front: later nodes paint over earlier ones.
pub struct Scene {
    pub canvas: Canvas,
    pub root: Node,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// What a group contributes to the composed window; used for inspection and tests.
pub enum LayerRole {
    Root,
    Wallpaper,
    Shadow,
    Window,
    Background,
    Content,
    TitleBar,
    TrafficLights,
    Border,
    Controls,
}

#[derive(Clone, Debug, PartialEq)]
/// A node of the visual tree.
pub enum Node {
    /// Ordered children, optionally clipped to a shape.
    Group {
        role: LayerRole,
        clip: Option<Shape>,
        children: Vec<Node>,
    },
    Fill {
        shape: Shape,
        paint: Paint,
        opacity: f32,
    },
    Stroke {
        shape: Shape,
        paint: Paint,
        width: f64,
        opacity: f32,
    },
    /// Blurred silhouette of `shape` moved by `offset`, cut out where `shape` itself lies.
    Shadow {
        shape: Shape,
        color: Color,
        blur_radius: f64,
        offset: Vec2,
    },
    /// Blur of everything painted beneath `shape`, tinted, clipped to `shape`.
    Backdrop {
        shape: Shape,
        blur_radius: f64,
        tint: Color,
    },
    /// Straight-or-premultiplied RGBA frame stretched into `rect`.
    Image { image: Arc<FrameRGBA>, rect: Rect },
    /// Single line of text centered on `center`.
    Label {
        text: String,
        center: Point,
        font_size: f64,
        color: Color,
    },
}

impl Node {
    pub fn group(role: LayerRole, children: Vec<Node>) -> Self {
        Self::Group {
            role,
            clip: None,
            children,
        }
    }

    pub fn clipped(role: LayerRole, clip: Shape, children: Vec<Node>) -> Self {
        Self::Group {
            role,
            clip: Some(clip),
            children,
        }
    }

    pub fn fill(shape: Shape, paint: Paint) -> Self {
        Self::Fill {
            shape,
            paint,
            opacity: 1.0,
        }
    }

    pub fn role(&self) -> Option<LayerRole> {
        match self {
            Self::Group { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Copy of this node moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        match self {
            Self::Group {
                role,
                clip,
                children,
            } => Self::Group {
                role: *role,
                clip: clip.map(|c| c.translated(delta)),
                children: children.iter().map(|c| c.translated(delta)).collect(),
            },
            Self::Fill {
                shape,
                paint,
                opacity,
            } => Self::Fill {
                shape: shape.translated(delta),
                paint: *paint,
                opacity: *opacity,
            },
            Self::Stroke {
                shape,
                paint,
                width,
                opacity,
            } => Self::Stroke {
                shape: shape.translated(delta),
                paint: *paint,
                width: *width,
                opacity: *opacity,
            },
            Self::Shadow {
                shape,
                color,
                blur_radius,
                offset,
            } => Self::Shadow {
                shape: shape.translated(delta),
                color: *color,
                blur_radius: *blur_radius,
                offset: *offset,
            },
            Self::Backdrop {
                shape,
                blur_radius,
                tint,
            } => Self::Backdrop {
                shape: shape.translated(delta),
                blur_radius: *blur_radius,
                tint: *tint,
            },
            Self::Image { image, rect } => Self::Image {
                image: image.clone(),
                rect: *rect + delta,
            },
            Self::Label {
                text,
                center,
                font_size,
                color,
            } => Self::Label {
                text: text.clone(),
                center: *center + delta,
                font_size: *font_size,
                color: *color,
            },
        }
    }
}

impl Scene {
    /// First group with `role`, depth-first.
    pub fn find(&self, role: LayerRole) -> Option<&Node> {
        fn walk(node: &Node, role: LayerRole) -> Option<&Node> {
            if node.role() == Some(role) {
                return Some(node);
            }
            node.children().iter().find_map(|c| walk(c, role))
        }
        walk(&self.root, role)
    }

    /// Roles of the root's direct children, in paint order.
    pub fn layer_roles(&self) -> Vec<LayerRole> {
        self.root.children().iter().filter_map(Node::role).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rect,
    /// Corner radius is clamped to the drawable range when the path is built.
    RoundedRect { radius: f64 },
    /// Ellipse inscribed in the shape's rect.
    Ellipse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A primitive in canvas coordinates: `kind` inscribed in `rect`, rotated about its center.
pub struct Shape {
    pub kind: ShapeKind,
    pub rect: Rect,
    pub rotation_deg: f64,
}

impl Shape {
    pub fn rect(rect: Rect) -> Self {
        Self {
            kind: ShapeKind::Rect,
            rect,
            rotation_deg: 0.0,
        }
    }

    pub fn rounded(rect: Rect, radius: f64) -> Self {
        Self {
            kind: ShapeKind::RoundedRect { radius },
            rect,
            rotation_deg: 0.0,
        }
    }

    pub fn ellipse(rect: Rect) -> Self {
        Self {
            kind: ShapeKind::Ellipse,
            rect,
            rotation_deg: 0.0,
        }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::ellipse(Rect::from_center_size(center, (radius * 2.0, radius * 2.0)))
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn translated(mut self, delta: Vec2) -> Self {
        self.rect = self.rect + delta;
        self
    }

    /// Width and height, with inverted extents collapsed to zero.
    pub fn local_size(&self) -> (f64, f64) {
        (self.rect.width().max(0.0), self.rect.height().max(0.0))
    }

    /// Outline in local space, `(0,0)..(w,h)`.
    pub fn local_path(&self) -> BezPath {
        let (w, h) = self.local_size();
        match self.kind {
            ShapeKind::Rect => kurbo::Rect::new(0.0, 0.0, w, h).to_path(PATH_TOLERANCE),
            ShapeKind::RoundedRect { radius } => {
                let r = if radius.is_finite() {
                    radius.clamp(0.0, w.min(h) / 2.0)
                } else {
                    0.0
                };
                kurbo::RoundedRect::new(0.0, 0.0, w, h, r).to_path(PATH_TOLERANCE)
            }
            ShapeKind::Ellipse => {
                kurbo::Ellipse::new((w / 2.0, h / 2.0), (w / 2.0, h / 2.0), 0.0)
                    .to_path(PATH_TOLERANCE)
            }
        }
    }

    /// Local-to-canvas transform: rotate about the center, then place at `rect`.
    pub fn transform(&self) -> Affine {
        let (w, h) = self.local_size();
        let origin = Vec2::new(self.rect.x0.min(self.rect.x1), self.rect.y0.min(self.rect.y1));
        if self.rotation_deg == 0.0 {
            return Affine::translate(origin);
        }
        let half = Vec2::new(w / 2.0, h / 2.0);
        Affine::translate(origin + half)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::translate(-half)
    }

    pub fn to_path(&self) -> BezPath {
        self.transform() * self.local_path()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// How a shape is painted. Gradient endpoints are in the shape's unit space.
pub enum Paint {
    Solid(Color),
    LinearGradient {
        start: Point,
        end: Point,
        stops: [Color; 2],
    },
}

impl Paint {
    /// Top-leading to bottom-trailing two-stop gradient.
    pub fn diagonal(stops: [Color; 2]) -> Self {
        Self::LinearGradient {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            stops,
        }
    }

    /// Top to bottom two-stop gradient.
    pub fn vertical(stops: [Color; 2]) -> Self {
        Self::LinearGradient {
            start: Point::new(0.5, 0.0),
            end: Point::new(0.5, 1.0),
            stops,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
