use crate::foundation::color::Color;
use crate::foundation::math::Fnv1a64;
use crate::scene::model::{LayerRole, Node, Paint, Scene, Shape, ShapeKind};

/// Stable 64-bit digest of a scene's structure and parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneFingerprint(pub u64);

impl Scene {
    /// Digest that is equal for structurally identical scenes.
    pub fn fingerprint(&self) -> SceneFingerprint {
        let mut h = Fnv1a64::new_default();
        h.write_u64(u64::from(self.canvas.width));
        h.write_u64(u64::from(self.canvas.height));
        write_node(&mut h, &self.root);
        SceneFingerprint(h.finish())
    }
}

fn write_node(h: &mut Fnv1a64, node: &Node) {
    match node {
        Node::Group {
            role,
            clip,
            children,
        } => {
            h.write_u8(0);
            h.write_u8(role_tag(*role));
            match clip {
                Some(c) => {
                    h.write_u8(1);
                    write_shape(h, c);
                }
                None => h.write_u8(0),
            }
            h.write_u64(children.len() as u64);
            for c in children {
                write_node(h, c);
            }
        }
        Node::Fill {
            shape,
            paint,
            opacity,
        } => {
            h.write_u8(1);
            write_shape(h, shape);
            write_paint(h, paint);
            h.write_f64(f64::from(*opacity));
        }
        Node::Stroke {
            shape,
            paint,
            width,
            opacity,
        } => {
            h.write_u8(2);
            write_shape(h, shape);
            write_paint(h, paint);
            h.write_f64(*width);
            h.write_f64(f64::from(*opacity));
        }
        Node::Shadow {
            shape,
            color,
            blur_radius,
            offset,
        } => {
            h.write_u8(3);
            write_shape(h, shape);
            write_color(h, *color);
            h.write_f64(*blur_radius);
            h.write_f64(offset.x);
            h.write_f64(offset.y);
        }
        Node::Backdrop {
            shape,
            blur_radius,
            tint,
        } => {
            h.write_u8(4);
            write_shape(h, shape);
            h.write_f64(*blur_radius);
            write_color(h, *tint);
        }
        Node::Image { image, rect } => {
            h.write_u8(5);
            h.write_u64(u64::from(image.width));
            h.write_u64(u64::from(image.height));
            h.write_u8(u8::from(image.premultiplied));
            h.write_bytes(&image.data);
            for v in [rect.x0, rect.y0, rect.x1, rect.y1] {
                h.write_f64(v);
            }
        }
        Node::Label {
            text,
            center,
            font_size,
            color,
        } => {
            h.write_u8(6);
            h.write_str(text);
            h.write_f64(center.x);
            h.write_f64(center.y);
            h.write_f64(*font_size);
            write_color(h, *color);
        }
    }
}

fn write_shape(h: &mut Fnv1a64, s: &Shape) {
    match s.kind {
        ShapeKind::Rect => h.write_u8(0),
        ShapeKind::RoundedRect { radius } => {
            h.write_u8(1);
            h.write_f64(radius);
        }
        ShapeKind::Ellipse => h.write_u8(2),
    }
    for v in [s.rect.x0, s.rect.y0, s.rect.x1, s.rect.y1, s.rotation_deg] {
        h.write_f64(v);
    }
}

fn write_paint(h: &mut Fnv1a64, p: &Paint) {
    match p {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, *c);
        }
        Paint::LinearGradient { start, end, stops } => {
            h.write_u8(1);
            for v in [start.x, start.y, end.x, end.y] {
                h.write_f64(v);
            }
            for c in stops {
                write_color(h, *c);
            }
        }
    }
}

fn write_color(h: &mut Fnv1a64, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.write_f64(v);
    }
}

fn role_tag(role: LayerRole) -> u8 {
    match role {
        LayerRole::Root => 0,
        LayerRole::Wallpaper => 1,
        LayerRole::Shadow => 2,
        LayerRole::Window => 3,
        LayerRole::Background => 4,
        LayerRole::Content => 5,
        LayerRole::TitleBar => 6,
        LayerRole::TrafficLights => 7,
        LayerRole::Border => 8,
        LayerRole::Controls => 9,
    }
}
