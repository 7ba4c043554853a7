use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect};
use crate::render::backend::FrameRGBA;
use crate::scene::model::{Node, Paint, Scene, Shape};

#[derive(Clone, Debug)]
/// Backend-agnostic render plan for one scene.
///
/// A plan consists of:
/// - surface declarations (`surfaces`), all canvas-sized
/// - a sequence of passes (`passes`)
/// - a declared final surface (`final_surface`)
pub struct RenderPlan {
    pub canvas: Canvas,
    pub surfaces: Vec<SurfaceDesc>,
    pub passes: Vec<Pass>,
    pub final_surface: SurfaceId,
}

#[derive(Clone, Debug)]
/// A single pass in a [`RenderPlan`].
pub enum Pass {
    Scene(ScenePass),
    Offscreen(OffscreenPass),
    MaskGen(MaskGenPass),
    Composite(CompositePass),
}

#[derive(Clone, Debug)]
/// Draw operations into a surface.
pub struct ScenePass {
    pub target: SurfaceId,
    pub ops: Vec<DrawOp>,
    pub clear_to_transparent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identifier for a render surface declared in [`RenderPlan::surfaces`].
pub struct SurfaceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported pixel formats for render surfaces.
pub enum PixelFormat {
    Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Surface declaration: dimensions + pixel format.
pub struct SurfaceDesc {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Post-processing effect applied by an [`OffscreenPass`].
pub enum PassFx {
    Blur { radius_px: u32, sigma: f32 },
}

impl PassFx {
    /// Gaussian blur approximating a blur radius in points.
    pub fn blur(radius: f64) -> Self {
        let radius_px = if radius.is_finite() && radius > 0.0 {
            radius.ceil() as u32
        } else {
            0
        };
        Self::Blur {
            radius_px,
            sigma: ((radius_px as f32) / 2.0).max(0.5),
        }
    }
}

#[derive(Clone, Debug)]
/// Run a post-processing effect producing a new surface from an input surface.
pub struct OffscreenPass {
    pub input: SurfaceId,
    pub output: SurfaceId,
    pub fx: PassFx,
}

#[derive(Clone, Debug)]
/// Rasterize an opaque white coverage mask of `path` (canvas space) into `output`.
pub struct MaskGenPass {
    pub output: SurfaceId,
    pub path: BezPath,
}

#[derive(Clone, Debug)]
/// Composite surfaces into a target surface.
pub struct CompositePass {
    pub target: SurfaceId,
    pub ops: Vec<CompositeOp>,
}

#[derive(Clone, Copy, Debug)]
/// A compositing operation between surfaces.
pub enum CompositeOp {
    Over {
        src: SurfaceId,
        opacity: f32,
    },
    /// `src` weighted by the alpha of `mask`, then source-over.
    MaskedOver {
        src: SurfaceId,
        mask: SurfaceId,
        opacity: f32,
    },
    /// `src` weighted by the inverse alpha of `mask`, then source-over.
    MaskedOut {
        src: SurfaceId,
        mask: SurfaceId,
        opacity: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
/// Paint resolved for a backend. Colors are straight RGBA8.
pub enum PlanPaint {
    Solid([u8; 4]),
    Gradient(GradientSpec),
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Two-stop linear gradient rasterized over a `width` x `height` local box.
pub struct GradientSpec {
    pub width: u32,
    pub height: u32,
    /// Unit-space endpoints.
    pub start: Point,
    pub end: Point,
    pub stops: [[u8; 4]; 2],
}

#[derive(Clone, Debug)]
/// Draw operation emitted by the compiler. Paths are in local space under `transform`.
pub enum DrawOp {
    FillPath {
        path: BezPath,
        transform: Affine,
        paint: PlanPaint,
        opacity: f32,
    },
    StrokePath {
        path: BezPath,
        transform: Affine,
        width: f64,
        paint: PlanPaint,
        opacity: f32,
    },
    Image {
        image: Arc<FrameRGBA>,
        rect: Rect,
    },
    Label {
        text: String,
        center: Point,
        font_size: f64,
        color: [u8; 4],
    },
}

/// Compile a composed scene into passes over canvas-sized surfaces.
///
/// Draw nodes are batched into scene passes rendered on scratch surfaces and
/// composited over their target. Clipped groups render into their own surface
/// and are masked on the way out; backdrops inside them sample the parent target.
#[tracing::instrument(skip(scene), fields(width = scene.canvas.width, height = scene.canvas.height))]
pub fn compile_scene(scene: &Scene) -> RenderPlan {
    let mut c = Compiler {
        canvas: scene.canvas,
        surfaces: Vec::new(),
        passes: Vec::new(),
        pending: Vec::new(),
    };
    let root = c.alloc();
    c.node(&scene.root, root, root);
    c.flush(root);
    tracing::debug!(
        surfaces = c.surfaces.len(),
        passes = c.passes.len(),
        "compiled scene"
    );
    RenderPlan {
        canvas: scene.canvas,
        surfaces: c.surfaces,
        passes: c.passes,
        final_surface: root,
    }
}

struct Compiler {
    canvas: Canvas,
    surfaces: Vec<SurfaceDesc>,
    passes: Vec<Pass>,
    pending: Vec<DrawOp>,
}

impl Compiler {
    fn alloc(&mut self) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len() as u32);
        self.surfaces.push(SurfaceDesc {
            width: self.canvas.width,
            height: self.canvas.height,
            format: PixelFormat::Rgba8Premul,
        });
        id
    }

    fn flush(&mut self, target: SurfaceId) {
        if self.pending.is_empty() {
            return;
        }
        let scratch = self.alloc();
        let ops = std::mem::take(&mut self.pending);
        self.passes.push(Pass::Scene(ScenePass {
            target: scratch,
            ops,
            clear_to_transparent: true,
        }));
        self.passes.push(Pass::Composite(CompositePass {
            target,
            ops: vec![CompositeOp::Over {
                src: scratch,
                opacity: 1.0,
            }],
        }));
    }

    fn node(&mut self, node: &Node, target: SurfaceId, backdrop_source: SurfaceId) {
        match node {
            Node::Group {
                clip: None,
                children,
                ..
            } => {
                for child in children {
                    self.node(child, target, backdrop_source);
                }
            }
            Node::Group {
                clip: Some(clip),
                children,
                ..
            } => {
                self.flush(target);
                let group = self.alloc();
                for child in children {
                    self.node(child, group, target);
                }
                self.flush(group);
                let mask = self.alloc();
                self.passes.push(Pass::MaskGen(MaskGenPass {
                    output: mask,
                    path: clip.to_path(),
                }));
                self.passes.push(Pass::Composite(CompositePass {
                    target,
                    ops: vec![CompositeOp::MaskedOver {
                        src: group,
                        mask,
                        opacity: 1.0,
                    }],
                }));
            }
            Node::Fill {
                shape,
                paint,
                opacity,
            } => {
                self.pending.push(DrawOp::FillPath {
                    path: shape.local_path(),
                    transform: shape.transform(),
                    paint: resolve_paint(shape, paint),
                    opacity: *opacity,
                });
            }
            Node::Stroke {
                shape,
                paint,
                width,
                opacity,
            } => {
                self.pending.push(DrawOp::StrokePath {
                    path: shape.local_path(),
                    transform: shape.transform(),
                    width: *width,
                    paint: resolve_paint(shape, paint),
                    opacity: *opacity,
                });
            }
            Node::Image { image, rect } => {
                self.pending.push(DrawOp::Image {
                    image: image.clone(),
                    rect: *rect,
                });
            }
            Node::Label {
                text,
                center,
                font_size,
                color,
            } => {
                if text.trim().is_empty() {
                    return;
                }
                self.pending.push(DrawOp::Label {
                    text: text.clone(),
                    center: *center,
                    font_size: *font_size,
                    color: color.to_rgba8(),
                });
            }
            Node::Shadow {
                shape,
                color,
                blur_radius,
                offset,
            } => {
                self.flush(target);
                let shadow = self.alloc();
                let moved = shape.translated(*offset);
                self.passes.push(Pass::Scene(ScenePass {
                    target: shadow,
                    ops: vec![DrawOp::FillPath {
                        path: moved.local_path(),
                        transform: moved.transform(),
                        paint: PlanPaint::Solid(color.to_rgba8()),
                        opacity: 1.0,
                    }],
                    clear_to_transparent: true,
                }));
                self.passes.push(Pass::Offscreen(OffscreenPass {
                    input: shadow,
                    output: shadow,
                    fx: PassFx::blur(*blur_radius),
                }));
                // The caster hides its own shadow, even when it is translucent.
                let caster = self.alloc();
                self.passes.push(Pass::MaskGen(MaskGenPass {
                    output: caster,
                    path: shape.to_path(),
                }));
                self.passes.push(Pass::Composite(CompositePass {
                    target,
                    ops: vec![CompositeOp::MaskedOut {
                        src: shadow,
                        mask: caster,
                        opacity: 1.0,
                    }],
                }));
            }
            Node::Backdrop {
                shape,
                blur_radius,
                tint,
            } => {
                self.flush(target);
                let blurred = self.alloc();
                self.passes.push(Pass::Offscreen(OffscreenPass {
                    input: backdrop_source,
                    output: blurred,
                    fx: PassFx::blur(*blur_radius),
                }));
                let mask = self.alloc();
                self.passes.push(Pass::MaskGen(MaskGenPass {
                    output: mask,
                    path: shape.to_path(),
                }));
                self.passes.push(Pass::Composite(CompositePass {
                    target,
                    ops: vec![CompositeOp::MaskedOver {
                        src: blurred,
                        mask,
                        opacity: 1.0,
                    }],
                }));
                if tint.a > 0.0 {
                    self.pending.push(DrawOp::FillPath {
                        path: shape.local_path(),
                        transform: shape.transform(),
                        paint: PlanPaint::Solid(tint.to_rgba8()),
                        opacity: 1.0,
                    });
                }
            }
        }
    }
}

fn resolve_paint(shape: &Shape, paint: &Paint) -> PlanPaint {
    match paint {
        Paint::Solid(c) => PlanPaint::Solid(c.to_rgba8()),
        Paint::LinearGradient { start, end, stops } => {
            let (w, h) = shape.local_size();
            PlanPaint::Gradient(GradientSpec {
                width: (w.ceil() as u32).max(1),
                height: (h.ceil() as u32).max(1),
                start: *start,
                end: *end,
                stops: stops.map(Color::to_rgba8),
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
