use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    compile::plan::{
        CompositeOp, CompositePass, DrawOp, GradientSpec, MaskGenPass, OffscreenPass, PassFx,
        PlanPaint, RenderPlan, ScenePass, SurfaceDesc, SurfaceId,
    },
    foundation::core::{Affine, BezPath, Point, Rgba8Premul},
    foundation::error::{ChromeError, ChromeResult},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings, premultiply_rgba8_in_place},
    render::passes::PassBackend,
    render::text::LabelCache,
};

/// CPU raster backend: paths through `vello_cpu`, effects and compositing on byte buffers.
pub struct CpuBackend {
    settings: RenderSettings,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    labels: LabelCache,
    surfaces: HashMap<SurfaceId, CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    w: u32,
    h: u32,
    start: [u64; 2],
    end: [u64; 2],
    stops: [[u8; 4]; 2],
}

impl GradientKey {
    fn new(g: &GradientSpec) -> Self {
        Self {
            w: g.width,
            h: g.height,
            start: [g.start.x.to_bits(), g.start.y.to_bits()],
            end: [g.end.x.to_bits(), g.end.y.to_bits()],
            stops: g.stops,
        }
    }
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            gradient_cache: HashMap::new(),
            labels: LabelCache::default(),
            surfaces: HashMap::new(),
        }
    }

    fn take_surface(&mut self, id: SurfaceId, role: &str) -> ChromeResult<CpuSurface> {
        self.surfaces.remove(&id).ok_or_else(|| {
            ChromeError::render(format!("{role} surface {id:?} was not initialized"))
        })
    }

    fn surface_bytes(&self, id: SurfaceId, role: &str) -> ChromeResult<&[u8]> {
        self.surfaces
            .get(&id)
            .map(|s| s.pixmap.data_as_u8_slice())
            .ok_or_else(|| ChromeError::render(format!("{role} surface {id:?} was not initialized")))
    }

    fn gradient_paint(&mut self, g: &GradientSpec) -> ChromeResult<vello_cpu::Image> {
        let key = GradientKey::new(g);
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        let (w, h) = gradient_raster_size(g);
        let bytes = rasterize_gradient(g);
        let img = rgba_premul_to_image(&bytes, w, h)?;
        tracing::debug!(w, h, "rasterized gradient");
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn set_paint(&mut self, ctx: &mut vello_cpu::RenderContext, paint: &PlanPaint) -> ChromeResult<()> {
        match paint {
            PlanPaint::Solid([r, g, b, a]) => {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(*r, *g, *b, *a));
            }
            PlanPaint::Gradient(spec) => {
                let img = self.gradient_paint(spec)?;
                let (w, h) = gradient_raster_size(spec);
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::scale_non_uniform(
                    f64::from(spec.width) / f64::from(w),
                    f64::from(spec.height) / f64::from(h),
                ));
                ctx.set_paint(img);
            }
        }
        Ok(())
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> ChromeResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillPath {
                path,
                transform,
                paint,
                opacity,
            } => {
                ctx.set_transform(affine_to_cpu(*transform));
                self.set_paint(ctx, paint)?;
                with_opacity(ctx, *opacity, |ctx| ctx.fill_path(&bezpath_to_cpu(path)));
            }
            DrawOp::StrokePath {
                path,
                transform,
                width,
                paint,
                opacity,
            } => {
                if *width <= 0.0 {
                    return Ok(());
                }
                ctx.set_transform(affine_to_cpu(*transform));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                self.set_paint(ctx, paint)?;
                with_opacity(ctx, *opacity, |ctx| ctx.stroke_path(&bezpath_to_cpu(path)));
            }
            DrawOp::Image { image, rect } => {
                if image.width == 0 || image.height == 0 || rect.area() <= 0.0 {
                    return Ok(());
                }
                let paint = rgba_premul_to_image(&image.to_premul_rgba8(), image.width, image.height)?;
                let (w, h) = (f64::from(image.width), f64::from(image.height));
                let tr = Affine::translate(rect.origin().to_vec2())
                    * Affine::scale_non_uniform(rect.width() / w, rect.height() / h);
                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
            }
            DrawOp::Label {
                text,
                center,
                font_size,
                color,
            } => {
                let raster = self.labels.raster(text, *font_size, *color)?;
                let paint = rgba_premul_to_image(&raster.rgba8_premul, raster.width, raster.height)?;
                let (w, h) = (f64::from(raster.width), f64::from(raster.height));
                let origin = Point::new(center.x - w / 2.0, center.y - h / 2.0);
                ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
            }
        }
        Ok(())
    }
}

impl PassBackend for CpuBackend {
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> ChromeResult<()> {
        let width: u16 = desc
            .width
            .try_into()
            .map_err(|_| ChromeError::render("surface width exceeds u16"))?;
        let height: u16 = desc
            .height
            .try_into()
            .map_err(|_| ChromeError::render("surface height exceeds u16"))?;

        let surface = self.surfaces.entry(id).or_insert_with(|| CpuSurface {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        });
        if surface.width != width || surface.height != height {
            *surface = CpuSurface {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            };
        }

        // Surfaces are reused across plans; every plan starts from a clean slate.
        let clear = match (id, self.settings.clear_rgba) {
            (SurfaceId(0), Some([r, g, b, a])) => Rgba8Premul::from_straight_rgba(r, g, b, a).to_array(),
            _ => [0, 0, 0, 0],
        };
        clear_pixmap(&mut surface.pixmap, clear);
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass) -> ChromeResult<()> {
        let mut surface = self.take_surface(pass.target, "scene target")?;
        if pass.clear_to_transparent {
            clear_pixmap(&mut surface.pixmap, [0, 0, 0, 0]);
        }

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        let drawn = pass.ops.iter().try_for_each(|op| self.draw_op(&mut ctx, op));
        if drawn.is_ok() {
            ctx.flush();
            ctx.render_to_pixmap(&mut surface.pixmap);
        }
        self.surfaces.insert(pass.target, surface);
        drawn
    }

    fn exec_offscreen(&mut self, pass: &OffscreenPass) -> ChromeResult<()> {
        let input = self.surface_bytes(pass.input, "offscreen input")?.to_vec();
        let mut output = self.take_surface(pass.output, "offscreen output")?;
        if input.len() != output.pixmap.data_as_u8_slice().len() {
            self.surfaces.insert(pass.output, output);
            return Err(ChromeError::render(
                "offscreen input/output surface size mismatch",
            ));
        }

        let (w, h) = (u32::from(output.width), u32::from(output.height));
        let result = match pass.fx {
            PassFx::Blur { radius_px, sigma } => {
                crate::render::blur::blur_rgba8_premul(&input, w, h, radius_px, sigma)
            }
        };
        if let Ok(blurred) = &result {
            output.pixmap.data_as_u8_slice_mut().copy_from_slice(blurred);
        }
        self.surfaces.insert(pass.output, output);
        result.map(|_| ())
    }

    fn exec_mask_gen(&mut self, pass: &MaskGenPass) -> ChromeResult<()> {
        let mut surface = self.take_surface(pass.output, "mask")?;
        clear_pixmap(&mut surface.pixmap, [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        ctx.fill_path(&bezpath_to_cpu(&pass.path));
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        self.surfaces.insert(pass.output, surface);
        Ok(())
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> ChromeResult<()> {
        let mut dst = self.take_surface(pass.target, "composite target")?;
        let result = pass.ops.iter().try_for_each(|op| match *op {
            CompositeOp::Over { src, opacity } => crate::render::composite::over_in_place(
                dst.pixmap.data_as_u8_slice_mut(),
                self.surface_bytes(src, "composite src")?,
                opacity,
            ),
            CompositeOp::MaskedOver { src, mask, opacity } => {
                crate::render::composite::masked_over_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    self.surface_bytes(src, "composite src")?,
                    self.surface_bytes(mask, "composite mask")?,
                    opacity,
                )
            }
            CompositeOp::MaskedOut { src, mask, opacity } => {
                crate::render::composite::masked_out_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    self.surface_bytes(src, "composite src")?,
                    self.surface_bytes(mask, "composite mask")?,
                    opacity,
                )
            }
        });
        self.surfaces.insert(pass.target, dst);
        result
    }

    fn readback_rgba8(&mut self, surface: SurfaceId, plan: &RenderPlan) -> ChromeResult<FrameRGBA> {
        let data = self.surface_bytes(surface, "readback")?.to_vec();
        if data.len() != plan.canvas.byte_len() {
            return Err(ChromeError::render(format!(
                "readback surface {surface:?} does not match the {}x{} canvas",
                plan.canvas.width, plan.canvas.height
            )));
        }
        let surface_cap = plan.surfaces.len() as u32;
        self.surfaces.retain(|id, _| id.0 < surface_cap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

impl RenderBackend for CpuBackend {}

fn with_opacity(
    ctx: &mut vello_cpu::RenderContext,
    opacity: f32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    draw(ctx);
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

/// Largest gradient raster edge; bigger boxes are stretched from this resolution.
const MAX_GRADIENT_RASTER: u32 = 1024;

/// Raster size for `g`, capped per axis so huge shapes never allocate huge images.
pub(crate) fn gradient_raster_size(g: &GradientSpec) -> (u32, u32) {
    (
        g.width.clamp(1, MAX_GRADIENT_RASTER),
        g.height.clamp(1, MAX_GRADIENT_RASTER),
    )
}

/// Premultiplied raster of a two-stop linear gradient at [`gradient_raster_size`].
///
/// Each pixel center is projected onto the start/end axis in unit space.
pub(crate) fn rasterize_gradient(g: &GradientSpec) -> Vec<u8> {
    let (w, h) = gradient_raster_size(g);
    let (w, h) = (w as usize, h as usize);
    let mut bytes = vec![0u8; w.saturating_mul(h).saturating_mul(4)];
    let axis = g.end - g.start;
    let len2 = axis.hypot2();
    let [c0, c1] = g.stops.map(|c| c.map(f64::from));

    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % w, i / w);
        let u = (x as f64 + 0.5) / w as f64;
        let v = (y as f64 + 0.5) / h as f64;
        let t = if len2 <= f64::EPSILON {
            0.0
        } else {
            ((Point::new(u, v) - g.start).dot(axis) / len2).clamp(0.0, 1.0)
        };
        let lerp = |k: usize| (c0[k] + (c1[k] - c0[k]) * t).round().clamp(0.0, 255.0) as u8;
        px.copy_from_slice(&[lerp(0), lerp(1), lerp(2), lerp(3)]);
    }
    premultiply_rgba8_in_place(&mut bytes);
    bytes
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> ChromeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ChromeError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ChromeError::render("pixmap height exceeds u16"))?;
    if bytes.len() != (width as usize).saturating_mul(height as usize).saturating_mul(4) {
        return Err(ChromeError::render("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn rgba_premul_to_image(bytes_premul: &[u8], width: u32, height: u32) -> ChromeResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
