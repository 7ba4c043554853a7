use crate::{
    compile::plan::{
        CompositePass, MaskGenPass, OffscreenPass, Pass, RenderPlan, ScenePass, SurfaceDesc,
        SurfaceId,
    },
    foundation::error::{ChromeError, ChromeResult},
    render::backend::FrameRGBA,
};

pub trait PassBackend {
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> ChromeResult<()>;

    fn exec_scene(&mut self, pass: &ScenePass) -> ChromeResult<()>;

    fn exec_offscreen(&mut self, pass: &OffscreenPass) -> ChromeResult<()>;

    fn exec_mask_gen(&mut self, pass: &MaskGenPass) -> ChromeResult<()>;

    fn exec_composite(&mut self, pass: &CompositePass) -> ChromeResult<()>;

    fn readback_rgba8(&mut self, surface: SurfaceId, plan: &RenderPlan) -> ChromeResult<FrameRGBA>;
}

#[tracing::instrument(skip_all, fields(surfaces = plan.surfaces.len(), passes = plan.passes.len()))]
pub fn execute_plan<B: PassBackend + ?Sized>(
    backend: &mut B,
    plan: &RenderPlan,
) -> ChromeResult<FrameRGBA> {
    for (idx, desc) in plan.surfaces.iter().enumerate() {
        let id = SurfaceId(
            idx.try_into()
                .map_err(|_| ChromeError::render("surface id overflow"))?,
        );
        backend.ensure_surface(id, desc)?;
    }

    for pass in &plan.passes {
        match pass {
            Pass::Scene(p) => backend.exec_scene(p)?,
            Pass::Offscreen(p) => backend.exec_offscreen(p)?,
            Pass::MaskGen(p) => backend.exec_mask_gen(p)?,
            Pass::Composite(p) => backend.exec_composite(p)?,
        }
    }

    backend.readback_rgba8(plan.final_surface, plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;
