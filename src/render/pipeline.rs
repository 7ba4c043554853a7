use crate::{
    compile::plan::compile_scene,
    foundation::error::ChromeResult,
    render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend},
    scene::model::Scene,
};

/// Compile and render a scene with a fresh CPU backend.
pub fn render_scene(scene: &Scene, settings: &RenderSettings) -> ChromeResult<FrameRGBA> {
    let mut backend = create_backend(BackendKind::Cpu, settings)?;
    render_scene_with(scene, backend.as_mut())
}

/// Compile and render a scene with a caller-provided backend, reusing its surfaces and caches.
#[tracing::instrument(skip_all, fields(width = scene.canvas.width, height = scene.canvas.height))]
pub fn render_scene_with(scene: &Scene, backend: &mut dyn RenderBackend) -> ChromeResult<FrameRGBA> {
    let plan = compile_scene(scene);
    let frame = backend.render_plan(&plan)?;
    tracing::debug!(passes = plan.passes.len(), "rendered scene");
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
