use super::*;
use kurbo::Shape as _;

use crate::foundation::core::Vec2;
use crate::scene::model::LayerRole;

fn scene(children: Vec<Node>) -> Scene {
    Scene {
        canvas: Canvas {
            width: 100,
            height: 80,
        },
        root: Node::group(LayerRole::Root, children),
    }
}

fn square() -> Shape {
    Shape::rect(Rect::new(10.0, 10.0, 50.0, 50.0))
}

fn kinds(plan: &RenderPlan) -> Vec<&'static str> {
    plan.passes
        .iter()
        .map(|p| match p {
            Pass::Scene(_) => "scene",
            Pass::Offscreen(_) => "offscreen",
            Pass::MaskGen(_) => "mask",
            Pass::Composite(_) => "composite",
        })
        .collect()
}

#[test]
fn empty_scene_only_declares_the_final_surface() {
    let plan = compile_scene(&scene(vec![]));
    assert_eq!(plan.surfaces.len(), 1);
    assert!(plan.passes.is_empty());
    assert_eq!(plan.final_surface, SurfaceId(0));
    assert_eq!(plan.surfaces[0].width, 100);
    assert_eq!(plan.surfaces[0].height, 80);
}

#[test]
fn consecutive_fills_share_one_scene_pass() {
    let plan = compile_scene(&scene(vec![
        Node::fill(square(), Paint::Solid(Color::WHITE)),
        Node::fill(square(), Paint::Solid(Color::BLACK)),
    ]));
    assert_eq!(kinds(&plan), vec!["scene", "composite"]);
    let Pass::Scene(p) = &plan.passes[0] else {
        panic!("expected scene pass");
    };
    assert_eq!(p.ops.len(), 2);
}

#[test]
fn clipped_group_is_masked_into_its_parent() {
    let plan = compile_scene(&scene(vec![Node::clipped(
        LayerRole::Window,
        square(),
        vec![Node::fill(square(), Paint::Solid(Color::WHITE))],
    )]));
    assert_eq!(kinds(&plan), vec!["scene", "composite", "mask", "composite"]);
    let Pass::Composite(last) = plan.passes.last().unwrap() else {
        panic!("expected composite");
    };
    assert_eq!(last.target, SurfaceId(0));
    assert!(matches!(last.ops[0], CompositeOp::MaskedOver { .. }));
}

#[test]
fn shadow_is_drawn_blurred_and_composited() {
    let plan = compile_scene(&scene(vec![Node::Shadow {
        shape: square(),
        color: Color::BLACK.with_alpha(0.3),
        blur_radius: 22.0,
        offset: Vec2::new(0.0, 12.0),
    }]));
    assert_eq!(kinds(&plan), vec!["scene", "offscreen", "mask", "composite"]);
    let Pass::Offscreen(blur) = &plan.passes[1] else {
        panic!("expected offscreen");
    };
    assert_eq!(
        blur.fx,
        PassFx::Blur {
            radius_px: 22,
            sigma: 11.0
        }
    );
    let Pass::Scene(shape) = &plan.passes[0] else {
        panic!("expected scene");
    };
    let DrawOp::FillPath { transform, .. } = &shape.ops[0] else {
        panic!("expected fill");
    };
    assert_eq!(transform.translation(), Vec2::new(10.0, 22.0));
}

#[test]
fn shadow_is_cut_out_of_its_caster() {
    let plan = compile_scene(&scene(vec![Node::Shadow {
        shape: square(),
        color: Color::BLACK,
        blur_radius: 8.0,
        offset: Vec2::new(0.0, 4.0),
    }]));
    let Pass::MaskGen(caster) = &plan.passes[2] else {
        panic!("expected mask");
    };
    assert_eq!(caster.path.bounding_box(), square().rect);
    let Pass::Composite(comp) = &plan.passes[3] else {
        panic!("expected composite");
    };
    assert_eq!(comp.target, SurfaceId(0));
    assert!(matches!(
        comp.ops[0],
        CompositeOp::MaskedOut { mask, .. } if mask == caster.output
    ));
}

#[test]
fn backdrop_inside_clip_samples_the_parent_target() {
    let plan = compile_scene(&scene(vec![
        Node::fill(square(), Paint::Solid(Color::WHITE)),
        Node::clipped(
            LayerRole::Window,
            square(),
            vec![Node::Backdrop {
                shape: square(),
                blur_radius: 18.0,
                tint: Color::WHITE.with_alpha(0.5),
            }],
        ),
    ]));
    let blur = plan
        .passes
        .iter()
        .find_map(|p| match p {
            Pass::Offscreen(o) => Some(o),
            _ => None,
        })
        .unwrap();
    assert_eq!(blur.input, SurfaceId(0));
    assert_ne!(blur.output, SurfaceId(0));
    // Wallpaper is flushed into the root before the backdrop samples it.
    assert_eq!(kinds(&plan)[..2], ["scene", "composite"]);
}

#[test]
fn transparent_backdrop_tint_adds_no_fill() {
    let plan = compile_scene(&scene(vec![Node::Backdrop {
        shape: square(),
        blur_radius: 4.0,
        tint: Color::TRANSPARENT,
    }]));
    assert_eq!(kinds(&plan), vec!["offscreen", "mask", "composite"]);
}

#[test]
fn gradient_paint_is_sized_to_the_shape() {
    let shape = Shape::rect(Rect::new(0.0, 0.0, 40.5, 20.0));
    let plan = compile_scene(&scene(vec![Node::fill(
        shape,
        Paint::diagonal([Color::WHITE, Color::BLACK]),
    )]));
    let Pass::Scene(p) = &plan.passes[0] else {
        panic!("expected scene");
    };
    let DrawOp::FillPath {
        paint: PlanPaint::Gradient(g),
        ..
    } = &p.ops[0]
    else {
        panic!("expected gradient fill");
    };
    assert_eq!((g.width, g.height), (41, 20));
    assert_eq!(g.stops[0], [255, 255, 255, 255]);
}

#[test]
fn blank_labels_are_skipped() {
    let plan = compile_scene(&scene(vec![Node::Label {
        text: "  ".into(),
        center: Point::new(10.0, 10.0),
        font_size: 13.0,
        color: Color::BLACK,
    }]));
    assert!(plan.passes.is_empty());
}

#[test]
fn blur_fx_rounds_radius_up() {
    assert_eq!(
        PassFx::blur(2.2),
        PassFx::Blur {
            radius_px: 3,
            sigma: 1.5
        }
    );
    assert_eq!(
        PassFx::blur(-1.0),
        PassFx::Blur {
            radius_px: 0,
            sigma: 0.5
        }
    );
}
