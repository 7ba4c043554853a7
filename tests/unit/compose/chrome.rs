use super::*;
use crate::style::insets::FixedInsets;
use crate::style::window::{GlassIntensity, MaterialIntensity};

fn insets() -> Arc<dyn InsetProvider> {
    Arc::new(FixedInsets {
        title_bar: 30.0,
        toolbar: 50.0,
    })
}

fn chrome() -> WindowChrome {
    WindowChrome::new(Content::solid(400.0, 300.0, Color::hex(0xFF0000))).insets(insets())
}

fn window_children(scene: &Scene) -> &[Node] {
    scene.find(LayerRole::Window).unwrap().children()
}

#[test]
fn fit_content_frame_adds_the_inset() {
    let geo = chrome().geometry();
    assert_eq!(geo.top_inset, 30.0);
    assert_eq!(geo.window.size(), Size::new(400.0, 330.0));
    assert_eq!(geo.content, Rect::new(60.0, 90.0, 460.0, 390.0));
    assert_eq!(
        geo.canvas,
        Canvas {
            width: 520,
            height: 450
        }
    );
}

#[test]
fn fixed_size_is_the_outer_frame() {
    let geo = chrome()
        .size(WindowSize::Fixed {
            width: 500.0,
            height: 350.0,
        })
        .style(WindowStyle::ToolBar)
        .geometry();
    assert_eq!(geo.window, Rect::new(60.0, 60.0, 560.0, 410.0));
    assert_eq!(geo.corner_radius, 26.0);
    assert_eq!(geo.content.y0 - geo.window.y0, 50.0);
}

#[test]
fn negative_sizes_pass_through() {
    let geo = chrome()
        .size(WindowSize::Fixed {
            width: -10.0,
            height: 0.0,
        })
        .geometry();
    assert_eq!(geo.window.width(), -10.0);
    assert_eq!(geo.canvas.width, 428);
    let bare = chrome()
        .custom_wallpaper(Content::solid(1.0, 1.0, Color::WHITE))
        .size(WindowSize::Fixed {
            width: -10.0,
            height: 0.0,
        })
        .geometry();
    assert_eq!(bare.canvas.width, 120);
    let _ = chrome()
        .size(WindowSize::Fixed {
            width: -10.0,
            height: 0.0,
        })
        .compose(Appearance::Light);
}

#[test]
fn layers_are_stacked_back_to_front() {
    let scene = chrome().compose(Appearance::Light);
    assert_eq!(
        scene.layer_roles(),
        vec![
            LayerRole::Wallpaper,
            LayerRole::Shadow,
            LayerRole::Window,
            LayerRole::Border,
            LayerRole::Controls,
        ]
    );
    let inner: Vec<_> = window_children(&scene)
        .iter()
        .filter_map(Node::role)
        .collect();
    assert_eq!(
        inner,
        vec![
            LayerRole::Background,
            LayerRole::Content,
            LayerRole::TitleBar,
            LayerRole::TrafficLights,
        ]
    );
}

#[test]
fn window_is_clipped_to_the_corner_radius() {
    let scene = chrome().style(WindowStyle::Custom(7.5)).compose(Appearance::Light);
    let Some(Node::Group {
        clip: Some(clip), ..
    }) = scene.find(LayerRole::Window)
    else {
        panic!("window group must be clipped");
    };
    assert_eq!(clip.kind, crate::scene::model::ShapeKind::RoundedRect { radius: 7.5 });
}

#[test]
fn compose_is_idempotent() {
    let c = chrome().title("Preview").background(BackgroundStyle::Glass(GlassIntensity::Regular));
    let a = c.compose(Appearance::Dark);
    let b = c.compose(Appearance::Dark);
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.compose(Appearance::Light).fingerprint());
}

#[test]
fn transparent_material_produces_no_fill() {
    let scene = chrome()
        .background(BackgroundStyle::Material(None))
        .compose(Appearance::Light);
    assert!(scene.find(LayerRole::Background).unwrap().children().is_empty());
}

#[test]
fn system_default_is_an_opaque_fill() {
    for ambient in Appearance::ALL {
        let scene = chrome().compose(ambient);
        let bg = scene.find(LayerRole::Background).unwrap().children();
        let [Node::Fill {
            paint: Paint::Solid(color),
            opacity,
            ..
        }] = bg
        else {
            panic!("expected a single solid fill");
        };
        assert_eq!(color.a, 1.0);
        assert_eq!(*opacity, 1.0);
    }
}

#[test]
fn material_uses_intensity_blur_and_tint() {
    let scene = chrome()
        .background(BackgroundStyle::Material(Some(MaterialIntensity::Thick)))
        .compose(Appearance::Dark);
    let bg = scene.find(LayerRole::Background).unwrap().children();
    let [Node::Backdrop {
        blur_radius, tint, ..
    }] = bg
    else {
        panic!("expected a backdrop");
    };
    assert_eq!(*blur_radius, MaterialIntensity::Thick.blur_radius());
    assert_eq!(tint.a, MaterialIntensity::Thick.tint_alpha());
}

#[test]
fn glass_adds_sheen_and_rim() {
    let scene = chrome()
        .background(BackgroundStyle::Glass(GlassIntensity::Clear))
        .compose(Appearance::Light);
    let bg = scene.find(LayerRole::Background).unwrap().children();
    assert_eq!(bg.len(), 3);
    assert!(matches!(bg[0], Node::Backdrop { .. }));
    assert!(matches!(bg[1], Node::Fill { .. }));
    assert!(matches!(bg[2], Node::Stroke { .. }));
}

fn labels(scene: &Scene) -> Vec<String> {
    fn walk(node: &Node, out: &mut Vec<String>) {
        if let Node::Label { text, .. } = node {
            out.push(text.clone());
        }
        for c in node.children() {
            walk(c, out);
        }
    }
    let mut out = Vec::new();
    if let Some(window) = scene.find(LayerRole::Window) {
        walk(window, &mut out);
    }
    out
}

#[test]
fn title_is_ignored_without_a_title_bar() {
    let shown = chrome().title("Inspector").compose(Appearance::Light);
    assert_eq!(labels(&shown), vec!["Inspector".to_owned()]);

    for style in [WindowStyle::HiddenTitleBar, WindowStyle::Custom(12.0)] {
        let hidden = chrome().title("Inspector").style(style).compose(Appearance::Light);
        assert!(labels(&hidden).is_empty());
        assert!(hidden.find(LayerRole::TitleBar).is_none());
    }
}

#[test]
fn traffic_lights_toggle_and_float_without_title_bar() {
    let off = chrome().traffic_lights(false).compose(Appearance::Light);
    assert!(off.find(LayerRole::TrafficLights).is_none());

    let hidden = chrome().style(WindowStyle::HiddenTitleBar).compose(Appearance::Light);
    let lights = hidden.find(LayerRole::TrafficLights).unwrap().children();
    let fills: Vec<_> = lights
        .iter()
        .filter_map(|n| match n {
            Node::Fill {
                shape,
                paint: Paint::Solid(c),
                ..
            } => Some((shape.rect.center(), *c)),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 3);
    assert_eq!(fills[0].0, Point::new(80.0, 80.0));
    assert_eq!(fills[1].0, Point::new(100.0, 80.0));
    assert_eq!(fills[2].1, Color::hex(0x26CC40));
}

#[test]
fn traffic_lights_sit_in_the_middle_of_the_title_bar() {
    let scene = chrome().style(WindowStyle::ToolBar).compose(Appearance::Light);
    let lights = scene.find(LayerRole::TrafficLights).unwrap().children();
    let Node::Fill { shape, .. } = &lights[0] else {
        panic!("expected fill");
    };
    assert_eq!(shape.rect.center(), Point::new(80.0, 85.0));
    assert_eq!(shape.rect.width(), 12.0);
}

#[test]
fn custom_wallpaper_removes_controls() {
    let c = chrome().custom_wallpaper(Content::solid(1.0, 1.0, Color::hex(0x336699)));
    let scene = c.compose(Appearance::Light);
    assert!(scene.find(LayerRole::Controls).is_none());
    assert!(c.controls(Appearance::Light).is_none());
    let center = ControlStrip::layout(c.geometry().canvas)[0].rect.center();
    assert_eq!(c.hit_test(center), None);
    let wallpaper = scene.find(LayerRole::Wallpaper).unwrap().children();
    assert_eq!(
        wallpaper,
        &[Node::fill(
            Shape::rect(scene.canvas.rect()),
            Paint::Solid(Color::hex(0x336699))
        )]
    );
}

#[test]
fn controls_reflect_and_drive_the_configuration() {
    let c = chrome().wallpaper(WallpaperStyle::Sunset, None);
    let state = c.controls(Appearance::Dark).unwrap();
    assert_eq!(state.wallpaper, WallpaperStyle::Sunset);
    assert_eq!(state.appearance, Appearance::Dark);

    let point = ControlStrip::layout(c.geometry().canvas)[1].rect.center();
    assert_eq!(c.hit_test(point), Some(ControlKind::Background));

    let next = c.clone().advance_control(ControlKind::Background, Appearance::Dark);
    assert_eq!(
        next.background_style(),
        BackgroundStyle::Material(Some(MaterialIntensity::Regular))
    );
    let next = next.advance_control(ControlKind::Wallpaper, Appearance::Dark);
    assert_eq!(next.controls(Appearance::Dark).unwrap().wallpaper, WallpaperStyle::Meadow);
    let next = next.advance_control(ControlKind::Style, Appearance::Dark);
    assert_eq!(next.window_style(), WindowStyle::HiddenTitleBar);
    let next = next.advance_control(ControlKind::Appearance, Appearance::Dark);
    assert_eq!(next.resolved_appearance(Appearance::Dark), Appearance::Light);

    // The original value is untouched.
    assert_eq!(c.background_style(), BackgroundStyle::SystemDefault);
}

#[test]
fn select_wallpaper_keeps_pinned_appearance() {
    let c = chrome()
        .wallpaper(WallpaperStyle::Ocean, Some(Appearance::Dark))
        .select_wallpaper(WallpaperStyle::Meadow);
    let WallpaperSource::Generated(g) = c.wallpaper_source() else {
        panic!("expected generated wallpaper");
    };
    assert_eq!(g.style(), WallpaperStyle::Meadow);
    assert_eq!(g.appearance_override(), Some(Appearance::Dark));
}

#[test]
fn setters_return_independent_copies() {
    let base = chrome();
    let a = base.clone().style(WindowStyle::ToolBar);
    let b = base.clone().style(WindowStyle::HiddenTitleBar);
    assert_eq!(base.window_style(), WindowStyle::TitleBar);
    assert_eq!(a.window_style(), WindowStyle::ToolBar);
    assert_eq!(b.window_style(), WindowStyle::HiddenTitleBar);
}

#[test]
fn window_appearance_reaches_unpinned_wallpaper() {
    let dark = chrome()
        .wallpaper(WallpaperStyle::Solid, None)
        .appearance(Some(Appearance::Dark))
        .compose(Appearance::Light);
    let wallpaper = dark.find(LayerRole::Wallpaper).unwrap().children();
    let [Node::Fill {
        paint: Paint::Solid(c),
        ..
    }] = wallpaper
    else {
        panic!("expected solid wallpaper");
    };
    assert_eq!(*c, Color::hex(0x1C1C1E));
}

#[test]
fn narrow_window_widens_the_canvas_for_the_control_strip() {
    let c = WindowChrome::new(Content::solid(120.0, 80.0, Color::WHITE)).insets(insets());
    let geo = c.geometry();
    assert_eq!(geo.canvas.width, 428);
    assert_eq!(geo.window.width(), 120.0);
    assert_eq!(geo.window.x0, 154.0);
    assert_eq!(geo.window.center().x, 214.0);

    let canvas = geo.canvas.rect();
    for seg in ControlStrip::layout(geo.canvas) {
        assert!(seg.rect.x0 >= 0.0 && seg.rect.x1 <= canvas.x1, "{seg:?}");
        assert_eq!(c.hit_test(seg.rect.center()), Some(seg.kind));
    }
}
