use super::*;

#[test]
fn unrotated_shape_transform_is_a_translation() {
    let s = Shape::rect(Rect::new(10.0, 20.0, 30.0, 60.0));
    assert_eq!(s.transform(), Affine::translate(Vec2::new(10.0, 20.0)));
    let bbox = kurbo::Shape::bounding_box(&s.to_path());
    assert_eq!(bbox, Rect::new(10.0, 20.0, 30.0, 60.0));
}

#[test]
fn rotation_keeps_the_center_fixed() {
    let s = Shape::rounded(Rect::new(0.0, 0.0, 100.0, 40.0), 8.0).rotated(-12.0);
    let c = s.transform() * Point::new(50.0, 20.0);
    assert!((c.x - 50.0).abs() < 1e-9);
    assert!((c.y - 20.0).abs() < 1e-9);
}

#[test]
fn degenerate_shapes_build_empty_extent_paths() {
    let s = Shape::rounded(Rect::new(0.0, 0.0, -20.0, 0.0), -5.0);
    assert_eq!(s.local_size(), (0.0, 0.0));
    let bbox = kurbo::Shape::bounding_box(&s.local_path());
    assert_eq!(bbox.area(), 0.0);
}

#[test]
fn translated_moves_every_geometric_field() {
    let n = Node::group(
        LayerRole::Root,
        vec![
            Node::fill(
                Shape::circle(Point::new(5.0, 5.0), 2.0),
                Paint::Solid(Color::BLACK),
            ),
            Node::Label {
                text: "x".to_owned(),
                center: Point::new(1.0, 1.0),
                font_size: 12.0,
                color: Color::WHITE,
            },
        ],
    );
    let moved = n.translated(Vec2::new(10.0, 0.0));
    let Node::Fill { shape, .. } = &moved.children()[0] else {
        panic!("expected fill");
    };
    assert_eq!(shape.rect, Rect::new(13.0, 3.0, 17.0, 7.0));
    let Node::Label { center, .. } = &moved.children()[1] else {
        panic!("expected label");
    };
    assert_eq!(*center, Point::new(11.0, 1.0));
}

#[test]
fn find_walks_nested_groups() {
    let scene = Scene {
        canvas: Canvas {
            width: 4,
            height: 4,
        },
        root: Node::group(
            LayerRole::Root,
            vec![Node::group(
                LayerRole::Window,
                vec![Node::group(LayerRole::Content, vec![])],
            )],
        ),
    };
    assert!(scene.find(LayerRole::Content).is_some());
    assert!(scene.find(LayerRole::Controls).is_none());
    assert_eq!(scene.layer_roles(), vec![LayerRole::Window]);
}
