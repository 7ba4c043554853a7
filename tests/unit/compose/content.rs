use super::*;
use crate::foundation::core::Point;

fn red() -> Color {
    Color::hex(0xFF0000)
}

#[test]
fn solid_fills_the_whole_region() {
    let c = Content::solid(10.0, 10.0, red());
    let region = Rect::new(5.0, 5.0, 105.0, 55.0);
    assert_eq!(c.intrinsic_size(), Size::new(10.0, 10.0));
    assert_eq!(
        c.place(region),
        vec![Node::fill(Shape::rect(region), Paint::Solid(red()))]
    );
}

#[test]
fn image_is_centered_at_intrinsic_size() {
    let frame = FrameRGBA::from_straight_rgba8(4, 2, vec![255; 32]).unwrap();
    let c = Content::image(frame);
    assert_eq!(c.intrinsic_size(), Size::new(4.0, 2.0));
    let nodes = c.place(Rect::new(0.0, 0.0, 10.0, 10.0));
    let [Node::Image { rect, .. }] = nodes.as_slice() else {
        panic!("expected one image node");
    };
    assert_eq!(*rect, Rect::new(3.0, 4.0, 7.0, 6.0));
}

#[test]
fn image_cover_fills_and_crops() {
    let frame = FrameRGBA::from_straight_rgba8(2, 1, vec![255; 8]).unwrap();
    let nodes = Content::image(frame).cover(Rect::new(0.0, 0.0, 100.0, 100.0));
    let [Node::Image { rect, .. }] = nodes.as_slice() else {
        panic!("expected one image node");
    };
    assert_eq!(*rect, Rect::new(-50.0, 0.0, 150.0, 100.0));
}

#[test]
fn node_content_is_translated_into_place() {
    let dot = Node::fill(
        Shape::circle(Point::new(5.0, 5.0), 5.0),
        Paint::Solid(red()),
    );
    let c = Content::nodes(Size::new(10.0, 10.0), vec![dot]);
    let placed = c.place(Rect::new(100.0, 100.0, 120.0, 130.0));
    let [Node::Fill { shape, .. }] = placed.as_slice() else {
        panic!("expected one fill");
    };
    assert_eq!(shape.rect, Rect::new(105.0, 110.0, 115.0, 120.0));
}

#[test]
fn load_image_reports_missing_files() {
    assert!(Content::load_image("/no/such/content.png").is_err());
}
