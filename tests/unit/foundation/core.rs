use super::*;

#[test]
fn covering_rounds_up_and_clamps_degenerate_sizes() {
    assert_eq!(
        Canvas::covering(Size::new(500.0, 350.0)),
        Canvas {
            width: 500,
            height: 350
        }
    );
    assert_eq!(
        Canvas::covering(Size::new(10.2, 0.5)),
        Canvas {
            width: 11,
            height: 1
        }
    );
    assert_eq!(
        Canvas::covering(Size::new(-40.0, f64::NAN)),
        Canvas {
            width: 1,
            height: 1
        }
    );
}

#[test]
fn premultiply_rounds_to_nearest() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(
        Rgba8Premul::from_straight_rgba(9, 9, 9, 0),
        Rgba8Premul::transparent()
    );
}
