use super::*;

type Table = ([u32; 2], [(u32, f32); 5]);

const EXPECTED: [(WallpaperStyle, Appearance, Table); 6] = [
    (
        WallpaperStyle::Ocean,
        Appearance::Light,
        (
            [0xA8D8F0, 0x3A7BD5],
            [(0x1E90FF, 0.75), (0x00B4D8, 0.65), (0x0077B6, 0.70), (0x48CAE4, 0.60), (0x023E8A, 0.55)],
        ),
    ),
    (
        WallpaperStyle::Ocean,
        Appearance::Dark,
        (
            [0x0B1D3A, 0x03045E],
            [(0x1565C0, 0.80), (0x00838F, 0.70), (0x283593, 0.75), (0x0097A7, 0.60), (0x1A237E, 0.85)],
        ),
    ),
    (
        WallpaperStyle::Sunset,
        Appearance::Light,
        (
            [0xFFD6A5, 0xFF7E5F],
            [(0xFF6B6B, 0.70), (0xFFA94D, 0.65), (0xF06595, 0.60), (0xFFD43B, 0.55), (0xE8590C, 0.75)],
        ),
    ),
    (
        WallpaperStyle::Sunset,
        Appearance::Dark,
        (
            [0x2D1B3D, 0x5C2A3F],
            [(0xC2185B, 0.75), (0xE65100, 0.70), (0x7B1FA2, 0.65), (0xF57C00, 0.60), (0xAD1457, 0.80)],
        ),
    ),
    (
        WallpaperStyle::Meadow,
        Appearance::Light,
        (
            [0xD8F3DC, 0x74C69D],
            [(0x40916C, 0.70), (0x95D5B2, 0.60), (0x2D6A4F, 0.75), (0xB7E4C7, 0.55), (0x52B788, 0.65)],
        ),
    ),
    (
        WallpaperStyle::Meadow,
        Appearance::Dark,
        (
            [0x081C15, 0x1B4332],
            [(0x2D6A4F, 0.80), (0x40916C, 0.70), (0x1B4332, 0.85), (0x52B788, 0.60), (0x74C69D, 0.50)],
        ),
    ),
];

#[test]
fn gradient_palettes_match_the_table_exactly() {
    for (style, appearance, (base, shapes)) in EXPECTED {
        let p = palette(style, appearance);
        assert_eq!(p.base, base.map(Color::hex), "{style:?} {appearance:?} base");
        for (i, (rgb, opacity)) in shapes.into_iter().enumerate() {
            assert_eq!(
                p.shapes[i],
                ShapeColor {
                    color: Color::hex(rgb),
                    opacity
                },
                "{style:?} {appearance:?} shape {i}"
            );
        }
    }
}

#[test]
fn table_covers_every_gradient_pair_once() {
    for style in [WallpaperStyle::Ocean, WallpaperStyle::Sunset, WallpaperStyle::Meadow] {
        for a in Appearance::ALL {
            let hits = EXPECTED
                .iter()
                .filter(|(s, app, _)| *s == style && *app == a)
                .count();
            assert_eq!(hits, 1, "{style:?} {a:?}");
        }
    }
}

#[test]
fn lookup_is_pure_and_appearance_sensitive() {
    for style in [
        WallpaperStyle::Ocean,
        WallpaperStyle::Sunset,
        WallpaperStyle::Meadow,
    ] {
        assert_eq!(
            palette(style, Appearance::Light),
            palette(style, Appearance::Light)
        );
        assert_ne!(
            palette(style, Appearance::Light),
            palette(style, Appearance::Dark)
        );
    }
}

#[test]
fn shape_opacities_stay_in_the_tuned_range() {
    for style in WallpaperStyle::ALL {
        for a in Appearance::ALL {
            for s in palette(style, a).shapes {
                assert!((0.5..=0.85).contains(&s.opacity), "{style:?} {a:?}");
            }
        }
    }
}

#[test]
fn styles_without_a_gradient_palette_fall_back_to_neutral() {
    for a in Appearance::ALL {
        assert_eq!(palette(WallpaperStyle::Solid, a), Palette::NEUTRAL);
        assert_eq!(palette(WallpaperStyle::HighContrast, a), Palette::NEUTRAL);
    }
}

#[test]
fn gradient_stops_lighten_then_darken() {
    let base = Color::hex(0x336699);
    let [hi, lo] = gradient_stops(base);
    assert_eq!(hi, base.mix(Color::WHITE, 0.35));
    assert_eq!(lo, base.mix(Color::BLACK, 0.30));
    assert!(hi.r > base.r && hi.g > base.g && hi.b > base.b);
    assert!(lo.r < base.r && lo.g < base.g && lo.b < base.b);
    assert_eq!(hi.a, 1.0);
}

#[test]
fn solid_fill_is_keyed_by_appearance() {
    assert_eq!(solid_fill(Appearance::Light).to_hex(), "#ececee");
    assert_eq!(solid_fill(Appearance::Dark).to_hex(), "#1c1c1e");
}
