mod common;

use common::*;
use label_compose::*;
use label_raster::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_session_canvas() {
    let session = session(50.0, 30.0, SessionOptions::default());

    assert_eq!(session.surface().width(), 591);
    assert_eq!(session.surface().height(), 354);
    assert_eq!(session.surface().dpi(), (300, 300));
    assert_eq!(pixel(&session, 300, 200), [255, 255, 255, 255]);
}

#[test]
fn test_session_background() {
    let options = SessionOptions::default().with_background("000000");
    let session = session(10.0, 10.0, options);

    assert_eq!(pixel(&session, 5, 5), [0, 0, 0, 255]);
    assert_eq!(session.readable_color(), Color::WHITE);
}

#[test]
fn test_rectangle_and_line_on_canvas() {
    // 10 px per mm
    let mut session = session(50.0, 40.0, SessionOptions::default().with_dpi(254));

    session
        .add_rect(1.0, 1.0, 4.0, 3.0, RectOptions::default())
        .unwrap();
    assert_eq!(pixel(&session, 10, 20), [0, 0, 0, 255]);
    assert_eq!(pixel(&session, 40, 20), [0, 0, 0, 255]);
    assert_eq!(pixel(&session, 25, 20), [255, 255, 255, 255]);

    session.add_line(0.0, 3.5, 5.0, 3.5, 0.1).unwrap();
    assert_eq!(pixel(&session, 25, 35), [0, 0, 0, 255]);
    assert_eq!(pixel(&session, 25, 37), [255, 255, 255, 255]);
}

#[test]
fn test_offset_moves_shapes() {
    let mut session = session(50.0, 40.0, SessionOptions::default().with_dpi(254));

    session.add_offset(1.0, 1.0);
    session.add_line(0.0, 0.0, 2.0, 0.0, 0.1).unwrap();

    assert_eq!(pixel(&session, 20, 10), [0, 0, 0, 255]);
    assert_eq!(pixel(&session, 20, 0), [255, 255, 255, 255]);
}

#[test]
fn test_barcode_squeezed_on_canvas() {
    let mut session = session(50.0, 30.0, SessionOptions::default());
    let options = BarcodeOptions {
        symbology: Symbology::Code128B,
        max_width: Some(20.0),
    };

    let (width, height) = session
        .add_barcode("LABEL-0001", 0.5, 10.0, 25.0, 5.0, options)
        .unwrap();

    assert!(close(width, session.units().to_mm(236.0)));
    assert!(close(height, session.units().to_mm(118.0)));
    // Nothing lands outside the squeezed footprint centered on 295px
    for y in 0..354 {
        assert_eq!(pixel(&session, 176, y), [255, 255, 255, 255]);
        assert_eq!(pixel(&session, 414, y), [255, 255, 255, 255]);
    }
    assert!(dark_pixels(session.surface()) > 0);
}

#[test]
fn test_barcode_natural_width() {
    let mut session = session(50.0, 30.0, SessionOptions::default());

    let (width, _) = session
        .add_barcode("AB", 0.1, 5.0, 25.0, 5.0, BarcodeOptions {
            symbology: Symbology::Code39,
            max_width: None,
        })
        .unwrap();

    // Four delimited characters of 12 modules, three gaps, 1px modules, quiet margins
    assert!(close(width, session.units().to_mm((4 * 12 + 3 + 20) as f64)));
}

#[test]
fn test_invalid_barcode_is_backend_error() {
    let mut session = session(50.0, 30.0, SessionOptions::default());
    let result = session.add_barcode("odd", 0.5, 10.0, 25.0, 5.0, BarcodeOptions {
        symbology: Symbology::Code128C,
        max_width: None,
    });

    match result {
        Err(LabelError::Backend(source)) => {
            assert!(source.downcast_ref::<RasterError>().is_some());
        }
        other => panic!("Expected backend error, got {:?}", other),
    }
    assert!(session.surface().pixels().pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_picture_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = png(dir.path(), "logo.png", 200, 100, [255, 0, 0, 255]);
    let mut session = session(50.0, 30.0, SessionOptions::default());

    let (right, bottom) = session
        .add_picture(
            PictureSource::Path(path),
            DimensionHint::width(20.0),
            10.0,
            5.0,
            PictureOptions::default(),
        )
        .unwrap();

    assert!(close(right, session.units().to_mm(118.0 + 236.0)));
    assert!(close(bottom, session.units().to_mm(59.0 + 118.0)));

    let [r, g, b, _] = pixel(&session, 236, 118);
    assert!(r > 200 && g < 50 && b < 50, "got {:?}", (r, g, b));
    assert_eq!(pixel(&session, 100, 118), [255, 255, 255, 255]);
    assert_eq!(pixel(&session, 236, 190), [255, 255, 255, 255]);
}

#[test]
fn test_rgb_canvas_needs_no_profiles() {
    let mut session = session(10.0, 10.0, SessionOptions::default());
    session.convert_to_rgb().unwrap();
    assert_eq!(session.surface().colorspace(), Colorspace::Srgb);
}

#[test]
fn test_print_canvas_converted_with_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let resources = Resources {
        cmyk_profile: Some(profile(dir.path(), "coated.icc", b"CMYK")),
        rgb_profile: Some(profile(dir.path(), "srgb.icc", b"RGB ")),
        ..Resources::default()
    };
    let backend = RasterBackend::new().with_canvas_colorspace(Colorspace::Cmyk);
    let options = SessionOptions::default().with_resources(resources);
    let mut session = CanvasSession::new(backend, 10.0, 10.0, options).unwrap();

    session.convert_to_rgb().unwrap();
    assert_eq!(session.surface().colorspace(), Colorspace::Srgb);
    assert_eq!(session.surface().profile(), Some(Colorspace::Srgb));
}

#[test]
fn test_print_canvas_without_profiles() {
    let backend = RasterBackend::new().with_canvas_colorspace(Colorspace::Cmyk);
    let mut session = CanvasSession::new(backend, 10.0, 10.0, SessionOptions::default()).unwrap();

    let result = session.convert_to_rgb();
    assert!(matches!(result, Err(LabelError::MissingResource("cmyk_profile"))));
    assert_eq!(session.surface().colorspace(), Colorspace::Cmyk);
}

#[test]
fn test_print_canvas_with_swapped_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let resources = Resources {
        cmyk_profile: Some(profile(dir.path(), "srgb.icc", b"RGB ")),
        rgb_profile: Some(profile(dir.path(), "coated.icc", b"CMYK")),
        ..Resources::default()
    };
    let backend = RasterBackend::new().with_canvas_colorspace(Colorspace::Cmyk);
    let options = SessionOptions::default().with_resources(resources);
    let mut session = CanvasSession::new(backend, 10.0, 10.0, options).unwrap();

    let result = session.convert_to_rgb();
    assert!(matches!(
        result,
        Err(LabelError::UnsupportedColorspace(Colorspace::Cmyk))
    ));
}

#[test]
fn test_broken_profile_is_backend_error() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.icc");
    std::fs::write(&broken, b"not a profile").unwrap();
    let resources = Resources {
        cmyk_profile: Some(broken),
        rgb_profile: Some(profile(dir.path(), "srgb.icc", b"RGB ")),
        ..Resources::default()
    };
    let backend = RasterBackend::new().with_canvas_colorspace(Colorspace::Cmyk);
    let options = SessionOptions::default().with_resources(resources);
    let mut session = CanvasSession::new(backend, 10.0, 10.0, options).unwrap();

    assert!(matches!(session.convert_to_rgb(), Err(LabelError::Backend(_))));
}

#[test]
fn test_text_with_system_font() {
    let Some(font) = system_font() else {
        return;
    };
    let resources = Resources {
        sans_font: Some(font),
        ..Resources::default()
    };
    let mut session = session(50.0, 30.0, SessionOptions::default().with_resources(resources));
    session.set_offset(0.0, 0.0);

    let bottom = session
        .add_text(2.0, 2.0, "Batch 42", 2.0, TextOptions::default())
        .unwrap();
    assert!(bottom > 2.0);
    assert!(dark_pixels(session.surface()) > 0);

    let before = dark_pixels(session.surface());
    let x = session.add_vertical_text(45.0, 2.0, "SIDE", 2.0, false).unwrap();
    assert!(x < 45.0);
    assert!(dark_pixels(session.surface()) > before);
}

#[test]
fn test_condensed_text_fits_max_width() {
    let Some(font) = system_font() else {
        return;
    };
    let resources = Resources {
        sans_font: Some(font),
        ..Resources::default()
    };
    let mut session = session(50.0, 30.0, SessionOptions::default().with_resources(resources));
    session.set_offset(0.0, 0.0);

    // 5mm = 59px at 300 dpi, starting at 10mm = 118px
    session
        .add_condensed_text(10.0, 5.0, "A much too long line", 2.0, 5.0, CondensedTextOptions::default())
        .unwrap();

    let dark: Vec<u32> = session
        .surface()
        .pixels()
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] < 128)
        .map(|(x, _, _)| x)
        .collect();
    assert!(!dark.is_empty());
    assert!(dark.iter().all(|&x| (118..118 + 59).contains(&x)));
}

#[test]
fn test_bold_without_bold_face() {
    let Some(font) = system_font() else {
        return;
    };
    let resources = Resources {
        sans_font: Some(font),
        ..Resources::default()
    };
    let mut session = session(50.0, 30.0, SessionOptions::default().with_resources(resources));
    let options = TextOptions {
        font_weight: FontWeight::Bold,
        ..TextOptions::default()
    };

    session.add_text(2.0, 2.0, "Bold", 2.0, options).unwrap();
    assert!(dark_pixels(session.surface()) > 0);
}
