extern crate mapraster;

use mapraster::*;

#[test]
fn invalid_styles_draw_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(8,8));
    let before = ren.clone();
    let shape = Shape::with_lines(vec![vec![(1.0,1.0), (6.0,6.0)]]);

    let mut style = StrokeStyle::new(Rgba8::black());
    style.pattern(&[2.0, -1.0]);
    let e = render_stroke(&mut ren, &shape, &style).unwrap_err();
    assert_eq!(e.code(), 12);

    let mut style = StrokeStyle::new(Rgba8::black());
    style.outline(Rgba8::white(), f64::NAN);
    assert!(render_stroke(&mut ren, &shape, &style).is_err());

    let def = SymbolDef::ellipse(4.0, 4.0, true);
    let mut sym = SymbolStyle::new();
    sym.color(Rgba8::black());
    sym.scale(-1.0);
    let e = render_symbol(&mut ren, 4.0, 4.0, &def, &sym, None).unwrap_err();
    assert_eq!(e.origin(), "render_ellipse_symbol");

    let mut sym = SymbolStyle::new();
    sym.color(Rgba8::black());
    sym.rotation(f64::INFINITY);
    assert!(render_symbol(&mut ren, 4.0, 4.0, &def, &sym, None).is_err());

    assert_eq!(ren, before);
}

#[test]
fn wrong_symbol_kind() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(8,8));
    let def = SymbolDef::ellipse(4.0, 4.0, true);
    let e = render_vector_symbol(&mut ren, 4.0, 4.0, &def, &SymbolStyle::new()).unwrap_err();
    assert_eq!(e.code(), 12);
    assert!(e.to_string().contains("render_vector_symbol"));
}
