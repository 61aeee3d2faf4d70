extern crate mapraster;

use mapraster::*;

fn blank() -> RenderingBase<Pixfmt<Rgba8>> {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(8,8));
    ren.clear(Rgba8::new(1,2,3,255));
    ren
}

#[test]
fn degenerate_fill() {
    let _ = env_logger::builder().is_test(true).try_init();
    let c = Rgba8::black();
    let shapes = vec![
        Shape::new(),
        Shape::with_lines(vec![Line::default()]),
        Shape::with_lines(vec![Line::default(), Line::default(), Line::default()]),
    ];
    for shape in &shapes {
        let mut ren = blank();
        let before = ren.clone();
        assert!(render_polygon(&mut ren, shape, c).is_ok());
        assert_eq!(ren, before);
    }
}

#[test]
fn degenerate_stroke() {
    let c = Rgba8::black();
    let mut style = StrokeStyle::new(c);
    style.width(3.0);
    for shape in &[Shape::new(), Shape::with_lines(vec![vec![(4.0,4.0)]])] {
        let mut ren = blank();
        let before = ren.clone();
        assert!(render_stroke(&mut ren, shape, &style).is_ok());
        assert_eq!(ren, before);
    }
}

#[test]
fn short_rings_fill_nothing_much() {
    // one and two point rings do not crash
    let mut ren = blank();
    let shape = Shape::with_lines(vec![vec![(3.0,3.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::black()).unwrap();
    let shape = Shape::with_lines(vec![vec![(1.0,1.0), (6.0,6.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::black()).unwrap();
}

#[test]
fn empty_symbol() {
    let mut ren = blank();
    let before = ren.clone();
    let def = SymbolDef::vector(&[Point::pen_up(), Point::pen_up()], true);
    let mut style = SymbolStyle::new();
    style.color(Rgba8::black());
    render_symbol(&mut ren, 4.0, 4.0, &def, &style, None).unwrap();
    assert_eq!(ren, before);
}
