extern crate mapraster;

use mapraster::*;

fn row(ren: &RenderingBase<Pixfmt<Rgba8>>, y: i64, c: Rgba8) -> Vec<bool> {
    (0..ren.width() as i64).map(|x| ren.get(x,y) == Some(c)).collect()
}

#[test]
fn stroke_huge_thin() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let c = Rgba8::black();
    let shape = Shape::with_lines(vec![vec![(-1e19,5.0), (1e19,5.0)]]);
    render_stroke(&mut ren, &shape, &StrokeStyle::new(c)).unwrap();
    assert_eq!(row(&ren, 5, c), vec![true; 10]);
    assert_eq!(row(&ren, 4, c), vec![false; 10]);
    assert_eq!(row(&ren, 6, c), vec![false; 10]);
}

#[test]
fn stroke_long_wide() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let c = Rgba8::black();
    let shape = Shape::with_lines(vec![vec![(-2e7,5.0), (2e7,5.0)]]);
    let mut style = StrokeStyle::new(c);
    style.width(4.0);
    render_stroke(&mut ren, &shape, &style).unwrap();
    for y in 3 ..= 6 {
        assert_eq!(row(&ren, y, c), vec![true; 10], "row {}", y);
    }
    assert_eq!(row(&ren, 2, c), vec![false; 10]);
    assert_eq!(row(&ren, 7, c), vec![false; 10]);
}

#[test]
fn stroke_missing_view() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let c = Rgba8::black();
    let shape = Shape::with_lines(vec![vec![(-1e19,-50.0), (1e19,-40.0)],
                                       vec![(f64::NAN,1.0), (4.0,1.0)]]);
    render_stroke(&mut ren, &shape, &StrokeStyle::new(c)).unwrap();
    for y in 0 .. 10 {
        assert_eq!(row(&ren, y, c), vec![false; 10]);
    }
}

#[test]
fn dash_phase_survives_clipping() {
    let _ = env_logger::builder().is_test(true).try_init();
    let c = Rgba8::black();
    let mut style = StrokeStyle::new(c);
    style.pattern(&[3.0, 2.0]);
    // pixel x is entry x + 40 of the pattern, on while (x + 40) % 5 < 3
    let want : Vec<_> = (0..10).map(|x| (x + 40) % 5 < 3).collect();

    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let shape = Shape::with_lines(vec![vec![(-40.0,3.0), (49.0,3.0)]]);
    render_stroke(&mut ren, &shape, &style).unwrap();
    assert_eq!(row(&ren, 3, c), want);

    // first segment entirely outside, shared vertex counted once
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let shape = Shape::with_lines(vec![vec![(-40.0,3.0), (-20.0,3.0), (49.0,3.0)]]);
    render_stroke(&mut ren, &shape, &style).unwrap();
    assert_eq!(row(&ren, 3, c), want);
}

#[test]
fn fill_far_vertices() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let red = Rgba8::new(255,0,0,255);
    let shape = Shape::with_lines(vec![vec![(0.0,-1e19), (5.0,1e19), (9.0,-1e19)]]);
    render_polygon(&mut ren, &shape, red).unwrap();
    for y in 0 .. 10 {
        assert_eq!(ren.get(4,y), Some(red));
        assert_eq!(ren.get(6,y), Some(red));
        assert_eq!(ren.get(1,y), Some(Rgba8::transparent()));
        assert_eq!(ren.get(9,y), Some(Rgba8::transparent()));
    }
}

#[test]
fn fill_tall_shape() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let red = Rgba8::new(255,0,0,255);
    let shape = Shape::with_lines(vec![vec![(2.0,-1e9), (2.0,1e9), (5.0,1e9), (5.0,-1e9)]]);
    render_polygon(&mut ren, &shape, red).unwrap();
    for y in 0 .. 10 {
        assert_eq!(row(&ren, y, red),
                   vec![false, false, true, true, true, false, false, false, false, false]);
    }
}
