extern crate mapraster;

use mapraster::*;

#[test]
fn fill_square() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let c = Rgba8::new(200,30,40,255);
    let shape = Shape::with_lines(vec![vec![(2.0,2.0), (2.0,5.0), (5.0,5.0), (5.0,2.0)]]);
    render_polygon(&mut ren, &shape, c).unwrap();

    for y in 0 .. 10 {
        for x in 0 .. 10 {
            let want = if (2..=4).contains(&x) && (2..=4).contains(&y) {
                c
            } else {
                Rgba8::transparent()
            };
            assert_eq!(ren.get(x,y), Some(want), "pixel {} {}", x, y);
        }
    }
}

#[test]
fn fill_square_rgb() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgb8>::new(10,10));
    ren.clear(Rgb8::white());
    let shape = Shape::with_lines(vec![vec![(2.0,2.0), (2.0,5.0), (5.0,5.0), (5.0,2.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::black()).unwrap();
    assert_eq!(ren.get(3,3), Some(Rgba8::black()));
    assert_eq!(ren.get(5,5), Some(Rgba8::white()));
    let n = ren.pixeldata().iter().filter(|&&v| v == 0).count();
    assert_eq!(n, 9 * 3);
}

#[test]
fn fill_translucent() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    ren.clear(Rgba8::white());
    let shape = Shape::with_lines(vec![vec![(2.0,2.0), (2.0,5.0), (5.0,5.0), (5.0,2.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::new(0,0,0,128)).unwrap();
    let p = ren.get(3,3).unwrap();
    assert_eq!(p.a, 255);
    assert!(p.r > 100 && p.r < 150);
    assert_eq!(ren.get(0,0), Some(Rgba8::white()));
}

#[test]
fn fill_clipped() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
    let c = Rgba8::black();
    let shape = Shape::with_lines(vec![vec![(-5.0,-5.0), (-5.0,3.0), (30.0,3.0), (30.0,-5.0)]]);
    render_polygon(&mut ren, &shape, c).unwrap();
    assert_eq!(ren.get(0,0), Some(c));
    assert_eq!(ren.get(9,2), Some(c));
    assert_eq!(ren.get(9,3), Some(Rgba8::transparent()));
}
