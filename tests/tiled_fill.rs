extern crate mapraster;

use mapraster::*;

#[test]
fn tiled_fill() {
    let _ = env_logger::builder().is_test(true).try_init();
    let a = Rgba8::new(255,0,0,255);
    let b = Rgba8::new(0,0,255,255);
    let mut tile = Pixfmt::<Rgba8>::new(2,2);
    tile.set((0,0), a);
    tile.set((1,0), b);
    tile.set((0,1), b);
    // (1,1) stays transparent

    let bg = Rgba8::new(9,9,9,255);
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(8,8));
    ren.clear(bg);
    let shape = Shape::with_lines(vec![vec![(1.0,1.0), (7.0,1.0), (7.0,7.0), (1.0,7.0)]]);
    render_polygon_tiled(&mut ren, &shape, &tile).unwrap();

    assert_eq!(ren.get(2,2), Some(a));
    assert_eq!(ren.get(3,2), Some(b));
    assert_eq!(ren.get(2,3), Some(b));
    assert_eq!(ren.get(3,3), Some(bg));
    assert_eq!(ren.get(1,1), Some(bg));
    assert_eq!(ren.get(6,6), Some(a));
    assert_eq!(ren.get(0,0), Some(bg));
    assert_eq!(ren.get(7,7), Some(bg));
}

#[test]
fn tile_anchored_to_image() {
    let mut tile = Pixfmt::<Rgba8>::new(3,1);
    let c = Rgba8::black();
    tile.set((0,0), c);
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(12,2));
    let shape = Shape::with_lines(vec![vec![(1.0,0.0), (11.0,0.0), (11.0,1.0), (1.0,1.0)]]);
    render_polygon_tiled(&mut ren, &shape, &tile).unwrap();
    let on : Vec<_> = (0..12).filter(|&x| ren.get(x,0) == Some(c)).collect();
    assert_eq!(on, vec![3, 6, 9]);
}
