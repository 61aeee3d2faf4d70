extern crate mapraster;

use mapraster::*;

#[test]
fn zero_width_spans_are_skipped() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Every scanline has two edges at x = 5
    let shape = Shape::with_lines(vec![vec![(5.0,0.0), (5.0,5.0), (5.0,10.0)]]);

    let mut ras = RasterizerScanline::new();
    ras.add_shape(&shape);
    let mut sl = Scanline::new();
    assert!(ras.rewind_scanlines());
    assert!(! ras.sweep_scanline(&mut sl));

    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(12,12));
    render_polygon(&mut ren, &shape, Rgba8::black()).unwrap();
    assert!(ren.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn thin_wedge_keeps_wide_rows() {
    // Wedge narrowing to a point at the bottom
    let shape = Shape::with_lines(vec![vec![(2.0,2.0), (8.0,2.0), (5.0,8.0)]]);
    let mut ras = RasterizerScanline::new();
    ras.add_shape(&shape);
    let mut sl = Scanline::new();
    let mut rows = vec![];
    if ras.rewind_scanlines() {
        while ras.sweep_scanline(&mut sl) {
            assert_eq!(sl.num_spans(), 1);
            rows.push(sl.y);
        }
    }
    assert_eq!(rows, vec![2, 3, 4, 5, 6, 7]);
}
