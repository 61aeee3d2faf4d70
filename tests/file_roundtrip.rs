extern crate mapraster;

use mapraster::*;

#[test]
fn png_roundtrip() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(16,12));
    let shape = Shape::with_lines(vec![vec![(2.0,2.0), (14.0,3.0), (8.0,11.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::new(250,120,10,255)).unwrap();
    let mut style = StrokeStyle::new(Rgba8::new(0,0,0,200));
    style.width(2.0);
    render_stroke(&mut ren, &shape, &style).unwrap();

    let path = std::env::temp_dir().join(format!("mapraster_roundtrip_{}.png", std::process::id()));
    ren.to_file(&path).unwrap();
    let back = Pixfmt::<Rgba8>::from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(back.width(), 16);
    assert_eq!(back.height(), 12);
    assert_eq!(back.pixeldata(), ren.pixeldata());
}

#[test]
fn png_roundtrip_rgb() {
    let mut ren = RenderingBase::new(Pixfmt::<Rgb8>::new(9,7));
    ren.clear(Rgb8::white());
    let shape = Shape::with_lines(vec![vec![(1.0,1.0), (8.0,1.0), (4.0,6.0)]]);
    render_polygon(&mut ren, &shape, Rgba8::new(0,100,0,255)).unwrap();

    let path = std::env::temp_dir().join(format!("mapraster_roundtrip_rgb_{}.png", std::process::id()));
    ren.to_file(&path).unwrap();
    let back = Pixfmt::<Rgb8>::from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(back.pixeldata(), ren.pixeldata());
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("mapraster_does_not_exist.png");
    let e = Pixfmt::<Rgba8>::from_file(&path).unwrap_err();
    assert_eq!(e.code(), 15);
    assert_eq!(e.origin(), "image");
}
