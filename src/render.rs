//! Renderer

use crate::base::RenderingBase;
use crate::color::Rgba8;
use crate::geometry::Shape;
use crate::pixfmt::Pixfmt;
use crate::raster::RasterizerScanline;
use crate::scan::Scanline;
use crate::span::Paint;
use crate::error::Result;

use crate::PixelData;
use crate::Rasterize;
use crate::Render;
use crate::Pixel;

/// Aliased Renderer writing every span with a single [Paint]
///
/// [Paint]: ../span/enum.Paint.html
#[derive(Debug)]
pub struct RenderingScanline<'a,'p,T> where T: Pixel, T: 'a {
    pub base: &'a mut RenderingBase<T>,
    pub paint: Paint<'p>,
}

impl<'a,'p,T> RenderingScanline<'a,'p,T> where T: Pixel {
    /// Create a new Renderer from a Rendering Base
    pub fn with_base(base: &'a mut RenderingBase<T>, paint: Paint<'p>) -> Self {
        Self { base, paint }
    }
}

impl<'a,'p,T> Render for RenderingScanline<'a,'p,T> where T: Pixel {
    /// Render a single Scanline Row
    fn render(&mut self, sl: &Scanline) {
        for span in &sl.spans {
            log::trace!("RENDER SCANLINE: y {} x {} .. {}", sl.y, span.x1, span.x2);
            self.base.copy_span(span.x1, span.x2, sl.y, &mut self.paint);
        }
    }
}

impl<'a,'p,T> PixelData for RenderingScanline<'a,'p,T> where T: Pixel + PixelData {
    fn pixeldata(&self) -> &[u8] {
        self.base.pixf.pixeldata()
    }
}

/// Render rasterized data to an image
pub fn render_scanlines<REN, RAS>(ras: &mut RAS, sl: &mut Scanline, ren: &mut REN)
    where REN: Render, RAS: Rasterize
{
    if ras.rewind_scanlines() {
        while ras.sweep_scanline(sl) {
            ren.render(sl);
        }
    }
}

/// Fill a shape with paint `paint`, shifted by (`dx`,`dy`) pixels
///
/// Only the scanlines of the image are swept
pub fn render_polygon_paint<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape,
                                      dx: i64, dy: i64, paint: Paint) {
    if shape.is_empty() {
        log::debug!("RENDER POLYGON: empty shape");
        return;
    }
    let (_, _, y1, y2) = ren.limits();
    let mut ras = RasterizerScanline::new();
    ras.add_shape(shape);
    ras.offset(dx, dy);
    ras.clip_box(y1, y2);
    let mut sl = Scanline::new();
    let mut r = RenderingScanline::with_base(ren, paint);
    render_scanlines(&mut ras, &mut sl, &mut r);
}

/// Fill a shape with the color `color`
///
/// Empty shapes draw nothing and succeed
///
///     use mapraster::*;
///
///     let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(10,10));
///     let shape = Shape::with_lines(vec![vec![(2.0,2.0), (2.0,5.0), (5.0,5.0), (5.0,2.0)]]);
///     let red = Rgba8::new(255,0,0,255);
///     render_polygon(&mut ren, &shape, red).unwrap();
///     assert_eq!(ren.get(2,2), Some(red));
///     assert_eq!(ren.get(4,4), Some(red));
///     assert_eq!(ren.get(5,5), Some(Rgba8::transparent()));
///
pub fn render_polygon<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape, color: Rgba8) -> Result<()> {
    render_polygon_paint(ren, shape, 0, 0, Paint::Solid(color));
    Ok(())
}

/// Fill a shape with copies of the image `tile`
///
/// The tile is aligned with the image origin; transparent tile pixels are
///   left untouched
pub fn render_polygon_tiled<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape, tile: &Pixfmt<Rgba8>) -> Result<()> {
    if tile.width() == 0 || tile.height() == 0 {
        log::debug!("RENDER POLYGON: empty tile");
        return Ok(());
    }
    render_polygon_paint(ren, shape, 0, 0, Paint::Tiled(tile));
    Ok(())
}
