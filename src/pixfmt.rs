//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::math::*;
use crate::error::Result;

use crate::Color;
use crate::Source;
use crate::Pixel;
use crate::PixelData;

use image::ImageError;
use image::error::{ParameterError, ParameterErrorKind};

use std::marker::PhantomData;
use std::path::Path;

/// Pixel Format Wrapper around raw pixel component data
///
#[derive(Debug,Clone,PartialEq)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components set to 0
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the Image, all components are set to 0
    ///
    ///     use mapraster::{Source,Pixel,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(2,2);
    ///     pix.set((1,1), Rgba8::white());
    ///     pix.clear();
    ///     assert_eq!(pix.get((1,1)), Rgba8::transparent());
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear(0);
    }
    /// Set every pixel to the [Color] `c`
    ///
    /// [Color]: ../trait.Color.html
    pub fn fill<C: Color>(&mut self, c: C) {
        let (w, h) = (self.rbuf.width, self.rbuf.height);
        for y in 0 .. h {
            for x in 0 .. w {
                self.set((x,y), c);
            }
        }
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use mapraster::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     let black = Rgba8::black();
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: usize, y: usize, c: C) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), c);
    }
    /// Write the image to a file, the format is taken from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let color = match Self::bpp() {
            4 => image::ColorType::Rgba8,
            _ => image::ColorType::Rgb8,
        };
        image::save_buffer(filename, &self.rbuf.data,
                           self.rbuf.width as u32, self.rbuf.height as u32,
                           color)?;
        Ok(())
    }
}

impl Pixfmt<Rgba8> {
    /// Read an image from a file
    ///
    /// Images without an alpha channel are fully opaque
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let img = image::open(filename)?.to_rgba8();
        let (w, h) = img.dimensions();
        check_size(w, h)?;
        let rbuf = RenderingBuffer::from_vec(img.into_raw(), w as usize, h as usize, 4);
        Ok(Self { rbuf, phantom: PhantomData })
    }
    fn mix_pix(&mut self, p: Rgba8, c: Rgba8, alpha: u8) -> Rgba8 {
        let red   =    lerp_u8(p.r, c.r, alpha);
        let green =    lerp_u8(p.g, c.g, alpha);
        let blue  =    lerp_u8(p.b, c.b, alpha);
        let alpha =    prelerp_u8(p.a, alpha, alpha);
        Rgba8::new(red, green, blue, alpha)
    }
}

impl Pixfmt<Rgb8> {
    /// Read an image from a file, dropping any alpha channel
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let img = image::open(filename)?.to_rgb8();
        let (w, h) = img.dimensions();
        check_size(w, h)?;
        let rbuf = RenderingBuffer::from_vec(img.into_raw(), w as usize, h as usize, 3);
        Ok(Self { rbuf, phantom: PhantomData })
    }
    pub fn raw(&self, id: (usize, usize)) -> Rgb8 {
        let p = &self.rbuf[id];
        Rgb8::new(p[0],p[1],p[2])
    }
    fn mix_pix(&mut self, p: Rgb8, c: Rgb8, alpha: u8, cover: u64) -> Rgb8 {
        let alpha = multiply_u8(alpha, cover as u8);
        let red   = lerp_u8(p.r, c.r, alpha);
        let green = lerp_u8(p.g, c.g, alpha);
        let blue  = lerp_u8(p.b, c.b, alpha);
        Rgb8::new(red, green, blue)
    }
}

/// Images read from files must hold at least one pixel
fn check_size(w: u32, h: u32) -> Result<()> {
    if w == 0 || h == 0 {
        let kind = ParameterErrorKind::DimensionMismatch;
        return Err(ImageError::Parameter(ParameterError::from_kind(kind)).into());
    }
    Ok(())
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
}
impl Source for Pixfmt<Rgb8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],255)
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        let alpha = multiply_u8(c.alpha8(), cover as u8);
        let pix0 = self.get(id);
        let pix  = self.mix_pix(pix0, Rgba8::from_trait(c), alpha);
        self.set(id, pix);
    }
}

impl Pixel for Pixfmt<Rgb8> {
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
    fn bpp() -> usize { 3 }
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        let pix0 = self.raw(id);
        let pix  = self.mix_pix(pix0, Rgb8::from_trait(c), c.alpha8(), cover);
        self.set(id, pix);
    }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_rgb() {
        let mut pix = Pixfmt::<Rgb8>::new(3,2);
        assert_eq!(pix.size(), 3*2*3);
        pix.set((2,1), Rgba8::new(1,2,3,4));
        assert_eq!(pix.get((2,1)), Rgba8::new(1,2,3,255));
        assert_eq!(pix.get((0,0)), Rgba8::new(0,0,0,255));
    }

    #[test]
    fn blend_half() {
        let mut pix = Pixfmt::<Rgba8>::new(1,1);
        pix.fill(Rgba8::white());
        pix.blend_pix((0,0), Rgba8::new(0,0,0,128), 255);
        let p = pix.get((0,0));
        assert_eq!(p.r, 127);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn empty_tile_draws_nothing() {
        let tile = Pixfmt::<Rgba8> { rbuf: RenderingBuffer::new(0, 3, 4), phantom: PhantomData };
        let mut ren = crate::RenderingBase::new(Pixfmt::<Rgba8>::new(4,4));
        let shape = crate::Shape::with_lines(vec![vec![(0.0,0.0), (0.0,4.0), (4.0,4.0), (4.0,0.0)]]);
        crate::render_polygon_tiled(&mut ren, &shape, &tile).unwrap();
        let mut paint = crate::Paint::Tiled(&tile);
        ren.copy_span(0, 3, 1, &mut paint);
        assert_eq!(ren.get(1,1), Some(Rgba8::transparent()));
        assert!(check_size(0, 5).is_err());
        assert!(check_size(1, 1).is_ok());
    }

    #[test]
    #[should_panic]
    fn zero_size() {
        let _ = Pixfmt::<Rgb8>::new(0,10);
    }
}
