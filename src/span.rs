//! Span Writer
//!
//! Writes horizontal runs of pixels. Nothing here clips; spans must lie
//!   inside the image (see [RenderingBase] for the clipping front end).
//!
//! [RenderingBase]: ../base/struct.RenderingBase.html

use crate::color::Rgba8;
use crate::pixfmt::Pixfmt;
use crate::nint;
use crate::Color;
use crate::Pixel;
use crate::Source;

/// Cyclic on / off pixel pattern of a dashed line
///
///     use mapraster::{DashStyle, Rgba8};
///
///     let red = Rgba8::new(255,0,0,255);
///     let mut dash = DashStyle::new(&[2.0, 1.0], red).unwrap();
///     assert_eq!(dash.len(), 3);
///     assert_eq!(dash.next(), Some(red));
///     assert_eq!(dash.next(), Some(red));
///     assert_eq!(dash.next(), None);
///     assert_eq!(dash.next(), Some(red));
///
#[derive(Debug,Clone,PartialEq)]
pub struct DashStyle {
    on: Vec<bool>,
    color: Rgba8,
    pos: usize,
}

impl DashStyle {
    /// Build the pattern, alternating runs of `color` and transparent
    ///   pixels and starting with `color`
    ///
    /// Run lengths are rounded to whole pixels. Returns None when the
    ///   pattern covers no pixels.
    pub fn new(pattern: &[f64], color: Rgba8) -> Option<Self> {
        let mut on = vec![];
        for (i, &n) in pattern.iter().enumerate() {
            let n = nint(n).max(0) as usize;
            on.extend(std::iter::repeat(i % 2 == 0).take(n));
        }
        if on.is_empty() {
            return None;
        }
        Some(Self { on, color, pos: 0 })
    }
    /// Number of pixels in one cycle
    pub fn len(&self) -> usize {
        self.on.len()
    }
    pub fn is_empty(&self) -> bool {
        self.on.is_empty()
    }
    /// Restart the pattern
    pub fn reset(&mut self) {
        self.pos = 0;
    }
    /// Consume one pixel of the pattern
    ///
    /// Returns the color for "on" pixels and None for gaps
    pub fn next(&mut self) -> Option<Rgba8> {
        let on = self.on[self.pos];
        self.pos = (self.pos + 1) % self.on.len();
        if on { Some(self.color) } else { None }
    }
    /// Consume `n` pixels without drawing them
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n % self.on.len()) % self.on.len();
    }
}

/// Source of pixel colors for a span
#[derive(Debug)]
pub enum Paint<'a> {
    /// Constant color
    Solid(Rgba8),
    /// Cycle through a dash pattern, one entry per pixel
    Styled(&'a mut DashStyle),
    /// Sample a tile image at (x mod width, y mod height)
    Tiled(&'a Pixfmt<Rgba8>),
}

impl<'a> Paint<'a> {
    /// Advance past `n` pixels which will not be written
    pub fn skip(&mut self, n: usize) {
        if let Paint::Styled(dash) = self {
            dash.skip(n);
        }
    }
    /// Color for the pixel at (`x`,`y`), None to leave it untouched
    fn color(&mut self, x: i64, y: i64) -> Option<Rgba8> {
        match self {
            Paint::Solid(c) => Some(*c),
            Paint::Styled(dash) => dash.next(),
            Paint::Tiled(tile) => {
                let tw = tile.width() as i64;
                let th = tile.height() as i64;
                if tw == 0 || th == 0 {
                    return None;
                }
                let id = (x.rem_euclid(tw) as usize, y.rem_euclid(th) as usize);
                Some(tile.get(id))
            }
        }
    }
}

/// Put a single pixel; opaque colors overwrite, transparent ones are
///   ignored and the rest are blended
pub fn put_pixel<T: Pixel, C: Color>(pix: &mut T, x: i64, y: i64, c: C) {
    let id = (x as usize, y as usize);
    match c.alpha8() {
        0 => {},
        255 => pix.set(id, c),
        _ => pix.blend_pix(id, c, 255),
    }
}

/// Write the pixels `x1` to `x2` inclusive of row `y`
///
/// The end points may be given in either order
pub fn write_span<T: Pixel>(pix: &mut T, x1: i64, x2: i64, y: i64, paint: &mut Paint) {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    for x in x1 ..= x2 {
        if let Some(c) = paint.color(x, y) {
            put_pixel(pix, x, y, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_rounding() {
        let c = Rgba8::black();
        assert!(DashStyle::new(&[], c).is_none());
        assert!(DashStyle::new(&[0.0, 0.2], c).is_none());
        let d = DashStyle::new(&[1.5, 0.4, 2.0], c).unwrap();
        // 2 on, 0 off, 2 on
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn dash_skip_wraps() {
        let c = Rgba8::black();
        let mut d = DashStyle::new(&[1.0, 3.0], c).unwrap();
        d.skip(5);
        assert_eq!(d.next(), None);
        d.skip(2);
        assert_eq!(d.next(), Some(c));
        d.reset();
        assert_eq!(d.next(), Some(c));
    }

    #[test]
    fn solid_swapped_ends() {
        let mut pix = Pixfmt::<Rgba8>::new(5,1);
        let c = Rgba8::new(10,20,30,255);
        write_span(&mut pix, 3, 1, 0, &mut Paint::Solid(c));
        assert_eq!(pix.get((0,0)), Rgba8::transparent());
        assert_eq!(pix.get((1,0)), c);
        assert_eq!(pix.get((3,0)), c);
        assert_eq!(pix.get((4,0)), Rgba8::transparent());
    }

    #[test]
    fn transparent_is_noop() {
        let mut pix = Pixfmt::<Rgba8>::new(3,1);
        pix.fill(Rgba8::white());
        write_span(&mut pix, 0, 2, 0, &mut Paint::Solid(Rgba8::transparent()));
        assert_eq!(pix.get((1,0)), Rgba8::white());
    }

    #[test]
    fn styled() {
        let mut pix = Pixfmt::<Rgba8>::new(6,1);
        let c = Rgba8::black();
        let mut dash = DashStyle::new(&[1.0, 1.0], c).unwrap();
        write_span(&mut pix, 0, 5, 0, &mut Paint::Styled(&mut dash));
        let on : Vec<_> = (0..6).map(|x| pix.get((x,0)) == c).collect();
        assert_eq!(on, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn tiled() {
        let mut tile = Pixfmt::<Rgba8>::new(2,1);
        let a = Rgba8::new(255,0,0,255);
        let b = Rgba8::new(0,0,255,255);
        tile.set((0,0), a);
        tile.set((1,0), b);
        let mut pix = Pixfmt::<Rgba8>::new(5,2);
        write_span(&mut pix, 1, 4, 1, &mut Paint::Tiled(&tile));
        assert_eq!(pix.get((1,1)), b);
        assert_eq!(pix.get((2,1)), a);
        assert_eq!(pix.get((3,1)), b);
        assert_eq!(pix.get((0,1)), Rgba8::transparent());
    }
}
