//! Rendering Base

use crate::color::Rgba8;
use crate::pixfmt::Pixfmt;
use crate::span::*;
use crate::error::Result;
use crate::Color;
use crate::Pixel;
use crate::PixelData;
use crate::Source;

use std::convert::TryFrom;
use std::cmp::min;
use std::cmp::max;
use std::path::Path;

/// Clips spans and pixels to the image before they are written
#[derive(Debug,Clone,PartialEq)]
pub struct RenderingBase<T> {
    pub pixf: T,
}

impl<T> RenderingBase<T> where T: Pixel {
    pub fn new(pixf: T) -> RenderingBase<T> {
        RenderingBase { pixf }
    }
    /// Visible region (xmin, xmax, ymin, ymax), inclusive
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    pub fn width(&self) -> usize {
        self.pixf.width()
    }
    pub fn height(&self) -> usize {
        self.pixf.height()
    }
    /// Set every pixel to the color `c`
    pub fn clear<C: Color>(&mut self, c: C) {
        let (w, h) = (self.pixf.width(), self.pixf.height());
        for y in 0 .. h {
            for x in 0 .. w {
                self.pixf.set((x,y), c);
            }
        }
    }
    /// Write the pixels `x1` to `x2` of row `y` that lie inside the image
    ///
    /// Pixels cut off on the left still consume a styled paint so dash
    ///   patterns stay aligned with the line
    pub fn copy_span(&mut self, x1: i64, x2: i64, y: i64, paint: &mut Paint) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            paint.skip(run(x1, x2).saturating_add(1));
            return;
        }
        let cx1 = max(x1, xmin);
        let cx2 = min(x2, xmax);
        paint.skip(run(x1, cx1));
        write_span(&mut self.pixf, cx1, cx2, y, paint);
        paint.skip(run(cx2, x2));
    }
    /// Write a single pixel if it lies inside the image
    pub fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        put_pixel(&mut self.pixf, x, y, c);
    }
}

/// Number of pixels from `a` up to, not including, `b`
fn run(a: i64, b: i64) -> usize {
    usize::try_from(i128::from(b) - i128::from(a)).unwrap_or(usize::MAX)
}

impl<T> RenderingBase<T> where T: Pixel + Source {
    /// Color of the pixel at (`x`,`y`), None outside of the image
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba8> {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return None;
        }
        Some(self.pixf.get((x as usize, y as usize)))
    }
}

impl<C> RenderingBase<Pixfmt<C>> where Pixfmt<C>: Pixel {
    /// Write the image to a file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        self.pixf.to_file(filename)
    }
}

impl<T> PixelData for RenderingBase<T> where T: PixelData {
    fn pixeldata(&self) -> &[u8] {
        self.pixf.pixeldata()
    }
}
