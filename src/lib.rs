/// How does this work
///    ren = RenderingScanline( RenderingBase( Pixfmt( data ) ), Paint )
///    ras = RasterizerScanline()
///    sl  = Scanline()
///  Raster Operations
///    add_shape
///      EdgeTable::new()  -- one edge per ring vertex
///    clip_box            -- rows of the image
///  Render to Image
///   render_scanlines(ras, sl, ren)
///     rewind_scanlines
///       EdgeTable::sort() -- bucket sorted by scanline, clipped rows
///     sweep_scanline()   -- admit/retire edges, sort by x, pair into spans
///       render()
///         copy_span      -- clip to the image (RenderingBase)
///           write_span   -- solid, styled or tiled pixels (span.rs)
///
///  Strokes (stroke.rs) and symbols (symbol.rs) are front ends which either
///  plot through copy_span directly or build a Shape and go through the
///  scanline rasterizer.

pub mod error;
pub mod color;
pub mod buffer;
pub mod math;
pub mod pixfmt;
pub mod base;
pub mod geometry;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod span;
pub mod line;
pub mod ellipse;
pub mod stroke;
pub mod symbol;
pub mod glyph;
pub mod render;

pub use error::*;
pub use color::*;
pub use buffer::*;
pub use math::*;
pub use pixfmt::*;
pub use base::*;
pub use geometry::*;
pub use edge::*;
pub use scan::*;
pub use raster::*;
pub use span::*;
pub use line::*;
pub use ellipse::*;
pub use stroke::*;
pub use symbol::*;
pub use glyph::*;
pub use render::*;

/// Round to the nearest integer, half away from zero
///
///     assert_eq!(mapraster::nint(2.5), 3);
///     assert_eq!(mapraster::nint(-2.5), -3);
///     assert_eq!(mapraster::nint(2.49), 2);
///
pub fn nint(v: f64) -> i64 {
    if v >= 0.0 {
        (v + 0.5) as i64
    } else {
        (v - 0.5) as i64
    }
}

/// Access Color properties and compoents
pub trait Color: std::fmt::Debug + Copy {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
    /// Return if the color is completely transparent, alpha = 0.0
    fn is_transparent(&self) -> bool { self.alpha8() == 0 }
    /// Return if the color is completely opaque, alpha = 1.0
    fn is_opaque(&self) -> bool { self.alpha8() == 255 }
}

/// Raw access to the bytes of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Read a pixel color
pub trait Source {
    fn get(&self, id: (usize, usize)) -> color::Rgba8;
}

/// Write pixels to an image
///
/// Locations must lie within the image; writing outside of it is a
/// programming error and panics
pub trait Pixel {
    /// Copy the color `c` to the pixel at `id`, ignoring its alpha
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Blend the color `c` onto the pixel at `id` using the alpha of `c`
    ///   scaled by `cover` [0,255]
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64);
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width of the image in pixels
    fn width(&self) -> usize;
    /// Height of the image in pixels
    fn height(&self) -> usize;
}

/// Rasterizers producing horizontal spans, one scanline at a time
pub trait Rasterize {
    /// Remove all shapes
    fn reset(&mut self);
    /// Prepare to sweep; returns false when there is nothing to draw
    fn rewind_scanlines(&mut self) -> bool;
    /// Fill `sl` with the spans of the next non-empty scanline
    fn sweep_scanline(&mut self, sl: &mut scan::Scanline) -> bool;
}

/// Consume the spans of a scanline
pub trait Render {
    /// Render a single scanline
    fn render(&mut self, sl: &scan::Scanline);
}
