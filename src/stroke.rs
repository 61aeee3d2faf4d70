//! Line Stroking
//!
//! Each ring of a shape is drawn as an open polyline. Thin lines are single
//!   pixel Bresenham lines; wide lines stamp a brush centered on every
//!   pixel of the line. Dash patterns run continuously over the vertices of
//!   a ring and restart with each ring.
//!
//! # Example
//!
//!     use mapraster::*;
//!
//!     let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(20,20));
//!
//!     let mut shape = Shape::new();
//!     shape.move_to(  2.0,  2.0);
//!     shape.line_to( 17.0,  2.0);
//!     shape.line_to( 17.0, 17.0);
//!
//!     let mut style = StrokeStyle::new(Rgba8::black());
//!     style.width(3.0);
//!     style.pattern(&[4.0, 2.0]);
//!     style.line_cap(LineCap::Round);
//!
//!     render_stroke(&mut ren, &shape, &style).unwrap();
//!     assert_eq!(ren.get(2,2), Some(Rgba8::black()));
//!

use crate::base::RenderingBase;
use crate::color::Rgba8;
use crate::geometry::Rectangle;
use crate::geometry::Shape;
use crate::line::BresenhamLine;
use crate::pixfmt::Pixfmt;
use crate::span::*;
use crate::error::*;
use crate::nint;
use crate::Color;
use crate::Pixel;
use crate::Source;

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// Line End or Cap Style
#[derive(Debug,Copy,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    Butt, Square, Round
}
/// Lines Join Style
#[derive(Debug,Copy,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    Miter, Round, Bevel, None,
}

/// Small raster stamped along wide lines
///
/// Pixels set to None are transparent
#[derive(Debug,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Brush {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgba8>>,
}

impl Brush {
    /// Square brush of `size` x `size` pixels
    pub fn square(size: usize, color: Rgba8) -> Self {
        Self { width: size, height: size, pixels: vec![Some(color); size * size] }
    }
    /// Disc inscribed in a `size` x `size` square
    pub fn disc(size: usize, color: Rgba8) -> Self {
        let r = size as f64 / 2.0;
        let mut pixels = Vec::with_capacity(size * size);
        for j in 0 .. size {
            for i in 0 .. size {
                let dx = i as f64 + 0.5 - r;
                let dy = j as f64 + 0.5 - r;
                let inside = dx * dx + dy * dy <= r * r;
                pixels.push(if inside { Some(color) } else { None });
            }
        }
        Self { width: size, height: size, pixels }
    }
    /// Brush from an image; fully transparent pixels are left out
    pub fn from_pixfmt(pix: &Pixfmt<Rgba8>) -> Self {
        let (width, height) = (pix.width(), pix.height());
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0 .. height {
            for x in 0 .. width {
                let c = pix.get((x,y));
                pixels.push(if c.is_transparent() { None } else { Some(c) });
            }
        }
        Self { width, height, pixels }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Color at (`x`,`y`) in the brush
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba8> {
        self.pixels[y * self.width + x]
    }
    /// Draw the brush centered on (`x`,`y`)
    ///
    /// Runs of equal colors within a row are written as single spans
    pub fn stamp<T: Pixel>(&self, ren: &mut RenderingBase<T>, x: i64, y: i64) {
        let x0 = x - (self.width / 2) as i64;
        let y0 = y - (self.height / 2) as i64;
        for j in 0 .. self.height {
            let row = &self.pixels[j * self.width .. (j+1) * self.width];
            let mut i = 0;
            while i < row.len() {
                let c = match row[i] {
                    Some(c) => c,
                    None => { i += 1; continue; }
                };
                let start = i;
                while i < row.len() && row[i] == Some(c) {
                    i += 1;
                }
                ren.copy_span(x0 + start as i64, x0 + i as i64 - 1, y0 + j as i64,
                              &mut Paint::Solid(c));
            }
        }
    }
}

/// Style of a stroked polyline
#[derive(Debug,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StrokeStyle {
    /// Width of line in pixels, 1.0
    width: f64,
    /// Alternating on / off run lengths in pixels, empty for solid lines
    pattern: Vec<f64>,
    /// Line Cap Style, Butt
    line_cap: LineCap,
    /// Line Join Style, Miter
    line_join: LineJoin,
    color: Rgba8,
    /// Outline drawn beneath the line, None
    outline_color: Option<Rgba8>,
    /// Width of the outline on each side of the line, 0.0
    outline_width: f64,
    /// Custom brush replacing the synthetic square brush, None
    brush: Option<Brush>,
}

impl StrokeStyle {
    /// Solid single pixel line of color `color`
    pub fn new(color: Rgba8) -> Self {
        Self {
            width: 1.0,
            pattern: vec![],
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            color,
            outline_color: None,
            outline_width: 0.0,
            brush: None,
        }
    }
    /// Set the Line Width
    pub fn width(&mut self, width: f64) {
        self.width = width;
    }
    /// Set the dash pattern; run lengths alternate on and off, starting on
    pub fn pattern(&mut self, pattern: &[f64]) {
        self.pattern = pattern.to_vec();
    }
    /// Set Line cap style
    ///
    /// `Round` draws with a disc shaped brush, `Butt` and `Square` with a
    ///   square brush
    pub fn line_cap(&mut self, line_cap: LineCap) {
        self.line_cap = line_cap;
    }
    /// Set Line Join style
    ///
    /// `Round` draws with a disc shaped brush
    pub fn line_join(&mut self, line_join: LineJoin) {
        self.line_join = line_join;
    }
    pub fn color(&mut self, color: Rgba8) {
        self.color = color;
    }
    /// Draw an outline of `width` pixels on each side of the line
    pub fn outline(&mut self, color: Rgba8, width: f64) {
        self.outline_color = Some(color);
        self.outline_width = width;
    }
    /// Use a custom brush for the line
    pub fn brush(&mut self, brush: Brush) {
        self.brush = Some(brush);
    }
    pub fn get_width(&self) -> f64 {
        self.width
    }
    pub fn get_color(&self) -> Rgba8 {
        self.color
    }
    /// Check all numeric values are finite and not negative
    pub fn validate(&self, origin: &'static str) -> Result<()> {
        check_non_negative(origin, "width", self.width)?;
        check_non_negative(origin, "outline width", self.outline_width)?;
        for &p in &self.pattern {
            check_non_negative(origin, "pattern length", p)?;
        }
        Ok(())
    }
    fn round(&self) -> bool {
        self.line_cap == LineCap::Round || self.line_join == LineJoin::Round
    }
    /// Synthetic brush for a line `width` pixels wide
    fn synthetic_brush(&self, width: f64, color: Rgba8) -> Brush {
        let size = width.ceil() as usize;
        log::debug!("BRUSH: {}x{} round: {}", size, size, self.round());
        if self.round() {
            Brush::disc(size, color)
        } else {
            Brush::square(size, color)
        }
    }
}

/// Pixel writer for one pass over the shape
enum Pen<'a> {
    /// Single pixels, optionally dashed
    Thin(Rgba8),
    /// Brush stamped on each pixel
    Wide(&'a Brush),
}

impl<'a> Pen<'a> {
    /// Pixels reached on either side of the line
    fn reach(&self) -> f64 {
        match self {
            Pen::Thin(_) => 0.0,
            Pen::Wide(b) => (b.width().max(b.height()) / 2 + 1) as f64,
        }
    }
}

/// Draw every ring of `shape` as an open polyline
///
/// Rings with fewer than 2 points are skipped. Invalid style values are
///   reported before anything is drawn.
pub fn render_stroke<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape, style: &StrokeStyle) -> Result<()> {
    style.validate("render_stroke")?;

    if let Some(oc) = style.outline_color {
        if style.outline_width > 0.0 {
            let w = style.width + 2.0 * style.outline_width;
            let brush = style.synthetic_brush(w, oc);
            stroke_pass(ren, shape, &style.pattern, oc, Pen::Wide(&brush));
        }
    }
    match &style.brush {
        Some(brush) => stroke_pass(ren, shape, &style.pattern, style.color, Pen::Wide(brush)),
        None if style.width <= 1.0 => {
            stroke_pass(ren, shape, &style.pattern, style.color, Pen::Thin(style.color))
        },
        None => {
            let brush = style.synthetic_brush(style.width, style.color);
            stroke_pass(ren, shape, &style.pattern, style.color, Pen::Wide(&brush))
        },
    }
    Ok(())
}

fn stroke_pass<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape, pattern: &[f64],
                         color: Rgba8, pen: Pen) {
    let mut dash = DashStyle::new(pattern, color);
    let (xmin, xmax, ymin, ymax) = ren.limits();
    let pad = pen.reach() + 1.0;
    let view = Rectangle::new(xmin as f64 - pad, ymin as f64 - pad,
                              xmax as f64 + pad, ymax as f64 + pad);
    for line in &shape.lines {
        if line.len() < 2 {
            continue;
        }
        if let Some(d) = dash.as_mut() {
            d.reset();
        }
        for (k, seg) in line.points.windows(2).enumerate() {
            let (a, b) = (seg[0], seg[1]);
            if ! (a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
                log::debug!("STROKE: skipping segment {:?} {:?}", a, b);
                continue;
            }
            // The first pixel of a segment is the last of the previous one
            let first = if k == 0 { 0 } else { 1 };
            if view.contains(a.x, a.y) && view.contains(b.x, b.y) {
                let pts = BresenhamLine::new(nint(a.x), nint(a.y), nint(b.x), nint(b.y));
                draw_pixels(ren, pts.skip(first), &pen, dash.as_mut());
                continue;
            }
            let a = (a.x.round(), a.y.round());
            let b = (b.x.round(), b.y.round());
            match clip_segment(a, b, &view) {
                None => {
                    if let Some(d) = dash.as_mut() {
                        d.skip(steps(a, b).saturating_add(1).saturating_sub(first));
                    }
                },
                Some((c0, c1)) => {
                    let head = steps(a, c0);
                    if let Some(d) = dash.as_mut() {
                        d.skip(head.saturating_sub(first));
                    }
                    let pts = BresenhamLine::new(c0.0 as i64, c0.1 as i64, c1.0 as i64, c1.1 as i64);
                    draw_pixels(ren, pts.skip(first.saturating_sub(head)), &pen, dash.as_mut());
                    if let Some(d) = dash.as_mut() {
                        d.skip(steps(c1, b));
                    }
                },
            }
        }
    }
}

fn draw_pixels<T, I>(ren: &mut RenderingBase<T>, pts: I, pen: &Pen, mut dash: Option<&mut DashStyle>)
    where T: Pixel, I: Iterator<Item = (i64, i64)>
{
    for (x, y) in pts {
        match (pen, dash.as_deref_mut()) {
            (Pen::Thin(c), None) => ren.copy_pixel(x, y, *c),
            (Pen::Thin(_), Some(d)) => ren.copy_span(x, x, y, &mut Paint::Styled(d)),
            (Pen::Wide(b), None) => b.stamp(ren, x, y),
            (Pen::Wide(b), Some(d)) => {
                if d.next().is_some() {
                    b.stamp(ren, x, y);
                }
            },
        }
    }
}

/// Number of Bresenham steps between two pixel positions
fn steps(a: (f64, f64), b: (f64, f64)) -> usize {
    (b.0 - a.0).abs().max((b.1 - a.1).abs()) as usize
}

/// Part of the segment `a` `b` inside `r`, end points on whole pixels
///
/// Clips along x, then along y, sliding the other coordinate along the line
fn clip_segment(a: (f64, f64), b: (f64, f64), r: &Rectangle<f64>) -> Option<((f64, f64), (f64, f64))> {
    let flip = |p: (f64, f64)| (p.1, p.0);
    let (a, b) = clip_1d(a, b, r.x1, r.x2)?;
    let (a, b) = clip_1d(flip(a), flip(b), r.y1, r.y2)?;
    let (a, b) = (flip(a), flip(b));
    let snap = |p: (f64, f64)| (p.0.round().max(r.x1).min(r.x2), p.1.round().max(r.y1).min(r.y2));
    Some((snap(a), snap(b)))
}

/// Clip a segment to `lo ..= hi` along the first coordinate
fn clip_1d(a: (f64, f64), b: (f64, f64), lo: f64, hi: f64) -> Option<((f64, f64), (f64, f64))> {
    if (a.0 < lo && b.0 < lo) || (a.0 > hi && b.0 > hi) {
        return None;
    }
    let slope = (b.1 - a.1) / (b.0 - a.0);
    let clamp = |p: (f64, f64)| {
        let x = p.0.max(lo).min(hi);
        if x == p.0 { p } else { (x, p.1 + slope * (x - p.0)) }
    };
    Some((clamp(a), clamp(b)))
}
