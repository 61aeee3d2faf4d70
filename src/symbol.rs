//! Symbols
//!
//! Symbols are drawn centered on a point. Vector symbols are lists of
//!   sub-paths in symbol space, `[0,size_x] x [0,size_y]`, which are either
//!   filled by the scanline rasterizer or stroked. Ellipse, pixmap and
//!   TrueType symbols share the same placement and rotation rules.
//!
//!     use mapraster::*;
//!
//!     let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(20,20));
//!     let square = SymbolDef::vector(&[Point::new(0.0,0.0), Point::new(0.0,4.0),
//!                                      Point::new(4.0,4.0), Point::new(4.0,0.0)], true);
//!     let mut style = SymbolStyle::new();
//!     style.color(Rgba8::black());
//!     style.scale(2.0);
//!     render_symbol(&mut ren, 10.0, 10.0, &square, &style, None).unwrap();
//!     assert_eq!(ren.get(10,10), Some(Rgba8::black()));
//!     assert_eq!(ren.get(1,1), Some(Rgba8::transparent()));
//!

use crate::base::RenderingBase;
use crate::color::Rgba8;
use crate::ellipse::ellipse;
use crate::geometry::*;
use crate::glyph::{FontCache, render_truetype_symbol};
use crate::pixfmt::Pixfmt;
use crate::render::render_polygon;
use crate::stroke::*;
use crate::error::*;
use crate::Color;
use crate::Pixel;
use crate::Source;

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

use std::f64::consts::PI;

/// Tolerance for rotation angles and bounding box origins
const EPS : f64 = 1e-9;

/// What a symbol draws
#[derive(Debug,Clone,PartialEq)]
pub enum SymbolKind {
    /// Sub-paths of points in symbol space
    Vector { paths: Vec<Vec<Point>> },
    /// Ellipse filling the symbol box
    Ellipse,
    /// Image
    Pixmap(Pixfmt<Rgba8>),
    /// Single character of a font, `font` is a file name or a family name
    Truetype { font: String, character: char },
}

/// Symbol definition
#[derive(Debug,Clone,PartialEq)]
pub struct SymbolDef {
    pub kind: SymbolKind,
    /// Width in symbol space
    pub size_x: f64,
    /// Height in symbol space
    pub size_y: f64,
    /// Fill vector and ellipse symbols instead of stroking them
    pub filled: bool,
}

impl SymbolDef {
    /// Vector symbol from a point list using PEN-UP markers between sub-paths
    ///
    /// The size is taken from the largest coordinates
    pub fn vector(points: &[Point], filled: bool) -> Self {
        let mut paths = vec![];
        let mut cur : Vec<Point> = vec![];
        for p in points {
            if p.is_pen_up() {
                if ! cur.is_empty() {
                    paths.push(std::mem::take(&mut cur));
                }
            } else {
                cur.push(*p);
            }
        }
        if ! cur.is_empty() {
            paths.push(cur);
        }
        Self::from_paths(paths, filled)
    }
    /// Vector symbol from sub-paths; the size is taken from the largest coordinates
    pub fn from_paths(paths: Vec<Vec<Point>>, filled: bool) -> Self {
        let mut size_x : f64 = 0.0;
        let mut size_y : f64 = 0.0;
        for p in paths.iter().flatten() {
            size_x = size_x.max(p.x);
            size_y = size_y.max(p.y);
        }
        Self { kind: SymbolKind::Vector { paths }, size_x, size_y, filled }
    }
    /// Ellipse with diameters `size_x` and `size_y`
    pub fn ellipse(size_x: f64, size_y: f64, filled: bool) -> Self {
        Self { kind: SymbolKind::Ellipse, size_x, size_y, filled }
    }
    /// Image symbol, one pixel per unit of symbol space
    pub fn pixmap(pix: Pixfmt<Rgba8>) -> Self {
        let (size_x, size_y) = (pix.width() as f64, pix.height() as f64);
        Self { kind: SymbolKind::Pixmap(pix), size_x, size_y, filled: true }
    }
    /// Character `character` of the font `font`, `size` pixels high
    pub fn truetype(font: &str, character: char, size: f64) -> Self {
        Self {
            kind: SymbolKind::Truetype { font: font.to_string(), character },
            size_x: size, size_y: size, filled: true,
        }
    }
    /// Point list of a vector symbol with PEN-UP markers between sub-paths
    pub fn to_points(&self) -> Vec<Point> {
        let mut out = vec![];
        if let SymbolKind::Vector { paths } = &self.kind {
            for (i, path) in paths.iter().enumerate() {
                if i > 0 {
                    out.push(Point::pen_up());
                }
                out.extend_from_slice(path);
            }
        }
        out
    }
    /// Copy of a vector symbol rotated counter-clockwise on screen by `angle` radians
    ///
    /// Points turn about the center of the symbol, then the copy is shifted
    ///   back so its bounding box starts at the origin and resized to it.
    ///   Other kinds of symbols are returned unchanged.
    pub fn rotate(&self, angle: f64) -> Self {
        let paths = match &self.kind {
            SymbolKind::Vector { paths } => paths,
            _ => return self.clone(),
        };
        let (sin, cos) = (-angle).sin_cos();
        let cx = self.size_x / 2.0;
        let cy = self.size_y / 2.0;
        let mut paths : Vec<Vec<Point>> = paths.iter().map(|path| {
            path.iter().map(|p| {
                let (dx, dy) = (p.x - cx, p.y - cy);
                Point::new(cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
            }).collect()
        }).collect();

        let pts : Vec<Point> = paths.iter().flatten().cloned().collect();
        let (mut size_x, mut size_y) = (self.size_x, self.size_y);
        if let Some(r) = bounding_rect(&pts) {
            let tx = if r.x1.abs() > EPS { -r.x1 } else { 0.0 };
            let ty = if r.y1.abs() > EPS { -r.y1 } else { 0.0 };
            for p in paths.iter_mut().flatten() {
                p.x += tx;
                p.y += ty;
            }
            size_x = r.x2 + tx;
            size_y = r.y2 + ty;
        }
        log::debug!("ROTATE SYMBOL: {} rad, size {}x{} -> {}x{}",
                    angle, self.size_x, self.size_y, size_x, size_y);
        Self { kind: SymbolKind::Vector { paths }, size_x, size_y, filled: self.filled }
    }
}

/// Style of a symbol placement
#[derive(Debug,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SymbolStyle {
    /// Symbol space to pixels, 1.0
    scale: f64,
    /// Counter-clockwise rotation on screen in radians, 0.0
    rotation: f64,
    /// Fill color, or line color of unfilled symbols, None
    color: Option<Rgba8>,
    /// None
    outline_color: Option<Rgba8>,
    /// 1.0
    outline_width: f64,
    /// Line width of unfilled symbols, 1.0
    width: f64,
}

impl Default for SymbolStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            color: None,
            outline_color: None,
            outline_width: 1.0,
            width: 1.0,
        }
    }
}

impl SymbolStyle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn scale(&mut self, scale: f64) {
        self.scale = scale;
    }
    /// Set the rotation; positive angles turn counter-clockwise on screen
    pub fn rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }
    pub fn color(&mut self, color: Rgba8) {
        self.color = Some(color);
    }
    pub fn outline(&mut self, color: Rgba8, width: f64) {
        self.outline_color = Some(color);
        self.outline_width = width;
    }
    pub fn width(&mut self, width: f64) {
        self.width = width;
    }
    pub fn get_scale(&self) -> f64 {
        self.scale
    }
    pub fn get_color(&self) -> Option<Rgba8> {
        self.color
    }
    pub fn get_outline(&self) -> (Option<Rgba8>, f64) {
        (self.outline_color, self.outline_width)
    }
    /// Rotation, or None when it is a whole number of turns
    pub fn get_rotation(&self) -> Option<f64> {
        let r = self.rotation.rem_euclid(2.0 * PI);
        if r < EPS || 2.0 * PI - r < EPS {
            None
        } else {
            Some(self.rotation)
        }
    }
    /// Check numeric values; rotation may be any finite value
    pub fn validate(&self, origin: &'static str) -> Result<()> {
        check_non_negative(origin, "scale", self.scale)?;
        check_non_negative(origin, "outline width", self.outline_width)?;
        check_non_negative(origin, "width", self.width)?;
        if ! self.rotation.is_finite() {
            return Err(Error::style(origin, format!("rotation must be finite, got {}", self.rotation)));
        }
        Ok(())
    }
    fn line_style(&self, color: Rgba8, width: f64) -> StrokeStyle {
        let mut s = StrokeStyle::new(color);
        s.width(width);
        s
    }
}

/// Draw any kind of symbol centered on (`x`,`y`)
///
/// TrueType symbols need a font cache; without one, or without the
///   `truetype` feature, they fail with `Error::Unsupported`
pub fn render_symbol<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                               def: &SymbolDef, style: &SymbolStyle,
                               fonts: Option<&mut FontCache>) -> Result<()> {
    match &def.kind {
        SymbolKind::Vector { .. } => render_vector_symbol(ren, x, y, def, style),
        SymbolKind::Ellipse => render_ellipse_symbol(ren, x, y, def, style),
        SymbolKind::Pixmap(_) => render_pixmap_symbol(ren, x, y, def, style),
        SymbolKind::Truetype { .. } => match fonts {
            Some(fonts) => render_truetype_symbol(ren, x, y, def, style, fonts),
            None => Err(Error::unsupported("render_symbol", "truetype symbol without a font cache")),
        },
    }
}

/// Draw a vector symbol centered on (`x`,`y`)
pub fn render_vector_symbol<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                                      def: &SymbolDef, style: &SymbolStyle) -> Result<()> {
    const ORIGIN : &str = "render_vector_symbol";
    style.validate(ORIGIN)?;
    let rotated;
    let def = match style.get_rotation() {
        Some(angle) => {
            rotated = def.rotate(angle);
            &rotated
        },
        None => def,
    };
    let paths = match &def.kind {
        SymbolKind::Vector { paths } => paths,
        _ => return Err(Error::style(ORIGIN, "not a vector symbol")),
    };
    let scale = style.scale;
    let px = x - scale * 0.5 * def.size_x;
    let py = y - scale * 0.5 * def.size_y;
    let place = |path: &Vec<Point>| -> Vec<Point> {
        path.iter().map(|p| Point::new(px + p.x * scale, py + p.y * scale)).collect()
    };

    if def.filled {
        for path in paths.iter().filter(|p| p.len() >= 3) {
            let ring = place(path);
            if let Some(c) = style.color {
                render_polygon(ren, &Shape::with_lines(vec![ring.clone()]), c)?;
            }
            if let Some(oc) = style.outline_color {
                let mut closed = ring;
                closed.push(closed[0]);
                let ls = style.line_style(oc, style.outline_width);
                render_stroke(ren, &Shape::with_lines(vec![closed]), &ls)?;
            }
        }
    } else if let Some(c) = style.color.or(style.outline_color) {
        let lines : Vec<_> = paths.iter().map(place).collect();
        render_stroke(ren, &Shape::with_lines(lines), &style.line_style(c, style.width))?;
    }
    Ok(())
}

/// Draw an ellipse symbol centered on (`x`,`y`)
pub fn render_ellipse_symbol<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                                       def: &SymbolDef, style: &SymbolStyle) -> Result<()> {
    style.validate("render_ellipse_symbol")?;
    let rx = style.scale * def.size_x / 2.0;
    let ry = style.scale * def.size_y / 2.0;
    let angle = style.get_rotation().map(|a| -a).unwrap_or(0.0);
    let ring = ellipse(x, y, rx, ry, angle);
    if def.filled {
        if let Some(c) = style.color {
            render_polygon(ren, &Shape::with_lines(vec![ring.clone()]), c)?;
        }
        if let Some(oc) = style.outline_color {
            let mut closed = ring;
            closed.push(closed[0]);
            render_stroke(ren, &Shape::with_lines(vec![closed]),
                          &style.line_style(oc, style.outline_width))?;
        }
    } else if let Some(c) = style.color.or(style.outline_color) {
        let mut closed = ring;
        closed.push(closed[0]);
        render_stroke(ren, &Shape::with_lines(vec![closed]), &style.line_style(c, style.width))?;
    }
    Ok(())
}

/// Draw a pixmap symbol centered on (`x`,`y`)
pub fn render_pixmap_symbol<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                                      def: &SymbolDef, style: &SymbolStyle) -> Result<()> {
    const ORIGIN : &str = "render_pixmap_symbol";
    style.validate(ORIGIN)?;
    match &def.kind {
        SymbolKind::Pixmap(pix) => {
            let angle = style.get_rotation().map(|a| -a).unwrap_or(0.0);
            stamp_image(ren, x, y, pix, style.scale, angle);
            Ok(())
        },
        _ => Err(Error::style(ORIGIN, "not a pixmap symbol")),
    }
}

/// Copy `img` centered on (`x`,`y`), scaled by `scale` and rotated by
///   `angle` radians (x towards y)
///
/// Each target pixel samples the nearest image pixel; transparent pixels
///   are skipped and translucent ones blended
pub(crate) fn stamp_image<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                                    img: &Pixfmt<Rgba8>, scale: f64, angle: f64) {
    if scale <= 0.0 {
        return;
    }
    let hw = img.width() as f64 * scale / 2.0;
    let hh = img.height() as f64 * scale / 2.0;
    let (sin, cos) = angle.sin_cos();
    // Extent of the rotated image around its center
    let ex = (hw * cos).abs() + (hh * sin).abs();
    let ey = (hw * sin).abs() + (hh * cos).abs();
    let (x0, x1) = ((x - ex).floor() as i64, (x + ex).ceil() as i64);
    let (y0, y1) = ((y - ey).floor() as i64, (y + ey).ceil() as i64);
    let (w, h) = (img.width() as f64, img.height() as f64);
    for py in y0 .. y1 {
        for px in x0 .. x1 {
            let dx = px as f64 + 0.5 - x;
            let dy = py as f64 + 0.5 - y;
            // Inverse rotation back into the image
            let u = (dx * cos + dy * sin + hw) / scale;
            let v = (-dx * sin + dy * cos + hh) / scale;
            if u < 0.0 || v < 0.0 || u >= w || v >= h {
                continue;
            }
            let c = img.get((u as usize, v as usize));
            if ! c.is_transparent() {
                ren.copy_pixel(px, py, c);
            }
        }
    }
}

impl Brush {
    /// Brush showing the symbol `def` drawn with `style`
    ///
    /// The brush is just large enough for the scaled symbol
    pub fn from_symbol(def: &SymbolDef, style: &SymbolStyle) -> Result<Brush> {
        let w = (def.size_x * style.scale).ceil().max(1.0) as usize;
        let h = (def.size_y * style.scale).ceil().max(1.0) as usize;
        let mut ren = RenderingBase::new(Pixfmt::<Rgba8>::new(w, h));
        render_symbol(&mut ren, w as f64 / 2.0, h as f64 / 2.0, def, style, None)?;
        Ok(Brush::from_pixfmt(&ren.pixf))
    }
}
