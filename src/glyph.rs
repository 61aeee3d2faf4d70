//! TrueType Symbols
//!
//! Fonts are opened once and kept in a [FontCache] owned by the caller,
//!   usually one per renderer. Glyphs are rendered by FreeType into a
//!   coverage bitmap which is then placed like a pixmap symbol.
//!
//! Requires the `truetype` feature; without it every TrueType symbol fails
//!   with `Error::Unsupported`.
//!
//! [FontCache]: struct.FontCache.html

use crate::base::RenderingBase;
use crate::symbol::{SymbolDef, SymbolStyle};
use crate::error::*;
use crate::Pixel;

#[cfg(feature = "truetype")]
use crate::color::Rgba8;
#[cfg(feature = "truetype")]
use crate::math::multiply_u8;
#[cfg(feature = "truetype")]
use crate::pixfmt::Pixfmt;
#[cfg(feature = "truetype")]
use crate::symbol::{SymbolKind, stamp_image};
#[cfg(feature = "truetype")]
use crate::nint;
#[cfg(feature = "truetype")]
use crate::Color;

#[cfg(feature = "truetype")]
use std::collections::HashMap;
#[cfg(feature = "truetype")]
use std::path::Path;

#[cfg(feature = "truetype")]
use freetype as ft;
#[cfg(feature = "truetype")]
use font_loader::system_fonts;

/// Open font faces, keyed by the name used in symbol definitions
pub struct FontCache {
    #[cfg(feature = "truetype")]
    lib: ft::Library,
    #[cfg(feature = "truetype")]
    faces: HashMap<String, ft::Face>,
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "FontCache {{ faces: {} }}", self.len())
    }
}

#[cfg(feature = "truetype")]
impl FontCache {
    /// Start the font library
    pub fn new() -> Result<Self> {
        let lib = ft::Library::init()
            .map_err(|e| Error::font("FontCache", e.to_string()))?;
        Ok(Self { lib, faces: HashMap::new() })
    }
    /// Number of open faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
    /// Face for `font`, opened on first use
    ///
    /// `font` is tried as a file name, then as a system font family
    fn face(&mut self, font: &str) -> Result<&ft::Face> {
        if ! self.faces.contains_key(font) {
            let face = if Path::new(font).is_file() {
                self.lib.new_face(font, 0)
                    .map_err(|e| Error::font("render_truetype_symbol", format!("{}: {}", font, e)))?
            } else {
                let prop = system_fonts::FontPropertyBuilder::new().family(font).build();
                let (data, index) = system_fonts::get(&prop)
                    .ok_or_else(|| Error::font("render_truetype_symbol", format!("font not found: {}", font)))?;
                self.lib.new_memory_face(data, index as isize)
                    .map_err(|e| Error::font("render_truetype_symbol", format!("{}: {}", font, e)))?
            };
            log::debug!("FONT CACHE: opened {}", font);
            self.faces.insert(font.to_string(), face);
        }
        self.faces.get(font)
            .ok_or_else(|| Error::font("render_truetype_symbol", format!("font not found: {}", font)))
    }
}

#[cfg(not(feature = "truetype"))]
impl FontCache {
    pub fn new() -> Result<Self> {
        Ok(Self { })
    }
    pub fn len(&self) -> usize {
        0
    }
    pub fn is_empty(&self) -> bool {
        true
    }
}

/// Coverage of a glyph painted in `color`
#[cfg(feature = "truetype")]
fn glyph_image(face: &ft::Face, character: char, size: u32, color: Rgba8) -> Result<Option<Pixfmt<Rgba8>>> {
    let err = |e: ft::Error| Error::font("render_truetype_symbol", e.to_string());
    face.set_pixel_sizes(0, size).map_err(err)?;
    face.load_char(character as usize, ft::face::LoadFlag::RENDER).map_err(err)?;
    let bitmap = face.glyph().bitmap();
    let (w, h, pitch) = (bitmap.width(), bitmap.rows(), bitmap.pitch());
    if w <= 0 || h <= 0 {
        return Ok(None);
    }
    let buf = bitmap.buffer();
    let mut img = Pixfmt::<Rgba8>::new(w as usize, h as usize);
    for j in 0 .. h {
        for i in 0 .. w {
            let cover = buf[(j * pitch.abs() + i) as usize];
            if cover > 0 {
                let a = multiply_u8(color.alpha8(), cover);
                img.set((i as usize, j as usize), color.with_alpha(a));
            }
        }
    }
    Ok(Some(img))
}

/// Draw a TrueType symbol centered on (`x`,`y`)
///
/// The glyph is `size_y * scale` pixels high. An outline is drawn by
///   offsetting the glyph by the outline width in every direction.
#[cfg(feature = "truetype")]
pub fn render_truetype_symbol<T: Pixel>(ren: &mut RenderingBase<T>, x: f64, y: f64,
                                        def: &SymbolDef, style: &SymbolStyle,
                                        fonts: &mut FontCache) -> Result<()> {
    const ORIGIN : &str = "render_truetype_symbol";
    style.validate(ORIGIN)?;
    let (font, character) = match &def.kind {
        SymbolKind::Truetype { font, character } => (font, *character),
        _ => return Err(Error::style(ORIGIN, "not a truetype symbol")),
    };
    let size = nint(def.size_y * style.get_scale()).max(1) as u32;
    let angle = style.get_rotation().map(|a| -a).unwrap_or(0.0);
    let face = fonts.face(font)?;

    if let (Some(oc), w) = style.get_outline() {
        if w > 0.0 {
            if let Some(img) = glyph_image(face, character, size, oc)? {
                for &(ox, oy) in [(-w,-w), (0.0,-w), (w,-w), (-w,0.0),
                                  (w,0.0), (-w,w), (0.0,w), (w,w)].iter() {
                    stamp_image(ren, x + ox, y + oy, &img, 1.0, angle);
                }
            }
        }
    }
    if let Some(c) = style.get_color() {
        if let Some(img) = glyph_image(face, character, size, c)? {
            stamp_image(ren, x, y, &img, 1.0, angle);
        }
    }
    Ok(())
}

/// Draw a TrueType symbol; always fails without the `truetype` feature
#[cfg(not(feature = "truetype"))]
pub fn render_truetype_symbol<T: Pixel>(_ren: &mut RenderingBase<T>, _x: f64, _y: f64,
                                        _def: &SymbolDef, _style: &SymbolStyle,
                                        _fonts: &mut FontCache) -> Result<()> {
    Err(Error::unsupported("render_truetype_symbol",
                           "truetype symbols need the `truetype` feature"))
}
