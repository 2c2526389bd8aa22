//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::io::{Error, ErrorKind};

#[cfg(feature = "png_source")]
use std::io::Cursor;

#[cfg(feature = "png_source")]
use png::{BitDepth, ColorType, Decoder, Transformations};

use crate::{CHAR_H, CHAR_W, Color, Dimensioni, Recti, Vec2i, color, rect};

/// Drawing primitives supplied by the host. Coordinates are surface-absolute; implementations clip.
pub trait Surface {
    /// Current drawable size.
    fn size(&self) -> Dimensioni;
    /// Fills `r` with `color`.
    fn fill_rect(&mut self, r: Recti, color: Color);
    /// Draws a one pixel outline along the inside edge of `r`.
    fn stroke_rect(&mut self, r: Recti, color: Color);
    /// Draws a horizontal line from `x0` to `x1` inclusive.
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color);
    /// Draws a vertical line from `y0` to `y1` inclusive.
    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color);
    /// Draws a line `width` pixels thick between two points.
    fn thick_line(&mut self, from: Vec2i, to: Vec2i, width: i32, color: Color);
    /// Sets a single pixel.
    fn pixel(&mut self, x: i32, y: i32, color: Color);
    /// Draws one 8x12 glyph with its top-left corner at `(x, y)`.
    fn glyph(&mut self, x: i32, y: i32, ch: u8, color: Color);
    /// Draws a run of glyphs; the default walks the bytes with [`Surface::glyph`].
    fn text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (i, ch) in text.bytes().enumerate() {
            self.glyph(x + i as i32 * CHAR_W, y, ch, color);
        }
    }
    /// Copies `src` (bitmap coordinates, already inside the bitmap) to `dst`.
    fn blit(&mut self, bitmap: &Bitmap, src: Recti, dst: Vec2i);
}

/// Source of bitmap pixels.
pub enum ImageSource<'a> {
    /// Raw RGBA bytes, four per pixel, row major.
    Raw {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// `width * height * 4` bytes.
        pixels: &'a [u8],
    },
    #[cfg(feature = "png_source")]
    /// An encoded PNG image.
    Png {
        /// File contents.
        bytes: &'a [u8],
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// RGBA pixel store shown by surface widgets.
pub struct Bitmap {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

fn pixel_count(width: i32, height: i32) -> usize { width.max(0) as usize * height.max(0) as usize }

impl Bitmap {
    /// Creates a bitmap filled with `fill`. Negative sizes become empty.
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self { width, height, pixels: vec![fill; pixel_count(width, height)] }
    }

    /// Decodes pixels according to `source`.
    /// Grayscale and RGB PNG inputs are expanded to opaque RGBA.
    pub fn from_source(source: ImageSource) -> std::io::Result<Self> {
        match source {
            ImageSource::Raw { width, height, pixels } => {
                if width <= 0 || height <= 0 {
                    return Err(Error::new(ErrorKind::InvalidInput, "bitmap dimensions must be positive"));
                }
                let expected = width as usize * height as usize * 4;
                if pixels.len() != expected {
                    return Err(Error::new(ErrorKind::InvalidData, format!("expected {} RGBA bytes, found {}", expected, pixels.len())));
                }
                let pixels = pixels.chunks_exact(4).map(|c| color(c[0], c[1], c[2], c[3])).collect();
                Ok(Self { width, height, pixels })
            }
            #[cfg(feature = "png_source")]
            ImageSource::Png { bytes } => decode_png(bytes),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// Pixel at `(x, y)`, `None` outside the bitmap.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Overwrites the pixel at `(x, y)`; out of range writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, c: Color) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = c;
        }
    }

    /// Row major pixel data.
    pub fn pixels(&self) -> &[Color] { &self.pixels }
}

#[cfg(feature = "png_source")]
fn decode_png(bytes: &[u8]) -> std::io::Result<Bitmap> {
    let mut decoder = Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(|e| Error::new(ErrorKind::InvalidData, format!("PNG decode error: {}", e)))?;
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| Error::new(ErrorKind::InvalidData, "PNG decoder did not report output size"))?;
    let mut data = vec![0; buf_size];
    let info = reader.next_frame(&mut data)?;
    if info.bit_depth != BitDepth::Eight {
        return Err(Error::new(ErrorKind::InvalidData, format!("unsupported PNG bit depth: {:?}", info.bit_depth)));
    }
    let pixel_size = match info.color_type {
        ColorType::Grayscale | ColorType::Indexed => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
    };
    let mut pixels = Vec::with_capacity((info.width * info.height) as usize);
    for y in 0..info.height as usize {
        let line = &data[y * info.line_size..(y + 1) * info.line_size];
        for x in 0..info.width as usize {
            let p = &line[x * pixel_size..];
            pixels.push(match info.color_type {
                ColorType::Grayscale => color(p[0], p[0], p[0], 0xFF),
                ColorType::GrayscaleAlpha => color(p[0], p[0], p[0], p[1]),
                ColorType::Rgb => color(p[0], p[1], p[2], 0xFF),
                ColorType::Rgba => color(p[0], p[1], p[2], p[3]),
                ColorType::Indexed => return Err(Error::new(ErrorKind::InvalidData, "indexed PNGs are not supported")),
            });
        }
    }
    Ok(Bitmap { width: info.width as i32, height: info.height as i32, pixels })
}

/// Composite drawing helpers over a [`Surface`].
pub struct Canvas<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Canvas<'a, S> {
    /// Wraps a surface for one render pass.
    pub fn new(surface: &'a mut S) -> Self { Self { surface } }

    /// Size of the underlying surface.
    pub fn size(&self) -> Dimensioni { self.surface.size() }

    /// Direct access to the primitives.
    pub fn surface(&mut self) -> &mut S { self.surface }

    /// Fills `r` row by row, blending from `top` on the first row to `bottom` on the last.
    pub fn gradient(&mut self, r: Recti, top: Color, bottom: Color) {
        let steps = (r.height - 1).max(1);
        for i in 0..r.height {
            self.surface.hline(r.x, r.x + r.width - 1, r.y + i, top.mix(bottom, i, steps));
        }
    }

    /// Draws `lines` one text row apart, starting at `(x, y)`.
    pub fn text_lines<'t>(&mut self, x: i32, y: i32, lines: impl IntoIterator<Item = &'t str>, color: Color) {
        for (i, line) in lines.into_iter().enumerate() {
            self.surface.text(x, y + i as i32 * CHAR_H, line, color);
        }
    }

    /// Blits the part of `bitmap` starting at `(src_x, src_y)` into `dst`, clipped to the bitmap and the surface.
    pub fn blit_clipped(&mut self, bitmap: &Bitmap, src_x: i32, src_y: i32, dst: Recti) {
        let size = self.surface.size();
        let mut sx = src_x;
        let mut sy = src_y;
        let mut dx = dst.x;
        let mut dy = dst.y;
        let mut w = dst.width;
        let mut h = dst.height;
        // clip against the bitmap origin and the surface origin
        let shift_x = (-sx).max(-dx).max(0);
        let shift_y = (-sy).max(-dy).max(0);
        sx += shift_x;
        dx += shift_x;
        w -= shift_x;
        sy += shift_y;
        dy += shift_y;
        h -= shift_y;
        w = w.min(bitmap.width() - sx).min(size.width - dx);
        h = h.min(bitmap.height() - sy).min(size.height - dy);
        if w <= 0 || h <= 0 {
            return;
        }
        self.surface.blit(bitmap, rect(sx, sy, w, h), Vec2i::new(dx, dy));
    }
}
