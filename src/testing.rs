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
//! Test doubles for the host collaborators.

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;

use crate::{Bitmap, Color, Dimensioni, KeyRepeat, Platform, Recti, Surface, SurfaceView, Vec2i, color};

/// Default filter when `RUST_LOG` is unset: this crate at debug, everything else at warn.
const DEFAULT_FILTER: &str = "warn,microwin=debug";

/// Sends `tracing` output through the test harness writer. Safe to call from every test.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().compact().with_env_filter(filter).with_test_writer().try_init();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Fill((i32, i32, i32, i32), Color),
    Stroke((i32, i32, i32, i32), Color),
    HLine(i32, i32, i32, Color),
    VLine(i32, i32, i32, Color),
    Thick((i32, i32), (i32, i32), i32, Color),
    Pixel(i32, i32, Color),
    Glyph(i32, i32, u8, Color),
    Text(i32, i32, String, Color),
    Blit((i32, i32, i32, i32), (i32, i32)),
}

fn t(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

/// Surface that records every primitive instead of rasterizing.
pub struct RecordingSurface {
    size: Dimensioni,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(w: i32, h: i32) -> Self { Self { size: Dimensioni::new(w, h), ops: Vec::new() } }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, s, _) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn glyphs(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph(_, _, ch, _) => Some(*ch),
                _ => None,
            })
            .collect()
    }

    pub fn pixels(&self) -> usize { self.ops.iter().filter(|op| matches!(op, Op::Pixel(..))).count() }

    pub fn position(&self, op: &Op) -> Option<usize> { self.ops.iter().position(|o| o == op) }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Dimensioni { self.size }
    fn fill_rect(&mut self, r: Recti, color: Color) { self.ops.push(Op::Fill(t(r), color)); }
    fn stroke_rect(&mut self, r: Recti, color: Color) { self.ops.push(Op::Stroke(t(r), color)); }
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) { self.ops.push(Op::HLine(x0, x1, y, color)); }
    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) { self.ops.push(Op::VLine(x, y0, y1, color)); }
    fn thick_line(&mut self, from: Vec2i, to: Vec2i, width: i32, color: Color) { self.ops.push(Op::Thick((from.x, from.y), (to.x, to.y), width, color)); }
    fn pixel(&mut self, x: i32, y: i32, color: Color) { self.ops.push(Op::Pixel(x, y, color)); }
    fn glyph(&mut self, x: i32, y: i32, ch: u8, color: Color) { self.ops.push(Op::Glyph(x, y, ch, color)); }
    fn text(&mut self, x: i32, y: i32, text: &str, color: Color) { self.ops.push(Op::Text(x, y, text.to_string(), color)); }
    fn blit(&mut self, _bitmap: &Bitmap, src: Recti, dst: Vec2i) { self.ops.push(Op::Blit(t(src), (dst.x, dst.y))); }
}

/// Platform whose clock only moves when the test advances it.
#[derive(Clone, Default)]
pub struct ManualPlatform {
    now: Rc<Cell<u32>>,
    repeat: Rc<Cell<KeyRepeat>>,
}

impl ManualPlatform {
    pub fn advance(&self, ms: u32) { self.now.set(self.now.get() + ms); }

    pub fn repeat(&self) -> KeyRepeat { self.repeat.get() }

    pub fn set_repeat(&self, repeat: KeyRepeat) { self.repeat.set(repeat); }
}

impl Platform for ManualPlatform {
    fn ticks(&self) -> u32 { self.now.get() }
    fn key_repeat(&self) -> KeyRepeat { self.repeat.get() }
    fn set_key_repeat(&mut self, repeat: KeyRepeat) { self.repeat.set(repeat); }
}

pub fn bitmap_view(w: i32, h: i32, src_x: i32, src_y: i32) -> SurfaceView {
    let mut view = SurfaceView::new(Rc::new(Bitmap::new(w, h, color(0, 0, 0, 255))));
    view.src_x = src_x;
    view.src_y = src_y;
    view
}
