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
#![deny(missing_docs)]
//! `microwin` is a retained-mode windowing engine: overlapping windows, each owning an ordered list of
//! widgets, fed one raw input event at a time and drawn through a host supplied [`Surface`].
//! All geometry lives on a fixed 8x12 character grid so hit-testing and drawing agree pixel for pixel.

mod canvas;
mod context;
mod input;
mod layout;
mod platform;
mod render;
mod router;
mod settings;
mod store;
mod text_layout;
mod widgets;
mod window;

#[cfg(test)]
mod testing;

pub use canvas::*;
pub use context::Context;
pub use input::*;
pub use layout::{flyout_rect, grid_cols, grid_rows, is_out_of_window, widget_rect};
pub use platform::*;
pub use router::{GrabTarget, Interaction, PopupSchedule};
pub use rs_math3d::*;
pub use settings::*;
pub use store::{WidgetId, WindowId};
pub use text_layout::{count_lines, line};
pub use widgets::*;
pub use window::*;

/// Width of one glyph cell in pixels.
pub const CHAR_W: i32 = 8;
/// Height of one glyph cell (one text row) in pixels.
pub const CHAR_H: i32 = 12;
/// Inner margin between a widget frame and its text.
pub const MARGIN: i32 = 8;
/// Capacity of widget text buffers; stored text is at most `TEXT_LENGTH - 1` bytes.
pub const TEXT_LENGTH: usize = 4096;
/// Capacity of window titles; stored titles are at most `TITLE_LENGTH - 1` bytes.
pub const TITLE_LENGTH: usize = 128;
/// Side of the check box square.
pub const CHECK_BOX_SIZE: i32 = 15;
/// Height of a drop-down header, also the width of its arrow zone.
pub const DROP_DOWN_SIZE: i32 = 20;
/// Height of a single-row input box.
pub const INPUT_BOX_H: i32 = 22;
/// Length of the slider thumb along the track.
pub const SLIDER_THUMB: i32 = 15;
/// Thickness of the slider across the track.
pub const SLIDER_THICKNESS: i32 = 10;
/// Width of the line drawn through the middle of the track.
pub const SLIDER_LINE: i32 = 2;
/// Fraction of the slider maximum applied per wheel tick.
pub const SLIDER_WHEEL_STEP: f64 = 0.05;
/// Height of the window title bar.
pub const TITLE_BAR_HEIGHT: i32 = 20;
/// Width of the close button at the right end of the title bar.
pub const CLOSE_BUTTON_WIDTH: i32 = 20;
/// Glyph drawn as the drop-down arrow.
pub const ARROW_GLYPH: u8 = 31;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Linearly blends `self` towards `other` by `num / den`.
    pub fn mix(self, other: Color, num: i32, den: i32) -> Color {
        if den <= 0 {
            return self;
        }
        let num = num.clamp(0, den);
        let lerp = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * num / den) as u8;
        Color {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Expands (or shrinks) a rectangle uniformly on all sides.
pub fn expand_rect(r: Recti, n: i32) -> Recti { rect(r.x - n, r.y - n, r.width + n * 2, r.height + n * 2) }

/// Strict containment test: points on the border are outside.
pub fn strictly_inside(r: Recti, x: i32, y: i32) -> bool { x > r.x && x < r.x + r.width && y > r.y && y < r.y + r.height }
