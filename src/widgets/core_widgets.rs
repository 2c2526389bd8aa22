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
use std::rc::Rc;

use crate::text_layout::bounded_text;
use crate::{Bitmap, Color};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Text widget palette.
pub struct TextColors {
    /// Glyph color.
    pub text: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Button palette.
pub struct ButtonColors {
    /// Label color.
    pub text: Color,
    /// Frame color.
    pub frame: Color,
    /// Top of the body gradient (bottom while pressed).
    pub top: Color,
    /// Bottom of the body gradient (top while pressed).
    pub bottom: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Check box palette.
pub struct CheckBoxColors {
    /// Check mark color.
    pub mark: Color,
    /// Frame color.
    pub frame: Color,
    /// Box background.
    pub background: Color,
}

#[derive(Clone, Debug)]
/// Static text wrapped inside the widget rectangle.
pub struct Text {
    text: String,
    /// Palette.
    pub colors: TextColors,
}

impl Text {
    pub(crate) fn new(text: &str, colors: TextColors) -> Self { Self { text: bounded_text(text), colors } }

    /// Returns the text.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the text, truncating it to the buffer capacity.
    pub fn set_text(&mut self, text: &str) { self.text = bounded_text(text); }
}

#[derive(Clone, Debug)]
/// Push button; its size is derived from the label.
pub struct Button {
    text: String,
    /// Palette.
    pub colors: ButtonColors,
}

impl Button {
    pub(crate) fn new(text: &str, colors: ButtonColors) -> Self { Self { text: bounded_text(text), colors } }

    /// Returns the label.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the label, truncating it to the buffer capacity.
    pub fn set_text(&mut self, text: &str) { self.text = bounded_text(text); }
}

#[derive(Clone, Debug)]
/// Two state check box.
pub struct CheckBox {
    /// Checked state.
    pub state: bool,
    /// Palette.
    pub colors: CheckBoxColors,
}

impl CheckBox {
    pub(crate) fn new(colors: CheckBoxColors) -> Self { Self { state: false, colors } }

    /// Flips the checked state.
    pub fn toggle(&mut self) { self.state = !self.state; }
}

#[derive(Clone)]
/// Shows the region of `bitmap` starting at `(src_x, src_y)`.
pub struct SurfaceView {
    /// Source x offset inside the bitmap.
    pub src_x: i32,
    /// Source y offset inside the bitmap.
    pub src_y: i32,
    /// Shared bitmap; the widget does not own its pixels exclusively.
    pub bitmap: Rc<Bitmap>,
}

impl SurfaceView {
    pub(crate) fn new(bitmap: Rc<Bitmap>) -> Self { Self { src_x: 0, src_y: 0, bitmap } }
}
