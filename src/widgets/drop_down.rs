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
use bitflags::bitflags;

use crate::text_layout::bounded_text;
use crate::{Color, count_lines, line};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Drop-down behaviour switches.
    pub struct DropDownFlags : u32 {
        /// Wheel ticks over the header step the selection.
        const MOUSE_WHEEL = 1;
        /// Nothing enabled.
        const NONE = 0;
    }
}

impl DropDownFlags {
    /// Returns `true` if the wheel steps the selection.
    pub fn uses_wheel(&self) -> bool { self.intersects(Self::MOUSE_WHEEL) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Drop-down palette.
pub struct DropDownColors {
    /// Item text.
    pub text: Color,
    /// Frames.
    pub frame: Color,
    /// Header background.
    pub background: Color,
    /// Flyout background.
    pub list: Color,
    /// Band under the hovered flyout row.
    pub highlight: Color,
    /// Arrow glyph.
    pub arrow: Color,
}

#[derive(Clone, Debug)]
/// Single choice among newline separated items.
pub struct DropDownList {
    text: String,
    current: usize,
    max_item: usize,
    /// Flags.
    pub flags: DropDownFlags,
    /// Palette.
    pub colors: DropDownColors,
}

impl DropDownList {
    pub(crate) fn new(text: &str, flags: DropDownFlags, colors: DropDownColors) -> Self {
        let mut list = Self { text: String::new(), current: 0, max_item: 0, flags, colors };
        list.set_text(text);
        list
    }

    /// Newline separated items.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the items; the selection is clamped to the new item count.
    pub fn set_text(&mut self, text: &str) {
        self.text = bounded_text(text);
        self.max_item = count_lines(&self.text) - 1;
        self.current = self.current.min(self.max_item);
    }

    /// Index of the selected item.
    pub fn current_item(&self) -> usize { self.current }

    /// Selects `index`, clamped to the last item.
    pub fn set_current_item(&mut self, index: usize) { self.current = index.min(self.max_item); }

    /// Index of the last item.
    pub fn max_item(&self) -> usize { self.max_item }

    /// Text of item `index`.
    pub fn item(&self, index: usize) -> Option<&str> { line(&self.text, index) }

    /// Text of the selected item.
    pub fn selected_item(&self) -> &str { self.item(self.current).unwrap_or("") }

    /// Moves the selection by `delta` items, clamped to the list.
    pub fn step(&mut self, delta: i32) {
        let next = self.current as i64 + delta as i64;
        self.current = next.clamp(0, self.max_item as i64) as usize;
    }
}
