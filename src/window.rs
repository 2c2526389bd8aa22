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

use crate::settings::WindowDefaults;
use crate::text_layout::{ellipsize, truncate};
use crate::{CLOSE_BUTTON_WIDTH, CHAR_W, Color, Context, Event, MARGIN, Recti, TITLE_BAR_HEIGHT, TITLE_LENGTH, WindowId, rect};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Window behaviour and decoration switches.
    pub struct WindowFlags : u32 {
        /// Keeps width and height changing together while resizing.
        const KEEP_RATIO = 32;
        /// Shows the resize mark and accepts resize drags.
        const RESIZABLE = 16;
        /// Allows dragging by the title bar.
        const MOVEABLE = 8;
        /// The window is drawn and hit-tested.
        const VISIBLE = 4;
        /// Draws a close button at the right of the title bar.
        const CLOSE_BUTTON = 2;
        /// Draws a title bar above the body.
        const TITLE_BAR = 1;
        /// Nothing enabled.
        const NONE = 0;
    }
}

impl WindowFlags {
    /// Returns `true` if the window has a title bar.
    pub fn has_title_bar(&self) -> bool { self.intersects(Self::TITLE_BAR) }
    /// Returns `true` if the title bar carries a close button.
    pub fn has_close_button(&self) -> bool { self.intersects(Self::CLOSE_BUTTON) }
    /// Returns `true` if the window is shown.
    pub fn is_visible(&self) -> bool { self.intersects(Self::VISIBLE) }
    /// Returns `true` if the window can be dragged.
    pub fn is_moveable(&self) -> bool { self.intersects(Self::MOVEABLE) }
    /// Returns `true` if the window can be resized.
    pub fn is_resizable(&self) -> bool { self.intersects(Self::RESIZABLE) }
    /// Returns `true` if resizing keeps the aspect ratio.
    pub fn keeps_ratio(&self) -> bool { self.intersects(Self::KEEP_RATIO) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Per-window palette.
pub struct WindowColors {
    /// Frame lines around body and title bar.
    pub frame: Color,
    /// Body background.
    pub background: Color,
    /// Resize mark dots.
    pub resize_mark: Color,
    /// Title text.
    pub title_text: Color,
    /// Top of the title bar gradient.
    pub title_bar_top: Color,
    /// Bottom of the title bar gradient.
    pub title_bar_bottom: Color,
    /// Close button glyph.
    pub close_button_text: Color,
    /// Top of the close button gradient.
    pub close_button_top: Color,
    /// Bottom of the close button gradient.
    pub close_button_bottom: Color,
}

/// Callback invoked with window level events. Captured state plays the role of user data.
pub type WindowCallback = Box<dyn FnMut(&mut Context, WindowId, &Event)>;

/// A top-level window. `x`/`y` is the body origin; the title bar sits above it.
pub struct Window {
    /// Body x in surface coordinates.
    pub x: i32,
    /// Body y in surface coordinates.
    pub y: i32,
    /// Body width.
    pub w: i32,
    /// Body height.
    pub h: i32,
    /// Minimum width kept while resizing.
    pub min_w: i32,
    /// Minimum height kept while resizing.
    pub min_h: i32,
    /// Maximum width, 0 for unbounded.
    pub max_w: i32,
    /// Maximum height, 0 for unbounded.
    pub max_h: i32,
    /// Decoration and behaviour flags.
    pub flags: WindowFlags,
    /// Glyph drawn on the close button.
    pub close_char: u8,
    /// Gap between the frame and the widget area.
    pub margin: i32,
    /// Palette.
    pub colors: WindowColors,
    title: String,
    pub(crate) callback: Option<WindowCallback>,
}

impl Window {
    pub(crate) fn new(x: i32, y: i32, w: i32, h: i32, title: &str, defaults: &WindowDefaults) -> Self {
        Self {
            x,
            y,
            w,
            h,
            min_w: defaults.min_w,
            min_h: defaults.min_h,
            max_w: defaults.max_w,
            max_h: defaults.max_h,
            flags: defaults.flags,
            close_char: defaults.close_char,
            margin: defaults.margin,
            colors: defaults.colors,
            title: truncate(title, TITLE_LENGTH - 1).to_string(),
            callback: None,
        }
    }

    /// Returns the title.
    pub fn title(&self) -> &str { &self.title }

    /// Replaces the title, truncating it to the title capacity.
    pub fn set_title(&mut self, title: &str) { self.title = truncate(title, TITLE_LENGTH - 1).to_string(); }

    /// Installs the event callback.
    pub fn set_callback(&mut self, callback: impl FnMut(&mut Context, WindowId, &Event) + 'static) { self.callback = Some(Box::new(callback)); }

    /// Removes the event callback.
    pub fn clear_callback(&mut self) { self.callback = None; }

    /// Returns `true` if a callback is installed.
    pub fn has_callback(&self) -> bool { self.callback.is_some() }

    /// Body rectangle in surface coordinates.
    pub fn body(&self) -> Recti { rect(self.x, self.y, self.w, self.h) }

    /// Height of the title bar, 0 when there is none.
    pub fn title_bar_height(&self) -> i32 { if self.flags.has_title_bar() { TITLE_BAR_HEIGHT } else { 0 } }

    /// Strict hit test over body and title bar.
    pub(crate) fn contains(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.x + self.w && y < self.y + self.h && y > self.y - self.title_bar_height()
    }

    pub(crate) fn in_close_button(&self, x: i32) -> bool { self.flags.has_close_button() && x > self.x + self.w - CLOSE_BUTTON_WIDTH }

    pub(crate) fn in_resize_corner(&self, x: i32, y: i32) -> bool {
        self.flags.is_resizable() && x < self.x + self.w && x > self.x + self.w - MARGIN && y < self.y + self.h && y > self.y + self.h - MARGIN
    }

    /// Clamps the size into `[min, max]`; a zero maximum is unbounded.
    pub(crate) fn clamp_size(&mut self) {
        if self.w < self.min_w {
            self.w = self.min_w;
        } else if self.max_w > 0 && self.w > self.max_w {
            self.w = self.max_w;
        }
        if self.h < self.min_h {
            self.h = self.min_h;
        } else if self.max_h > 0 && self.h > self.max_h {
            self.h = self.max_h;
        }
    }

    /// Width of the title area not covered by the close button.
    pub(crate) fn title_area_width(&self) -> i32 { if self.flags.has_close_button() { self.w - CLOSE_BUTTON_WIDTH } else { self.w } }

    /// Title as drawn: cut with a `...` suffix when it overflows the title area.
    pub fn display_title(&self) -> String {
        let max_chars = ((self.title_area_width() - 2 * MARGIN) / CHAR_W).max(0) as usize;
        ellipsize(&self.title, max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    fn window(w: i32, h: i32, title: &str) -> Window { Window::new(100, 100, w, h, title, &Settings::default().window) }

    #[test]
    fn copies_defaults() {
        let win = window(200, 100, "hello");
        assert_eq!((win.min_w, win.min_h, win.max_w, win.max_h), (80, 50, 0, 0));
        assert!(win.flags.has_title_bar() && win.flags.has_close_button());
        assert!(win.flags.is_visible() && win.flags.is_moveable());
        assert!(!win.flags.is_resizable() && !win.flags.keeps_ratio());
        assert_eq!(win.close_char, b'X');
        assert_eq!(win.margin, 8);
    }

    #[test]
    fn title_is_bounded() {
        let mut win = window(200, 100, &"t".repeat(500));
        assert_eq!(win.title().len(), TITLE_LENGTH - 1);
        win.set_title("short");
        assert_eq!(win.title(), "short");
    }

    #[test]
    fn long_titles_get_an_ellipsis() {
        // (120 - 20 - 16) / 8 = 10 columns
        let win = window(120, 100, "A rather long title");
        assert_eq!(win.display_title(), "A rathe...");
        let mut win = window(120, 100, "Fits");
        assert_eq!(win.display_title(), "Fits");
        win.flags.remove(WindowFlags::CLOSE_BUTTON);
        win.set_title("A rather long title");
        assert_eq!(win.display_title().len(), 13);
    }

    #[test]
    fn hit_test_includes_title_bar() {
        let mut win = window(200, 100, "");
        assert!(win.contains(150, 90));
        assert!(!win.contains(100, 150));
        assert!(!win.contains(150, 80));
        win.flags.remove(WindowFlags::TITLE_BAR);
        assert!(!win.contains(150, 90));
    }

    #[test]
    fn clamp_respects_unbounded_max() {
        let mut win = window(10, 10, "");
        win.clamp_size();
        assert_eq!((win.w, win.h), (80, 50));
        win.w = 5000;
        win.clamp_size();
        assert_eq!(win.w, 5000);
        win.max_w = 300;
        win.clamp_size();
        assert_eq!(win.w, 300);
    }

    #[test]
    fn resize_corner_requires_flag() {
        let mut win = window(200, 100, "");
        assert!(!win.in_resize_corner(297, 197));
        win.flags.insert(WindowFlags::RESIZABLE);
        assert!(win.in_resize_corner(297, 197));
        assert!(!win.in_resize_corner(290, 197));
    }
}
