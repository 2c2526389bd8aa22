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
//! Resolves declared widget geometry into window-relative rectangles.
//!
//! Every function here is pure; the router hit-tests and the renderer draws against the same results.

use crate::text_layout::{widest, wrap_lines};
use crate::{
    CHAR_H, CHAR_W, CHECK_BOX_SIZE, DROP_DOWN_SIZE, Dimensioni, DropDownList, MARGIN, Recti, SLIDER_THICKNESS, Widget, WidgetKind, Window, rect,
};

/// Number of glyph columns that fit in `w` pixels; a partly covered column counts. At least 1.
pub fn grid_cols(w: i32) -> usize { ((w + CHAR_W - 1) / CHAR_W).max(1) as usize }

/// Number of text rows that fit in `h` pixels; a partly covered row counts. At least 1.
pub fn grid_rows(h: i32) -> usize { ((h + CHAR_H - 1) / CHAR_H).max(1) as usize }

/// Returns `true` if the widget's declared origin lies beyond the window's margin boundary.
/// Such widgets are neither drawn nor hit-tested.
pub fn is_out_of_window(widget: &Widget, window: &Window) -> bool { widget.x > window.w - window.margin || widget.y > window.h - window.margin }

fn fill(origin: i32, declared: i32, extent: i32, margin: i32) -> i32 {
    if declared <= 0 || origin + declared > extent - margin { extent - margin - origin } else { declared }
}

/// The shared rule: origin raised to the margin, zero or overflowing sizes fill up to the margin.
pub(crate) fn base_rect(x: i32, y: i32, w: i32, h: i32, window: &Window) -> Recti {
    let x = x.max(window.margin);
    let y = y.max(window.margin);
    rect(x, y, fill(x, w, window.w, window.margin), fill(y, h, window.h, window.margin))
}

/// Columns available to a button label before it wraps.
pub(crate) fn button_cols(window: &Window) -> usize { ((window.w - 2 * MARGIN - 2 * window.margin) / CHAR_W).max(1) as usize }

fn pull_back(origin: i32, size: i32, extent: i32, margin: i32) -> i32 { origin.max(margin).min(extent - margin - size) }

fn button_rect(widget: &Widget, text: &str, window: &Window) -> Recti {
    let lines = wrap_lines(text, button_cols(window));
    let mut w = widest(&lines).max(1) as i32 * CHAR_W + 2 * MARGIN;
    let mut h = lines.len() as i32 * CHAR_H + MARGIN;
    let mut x = pull_back(widget.x, w, window.w, window.margin);
    let mut y = pull_back(widget.y, h, window.h, window.margin);
    if x < window.margin {
        x = window.margin;
        w = window.w - 2 * window.margin;
    }
    if y < window.margin {
        y = window.margin;
        h = window.h - 2 * window.margin;
    }
    rect(x, y, w, h)
}

fn check_box_rect(widget: &Widget, window: &Window) -> Recti {
    let x = pull_back(widget.x, CHECK_BOX_SIZE, window.w, window.margin);
    let y = pull_back(widget.y, CHECK_BOX_SIZE, window.h, window.margin);
    rect(x, y, CHECK_BOX_SIZE, CHECK_BOX_SIZE)
}

fn surface_rect(widget: &Widget, src_x: i32, src_y: i32, bitmap_w: i32, bitmap_h: i32, window: &Window) -> Recti {
    let clip = |declared: i32, src: i32, size: i32| if declared <= 0 || src + declared > size { size - src } else { declared };
    let w = clip(widget.w, src_x, bitmap_w);
    let h = clip(widget.h, src_y, bitmap_h);
    let mut r = base_rect(widget.x, widget.y, w.max(1), h.max(1), window);
    r.width = r.width.min(w).max(0);
    r.height = r.height.min(h).max(0);
    r
}

fn slider_h_rect(widget: &Widget, window: &Window) -> Recti {
    let r = base_rect(widget.x, widget.y, widget.w, SLIDER_THICKNESS, window);
    let y = r.y.min(window.h - window.margin - SLIDER_THICKNESS);
    rect(r.x, y, r.width, SLIDER_THICKNESS)
}

fn slider_v_rect(widget: &Widget, window: &Window) -> Recti {
    let r = base_rect(widget.x, widget.y, SLIDER_THICKNESS, widget.h, window);
    let x = r.x.min(window.w - window.margin - SLIDER_THICKNESS);
    rect(x, r.y, SLIDER_THICKNESS, r.height)
}

fn drop_down_rect(widget: &Widget, window: &Window) -> Recti {
    let r = base_rect(widget.x, widget.y, widget.w, DROP_DOWN_SIZE, window);
    let y = r.y.min(window.h - window.margin - DROP_DOWN_SIZE);
    rect(r.x, y, r.width, DROP_DOWN_SIZE)
}

/// Window-relative rectangle a widget occupies; add the window origin for surface coordinates.
pub fn widget_rect(widget: &Widget, window: &Window) -> Recti {
    match &widget.kind {
        WidgetKind::Text(_) | WidgetKind::InputBox(_) => base_rect(widget.x, widget.y, widget.w, widget.h, window),
        WidgetKind::Button(b) => button_rect(widget, b.text(), window),
        WidgetKind::CheckBox(_) => check_box_rect(widget, window),
        WidgetKind::Surface(s) => surface_rect(widget, s.src_x, s.src_y, s.bitmap.width(), s.bitmap.height(), window),
        WidgetKind::SliderH(_) => slider_h_rect(widget, window),
        WidgetKind::SliderV(_) => slider_v_rect(widget, window),
        WidgetKind::DropDownList(_) => drop_down_rect(widget, window),
    }
}

/// Surface-absolute rectangle of an open drop-down flyout.
///
/// The list opens below the header, or above it when it would run off the bottom of the
/// surface, and is kept horizontally inside the surface with a one pixel inset.
pub fn flyout_rect(header: Recti, list: &DropDownList, window: &Window, surface: Dimensioni) -> Recti {
    let lines = wrap_lines(list.text(), 0);
    let w = (widest(&lines) as i32 * CHAR_W + 2 * MARGIN).max(header.width);
    let h = lines.len() as i32 * CHAR_H;
    let left = window.x + header.x;
    let x = if left < 1 {
        1
    } else if left + w > surface.width {
        surface.width - w - 1
    } else {
        left
    };
    let top = window.y + header.y;
    let y = if top + DROP_DOWN_SIZE + h > surface.height { top - h - 1 } else { top + DROP_DOWN_SIZE + 1 };
    rect(x, y, w, h)
}

/// Places a `w` by `h` popup next to the pointer, flipping to the other side when it would leave the surface.
/// The result is then clamped into the surface; a popup larger than the surface is pinned to the origin.
pub(crate) fn popup_origin(pointer_x: i32, pointer_y: i32, w: i32, h: i32, surface: Dimensioni) -> (i32, i32) {
    let x = if pointer_x - MARGIN + w > surface.width { pointer_x + MARGIN - w } else { pointer_x - MARGIN };
    let y = if pointer_y - MARGIN + h > surface.height { pointer_y + MARGIN - h } else { pointer_y - MARGIN };
    (x.min(surface.width - w).max(0), y.min(surface.height - h).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, CheckBox, DropDownList, Settings, Slider, WindowId};
    use crate::testing::bitmap_view;

    fn window(w: i32, h: i32) -> Window { Window::new(250, 200, w, h, "test", &Settings::default().window) }

    fn widget(x: i32, y: i32, w: i32, h: i32, kind: WidgetKind) -> Widget { Widget::new(WindowId::dangling(), x, y, w, h, 0, kind) }

    fn text_kind() -> WidgetKind { WidgetKind::Text(crate::Text::new("", Settings::default().text)) }

    fn tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

    #[test]
    fn base_rule_fills_to_margin() {
        let win = window(400, 300);
        let input = widget(0, 25, 0, 22, text_kind());
        assert_eq!(tuple(widget_rect(&input, &win)), (8, 25, 384, 22));
        let overflow = widget(300, 280, 200, 50, text_kind());
        assert_eq!(tuple(widget_rect(&overflow, &win)), (300, 280, 92, 12));
        let fits = widget(20, 20, 100, 40, text_kind());
        assert_eq!(tuple(widget_rect(&fits, &win)), (20, 20, 100, 40));
    }

    #[test]
    fn grid_counts_partial_cells() {
        assert_eq!(grid_cols(368), 46);
        assert_eq!(grid_cols(369), 47);
        assert_eq!(grid_cols(0), 1);
        assert_eq!(grid_rows(6), 1);
        assert_eq!(grid_rows(30), 3);
    }

    #[test]
    fn button_sizes_from_text() {
        let win = window(400, 300);
        let b = widget(20, 30, 0, 0, WidgetKind::Button(Button::new("OK", Settings::default().button)));
        assert_eq!(tuple(widget_rect(&b, &win)), (20, 30, 32, 20));
        let two = widget(20, 30, 0, 0, WidgetKind::Button(Button::new("Yes\nCancel", Settings::default().button)));
        assert_eq!(tuple(widget_rect(&two, &win)), (20, 30, 64, 32));
    }

    #[test]
    fn button_pulls_back_from_far_edge() {
        let win = window(200, 100);
        let b = widget(190, 90, 0, 0, WidgetKind::Button(Button::new("Hello", Settings::default().button)));
        // w = 5 * 8 + 16 = 56, h = 12 + 8 = 20
        assert_eq!(tuple(widget_rect(&b, &win)), (136, 72, 56, 20));
    }

    #[test]
    fn button_falls_back_to_full_width() {
        let win = window(100, 60);
        // 8 columns per row: (100 - 16 - 16) / 8
        let b = widget(0, 0, 0, 0, WidgetKind::Button(Button::new(&"W".repeat(40), Settings::default().button)));
        let r = widget_rect(&b, &win);
        assert_eq!((r.x, r.width), (8, 80));
        assert_eq!((r.y, r.height), (8, 44));
    }

    #[test]
    fn check_box_is_fixed_size() {
        let win = window(200, 100);
        let c = widget(195, 2, 99, 99, WidgetKind::CheckBox(CheckBox::new(Settings::default().check_box)));
        assert_eq!(tuple(widget_rect(&c, &win)), (177, 8, 15, 15));
    }

    #[test]
    fn sliders_keep_fixed_thickness() {
        let win = window(200, 100);
        let defaults = Settings::default().slider;
        let h = widget(10, 95, 0, 0, WidgetKind::SliderH(Slider::new(0.0, 1.0, defaults.flags, defaults.colors)));
        assert_eq!(tuple(widget_rect(&h, &win)), (10, 82, 182, 10));
        let v = widget(195, 10, 0, 0, WidgetKind::SliderV(Slider::new(0.0, 1.0, defaults.flags, defaults.colors)));
        assert_eq!(tuple(widget_rect(&v, &win)), (182, 10, 10, 82));
    }

    #[test]
    fn surface_clips_to_bitmap() {
        let win = window(400, 300);
        let s = widget(10, 10, 0, 0, WidgetKind::Surface(bitmap_view(64, 32, 16, 0)));
        assert_eq!(tuple(widget_rect(&s, &win)), (10, 10, 48, 32));
        let big = widget(350, 10, 100, 20, WidgetKind::Surface(bitmap_view(200, 32, 0, 0)));
        assert_eq!(tuple(widget_rect(&big, &win)), (350, 10, 42, 20));
    }

    #[test]
    fn drop_down_header_stays_above_bottom_margin() {
        let win = window(200, 100);
        let defaults = Settings::default().drop_down;
        let d = widget(10, 90, 0, 0, WidgetKind::DropDownList(DropDownList::new("A\nB", defaults.flags, defaults.colors)));
        assert_eq!(tuple(widget_rect(&d, &win)), (10, 72, 182, 20));
    }

    #[test]
    fn flyout_opens_below_or_above() {
        let defaults = Settings::default().drop_down;
        let list = DropDownList::new("Alpha\nBeta\nGamma", defaults.flags, defaults.colors);
        let win = window(400, 300);
        let header = rect(8, 8, 100, 20);
        let surface = Dimensioni::new(800, 600);
        assert_eq!(tuple(flyout_rect(header, &list, &win, surface)), (258, 229, 100, 36));
        let low = Dimensioni::new(800, 240);
        assert_eq!(tuple(flyout_rect(header, &list, &win, low)), (258, 171, 100, 36));
    }

    #[test]
    fn flyout_clamps_horizontally_to_surface() {
        let defaults = Settings::default().drop_down;
        let list = DropDownList::new(&"x".repeat(30), defaults.flags, defaults.colors);
        let mut win = window(400, 300);
        let header = rect(8, 8, 100, 20);
        // 30 * 8 + 16 = 256 wide
        assert_eq!(flyout_rect(header, &list, &win, Dimensioni::new(300, 600)).x, 300 - 256 - 1);
        win.x = -50;
        assert_eq!(flyout_rect(header, &list, &win, Dimensioni::new(800, 600)).x, 1);
    }

    #[test]
    fn out_of_window_widgets_are_skipped() {
        let win = window(200, 100);
        assert!(is_out_of_window(&widget(193, 0, 0, 0, text_kind()), &win));
        assert!(is_out_of_window(&widget(0, 93, 0, 0, text_kind()), &win));
        assert!(!is_out_of_window(&widget(192, 92, 0, 0, text_kind()), &win));
    }

    #[test]
    fn popup_flips_near_edges() {
        let surface = Dimensioni::new(640, 480);
        assert_eq!(popup_origin(100, 100, 50, 40, surface), (92, 92));
        assert_eq!(popup_origin(630, 470, 50, 40, surface), (588, 438));
    }

    #[test]
    fn popup_stays_inside_surface() {
        let surface = Dimensioni::new(640, 480);
        assert_eq!(popup_origin(3, 3, 120, 40, surface), (0, 0));
        assert_eq!(popup_origin(20, 3, 120, 40, surface), (12, 0));
        // wider than the surface: left edge wins
        assert_eq!(popup_origin(300, 200, 700, 500, surface), (0, 0));
    }
}
