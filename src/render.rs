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
//! Draws the whole scene through a [`Surface`].
//!
//! Windows are painted bottom to top and widgets oldest first, so later entries cover earlier
//! ones exactly where the router would hit them first. Every rectangle comes from the layout
//! module, the same source the router hit-tests against.

use tracing::trace;

use crate::layout::button_cols;
use crate::text_layout::{truncate, wrap_lines};
use crate::{
    ARROW_GLYPH, Axis, CHAR_H, CHAR_W, CHECK_BOX_SIZE, CLOSE_BUTTON_WIDTH, Canvas, Context, DROP_DOWN_SIZE, Interaction, MARGIN, Recti, SLIDER_LINE,
    SLIDER_THICKNESS, SLIDER_THUMB, Surface, TITLE_BAR_HEIGHT, Vec2i, Widget, WidgetId, WidgetKind, Window, expand_rect, grid_cols, grid_rows,
    is_out_of_window, rect, strictly_inside, widget_rect,
};

/// Resize mark dots, as offsets back from the bottom-right corner of the body.
const RESIZE_MARK: [(i32, i32); 8] = [(2, 2), (4, 2), (6, 2), (2, 4), (4, 4), (6, 4), (2, 6), (4, 6)];

/// Vertical offset that centers a text row inside a band `h` pixels high.
fn center_row(h: i32) -> i32 { ((h - CHAR_H) / 2).max(0) }

impl Context {
    /// Draws every visible window, then the open flyout on top of everything.
    ///
    /// The viewport is refreshed from the surface and a popup whose hover delay has elapsed
    /// is opened before anything is drawn.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.viewport = surface.size();
        self.activate_due_popup();

        let mut canvas = Canvas::new(surface);
        let mut drawn = 0;
        for id in self.store.windows() {
            let Some(window) = self.store.window(id).filter(|w| w.flags.is_visible()) else { continue };
            draw_window(&mut canvas, window);
            for widget_id in self.store.widgets_of(id) {
                let Some(widget) = self.store.widget(widget_id) else { continue };
                if !is_out_of_window(widget, window) {
                    self.draw_widget(&mut canvas, window, widget_id, widget);
                }
            }
            if window.flags.is_resizable() {
                draw_resize_mark(&mut canvas, window);
            }
            drawn += 1;
        }
        if let Interaction::DropDownOpen(id) = self.router.interaction {
            self.draw_flyout(&mut canvas, id);
        }
        trace!(windows = drawn, "frame rendered");
    }

    fn draw_widget<S: Surface + ?Sized>(&self, canvas: &mut Canvas<S>, window: &Window, id: WidgetId, widget: &Widget) {
        let r = widget_rect(widget, window);
        let a = rect(window.x + r.x, window.y + r.y, r.width, r.height);
        match &widget.kind {
            WidgetKind::Text(text) => {
                let lines = wrap_lines(text.text(), grid_cols(a.width));
                let rows = grid_rows(a.height);
                canvas.text_lines(a.x, a.y, lines.iter().take(rows).map(|l| l.slice(text.text())), text.colors.text);
            }
            WidgetKind::InputBox(_) => self.draw_input_box(canvas, id, widget, a),
            WidgetKind::Button(button) => {
                let c = button.colors;
                let pressed = self.router.interaction == Interaction::ButtonPressed(id);
                let (top, bottom) = if pressed { (c.bottom, c.top) } else { (c.top, c.bottom) };
                canvas.gradient(a, top, bottom);
                canvas.surface().stroke_rect(expand_rect(a, 1), c.frame);
                let lines = wrap_lines(button.text(), button_cols(window));
                let rows = grid_rows(a.height - 2 * MARGIN);
                canvas.text_lines(a.x + MARGIN, a.y + MARGIN / 2, lines.iter().take(rows).map(|l| l.slice(button.text())), c.text);
            }
            WidgetKind::CheckBox(check) => {
                let s = canvas.surface();
                s.fill_rect(rect(a.x + 1, a.y + 1, CHECK_BOX_SIZE - 1, CHECK_BOX_SIZE - 1), check.colors.background);
                s.stroke_rect(rect(a.x, a.y, CHECK_BOX_SIZE + 1, CHECK_BOX_SIZE + 1), check.colors.frame);
                if check.state {
                    s.glyph(a.x + (CHECK_BOX_SIZE - CHAR_W) / 2 + 1, a.y + center_row(CHECK_BOX_SIZE) + 1, b'X', check.colors.mark);
                }
            }
            WidgetKind::Surface(view) => canvas.blit_clipped(&view.bitmap, view.src_x, view.src_y, a),
            WidgetKind::SliderH(slider) => {
                let c = slider.colors;
                let mid = a.y + SLIDER_THICKNESS / 2;
                let offset = slider.thumb_offset(Axis::Horizontal, a.width);
                let s = canvas.surface();
                s.thick_line(Vec2i::new(a.x, mid), Vec2i::new(a.x + a.width, mid), SLIDER_LINE, c.line);
                let thumb = rect(a.x + offset, a.y, SLIDER_THUMB, SLIDER_THICKNESS);
                s.fill_rect(thumb, c.slider);
                s.stroke_rect(expand_rect(thumb, 1), c.frame);
            }
            WidgetKind::SliderV(slider) => {
                let c = slider.colors;
                let mid = a.x + SLIDER_THICKNESS / 2;
                let offset = slider.thumb_offset(Axis::Vertical, a.height);
                let s = canvas.surface();
                s.thick_line(Vec2i::new(mid, a.y), Vec2i::new(mid, a.y + a.height), SLIDER_LINE, c.line);
                let thumb = rect(a.x, a.y + offset, SLIDER_THICKNESS, SLIDER_THUMB);
                s.fill_rect(thumb, c.slider);
                s.stroke_rect(expand_rect(thumb, 1), c.frame);
            }
            WidgetKind::DropDownList(list) => {
                let c = list.colors;
                let s = canvas.surface();
                s.fill_rect(a, c.background);
                s.stroke_rect(expand_rect(a, 1), c.frame);
                let arrow_x = a.x + a.width - DROP_DOWN_SIZE;
                s.vline(arrow_x, a.y, a.y + DROP_DOWN_SIZE - 1, c.frame);
                s.glyph(arrow_x + (DROP_DOWN_SIZE - CHAR_W) / 2, a.y + center_row(DROP_DOWN_SIZE), ARROW_GLYPH, c.arrow);
                let cols = grid_cols(a.width - 2 * MARGIN - DROP_DOWN_SIZE);
                s.text(a.x + MARGIN, a.y + center_row(DROP_DOWN_SIZE), truncate(list.selected_item(), cols), c.text);
            }
        }
    }

    fn draw_input_box<S: Surface + ?Sized>(&self, canvas: &mut Canvas<S>, id: WidgetId, widget: &Widget, a: Recti) {
        let Some(input) = widget.as_input_box() else { return };
        let c = input.colors;
        let editing = matches!(self.router.interaction, Interaction::Editing { widget, .. } if widget == id);
        let s = canvas.surface();
        s.fill_rect(rect(a.x + 1, a.y + 1, a.width - 1, a.height - 1), if editing { c.background_active } else { c.background });
        s.stroke_rect(rect(a.x, a.y, a.width + 1, a.height + 1), c.frame);

        let mut edit = input.edit;
        edit.fit(a.width - 2 * MARGIN, a.height - 2 * MARGIN);
        edit.clamp(input.text().len());
        let (ox, oy) = (a.x + MARGIN, a.y + MARGIN);
        let visible = &input.text()[edit.first..];
        for (row, chunk) in visible.as_bytes().chunks(edit.cols.max(1)).take(edit.rows()).enumerate() {
            let y = oy + row as i32 * CHAR_H;
            if input.flags.is_hidden() {
                let mask: String = std::iter::repeat_n(input.mask_char as char, chunk.len()).collect();
                s.text(ox, y, &mask, c.text);
            } else {
                s.text(ox, y, &String::from_utf8_lossy(chunk), c.text);
            }
        }
        if editing {
            if let Some((col, row)) = edit.caret_cell() {
                let x = ox + col as i32 * CHAR_W;
                let y = oy + row as i32 * CHAR_H;
                s.vline(x, y - 2, y + CHAR_H - 2, c.cursor);
            }
        }
    }

    fn draw_flyout<S: Surface + ?Sized>(&self, canvas: &mut Canvas<S>, id: WidgetId) {
        let Some(list) = self.store.widget(id).and_then(|w| w.as_drop_down()) else { return };
        let Some(f) = self.flyout_of(id) else { return };
        let c = list.colors;
        let pointer = self.router.pointer;
        let s = canvas.surface();
        s.fill_rect(f, c.list);
        s.stroke_rect(rect(f.x - 1, f.y, f.width + 2, f.height + 2), c.frame);
        if strictly_inside(f, pointer.x, pointer.y) {
            let row = (pointer.y - f.y) / CHAR_H;
            s.fill_rect(rect(f.x, f.y + row * CHAR_H + 1, f.width, CHAR_H), c.highlight);
        }
        canvas.text_lines(f.x + MARGIN, f.y + 1, list.text().split('\n'), c.text);
    }
}

fn draw_window<S: Surface + ?Sized>(canvas: &mut Canvas<S>, win: &Window) {
    let c = win.colors;
    if win.flags.has_title_bar() {
        let top = win.y - TITLE_BAR_HEIGHT;
        let title_w = win.title_area_width();
        canvas.gradient(rect(win.x, top, title_w, TITLE_BAR_HEIGHT - 1), c.title_bar_top, c.title_bar_bottom);
        let s = canvas.surface();
        s.hline(win.x - 1, win.x + win.w, top - 1, c.frame);
        s.vline(win.x - 1, top, win.y - 2, c.frame);
        s.vline(win.x + win.w, top, win.y - 2, c.frame);
        if win.flags.has_close_button() {
            let left = win.x + win.w - CLOSE_BUTTON_WIDTH;
            canvas.gradient(rect(left + 1, top, CLOSE_BUTTON_WIDTH - 1, TITLE_BAR_HEIGHT - 1), c.close_button_top, c.close_button_bottom);
            let s = canvas.surface();
            s.vline(left, top, win.y - 2, c.frame);
            s.glyph(left + (CLOSE_BUTTON_WIDTH - CHAR_W) / 2, top + center_row(TITLE_BAR_HEIGHT), win.close_char, c.close_button_text);
        }
        let title = win.display_title();
        if !title.is_empty() {
            let x = win.x + title_w / 2 - title.len() as i32 * CHAR_W / 2;
            canvas.surface().text(x, top + center_row(TITLE_BAR_HEIGHT), &title, c.title_text);
        }
    }
    let s = canvas.surface();
    s.fill_rect(win.body(), c.background);
    s.stroke_rect(expand_rect(win.body(), 1), c.frame);
}

fn draw_resize_mark<S: Surface + ?Sized>(canvas: &mut Canvas<S>, win: &Window) {
    let (right, bottom) = (win.x + win.w, win.y + win.h);
    for (dx, dy) in RESIZE_MARK {
        canvas.surface().pixel(right - dx, bottom - dy, win.colors.resize_mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualPlatform, Op, RecordingSurface, init_logging};
    use crate::{Bitmap, Dimensioni, InputEvent, InputFlags, KeyCode, MouseButton, WindowFlags, color};
    use std::rc::Rc;

    fn context() -> Context {
        init_logging();
        Context::new(Box::new(ManualPlatform::default()), Dimensioni::new(800, 600))
    }

    fn frame(ctx: &mut Context) -> RecordingSurface {
        let mut surface = RecordingSurface::new(800, 600);
        ctx.render(&mut surface);
        surface
    }

    fn press(ctx: &mut Context, x: i32, y: i32) { ctx.process_event(&InputEvent::MouseDown { button: MouseButton::Left, x, y }); }

    #[test]
    fn windows_draw_bottom_to_top_and_skip_hidden() {
        let mut ctx = context();
        let a = ctx.create_window(10, 30, 100, 60, "A");
        let b = ctx.create_window(50, 50, 100, 60, "B");
        let hidden = ctx.create_window(0, 0, 100, 60, "hidden");
        ctx.window_mut(hidden).unwrap().flags.remove(WindowFlags::VISIBLE);
        let bg = ctx.window(a).unwrap().colors.background;
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["A".to_string(), "B".to_string()]);
        let first = surface.position(&Op::Fill((10, 30, 100, 60), bg)).unwrap();
        let second = surface.position(&Op::Fill((50, 50, 100, 60), bg)).unwrap();
        assert!(first < second);

        ctx.raise_window(a);
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["B".to_string(), "A".to_string()]);
        assert!(ctx.window(b).is_some());
    }

    #[test]
    fn title_bar_has_gradient_close_glyph_and_centered_title() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 200, 100, "Hi");
        let c = ctx.window(win).unwrap().colors;
        let surface = frame(&mut ctx);
        // title area is 180 wide: rows 80..=98 of the gradient
        assert!(surface.ops.contains(&Op::HLine(100, 279, 80, c.title_bar_top)));
        assert!(surface.ops.contains(&Op::HLine(100, 279, 98, c.title_bar_bottom)));
        assert!(surface.ops.contains(&Op::HLine(281, 299, 80, c.close_button_top)));
        assert!(surface.ops.contains(&Op::VLine(280, 80, 98, c.frame)));
        assert!(surface.ops.contains(&Op::Glyph(286, 84, b'X', c.close_button_text)));
        assert!(surface.ops.contains(&Op::Text(100 + 90 - 8, 84, "Hi".to_string(), c.title_text)));
        assert!(surface.ops.contains(&Op::Stroke((99, 99, 202, 102), c.frame)));
    }

    #[test]
    fn long_titles_render_with_ellipsis() {
        let mut ctx = context();
        ctx.create_window(100, 100, 120, 100, "A rather long title");
        assert_eq!(frame(&mut ctx).texts(), vec!["A rathe...".to_string()]);
    }

    #[test]
    fn bare_window_has_no_title_ops() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 200, 100, "nothing");
        ctx.window_mut(win).unwrap().flags = WindowFlags::VISIBLE;
        let surface = frame(&mut ctx);
        assert!(surface.texts().is_empty());
        assert!(surface.glyphs().is_empty());
        assert_eq!(surface.ops.len(), 2);
    }

    #[test]
    fn resize_mark_only_when_resizable() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 200, 100, "");
        assert_eq!(frame(&mut ctx).pixels(), 0);
        ctx.window_mut(win).unwrap().flags.insert(WindowFlags::RESIZABLE);
        let surface = frame(&mut ctx);
        assert_eq!(surface.pixels(), 8);
        let mark = ctx.window(win).unwrap().colors.resize_mark;
        assert!(surface.ops.contains(&Op::Pixel(298, 198, mark)));
        assert!(surface.ops.contains(&Op::Pixel(296, 194, mark)));
        assert!(!surface.ops.contains(&Op::Pixel(298, 192, mark)));
    }

    #[test]
    fn widgets_draw_oldest_first_and_skip_out_of_window() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        ctx.attach_text(win, 10, 10, 100, 20, "first");
        ctx.attach_text(win, 10, 40, 100, 20, "second");
        ctx.attach_text(win, 295, 10, 0, 0, "hidden");
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn text_wraps_to_widget_width_and_clips_rows() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let id = ctx.attach_text(win, 10, 10, 32, 24, "abcdefghijkl").unwrap();
        let color = ctx.widget(id).unwrap().as_text().unwrap().colors.text;
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["abcd".to_string(), "efgh".to_string()]);
        assert!(surface.ops.contains(&Op::Text(110, 122, "efgh".to_string(), color)));
    }

    #[test]
    fn pressed_button_reverses_gradient() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let id = ctx.attach_button(win, 20, 30, "OK").unwrap();
        let c = ctx.widget(id).unwrap().as_button().unwrap().colors;
        let surface = frame(&mut ctx);
        assert!(surface.ops.contains(&Op::HLine(120, 151, 130, c.top)));
        assert!(surface.ops.contains(&Op::Text(128, 134, "OK".to_string(), c.text)));
        press(&mut ctx, 130, 140);
        let surface = frame(&mut ctx);
        assert!(surface.ops.contains(&Op::HLine(120, 151, 130, c.bottom)));
        assert!(surface.ops.contains(&Op::HLine(120, 151, 149, c.top)));
    }

    #[test]
    fn check_box_mark_follows_state() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let id = ctx.attach_check_box(win, 20, 20).unwrap();
        ctx.window_mut(win).unwrap().flags.remove(WindowFlags::CLOSE_BUTTON);
        assert!(frame(&mut ctx).glyphs().is_empty());
        ctx.widget_mut(id).unwrap().as_check_box_mut().unwrap().toggle();
        assert_eq!(frame(&mut ctx).glyphs(), vec![b'X']);
    }

    #[test]
    fn input_box_masks_text_and_draws_caret_while_editing() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let id = ctx.attach_input_box(win, 0, 0, 0, 22).unwrap();
        {
            let input = ctx.widget_mut(id).unwrap().as_input_box_mut().unwrap();
            input.set_text("secret");
            input.flags.insert(InputFlags::HIDE_TEXT);
        }
        let c = ctx.widget(id).unwrap().as_input_box().unwrap().colors;
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["******".to_string()]);
        assert!(surface.ops.contains(&Op::Fill((109, 109, 283, 21), c.background)));

        press(&mut ctx, 300, 115);
        let surface = frame(&mut ctx);
        assert!(surface.ops.contains(&Op::Fill((109, 109, 283, 21), c.background_active)));
        // caret after the sixth character
        assert!(surface.ops.contains(&Op::VLine(116 + 48, 114, 126, c.cursor)));
    }

    #[test]
    fn multi_row_input_box_splits_visible_text() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        // inner area 24 x 24: three columns, two rows
        let id = ctx.attach_input_box(win, 10, 10, 40, 40).unwrap();
        ctx.widget_mut(id).unwrap().as_input_box_mut().unwrap().set_text("abcdefgh");
        assert_eq!(frame(&mut ctx).texts(), vec!["abc".to_string(), "def".to_string()]);
        ctx.process_event(&InputEvent::MouseDown { button: MouseButton::Left, x: 115, y: 115 });
        assert!(matches!(ctx.interaction(), Interaction::Editing { .. }));
        ctx.process_event(&InputEvent::KeyDown { key: KeyCode::Backspace, ch: None });
        assert_eq!(ctx.widget(id).unwrap().as_input_box().unwrap().text(), "abcdefgh");
    }

    #[test]
    fn sliders_place_thumb_from_value() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let h = ctx.attach_slider_h(win, 10, 50, 115, 25.0, 100.0).unwrap();
        let v = ctx.attach_slider_v(win, 200, 10, 115, 25.0, 100.0).unwrap();
        let hc = ctx.widget(h).unwrap().as_slider().unwrap().colors;
        let vc = ctx.widget(v).unwrap().as_slider().unwrap().colors;
        let surface = frame(&mut ctx);
        assert!(surface.ops.contains(&Op::Thick((110, 155), (225, 155), SLIDER_LINE, hc.line)));
        assert!(surface.ops.contains(&Op::Fill((110 + 25, 150, SLIDER_THUMB, SLIDER_THICKNESS), hc.slider)));
        assert!(surface.ops.contains(&Op::Fill((300, 110 + 75, SLIDER_THICKNESS, SLIDER_THUMB), vc.slider)));
    }

    #[test]
    fn drop_down_header_and_flyout() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let id = ctx.attach_drop_down_list(win, 10, 10, 150, "Alpha\nBeta\nGamma").unwrap();
        ctx.window_mut(win).unwrap().flags.remove(WindowFlags::CLOSE_BUTTON);
        let c = ctx.widget(id).unwrap().as_drop_down().unwrap().colors;
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["Alpha".to_string()]);
        assert_eq!(surface.glyphs(), vec![ARROW_GLYPH]);
        assert!(surface.ops.contains(&Op::VLine(240, 110, 129, c.frame)));

        press(&mut ctx, 250, 120);
        ctx.process_event(&InputEvent::MouseMotion { x: 120, y: 131 + 12 + 5, dx: 0, dy: 0 });
        let surface = frame(&mut ctx);
        assert_eq!(surface.texts(), vec!["Alpha".to_string(), "Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]);
        assert!(surface.ops.contains(&Op::Fill((110, 131 + 12 + 1, 150, CHAR_H), c.highlight)));
        let header = surface.position(&Op::Text(118, 114, "Alpha".to_string(), c.text)).unwrap();
        let list = surface.position(&Op::Fill((110, 131, 150, 36), c.list)).unwrap();
        assert!(header < list);
    }

    #[test]
    fn surface_widget_blits_visible_region() {
        let mut ctx = context();
        let win = ctx.create_window(100, 100, 300, 200, "");
        let bitmap = Rc::new(Bitmap::new(64, 32, color(9, 9, 9, 255)));
        let id = ctx.attach_surface(win, 10, 10, 0, 0, bitmap).unwrap();
        if let Some(WidgetKind::Surface(view)) = ctx.widget_mut(id).map(|w| &mut w.kind) {
            view.src_x = 16;
        }
        let surface = frame(&mut ctx);
        assert!(surface.ops.contains(&Op::Blit((16, 0, 48, 32), (110, 110))));
    }

    #[test]
    fn render_refreshes_viewport() {
        let mut ctx = context();
        let mut surface = RecordingSurface::new(320, 240);
        ctx.render(&mut surface);
        let viewport = ctx.viewport();
        assert_eq!((viewport.width, viewport.height), (320, 240));
    }
}
