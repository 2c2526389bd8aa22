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
//! Routes one raw input event to exactly one target.
//!
//! Exclusive interactions (drags, edit focus, keyboard grabs, open flyouts) are a single enum,
//! so at most one can be active. Each state gets the first look at an event and either consumes
//! it, reports it unconsumed, or lets it fall through to the default hit-test scan.

use tracing::{debug, trace};

use crate::{
    Axis, CHAR_H, CHAR_W, Context, DROP_DOWN_SIZE, Event, EventKind, InputEvent, KeyRepeat, MARGIN, MouseButton, Recti, Slider, Vec2i, WidgetId, WidgetKind,
    WindowId, flyout_rect, is_out_of_window, strictly_inside, widget_rect,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Receiver of grabbed keyboard input.
pub enum GrabTarget {
    /// A window callback.
    Window(WindowId),
    /// A widget callback.
    Widget(WidgetId),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// The exclusive interaction in progress.
pub enum Interaction {
    /// Nothing captured; events go through the hit-test scan.
    #[default]
    Idle,
    /// A title bar drag; `start_x`/`start_y` is where the window was when it began.
    MovingWindow {
        /// Dragged window.
        window: WindowId,
        /// Body x when the drag began.
        start_x: i32,
        /// Body y when the drag began.
        start_y: i32,
    },
    /// A resize-corner drag.
    ResizingWindow {
        /// Resized window.
        window: WindowId,
        /// Width when the drag began.
        start_w: i32,
        /// Height when the drag began.
        start_h: i32,
    },
    /// A button is held down.
    ButtonPressed(WidgetId),
    /// A slider thumb is being dragged.
    SliderDragged(WidgetId),
    /// Keyboard input is redirected.
    KeyboardGrab(GrabTarget),
    /// An input box has text-edit focus.
    Editing {
        /// Edited input box.
        widget: WidgetId,
        /// Platform key repeat to restore on exit, if the box replaced it.
        saved_repeat: Option<KeyRepeat>,
    },
    /// A drop-down flyout is open.
    DropDownOpen(WidgetId),
}

impl Interaction {
    /// Returns `true` if nothing is captured.
    pub fn is_idle(&self) -> bool { *self == Self::Idle }

    pub(crate) fn references_window(&self, id: WindowId) -> bool {
        match *self {
            Self::MovingWindow { window, .. } | Self::ResizingWindow { window, .. } => window == id,
            Self::KeyboardGrab(GrabTarget::Window(window)) => window == id,
            _ => false,
        }
    }

    pub(crate) fn references_widget(&self, id: WidgetId) -> bool {
        match *self {
            Self::ButtonPressed(w) | Self::SliderDragged(w) | Self::DropDownOpen(w) | Self::KeyboardGrab(GrabTarget::Widget(w)) => w == id,
            Self::Editing { widget, .. } => widget == id,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Hover popup bookkeeping.
pub struct PopupSchedule {
    /// Popup window.
    pub window: WindowId,
    /// Tick at which the hover was last seen.
    pub armed_at: u32,
    /// Milliseconds of hovering before it opens.
    pub delay: u32,
    /// `true` once shown.
    pub open: bool,
}

pub(crate) struct RouterState {
    pub interaction: Interaction,
    pub popup: Option<PopupSchedule>,
    pub pointer: Vec2i,
}

impl Default for RouterState {
    fn default() -> Self { Self { interaction: Interaction::Idle, popup: None, pointer: Vec2i::new(0, 0) } }
}

impl Context {
    /// Routes one raw event. Returns `true` if the engine consumed it; the host may handle the rest.
    pub fn process_event(&mut self, input: &InputEvent) -> bool {
        if let Some(p) = input.position() {
            self.router.pointer = p;
        }
        self.dismiss_popup(input);
        let captured = match self.router.interaction {
            Interaction::Idle => None,
            Interaction::MovingWindow { window, start_x, start_y } => self.route_moving(input, window, start_x, start_y),
            Interaction::ResizingWindow { window, start_w, start_h } => self.route_resizing(input, window, start_w, start_h),
            Interaction::ButtonPressed(_) => self.route_pressed(input),
            Interaction::SliderDragged(widget) => self.route_slider(input, widget),
            Interaction::KeyboardGrab(target) => self.route_grab(input, target),
            Interaction::Editing { widget, .. } => self.route_editing(input, widget),
            Interaction::DropDownOpen(widget) => self.route_flyout(input, widget),
        };
        let consumed = match captured {
            Some(consumed) => consumed,
            None => self.route_default(input),
        };
        trace!(?input, consumed, interaction = ?self.router.interaction, "event routed");
        consumed
    }

    /// Leaving an open popup hides it; an armed one is unarmed by any motion and re-armed by the scan.
    fn dismiss_popup(&mut self, input: &InputEvent) {
        let InputEvent::MouseMotion { x, y, .. } = *input else { return };
        let Some(schedule) = self.router.popup else { return };
        let inside = schedule.open && self.store.window(schedule.window).is_some_and(|w| strictly_inside(w.body(), x, y));
        if !inside {
            self.close_popup();
        }
    }

    fn route_moving(&mut self, input: &InputEvent, id: WindowId, start_x: i32, start_y: i32) -> Option<bool> {
        if self.store.window(id).is_none() {
            self.router.interaction = Interaction::Idle;
            return None;
        }
        match *input {
            InputEvent::MouseMotion { dx, dy, .. } => {
                if let Some(win) = self.store.window_mut(id) {
                    win.x += dx;
                    win.y += dy;
                }
                Some(true)
            }
            InputEvent::MouseUp { button: MouseButton::Left, .. } => {
                self.router.interaction = Interaction::Idle;
                let moved = self.store.window(id).map(|w| (w.x - start_x, w.y - start_y));
                if let Some((dx, dy)) = moved.filter(|d| *d != (0, 0)) {
                    debug!(?id, dx, dy, "window moved");
                    self.fire_window(id, Event::new(EventKind::WindowMove, dx, dy));
                }
                Some(true)
            }
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => Some(true),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => Some(false),
        }
    }

    fn route_resizing(&mut self, input: &InputEvent, id: WindowId, start_w: i32, start_h: i32) -> Option<bool> {
        if self.store.window(id).is_none() {
            self.router.interaction = Interaction::Idle;
            return None;
        }
        match *input {
            InputEvent::MouseMotion { dx, dy, .. } => {
                if let Some(win) = self.store.window_mut(id) {
                    if win.flags.keeps_ratio() {
                        let d = (dx + dy) / 2;
                        win.w += d;
                        win.h += d;
                    } else {
                        win.w += dx;
                        win.h += dy;
                    }
                    win.clamp_size();
                }
                Some(true)
            }
            InputEvent::MouseUp { button: MouseButton::Left, .. } => {
                self.router.interaction = Interaction::Idle;
                let grown = self.store.window(id).map(|w| (w.w - start_w, w.h - start_h));
                if let Some((dw, dh)) = grown.filter(|d| *d != (0, 0)) {
                    debug!(?id, dw, dh, "window resized");
                    self.fire_window(id, Event::new(EventKind::WindowResize, dw, dh));
                }
                Some(true)
            }
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => Some(true),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => Some(false),
        }
    }

    fn route_pressed(&mut self, input: &InputEvent) -> Option<bool> {
        match *input {
            InputEvent::MouseUp { button: MouseButton::Left, .. } => {
                self.router.interaction = Interaction::Idle;
                Some(true)
            }
            InputEvent::MouseMotion { .. } => None,
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => Some(true),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => Some(false),
        }
    }

    fn route_slider(&mut self, input: &InputEvent, id: WidgetId) -> Option<bool> {
        match *input {
            InputEvent::MouseMotion { dx, dy, .. } => {
                let Some((window, widget)) = self.store.window_and_widget_mut(id) else {
                    self.router.interaction = Interaction::Idle;
                    return None;
                };
                let r = widget_rect(widget, window);
                match &mut widget.kind {
                    WidgetKind::SliderH(s) => s.drag(Axis::Horizontal, r.width, dx),
                    WidgetKind::SliderV(s) => s.drag(Axis::Vertical, r.height, dy),
                    _ => {}
                }
                Some(true)
            }
            InputEvent::MouseUp { button: MouseButton::Left, .. } => {
                self.router.interaction = Interaction::Idle;
                Some(true)
            }
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => Some(true),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => Some(false),
        }
    }

    fn route_grab(&mut self, input: &InputEvent, target: GrabTarget) -> Option<bool> {
        if let Some(event) = Event::from_key(input) {
            match target {
                GrabTarget::Window(id) => self.fire_window(id, event),
                GrabTarget::Widget(id) => self.fire_widget(id, event),
            }
            return Some(true);
        }
        if input.is_press() {
            self.router.interaction = Interaction::Idle;
        }
        None
    }

    fn route_editing(&mut self, input: &InputEvent, id: WidgetId) -> Option<bool> {
        match *input {
            InputEvent::KeyDown { key, ch } => {
                if let Some((window, widget)) = self.store.window_and_widget_mut(id) {
                    let r = widget_rect(widget, window);
                    if let Some(input_box) = widget.as_input_box_mut() {
                        let (flags, limit) = (input_box.flags, input_box.limit);
                        let (text, edit) = input_box.text_and_edit();
                        edit.fit(r.width - 2 * MARGIN, r.height - 2 * MARGIN);
                        edit.apply_key(text, key, ch, flags, limit);
                    }
                }
                self.fire_widget(id, Event::key(EventKind::KeyDown, key));
                Some(true)
            }
            InputEvent::KeyUp { key } => {
                self.fire_widget(id, Event::key(EventKind::KeyUp, key));
                Some(true)
            }
            _ => {
                if input.is_press() {
                    self.reset_interaction();
                }
                None
            }
        }
    }

    /// Surface-absolute rectangle of the flyout of drop-down `id`.
    pub(crate) fn flyout_of(&self, id: WidgetId) -> Option<Recti> {
        let widget = self.store.widget(id)?;
        let window = self.store.window(widget.window())?;
        let list = widget.as_drop_down()?;
        Some(flyout_rect(widget_rect(widget, window), list, window, self.viewport))
    }

    fn route_flyout(&mut self, input: &InputEvent, id: WidgetId) -> Option<bool> {
        let Some(flyout) = self.flyout_of(id) else {
            self.router.interaction = Interaction::Idle;
            return None;
        };
        let inside = input.position().is_some_and(|p| strictly_inside(flyout, p.x, p.y));
        match *input {
            InputEvent::MouseMotion { .. } if inside => Some(true),
            InputEvent::MouseDown { button, y, .. } if inside => {
                if button.is_left() {
                    let row = ((y - flyout.y) / CHAR_H).max(0) as usize;
                    if let Some(list) = self.store.widget_mut(id).and_then(|w| w.as_drop_down_mut()) {
                        list.set_current_item(row);
                    }
                    self.router.interaction = Interaction::Idle;
                    debug!(?id, row, "drop-down item selected");
                }
                Some(true)
            }
            InputEvent::MouseDown { .. } => {
                self.router.interaction = Interaction::Idle;
                Some(true)
            }
            _ => None,
        }
    }

    fn route_default(&mut self, input: &InputEvent) -> bool {
        let (px, py, kind) = match *input {
            InputEvent::MouseMotion { x, y, .. } => (x, y, EventKind::MouseMotion),
            InputEvent::MouseDown { button, x, y } => (x, y, EventKind::from(button)),
            _ => return false,
        };
        let hit = self.store.windows_top_down().find(|id| self.store.window(*id).is_some_and(|w| w.flags.is_visible() && w.contains(px, py)));
        let Some(window_id) = hit else { return false };

        let left_press = matches!(input, InputEvent::MouseDown { button: MouseButton::Left, .. });
        if let InputEvent::MouseDown { button, .. } = *input {
            if button.is_left() || button.is_right() {
                self.store.raise_window(window_id);
            }
        }

        let Some(win) = self.store.window(window_id) else { return false };
        let (wx, wy) = (win.x, win.y);
        if py < win.y {
            if left_press {
                if win.in_close_button(px) {
                    self.fire_window(window_id, Event::new(EventKind::WindowClose, 0, 0));
                } else if win.flags.is_moveable() {
                    self.router.interaction = Interaction::MovingWindow { window: window_id, start_x: win.x, start_y: win.y };
                }
            }
            return true;
        }
        if left_press && win.in_resize_corner(px, py) {
            self.router.interaction = Interaction::ResizingWindow { window: window_id, start_w: win.w, start_h: win.h };
            return true;
        }

        let open_list = match self.router.interaction {
            Interaction::DropDownOpen(id) => Some(id),
            _ => None,
        };
        let widget_hit = self.store.widgets_of_rev(window_id).find_map(|id| {
            let widget = self.store.widget(id)?;
            if Some(id) == open_list || is_out_of_window(widget, win) {
                return None;
            }
            let r = widget_rect(widget, win);
            strictly_inside(r, px - wx, py - wy).then_some((id, r))
        });

        let Some((widget_id, r)) = widget_hit else {
            self.fire_window(window_id, Event::new(kind, px - wx, py - wy));
            return true;
        };
        let (lx, ly) = (px - wx - r.x, py - wy - r.y);
        if let InputEvent::MouseDown { button, .. } = *input {
            self.press_widget(widget_id, button, r, lx, ly);
        }
        self.schedule_popup(widget_id, input);
        self.fire_widget(widget_id, Event::new(kind, lx, ly));
        true
    }

    /// Kind specific reaction to a press at `(lx, ly)` inside the widget rectangle `r`.
    fn press_widget(&mut self, id: WidgetId, button: MouseButton, r: Recti, lx: i32, ly: i32) {
        if button.is_left() && self.store.widget(id).is_some_and(|w| w.as_input_box().is_some()) {
            self.enter_input_box(id);
            self.place_caret(id, lx, ly);
            return;
        }
        let Some(widget) = self.store.widget_mut(id) else { return };
        match &mut widget.kind {
            WidgetKind::Button(_) if button.is_left() => self.router.interaction = Interaction::ButtonPressed(id),
            WidgetKind::CheckBox(check) if button.is_left() => check.toggle(),
            WidgetKind::SliderH(s) => {
                if press_slider(s, button, Axis::Horizontal, r.width, lx) {
                    self.router.interaction = Interaction::SliderDragged(id);
                }
            }
            WidgetKind::SliderV(s) => {
                if press_slider(s, button, Axis::Vertical, r.height, ly) {
                    self.router.interaction = Interaction::SliderDragged(id);
                }
            }
            WidgetKind::DropDownList(list) => {
                let arrow_edge = r.width - DROP_DOWN_SIZE;
                if button.is_left() && lx > arrow_edge {
                    self.router.interaction = Interaction::DropDownOpen(id);
                    debug!(?id, "flyout opened");
                } else if list.flags.uses_wheel() && lx < arrow_edge {
                    match button {
                        MouseButton::WheelUp => list.step(-1),
                        MouseButton::WheelDown => list.step(1),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    /// Puts the caret of an input box in the text cell nearest to `(lx, ly)`.
    fn place_caret(&mut self, id: WidgetId, lx: i32, ly: i32) {
        let Some(input_box) = self.store.widget_mut(id).and_then(|w| w.as_input_box_mut()) else { return };
        let col = ((lx - MARGIN + CHAR_W / 2) / CHAR_W).max(0) as usize;
        let row = ((ly - MARGIN).max(0) / CHAR_H) as usize;
        let len = input_box.text().len();
        input_box.edit.place(len, col, row);
    }

    fn schedule_popup(&mut self, id: WidgetId, input: &InputEvent) {
        let Some(widget) = self.store.widget(id) else { return };
        let Some(popup) = widget.pop_up.filter(|p| self.store.window(*p).is_some()) else { return };
        // the box being edited never shows its popup
        if matches!(self.router.interaction, Interaction::Editing { widget, .. } if widget == id) {
            return;
        }
        if matches!(input, InputEvent::MouseMotion { .. }) {
            let delay = widget.pop_up_delay;
            self.arm_popup(popup, delay);
        } else {
            self.close_popup();
        }
    }
}

/// Returns `true` when the press starts a thumb drag.
fn press_slider(slider: &mut Slider, button: MouseButton, axis: Axis, track: i32, pos: i32) -> bool {
    if button.is_left() {
        slider.click(axis, track, pos);
        return true;
    }
    if button.is_wheel() && slider.flags.uses_wheel() {
        slider.wheel(button == MouseButton::WheelUp);
    }
    false
}
