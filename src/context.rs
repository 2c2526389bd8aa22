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

use tracing::debug;

use crate::layout::popup_origin;
use crate::router::{Interaction, PopupSchedule, RouterState};
use crate::store::EntityStore;
use crate::{
    Bitmap, Button, CheckBox, Dimensioni, DropDownList, Event, GrabTarget, InputBox, MARGIN, Platform, Settings, Slider, SurfaceView, TITLE_BAR_HEIGHT, Text,
    Vec2i, Widget, WidgetId, WidgetKind, Window, WindowFlags, WindowId, widget_rect,
};

/// Owns every window and widget together with the interaction state that routes input to them.
///
/// One context is one independent engine instance. Event processing and rendering must not
/// overlap; callbacks receive the context mutably and may create or destroy entities, but must
/// not feed further input events from inside a callback.
pub struct Context {
    pub(crate) store: EntityStore,
    settings: Settings,
    pub(crate) router: RouterState,
    pub(crate) platform: Box<dyn Platform>,
    pub(crate) viewport: Dimensioni,
}

impl Context {
    /// Creates an empty engine drawing to a surface of `viewport` size.
    pub fn new(platform: Box<dyn Platform>, viewport: Dimensioni) -> Self {
        Self {
            store: EntityStore::default(),
            settings: Settings::default(),
            router: RouterState::default(),
            platform,
            viewport,
        }
    }

    /// Size of the drawing surface used for maximizing, popups and flyouts.
    pub fn viewport(&self) -> Dimensioni { self.viewport }

    /// Updates the drawing surface size; [`Context::render`] also refreshes it.
    pub fn set_viewport_size(&mut self, size: Dimensioni) { self.viewport = size; }

    /// Prototype values for entities created from now on.
    pub fn settings(&self) -> &Settings { &self.settings }

    /// Mutable prototype values; existing entities are unaffected.
    pub fn settings_mut(&mut self) -> &mut Settings { &mut self.settings }

    /// Restores factory prototype values.
    pub fn reset_settings(&mut self) { self.settings.reset(); }

    /// Current exclusive interaction.
    pub fn interaction(&self) -> Interaction { self.router.interaction }

    /// Armed or open popup, if any.
    pub fn popup(&self) -> Option<PopupSchedule> { self.router.popup }

    /// Last pointer position seen by the router.
    pub fn pointer(&self) -> Vec2i { self.router.pointer }

    // ---------------------------------------------------------------------
    // windows
    // ---------------------------------------------------------------------

    /// Creates a window on top of the z-order from the current window defaults.
    /// `(x, y)` is the body origin; the title bar, if any, sits above it.
    pub fn create_window(&mut self, x: i32, y: i32, w: i32, h: i32, title: &str) -> WindowId {
        let id = self.store.insert_window(Window::new(x, y, w, h, title, &self.settings.window));
        debug!(?id, x, y, w, h, title, "window created");
        id
    }

    /// Destroys a window and its widgets. Stale handles are ignored.
    pub fn destroy_window(&mut self, id: WindowId) {
        let Some((_, widgets)) = self.store.remove_window(id) else { return };
        debug!(?id, widgets = widgets.len(), "window destroyed");
        if self.router.interaction.references_window(id) || widgets.iter().any(|w| self.router.interaction.references_widget(*w)) {
            self.reset_interaction();
        }
        if self.router.popup.is_some_and(|p| p.window == id) {
            self.router.popup = None;
        }
    }

    /// Destroys every window.
    pub fn clear(&mut self) {
        self.reset_interaction();
        self.router.popup = None;
        self.store.clear();
        debug!("all windows destroyed");
    }

    /// Moves a window to the top of the z-order.
    pub fn raise_window(&mut self, id: WindowId) { self.store.raise_window(id); }

    /// Maximizes in both directions.
    pub fn maximize_window(&mut self, id: WindowId) {
        self.maximize_window_h(id);
        self.maximize_window_v(id);
    }

    /// Stretches the window to the viewport width (capped by its maximum) and keeps it on screen.
    pub fn maximize_window_h(&mut self, id: WindowId) {
        let viewport = self.viewport;
        let Some(win) = self.store.window_mut(id) else { return };
        win.w = viewport.width;
        if win.max_w > 0 && win.w > win.max_w {
            win.w = win.max_w;
        }
        if win.x < 0 {
            win.x = 0;
        } else if win.x + win.w > viewport.width {
            win.x = viewport.width - win.w;
        }
    }

    /// Stretches the window to the viewport height minus its title bar and keeps it on screen.
    pub fn maximize_window_v(&mut self, id: WindowId) {
        let viewport = self.viewport;
        let Some(win) = self.store.window_mut(id) else { return };
        let title = win.title_bar_height();
        win.h = viewport.height - title;
        if win.max_h > 0 && win.h > win.max_h {
            win.h = win.max_h;
        }
        if win.y < title {
            win.y = title;
        } else if win.y + win.h > viewport.height {
            win.y = viewport.height - win.h;
        }
    }

    /// Window behind a handle.
    pub fn window(&self, id: WindowId) -> Option<&Window> { self.store.window(id) }

    /// Mutable window behind a handle.
    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> { self.store.window_mut(id) }

    /// Windows from bottom to top.
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ { self.store.windows() }

    /// Topmost window.
    pub fn topmost_window(&self) -> Option<WindowId> { self.store.topmost_window() }

    /// Number of live windows.
    pub fn window_count(&self) -> usize { self.store.window_count() }

    // ---------------------------------------------------------------------
    // widgets
    // ---------------------------------------------------------------------

    fn attach(&mut self, window: WindowId, x: i32, y: i32, w: i32, h: i32, kind: WidgetKind) -> Option<WidgetId> {
        let name = kind.name();
        let widget = Widget::new(window, x, y, w, h, self.settings.popup.delay, kind);
        let id = self.store.insert_widget(window, widget);
        match id {
            Some(id) => debug!(?window, ?id, kind = name, "widget attached"),
            None => debug!(?window, kind = name, "attach to stale window ignored"),
        }
        id
    }

    /// Attaches static text. A zero `w` or `h` fills the window up to its margin.
    pub fn attach_text(&mut self, window: WindowId, x: i32, y: i32, w: i32, h: i32, text: &str) -> Option<WidgetId> {
        let kind = WidgetKind::Text(Text::new(text, self.settings.text));
        self.attach(window, x, y, w, h, kind)
    }

    /// Attaches an empty input box.
    pub fn attach_input_box(&mut self, window: WindowId, x: i32, y: i32, w: i32, h: i32) -> Option<WidgetId> {
        let kind = WidgetKind::InputBox(InputBox::new(&self.settings.input_box));
        self.attach(window, x, y, w, h, kind)
    }

    /// Attaches a button sized from its label.
    pub fn attach_button(&mut self, window: WindowId, x: i32, y: i32, text: &str) -> Option<WidgetId> {
        let kind = WidgetKind::Button(Button::new(text, self.settings.button));
        self.attach(window, x, y, 0, 0, kind)
    }

    /// Attaches an unchecked check box.
    pub fn attach_check_box(&mut self, window: WindowId, x: i32, y: i32) -> Option<WidgetId> {
        let kind = WidgetKind::CheckBox(CheckBox::new(self.settings.check_box));
        self.attach(window, x, y, 0, 0, kind)
    }

    /// Attaches a view of a shared bitmap.
    pub fn attach_surface(&mut self, window: WindowId, x: i32, y: i32, w: i32, h: i32, bitmap: Rc<Bitmap>) -> Option<WidgetId> {
        self.attach(window, x, y, w, h, WidgetKind::Surface(SurfaceView::new(bitmap)))
    }

    /// Attaches a horizontal slider; `value` is clamped into `[0, max]`.
    pub fn attach_slider_h(&mut self, window: WindowId, x: i32, y: i32, w: i32, value: f64, max: f64) -> Option<WidgetId> {
        let defaults = self.settings.slider;
        let kind = WidgetKind::SliderH(Slider::new(value, max, defaults.flags, defaults.colors));
        self.attach(window, x, y, w, 0, kind)
    }

    /// Attaches a vertical slider; `value` is clamped into `[0, max]`.
    pub fn attach_slider_v(&mut self, window: WindowId, x: i32, y: i32, h: i32, value: f64, max: f64) -> Option<WidgetId> {
        let defaults = self.settings.slider;
        let kind = WidgetKind::SliderV(Slider::new(value, max, defaults.flags, defaults.colors));
        self.attach(window, x, y, 0, h, kind)
    }

    /// Attaches a drop-down list over newline separated items.
    pub fn attach_drop_down_list(&mut self, window: WindowId, x: i32, y: i32, w: i32, text: &str) -> Option<WidgetId> {
        let defaults = self.settings.drop_down;
        let kind = WidgetKind::DropDownList(DropDownList::new(text, defaults.flags, defaults.colors));
        self.attach(window, x, y, w, 0, kind)
    }

    /// Detaches and drops a widget. Stale handles are ignored.
    pub fn destroy_widget(&mut self, id: WidgetId) {
        if self.store.remove_widget(id).is_none() {
            return;
        }
        debug!(?id, "widget destroyed");
        if self.router.interaction.references_widget(id) {
            self.reset_interaction();
        }
    }

    /// Widget behind a handle.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> { self.store.widget(id) }

    /// Mutable widget behind a handle.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> { self.store.widget_mut(id) }

    /// Widgets of a window, oldest first.
    pub fn widgets(&self, window: WindowId) -> impl Iterator<Item = WidgetId> + '_ { self.store.widgets_of(window) }

    /// First attached widget of a window.
    pub fn first_widget(&self, window: WindowId) -> Option<WidgetId> { self.store.first_widget(window) }

    /// Last attached widget of a window.
    pub fn last_widget(&self, window: WindowId) -> Option<WidgetId> { self.store.last_widget(window) }

    // ---------------------------------------------------------------------
    // popups
    // ---------------------------------------------------------------------

    /// Creates a hidden, borderless, fixed window meant to be attached to [`Widget::pop_up`].
    pub fn create_popup_window(&mut self, w: i32, h: i32) -> WindowId {
        let id = self.create_window(0, 0, w, h, "");
        let popup = self.settings.popup;
        if let Some(win) = self.store.window_mut(id) {
            win.flags = WindowFlags::NONE;
            win.colors.frame = popup.frame;
            win.colors.background = popup.background;
        }
        id
    }

    /// Shows `id` next to the pointer, inside the viewport, replacing any open popup.
    pub fn open_popup(&mut self, id: WindowId) {
        if self.store.window(id).is_none() {
            return;
        }
        self.close_popup();
        let pointer = self.router.pointer;
        let viewport = self.viewport;
        if let Some(win) = self.store.window_mut(id) {
            win.flags.insert(WindowFlags::VISIBLE);
            let (x, y) = popup_origin(pointer.x, pointer.y, win.w, win.h, viewport);
            win.x = x;
            win.y = y;
        }
        self.store.raise_window(id);
        let now = self.platform.ticks();
        self.router.popup = Some(PopupSchedule { window: id, armed_at: now, delay: 0, open: true });
        debug!(?id, x = pointer.x, y = pointer.y, "popup opened");
    }

    /// Hides the armed or open popup.
    pub fn close_popup(&mut self) {
        let Some(schedule) = self.router.popup.take() else { return };
        if let Some(win) = self.store.window_mut(schedule.window) {
            win.flags.remove(WindowFlags::VISIBLE);
        }
        if schedule.open {
            debug!(id = ?schedule.window, "popup closed");
        }
    }

    pub(crate) fn arm_popup(&mut self, window: WindowId, delay: u32) {
        match self.router.popup {
            Some(p) if p.open && p.window == window => return,
            Some(p) if p.open => self.close_popup(),
            _ => {}
        }
        let armed_at = self.platform.ticks();
        self.router.popup = Some(PopupSchedule { window, armed_at, delay, open: false });
    }

    /// Opens the armed popup once its delay has elapsed.
    pub(crate) fn activate_due_popup(&mut self) {
        let Some(schedule) = self.router.popup else { return };
        if schedule.open {
            return;
        }
        if self.platform.ticks().wrapping_sub(schedule.armed_at) > schedule.delay {
            self.open_popup(schedule.window);
        }
    }

    // ---------------------------------------------------------------------
    // focus
    // ---------------------------------------------------------------------

    /// Sends every key event to `window` until a non-wheel button is pressed.
    pub fn grab_keyboard_window(&mut self, window: WindowId) {
        if self.store.window(window).is_none() {
            return;
        }
        self.reset_interaction();
        self.router.interaction = Interaction::KeyboardGrab(GrabTarget::Window(window));
    }

    /// Sends every key event to `widget` until a non-wheel button is pressed.
    pub fn grab_keyboard_widget(&mut self, widget: WidgetId) {
        if self.store.widget(widget).is_none() {
            return;
        }
        self.reset_interaction();
        self.router.interaction = Interaction::KeyboardGrab(GrabTarget::Widget(widget));
    }

    /// Gives text-edit focus to an input box, applying its key repeat rate if it asks for one.
    pub fn enter_input_box(&mut self, id: WidgetId) {
        let Some((window, widget)) = self.store.window_and_widget_mut(id) else { return };
        let r = widget_rect(widget, window);
        let Some(input) = widget.as_input_box_mut() else { return };
        let len = input.text().len();
        input.edit.fit(r.width - 2 * MARGIN, r.height - 2 * MARGIN);
        input.edit.clamp(len);
        let repeat = input.flags.uses_key_repeat().then_some(input.key_repeat);
        self.reset_interaction();
        let saved_repeat = repeat.map(|repeat| {
            let saved = self.platform.key_repeat();
            self.platform.set_key_repeat(repeat);
            saved
        });
        self.router.interaction = Interaction::Editing { widget: id, saved_repeat };
        debug!(?id, "edit mode entered");
    }

    /// Drops text-edit focus and restores the key repeat rate saved on entry.
    pub fn leave_input_box(&mut self) {
        if matches!(self.router.interaction, Interaction::Editing { .. }) {
            self.reset_interaction();
        }
    }

    /// Returns to [`Interaction::Idle`], undoing the side effects of the state being left.
    pub(crate) fn reset_interaction(&mut self) {
        if let Interaction::Editing { widget, saved_repeat } = self.router.interaction {
            if let Some(repeat) = saved_repeat {
                self.platform.set_key_repeat(repeat);
            }
            debug!(id = ?widget, "edit mode left");
        }
        self.router.interaction = Interaction::Idle;
    }

    // ---------------------------------------------------------------------
    // callbacks
    // ---------------------------------------------------------------------

    /// Invokes a window callback. The callback is detached while it runs so it can borrow the context.
    pub(crate) fn fire_window(&mut self, id: WindowId, event: Event) {
        let Some(mut callback) = self.store.window_mut(id).and_then(|w| w.callback.take()) else { return };
        callback(self, id, &event);
        if let Some(win) = self.store.window_mut(id) {
            if win.callback.is_none() {
                win.callback = Some(callback);
            }
        }
    }

    /// Invokes a widget callback, detached while it runs.
    pub(crate) fn fire_widget(&mut self, id: WidgetId, event: Event) {
        let Some(mut callback) = self.store.widget_mut(id).and_then(|w| w.callback.take()) else { return };
        callback(self, id, &event);
        if let Some(widget) = self.store.widget_mut(id) {
            if widget.callback.is_none() {
                widget.callback = Some(callback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualPlatform;
    use crate::{EventKind, KeyRepeat};
    use std::cell::RefCell;

    fn context() -> (Context, ManualPlatform) {
        let platform = ManualPlatform::default();
        (Context::new(Box::new(platform.clone()), Dimensioni::new(800, 600)), platform)
    }

    #[test]
    fn settings_only_affect_new_entities() {
        let (mut ctx, _) = context();
        let before = ctx.create_window(0, 0, 200, 100, "a");
        ctx.settings_mut().window.margin = 2;
        ctx.settings_mut().window.flags.insert(WindowFlags::RESIZABLE);
        let after = ctx.create_window(0, 0, 200, 100, "b");
        assert_eq!(ctx.window(before).unwrap().margin, 8);
        assert_eq!(ctx.window(after).unwrap().margin, 2);
        assert!(ctx.window(after).unwrap().flags.is_resizable());
        ctx.reset_settings();
        assert_eq!(*ctx.settings(), Settings::default());
    }

    #[test]
    fn attach_to_stale_window_returns_none() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        ctx.destroy_window(win);
        assert!(ctx.attach_button(win, 0, 0, "x").is_none());
        assert_eq!(ctx.window_count(), 0);
        ctx.raise_window(win);
        ctx.maximize_window(win);
        ctx.destroy_window(win);
    }

    #[test]
    fn attach_copies_popup_delay_and_clamps_slider() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        ctx.settings_mut().popup.delay = 250;
        let s = ctx.attach_slider_h(win, 0, 0, 0, 12.0, 10.0).unwrap();
        assert_eq!(ctx.widget(s).unwrap().pop_up_delay, 250);
        assert_eq!(ctx.widget(s).unwrap().as_slider().unwrap().value(), 10.0);
        assert_eq!(ctx.widget(s).unwrap().window(), win);
    }

    #[test]
    fn maximize_fills_viewport_below_title_bar() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(-30, 5, 200, 100, "");
        ctx.maximize_window(win);
        let w = ctx.window(win).unwrap();
        assert_eq!((w.x, w.y, w.w, w.h), (0, TITLE_BAR_HEIGHT, 800, 580));

        let capped = ctx.create_window(700, 550, 200, 100, "");
        ctx.window_mut(capped).unwrap().max_w = 300;
        ctx.window_mut(capped).unwrap().max_h = 200;
        ctx.maximize_window(capped);
        let w = ctx.window(capped).unwrap();
        assert_eq!((w.x, w.y, w.w, w.h), (500, 400, 300, 200));
    }

    #[test]
    fn popup_window_starts_hidden_and_opens_inside_viewport() {
        let (mut ctx, _) = context();
        let other = ctx.create_window(0, 0, 100, 100, "");
        let popup = ctx.create_popup_window(120, 40);
        assert!(!ctx.window(popup).unwrap().flags.is_visible());
        assert_eq!(ctx.window(popup).unwrap().title_bar_height(), 0);
        ctx.raise_window(other);
        ctx.router.pointer = Vec2i::new(790, 10);
        ctx.open_popup(popup);
        let w = ctx.window(popup).unwrap();
        assert!(w.flags.is_visible());
        assert_eq!((w.x, w.y), (790 + 8 - 120, 2));
        assert_eq!(ctx.topmost_window(), Some(popup));
        assert!(ctx.popup().unwrap().open);
        ctx.close_popup();
        assert!(!ctx.window(popup).unwrap().flags.is_visible());
        assert!(ctx.popup().is_none());
    }

    #[test]
    fn edit_mode_swaps_key_repeat() {
        let (mut ctx, platform) = context();
        platform.set_repeat(KeyRepeat::new(500, 50));
        let win = ctx.create_window(0, 0, 200, 100, "");
        let input = ctx.attach_input_box(win, 0, 0, 0, 22).unwrap();
        ctx.enter_input_box(input);
        assert_eq!(platform.repeat(), KeyRepeat::new(350, 30));
        assert!(matches!(ctx.interaction(), Interaction::Editing { widget, .. } if widget == input));
        ctx.leave_input_box();
        assert_eq!(platform.repeat(), KeyRepeat::new(500, 50));
        assert_eq!(ctx.interaction(), Interaction::Idle);
    }

    #[test]
    fn enter_ignores_other_kinds() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        let button = ctx.attach_button(win, 0, 0, "b").unwrap();
        ctx.enter_input_box(button);
        assert_eq!(ctx.interaction(), Interaction::Idle);
    }

    #[test]
    fn destroying_subject_of_interaction_resets_it() {
        let (mut ctx, platform) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        let input = ctx.attach_input_box(win, 0, 0, 0, 22).unwrap();
        ctx.enter_input_box(input);
        ctx.destroy_widget(input);
        assert_eq!(ctx.interaction(), Interaction::Idle);
        assert_eq!(platform.repeat(), KeyRepeat::default());

        ctx.grab_keyboard_window(win);
        ctx.destroy_window(win);
        assert_eq!(ctx.interaction(), Interaction::Idle);
    }

    #[test]
    fn callbacks_may_destroy_their_own_window() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        ctx.window_mut(win).unwrap().set_callback(move |ctx, id, ev| {
            log.borrow_mut().push(ev.kind);
            ctx.destroy_window(id);
        });
        ctx.fire_window(win, Event::new(EventKind::WindowClose, 0, 0));
        assert_eq!(*seen.borrow(), vec![EventKind::WindowClose]);
        assert!(ctx.window(win).is_none());
    }

    #[test]
    fn callback_replacing_itself_keeps_the_replacement() {
        let (mut ctx, _) = context();
        let win = ctx.create_window(0, 0, 200, 100, "");
        let b = ctx.attach_button(win, 0, 0, "b").unwrap();
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        ctx.widget_mut(b).unwrap().set_callback(move |ctx, id, _| {
            let counter = counter.clone();
            ctx.widget_mut(id).unwrap().set_callback(move |_, _, _| *counter.borrow_mut() += 10);
        });
        ctx.fire_widget(b, Event::new(EventKind::ClickLeft, 1, 1));
        ctx.fire_widget(b, Event::new(EventKind::ClickLeft, 1, 1));
        assert_eq!(*hits.borrow(), 10);
    }

    #[test]
    fn clear_removes_everything() {
        let (mut ctx, _) = context();
        for i in 0..4 {
            let w = ctx.create_window(i * 10, 0, 100, 100, "");
            ctx.attach_check_box(w, 0, 0);
        }
        ctx.clear();
        assert_eq!(ctx.window_count(), 0);
        assert!(ctx.topmost_window().is_none());
    }
}
