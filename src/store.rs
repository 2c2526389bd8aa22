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
//! Arena of windows and widgets linked into z-order and per-window paint order.
//!
//! Both lists are intrusive doubly-linked lists over slab keys. Handles pair a slab key with a
//! generation so that a handle kept past its entity's destruction never aliases a newer entity.

use slab::Slab;

use crate::{Widget, Window};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle to a window. Stale handles are ignored by every operation.
pub struct WindowId {
    key: usize,
    generation: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle to a widget. Stale handles are ignored by every operation.
pub struct WidgetId {
    key: usize,
    generation: u64,
}

#[cfg(test)]
impl WindowId {
    pub(crate) fn dangling() -> Self { Self { key: usize::MAX, generation: u64::MAX } }
}

struct WindowEntry {
    generation: u64,
    window: Window,
    prev: Option<usize>,
    next: Option<usize>,
    first_widget: Option<usize>,
    last_widget: Option<usize>,
}

struct WidgetEntry {
    generation: u64,
    widget: Widget,
    owner: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Default)]
pub(crate) struct EntityStore {
    windows: Slab<WindowEntry>,
    widgets: Slab<WidgetEntry>,
    first_window: Option<usize>,
    last_window: Option<usize>,
    next_generation: u64,
}

impl EntityStore {
    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn window_entry(&self, id: WindowId) -> Option<&WindowEntry> { self.windows.get(id.key).filter(|e| e.generation == id.generation) }

    fn window_entry_mut(&mut self, id: WindowId) -> Option<&mut WindowEntry> { self.windows.get_mut(id.key).filter(|e| e.generation == id.generation) }

    fn widget_entry(&self, id: WidgetId) -> Option<&WidgetEntry> { self.widgets.get(id.key).filter(|e| e.generation == id.generation) }

    fn widget_entry_mut(&mut self, id: WidgetId) -> Option<&mut WidgetEntry> { self.widgets.get_mut(id.key).filter(|e| e.generation == id.generation) }

    fn window_id(&self, key: usize) -> WindowId { WindowId { key, generation: self.windows[key].generation } }

    fn widget_id(&self, key: usize) -> WidgetId { WidgetId { key, generation: self.widgets[key].generation } }

    /// Appends a window at the top of the z-order.
    pub fn insert_window(&mut self, window: Window) -> WindowId {
        let generation = self.bump();
        let key = self.windows.insert(WindowEntry {
            generation,
            window,
            prev: self.last_window,
            next: None,
            first_widget: None,
            last_widget: None,
        });
        match self.last_window {
            Some(last) => self.windows[last].next = Some(key),
            None => self.first_window = Some(key),
        }
        self.last_window = Some(key);
        WindowId { key, generation }
    }

    fn unlink_window(&mut self, key: usize) {
        let (prev, next) = (self.windows[key].prev, self.windows[key].next);
        match prev {
            Some(p) => self.windows[p].next = next,
            None => self.first_window = next,
        }
        match next {
            Some(n) => self.windows[n].prev = prev,
            None => self.last_window = prev,
        }
        let entry = &mut self.windows[key];
        entry.prev = None;
        entry.next = None;
    }

    /// Removes a window after removing its widgets, first to last.
    pub fn remove_window(&mut self, id: WindowId) -> Option<(Window, Vec<WidgetId>)> {
        self.window_entry(id)?;
        let removed: Vec<WidgetId> = self.widgets_of(id).collect();
        for widget in &removed {
            self.remove_widget(*widget);
        }
        self.unlink_window(id.key);
        Some((self.windows.remove(id.key).window, removed))
    }

    /// Moves a window to the top of the z-order. Returns `false` if it already was on top or is stale.
    pub fn raise_window(&mut self, id: WindowId) -> bool {
        if self.window_entry(id).is_none() || self.last_window == Some(id.key) {
            return false;
        }
        self.unlink_window(id.key);
        let last = self.last_window;
        self.windows[id.key].prev = last;
        match last {
            Some(l) => self.windows[l].next = Some(id.key),
            None => self.first_window = Some(id.key),
        }
        self.last_window = Some(id.key);
        true
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> { self.window_entry(id).map(|e| &e.window) }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> { self.window_entry_mut(id).map(|e| &mut e.window) }

    /// Windows from bottom to top.
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        std::iter::successors(self.first_window, move |key| self.windows[*key].next).map(move |key| self.window_id(key))
    }

    /// Windows from top to bottom.
    pub fn windows_top_down(&self) -> impl Iterator<Item = WindowId> + '_ {
        std::iter::successors(self.last_window, move |key| self.windows[*key].prev).map(move |key| self.window_id(key))
    }

    pub fn topmost_window(&self) -> Option<WindowId> { self.last_window.map(|key| self.window_id(key)) }

    pub fn window_count(&self) -> usize { self.windows.len() }

    /// Appends a widget at the end of its window's paint order.
    pub fn insert_widget(&mut self, window: WindowId, widget: Widget) -> Option<WidgetId> {
        let owner = self.window_entry(window)?;
        let prev = owner.last_widget;
        let generation = self.bump();
        let key = self.widgets.insert(WidgetEntry { generation, widget, owner: window.key, prev, next: None });
        match prev {
            Some(p) => self.widgets[p].next = Some(key),
            None => self.windows[window.key].first_widget = Some(key),
        }
        self.windows[window.key].last_widget = Some(key);
        Some(WidgetId { key, generation })
    }

    /// Unlinks and removes a widget.
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Widget> {
        let entry = self.widget_entry(id)?;
        let (owner, prev, next) = (entry.owner, entry.prev, entry.next);
        match prev {
            Some(p) => self.widgets[p].next = next,
            None => self.windows[owner].first_widget = next,
        }
        match next {
            Some(n) => self.widgets[n].prev = prev,
            None => self.windows[owner].last_widget = prev,
        }
        Some(self.widgets.remove(id.key).widget)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> { self.widget_entry(id).map(|e| &e.widget) }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> { self.widget_entry_mut(id).map(|e| &mut e.widget) }

    /// Widgets of `window` in paint order, oldest first. Empty for a stale window.
    pub fn widgets_of(&self, window: WindowId) -> impl Iterator<Item = WidgetId> + '_ {
        let first = self.window_entry(window).and_then(|e| e.first_widget);
        std::iter::successors(first, move |key| self.widgets[*key].next).map(move |key| self.widget_id(key))
    }

    /// Widgets of `window` in hit-test order, newest first.
    pub fn widgets_of_rev(&self, window: WindowId) -> impl Iterator<Item = WidgetId> + '_ {
        let last = self.window_entry(window).and_then(|e| e.last_widget);
        std::iter::successors(last, move |key| self.widgets[*key].prev).map(move |key| self.widget_id(key))
    }

    pub fn first_widget(&self, window: WindowId) -> Option<WidgetId> { self.window_entry(window)?.first_widget.map(|key| self.widget_id(key)) }

    pub fn last_widget(&self, window: WindowId) -> Option<WidgetId> { self.window_entry(window)?.last_widget.map(|key| self.widget_id(key)) }

    /// Returns a window together with one of its widgets.
    pub fn window_and_widget_mut(&mut self, id: WidgetId) -> Option<(&Window, &mut Widget)> {
        let owner = self.widget_entry(id)?.owner;
        let window = &self.windows[owner].window;
        let widget = &mut self.widgets.get_mut(id.key)?.widget;
        Some((window, widget))
    }

    pub fn clear(&mut self) {
        self.windows.clear();
        self.widgets.clear();
        self.first_window = None;
        self.last_window = None;
    }

    #[cfg(test)]
    pub fn check_integrity(&self) {
        let forward: Vec<usize> = std::iter::successors(self.first_window, |k| self.windows[*k].next).collect();
        let mut backward: Vec<usize> = std::iter::successors(self.last_window, |k| self.windows[*k].prev).collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), self.windows.len());
        let mut widget_total = 0;
        for key in forward {
            let entry = &self.windows[key];
            let fw: Vec<usize> = std::iter::successors(entry.first_widget, |k| self.widgets[*k].next).collect();
            let mut bw: Vec<usize> = std::iter::successors(entry.last_widget, |k| self.widgets[*k].prev).collect();
            bw.reverse();
            assert_eq!(fw, bw);
            assert!(fw.iter().all(|k| self.widgets[*k].owner == key));
            widget_total += fw.len();
        }
        assert_eq!(widget_total, self.widgets.len());
    }
}
