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
mod core_widgets;
mod drop_down;
mod slider;
mod text_edit;
mod textbox;

pub use core_widgets::*;
pub use drop_down::*;
pub use slider::*;
pub use textbox::*;

pub(crate) use text_edit::EditState;

use crate::{Context, Event, WidgetId, WindowId};

/// Callback invoked with widget events. Captured state plays the role of user data.
pub type WidgetCallback = Box<dyn FnMut(&mut Context, WidgetId, &Event)>;

/// Kind specific payload of a widget.
pub enum WidgetKind {
    /// Static wrapped text.
    Text(Text),
    /// Editable text field.
    InputBox(InputBox),
    /// Push button sized from its text.
    Button(Button),
    /// Two state check box.
    CheckBox(CheckBox),
    /// Region of an external bitmap.
    Surface(SurfaceView),
    /// Horizontal slider.
    SliderH(Slider),
    /// Vertical slider.
    SliderV(Slider),
    /// Single choice list with a flyout.
    DropDownList(DropDownList),
}

impl WidgetKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::InputBox(_) => "input_box",
            Self::Button(_) => "button",
            Self::CheckBox(_) => "check_box",
            Self::Surface(_) => "surface",
            Self::SliderH(_) => "slider_h",
            Self::SliderV(_) => "slider_v",
            Self::DropDownList(_) => "drop_down_list",
        }
    }
}

/// An element attached to exactly one window.
///
/// `x`, `y`, `w`, `h` are the declared values relative to the window body; a zero (or overflowing)
/// size fills the remaining space up to the margin. The resolved rectangle comes from [`crate::widget_rect`].
pub struct Widget {
    /// Declared x.
    pub x: i32,
    /// Declared y.
    pub y: i32,
    /// Declared width.
    pub w: i32,
    /// Declared height.
    pub h: i32,
    /// Popup window opened after hovering for `pop_up_delay` milliseconds.
    pub pop_up: Option<WindowId>,
    /// Hover delay for `pop_up`.
    pub pop_up_delay: u32,
    /// Kind payload.
    pub kind: WidgetKind,
    window: WindowId,
    pub(crate) callback: Option<WidgetCallback>,
}

impl Widget {
    pub(crate) fn new(window: WindowId, x: i32, y: i32, w: i32, h: i32, pop_up_delay: u32, kind: WidgetKind) -> Self {
        Self { x, y, w, h, pop_up: None, pop_up_delay, kind, window, callback: None }
    }

    /// Window the widget is attached to.
    pub fn window(&self) -> WindowId { self.window }

    /// Installs the event callback.
    pub fn set_callback(&mut self, callback: impl FnMut(&mut Context, WidgetId, &Event) + 'static) { self.callback = Some(Box::new(callback)); }

    /// Removes the event callback.
    pub fn clear_callback(&mut self) { self.callback = None; }

    /// Returns `true` if a callback is installed.
    pub fn has_callback(&self) -> bool { self.callback.is_some() }

    /// Text payload, if this is a text widget.
    pub fn as_text(&self) -> Option<&Text> { if let WidgetKind::Text(t) = &self.kind { Some(t) } else { None } }

    /// Mutable text payload.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> { if let WidgetKind::Text(t) = &mut self.kind { Some(t) } else { None } }

    /// Input box payload.
    pub fn as_input_box(&self) -> Option<&InputBox> { if let WidgetKind::InputBox(b) = &self.kind { Some(b) } else { None } }

    /// Mutable input box payload.
    pub fn as_input_box_mut(&mut self) -> Option<&mut InputBox> { if let WidgetKind::InputBox(b) = &mut self.kind { Some(b) } else { None } }

    /// Button payload.
    pub fn as_button(&self) -> Option<&Button> { if let WidgetKind::Button(b) = &self.kind { Some(b) } else { None } }

    /// Mutable button payload.
    pub fn as_button_mut(&mut self) -> Option<&mut Button> { if let WidgetKind::Button(b) = &mut self.kind { Some(b) } else { None } }

    /// Check box payload.
    pub fn as_check_box(&self) -> Option<&CheckBox> { if let WidgetKind::CheckBox(c) = &self.kind { Some(c) } else { None } }

    /// Mutable check box payload.
    pub fn as_check_box_mut(&mut self) -> Option<&mut CheckBox> { if let WidgetKind::CheckBox(c) = &mut self.kind { Some(c) } else { None } }

    /// Slider payload, for either orientation.
    pub fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            WidgetKind::SliderH(s) | WidgetKind::SliderV(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable slider payload.
    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match &mut self.kind {
            WidgetKind::SliderH(s) | WidgetKind::SliderV(s) => Some(s),
            _ => None,
        }
    }

    /// Drop-down payload.
    pub fn as_drop_down(&self) -> Option<&DropDownList> { if let WidgetKind::DropDownList(d) = &self.kind { Some(d) } else { None } }

    /// Mutable drop-down payload.
    pub fn as_drop_down_mut(&mut self) -> Option<&mut DropDownList> { if let WidgetKind::DropDownList(d) = &mut self.kind { Some(d) } else { None } }

    /// Surface payload.
    pub fn as_surface(&self) -> Option<&SurfaceView> { if let WidgetKind::Surface(s) = &self.kind { Some(s) } else { None } }
}
