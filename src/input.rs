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
use crate::Vec2i;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Pointer buttons reported by the platform, wheel ticks included.
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Right,
    /// One wheel tick away from the user.
    WheelUp,
    /// One wheel tick towards the user.
    WheelDown,
}

impl MouseButton {
    /// Returns `true` for the left button.
    pub fn is_left(self) -> bool { self == Self::Left }
    /// Returns `true` for the right button.
    pub fn is_right(self) -> bool { self == Self::Right }
    /// Returns `true` for either wheel direction.
    pub fn is_wheel(self) -> bool { matches!(self, Self::WheelUp | Self::WheelDown) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Key codes delivered with keyboard events.
pub enum KeyCode {
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Return/Enter.
    Return,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any other key, identified by the platform's raw code.
    Other(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Raw input as delivered by the platform, in surface coordinates.
pub enum InputEvent {
    /// The pointer moved to `(x, y)`, `(dx, dy)` away from its previous position.
    MouseMotion {
        /// Absolute x.
        x: i32,
        /// Absolute y.
        y: i32,
        /// Relative x movement.
        dx: i32,
        /// Relative y movement.
        dy: i32,
    },
    /// A button (or wheel tick) went down at `(x, y)`.
    MouseDown {
        /// Button pressed.
        button: MouseButton,
        /// Absolute x.
        x: i32,
        /// Absolute y.
        y: i32,
    },
    /// A button went up at `(x, y)`.
    MouseUp {
        /// Button released.
        button: MouseButton,
        /// Absolute x.
        x: i32,
        /// Absolute y.
        y: i32,
    },
    /// A key was pressed; `ch` is the printable character it produced, if any.
    KeyDown {
        /// Key code.
        key: KeyCode,
        /// Printable character produced by the key.
        ch: Option<char>,
    },
    /// A key was released.
    KeyUp {
        /// Key code.
        key: KeyCode,
    },
}

impl InputEvent {
    /// Returns the absolute pointer position carried by pointer events.
    pub fn position(&self) -> Option<Vec2i> {
        match *self {
            Self::MouseMotion { x, y, .. } | Self::MouseDown { x, y, .. } | Self::MouseUp { x, y, .. } => Some(Vec2i::new(x, y)),
            Self::KeyDown { .. } | Self::KeyUp { .. } => None,
        }
    }

    /// Returns `true` for a button-down that is not a wheel tick.
    pub fn is_press(&self) -> bool { matches!(self, Self::MouseDown { button, .. } if !button.is_wheel()) }

    /// Returns `true` for a left button release.
    pub fn is_left_release(&self) -> bool { matches!(self, Self::MouseUp { button: MouseButton::Left, .. }) }

    /// Returns `true` for key presses and releases.
    pub fn is_key(&self) -> bool { matches!(self, Self::KeyDown { .. } | Self::KeyUp { .. }) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Kind of a normalized event handed to window and widget callbacks.
pub enum EventKind {
    /// The close button of a window was clicked.
    WindowClose,
    /// A window drag finished; `x`/`y` carry the position delta.
    WindowMove,
    /// A window resize finished; `x`/`y` carry the size delta.
    WindowResize,
    /// Left click.
    ClickLeft,
    /// Middle click.
    ClickMiddle,
    /// Right click.
    ClickRight,
    /// Wheel tick away from the user.
    WheelUp,
    /// Wheel tick towards the user.
    WheelDown,
    /// Pointer motion over the target.
    MouseMotion,
    /// Key pressed while the target owns the keyboard.
    KeyDown,
    /// Key released while the target owns the keyboard.
    KeyUp,
}

impl From<MouseButton> for EventKind {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::ClickLeft,
            MouseButton::Middle => Self::ClickMiddle,
            MouseButton::Right => Self::ClickRight,
            MouseButton::WheelUp => Self::WheelUp,
            MouseButton::WheelDown => Self::WheelDown,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Normalized event delivered to callbacks.
///
/// For pointer kinds `x`/`y` are relative to the target's origin; for [`EventKind::WindowMove`] and
/// [`EventKind::WindowResize`] they hold the net delta; keyboard kinds carry `key`.
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Relative x (or x delta).
    pub x: i32,
    /// Relative y (or y delta).
    pub y: i32,
    /// Key code for keyboard kinds.
    pub key: Option<KeyCode>,
}

impl Event {
    /// Creates a pointer or window event.
    pub fn new(kind: EventKind, x: i32, y: i32) -> Self { Self { kind, x, y, key: None } }

    /// Creates a keyboard event.
    pub fn key(kind: EventKind, key: KeyCode) -> Self { Self { kind, x: 0, y: 0, key: Some(key) } }

    /// Translates a raw key event, returning `None` for pointer input.
    pub(crate) fn from_key(input: &InputEvent) -> Option<Self> {
        match *input {
            InputEvent::KeyDown { key, .. } => Some(Self::key(EventKind::KeyDown, key)),
            InputEvent::KeyUp { key } => Some(Self::key(EventKind::KeyUp, key)),
            _ => None,
        }
    }
}
