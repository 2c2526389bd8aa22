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
use crate::{
    ButtonColors, CheckBoxColors, Color, DropDownColors, DropDownFlags, InputBoxColors, InputFlags, KeyRepeat, SliderColors, SliderFlags, TextColors,
    WindowColors, WindowFlags, color,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Values copied into every new window.
pub struct WindowDefaults {
    /// Minimum width.
    pub min_w: i32,
    /// Minimum height.
    pub min_h: i32,
    /// Maximum width, 0 for unbounded.
    pub max_w: i32,
    /// Maximum height, 0 for unbounded.
    pub max_h: i32,
    /// Flags.
    pub flags: WindowFlags,
    /// Close button glyph.
    pub close_char: u8,
    /// Widget area margin.
    pub margin: i32,
    /// Palette.
    pub colors: WindowColors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Values copied into every new input box.
pub struct InputBoxDefaults {
    /// Glyph drawn instead of each character when text is hidden.
    pub mask_char: u8,
    /// Character limit, 0 or negative for unlimited.
    pub limit: i32,
    /// Key repeat applied while editing.
    pub key_repeat: KeyRepeat,
    /// Accepted character classes and behaviour.
    pub flags: InputFlags,
    /// Palette.
    pub colors: InputBoxColors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Values copied into every new slider.
pub struct SliderDefaults {
    /// Flags.
    pub flags: SliderFlags,
    /// Palette.
    pub colors: SliderColors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Values copied into every new drop-down list.
pub struct DropDownDefaults {
    /// Flags.
    pub flags: DropDownFlags,
    /// Palette.
    pub colors: DropDownColors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Values used for popup windows and hover delays.
pub struct PopupDefaults {
    /// Hover time before a popup opens, in milliseconds.
    pub delay: u32,
    /// Popup frame color.
    pub frame: Color,
    /// Popup background color.
    pub background: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Prototype values applied to windows and widgets when they are created.
///
/// Changing it never touches entities that already exist.
pub struct Settings {
    /// Window defaults.
    pub window: WindowDefaults,
    /// Text widget colors.
    pub text: TextColors,
    /// Input box defaults.
    pub input_box: InputBoxDefaults,
    /// Button colors.
    pub button: ButtonColors,
    /// Check box colors.
    pub check_box: CheckBoxColors,
    /// Slider defaults.
    pub slider: SliderDefaults,
    /// Drop-down defaults.
    pub drop_down: DropDownDefaults,
    /// Popup defaults.
    pub popup: PopupDefaults,
}

impl Settings {
    /// Restores the factory values.
    pub fn reset(&mut self) { *self = Self::default(); }
}

impl Default for Settings {
    fn default() -> Self {
        let text = color(180, 180, 180, 255);
        let frame = color(80, 80, 80, 200);
        let background = color(50, 50, 50, 150);
        let dark = color(20, 20, 20, 150);
        Self {
            window: WindowDefaults {
                min_w: 80,
                min_h: 50,
                max_w: 0,
                max_h: 0,
                flags: WindowFlags::TITLE_BAR | WindowFlags::CLOSE_BUTTON | WindowFlags::VISIBLE | WindowFlags::MOVEABLE,
                close_char: b'X',
                margin: 8,
                colors: WindowColors {
                    frame,
                    background,
                    resize_mark: color(80, 80, 80, 255),
                    title_text: text,
                    title_bar_top: color(81, 81, 81, 255),
                    title_bar_bottom: color(50, 50, 50, 255),
                    close_button_text: text,
                    close_button_top: color(81, 81, 81, 255),
                    close_button_bottom: color(50, 50, 50, 255),
                },
            },
            text: TextColors { text },
            input_box: InputBoxDefaults {
                mask_char: b'*',
                limit: 0,
                key_repeat: KeyRepeat::new(350, 30),
                flags: InputFlags::all() - InputFlags::HIDE_TEXT,
                colors: InputBoxColors {
                    text,
                    frame,
                    background,
                    background_active: dark,
                    cursor: color(200, 200, 200, 255),
                },
            },
            button: ButtonColors {
                text,
                frame,
                top: color(100, 100, 100, 255),
                bottom: color(80, 80, 80, 255),
            },
            check_box: CheckBoxColors { mark: text, frame, background: dark },
            slider: SliderDefaults {
                flags: SliderFlags::MOUSE_WHEEL,
                colors: SliderColors { slider: dark, frame, line: frame },
            },
            drop_down: DropDownDefaults {
                flags: DropDownFlags::MOUSE_WHEEL,
                colors: DropDownColors {
                    text,
                    frame,
                    background,
                    list: dark,
                    highlight: frame,
                    arrow: text,
                },
            },
            popup: PopupDefaults { delay: 900, frame, background },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_input_flags_exclude_hidden_text() {
        let settings = Settings::default();
        let flags = settings.input_box.flags;
        assert!(!flags.is_hidden());
        assert!(flags.accepts_numbers() && flags.accepts_letters() && flags.accepts_special());
        assert!(flags.uses_key_repeat());
        assert_eq!(settings.input_box.key_repeat, KeyRepeat::new(350, 30));
    }

    #[test]
    fn reset_restores_factory() {
        let mut settings = Settings::default();
        settings.window.margin = 2;
        settings.popup.delay = 10;
        settings.slider.flags = SliderFlags::INVERT;
        settings.reset();
        assert_eq!(settings, Settings::default());
    }
}
