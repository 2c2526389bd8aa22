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

use super::text_edit::EditState;
use crate::settings::InputBoxDefaults;
use crate::text_layout::bounded_text;
use crate::{Color, KeyRepeat};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Accepted character classes and input box behaviour.
    pub struct InputFlags : u32 {
        /// Applies the box's key repeat rate while it is being edited.
        const KEY_REPEAT = 64;
        /// Accepts printable punctuation and symbols, space included.
        const SPECIAL_CHARS = 32;
        /// Accepts lowercase letters when `LETTERS` is set.
        const LOWERCASE = 16;
        /// Accepts uppercase letters when `LETTERS` is set.
        const UPPERCASE = 8;
        /// Accepts letters.
        const LETTERS = 4;
        /// Accepts digits.
        const NUMBERS = 2;
        /// Draws the mask character instead of the text.
        const HIDE_TEXT = 1;
        /// Nothing enabled.
        const NONE = 0;
    }
}

impl InputFlags {
    /// Returns `true` if the text is masked.
    pub fn is_hidden(&self) -> bool { self.intersects(Self::HIDE_TEXT) }
    /// Returns `true` if digits are accepted.
    pub fn accepts_numbers(&self) -> bool { self.intersects(Self::NUMBERS) }
    /// Returns `true` if letters are accepted at all.
    pub fn accepts_letters(&self) -> bool { self.intersects(Self::LETTERS) }
    /// Returns `true` if uppercase letters pass the letter filter.
    pub fn accepts_uppercase(&self) -> bool { self.intersects(Self::UPPERCASE) }
    /// Returns `true` if lowercase letters pass the letter filter.
    pub fn accepts_lowercase(&self) -> bool { self.intersects(Self::LOWERCASE) }
    /// Returns `true` if punctuation and symbols are accepted.
    pub fn accepts_special(&self) -> bool { self.intersects(Self::SPECIAL_CHARS) }
    /// Returns `true` if the box applies its own key repeat rate.
    pub fn uses_key_repeat(&self) -> bool { self.intersects(Self::KEY_REPEAT) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Input box palette.
pub struct InputBoxColors {
    /// Text and mask glyphs.
    pub text: Color,
    /// Frame.
    pub frame: Color,
    /// Background while not edited.
    pub background: Color,
    /// Background while edited.
    pub background_active: Color,
    /// Caret bar.
    pub cursor: Color,
}

#[derive(Clone, Debug)]
/// Editable single-byte text field, possibly spanning several rows.
pub struct InputBox {
    text: String,
    /// Maximum text length, 0 or negative for unlimited.
    pub limit: i32,
    /// Glyph shown per character when [`InputFlags::HIDE_TEXT`] is set.
    pub mask_char: u8,
    /// Repeat rate applied while editing.
    pub key_repeat: KeyRepeat,
    /// Character classes and behaviour.
    pub flags: InputFlags,
    /// Palette.
    pub colors: InputBoxColors,
    pub(crate) edit: EditState,
}

impl InputBox {
    pub(crate) fn new(defaults: &InputBoxDefaults) -> Self {
        Self {
            text: String::new(),
            limit: defaults.limit,
            mask_char: defaults.mask_char,
            key_repeat: defaults.key_repeat,
            flags: defaults.flags,
            colors: defaults.colors,
            edit: EditState::default(),
        }
    }

    /// Current text.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the text, truncating it to the buffer capacity and clamping the caret.
    pub fn set_text(&mut self, text: &str) {
        self.text = bounded_text(text);
        self.edit.clamp(self.text.len());
    }

    /// Caret position.
    pub fn cursor(&self) -> usize { self.edit.cursor }

    /// Index of the first visible character.
    pub fn first_visible(&self) -> usize { self.edit.first }

    pub(crate) fn text_and_edit(&mut self) -> (&mut String, &mut EditState) { (&mut self.text, &mut self.edit) }
}
