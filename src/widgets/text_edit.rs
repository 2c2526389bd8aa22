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
use crate::{InputFlags, KeyCode, TEXT_LENGTH, grid_cols, grid_rows};

/// Caret and scroll state of an input box. Text is single-byte, so indices are both byte and column offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditState {
    /// First character shown in the top-left cell.
    pub first: usize,
    /// Caret position, `0..=len`.
    pub cursor: usize,
    /// Characters per visual row.
    pub cols: usize,
    /// Characters visible at once.
    pub capacity: usize,
}

/// Returns `true` if `ch` belongs to one of the classes enabled in `flags`.
pub(crate) fn accepts(ch: char, flags: InputFlags) -> bool {
    match ch {
        '0'..='9' => flags.accepts_numbers(),
        'A'..='Z' => flags.accepts_letters() && flags.accepts_uppercase(),
        'a'..='z' => flags.accepts_letters() && flags.accepts_lowercase(),
        ' '..='/' | ':'..='@' | '['..='`' | '{'..='~' => flags.accepts_special(),
        _ => false,
    }
}

fn insert_char(buf: &mut String, cursor: &mut usize, ch: char) {
    let at = (*cursor).min(buf.len());
    buf.insert(at, ch);
    *cursor = at + 1;
}

fn delete_prev(buf: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 || *cursor > buf.len() {
        return false;
    }
    buf.remove(*cursor - 1);
    *cursor -= 1;
    true
}

fn delete_next(buf: &mut String, cursor: usize) -> bool {
    if cursor >= buf.len() {
        return false;
    }
    buf.remove(cursor);
    true
}

impl EditState {
    /// Recomputes the visible grid for an inner area of `inner_w` by `inner_h` pixels.
    pub fn fit(&mut self, inner_w: i32, inner_h: i32) {
        self.cols = grid_cols(inner_w);
        self.capacity = self.cols * grid_rows(inner_h);
    }

    fn cols(&self) -> usize { self.cols.max(1) }

    fn capacity(&self) -> usize { self.capacity.max(self.cols()) }

    pub fn rows(&self) -> usize { self.capacity() / self.cols() }

    pub fn is_multi_row(&self) -> bool { self.capacity() != self.cols() }

    /// Re-establishes `first <= cursor <= len`.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len);
        self.first = self.first.min(self.cursor);
    }

    fn scroll_back(&mut self) {
        if self.cursor < self.first {
            self.first -= 1;
        }
    }

    fn scroll_forward(&mut self) {
        if self.cursor > self.first + self.capacity() {
            self.first += 1;
        }
    }

    /// Applies one key press to `buf`; returns `true` if the text changed.
    pub fn apply_key(&mut self, buf: &mut String, key: KeyCode, ch: Option<char>, flags: InputFlags, limit: i32) -> bool {
        self.clamp(buf.len());
        let cols = self.cols();
        match key {
            KeyCode::Backspace if self.cursor > 0 => {
                let changed = delete_prev(buf, &mut self.cursor);
                self.scroll_back();
                changed
            }
            KeyCode::Delete if self.cursor < buf.len() => delete_next(buf, self.cursor),
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                self.scroll_back();
                false
            }
            KeyCode::Right if self.cursor < buf.len() => {
                self.cursor += 1;
                self.scroll_forward();
                false
            }
            KeyCode::Up if self.cursor > 0 && self.is_multi_row() => {
                self.cursor = self.cursor.saturating_sub(cols);
                if self.cursor < self.first {
                    self.first = self.first.saturating_sub(cols);
                }
                false
            }
            KeyCode::Down if self.cursor < buf.len() && self.is_multi_row() => {
                self.cursor = (self.cursor + cols).min(buf.len());
                if self.cursor > self.first + self.capacity() {
                    self.first += cols;
                }
                false
            }
            _ => match ch {
                Some(ch) if buf.len() < TEXT_LENGTH - 1 && (limit <= 0 || buf.len() < limit as usize) && accepts(ch, flags) => {
                    insert_char(buf, &mut self.cursor, ch);
                    self.scroll_forward();
                    true
                }
                _ => false,
            },
        }
    }

    /// Places the caret at visible cell `(col, row)`; `col` may equal the row width to address the row end.
    pub fn place(&mut self, len: usize, col: usize, row: usize) {
        let cols = self.cols();
        let col = col.min(cols);
        let row = row.min(self.rows() - 1);
        self.cursor = (self.first + row * cols + col).min(len);
        self.first = self.first.min(self.cursor);
    }

    /// Visible cell of the caret, or `None` when scrolled out of view.
    /// A caret at the start of a wrapped row is reported at the end of the row above.
    pub fn caret_cell(&self) -> Option<(usize, usize)> {
        if self.cursor < self.first {
            return None;
        }
        let cols = self.cols();
        let idx = self.cursor - self.first;
        let (mut col, mut row) = (idx % cols, idx / cols);
        if col == 0 && row > 0 {
            col = cols;
            row -= 1;
        }
        (row < self.rows()).then_some((col, row))
    }
}
