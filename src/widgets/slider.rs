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

use crate::{Color, SLIDER_THUMB, SLIDER_WHEEL_STEP};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Slider behaviour switches.
    pub struct SliderFlags : u32 {
        /// Wheel ticks over the slider change its value.
        const MOUSE_WHEEL = 2;
        /// Reverses the direction in which the value grows.
        const INVERT = 1;
        /// Nothing enabled.
        const NONE = 0;
    }
}

impl SliderFlags {
    /// Returns `true` if the direction is inverted.
    pub fn is_inverted(&self) -> bool { self.intersects(Self::INVERT) }
    /// Returns `true` if the wheel changes the value.
    pub fn uses_wheel(&self) -> bool { self.intersects(Self::MOUSE_WHEEL) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Slider palette.
pub struct SliderColors {
    /// Thumb fill.
    pub slider: Color,
    /// Thumb frame.
    pub frame: Color,
    /// Track line.
    pub line: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Track orientation.
pub enum Axis {
    /// Track runs left to right.
    Horizontal,
    /// Track runs top to bottom.
    Vertical,
}

#[derive(Clone, Debug)]
/// Value in `[0, max]` edited by dragging, clicking or wheeling.
pub struct Slider {
    value: f64,
    max: f64,
    /// Flags.
    pub flags: SliderFlags,
    /// Palette.
    pub colors: SliderColors,
}

impl Slider {
    /// Creates a slider, clamping `value` into `[0, max]`. A negative `max` becomes 0.
    pub fn new(value: f64, max: f64, flags: SliderFlags, colors: SliderColors) -> Self {
        let mut slider = Self { value: 0.0, max: 0.0, flags, colors };
        slider.set_max(max);
        slider.set_value(value);
        slider
    }

    /// Current value.
    pub fn value(&self) -> f64 { self.value }

    /// Upper bound of the value.
    pub fn max(&self) -> f64 { self.max }

    /// Sets the value, clamped into `[0, max]`.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_nan() { 0.0 } else { value.clamp(0.0, self.max) };
    }

    /// Sets the maximum and re-clamps the value.
    pub fn set_max(&mut self, max: f64) {
        self.max = if max.is_finite() && max > 0.0 { max } else { 0.0 };
        let value = self.value;
        self.set_value(value);
    }

    /// Returns `true` when the value grows with the pixel coordinate along `axis`.
    /// Vertical sliders grow upwards unless inverted.
    pub fn grows_with_pixels(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => !self.flags.is_inverted(),
            Axis::Vertical => self.flags.is_inverted(),
        }
    }

    /// Thumb offset in pixels from the start of a track `track` pixels long.
    pub fn thumb_offset(&self, axis: Axis, track: i32) -> i32 {
        if self.max <= 0.0 {
            return 0;
        }
        let travel = (track - SLIDER_THUMB).max(0) as f64;
        let frac = self.value / self.max;
        let frac = if self.grows_with_pixels(axis) { frac } else { 1.0 - frac };
        (frac * travel).round() as i32
    }

    /// Value whose thumb sits at `offset`; the inverse of [`Slider::thumb_offset`], unclamped.
    pub fn value_at(&self, axis: Axis, track: i32, offset: i32) -> f64 {
        let travel = track - SLIDER_THUMB;
        if self.max <= 0.0 || travel <= 0 {
            return 0.0;
        }
        let frac = offset as f64 / travel as f64;
        let frac = if self.grows_with_pixels(axis) { frac } else { 1.0 - frac };
        frac * self.max
    }

    /// Jumps to the value under a click `pos` pixels into the track, centering the thumb on it.
    pub fn click(&mut self, axis: Axis, track: i32, pos: i32) {
        let value = self.value_at(axis, track, pos - SLIDER_THUMB / 2);
        self.set_value(value);
    }

    /// Applies a relative drag of `delta` pixels along the track.
    pub fn drag(&mut self, axis: Axis, track: i32, delta: i32) {
        if track <= 0 {
            return;
        }
        let step = delta as f64 * self.max / track as f64;
        let value = if self.grows_with_pixels(axis) { self.value + step } else { self.value - step };
        self.set_value(value);
    }

    /// Applies one wheel tick. Wheel-up increases the value unless inverted.
    pub fn wheel(&mut self, up: bool) {
        let step = self.max * SLIDER_WHEEL_STEP;
        let increase = up != self.flags.is_inverted();
        let value = if increase { self.value + step } else { self.value - step };
        self.set_value(value);
    }
}
