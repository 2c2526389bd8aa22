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
use std::time::Instant;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Keyboard auto-repeat timing in milliseconds.
pub struct KeyRepeat {
    /// Delay before the first repeat.
    pub delay: u32,
    /// Interval between repeats.
    pub interval: u32,
}

impl KeyRepeat {
    /// Creates a repeat setting.
    pub fn new(delay: u32, interval: u32) -> Self { Self { delay, interval } }
}

/// Host services the engine needs besides drawing.
pub trait Platform {
    /// Monotonic milliseconds, used for popup delays.
    fn ticks(&self) -> u32;
    /// Reads the platform key-repeat rate.
    fn key_repeat(&self) -> KeyRepeat { KeyRepeat::default() }
    /// Sets the platform key-repeat rate.
    fn set_key_repeat(&mut self, _repeat: KeyRepeat) {}
}

/// [`Platform`] backed by [`Instant`]; key repeat is only remembered.
pub struct StdPlatform {
    start: Instant,
    repeat: KeyRepeat,
}

impl Default for StdPlatform {
    fn default() -> Self { Self::new() }
}

impl StdPlatform {
    /// Starts the clock at zero.
    pub fn new() -> Self { Self { start: Instant::now(), repeat: KeyRepeat::default() } }
}

impl Platform for StdPlatform {
    fn ticks(&self) -> u32 { self.start.elapsed().as_millis() as u32 }
    fn key_repeat(&self) -> KeyRepeat { self.repeat }
    fn set_key_repeat(&mut self, repeat: KeyRepeat) { self.repeat = repeat; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_platform_remembers_repeat() {
        let mut platform = StdPlatform::new();
        assert_eq!(platform.key_repeat(), KeyRepeat::default());
        platform.set_key_repeat(KeyRepeat::new(350, 30));
        assert_eq!(platform.key_repeat(), KeyRepeat::new(350, 30));
    }

    #[test]
    fn std_platform_clock_is_monotonic() {
        let platform = StdPlatform::new();
        let a = platform.ticks();
        let b = platform.ticks();
        assert!(b >= a);
    }
}
