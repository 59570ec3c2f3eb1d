//! Per-renderer timing state.
//!
//! Each animation owns its own [`Throttle`] instances, so timing never leaks
//! between modes or between a mode's run and configure paths.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, clear, fill_solid};

/// Self-rearming fire-rate limiter
///
/// The first call always fires; afterwards a call fires only once the stored
/// deadline has passed, and re-arms it relative to `now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Throttle {
    next_fire: Option<Instant>,
}

impl Throttle {
    pub const fn new() -> Self {
        Self { next_fire: None }
    }

    /// Returns true when at least `period` has elapsed since the last fire
    pub fn fire(&mut self, now: Instant, period: Duration) -> bool {
        match self.next_fire {
            Some(deadline) if now < deadline => false,
            _ => {
                self.next_fire = Some(now + period);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.next_fire = None;
    }
}

/// Self-throttled whole-frame blinker used by the configure previews
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewBlink {
    throttle: Throttle,
    lit: bool,
}

impl PreviewBlink {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            lit: false,
        }
    }

    /// Toggle between `color` and black every `period`
    ///
    /// Returns true when a frame was produced.
    pub fn render(
        &mut self,
        now: Instant,
        period: Duration,
        frame: &mut [Rgb],
        color: Rgb,
    ) -> bool {
        if !self.throttle.fire(now, period) {
            return false;
        }
        self.lit = !self.lit;
        if self.lit {
            fill_solid(frame, color);
        } else {
            clear(frame);
        }
        true
    }

    pub fn reset(&mut self) {
        self.throttle.reset();
        self.lit = false;
    }
}
