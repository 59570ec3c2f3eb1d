//! Fade animation
//!
//! A brightness scalar ramps up while the trigger is held and back down when
//! released, one fade step per refresh tick, saturating at the ends. The
//! configure preview bounces white brightness at the same step.

use embassy_time::Instant;

use super::{Animation, RenderContext};
use crate::color::{Rgb, WHITE, fill_solid, scale_color};
use crate::timing::Throttle;

#[derive(Debug, Clone, Default)]
pub struct FadeAnimation {
    throttle: Throttle,
    level: u8,
    preview_throttle: Throttle,
    preview_level: u8,
    preview_falling: bool,
}

impl FadeAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            level: 0,
            preview_throttle: Throttle::new(),
            preview_level: 0,
            preview_falling: false,
        }
    }

    /// Current brightness level (0-255)
    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl Animation for FadeAnimation {
    fn render(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
        trigger_held: bool,
    ) -> bool {
        if !self.throttle.fire(now, ctx.refresh_period()) {
            return false;
        }
        let step = ctx.config.fade_step();
        self.level = if trigger_held {
            self.level.saturating_add(step)
        } else {
            self.level.saturating_sub(step)
        };
        fill_solid(frame, scale_color(ctx.main_color(), self.level));
        true
    }

    fn configure(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
    ) -> bool {
        if !self.preview_throttle.fire(now, ctx.refresh_period()) {
            return false;
        }
        let step = ctx.config.fade_step();
        if self.preview_falling {
            self.preview_level = self.preview_level.saturating_sub(step);
            if self.preview_level == 0 {
                self.preview_falling = false;
            }
        } else {
            self.preview_level = self.preview_level.saturating_add(step);
            if self.preview_level == 255 {
                self.preview_falling = true;
            }
        }
        fill_solid(frame, scale_color(WHITE, self.preview_level));
        true
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
