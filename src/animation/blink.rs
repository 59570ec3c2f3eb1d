//! Blink animation
//!
//! Main color oscillating at the selected blink period while the trigger is
//! held. The configure preview blinks white at that same period so the rate
//! can be judged without committing.

use embassy_time::Instant;

use super::{Animation, RenderContext};
use crate::color::{Rgb, WHITE, clear, fill_solid};
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct BlinkAnimation {
    throttle: Throttle,
    lit: bool,
    preview: PreviewBlink,
}

impl BlinkAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            lit: false,
            preview: PreviewBlink::new(),
        }
    }
}

impl Animation for BlinkAnimation {
    fn render(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
        trigger_held: bool,
    ) -> bool {
        if trigger_held {
            if !self.throttle.fire(now, ctx.config.blink_period()) {
                return false;
            }
            self.lit = !self.lit;
            if self.lit {
                fill_solid(frame, ctx.main_color());
            } else {
                clear(frame);
            }
        } else {
            self.lit = false;
            if !self.throttle.fire(now, ctx.refresh_period()) {
                return false;
            }
            clear(frame);
        }
        true
    }

    fn configure(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
    ) -> bool {
        self.preview
            .render(now, ctx.config.blink_period(), frame, WHITE)
    }

    fn reset(&mut self) {
        self.throttle.reset();
        self.lit = false;
        self.preview.reset();
    }
}
