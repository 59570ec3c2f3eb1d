//! Solid fill animation
//!
//! Main color while the trigger is held, dark otherwise. No tunable
//! parameter: configuring falls back to the generic acknowledgment blink.

use embassy_time::Instant;

use super::{ACK_BLINK_PERIOD, Animation, RenderContext};
use crate::color::{Rgb, WHITE, clear, fill_solid};
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct SolidAnimation {
    throttle: Throttle,
    ack: PreviewBlink,
}

impl SolidAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            ack: PreviewBlink::new(),
        }
    }
}

impl Animation for SolidAnimation {
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
        if trigger_held {
            fill_solid(frame, ctx.main_color());
        } else {
            clear(frame);
        }
        true
    }

    fn configure(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        _ctx: &RenderContext<'_>,
    ) -> bool {
        self.ack.render(now, ACK_BLINK_PERIOD, frame, WHITE)
    }

    fn reset(&mut self) {
        self.throttle.reset();
        self.ack.reset();
    }
}
