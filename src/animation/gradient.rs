//! Gradient animation (Extended profile)
//!
//! Linear blend from the main color on the first pixel to the secondary
//! color on the last while the trigger is held.

use embassy_time::Instant;

use super::{COLOR_PREVIEW_PERIOD, Animation, RenderContext};
use crate::color::{Rgb, clear, fill_gradient};
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct GradientAnimation {
    throttle: Throttle,
    preview: PreviewBlink,
}

impl GradientAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            preview: PreviewBlink::new(),
        }
    }
}

impl Animation for GradientAnimation {
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
            fill_gradient(frame, ctx.main_color(), ctx.secondary_color());
        } else {
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
            .render(now, COLOR_PREVIEW_PERIOD, frame, ctx.slot_color())
    }

    fn reset(&mut self) {
        self.throttle.reset();
        self.preview.reset();
    }
}
