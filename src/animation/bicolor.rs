//! Bicolor animation (Extended profile)
//!
//! First half of the strip in the main color, second half in the secondary
//! color. Odd lengths give the extra pixel to the first half.

use embassy_time::Instant;

use super::{COLOR_PREVIEW_PERIOD, Animation, RenderContext};
use crate::color::{Rgb, clear};
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct BicolorAnimation {
    throttle: Throttle,
    preview: PreviewBlink,
}

impl BicolorAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            preview: PreviewBlink::new(),
        }
    }
}

impl Animation for BicolorAnimation {
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
            let split = frame.len().div_ceil(2);
            let main = ctx.main_color();
            let secondary = ctx.secondary_color();
            for (i, led) in frame.iter_mut().enumerate() {
                *led = if i < split { main } else { secondary };
            }
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
