//! Edge animation (Extended profile)
//!
//! The first and last `edge_width` pixels take the secondary color, the
//! interior the main color. Widths beyond half the strip simply meet in the
//! middle.

use embassy_time::Instant;

use super::{COLOR_PREVIEW_PERIOD, Animation, RenderContext};
use crate::color::{Rgb, clear, fill_solid};
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct EdgeAnimation {
    throttle: Throttle,
    preview: PreviewBlink,
}

impl EdgeAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            preview: PreviewBlink::new(),
        }
    }
}

impl Animation for EdgeAnimation {
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
            let width = usize::from(ctx.config.edge_width).min(frame.len());
            let secondary = ctx.secondary_color();
            fill_solid(frame, ctx.main_color());
            for led in frame.iter_mut().take(width) {
                *led = secondary;
            }
            let len = frame.len();
            for led in frame.iter_mut().skip(len - width) {
                *led = secondary;
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
