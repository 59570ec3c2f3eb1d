//! Alternate animation
//!
//! The two configured colors alternate in time on the Compact profile
//! (whole-frame toggle at the blink period) and in space on the Extended
//! profile (even pixels main, odd pixels secondary, no oscillation).

use embassy_time::Instant;

use super::{COLOR_PREVIEW_PERIOD, Animation, RenderContext};
use crate::color::{Rgb, clear, fill_solid};
use crate::profile::DeviceProfile;
use crate::timing::{PreviewBlink, Throttle};

#[derive(Debug, Clone, Default)]
pub struct AlternateAnimation {
    throttle: Throttle,
    showing_secondary: bool,
    preview: PreviewBlink,
}

impl AlternateAnimation {
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(),
            showing_secondary: false,
            preview: PreviewBlink::new(),
        }
    }
}

impl Animation for AlternateAnimation {
    fn render(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
        trigger_held: bool,
    ) -> bool {
        if !trigger_held {
            self.showing_secondary = false;
            if !self.throttle.fire(now, ctx.refresh_period()) {
                return false;
            }
            clear(frame);
            return true;
        }

        match ctx.profile.profile {
            DeviceProfile::Compact => {
                if !self.throttle.fire(now, ctx.config.blink_period()) {
                    return false;
                }
                let color = if self.showing_secondary {
                    ctx.secondary_color()
                } else {
                    ctx.main_color()
                };
                self.showing_secondary = !self.showing_secondary;
                fill_solid(frame, color);
            }
            DeviceProfile::Extended => {
                if !self.throttle.fire(now, ctx.refresh_period()) {
                    return false;
                }
                let main = ctx.main_color();
                let secondary = ctx.secondary_color();
                for (i, led) in frame.iter_mut().enumerate() {
                    *led = if i % 2 == 0 { main } else { secondary };
                }
            }
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
        self.showing_secondary = false;
        self.preview.reset();
    }
}
