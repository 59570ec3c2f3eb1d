//! Animation system with compile-time known mode variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the [`Animation`] trait with a run renderer and
//! a configure preview; both are self-throttled and own their timing state.

mod alternate;
mod bicolor;
mod blink;
mod edge;
mod fade;
mod gradient;
mod solid;

use embassy_time::{Duration, Instant};

pub use alternate::AlternateAnimation;
pub use bicolor::BicolorAnimation;
pub use blink::BlinkAnimation;
pub use edge::EdgeAnimation;
pub use fade::FadeAnimation;
pub use gradient::GradientAnimation;
pub use solid::SolidAnimation;

use crate::color::Rgb;
use crate::config::{AnimationConfig, ParamSlot};
use crate::palette::Palette;
use crate::profile::ProfileConfig;

/// Blink phase of the configure preview for color parameters
pub const COLOR_PREVIEW_PERIOD: Duration = Duration::from_millis(300);

/// Blink phase of the generic "nothing to configure" acknowledgment
pub const ACK_BLINK_PERIOD: Duration = Duration::from_millis(500);

const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_FADE: &str = "fade";
const MODE_NAME_BLINK: &str = "blink";
const MODE_NAME_ALTERNATE: &str = "alternate";
const MODE_NAME_GRADIENT: &str = "gradient";
const MODE_NAME_BICOLOR: &str = "bicolor";
const MODE_NAME_EDGE: &str = "edge";

/// Read-only view handed to every render/configure call
pub struct RenderContext<'a> {
    pub config: &'a AnimationConfig,
    pub palette: &'a Palette,
    pub profile: &'a ProfileConfig,
}

impl RenderContext<'_> {
    /// Primary color resolved through the palette
    pub const fn main_color(&self) -> Rgb {
        self.palette.color(self.config.main_color_index)
    }

    /// Secondary color resolved through the palette
    pub const fn secondary_color(&self) -> Rgb {
        self.palette.color(self.config.secondary_color_index)
    }

    /// Color addressed by the active sub-menu slot
    pub const fn slot_color(&self) -> Rgb {
        match self.config.sub_menu_slot {
            ParamSlot::Main => self.main_color(),
            ParamSlot::Secondary => self.secondary_color(),
        }
    }

    pub const fn refresh_period(&self) -> Duration {
        self.profile.refresh_period()
    }
}

pub trait Animation {
    /// Render one run-state frame
    ///
    /// Self-throttled: returns false without touching the frame unless the
    /// animation's own tick interval has elapsed.
    fn render(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
        trigger_held: bool,
    ) -> bool;

    /// Render one parameter-preview frame while this mode is being configured
    fn configure(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
    ) -> bool;

    /// Reset timing state
    fn reset(&mut self) {}
}

/// Known animation modes, in menu order
///
/// The menu advances by incrementing the index modulo the profile's mode
/// count, so ordering and contiguity matter. Gradient, Bicolor and Edge only
/// exist on the Extended profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationMode {
    Solid = 0,
    Fade = 1,
    Blink = 2,
    Alternate = 3,
    Gradient = 4,
    Bicolor = 5,
    Edge = 6,
}

impl AnimationMode {
    /// Position in the menu order
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`AnimationMode::index`]; out-of-range values fall back to
    /// Solid (unreachable for indices produced by `next`)
    pub const fn from_index(value: u8) -> Self {
        match value {
            1 => Self::Fade,
            2 => Self::Blink,
            3 => Self::Alternate,
            4 => Self::Gradient,
            5 => Self::Bicolor,
            6 => Self::Edge,
            _ => Self::Solid,
        }
    }

    /// The next mode in the profile's member set, wrapping
    pub const fn next(self, profile: &ProfileConfig) -> Self {
        Self::from_index((self.index() + 1) % profile.mode_count())
    }

    /// Whether the mode carries both a main and a secondary color
    pub const fn has_color_pair(self) -> bool {
        matches!(
            self,
            Self::Alternate | Self::Gradient | Self::Bicolor | Self::Edge
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => MODE_NAME_SOLID,
            Self::Fade => MODE_NAME_FADE,
            Self::Blink => MODE_NAME_BLINK,
            Self::Alternate => MODE_NAME_ALTERNATE,
            Self::Gradient => MODE_NAME_GRADIENT,
            Self::Bicolor => MODE_NAME_BICOLOR,
            Self::Edge => MODE_NAME_EDGE,
        }
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Single color fill while the trigger is held
    Solid(SolidAnimation),
    /// Brightness ramp following the trigger
    Fade(FadeAnimation),
    /// Single color on/off oscillation
    Blink(BlinkAnimation),
    /// Two colors alternating in time (Compact) or space (Extended)
    Alternate(AlternateAnimation),
    /// Linear two-color gradient across the strip
    Gradient(GradientAnimation),
    /// Strip split in half between the two colors
    Bicolor(BicolorAnimation),
    /// Secondary color on the strip ends, main color inside
    Edge(EdgeAnimation),
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::Solid(SolidAnimation::new())
    }
}

impl AnimationSlot {
    /// Build the slot for a mode with fresh timing state
    pub fn for_mode(mode: AnimationMode) -> Self {
        match mode {
            AnimationMode::Solid => Self::Solid(SolidAnimation::new()),
            AnimationMode::Fade => Self::Fade(FadeAnimation::new()),
            AnimationMode::Blink => Self::Blink(BlinkAnimation::new()),
            AnimationMode::Alternate => Self::Alternate(AlternateAnimation::new()),
            AnimationMode::Gradient => Self::Gradient(GradientAnimation::new()),
            AnimationMode::Bicolor => Self::Bicolor(BicolorAnimation::new()),
            AnimationMode::Edge => Self::Edge(EdgeAnimation::new()),
        }
    }

    /// The mode this slot renders
    pub const fn mode(&self) -> AnimationMode {
        match self {
            Self::Solid(_) => AnimationMode::Solid,
            Self::Fade(_) => AnimationMode::Fade,
            Self::Blink(_) => AnimationMode::Blink,
            Self::Alternate(_) => AnimationMode::Alternate,
            Self::Gradient(_) => AnimationMode::Gradient,
            Self::Bicolor(_) => AnimationMode::Bicolor,
            Self::Edge(_) => AnimationMode::Edge,
        }
    }

    /// Render the current animation's run frame
    pub fn render(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
        trigger_held: bool,
    ) -> bool {
        match self {
            Self::Solid(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Fade(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Blink(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Alternate(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Gradient(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Bicolor(anim) => anim.render(now, frame, ctx, trigger_held),
            Self::Edge(anim) => anim.render(now, frame, ctx, trigger_held),
        }
    }

    /// Render the current animation's configure preview
    pub fn configure(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        ctx: &RenderContext<'_>,
    ) -> bool {
        match self {
            Self::Solid(anim) => anim.configure(now, frame, ctx),
            Self::Fade(anim) => anim.configure(now, frame, ctx),
            Self::Blink(anim) => anim.configure(now, frame, ctx),
            Self::Alternate(anim) => anim.configure(now, frame, ctx),
            Self::Gradient(anim) => anim.configure(now, frame, ctx),
            Self::Bicolor(anim) => anim.configure(now, frame, ctx),
            Self::Edge(anim) => anim.configure(now, frame, ctx),
        }
    }

    /// Reset the animation's timing state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(anim) => Animation::reset(anim),
            Self::Fade(anim) => Animation::reset(anim),
            Self::Blink(anim) => Animation::reset(anim),
            Self::Alternate(anim) => Animation::reset(anim),
            Self::Gradient(anim) => Animation::reset(anim),
            Self::Bicolor(anim) => Animation::reset(anim),
            Self::Edge(anim) => Animation::reset(anim),
        }
    }
}
