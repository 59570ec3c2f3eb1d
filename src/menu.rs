//! Menu navigation state machine.
//!
//! Three states driven by debounced mode-button events: `Run` plays the
//! selected animation, `SelectMode` cycles through the animation set behind
//! a distinct feedback display, `ConfigureParameter` hands rendering to the
//! mode's configure preview. Every (state, event) pair is defined; pairs
//! with no meaningful handler are deliberate no-ops, so no event is ever an
//! error.

use embassy_time::{Duration, Instant};

use crate::animation::AnimationMode;
use crate::color::{Rgb, clear, fill_solid};
use crate::config::{AnimationConfig, ParamSlot};
use crate::input::ButtonEvent;
use crate::profile::{DeviceProfile, ProfileConfig};
use crate::timing::Throttle;

/// Shortest press-to-release gap still counted as a click (inclusive)
pub const SHORT_PRESS_MIN: Duration = Duration::from_millis(10);

/// Gap at which a press stops counting as a click (exclusive)
pub const SHORT_PRESS_MAX: Duration = Duration::from_millis(500);

/// How long the state-transition banners stay up
pub const MENU_BANNER_HOLD: Duration = Duration::from_millis(500);

/// Fill color of the entry banner shown when the menu opens
pub const MENU_ENTRY_COLOR: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Fill color of the exit banner shown when backing out of a menu state
pub const MENU_EXIT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Color of the SelectMode feedback display
pub const MENU_FEEDBACK_COLOR: Rgb = Rgb {
    r: 255,
    g: 120,
    b: 0,
};

/// Length of one Compact feedback cycle: the mode count is blinked out, the
/// cycle remainder stays dark
const MENU_BLINK_LOOP_MS: u64 = 1000;

/// One on or off phase within the Compact feedback cycle
const MENU_BLINK_SLOT_MS: u64 = 125;

/// Pixel stride of the Extended feedback indicator
const MENU_STRIP_STRIDE: usize = 4;

/// Navigation state; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    /// Animation playing
    #[default]
    Run,
    /// Cycling through the animation set
    SelectMode,
    /// Editing the selected mode's tunable parameter
    ConfigureParameter,
}

#[derive(Debug, Clone, Copy)]
struct Banner {
    color: Rgb,
    until: Instant,
}

/// The menu state machine and its feedback renderers
#[derive(Debug, Default)]
pub(crate) struct MenuDriver {
    state: NavState,
    pressed_at: Option<Instant>,
    banner: Option<Banner>,
    redraw: Throttle,
}

impl MenuDriver {
    pub(crate) const fn new() -> Self {
        Self {
            state: NavState::Run,
            pressed_at: None,
            banner: None,
            redraw: Throttle::new(),
        }
    }

    pub(crate) const fn nav_state(&self) -> NavState {
        self.state
    }

    /// Feed one debounced edge event into the state machine
    pub(crate) fn handle_event(
        &mut self,
        event: ButtonEvent,
        now: Instant,
        config: &mut AnimationConfig,
        profile: &ProfileConfig,
    ) {
        match event {
            ButtonEvent::ModeFall => {
                self.pressed_at = Some(now);
            }
            ButtonEvent::ModeRise => {
                let Some(pressed_at) = self.pressed_at.take() else {
                    return;
                };
                if !is_short_press(pressed_at, now) {
                    return;
                }
                match self.state {
                    NavState::Run => quick_adjust(config, profile),
                    NavState::SelectMode => config.advance_mode(profile),
                    NavState::ConfigureParameter => configure_adjust(config),
                }
            }
            ButtonEvent::ModeLongHold => {
                // A hold swallows the pending press so the eventual release
                // is not misread as a click.
                self.pressed_at = None;
                match self.state {
                    NavState::Run => {
                        self.state = NavState::SelectMode;
                        self.show_banner(MENU_ENTRY_COLOR, now);
                    }
                    NavState::SelectMode => {
                        self.state = NavState::Run;
                        self.show_banner(MENU_EXIT_COLOR, now);
                    }
                    NavState::ConfigureParameter => {
                        self.state = NavState::SelectMode;
                        self.show_banner(MENU_EXIT_COLOR, now);
                    }
                }
            }
            ButtonEvent::TriggerFall => match self.state {
                NavState::SelectMode => {
                    self.state = NavState::ConfigureParameter;
                    // Editing always starts on the main color.
                    config.sub_menu_slot = ParamSlot::Main;
                }
                NavState::ConfigureParameter => {
                    if config.mode.has_color_pair() {
                        config.toggle_sub_menu_slot();
                    }
                }
                NavState::Run => {}
            },
            // The trigger level is ambient state for the renderers, not a
            // menu input.
            ButtonEvent::TriggerRise => {}
        }
    }

    fn show_banner(&mut self, color: Rgb, now: Instant) {
        self.banner = Some(Banner {
            color,
            until: now + MENU_BANNER_HOLD,
        });
    }

    /// Render the transition banner, if one is active
    ///
    /// Returns None when no banner is up; otherwise whether a frame was
    /// produced. An expired banner emits one clearing frame and retires.
    pub(crate) fn render_banner(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        profile: &ProfileConfig,
    ) -> Option<bool> {
        let banner = self.banner?;
        if now.as_millis() >= banner.until.as_millis() {
            self.banner = None;
            clear(frame);
            return Some(true);
        }
        if !self.redraw.fire(now, profile.refresh_period()) {
            return Some(false);
        }
        fill_solid(frame, banner.color);
        Some(true)
    }

    /// Render the SelectMode feedback display
    ///
    /// Compact blinks the feedback color `index + 1` times per cycle;
    /// Extended lights every 4th pixel, `index + 1` of them, persistently.
    pub(crate) fn render_select(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        config: &AnimationConfig,
        profile: &ProfileConfig,
    ) -> bool {
        if !self.redraw.fire(now, profile.refresh_period()) {
            return false;
        }
        let index = config.mode.index();
        match profile.profile {
            DeviceProfile::Compact => {
                if count_blink_lit(now, index) {
                    fill_solid(frame, MENU_FEEDBACK_COLOR);
                } else {
                    clear(frame);
                }
            }
            DeviceProfile::Extended => {
                clear(frame);
                for k in 0..=usize::from(index) {
                    let pixel = k * MENU_STRIP_STRIDE;
                    if let Some(led) = frame.get_mut(pixel) {
                        *led = MENU_FEEDBACK_COLOR;
                    }
                }
            }
        }
        true
    }
}

/// Click classification over the press-to-release gap
///
/// Inclusive at the lower bound, exclusive at the upper: a gap of exactly
/// `SHORT_PRESS_MAX` is not a click.
fn is_short_press(pressed_at: Instant, released_at: Instant) -> bool {
    let gap = released_at.as_millis().saturating_sub(pressed_at.as_millis());
    gap >= SHORT_PRESS_MIN.as_millis() && gap < SHORT_PRESS_MAX.as_millis()
}

/// Phase of the Compact feedback blink, derived from absolute time
///
/// The cycle is split into on/off slots; `index + 1` pulses fit at the
/// front, the remainder stays dark.
fn count_blink_lit(now: Instant, index: u8) -> bool {
    let in_cycle = now.as_millis() % MENU_BLINK_LOOP_MS;
    let slot = in_cycle / MENU_BLINK_SLOT_MS;
    slot % 2 == 0 && slot < u64::from(2 * (index + 1))
}

/// Run-state shortcut: adjust the selected mode's headline parameter
/// without entering the menu
fn quick_adjust(config: &mut AnimationConfig, profile: &ProfileConfig) {
    match config.mode {
        AnimationMode::Solid | AnimationMode::Fade | AnimationMode::Blink => {
            config.advance_main_color();
        }
        AnimationMode::Alternate => match profile.profile {
            // Compact Alternate oscillates, so the rate is the headline
            // parameter; Extended Alternate is purely color-defined.
            DeviceProfile::Compact => config.advance_blink_rate(),
            DeviceProfile::Extended => config.advance_main_color(),
        },
        AnimationMode::Gradient | AnimationMode::Bicolor => {
            config.advance_main_color();
        }
        AnimationMode::Edge => config.advance_edge_width(),
    }
}

/// ConfigureParameter: advance the parameter the current mode exposes
fn configure_adjust(config: &mut AnimationConfig) {
    match config.mode {
        // Solid has nothing to tune; the click is a defined no-op.
        AnimationMode::Solid => {}
        AnimationMode::Blink => config.advance_blink_rate(),
        AnimationMode::Fade => config.advance_fade_rate(),
        AnimationMode::Alternate
        | AnimationMode::Gradient
        | AnimationMode::Bicolor
        | AnimationMode::Edge => config.advance_slot_color(),
    }
}
