//! The animation engine - the main orchestrator.
//!
//! Owns the palette, the menu-driven configuration, the navigation state
//! machine and the current animation, and turns them into frames once per
//! tick of the host's poll loop.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationSlot, RenderContext};
use crate::color::Rgb;
use crate::config::AnimationConfig;
use crate::input::{ButtonEvent, EventReceiver};
use crate::menu::{MenuDriver, NavState};
use crate::palette::Palette;
use crate::profile::ProfileConfig;

/// Configuration for the engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub profile: ProfileConfig,
}

/// Animation engine
///
/// `MAX_PIXELS` bounds the frame buffer at compile time; the profile's
/// `pixel_count` selects how much of it is active.
pub struct Engine<'a, const MAX_PIXELS: usize, const EVENT_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
    profile: ProfileConfig,

    // Internal state
    palette: Palette,
    config: AnimationConfig,
    menu: MenuDriver,
    slot: AnimationSlot,
    frame_buffer: [Rgb; MAX_PIXELS],
}

impl<'a, const MAX_PIXELS: usize, const EVENT_CHANNEL_SIZE: usize>
    Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE>
{
    /// Create a new engine reading button events from `events`
    ///
    /// Starts in `Run` with the power-on configuration: solid white, menu
    /// closed.
    pub fn new(
        events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
        config: &EngineConfig,
    ) -> Self {
        let animation_config = AnimationConfig::default();
        Self {
            events,
            profile: config.profile,
            palette: Palette::new(),
            slot: AnimationSlot::for_mode(animation_config.mode),
            config: animation_config,
            menu: MenuDriver::new(),
            frame_buffer: [Rgb::default(); MAX_PIXELS],
        }
    }

    /// Current navigation state
    pub const fn nav_state(&self) -> NavState {
        self.menu.nav_state()
    }

    /// Menu-selected configuration
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Board description
    pub const fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    /// The fixed color table
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Feed one debounced edge event, synchronously
    ///
    /// This is the edge-detector callback target; the channel is only for
    /// callers that cannot borrow the engine directly.
    pub fn handle_event(&mut self, event: ButtonEvent, now: Instant) {
        self.apply_event(event, now);
        self.sync_slot();
    }

    /// Process one tick
    ///
    /// Drains pending button events, then dispatches to the renderer for
    /// the current navigation state. Returns the frame to push, or None
    /// when every self-throttled renderer held fire this tick.
    pub fn tick(&mut self, now: Instant, trigger_held: bool) -> Option<&[Rgb]> {
        while let Ok(event) = self.events.try_receive() {
            self.apply_event(event, now);
        }
        self.sync_slot();

        let active = self.profile.pixel_count.min(MAX_PIXELS);
        let frame = &mut self.frame_buffer[..active];
        let ctx = RenderContext {
            config: &self.config,
            palette: &self.palette,
            profile: &self.profile,
        };

        // Transition banners override every other renderer until they
        // expire with a clearing frame.
        let produced = if let Some(banner_produced) =
            self.menu.render_banner(now, frame, &self.profile)
        {
            banner_produced
        } else {
            match self.menu.nav_state() {
                NavState::Run => self.slot.render(now, frame, &ctx, trigger_held),
                NavState::SelectMode => {
                    self.menu.render_select(now, frame, &self.config, &self.profile)
                }
                NavState::ConfigureParameter => self.slot.configure(now, frame, &ctx),
            }
        };

        if produced {
            Some(&self.frame_buffer[..active])
        } else {
            None
        }
    }

    fn apply_event(&mut self, event: ButtonEvent, now: Instant) {
        let before = self.menu.nav_state();
        #[cfg(feature = "esp32-log")]
        let mode_before = self.config.mode;
        self.menu
            .handle_event(event, now, &mut self.config, &self.profile);
        let after = self.menu.nav_state();
        if before != after {
            #[cfg(feature = "esp32-log")]
            println!("menu: {:?} -> {:?}", before, after);
            // Returning to Run restarts the animation from a clean phase.
            if after == NavState::Run {
                self.slot.reset();
            }
        }
        #[cfg(feature = "esp32-log")]
        if mode_before != self.config.mode {
            println!("animation: {}", self.config.mode.as_str());
        }
    }

    /// Rebuild the animation slot when the menu switched modes
    fn sync_slot(&mut self) {
        if self.slot.mode() != self.config.mode {
            self.slot = AnimationSlot::for_mode(self.config.mode);
        }
    }
}
