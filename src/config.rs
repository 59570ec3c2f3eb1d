//! Animation configuration - the state the menu edits and the renderers read.
//!
//! Every index field wraps at the point of increment, so readers never need
//! a bounds check.

use crate::animation::AnimationMode;
use crate::palette::PALETTE_LEN;
use crate::profile::ProfileConfig;
use embassy_time::Duration;

/// Blink phase durations selectable from the menu, in milliseconds
pub const BLINK_PERIODS_MS: [u64; 3] = [50, 100, 250];

/// Fade brightness deltas per refresh tick selectable from the menu
pub const FADE_STEPS: [u8; 3] = [4, 8, 16];

/// Largest edge width; increments wrap back to 1 past this
pub const EDGE_WIDTH_MAX: u8 = 10;

/// Which color of a two-color mode is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamSlot {
    #[default]
    Main,
    Secondary,
}

impl ParamSlot {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Main => Self::Secondary,
            Self::Secondary => Self::Main,
        }
    }
}

/// The mutable state selected through the menu
///
/// Mutated only by menu-event handlers; read by the render engine.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Palette index of the primary color, wraps modulo the palette length
    pub main_color_index: u8,
    /// Palette index of the secondary color, wraps modulo the palette length
    pub secondary_color_index: u8,
    /// Index into [`BLINK_PERIODS_MS`]
    pub blink_rate_index: u8,
    /// Index into [`FADE_STEPS`]
    pub fade_rate_index: u8,
    /// Edge pixel count in `[1, EDGE_WIDTH_MAX]`
    pub edge_width: u8,
    /// Active color slot while configuring a two-color mode
    pub sub_menu_slot: ParamSlot,
    /// Currently selected animation
    pub mode: AnimationMode,
}

impl Default for AnimationConfig {
    /// Power-on configuration: solid white with the second palette slot as
    /// the secondary color and mid-table rates
    fn default() -> Self {
        Self {
            main_color_index: 0,
            secondary_color_index: 1,
            blink_rate_index: 1,
            fade_rate_index: 1,
            edge_width: 1,
            sub_menu_slot: ParamSlot::Main,
            mode: AnimationMode::Solid,
        }
    }
}

impl AnimationConfig {
    #[allow(clippy::cast_possible_truncation)]
    const PALETTE_WRAP: u8 = PALETTE_LEN as u8;

    pub fn advance_main_color(&mut self) {
        self.main_color_index = (self.main_color_index + 1) % Self::PALETTE_WRAP;
    }

    pub fn advance_secondary_color(&mut self) {
        self.secondary_color_index =
            (self.secondary_color_index + 1) % Self::PALETTE_WRAP;
    }

    /// Advance the color addressed by the active sub-menu slot
    pub fn advance_slot_color(&mut self) {
        match self.sub_menu_slot {
            ParamSlot::Main => self.advance_main_color(),
            ParamSlot::Secondary => self.advance_secondary_color(),
        }
    }

    pub fn advance_blink_rate(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let len = BLINK_PERIODS_MS.len() as u8;
        self.blink_rate_index = (self.blink_rate_index + 1) % len;
    }

    pub fn advance_fade_rate(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let len = FADE_STEPS.len() as u8;
        self.fade_rate_index = (self.fade_rate_index + 1) % len;
    }

    /// Advance the edge width over the cycle 1, 2, .., `EDGE_WIDTH_MAX`, 1, ..
    pub fn advance_edge_width(&mut self) {
        self.edge_width = self.edge_width % EDGE_WIDTH_MAX + 1;
    }

    pub fn toggle_sub_menu_slot(&mut self) {
        self.sub_menu_slot = self.sub_menu_slot.toggled();
    }

    /// Advance to the next animation mode available on the profile, wrapping
    pub fn advance_mode(&mut self, profile: &ProfileConfig) {
        self.mode = self.mode.next(profile);
    }

    /// Selected blink phase duration
    pub const fn blink_period(&self) -> Duration {
        Duration::from_millis(
            BLINK_PERIODS_MS[self.blink_rate_index as usize % BLINK_PERIODS_MS.len()],
        )
    }

    /// Selected fade step per refresh tick
    pub const fn fade_step(&self) -> u8 {
        FADE_STEPS[self.fade_rate_index as usize % FADE_STEPS.len()]
    }
}
