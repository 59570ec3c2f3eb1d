//! Fixed color palette shared by every animation.
//!
//! Slot 0 is white; slots 1-16 sweep the hue circle in steps of 16 at full
//! saturation and value. Built once, read-only afterwards.

use crate::color::{Hsv, Rgb, WHITE, hsv2rgb};

/// Number of palette entries (white + 16 hues)
pub const PALETTE_LEN: usize = 17;

/// Hue increment between consecutive colored slots (256 / 16)
const HUE_STEP: u8 = 16;

/// Fixed ordered color table, indexed by a wrapping integer
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Build the palette: white, then 16 evenly spaced hues
    pub fn new() -> Self {
        let mut colors = [WHITE; PALETTE_LEN];
        for (i, slot) in colors.iter_mut().enumerate().skip(1) {
            #[allow(clippy::cast_possible_truncation)]
            let hue = (i as u8 - 1) * HUE_STEP;
            *slot = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 255,
            });
        }
        Self { colors }
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        PALETTE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Look up a color by index
    ///
    /// Indices wrap modulo the palette length, so any `u8` is a valid input.
    pub const fn color(&self, index: u8) -> Rgb {
        self.colors[index as usize % PALETTE_LEN]
    }
}
