//! Pixel color types and frame fill helpers.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

use crate::math8::{blend8, scale8};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Fill every pixel of the frame with one color
pub fn fill_solid(frame: &mut [Rgb], color: Rgb) {
    for led in frame {
        *led = color;
    }
}

/// Turn every pixel off
pub fn clear(frame: &mut [Rgb]) {
    fill_solid(frame, BLACK);
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub const fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale a color's brightness (0 = black, 255 = unchanged)
#[inline]
pub const fn scale_color(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}

/// Fill a linear gradient from `from` (first pixel) to `to` (last pixel)
///
/// A single-pixel frame gets `from`.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_gradient(frame: &mut [Rgb], from: Rgb, to: Rgb) {
    let last = frame.len().saturating_sub(1);
    if last == 0 {
        if let Some(led) = frame.first_mut() {
            *led = from;
        }
        return;
    }
    for (i, led) in frame.iter_mut().enumerate() {
        let amount = ((i * 255) / last) as u8;
        *led = blend_colors(from, to, amount);
    }
}
