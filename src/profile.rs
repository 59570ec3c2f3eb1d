//! Device profile - the compile-time board description.
//!
//! One parameterized implementation covers both device classes; the profile
//! selects which animation modes exist and which rendering variants apply.

use embassy_time::Duration;

/// Device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProfile {
    /// Single pixel or tiny display: 4 animation modes, whole-frame menu feedback
    Compact,
    /// LED strip: 7 animation modes, positional menu feedback
    Extended,
}

/// Board configuration consumed by the engine
///
/// Built once from compile-time constants and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ProfileConfig {
    pub profile: DeviceProfile,
    pub pixel_count: usize,
    pub refresh_rate_hz: u32,
}

impl ProfileConfig {
    /// Interval between refresh-driven redraws
    pub const fn refresh_period(&self) -> Duration {
        let hz = if self.refresh_rate_hz == 0 {
            1
        } else {
            self.refresh_rate_hz
        };
        Duration::from_millis(1000 / hz as u64)
    }

    /// Number of animation modes available on this profile
    pub const fn mode_count(&self) -> u8 {
        match self.profile {
            DeviceProfile::Compact => 4,
            DeviceProfile::Extended => 7,
        }
    }
}
