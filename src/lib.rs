#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod engine;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod menu;
pub mod palette;
pub mod profile;
pub mod timing;

pub use animation::{Animation, AnimationMode, AnimationSlot, RenderContext};
pub use config::{AnimationConfig, BLINK_PERIODS_MS, FADE_STEPS, ParamSlot};
pub use engine::{Engine, EngineConfig};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{ButtonEvent, EventChannel, EventReceiver, EventSender};
pub use menu::NavState;
pub use palette::{PALETTE_LEN, Palette};
pub use profile::{DeviceProfile, ProfileConfig};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine pushes a fully specified frame on every write; nothing is
/// carried over from the previous call.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
