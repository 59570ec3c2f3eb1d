//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller samples the clock and the trigger level, then sleeps
//! until the returned deadline between ticks.

use embassy_time::{Duration, Instant};

use crate::{Engine, OutputDriver};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Calls the engine and forwards produced frames to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, driver);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let trigger_held = trigger_pin_is_low();
///     let result = scheduler.tick(now, trigger_held);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_PIXELS: usize,
    const EVENT_CHANNEL_SIZE: usize,
> {
    output: O,
    engine: Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_PIXELS: usize, const EVENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_PIXELS, EVENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Ticks at the profile's refresh rate.
    pub fn new(engine: Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE>, driver: O) -> Self {
        let frame_duration = engine.profile().refresh_period();
        Self::with_frame_duration(engine, driver, frame_duration)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Runs the engine for this tick
    /// 3. Writes to the output driver when a frame was produced
    /// 4. Returns the deadline for the next tick
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant, trigger_held: bool) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        // Run the engine; the renderers are self-throttled, so not every
        // tick yields a frame to push
        if let Some(frame) = self.engine.tick(now, trigger_held) {
            self.output.write(frame);
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine<'a, MAX_PIXELS, EVENT_CHANNEL_SIZE> {
        &mut self.engine
    }
}
