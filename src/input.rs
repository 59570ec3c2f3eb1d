//! Debounced button events and the channel that carries them.
//!
//! The edge detector (GPIO sampling, debouncing, long-hold detection) lives
//! outside this crate. It delivers [`ButtonEvent`]s either directly through
//! [`crate::Engine::handle_event`] or, from interrupt context, through the
//! bounded [`EventChannel`] built on `critical-section` and
//! `heapless::Deque`. The engine drains the channel at the top of each tick,
//! so queued events take effect within the tick that observes them.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A debounced button edge, as reported by the external edge detector
///
/// Falling means pressed, rising means released (active-low wiring).
/// `ModeLongHold` fires once when the mode button crosses the hold
/// threshold, then re-arms for a periodic repeat while the button stays
/// down; that cadence is the edge detector's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Trigger button pressed
    TriggerFall,
    /// Trigger button released
    TriggerRise,
    /// Mode button pressed
    ModeFall,
    /// Mode button released
    ModeRise,
    /// Mode button held past the long-press threshold
    ModeLongHold,
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ButtonEvent);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe queue of button events.
///
/// Synchronized with critical sections, so an interrupt-context edge
/// detector can push while the poll loop drains.
pub struct EventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ButtonEvent, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Try to enqueue an event.
    ///
    /// Returns `Err(TrySendError(event))` if the channel is full; the queued
    /// events are left untouched.
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Try to dequeue the oldest event.
    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for an [`EventChannel`].
///
/// Lightweight reference, freely copyable into callbacks.
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    /// Try to enqueue an event.
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }
}

/// A receiver handle for an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Try to dequeue the oldest event.
    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}
