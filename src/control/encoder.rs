//! Click encoder service
//!
//! `ClickEncoder::service` runs on a 1 ms tick (timer interrupt on a device,
//! a thread on a host) and is the only writer of the shared state. The main
//! loop owns an `EncoderHandle` and drains the accumulated rotation and the
//! latest button event once per pass. Both sides go through one `Mutex`, so
//! a take never observes a half-updated value.
//!
//! Pins are active low: `false` means contact closed.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::config::EncoderConfig;

use super::ButtonEvent;

/// Quadrature step for `(previous << 2) | current`, states encoded `(a << 1) | b`
const QUADRATURE: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Pin levels sampled on one tick (`true` = high = released)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinLevels {
    pub a: bool,
    pub b: bool,
    pub button: bool,
}

impl PinLevels {
    pub fn idle() -> Self {
        Self {
            a: true,
            b: true,
            button: true,
        }
    }

    fn quadrature_state(self) -> u8 {
        (((!self.a) as u8) << 1) | (!self.b) as u8
    }
}

#[derive(Debug, Default)]
struct EncoderShared {
    delta: i32,
    button: ButtonEvent,
}

fn lock(shared: &Mutex<EncoderShared>) -> MutexGuard<'_, EncoderShared> {
    // a panicked writer leaves plain integers behind, still usable
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Reader side, polled by the main loop
#[derive(Debug, Clone)]
pub struct EncoderHandle {
    shared: Arc<Mutex<EncoderShared>>,
}

impl EncoderHandle {
    /// Steps accumulated since the last call, then zero
    pub fn take_delta(&self) -> i32 {
        std::mem::take(&mut lock(&self.shared).delta)
    }

    /// Latest button event since the last call, then `Open`
    pub fn take_button(&self) -> ButtonEvent {
        std::mem::take(&mut lock(&self.shared).button)
    }
}

/// Writer side, serviced every tick
#[derive(Debug)]
pub struct ClickEncoder {
    shared: Arc<Mutex<EncoderShared>>,
    config: EncoderConfig,
    quad_state: u8,
    raw_steps: i32,
    tick: u32,
    down_ticks: u32,
    held: bool,
    /// Ticks left to wait for a second press
    click_window: Option<u32>,
}

impl ClickEncoder {
    pub fn new(config: EncoderConfig) -> (Self, EncoderHandle) {
        let shared = Arc::new(Mutex::new(EncoderShared::default()));
        let handle = EncoderHandle {
            shared: Arc::clone(&shared),
        };
        let encoder = Self {
            shared,
            config,
            quad_state: PinLevels::idle().quadrature_state(),
            raw_steps: 0,
            tick: 0,
            down_ticks: 0,
            held: false,
            click_window: None,
        };
        (encoder, handle)
    }

    /// One 1 ms tick
    pub fn service(&mut self, pins: PinLevels) {
        self.decode_rotation(pins);

        self.tick = self.tick.wrapping_add(1);
        if self.tick % self.config.button_interval.max(1) == 0 {
            self.sample_button(!pins.button);
        }
    }

    fn decode_rotation(&mut self, pins: PinLevels) {
        let current = pins.quadrature_state();
        let step = QUADRATURE[((self.quad_state << 2) | current) as usize];
        self.quad_state = current;
        if step == 0 {
            return;
        }

        self.raw_steps += step as i32;
        let per_notch = self.config.steps_per_notch.max(1) as i32;
        let notches = self.raw_steps / per_notch;
        if notches != 0 {
            self.raw_steps -= notches * per_notch;
            lock(&self.shared).delta += notches;
        }
    }

    fn sample_button(&mut self, pressed: bool) {
        let interval = self.config.button_interval.max(1);

        if pressed {
            self.down_ticks = self.down_ticks.saturating_add(interval);
            if self.down_ticks == interval {
                self.publish_if_idle(ButtonEvent::Pressed);
            }
            if !self.held && self.down_ticks >= self.config.hold_time {
                self.held = true;
                self.click_window = None;
                self.publish(ButtonEvent::Held);
            }
            return;
        }

        if self.down_ticks > 0 {
            self.down_ticks = 0;
            if self.held {
                self.held = false;
                self.publish(ButtonEvent::Released);
            } else if self.click_window.take().is_some() {
                self.publish(ButtonEvent::DoubleClicked);
            } else {
                self.click_window = Some(self.config.double_click_time);
            }
            return;
        }

        if let Some(left) = self.click_window {
            let left = left.saturating_sub(interval);
            if left == 0 {
                self.click_window = None;
                self.publish(ButtonEvent::Clicked);
            } else {
                self.click_window = Some(left);
            }
        }
    }

    fn publish(&self, event: ButtonEvent) {
        tracing::trace!(?event, "encoder button");
        lock(&self.shared).button = event;
    }

    fn publish_if_idle(&self, event: ButtonEvent) {
        let mut shared = lock(&self.shared);
        if shared.button == ButtonEvent::Open {
            shared.button = event;
        }
    }
}
