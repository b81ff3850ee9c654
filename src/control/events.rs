//! Control events delivered to the lamp once per loop pass

/// Button state reported by the encoder service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ButtonEvent {
    /// Nothing to report
    #[default]
    Open,
    /// Contact closed, not yet classified
    Pressed,
    /// Kept pressed past the hold time
    Held,
    /// Let go after a hold
    Released,
    Clicked,
    DoubleClicked,
}

impl ButtonEvent {
    /// Numeric code used across the wasm boundary
    pub fn code(self) -> u8 {
        match self {
            ButtonEvent::Open => 0,
            ButtonEvent::Pressed => 1,
            ButtonEvent::Held => 2,
            ButtonEvent::Released => 3,
            ButtonEvent::Clicked => 4,
            ButtonEvent::DoubleClicked => 5,
        }
    }

    /// Unknown codes read as `Open`
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => ButtonEvent::Pressed,
            2 => ButtonEvent::Held,
            3 => ButtonEvent::Released,
            4 => ButtonEvent::Clicked,
            5 => ButtonEvent::DoubleClicked,
            _ => ButtonEvent::Open,
        }
    }
}

/// One poll of the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlInput {
    /// Encoder steps since the previous poll, signed
    pub delta: i16,
    pub button: ButtonEvent,
    /// Potentiometer reading, 0..=1023
    pub brightness_raw: u16,
}

impl ControlInput {
    pub fn new(delta: i16, button: ButtonEvent, brightness_raw: u16) -> Self {
        Self {
            delta,
            button,
            brightness_raw,
        }
    }

    /// Input with only a brightness reading
    pub fn idle(brightness_raw: u16) -> Self {
        Self {
            brightness_raw,
            ..Self::default()
        }
    }

    pub fn with_delta(mut self, delta: i16) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_button(mut self, button: ButtonEvent) -> Self {
        self.button = button;
        self
    }
}
