//! Control surface: encoder service, control events, mode controller

pub mod encoder;
pub mod events;
pub mod mode;

pub use encoder::{ClickEncoder, EncoderHandle, PinLevels};
pub use events::{ButtonEvent, ControlInput};
pub use mode::{Adjustment, ModeController};
