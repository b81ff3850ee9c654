//! Types exported to JavaScript

pub use crate::simulation::{FrameStats, Lamp};
