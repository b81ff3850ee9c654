/// Frame-rate gate over a wrapping millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCadence {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl FrameCadence {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// True (and restarts the interval) once `interval_ms` has passed since
    /// the last accepted frame. The first call always opens.
    pub fn ready(&mut self, now_ms: u32) -> bool {
        let open = match self.last_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
        };
        if open {
            self.last_ms = Some(now_ms);
        }
        open
    }

    /// Next `ready` call opens regardless of time
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}
