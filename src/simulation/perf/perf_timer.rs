//! Per-phase stopwatch feeding `FrameStats`.
//!
//! The browser build has no monotonic `Instant`, so wasm32 reads
//! `Date.now()` through js-sys; native builds use `Instant`.

use super::frame_stats::FrameStats;

/// Part of a loop pass whose duration is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Simulation tick of the active engine
    Step,
    /// Flattening into the strip buffer and packing
    Render,
}

#[derive(Clone, Copy)]
pub(crate) struct PhaseTimer {
    phase: Phase,
    #[cfg(target_arch = "wasm32")]
    started_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl PhaseTimer {
    pub(crate) fn start(phase: Phase) -> Self {
        PhaseTimer {
            phase,
            #[cfg(target_arch = "wasm32")]
            started_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            started: std::time::Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.started_ms).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Store the elapsed time in the slot of this timer's phase
    pub(crate) fn finish(self, stats: &mut FrameStats) {
        let ms = self.elapsed_ms();
        match self.phase {
            Phase::Step => stats.step_ms = ms,
            Phase::Render => stats.render_ms = ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_fills_only_its_own_phase() {
        let mut stats = FrameStats::default();
        stats.render_ms = -1.0;
        PhaseTimer::start(Phase::Step).finish(&mut stats);
        assert!(stats.step_ms >= 0.0);
        assert_eq!(stats.render_ms, -1.0);

        PhaseTimer::start(Phase::Render).finish(&mut stats);
        assert!(stats.render_ms >= 0.0);
    }
}
