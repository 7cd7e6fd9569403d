use log::debug;

use crate::clock::ClockFace;
use crate::config::DrawConfig;
use crate::pacing::StonePacing;
use crate::progress::EndProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Normal,
    /// Under fifteen minutes remaining.
    Warning,
    /// At or below zero.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPhase {
    Running,
    /// The countdown hit zero: progress hidden, zero banner shown.
    Expired,
    /// The configured maximum elapsed time was reached: only the max
    /// banner remains, superseding everything else.
    Capped,
}

/// Everything the frontend needs to draw one second of the display.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub remaining_s: i64,
    pub clock: ClockFace,
    pub band: ColorBand,
    pub phase: DisplayPhase,
    pub stone_index: usize,
    pub stones_visible: bool,
    /// Ends whose displayed fill moved this tick, with their new percentage.
    pub changed_ends: Vec<(usize, i64)>,
    /// Set only on the tick where the integer elapsed minute changed.
    pub elapsed_min: Option<i64>,
}

/// Countdown state machine, advanced exactly once per second.
pub struct CountdownTimer {
    duration_s: i64,
    remaining_s: i64,
    max_s: Option<i64>,
    pacing: StonePacing,
    progress: EndProgress,
    last_elapsed_min: i64,
}

impl CountdownTimer {
    pub fn new(config: &DrawConfig) -> Self {
        let remaining_s = config.duration_s() - config.elapsed_offset_s();
        Self {
            duration_s: config.duration_s(),
            // One ahead: the first tick lands exactly on the configured value.
            remaining_s: remaining_s + 1,
            max_s: config.max_s(),
            pacing: StonePacing::new(config.num_stones, config.s_per_stone()),
            progress: EndProgress::new(
                config.total_ends,
                config.s_per_end(),
                config.progress_update_percentage,
            ),
            last_elapsed_min: (config.duration_s() - remaining_s) / 60,
        }
    }

    pub fn tick(&mut self) -> TickOutput {
        self.remaining_s -= 1;
        let remaining_s = self.remaining_s;
        let elapsed_s = self.duration_s - remaining_s;

        let band = if remaining_s <= 0 {
            ColorBand::Expired
        } else if remaining_s < 900 {
            ColorBand::Warning
        } else {
            ColorBand::Normal
        };

        let stone_index = self.pacing.stone_index(elapsed_s);

        let elapsed_min_now = elapsed_s / 60;
        let elapsed_min = if elapsed_min_now != self.last_elapsed_min {
            self.last_elapsed_min = elapsed_min_now;
            debug!("elapsed minutes now {elapsed_min_now}");
            Some(elapsed_min_now)
        } else {
            None
        };

        let phase = if self.max_s.is_some_and(|max_s| elapsed_s >= max_s) {
            DisplayPhase::Capped
        } else if remaining_s <= 0 {
            DisplayPhase::Expired
        } else {
            DisplayPhase::Running
        };

        let changed_ends = if phase == DisplayPhase::Running {
            self.progress.update(elapsed_s)
        } else {
            Vec::new()
        };

        TickOutput {
            remaining_s,
            clock: ClockFace::from_seconds(remaining_s),
            band,
            phase,
            stone_index,
            stones_visible: remaining_s > 0,
            changed_ends,
            elapsed_min,
        }
    }

    pub fn pacing(&self) -> &StonePacing {
        &self.pacing
    }

    pub fn progress(&self) -> &EndProgress {
        &self.progress
    }
}
