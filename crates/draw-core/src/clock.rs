use std::fmt;

/// One rendered face of the countdown clock.
///
/// At and below zero remaining seconds the face switches to overtime:
/// the magnitude counts up and the rendered text carries a `+` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub overtime: bool,
}

impl ClockFace {
    pub fn from_seconds(remaining_s: i64) -> Self {
        let overtime = remaining_s <= 0;
        let total = remaining_s.abs();
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        Self {
            hours,
            minutes,
            seconds,
            overtime,
        }
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.overtime { "+" } else { "" };
        write!(
            f,
            "{}{}:{:02}:{:02}",
            prefix, self.hours, self.minutes, self.seconds
        )
    }
}
